//! ANSI terminal rendering of block tokens

use block_types::{RenderEvent, RenderSink, TokenColor};

/// Render sink that formats tokens with ANSI SGR color codes.
///
/// Each token is followed by a single separator space, matching the
/// display contract of the block interpreter. Tokens with no color keep
/// whatever attribute is already active.
#[derive(Debug, Default)]
pub struct AnsiRenderer {
    out: String,
}

impl AnsiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered text, with attributes reset at the end.
    pub fn finish(mut self) -> String {
        if !self.out.is_empty() {
            self.out.push_str("\x1b[0m");
        }
        self.out
    }

    fn sgr(color: TokenColor) -> &'static str {
        match color {
            TokenColor::Red => "\x1b[31m",
            TokenColor::Green => "\x1b[32m",
            TokenColor::Yellow => "\x1b[33m",
            TokenColor::Magenta => "\x1b[35m",
            TokenColor::Cyan => "\x1b[36m",
            TokenColor::White => "\x1b[37m",
        }
    }
}

impl RenderSink for AnsiRenderer {
    fn emit(&mut self, event: RenderEvent) {
        match event {
            RenderEvent::Token { color, text } => {
                if let Some(color) = color {
                    self.out.push_str(Self::sgr(color));
                }
                self.out.push_str(&text.to_string());
                self.out.push(' ');
            }
            RenderEvent::LineBreak => self.out.push('\n'),
        }
    }
}
