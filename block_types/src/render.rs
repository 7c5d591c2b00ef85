//! Render events: the output contract to display hosts

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::TokenColor;

/// The content of a rendered token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenText {
    Word(String),
    Number(u32),
}

impl fmt::Display for TokenText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenText::Word(word) => f.write_str(word),
            TokenText::Number(value) => write!(f, "{value}"),
        }
    }
}

/// One render event emitted by the block interpreter.
///
/// A conforming display host draws each token followed by a single
/// separator space. `color: None` means the current attribute is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderEvent {
    Token {
        color: Option<TokenColor>,
        text: TokenText,
    },
    LineBreak,
}

/// Sink interface for render events.
pub trait RenderSink {
    fn emit(&mut self, event: RenderEvent);
}

/// A sink that records events for later inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLog {
    events: Vec<RenderEvent>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl RenderSink for RenderLog {
    fn emit(&mut self, event: RenderEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_token_text_display() {
        assert_eq!(TokenText::Word("dup".into()).to_string(), "dup");
        assert_eq!(TokenText::Number(42).to_string(), "42");
    }

    #[test]
    fn test_render_log_records_in_order() {
        let mut log = RenderLog::new();
        log.emit(RenderEvent::Token {
            color: Some(TokenColor::Red),
            text: TokenText::Word("main".into()),
        });
        log.emit(RenderEvent::LineBreak);
        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[1], RenderEvent::LineBreak);
    }
}
