//! The closed tag enumeration and its display semantics

use serde::{Deserialize, Serialize};

/// Display attribute class selected by a tag.
///
/// These correspond to the VGA foreground colors the original boot-level
/// editor used for each semantic class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenColor {
    Yellow,
    Red,
    Green,
    Cyan,
    White,
    Magenta,
}

/// How a cell's content is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rendering {
    /// The cell produces no token; interpretation continues.
    Skip,
    /// The payload is prefix-coded packed text.
    Text,
    /// The payload is an unsigned numeric literal.
    Number,
}

/// The 4-bit semantic tag carried in cell bits [0,4).
///
/// This is the on-image format: the numeric values and their color and
/// text-vs-numeric mapping must not change, or existing block images
/// become unreadable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tag {
    /// Continuation of the previous word; skipped for rendering.
    Extension = 0,
    YellowWord = 1,
    YellowNumber = 2,
    /// Starts a new definition; rendered on a fresh line after the first.
    RedWord = 3,
    GreenWord = 4,
    GreenNumber = 5,
    GreenLongNumber = 6,
    CyanWord = 7,
    YellowLongNumber = 8,
    WhiteWord = 9,
    WhiteCapWord = 10,
    WhiteAllCapsWord = 11,
    MagentaWord = 12,
    Reserved13 = 13,
    Reserved14 = 14,
    WhiteNumber = 15,
}

impl Tag {
    /// Decodes a tag from the low 4 bits of a cell. Total: every 4-bit
    /// value maps to a variant.
    pub fn from_bits(bits: u8) -> Tag {
        match bits & 0xF {
            0 => Tag::Extension,
            1 => Tag::YellowWord,
            2 => Tag::YellowNumber,
            3 => Tag::RedWord,
            4 => Tag::GreenWord,
            5 => Tag::GreenNumber,
            6 => Tag::GreenLongNumber,
            7 => Tag::CyanWord,
            8 => Tag::YellowLongNumber,
            9 => Tag::WhiteWord,
            10 => Tag::WhiteCapWord,
            11 => Tag::WhiteAllCapsWord,
            12 => Tag::MagentaWord,
            13 => Tag::Reserved13,
            14 => Tag::Reserved14,
            _ => Tag::WhiteNumber,
        }
    }

    /// The attribute class this tag selects, or `None` when the current
    /// attribute is left unchanged (extension and reserved tags).
    pub fn color(self) -> Option<TokenColor> {
        match self {
            Tag::Extension => None,
            Tag::YellowWord | Tag::YellowNumber | Tag::YellowLongNumber => {
                Some(TokenColor::Yellow)
            }
            Tag::RedWord => Some(TokenColor::Red),
            Tag::GreenWord | Tag::GreenNumber | Tag::GreenLongNumber => Some(TokenColor::Green),
            Tag::CyanWord => Some(TokenColor::Cyan),
            Tag::WhiteWord | Tag::WhiteCapWord | Tag::WhiteAllCapsWord | Tag::WhiteNumber => {
                Some(TokenColor::White)
            }
            Tag::MagentaWord => Some(TokenColor::Magenta),
            Tag::Reserved13 | Tag::Reserved14 => None,
        }
    }

    /// Text-vs-numeric rendering rule for this tag.
    ///
    /// Reserved tags fall back to text rendering rather than failing, so
    /// malformed or forward-compatible tags never abort a block.
    pub fn rendering(self) -> Rendering {
        match self {
            Tag::Extension => Rendering::Skip,
            Tag::YellowNumber
            | Tag::GreenNumber
            | Tag::GreenLongNumber
            | Tag::YellowLongNumber
            | Tag::WhiteNumber => Rendering::Number,
            Tag::YellowWord
            | Tag::RedWord
            | Tag::GreenWord
            | Tag::CyanWord
            | Tag::WhiteWord
            | Tag::WhiteCapWord
            | Tag::WhiteAllCapsWord
            | Tag::MagentaWord
            | Tag::Reserved13
            | Tag::Reserved14 => Rendering::Text,
        }
    }

    /// True for the tag that opens a new definition (tag 3).
    pub fn starts_definition(self) -> bool {
        self == Tag::RedWord
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits_total() {
        for bits in 0u8..16 {
            assert_eq!(Tag::from_bits(bits) as u8, bits);
        }
        // Bits above the tag field are masked off.
        assert_eq!(Tag::from_bits(0x13), Tag::RedWord);
    }

    #[test]
    fn test_numeric_tags() {
        for bits in 0u8..16 {
            let numeric = matches!(bits, 2 | 5 | 6 | 8 | 15);
            assert_eq!(
                Tag::from_bits(bits).rendering() == Rendering::Number,
                numeric,
                "tag {bits}"
            );
        }
    }

    #[test]
    fn test_extension_skipped() {
        assert_eq!(Tag::Extension.rendering(), Rendering::Skip);
        assert_eq!(Tag::Extension.color(), None);
    }

    #[test]
    fn test_reserved_tags_render_as_plain_text() {
        assert_eq!(Tag::Reserved13.rendering(), Rendering::Text);
        assert_eq!(Tag::Reserved14.rendering(), Rendering::Text);
        assert_eq!(Tag::Reserved13.color(), None);
        assert_eq!(Tag::Reserved14.color(), None);
    }

    #[test]
    fn test_definition_tag() {
        assert!(Tag::RedWord.starts_definition());
        assert!(!Tag::YellowWord.starts_definition());
    }
}
