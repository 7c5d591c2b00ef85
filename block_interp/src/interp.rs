//! Scanning and rendering one block

use block_types::{Rendering, RenderEvent, RenderSink, TokenText};
use serde::{Deserialize, Serialize};
use word_codec::unpack;

use crate::store::{BlockError, CellStore};

/// How a block scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockEnd {
    /// A zero cell terminated the block early.
    Sentinel,
    /// All 256 cells were interpreted.
    WindowEnd,
}

/// Summary of one `run_block` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockOutcome {
    /// Tokens emitted (extension cells are not counted).
    pub tokens: usize,
    /// Definitions encountered (tag-3 cells).
    pub definitions: usize,
    pub end: BlockEnd,
}

/// Renders block `n` of the store into the sink.
///
/// The scan visits the block's cells in order and stops at the first zero
/// cell. Each remaining cell becomes one render event: numeric tags emit
/// the cell's literal value, every other tag emits the unpacked word,
/// with the attribute class the tag selects. A definition cell after the
/// first emits a line break before its token.
///
/// The definition counter is session state scoped to this call; repeated
/// calls on the same block render identically.
pub fn run_block(
    store: &CellStore<'_>,
    n: usize,
    sink: &mut dyn RenderSink,
) -> Result<BlockOutcome, BlockError> {
    let window = store.block(n)?;

    let mut tokens = 0;
    let mut definitions = 0;

    for &cell in window {
        if cell.is_terminator() {
            return Ok(BlockOutcome {
                tokens,
                definitions,
                end: BlockEnd::Sentinel,
            });
        }

        let tag = cell.tag();
        let text = match tag.rendering() {
            Rendering::Skip => continue,
            Rendering::Number => TokenText::Number(cell.literal()),
            Rendering::Text => TokenText::Word(unpack(cell)),
        };

        if tag.starts_definition() {
            if definitions > 0 {
                sink.emit(RenderEvent::LineBreak);
            }
            definitions += 1;
        }

        sink.emit(RenderEvent::Token {
            color: tag.color(),
            text,
        });
        tokens += 1;
    }

    Ok(BlockOutcome {
        tokens,
        definitions,
        end: BlockEnd::WindowEnd,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::BLOCK_CELLS;
    use block_types::{Cell, RenderLog, Tag, TokenColor};
    use word_codec::pack;

    fn block_image(cells: &[Cell]) -> Vec<Cell> {
        let mut image = vec![Cell::TERMINATOR; BLOCK_CELLS];
        image[..cells.len()].copy_from_slice(cells);
        image
    }

    fn word_cell(word: &str, tag: Tag) -> Cell {
        pack(word).unwrap().with_tag(tag)
    }

    fn number_cell(value: u32, tag: Tag) -> Cell {
        Cell::new(value << 5).with_tag(tag)
    }

    #[test]
    fn test_sentinel_stops_scan() {
        let image = block_image(&[
            word_cell("dup", Tag::YellowWord),
            Cell::TERMINATOR,
            word_cell("drop", Tag::YellowWord),
        ]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        let outcome = run_block(&store, 0, &mut log).unwrap();
        assert_eq!(outcome.end, BlockEnd::Sentinel);
        assert_eq!(outcome.tokens, 1);
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.events()[0],
            RenderEvent::Token {
                color: Some(TokenColor::Yellow),
                text: TokenText::Word("dup".into()),
            }
        );
    }

    #[test]
    fn test_full_window_without_sentinel() {
        let image = vec![word_cell("nop", Tag::GreenWord); BLOCK_CELLS];
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        let outcome = run_block(&store, 0, &mut log).unwrap();
        assert_eq!(outcome.end, BlockEnd::WindowEnd);
        assert_eq!(outcome.tokens, BLOCK_CELLS);
    }

    #[test]
    fn test_numeric_tags_render_literals() {
        let image = block_image(&[
            number_cell(2, Tag::YellowNumber),
            number_cell(40, Tag::GreenNumber),
            number_cell(0, Tag::WhiteNumber),
        ]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        run_block(&store, 0, &mut log).unwrap();
        assert_eq!(
            log.events(),
            &[
                RenderEvent::Token {
                    color: Some(TokenColor::Yellow),
                    text: TokenText::Number(2),
                },
                RenderEvent::Token {
                    color: Some(TokenColor::Green),
                    text: TokenText::Number(40),
                },
                RenderEvent::Token {
                    color: Some(TokenColor::White),
                    text: TokenText::Number(0),
                },
            ]
        );
    }

    #[test]
    fn test_first_definition_renders_inline() {
        let image = block_image(&[word_cell("main", Tag::RedWord)]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        let outcome = run_block(&store, 0, &mut log).unwrap();
        assert_eq!(outcome.definitions, 1);
        assert_eq!(log.len(), 1);
        assert!(matches!(log.events()[0], RenderEvent::Token { .. }));
    }

    #[test]
    fn test_second_definition_breaks_line() {
        let image = block_image(&[
            word_cell("main", Tag::RedWord),
            word_cell("dup", Tag::GreenWord),
            word_cell("loop", Tag::RedWord),
        ]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        let outcome = run_block(&store, 0, &mut log).unwrap();
        assert_eq!(outcome.definitions, 2);
        assert_eq!(log.len(), 4);
        assert_eq!(log.events()[2], RenderEvent::LineBreak);
        assert_eq!(
            log.events()[3],
            RenderEvent::Token {
                color: Some(TokenColor::Red),
                text: TokenText::Word("loop".into()),
            }
        );
    }

    #[test]
    fn test_definition_counter_resets_between_calls() {
        let image = block_image(&[word_cell("main", Tag::RedWord)]);
        let store = CellStore::new(&image);
        let mut first = RenderLog::new();
        let mut second = RenderLog::new();
        run_block(&store, 0, &mut first).unwrap();
        run_block(&store, 0, &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_extension_cells_are_skipped() {
        let image = block_image(&[
            word_cell("alpha", Tag::YellowWord),
            word_cell("bet", Tag::Extension),
            word_cell("gamma", Tag::CyanWord),
        ]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        let outcome = run_block(&store, 0, &mut log).unwrap();
        assert_eq!(outcome.tokens, 2);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_reserved_tag_degrades_to_plain_text() {
        let image = block_image(&[word_cell("odd", Tag::Reserved13)]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        run_block(&store, 0, &mut log).unwrap();
        assert_eq!(
            log.events()[0],
            RenderEvent::Token {
                color: None,
                text: TokenText::Word("odd".into()),
            }
        );
    }

    #[test]
    fn test_out_of_range_block() {
        let image = block_image(&[]);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        assert_eq!(
            run_block(&store, 3, &mut log),
            Err(BlockError::OutOfRangeBlock {
                block: 3,
                blocks_available: 1
            })
        );
        assert!(log.is_empty());
    }

    #[test]
    fn test_second_block_scans_its_own_window() {
        let mut image = vec![Cell::TERMINATOR; BLOCK_CELLS * 2];
        image[0] = word_cell("zero", Tag::YellowWord);
        image[BLOCK_CELLS] = word_cell("one", Tag::GreenWord);
        let store = CellStore::new(&image);
        let mut log = RenderLog::new();
        run_block(&store, 1, &mut log).unwrap();
        assert_eq!(
            log.events(),
            &[RenderEvent::Token {
                color: Some(TokenColor::Green),
                text: TokenText::Word("one".into()),
            }]
        );
    }
}
