//! Loading raw cell images from disk

use std::fs;
use std::path::Path;

use block_types::Cell;
use thiserror::Error;

/// Errors from loading a cell image.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("image length {bytes} bytes is not a whole number of cells")]
    BadLength { bytes: usize },
}

/// Reads a block image file into cells.
///
/// The on-disk format is the flat cell array itself: little-endian u32
/// cells, no header. The file length must be a multiple of 4.
pub fn load_image(path: &Path) -> Result<Vec<Cell>, ImageError> {
    let bytes = fs::read(path)?;
    if bytes.len() % 4 != 0 {
        return Err(ImageError::BadLength { bytes: bytes.len() });
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| Cell::new(u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_little_endian_cells() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0x52, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10])
            .unwrap();
        let cells = load_image(file.path()).unwrap();
        assert_eq!(cells, vec![Cell::new(0x52), Cell::new(0x1000_0000)]);
    }

    #[test]
    fn test_ragged_image_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[1, 2, 3, 4, 5]).unwrap();
        assert!(matches!(
            load_image(file.path()),
            Err(ImageError::BadLength { bytes: 5 })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_image(Path::new("/nonexistent/blocks.img")),
            Err(ImageError::Io(_))
        ));
    }
}
