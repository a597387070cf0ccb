use crate::animation::PlayMode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors produced when slicing a texture region into a frame grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameGridError {
    /// Zero rows or zero columns were requested.
    EmptyGrid { rows: u32, cols: u32 },
    /// The region does not divide evenly into the requested grid.
    UnevenGrid {
        width: u32,
        height: u32,
        rows: u32,
        cols: u32,
    },
}

impl fmt::Display for FrameGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameGridError::EmptyGrid { rows, cols } => {
                write!(f, "frame grid must have at least 1x1 cells, got {}x{}", rows, cols)
            }
            FrameGridError::UnevenGrid {
                width,
                height,
                rows,
                cols,
            } => write!(
                f,
                "region {}x{} does not divide evenly into {} rows x {} cols",
                width, height, rows, cols
            ),
        }
    }
}

impl std::error::Error for FrameGridError {}

/// A named sub-rectangle of a backend texture, in texture pixel
/// coordinates (top-left origin, like the sheet image itself).
///
/// The `key` is resolved against the texture table the render batch holds,
/// so regions stay plain data and never borrow the texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureRegion {
    pub key: String,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl TextureRegion {
    pub fn new(key: &str, x: u32, y: u32, width: u32, height: u32) -> Self {
        TextureRegion {
            key: key.to_string(),
            x,
            y,
            width,
            height,
        }
    }

    /// Region covering a whole texture of the given size.
    pub fn full(key: &str, width: u32, height: u32) -> Self {
        TextureRegion::new(key, 0, 0, width, height)
    }

    /// Slices the region row-major into `rows * cols` equal tiles. Row 0 is
    /// the top row of the sheet; offsets are relative to this region's own
    /// corner, so grids nest inside larger atlases.
    ///
    /// Fails instead of truncating when the grid is empty or the region
    /// does not divide evenly.
    pub fn split_grid(&self, rows: u32, cols: u32) -> Result<Vec<TextureRegion>, FrameGridError> {
        if rows == 0 || cols == 0 {
            return Err(FrameGridError::EmptyGrid { rows, cols });
        }
        if self.width % cols != 0 || self.height % rows != 0 {
            return Err(FrameGridError::UnevenGrid {
                width: self.width,
                height: self.height,
                rows,
                cols,
            });
        }

        let frame_width = self.width / cols;
        let frame_height = self.height / rows;
        let mut frames = Vec::with_capacity((rows * cols) as usize);
        for row in 0..rows {
            for col in 0..cols {
                frames.push(TextureRegion {
                    key: self.key.clone(),
                    x: self.x + col * frame_width,
                    y: self.y + row * frame_height,
                    width: frame_width,
                    height: frame_height,
                });
            }
        }
        Ok(frames)
    }
}

/// Sheet metadata loaded from JSON, so grid shape and playback speed can
/// live in a config file next to the art instead of in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetConfig {
    pub rows: u32,
    pub cols: u32,
    pub frame_duration: f32,
    #[serde(default)]
    pub play_mode: PlayMode,
}

impl SheetConfig {
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: SheetConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_grid_row_major() {
        let sheet = TextureRegion::full("walker", 64, 64);
        let frames = sheet.split_grid(2, 4).unwrap();

        assert_eq!(frames.len(), 8);
        for frame in &frames {
            assert_eq!(frame.width, 16);
            assert_eq!(frame.height, 32);
            assert_eq!(frame.key, "walker");
        }
        // Row 0 comes first, left to right.
        assert_eq!((frames[0].x, frames[0].y), (0, 0));
        assert_eq!((frames[1].x, frames[1].y), (16, 0));
        assert_eq!((frames[3].x, frames[3].y), (48, 0));
        assert_eq!((frames[4].x, frames[4].y), (0, 32));
        assert_eq!((frames[7].x, frames[7].y), (48, 32));
    }

    #[test]
    fn test_split_grid_offsets_nest_in_parent() {
        let atlas_cell = TextureRegion::new("atlas", 100, 200, 32, 32);
        let frames = atlas_cell.split_grid(1, 2).unwrap();

        assert_eq!((frames[0].x, frames[0].y), (100, 200));
        assert_eq!((frames[1].x, frames[1].y), (116, 200));
    }

    #[test]
    fn test_split_grid_rejects_empty() {
        let sheet = TextureRegion::full("s", 64, 64);

        assert_eq!(
            sheet.split_grid(0, 4),
            Err(FrameGridError::EmptyGrid { rows: 0, cols: 4 })
        );
        assert_eq!(
            sheet.split_grid(2, 0),
            Err(FrameGridError::EmptyGrid { rows: 2, cols: 0 })
        );
    }

    #[test]
    fn test_split_grid_rejects_uneven() {
        let sheet = TextureRegion::full("s", 65, 64);

        let err = sheet.split_grid(2, 4).unwrap_err();
        assert_eq!(
            err,
            FrameGridError::UnevenGrid {
                width: 65,
                height: 64,
                rows: 2,
                cols: 4,
            }
        );
    }
}
