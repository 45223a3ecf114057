// Layout decoding: encoded cell values to tiles
//
// A cell value packs a sprite-sheet frame and four boundary insets into one
// decimal number. The integer part is the frame; the fractional part, written
// with exactly four digits, gives the top/right/bottom/left inset widths.
//
//   6.3003 -> frame 6, top 3, right 0, bottom 0, left 3

use super::presets::SceneConfig;
use super::tile::{Insets, Tile};
use super::SceneError;
use glam::Vec2;
use log::debug;

/// Number of inset digits carried by the fractional part
const INSET_DIGITS: u32 = 4;
const INSET_SCALE: f64 = 10_000.0;

/// Failure to interpret a single cell
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DecodeError {
    #[error("cell `{0}` is not a number")]
    NonNumeric(String),

    #[error("cell value {0} is not finite")]
    NonFinite(f64),

    #[error("cell value {0} is negative")]
    Negative(f64),

    #[error("cell value {0} has a frame index too large for a sprite sheet")]
    FrameOutOfRange(f64),
}

/// Split a cell value into its frame index and insets
pub fn decode_cell(value: f64) -> Result<(u32, Insets), DecodeError> {
    if !value.is_finite() {
        return Err(DecodeError::NonFinite(value));
    }
    if value < 0.0 {
        return Err(DecodeError::Negative(value));
    }

    let whole = value.floor();
    if whole > u32::MAX as f64 {
        return Err(DecodeError::FrameOutOfRange(value));
    }
    let frame = whole as u32;

    // `round` is half-away-from-zero. A fraction that rounds up to 1.0000
    // carries into the integer part, leaving all four digits at zero.
    let mut packed = ((value - whole) * INSET_SCALE).round() as u32;
    if packed >= INSET_SCALE as u32 {
        packed = 0;
    }

    let mut digits = [0u8; INSET_DIGITS as usize];
    for (i, digit) in digits.iter_mut().enumerate() {
        let place = 10u32.pow(INSET_DIGITS - 1 - i as u32);
        *digit = ((packed / place) % 10) as u8;
    }

    Ok((frame, Insets::new(digits[0], digits[1], digits[2], digits[3])))
}

/// Parse a textual layout: one row per line, cells separated by whitespace or
/// commas, `#` to end-of-line is a comment, blank lines are skipped.
pub fn parse_layout(text: &str) -> Result<Vec<Vec<f64>>, SceneError> {
    let mut rows = Vec::new();

    for line in text.lines() {
        let content = line.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();
        if tokens.is_empty() {
            continue;
        }

        let row = rows.len();
        let values = tokens
            .iter()
            .enumerate()
            .map(|(col, token)| {
                token.parse::<f64>().map_err(|_| SceneError::Cell {
                    row,
                    col,
                    source: DecodeError::NonNumeric(token.to_string()),
                })
            })
            .collect::<Result<Vec<f64>, SceneError>>()?;
        rows.push(values);
    }

    Ok(rows)
}

/// `(columns, rows)` of a ragged layout: the longest row, and every row
/// including empty ones
pub fn layout_extent(layout: &[Vec<f64>]) -> (usize, usize) {
    let longest_row = layout.iter().map(Vec::len).max().unwrap_or(0);
    (longest_row, layout.len())
}

/// Turns a ragged grid of encoded cells into positioned tiles
#[derive(Debug, Clone)]
pub struct LayoutDecoder {
    config: SceneConfig,
}

impl LayoutDecoder {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Decode every cell, row-major. Any bad cell aborts the whole layout.
    pub fn decode(&self, layout: &[Vec<f64>]) -> Result<Vec<Tile>, SceneError> {
        let (longest_row, rows) = layout_extent(layout);
        if longest_row == 0 {
            return Err(SceneError::EmptyLayout);
        }

        let cell = self.config.scaled_tile_size();
        let grid_size = Vec2::new(longest_row as f32, rows as f32) * cell;
        let shift = if self.config.centered {
            grid_size / 2.0 - cell / 2.0
        } else {
            Vec2::ZERO
        };

        let mut tiles = Vec::with_capacity(rows * longest_row);
        for (row, cells) in layout.iter().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let (frame, insets) =
                    decode_cell(value).map_err(|source| SceneError::Cell { row, col, source })?;

                let position = Vec2::new(col as f32, row as f32) * cell - shift;
                tiles.push(Tile::new(
                    col,
                    row,
                    position,
                    self.config.tile_size,
                    self.config.resize,
                    frame,
                    self.config.columns,
                    self.config.centered,
                    insets,
                ));
            }
        }

        debug!(
            "Decoded {} tiles ({} rows, widest {})",
            tiles.len(),
            rows,
            longest_row
        );
        Ok(tiles)
    }
}
