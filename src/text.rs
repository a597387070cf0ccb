//! Bitmap text metrics.
//!
//! A procedural 5x7 bitmap font. Measurement is pure math so labels can
//! re-measure whenever their text changes, outside the render path; the
//! SDL batch rasterizes the same glyph patterns with filled rects.

use sdl2::pixels::Color;

/// Measured size of a piece of text, in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

/// Color and integer scale applied to bitmap text (scale 1 = 5x7 pixel
/// glyphs, 2 = 10x14, and so on).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub scale: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        TextStyle {
            color: Color::RGB(255, 255, 255),
            scale: 2,
        }
    }
}

/// Measurement seam labels depend on. Implementations report the size the
/// given text will occupy when drawn with the given style.
pub trait FontMetrics {
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds;
}

/// The built-in procedural font: 5x7 glyphs, one pixel column of spacing,
/// case-insensitive, ASCII with a handful of punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFont;

impl BitmapFont {
    pub const GLYPH_WIDTH: u32 = 5;
    pub const GLYPH_HEIGHT: u32 = 7;
    /// Horizontal advance per character: 5 glyph pixels plus 1 spacing.
    pub const ADVANCE: u32 = 6;

    /// Glyph rows as 5-bit masks, top row first. Unknown characters render
    /// as a full block.
    pub(crate) fn glyph(c: char) -> &'static [u8; 7] {
        match c.to_ascii_uppercase() {
            'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
            'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
            'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
            'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
            'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
            'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
            'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
            'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
            'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
            'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
            'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
            'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
            'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
            'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
            'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
            'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
            'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
            'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
            'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
            'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
            'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
            'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
            'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
            'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
            'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
            'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
            '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
            '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
            '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
            '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
            '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
            '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
            '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
            '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
            '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
            '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
            ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
            '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
            '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
            '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
            '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
            '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
            '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
            '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
            '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
            ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
            ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
            _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
        }
    }
}

impl FontMetrics for BitmapFont {
    /// Width follows the longest line (advance * chars); height stacks 7-row
    /// lines with one pixel row of leading between them.
    fn measure(&self, text: &str, style: &TextStyle) -> TextBounds {
        let longest = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        let line_count = text.lines().count().max(1) as u32;

        let width = (longest as u32 * Self::ADVANCE * style.scale) as f32;
        let height =
            (line_count * Self::GLYPH_HEIGHT * style.scale + (line_count - 1) * style.scale) as f32;
        TextBounds { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_single_line() {
        let style = TextStyle {
            scale: 2,
            ..TextStyle::default()
        };
        let bounds = BitmapFont.measure("HELLO", &style);

        assert_eq!(bounds.width, 60.0);
        assert_eq!(bounds.height, 14.0);
    }

    #[test]
    fn test_measure_takes_longest_line() {
        let style = TextStyle {
            scale: 1,
            ..TextStyle::default()
        };
        let bounds = BitmapFont.measure("HI\nTHERE", &style);

        assert_eq!(bounds.width, 30.0);
        // Two 7-row lines plus one row of leading.
        assert_eq!(bounds.height, 15.0);
    }

    #[test]
    fn test_measure_empty_text() {
        let bounds = BitmapFont.measure("", &TextStyle::default());
        assert_eq!(bounds.width, 0.0);
    }

    #[test]
    fn test_glyphs_are_case_insensitive() {
        assert_eq!(BitmapFont::glyph('a'), BitmapFont::glyph('A'));
    }

    #[test]
    fn test_unknown_glyph_is_full_block() {
        assert_eq!(BitmapFont::glyph('~'), &[0b11111; 7]);
    }
}
