//! The draw seam between the bookkeeping types and the backend.
//!
//! Everything in the crate draws through `RenderBatch`, which keeps the
//! library math in world coordinates (Y-up) and unit-testable. `SdlBatch`
//! is the shipped implementation: it resolves texture keys, flips Y into
//! SDL's top-left space, and rasterizes bitmap text.

use crate::geometry::{Rect, Vec2};
use crate::sprite::TextureRegion;
use crate::text::{BitmapFont, TextStyle};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect as SdlRect};
use sdl2::render::{Canvas, Texture};
use sdl2::video::Window;
use std::collections::HashMap;

/// Backend-facing draw calls. All positions and sizes are world units;
/// rotation is degrees, counter-clockwise positive, about `position +
/// origin`.
pub trait RenderBatch {
    /// Draws a texture region as a quad.
    fn draw_region(
        &mut self,
        region: &TextureRegion,
        position: Vec2,
        origin: Vec2,
        width: f32,
        height: f32,
        rotation: f32,
    ) -> Result<(), String>;

    /// Draws bitmap text with its top-left at `anchor`.
    fn draw_text(&mut self, text: &str, anchor: Vec2, style: &TextStyle) -> Result<(), String>;

    /// Draws a rectangle outline (debug bounds overlay).
    fn draw_outline(&mut self, rect: Rect, color: Color) -> Result<(), String>;
}

/// SDL2 implementation of the draw seam.
///
/// Holds the canvas and the texture table for one frame of drawing; texture
/// keys in regions resolve against the table. `view_height` is the logical
/// viewport height used to flip world Y into SDL's Y-down space.
pub struct SdlBatch<'a, 'b> {
    canvas: &'b mut Canvas<Window>,
    textures: &'a HashMap<String, Texture<'a>>,
    view_height: f32,
}

impl<'a, 'b> SdlBatch<'a, 'b> {
    pub fn new(
        canvas: &'b mut Canvas<Window>,
        textures: &'a HashMap<String, Texture<'a>>,
        view_height: f32,
    ) -> Self {
        SdlBatch {
            canvas,
            textures,
            view_height,
        }
    }
}

impl RenderBatch for SdlBatch<'_, '_> {
    fn draw_region(
        &mut self,
        region: &TextureRegion,
        position: Vec2,
        origin: Vec2,
        width: f32,
        height: f32,
        rotation: f32,
    ) -> Result<(), String> {
        let texture = self
            .textures
            .get(&region.key)
            .ok_or_else(|| format!("unknown texture key '{}'", region.key))?;

        let src = SdlRect::new(
            region.x as i32,
            region.y as i32,
            region.width,
            region.height,
        );
        // World bottom-left corner -> SDL top-left corner.
        let dst = SdlRect::new(
            position.x.round() as i32,
            (self.view_height - position.y - height).round() as i32,
            width.round().max(0.0) as u32,
            height.round().max(0.0) as u32,
        );
        // The rotation center is relative to the dst rect's top-left, and
        // SDL rotates clockwise for positive angles, so the Y flip also
        // flips the angle sign.
        let center = Point::new(
            origin.x.round() as i32,
            (height - origin.y).round() as i32,
        );
        self.canvas
            .copy_ex(
                texture,
                Some(src),
                Some(dst),
                -f64::from(rotation),
                Some(center),
                false,
                false,
            )
            .map_err(|e| e.to_string())
    }

    fn draw_text(&mut self, text: &str, anchor: Vec2, style: &TextStyle) -> Result<(), String> {
        self.canvas.set_draw_color(style.color);

        let pixel = style.scale as i32;
        let advance = (BitmapFont::ADVANCE * style.scale) as i32;
        let line_height = ((BitmapFont::GLYPH_HEIGHT + 1) * style.scale) as i32;
        let start_x = anchor.x.round() as i32;
        let start_y = (self.view_height - anchor.y).round() as i32;

        for (line_index, line) in text.lines().enumerate() {
            let line_y = start_y + line_index as i32 * line_height;
            for (char_index, c) in line.chars().enumerate() {
                let char_x = start_x + char_index as i32 * advance;
                let pattern = BitmapFont::glyph(c);
                for (row, &bits) in pattern.iter().enumerate() {
                    for col in 0..BitmapFont::GLYPH_WIDTH as i32 {
                        if (bits >> (4 - col)) & 1 == 1 {
                            self.canvas.fill_rect(SdlRect::new(
                                char_x + col * pixel,
                                line_y + row as i32 * pixel,
                                style.scale,
                                style.scale,
                            ))?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_outline(&mut self, rect: Rect, color: Color) -> Result<(), String> {
        self.canvas.set_draw_color(color);
        let flipped = SdlRect::new(
            rect.x.round() as i32,
            (self.view_height - rect.y - rect.height).round() as i32,
            rect.width.round().max(0.0) as u32,
            rect.height.round().max(0.0) as u32,
        );
        self.canvas.draw_rect(flipped)
    }
}

#[cfg(test)]
pub(crate) mod recording {
    //! A batch that records calls instead of drawing, for layout and
    //! draw-order tests that must run without an SDL context.

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCall {
        Region { key: String, position: Vec2 },
        Text { text: String, anchor: Vec2 },
        Outline { rect: Rect },
    }

    #[derive(Default)]
    pub struct RecordingBatch {
        pub calls: Vec<DrawCall>,
    }

    impl RenderBatch for RecordingBatch {
        fn draw_region(
            &mut self,
            region: &TextureRegion,
            position: Vec2,
            _origin: Vec2,
            _width: f32,
            _height: f32,
            _rotation: f32,
        ) -> Result<(), String> {
            self.calls.push(DrawCall::Region {
                key: region.key.clone(),
                position,
            });
            Ok(())
        }

        fn draw_text(
            &mut self,
            text: &str,
            anchor: Vec2,
            _style: &TextStyle,
        ) -> Result<(), String> {
            self.calls.push(DrawCall::Text {
                text: text.to_string(),
                anchor,
            });
            Ok(())
        }

        fn draw_outline(&mut self, rect: Rect, _color: Color) -> Result<(), String> {
            self.calls.push(DrawCall::Outline { rect });
            Ok(())
        }
    }
}
