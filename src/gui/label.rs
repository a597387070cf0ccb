use crate::geometry::Vec2;
use crate::render::RenderBatch;
use crate::text::{FontMetrics, TextBounds, TextStyle};

/// A measured piece of text with an optional numeric suffix, for scores,
/// timers and other "PREFIX: n" readouts.
///
/// The label stores its anchor at the TOP-left of the text block (text
/// hangs down from where you put it); the reported `position()` is the
/// bottom-left, derived on demand from the current bounds so it can never
/// go stale when the text is re-measured.
pub struct BasicLabel {
    sequence: String,
    value: i64,
    text: String,
    anchor: Vec2,
    bounds: TextBounds,
    style: TextStyle,
    visible: bool,
}

impl BasicLabel {
    /// Label with no numeric suffix, anchored at (0, 0).
    pub fn new(sequence: &str, font: &dyn FontMetrics) -> Self {
        BasicLabel::with_value(sequence, 0, font)
    }

    pub fn with_value(sequence: &str, value: i64, font: &dyn FontMetrics) -> Self {
        let mut label = BasicLabel {
            sequence: sequence.to_string(),
            value,
            text: String::new(),
            anchor: Vec2::ZERO,
            bounds: TextBounds::default(),
            style: TextStyle::default(),
            visible: true,
        };
        label.refresh(font);
        label
    }

    /// Builder-style style override; re-measures under the new style.
    pub fn with_style(mut self, style: TextStyle, font: &dyn FontMetrics) -> Self {
        self.style = style;
        self.refresh(font);
        self
    }

    /// Builder-style anchor placement.
    pub fn at(mut self, anchor: Vec2) -> Self {
        self.anchor = anchor;
        self
    }

    /// Rebuilds the display text and re-measures it. A value of zero shows
    /// the bare sequence.
    fn refresh(&mut self, font: &dyn FontMetrics) {
        self.text = if self.value == 0 {
            self.sequence.clone()
        } else {
            format!("{}{}", self.sequence, self.value)
        };
        self.bounds = font.measure(&self.text, &self.style);
    }

    pub fn set_text(&mut self, sequence: &str, font: &dyn FontMetrics) {
        self.sequence = sequence.to_string();
        self.refresh(font);
    }

    pub fn set_value(&mut self, value: i64, font: &dyn FontMetrics) {
        self.value = value;
        self.refresh(font);
    }

    pub fn set_style(&mut self, style: TextStyle, font: &dyn FontMetrics) {
        self.style = style;
        self.refresh(font);
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> &TextStyle {
        &self.style
    }

    pub fn bounds(&self) -> TextBounds {
        self.bounds
    }

    pub fn width(&self) -> f32 {
        self.bounds.width
    }

    pub fn height(&self) -> f32 {
        self.bounds.height
    }

    /// Moves the top-left anchor.
    pub fn set_position(&mut self, anchor: Vec2) {
        self.anchor = anchor;
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// Bottom-left of the text block: the anchor dropped by the measured
    /// height. This is the position layout containers see.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.anchor.x, self.anchor.y - self.bounds.height)
    }

    /// Manual bounds-height multiplier for text that wraps at draw time
    /// without newlines in the sequence.
    pub fn adjust_bounds_multi_row(&mut self, rows: u32) {
        self.bounds.height *= rows as f32;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn switch_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        batch.draw_text(&self.text, self.anchor, &self.style)
    }
}
