use crate::entity::EntityError;
use crate::geometry::Vec2;
use crate::gui::element::GuiElement;
use crate::gui::label::BasicLabel;
use crate::render::RenderBatch;

/// Where a text element's label sits relative to its element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Center,
    Left,
    Right,
    Top,
    Bottom,
}

/// A pressable element with a label aligned over it: buttons with
/// captions, labeled badges.
///
/// Alignment is a one-shot computation, not a constraint: after moving or
/// resizing the element, or changing the label text, call `align_text`
/// again. The one exception is `set_position`, which re-centers the label
/// as a convenience.
pub struct GuiTextElement {
    element: GuiElement,
    label: BasicLabel,
    alignment: TextAlignment,
}

impl GuiTextElement {
    /// Pairs an element with a label and centers the label on it.
    pub fn new(element: GuiElement, label: BasicLabel) -> Self {
        let mut text_element = GuiTextElement {
            element,
            label,
            alignment: TextAlignment::Center,
        };
        text_element.align_text(TextAlignment::Center);
        text_element
    }

    /// Places the label's anchor against the element's current geometry.
    pub fn align_text(&mut self, alignment: TextAlignment) {
        self.alignment = alignment;
        let w = self.label.width();
        let h = self.label.height();
        let center = self.element.center();
        let pos = self.element.position();

        let anchor = match alignment {
            TextAlignment::Center => Vec2::new(center.x - w / 2.0, center.y + h / 2.0),
            TextAlignment::Left => Vec2::new(pos.x, center.y + h / 2.0),
            TextAlignment::Right => {
                Vec2::new(pos.x + self.element.width() - w, center.y + h / 2.0)
            }
            TextAlignment::Top => {
                Vec2::new(center.x - w / 2.0, pos.y + self.element.height())
            }
            TextAlignment::Bottom => Vec2::new(center.x - w / 2.0, pos.y + h),
        };
        self.label.set_position(anchor);
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }

    /// Nudges the label from its aligned spot. The horizontal sign follows
    /// the alignment so padding always pushes the text into the element:
    /// Left-aligned text pads rightward, Right-aligned leftward.
    pub fn add_text_padding(&mut self, x: f32, y: f32) {
        let mut anchor = self.label.anchor();
        match self.alignment {
            TextAlignment::Right => anchor.x -= x,
            _ => anchor.x += x,
        }
        anchor.y += y;
        self.label.set_position(anchor);
    }

    /// Moves the element and re-centers the label over it.
    pub fn set_position(&mut self, position: Vec2) {
        self.element.set_position(position);
        self.align_text(TextAlignment::Center);
    }

    pub fn position(&self) -> Vec2 {
        self.element.position()
    }

    pub fn width(&self) -> f32 {
        self.element.width()
    }

    pub fn height(&self) -> f32 {
        self.element.height()
    }

    pub fn is_touching(&self, point: Vec2) -> bool {
        self.element.is_touching(point)
    }

    pub fn visible(&self) -> bool {
        self.element.visible()
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.element.set_visible(visible);
    }

    pub fn update(&mut self, delta: f32) -> Result<(), EntityError> {
        self.element.update(delta)
    }

    /// Draws the element, then the label. Both are gated on the element's
    /// visibility (the label keeps its own flag on top of that).
    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        self.element.draw(batch)?;
        if self.element.visible() {
            self.label.draw(batch)?;
        }
        Ok(())
    }

    pub fn element(&self) -> &GuiElement {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut GuiElement {
        &mut self.element
    }

    pub fn label(&self) -> &BasicLabel {
        &self.label
    }

    pub fn label_mut(&mut self) -> &mut BasicLabel {
        &mut self.label
    }
}
