use crate::entity::{Bounded, Entity, EntityError};
use crate::geometry::{Rect, Vec2};
use crate::render::RenderBatch;
use crate::sprite::TextureRegion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressState {
    NotPressed,
    Pressed,
}

/// Quadrant-style direction of a touch relative to an element's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Callbacks fired when a pointer presses or releases an element. Both
/// default to doing nothing so simple buttons can implement just one.
pub trait ElementAction {
    fn touch_down(&mut self) {}
    fn touch_up(&mut self) {}
}

/// A pressable screen element: an entity plus press state, visibility and
/// an optional action.
///
/// Pressable art comes from a frame grid where frame 0 is the released
/// look and frame 1 the pressed look. Elements built from a single frame
/// still dispatch their action but never change appearance, so the press
/// ops leave them completely untouched.
pub struct GuiElement {
    entity: Entity,
    state: PressState,
    pointer: i64,
    visible: bool,
    action: Option<Box<dyn ElementAction>>,
}

impl GuiElement {
    const NOT_PRESSED_FRAME: usize = 0;
    const PRESSED_FRAME: usize = 1;

    /// Pointer value meaning "no press in flight". Real pointers (mouse
    /// button ids, finger ids) are never negative.
    pub const NO_POINTER: i64 = -1;

    /// Single-frame element at scale 1, facing upright.
    pub fn new(region: TextureRegion, position: Vec2) -> Self {
        GuiElement::from_entity(Entity::new(region, position, 0.0))
    }

    /// Single-frame element at the given scale.
    pub fn with_scale(
        region: TextureRegion,
        position: Vec2,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<Self, EntityError> {
        let entity = Entity::with_scale(region, position, 0.0, scale_x, scale_y)?;
        Ok(GuiElement::from_entity(entity))
    }

    /// Element sliced from a sheet grid; use 1x2 for released/pressed art.
    pub fn from_grid(
        region: &TextureRegion,
        rows: u32,
        cols: u32,
        position: Vec2,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<Self, EntityError> {
        let entity = Entity::from_grid(region, rows, cols, position, 0.0, scale_x, scale_y)?;
        Ok(GuiElement::from_entity(entity))
    }

    /// Wraps an already-built entity (animated buttons, rotated badges).
    pub fn from_entity(entity: Entity) -> Self {
        GuiElement {
            entity,
            state: PressState::NotPressed,
            pointer: GuiElement::NO_POINTER,
            visible: true,
            action: None,
        }
    }

    pub fn state(&self) -> PressState {
        self.state
    }

    pub fn is_pressed(&self) -> bool {
        self.state == PressState::Pressed
    }

    /// Applies a press state and the matching frame. No-op (state field
    /// included) when there is no pressed frame to show.
    pub fn set_state(&mut self, state: PressState) {
        if self.entity.frame_count() < 2 {
            return;
        }
        self.state = state;
        self.entity.set_frame(match state {
            PressState::NotPressed => GuiElement::NOT_PRESSED_FRAME,
            PressState::Pressed => GuiElement::PRESSED_FRAME,
        });
    }

    pub fn switch_state(&mut self) {
        match self.state {
            PressState::NotPressed => self.set_state(PressState::Pressed),
            PressState::Pressed => self.set_state(PressState::NotPressed),
        }
    }

    /// Press: updates the visual state and fires the action's touch_down.
    /// The action fires even for single-frame elements.
    pub fn press(&mut self) {
        self.set_state(PressState::Pressed);
        if let Some(action) = self.action.as_mut() {
            action.touch_down();
        }
    }

    /// Release with the pointer still on the element: fires touch_up.
    pub fn release(&mut self) {
        self.set_state(PressState::NotPressed);
        if let Some(action) = self.action.as_mut() {
            action.touch_up();
        }
    }

    /// Clears the press without firing the action (pointer slid off).
    pub fn cancel_press(&mut self) {
        self.set_state(PressState::NotPressed);
    }

    pub fn set_action(&mut self, action: Box<dyn ElementAction>) {
        self.action = Some(action);
    }

    /// Hit test: a 1x1 probe at the point against the element's bounds.
    /// Invisible elements never report a touch. The probe follows the
    /// half-open overlap rule, so points on the far edges miss.
    pub fn is_touching(&self, point: Vec2) -> bool {
        if !self.visible {
            return false;
        }
        let probe = Rect::new(point.x, point.y, 1.0, 1.0);
        self.entity.bounds().overlaps(&probe)
    }

    /// Dominant direction from the element's center to the point. The
    /// stronger axis wins; on an axis tie the vertical candidate wins, and
    /// within an axis ties prefer Left and Up.
    pub fn touch_direction(&self, point: Vec2) -> TouchDirection {
        let center = self.entity.center();
        let left = center.x - point.x;
        let right = point.x - center.x;
        let up = point.y - center.y;
        let down = center.y - point.y;

        let (dir_x, max_x) = if left >= right {
            (TouchDirection::Left, left)
        } else {
            (TouchDirection::Right, right)
        };
        let (dir_y, max_y) = if up >= down {
            (TouchDirection::Up, up)
        } else {
            (TouchDirection::Down, down)
        };

        if max_x > max_y { dir_x } else { dir_y }
    }

    /// Angle from the element's center to the point, in degrees in
    /// (-180, 180], with 0 pointing right and 90 pointing up.
    pub fn touch_angle(&self, point: Vec2) -> f32 {
        let center = self.entity.center();
        (point.y - center.y).atan2(point.x - center.x).to_degrees()
    }

    /// Input-source id (mouse button, finger) of the last press that
    /// claimed this element. Last writer wins.
    pub fn pointer(&self) -> i64 {
        self.pointer
    }

    pub fn set_pointer(&mut self, pointer: i64) {
        self.pointer = pointer;
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

    pub fn position(&self) -> Vec2 {
        self.entity.position()
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.entity.set_position(position);
    }

    pub fn set_position_x(&mut self, x: f32) {
        self.entity.set_position_x(x);
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.entity.set_position_y(y);
    }

    pub fn center(&self) -> Vec2 {
        self.entity.center()
    }

    pub fn width(&self) -> f32 {
        self.entity.width()
    }

    pub fn height(&self) -> f32 {
        self.entity.height()
    }

    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) -> Result<(), EntityError> {
        self.entity.set_scale(scale_x, scale_y)
    }

    pub fn update(&mut self, delta: f32) -> Result<(), EntityError> {
        self.entity.update(delta)
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        if !self.visible {
            return Ok(());
        }
        self.entity.draw(batch)
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }
}

impl Bounded for GuiElement {
    fn bounds(&self) -> Rect {
        self.entity.bounds()
    }
}
