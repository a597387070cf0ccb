use crate::animation::{Animation, PlayMode};
use crate::geometry::{Rect, Vec2};
use crate::render::RenderBatch;
use crate::sprite::{FrameGridError, SheetConfig, TextureRegion};
use std::fmt;

/// Errors from entity construction and state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum EntityError {
    Frames(FrameGridError),
    NonPositiveScale { x: f32, y: f32 },
    NegativeDelta(f32),
    NonPositiveFrameDuration(f32),
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::Frames(e) => write!(f, "invalid frame grid: {}", e),
            EntityError::NonPositiveScale { x, y } => {
                write!(f, "scale factors must be positive, got ({}, {})", x, y)
            }
            EntityError::NegativeDelta(delta) => {
                write!(f, "delta time must be non-negative, got {}", delta)
            }
            EntityError::NonPositiveFrameDuration(duration) => {
                write!(f, "frame duration must be positive, got {}", duration)
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl From<FrameGridError> for EntityError {
    fn from(error: FrameGridError) -> Self {
        EntityError::Frames(error)
    }
}

/// Anything with an axis-aligned bounding box in world space.
pub trait Bounded {
    fn bounds(&self) -> Rect;
}

/// A positioned, scalable, rotatable sprite with optional frame animation.
///
/// The entity owns its frame regions outright and keeps its derived
/// geometry (width/height, origin, bounds) consistent through every
/// mutation: origin is always the center of the scaled size, and bounds
/// follow position/size/scale changes immediately.
#[derive(Debug, Clone)]
pub struct Entity {
    frames: Vec<TextureRegion>,
    current: usize,
    animation: Option<Animation>,
    state_time: f32,
    position: Vec2,
    rotation: f32,
    scale: Vec2,
    width: f32,
    height: f32,
    origin: Vec2,
    min_bounds: Vec2,
    bounds: Rect,
}

impl Entity {
    /// Single-frame entity at scale 1.
    pub fn new(region: TextureRegion, position: Vec2, rotation: f32) -> Self {
        Entity::build(vec![region], None, position, rotation, Vec2::new(1.0, 1.0))
    }

    /// Single-frame entity with an explicit scale.
    pub fn with_scale(
        region: TextureRegion,
        position: Vec2,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<Self, EntityError> {
        Entity::check_scale(scale_x, scale_y)?;
        Ok(Entity::build(
            vec![region],
            None,
            position,
            rotation,
            Vec2::new(scale_x, scale_y),
        ))
    }

    /// Multi-frame entity sliced from a sheet grid. Frame 0 starts current;
    /// frames are selected manually (no animation).
    pub fn from_grid(
        region: &TextureRegion,
        rows: u32,
        cols: u32,
        position: Vec2,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<Self, EntityError> {
        Entity::check_scale(scale_x, scale_y)?;
        let frames = region.split_grid(rows, cols)?;
        Ok(Entity::build(
            frames,
            None,
            position,
            rotation,
            Vec2::new(scale_x, scale_y),
        ))
    }

    /// Animated entity: grid slicing plus a playback policy.
    #[allow(clippy::too_many_arguments)]
    pub fn animated(
        region: &TextureRegion,
        rows: u32,
        cols: u32,
        position: Vec2,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
        frame_duration: f32,
        mode: PlayMode,
    ) -> Result<Self, EntityError> {
        Entity::check_scale(scale_x, scale_y)?;
        let frames = region.split_grid(rows, cols)?;
        let animation = Animation::new(frame_duration, mode)?;
        Ok(Entity::build(
            frames,
            Some(animation),
            position,
            rotation,
            Vec2::new(scale_x, scale_y),
        ))
    }

    /// Animated entity from a JSON sheet descriptor.
    pub fn from_config(
        region: &TextureRegion,
        config: &SheetConfig,
        position: Vec2,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    ) -> Result<Self, EntityError> {
        Entity::animated(
            region,
            config.rows,
            config.cols,
            position,
            rotation,
            scale_x,
            scale_y,
            config.frame_duration,
            config.play_mode,
        )
    }

    fn build(
        frames: Vec<TextureRegion>,
        animation: Option<Animation>,
        position: Vec2,
        rotation: f32,
        scale: Vec2,
    ) -> Self {
        let mut entity = Entity {
            frames,
            current: 0,
            animation,
            state_time: 0.0,
            position,
            rotation,
            scale,
            width: 0.0,
            height: 0.0,
            origin: Vec2::ZERO,
            min_bounds: Vec2::ZERO,
            bounds: Rect::default(),
        };
        entity.set_dimensions();
        entity.update_bounds();
        entity
    }

    fn check_scale(x: f32, y: f32) -> Result<(), EntityError> {
        if x <= 0.0 || y <= 0.0 {
            return Err(EntityError::NonPositiveScale { x, y });
        }
        Ok(())
    }

    /// Derives width/height from the current frame's native size and the
    /// scale factors, and re-centers the origin.
    fn set_dimensions(&mut self) {
        let frame = &self.frames[self.current];
        self.width = frame.width as f32 * self.scale.x;
        self.height = frame.height as f32 * self.scale.y;
        self.origin = Vec2::new(self.width / 2.0, self.height / 2.0);
    }

    fn update_bounds(&mut self) {
        let inset_x = self.min_bounds.x * self.scale.x;
        let inset_y = self.min_bounds.y * self.scale.y;
        self.bounds = Rect::new(
            self.position.x + inset_x,
            self.position.y + inset_y,
            self.width - 2.0 * inset_x,
            self.height - 2.0 * inset_y,
        );
    }

    /// Advances the animation clock and resolves the active frame. Entities
    /// without an animation ignore the tick entirely.
    pub fn update(&mut self, delta: f32) -> Result<(), EntityError> {
        if delta < 0.0 {
            return Err(EntityError::NegativeDelta(delta));
        }
        if let Some(animation) = self.animation {
            self.state_time += delta;
            self.current = animation.frame_index(self.state_time, self.frames.len());
        }
        self.update_bounds();
        Ok(())
    }

    /// Replaces the scale factors and recomputes width, height, origin and
    /// bounds from the current frame's native size. Rejects factors <= 0
    /// and leaves the entity untouched on rejection.
    pub fn set_scale(&mut self, scale_x: f32, scale_y: f32) -> Result<(), EntityError> {
        Entity::check_scale(scale_x, scale_y)?;
        self.scale = Vec2::new(scale_x, scale_y);
        self.set_dimensions();
        self.update_bounds();
        Ok(())
    }

    /// Sets the collision padding: the bounds rect is inset from the sprite
    /// quad by `min_x`/`min_y` texture pixels per side. The padding is
    /// stored unscaled and multiplied by the scale factors on every
    /// derivation, so it stays proportional when the entity is re-scaled.
    pub fn create_bounds(&mut self, min_x: f32, min_y: f32) {
        self.min_bounds = Vec2::new(min_x, min_y);
        self.update_bounds();
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.update_bounds();
    }

    pub fn set_position_x(&mut self, x: f32) {
        self.position.x = x;
        self.update_bounds();
    }

    pub fn set_position_y(&mut self, y: f32) {
        self.position.y = y;
        self.update_bounds();
    }

    /// Moves the entity by an offset. Motion integration goes through here
    /// so bounds can never lag behind the position.
    pub fn translate(&mut self, offset: Vec2) {
        self.position += offset;
        self.update_bounds();
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// World coordinates of the origin point (the center of the quad).
    pub fn center(&self) -> Vec2 {
        self.position + self.origin
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Direct width override. Origin re-centers and bounds re-derive.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
        self.origin = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.update_bounds();
    }

    /// Direct height override. Origin re-centers and bounds re-derive.
    pub fn set_height(&mut self, height: f32) {
        self.height = height;
        self.origin = Vec2::new(self.width / 2.0, self.height / 2.0);
        self.update_bounds();
    }

    /// Rotation in degrees, counter-clockwise positive.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn rotate(&mut self, degrees: f32) {
        self.rotation += degrees;
    }

    /// Selects a frame manually, clamped to the frame set.
    pub fn set_frame(&mut self, index: usize) {
        self.current = index.min(self.frames.len() - 1);
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_frame(&self) -> &TextureRegion {
        &self.frames[self.current]
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Swaps the playback policy and restarts the clock.
    pub fn set_animation(&mut self, animation: Animation) {
        self.animation = Some(animation);
        self.state_time = 0.0;
    }

    pub fn state_time(&self) -> f32 {
        self.state_time
    }

    /// True once a `Once` animation has played through. Loops never finish.
    pub fn is_finished(&self) -> bool {
        self.animation
            .map(|a| a.is_finished(self.state_time, self.frames.len()))
            .unwrap_or(false)
    }

    pub fn overlaps(&self, other: &impl Bounded) -> bool {
        self.bounds.overlaps(&other.bounds())
    }

    /// True if any member overlaps; stops at the first hit.
    pub fn overlaps_any<T: Bounded>(&self, others: &[T]) -> bool {
        others.iter().any(|o| self.bounds.overlaps(&o.bounds()))
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        batch.draw_region(
            &self.frames[self.current],
            self.position,
            self.origin,
            self.width,
            self.height,
            self.rotation,
        )
    }
}

impl Bounded for Entity {
    fn bounds(&self) -> Rect {
        self.bounds
    }
}
