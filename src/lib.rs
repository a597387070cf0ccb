//! Sprite and GUI helpers for 2D games on an SDL2 canvas.
//!
//! The crate works in one coordinate space everywhere: origin at the
//! bottom-left, y growing upward, rotations counterclockwise in degrees.
//! The SDL flip happens once, inside [`render::SdlBatch`], and pointer
//! input is flipped on the way in by [`input`].
//!
//! # Module Map
//!
//! - [`sprite`] - texture atlas regions and sheet slicing
//! - [`animation`] - frame timing policies (once, loop, ping-pong)
//! - [`entity`] - positioned, scalable, animatable sprites with bounds
//! - [`motion`] - velocity, heading and spin applied to entities
//! - [`projectile`] - short-lived entities flying along their rotation
//! - [`gui`] - pressable elements, labels, tables and the screen controller
//! - [`render`] - the draw seam ([`render::RenderBatch`]) and its SDL backend
//! - [`text`] - built-in bitmap font and text measurement
//! - [`screen`] - screen dimensions and asset-scale detection
//! - [`input`] - SDL event translation into pointer events
//! - [`timer`] - countdown helper for respawns and cooldowns

pub mod animation;
pub mod entity;
pub mod geometry;
pub mod gui;
pub mod input;
pub mod motion;
pub mod projectile;
pub mod render;
pub mod screen;
pub mod sprite;
pub mod text;
pub mod timer;

pub use animation::{Animation, PlayMode};
pub use entity::{Bounded, Entity, EntityError};
pub use geometry::{Rect, Vec2};
pub use projectile::Projectile;
pub use render::{RenderBatch, SdlBatch};
pub use screen::ScreenConfig;
pub use sprite::TextureRegion;
