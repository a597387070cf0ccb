//! Pointer-Driven GUI Layer
//!
//! Elements here live in the same bottom-left-origin space as entities and
//! are laid out in absolute coordinates or through a [`Table`].
//!
//! # Architecture
//!
//! - [`GuiElement`] wraps an entity with press state and a pointer hit box
//! - [`BasicLabel`] is bitmap-font text anchored by its top-left corner
//! - [`GuiTextElement`] glues a label onto an element with alignment rules
//! - [`Table`] stacks items into rows or runs them out as a column
//! - [`ScreenController`] routes pointer events and draws a screenful
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use spritelet::geometry::Vec2;
//! use spritelet::gui::{GuiElement, ScreenController};
//! use spritelet::sprite::TextureRegion;
//!
//! let mut controller = ScreenController::new();
//! let button = TextureRegion::full("button", 64, 32);
//! let handle = controller.add(GuiElement::new(button, Vec2::new(10.0, 10.0)));
//!
//! // Wire to the frame loop:
//! // controller.process(&pointer_events);
//! // controller.draw(&mut batch)?;
//! # let _ = handle;
//! ```

pub mod controller;
pub mod element;
pub mod label;
pub mod table;
pub mod text_element;

pub use controller::ScreenController;
pub use element::{ElementAction, GuiElement, PressState, TouchDirection};
pub use label::BasicLabel;
pub use table::{Table, TableItem};
pub use text_element::{GuiTextElement, TextAlignment};
