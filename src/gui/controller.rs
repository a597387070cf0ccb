use log::debug;

use crate::entity::EntityError;
use crate::geometry::Vec2;
use crate::gui::element::GuiElement;
use crate::input::PointerEvent;
use crate::render::RenderBatch;

/// Owns a screen's elements, routes pointer input to them, and draws them.
/// `add` hands back an index for fetching the element again later.
///
/// Press tracking is per pointer, so a second finger can press one button
/// while the first still holds another.
pub struct ScreenController {
    elements: Vec<GuiElement>,
}

impl ScreenController {
    pub fn new() -> Self {
        ScreenController {
            elements: Vec::new(),
        }
    }

    pub fn add(&mut self, element: GuiElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn element(&self, handle: usize) -> Option<&GuiElement> {
        self.elements.get(handle)
    }

    pub fn element_mut(&mut self, handle: usize) -> Option<&mut GuiElement> {
        self.elements.get_mut(handle)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Presses the first visible element under the point and records which
    /// pointer claimed it. Returns whether anything was hit.
    pub fn touch_down(&mut self, at: Vec2, pointer: i64) -> bool {
        for (index, element) in self.elements.iter_mut().enumerate() {
            if element.is_touching(at) {
                debug!("pointer {} pressed element {}", pointer, index);
                element.set_pointer(pointer);
                element.press();
                return true;
            }
        }
        false
    }

    /// Finishes the press held by `pointer`. The release action only fires
    /// if the pointer is still on the element; a pointer that slid off
    /// cancels without firing.
    pub fn touch_up(&mut self, at: Vec2, pointer: i64) -> bool {
        for (index, element) in self.elements.iter_mut().enumerate() {
            if element.pointer() == pointer {
                if element.is_touching(at) {
                    debug!("pointer {} released element {}", pointer, index);
                    element.release();
                } else {
                    debug!("pointer {} slid off element {}", pointer, index);
                    element.cancel_press();
                }
                element.set_pointer(GuiElement::NO_POINTER);
                return true;
            }
        }
        false
    }

    /// Applies one frame's pointer events in arrival order.
    pub fn process(&mut self, events: &[PointerEvent]) {
        for event in events {
            match *event {
                PointerEvent::Down { at, pointer } => {
                    self.touch_down(at, pointer);
                }
                PointerEvent::Up { at, pointer } => {
                    self.touch_up(at, pointer);
                }
                PointerEvent::Moved { .. } => {}
            }
        }
    }

    /// Advances animated elements.
    pub fn update(&mut self, delta: f32) -> Result<(), EntityError> {
        for element in &mut self.elements {
            element.update(delta)?;
        }
        Ok(())
    }

    pub fn draw(&self, batch: &mut dyn RenderBatch) -> Result<(), String> {
        for element in &self.elements {
            element.draw(batch)?;
        }
        Ok(())
    }
}

impl Default for ScreenController {
    fn default() -> Self {
        ScreenController::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::element::{ElementAction, PressState};
    use crate::render::recording::RecordingBatch;
    use crate::sprite::TextureRegion;
    use std::cell::Cell;
    use std::rc::Rc;

    struct CountingAction {
        downs: Rc<Cell<u32>>,
        ups: Rc<Cell<u32>>,
    }

    impl ElementAction for CountingAction {
        fn touch_down(&mut self) {
            self.downs.set(self.downs.get() + 1);
        }

        fn touch_up(&mut self) {
            self.ups.set(self.ups.get() + 1);
        }
    }

    fn counters() -> (Rc<Cell<u32>>, Rc<Cell<u32>>) {
        (Rc::new(Cell::new(0)), Rc::new(Cell::new(0)))
    }

    // 32x32 two-frame button; center sits 16 past the position.
    fn button(position: Vec2) -> GuiElement {
        let sheet = TextureRegion::full("button", 64, 32);
        GuiElement::from_grid(&sheet, 1, 2, position, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_touch_down_presses_first_hit() {
        let mut controller = ScreenController::new();
        let first = controller.add(button(Vec2::new(84.0, 84.0)));
        let second = controller.add(button(Vec2::new(200.0, 84.0)));

        assert!(controller.touch_down(Vec2::new(100.0, 100.0), 5));

        let element = controller.element(first).unwrap();
        assert_eq!(element.state(), PressState::Pressed);
        assert_eq!(element.pointer(), 5);
        assert_eq!(
            controller.element(second).unwrap().state(),
            PressState::NotPressed
        );
    }

    #[test]
    fn test_touch_down_outside_everything() {
        let mut controller = ScreenController::new();
        let handle = controller.add(button(Vec2::new(84.0, 84.0)));

        assert!(!controller.touch_down(Vec2::new(500.0, 500.0), 0));
        assert!(!controller.element(handle).unwrap().is_pressed());
    }

    #[test]
    fn test_overlapping_elements_only_first_claims() {
        let mut controller = ScreenController::new();
        let first = controller.add(button(Vec2::new(84.0, 84.0)));
        let second = controller.add(button(Vec2::new(84.0, 84.0)));

        controller.touch_down(Vec2::new(100.0, 100.0), 0);
        assert!(controller.element(first).unwrap().is_pressed());
        assert!(!controller.element(second).unwrap().is_pressed());
    }

    #[test]
    fn test_release_on_element_fires_action() {
        let (downs, ups) = counters();
        let mut controller = ScreenController::new();
        let mut element = button(Vec2::new(84.0, 84.0));
        element.set_action(Box::new(CountingAction {
            downs: Rc::clone(&downs),
            ups: Rc::clone(&ups),
        }));
        let handle = controller.add(element);

        controller.touch_down(Vec2::new(100.0, 100.0), 0);
        assert!(controller.touch_up(Vec2::new(101.0, 99.0), 0));

        assert_eq!((downs.get(), ups.get()), (1, 1));
        let element = controller.element(handle).unwrap();
        assert!(!element.is_pressed());
        assert_eq!(element.pointer(), GuiElement::NO_POINTER);
    }

    #[test]
    fn test_slide_off_cancels_without_action() {
        let (downs, ups) = counters();
        let mut controller = ScreenController::new();
        let mut element = button(Vec2::new(84.0, 84.0));
        element.set_action(Box::new(CountingAction {
            downs: Rc::clone(&downs),
            ups: Rc::clone(&ups),
        }));
        let handle = controller.add(element);

        controller.touch_down(Vec2::new(100.0, 100.0), 0);
        assert!(controller.touch_up(Vec2::new(500.0, 500.0), 0));

        assert_eq!((downs.get(), ups.get()), (1, 0));
        assert!(!controller.element(handle).unwrap().is_pressed());
    }

    #[test]
    fn test_touch_up_ignores_other_pointers() {
        let mut controller = ScreenController::new();
        let handle = controller.add(button(Vec2::new(84.0, 84.0)));

        controller.touch_down(Vec2::new(100.0, 100.0), 3);
        assert!(!controller.touch_up(Vec2::new(100.0, 100.0), 9));

        let element = controller.element(handle).unwrap();
        assert!(element.is_pressed());
        assert_eq!(element.pointer(), 3);
    }

    #[test]
    fn test_touch_up_without_press_in_flight() {
        let mut controller = ScreenController::new();
        controller.add(button(Vec2::new(84.0, 84.0)));

        assert!(!controller.touch_up(Vec2::new(100.0, 100.0), 0));
    }

    #[test]
    fn test_two_fingers_hold_two_elements() {
        let mut controller = ScreenController::new();
        let first = controller.add(button(Vec2::new(84.0, 84.0)));
        let second = controller.add(button(Vec2::new(200.0, 84.0)));

        controller.touch_down(Vec2::new(100.0, 100.0), 3);
        controller.touch_down(Vec2::new(216.0, 100.0), 9);
        controller.touch_up(Vec2::new(100.0, 100.0), 3);

        assert!(!controller.element(first).unwrap().is_pressed());
        assert!(controller.element(second).unwrap().is_pressed());
        assert_eq!(controller.element(second).unwrap().pointer(), 9);
    }

    #[test]
    fn test_invisible_elements_never_hit() {
        let mut controller = ScreenController::new();
        let handle = controller.add(button(Vec2::new(84.0, 84.0)));
        controller.element_mut(handle).unwrap().set_visible(false);

        assert!(!controller.touch_down(Vec2::new(100.0, 100.0), 0));
    }

    #[test]
    fn test_process_routes_down_and_up() {
        let (downs, ups) = counters();
        let mut controller = ScreenController::new();
        let mut element = button(Vec2::new(84.0, 84.0));
        element.set_action(Box::new(CountingAction {
            downs: Rc::clone(&downs),
            ups: Rc::clone(&ups),
        }));
        controller.add(element);

        controller.process(&[
            PointerEvent::Down {
                at: Vec2::new(100.0, 100.0),
                pointer: 0,
            },
            PointerEvent::Moved {
                at: Vec2::new(102.0, 100.0),
                pointer: 0,
            },
            PointerEvent::Up {
                at: Vec2::new(102.0, 100.0),
                pointer: 0,
            },
        ]);

        assert_eq!((downs.get(), ups.get()), (1, 1));
    }

    #[test]
    fn test_draw_skips_hidden_elements() {
        let mut controller = ScreenController::new();
        controller.add(button(Vec2::new(84.0, 84.0)));
        let hidden = controller.add(button(Vec2::new(200.0, 84.0)));
        controller.element_mut(hidden).unwrap().set_visible(false);

        let mut batch = RecordingBatch::default();
        controller.draw(&mut batch).unwrap();
        assert_eq!(batch.calls.len(), 1);
    }
}
