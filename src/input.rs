//! Translates SDL events into pointer events in world coordinates.
//!
//! SDL reports mouse positions in pixels from the top-left and finger
//! positions normalized to 0..1, both with y growing downward. Everything
//! here comes out the other side as bottom-left-origin points, so the rest
//! of the crate never sees a flipped axis.

use sdl2::EventPump;
use sdl2::event::Event;

use crate::geometry::Vec2;
use crate::screen::ScreenConfig;

/// Pointer id carried by every mouse event. Finger events carry the id SDL
/// assigned to the finger instead.
pub const MOUSE_POINTER: i64 = 0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down { at: Vec2, pointer: i64 },
    Up { at: Vec2, pointer: i64 },
    Moved { at: Vec2, pointer: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Quit,
}

fn mouse_point(x: i32, y: i32, screen: &ScreenConfig) -> Vec2 {
    Vec2::new(x as f32, screen.flip_y(y as f32))
}

fn finger_point(x: f32, y: f32, screen: &ScreenConfig) -> Vec2 {
    Vec2::new(x * screen.width, screen.flip_y(y * screen.height))
}

/// Maps one SDL event onto the crate's input model. Events with no pointer
/// or quit meaning come back as `None`.
pub fn translate_event(event: &Event, screen: &ScreenConfig) -> Option<InputEvent> {
    match *event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::MouseButtonDown { x, y, .. } => Some(InputEvent::Pointer(PointerEvent::Down {
            at: mouse_point(x, y, screen),
            pointer: MOUSE_POINTER,
        })),
        Event::MouseButtonUp { x, y, .. } => Some(InputEvent::Pointer(PointerEvent::Up {
            at: mouse_point(x, y, screen),
            pointer: MOUSE_POINTER,
        })),
        Event::MouseMotion { x, y, .. } => Some(InputEvent::Pointer(PointerEvent::Moved {
            at: mouse_point(x, y, screen),
            pointer: MOUSE_POINTER,
        })),
        Event::FingerDown { finger_id, x, y, .. } => Some(InputEvent::Pointer(PointerEvent::Down {
            at: finger_point(x, y, screen),
            pointer: finger_id,
        })),
        Event::FingerUp { finger_id, x, y, .. } => Some(InputEvent::Pointer(PointerEvent::Up {
            at: finger_point(x, y, screen),
            pointer: finger_id,
        })),
        Event::FingerMotion { finger_id, x, y, .. } => {
            Some(InputEvent::Pointer(PointerEvent::Moved {
                at: finger_point(x, y, screen),
                pointer: finger_id,
            }))
        }
        _ => None,
    }
}

/// Drains the SDL event queue into this frame's input events.
pub fn poll_input(pump: &mut EventPump, screen: &ScreenConfig) -> Vec<InputEvent> {
    pump.poll_iter()
        .filter_map(|event| translate_event(&event, screen))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::mouse::MouseButton;

    fn screen() -> ScreenConfig {
        ScreenConfig::new(640.0, 360.0)
    }

    #[test]
    fn test_quit_translates() {
        let event = Event::Quit { timestamp: 0 };
        assert_eq!(translate_event(&event, &screen()), Some(InputEvent::Quit));
    }

    #[test]
    fn test_mouse_button_flips_y() {
        let event = Event::MouseButtonDown {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 10,
            y: 60,
        };
        assert_eq!(
            translate_event(&event, &screen()),
            Some(InputEvent::Pointer(PointerEvent::Down {
                at: Vec2::new(10.0, 300.0),
                pointer: MOUSE_POINTER,
            }))
        );

        let event = Event::MouseButtonUp {
            timestamp: 0,
            window_id: 0,
            which: 0,
            mouse_btn: MouseButton::Left,
            clicks: 1,
            x: 10,
            y: 60,
        };
        assert_eq!(
            translate_event(&event, &screen()),
            Some(InputEvent::Pointer(PointerEvent::Up {
                at: Vec2::new(10.0, 300.0),
                pointer: MOUSE_POINTER,
            }))
        );
    }

    #[test]
    fn test_finger_scales_to_screen() {
        let event = Event::FingerDown {
            timestamp: 0,
            touch_id: 1,
            finger_id: 42,
            x: 0.5,
            y: 0.25,
            dx: 0.0,
            dy: 0.0,
            pressure: 1.0,
        };
        assert_eq!(
            translate_event(&event, &screen()),
            Some(InputEvent::Pointer(PointerEvent::Down {
                at: Vec2::new(320.0, 270.0),
                pointer: 42,
            }))
        );
    }

    #[test]
    fn test_unrelated_events_ignored() {
        let event = Event::TextInput {
            timestamp: 0,
            window_id: 0,
            text: String::from("a"),
        };
        assert_eq!(translate_event(&event, &screen()), None);
    }
}
