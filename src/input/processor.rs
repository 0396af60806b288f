//! Converts raw host events into composer commands.
//!
//! The `InputProcessor` owns the transient pointer state (cursor position,
//! button state, drag detection). It is the only thing that sits between
//! raw host events and [`SceneComposer::execute`](crate::composer::SceneComposer::execute).

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::scroll::ScrollMetrics;

/// Squared pixel distance a pressed pointer must travel before it counts
/// as a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Commands understood by the scene composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneCommand {
    /// Rotate the camera around its target by a pointer drag delta.
    Orbit {
        /// Drag distance in pixels since the last command.
        delta: Vec2,
    },
    /// Recompute scroll progress from new metrics.
    UpdateScroll(ScrollMetrics),
    /// Viewport size changed; recompute progress and aspect ratio.
    Resize(ScrollMetrics),
}

/// Converts raw input events into [`SceneCommand`]s.
#[derive(Debug, Default)]
pub struct InputProcessor {
    /// Last cursor position, `None` until the first move.
    cursor: Option<Vec2>,
    /// Whether the primary button is held.
    pressed: bool,
    /// Whether the current press has moved past the drag threshold.
    dragging: bool,
    /// Pointer orbit enabled.
    orbit_enabled: bool,
}

impl InputProcessor {
    /// Create a processor; `orbit_enabled` gates pointer orbit commands.
    #[must_use]
    pub fn new(orbit_enabled: bool) -> Self {
        Self {
            orbit_enabled,
            ..Self::default()
        }
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the current press has become a drag.
    #[must_use]
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(Vec2::new(x, y)),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.pressed = pressed;
                    self.dragging = false;
                }
                None
            }
            InputEvent::Scroll(metrics) => Some(SceneCommand::UpdateScroll(metrics)),
            InputEvent::Resized(metrics) => Some(SceneCommand::Resize(metrics)),
            InputEvent::PointerLeft => {
                self.cursor = None;
                self.pressed = false;
                self.dragging = false;
                None
            }
        }
    }

    /// Cursor moved: compute delta, produce an orbit command while dragging.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> Option<SceneCommand> {
        let delta = self.cursor.map_or(Vec2::ZERO, |last| pos - last);
        self.cursor = Some(pos);

        if !self.pressed || !self.orbit_enabled {
            return None;
        }
        if !self.dragging && delta.length_squared() > DRAG_THRESHOLD_SQ {
            self.dragging = true;
        }
        (self.dragging && delta != Vec2::ZERO).then_some(SceneCommand::Orbit { delta })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(p: &mut InputProcessor, pressed: bool) {
        let cmd = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed,
        });
        assert_eq!(cmd, None);
    }

    #[test]
    fn hover_without_press_does_nothing() {
        let mut p = InputProcessor::new(true);
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 }), None);
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 50.0, y: 0.0 }), None);
    }

    #[test]
    fn drag_produces_orbit_deltas() {
        let mut p = InputProcessor::new(true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        press(&mut p, true);
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 20.0, y: 7.0 });
        assert_eq!(
            cmd,
            Some(SceneCommand::Orbit {
                delta: Vec2::new(10.0, -3.0)
            })
        );
        assert!(p.dragging());
        press(&mut p, false);
        assert!(!p.dragging());
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 40.0, y: 7.0 }), None);
    }

    #[test]
    fn sub_threshold_jitter_is_not_a_drag() {
        let mut p = InputProcessor::new(true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        press(&mut p, true);
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 10.5, y: 10.5 }), None);
        assert!(!p.dragging());
    }

    #[test]
    fn orbit_can_be_disabled() {
        let mut p = InputProcessor::new(false);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        press(&mut p, true);
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 30.0, y: 0.0 }), None);
    }

    #[test]
    fn scroll_and_resize_pass_metrics_through() {
        let mut p = InputProcessor::new(true);
        let m = ScrollMetrics {
            offset: 10.0,
            document_height: 2000.0,
            viewport_height: 800.0,
            viewport_width: 1200.0,
        };
        assert_eq!(p.handle_event(InputEvent::Scroll(m)), Some(SceneCommand::UpdateScroll(m)));
        assert_eq!(p.handle_event(InputEvent::Resized(m)), Some(SceneCommand::Resize(m)));
    }

    #[test]
    fn pointer_leave_releases_drag() {
        let mut p = InputProcessor::new(true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        press(&mut p, true);
        let _ = p.handle_event(InputEvent::CursorMoved { x: 30.0, y: 0.0 });
        let _ = p.handle_event(InputEvent::PointerLeft);
        assert!(!p.pressed());
        assert_eq!(p.handle_event(InputEvent::CursorMoved { x: 60.0, y: 0.0 }), None);
    }
}
