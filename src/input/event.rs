use crate::scroll::ScrollMetrics;

/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`SceneCommand`](super::SceneCommand) values.
///
/// # Example
///
/// ```ignore
/// if let Some(cmd) = processor.handle_event(InputEvent::CursorMoved { x: 100.0, y: 200.0 }) {
///     composer.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to absolute screen position.
    CursorMoved {
        /// Horizontal position in CSS pixels.
        x: f32,
        /// Vertical position in CSS pixels.
        y: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
    /// Document scrolled; carries freshly sampled metrics.
    Scroll(ScrollMetrics),
    /// Viewport resized; carries freshly sampled metrics.
    Resized(ScrollMetrics),
    /// Pointer left the page.
    PointerLeft,
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code. Back, forward and other extra
    /// buttons have no counterpart and map to `None`.
    #[must_use]
    pub fn from_dom(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Left),
            1 => Some(Self::Middle),
            2 => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_button_codes() {
        assert_eq!(MouseButton::from_dom(0), Some(MouseButton::Left));
        assert_eq!(MouseButton::from_dom(1), Some(MouseButton::Middle));
        assert_eq!(MouseButton::from_dom(2), Some(MouseButton::Right));
    }

    #[test]
    fn back_and_forward_buttons_are_unmapped() {
        assert_eq!(MouseButton::from_dom(3), None);
        assert_eq!(MouseButton::from_dom(4), None);
        assert_eq!(MouseButton::from_dom(-1), None);
    }
}
