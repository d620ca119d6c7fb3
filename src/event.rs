//! Input model - keyboard and pointer events fed into widgets
//!
//! Widgets never read input devices themselves. Hosts translate their native
//! events into [`Event`] (adapters for crossterm and winit are provided behind
//! the `tui` and `gui` features) and hand them to the focused widget.

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    F(u8),
    Ctrl(char),
    Alt(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Enter,
    Tab,
    Esc,
    Null,
}

impl Key {
    /// Keys that commit a selection (Enter or Space)
    pub fn is_commit(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16), // button, col, row
    Release(u16, u16),            // col, row
    Hold(u16, u16),               // col, row (drag or move)
    ScrollUp(u16, u16),           // col, row
    ScrollDown(u16, u16),         // col, row
}

/// UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(Key),
    /// Mouse event
    Mouse(MouseEvent),
    /// Focus gained
    FocusGained,
    /// Focus lost
    FocusLost,
}

/// Event handler trait for widgets that consume raw input
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }

    /// Called when the widget gains focus
    fn on_focus(&mut self) {}

    /// Called when the widget loses focus
    fn on_blur(&mut self) {}
}

#[cfg(feature = "tui")]
mod tui {
    use super::{Event, Key, MouseButton, MouseEvent};
    use crossterm::event::{
        Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CButton, MouseEventKind,
    };

    impl Event {
        /// Convert a crossterm event, dropping the ones widgets have no use for
        pub fn from_crossterm(event: CEvent) -> Option<Event> {
            match event {
                CEvent::Key(KeyEvent {
                    code, modifiers, ..
                }) => Some(Event::Key(convert_key(code, modifiers))),
                CEvent::Mouse(me) => {
                    let (col, row) = (me.column, me.row);
                    let mouse_event = match me.kind {
                        MouseEventKind::Down(btn) => {
                            MouseEvent::Press(convert_button(btn), col, row)
                        }
                        MouseEventKind::Up(_) => MouseEvent::Release(col, row),
                        MouseEventKind::Drag(_) | MouseEventKind::Moved => {
                            MouseEvent::Hold(col, row)
                        }
                        MouseEventKind::ScrollUp => MouseEvent::ScrollUp(col, row),
                        MouseEventKind::ScrollDown => MouseEvent::ScrollDown(col, row),
                        _ => return None,
                    };
                    Some(Event::Mouse(mouse_event))
                }
                CEvent::FocusGained => Some(Event::FocusGained),
                CEvent::FocusLost => Some(Event::FocusLost),
                _ => None,
            }
        }
    }

    fn convert_button(btn: CButton) -> MouseButton {
        match btn {
            CButton::Left => MouseButton::Left,
            CButton::Right => MouseButton::Right,
            CButton::Middle => MouseButton::Middle,
        }
    }

    /// Convert crossterm key code to our Key type
    fn convert_key(code: KeyCode, mods: KeyModifiers) -> Key {
        if mods.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char(c) = code {
                return Key::Ctrl(c);
            }
        }

        if mods.contains(KeyModifiers::ALT) {
            if let KeyCode::Char(c) = code {
                return Key::Alt(c);
            }
        }

        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::F(n) => Key::F(n),
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Insert => Key::Insert,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Esc => Key::Esc,
            _ => Key::Null,
        }
    }
}

#[cfg(feature = "gui")]
mod gui {
    use super::{Key, MouseButton};
    use winit::keyboard::{Key as WKey, ModifiersState, NamedKey};

    impl Key {
        /// Convert a winit logical key
        pub fn from_winit(key: &WKey, mods: ModifiersState) -> Key {
            match key {
                WKey::Character(s) => {
                    let Some(c) = s.chars().next() else {
                        return Key::Null;
                    };
                    if mods.control_key() {
                        Key::Ctrl(c)
                    } else if mods.alt_key() {
                        Key::Alt(c)
                    } else {
                        Key::Char(c)
                    }
                }
                WKey::Named(named) => match named {
                    NamedKey::ArrowUp => Key::Up,
                    NamedKey::ArrowDown => Key::Down,
                    NamedKey::ArrowLeft => Key::Left,
                    NamedKey::ArrowRight => Key::Right,
                    NamedKey::Home => Key::Home,
                    NamedKey::End => Key::End,
                    NamedKey::PageUp => Key::PageUp,
                    NamedKey::PageDown => Key::PageDown,
                    NamedKey::Backspace => Key::Backspace,
                    NamedKey::Delete => Key::Delete,
                    NamedKey::Insert => Key::Insert,
                    NamedKey::Enter => Key::Enter,
                    NamedKey::Tab if mods.shift_key() => Key::BackTab,
                    NamedKey::Tab => Key::Tab,
                    NamedKey::Escape => Key::Esc,
                    NamedKey::Space => Key::Char(' '),
                    NamedKey::F1 => Key::F(1),
                    NamedKey::F2 => Key::F(2),
                    NamedKey::F3 => Key::F(3),
                    NamedKey::F4 => Key::F(4),
                    NamedKey::F5 => Key::F(5),
                    NamedKey::F6 => Key::F(6),
                    NamedKey::F7 => Key::F(7),
                    NamedKey::F8 => Key::F(8),
                    NamedKey::F9 => Key::F(9),
                    NamedKey::F10 => Key::F(10),
                    NamedKey::F11 => Key::F(11),
                    NamedKey::F12 => Key::F(12),
                    _ => Key::Null,
                },
                _ => Key::Null,
            }
        }
    }

    impl MouseButton {
        /// Convert a winit mouse button (extra buttons are not used by widgets)
        pub fn from_winit(button: winit::event::MouseButton) -> Option<MouseButton> {
            match button {
                winit::event::MouseButton::Left => Some(MouseButton::Left),
                winit::event::MouseButton::Right => Some(MouseButton::Right),
                winit::event::MouseButton::Middle => Some(MouseButton::Middle),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_variants() {
        let k = Key::Char('a');
        assert_eq!(k, Key::Char('a'));

        let k2 = Key::Ctrl('c');
        assert_eq!(k2, Key::Ctrl('c'));
    }

    #[test]
    fn test_commit_keys() {
        assert!(Key::Enter.is_commit());
        assert!(Key::Char(' ').is_commit());
        assert!(!Key::Char('x').is_commit());
        assert!(!Key::Tab.is_commit());
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_crossterm_conversion() {
        use crossterm::event::{
            Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CButton,
            MouseEvent as CMouseEvent, MouseEventKind,
        };

        let down = CEvent::Key(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(Event::from_crossterm(down), Some(Event::Key(Key::Down)));

        let ctrl_c = CEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(Event::from_crossterm(ctrl_c), Some(Event::Key(Key::Ctrl('c'))));

        let click = CEvent::Mouse(CMouseEvent {
            kind: MouseEventKind::Down(CButton::Left),
            column: 4,
            row: 2,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            Event::from_crossterm(click),
            Some(Event::Mouse(MouseEvent::Press(MouseButton::Left, 4, 2)))
        );

        assert_eq!(Event::from_crossterm(CEvent::Resize(80, 24)), None);
    }

    #[cfg(feature = "gui")]
    #[test]
    fn test_winit_conversion() {
        use winit::keyboard::{Key as WKey, ModifiersState, NamedKey};

        let none = ModifiersState::empty();
        assert_eq!(Key::from_winit(&WKey::Named(NamedKey::ArrowDown), none), Key::Down);
        assert_eq!(Key::from_winit(&WKey::Named(NamedKey::Space), none), Key::Char(' '));
        assert_eq!(
            Key::from_winit(&WKey::Named(NamedKey::Tab), ModifiersState::SHIFT),
            Key::BackTab
        );
        assert_eq!(
            Key::from_winit(&WKey::Character("k".into()), ModifiersState::CONTROL),
            Key::Ctrl('k')
        );
    }
}
