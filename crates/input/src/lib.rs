// Chunk: docs/chunks/input_types - Shared input types crate
//!
//! Input event types for keyboard and pointer handling.
//!
//! These types abstract over whatever the host toolkit delivers (DOM keyboard
//! events, terminal key codes, native window events) and provide a small
//! Rust-native interface for the autocomplete engine. Keys can be built from
//! their DOM `KeyboardEvent.key` names so web-style hosts translate events
//! with a single call to [`Key::from_name`].

/// A keyboard event.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyEvent {
    /// The key that was pressed
    pub key: Key,
    /// Modifier keys held during the event
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Creates a new KeyEvent with the given key and modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Creates a KeyEvent for the given key with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }

    /// Creates a KeyEvent for a single character with no modifiers.
    pub fn char(ch: char) -> Self {
        Self::plain(Key::Char(ch))
    }

    /// Parses a key combination such as `"ArrowDown"` or `"Shift+Enter"`.
    ///
    /// Modifier prefixes use the DOM modifier names (`Shift`, `Control`,
    /// `Alt`, `Meta`) plus a few common aliases. A trailing `+` names the
    /// plus key itself. Returns `None` if any part is not recognized.
    pub fn from_name(combo: &str) -> Option<Self> {
        let mut modifiers = Modifiers::default();
        let mut rest = combo;
        while let Some((prefix, tail)) = rest.split_once('+') {
            if tail.is_empty() {
                break;
            }
            if !modifiers.press(prefix) {
                return None;
            }
            rest = tail;
        }
        Key::from_name(rest).map(|key| Self::new(key, modifiers))
    }
}

/// Modifier state of a key event, as reported by `KeyboardEvent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// `shiftKey`
    pub shift: bool,
    /// `ctrlKey`
    pub ctrl: bool,
    /// `altKey` (Option on macOS)
    pub alt: bool,
    /// `metaKey` (Command on macOS)
    pub meta: bool,
}

impl Modifiers {
    /// True when the event carried no modifier at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Marks the modifier with the given name as held.
    ///
    /// Returns false for names that are not modifiers.
    pub fn press(&mut self, name: &str) -> bool {
        let flag = match name {
            "Shift" => &mut self.shift,
            "Control" | "Ctrl" => &mut self.ctrl,
            "Alt" | "Option" => &mut self.alt,
            "Meta" | "Cmd" | "Command" => &mut self.meta,
            _ => return false,
        };
        *flag = true;
        true
    }
}

/// Keys that can be pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    /// A printable character (already accounts for shift state)
    Char(char),
    /// Backspace
    Backspace,
    /// Forward delete
    Delete,
    /// Return / Enter
    Return,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Home
    Home,
    /// End
    End,
    /// Page Up
    PageUp,
    /// Page Down
    PageDown,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` name.
    ///
    /// Single-character names map to [`Key::Char`]. Multi-character names
    /// that are not listed here (`"F1"`, `"Shift"`, `"Unidentified"`, ...)
    /// return `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Key::Return,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" | "Up" => Key::Up,
            "ArrowDown" | "Down" => Key::Down,
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "Backspace" => Key::Backspace,
            "Delete" | "Del" => Key::Delete,
            "Tab" => Key::Tab,
            "Home" => Key::Home,
            "End" => Key::End,
            "PageUp" => Key::PageUp,
            "PageDown" => Key::PageDown,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Key::Char(ch),
                    _ => return None,
                }
            }
        };
        Some(key)
    }

    /// Returns the DOM name of this key.
    ///
    /// Characters have no static name; they return `None`.
    pub fn name(&self) -> Option<&'static str> {
        let name = match self {
            Key::Char(_) => return None,
            Key::Backspace => "Backspace",
            Key::Delete => "Delete",
            Key::Return => "Enter",
            Key::Escape => "Escape",
            Key::Tab => "Tab",
            Key::Left => "ArrowLeft",
            Key::Right => "ArrowRight",
            Key::Up => "ArrowUp",
            Key::Down => "ArrowDown",
            Key::Home => "Home",
            Key::End => "End",
            Key::PageUp => "PageUp",
            Key::PageDown => "PageDown",
        };
        Some(name)
    }
}

/// Kind of pointer event delivered over a result row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    /// Pointer moved over the row
    Hover,
    /// Row was clicked
    Click,
}
