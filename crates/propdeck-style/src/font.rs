#![forbid(unsafe_code)]

//! Font references and the fixed font id table.
//!
//! Attribute payloads address fonts by small integer id: ids 0–3 are theme
//! slots the host registers at startup, id 8 is the built-in icon font, and
//! ids 12/16/22/28 are the statically compiled-in sizes. An unknown id
//! resolves to nothing and callers leave the current font unchanged.

/// A resolved font reference the toolkit can install on a style part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontId {
    /// One of the four theme font slots (0–3).
    Theme(u8),
    /// The 8 px icon font.
    Icon8,
    /// Built-in 12 px font.
    Size12,
    /// Built-in 16 px font.
    Size16,
    /// Built-in 22 px font.
    Size22,
    /// Built-in 28 px font.
    Size28,
}

impl FontId {
    /// The wire id this font is addressed by.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Theme(slot) => slot,
            Self::Icon8 => 8,
            Self::Size12 => 12,
            Self::Size16 => 16,
            Self::Size22 => 22,
            Self::Size28 => 28,
        }
    }
}

/// The per-session font id table.
///
/// Theme slots are registered individually; slot 0 starts empty (the host
/// may fill it with a loaded font later), slots 1–3 start registered, which
/// mirrors the normal/subtitle/title theme fonts being always present.
#[derive(Debug, Clone)]
pub struct FontTable {
    theme: [bool; 4],
}

impl FontTable {
    /// Create the default table: theme slots 1–3 registered, slot 0 empty.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            theme: [false, true, true, true],
        }
    }

    /// Mark a theme slot (0–3) as registered. Out-of-range slots are ignored.
    pub fn register_theme(&mut self, slot: u8) {
        if let Some(entry) = self.theme.get_mut(usize::from(slot)) {
            *entry = true;
        }
    }

    /// Resolve a wire font id. `None` means "leave the current font alone".
    #[must_use]
    pub fn lookup(&self, id: u8) -> Option<FontId> {
        match id {
            0..=3 => self.theme[usize::from(id)].then_some(FontId::Theme(id)),
            8 => Some(FontId::Icon8),
            12 => Some(FontId::Size12),
            16 => Some(FontId::Size16),
            22 => Some(FontId::Size22),
            28 => Some(FontId::Size28),
            _ => None,
        }
    }
}

impl Default for FontTable {
    fn default() -> Self {
        Self::new()
    }
}
