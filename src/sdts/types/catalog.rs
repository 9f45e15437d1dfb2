//! The ordered list of entry names that maps onto top-level offset slots.
//!
//! The catalog is not stored in the container. It must match the engine
//! version that produced the file, otherwise offsets misalign and decoding
//! fails with a corrupt-table error or yields garbage groups.

use std::ops::Index;

/// Entry names used by the engine, in offset-table slot order.
///
/// 35 names give a 36-slot table which fills the bytes between the 24-byte
/// header and the 168-byte preamble exactly.
pub const DEFAULT_ENTRY_NAMES: &[&str] = &[
    "Graphics/mapchip",
    "Graphics/charchip",
    "Graphics/face",
    "Graphics/icon",
    "Graphics/motion",
    "Graphics/effect",
    "Graphics/weapon",
    "Graphics/bookmark",
    "Graphics/thumbnail",
    "Graphics/battleback",
    "Graphics/eventback",
    "Graphics/screenback",
    "Graphics/worldmap",
    "Graphics/eventstill",
    "Graphics/charillust",
    "Graphics/picture",
    "UI/menuwindow",
    "UI/textwindow",
    "UI/title",
    "UI/number",
    "UI/bignumber",
    "UI/gauge",
    "UI/line",
    "UI/risecursor",
    "UI/mapcursor",
    "UI/pagecursor",
    "UI/selectcursor",
    "UI/scrollcursor",
    "UI/panel",
    "UI/faceframe",
    "UI/screenframe",
    "Audio/music",
    "Audio/sound",
    "Fonts",
    "Video",
];

/// An immutable, ordered list of entry names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCatalog {
    names: Vec<String>,
}

impl EntryCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of named entries. The top-level offset table has one more slot.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for EntryCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRY_NAMES.iter().copied())
    }
}

impl Index<usize> for EntryCatalog {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.names[index]
    }
}
