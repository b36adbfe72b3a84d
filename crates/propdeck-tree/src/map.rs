#![forbid(unsafe_code)]

//! Button-matrix label maps.
//!
//! A map is installed from a JSON array of strings and stored as one
//! contiguous NUL-separated buffer plus an offset list. The offset list
//! always carries one trailing entry pointing at the terminating empty
//! string, mirroring the wire contract that the last map slot is empty.

use std::fmt;

/// An owned button-matrix label map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelMap {
    /// Every label followed by `\0`, then one final `\0` (the terminator
    /// the trailing offset points at).
    buf: String,
    /// Start offset of each label, plus the trailing terminator offset.
    starts: Vec<u32>,
}

impl LabelMap {
    /// Build a map from a JSON array of strings, e.g. `["on","off"]`.
    /// An empty array is legal and produces an empty map.
    pub fn from_json(payload: &str) -> Result<Self, MapError> {
        let labels: Vec<String> =
            serde_json::from_str(payload).map_err(|err| MapError::Parse(err.to_string()))?;

        let total: usize = labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
        let mut buf = String::new();
        buf.try_reserve_exact(total).map_err(|_| MapError::Alloc)?;
        let mut starts = Vec::new();
        starts
            .try_reserve_exact(labels.len() + 1)
            .map_err(|_| MapError::Alloc)?;

        for label in &labels {
            starts.push(buf.len() as u32);
            buf.push_str(label);
            buf.push('\0');
        }
        starts.push(buf.len() as u32);
        buf.push('\0');

        Ok(Self { buf, starts })
    }

    /// Number of labels (the trailing empty entry is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.starts.len() - 1
    }

    /// Whether the map holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The label at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        if index >= self.len() {
            return None;
        }
        let start = self.starts[index] as usize;
        let rest = &self.buf[start..];
        rest.split('\0').next()
    }

    /// The first map entry; the empty string for an empty map. This is what
    /// a `map` read reports.
    #[must_use]
    pub fn first(&self) -> &str {
        self.get(0).unwrap_or("")
    }

    /// Iterate over the labels in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl Default for LabelMap {
    fn default() -> Self {
        Self {
            buf: "\0".to_owned(),
            starts: vec![0],
        }
    }
}

/// Why a label map could not be installed. Either way the previous map
/// stays in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The payload was not a JSON array of strings.
    Parse(String),
    /// The contiguous buffer could not be reserved.
    Alloc,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "bad button map payload: {msg}"),
            Self::Alloc => f.write_str("out of memory while building button map"),
        }
    }
}

impl std::error::Error for MapError {}
