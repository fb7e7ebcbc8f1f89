use std::fmt;

use serde::Serialize;

/// Which node answered a list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadSource {
    Replica,
    Primary,
    Memory,
}

impl ReadSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Replica => "replica",
            Self::Primary => "primary",
            Self::Memory => "memory",
        }
    }
}

impl fmt::Display for ReadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full contents of one named list, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub items: Vec<String>,
    pub source: ReadSource,
}

impl ListSnapshot {
    #[must_use]
    pub fn new(items: Vec<String>, source: ReadSource) -> Self {
        Self { items, source }
    }

    #[must_use]
    pub fn empty(source: ReadSource) -> Self {
        Self::new(Vec::new(), source)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
