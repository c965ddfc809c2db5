// src/models/report.rs
use crate::models::kind::ChangeKind;
use std::mem;
use std::path::PathBuf;

/// One path list per change kind, kept in detection order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KindLists {
    pub born: Vec<PathBuf>,
    pub modified: Vec<PathBuf>,
    pub changed: Vec<PathBuf>,
    pub accessed: Vec<PathBuf>,
}

impl KindLists {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            born: Vec::new(),
            modified: Vec::new(),
            changed: Vec::new(),
            accessed: Vec::new(),
        }
    }

    #[must_use]
    pub fn list(&self, kind: ChangeKind) -> &[PathBuf] {
        match kind {
            ChangeKind::Born => &self.born,
            ChangeKind::Modified => &self.modified,
            ChangeKind::Changed => &self.changed,
            ChangeKind::Accessed => &self.accessed,
        }
    }

    pub fn list_mut(&mut self, kind: ChangeKind) -> &mut Vec<PathBuf> {
        match kind {
            ChangeKind::Born => &mut self.born,
            ChangeKind::Modified => &mut self.modified,
            ChangeKind::Changed => &mut self.changed,
            ChangeKind::Accessed => &mut self.accessed,
        }
    }

    /// Takes ownership of one kind's list, leaving it empty.
    pub fn take(&mut self, kind: ChangeKind) -> Vec<PathBuf> {
        mem::take(self.list_mut(kind))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.born
            .len()
            .saturating_add(self.modified.len())
            .saturating_add(self.changed.len())
            .saturating_add(self.accessed.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The six relevance buckets a (path, kind) slot can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Logs,
    Ignored,
    Unimportant,
    Notable,
    Key,
    Uncategorized,
}

impl Category {
    /// Console and transcript rendering order.
    pub const RENDER_ORDER: [Self; 6] = [
        Self::Ignored,
        Self::Unimportant,
        Self::Notable,
        Self::Key,
        Self::Logs,
        Self::Uncategorized,
    ];

    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Logs => "Logs",
            Self::Ignored => "Ignored",
            Self::Unimportant => "Unimportant",
            Self::Notable => "Notable",
            Self::Key => "Key",
            Self::Uncategorized => "Uncategorized",
        }
    }
}

/// Final output of the categorization engine: every touched (path, kind)
/// slot appears in exactly one bucket.
#[derive(Debug, Default)]
pub struct CategorizedReport {
    pub logs: KindLists,
    pub ignored: KindLists,
    pub unimportant: KindLists,
    pub notable: KindLists,
    pub key: KindLists,
    pub uncategorized: KindLists,
}

impl CategorizedReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            logs: KindLists::new(),
            ignored: KindLists::new(),
            unimportant: KindLists::new(),
            notable: KindLists::new(),
            key: KindLists::new(),
            uncategorized: KindLists::new(),
        }
    }

    #[must_use]
    pub fn bucket(&self, category: Category) -> &KindLists {
        match category {
            Category::Logs => &self.logs,
            Category::Ignored => &self.ignored,
            Category::Unimportant => &self.unimportant,
            Category::Notable => &self.notable,
            Category::Key => &self.key,
            Category::Uncategorized => &self.uncategorized,
        }
    }

    pub fn bucket_mut(&mut self, category: Category) -> &mut KindLists {
        match category {
            Category::Logs => &mut self.logs,
            Category::Ignored => &mut self.ignored,
            Category::Unimportant => &mut self.unimportant,
            Category::Notable => &mut self.notable,
            Category::Key => &mut self.key,
            Category::Uncategorized => &mut self.uncategorized,
        }
    }
}
