// src/models/kind.rs

/// The four change kinds a touched file can be reported under.
///
/// `Born` is the creation-time proxy, `Modified` is a content change,
/// `Changed` is an inode/metadata change and `Accessed` is a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Born,
    Modified,
    Changed,
    Accessed,
}

impl ChangeKind {
    /// Detection and report order. The order matters: detection assigns a
    /// file to the first matching kind only.
    pub const ALL: [Self; 4] = [Self::Born, Self::Modified, Self::Changed, Self::Accessed];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Born => "Born",
            Self::Modified => "Modified",
            Self::Changed => "Changed",
            Self::Accessed => "Accessed",
        }
    }
}

/// Per-kind enable flags, resolved from the command line.
#[derive(Debug, Clone, Copy)]
pub struct EnabledKinds {
    pub born: bool,
    pub modified: bool,
    pub changed: bool,
    pub accessed: bool,
}

impl EnabledKinds {
    #[must_use]
    pub const fn contains(self, kind: ChangeKind) -> bool {
        match kind {
            ChangeKind::Born => self.born,
            ChangeKind::Modified => self.modified,
            ChangeKind::Changed => self.changed,
            ChangeKind::Accessed => self.accessed,
        }
    }
}

impl Default for EnabledKinds {
    fn default() -> Self {
        Self {
            born: true,
            modified: true,
            changed: false,
            accessed: false,
        }
    }
}
