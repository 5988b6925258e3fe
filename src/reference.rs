use std::fmt::{Display, Formatter};

/// Handle to a node in the [`Logic`][crate::logic::Logic] arena.
///
/// Index 0 is the reserved null slot, so every valid handle is `>= 1`.
/// A handle also records which manager allocated it; managers reject
/// handles carrying another manager's id. Clones of a manager share its id.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ref {
    index: u32,
    manager: u32,
}

impl Ref {
    /// Creates a handle that belongs to no manager.
    pub const fn new(index: u32) -> Self {
        Self::with_manager(index, 0)
    }

    pub(crate) const fn with_manager(index: u32, manager: u32) -> Self {
        assert!(index != 0, "Node index should not be zero");
        Self { index, manager }
    }

    /// Return the internal representation of the reference.
    pub const fn get(self) -> u32 {
        self.index
    }

    /// Return the index of the referenced node in the arena.
    pub const fn index(self) -> usize {
        self.index as usize
    }

    /// Id of the manager that allocated this handle (0 for none).
    pub const fn manager(self) -> u32 {
        self.manager
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.index)
    }
}
