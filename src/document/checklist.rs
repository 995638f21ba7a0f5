use serde::Serialize;

/// Number of items a well-formed checklist holds.
pub const CHECKLIST_SIZE: usize = 6;

/// What was found of the acceptance checklist in one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistInfo {
    pub found: bool,
    pub item_count: usize,
    pub marked_count: usize,
}

impl ChecklistInfo {
    #[must_use]
    pub const fn has_valid_format(&self) -> bool {
        self.found && self.item_count == CHECKLIST_SIZE
    }

    #[must_use]
    pub const fn is_fully_marked(&self) -> bool {
        self.has_valid_format() && self.marked_count == CHECKLIST_SIZE
    }
}
