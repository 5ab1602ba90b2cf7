use std::fmt;

/// Describes a recorded step. `Display` renders the text shown by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Initial,
    Set { index: usize, value: i32 },
    Swap { i: usize, j: usize },
    Insert { index: usize, value: i32 },
    Delete { index: usize },
    Complete,
}

impl Action {
    /// Indices the front-end should emphasize for this step
    pub fn highlights(&self) -> Vec<usize> {
        match *self {
            Action::Initial | Action::Complete => Vec::new(),
            Action::Set { index, .. } | Action::Insert { index, .. } | Action::Delete { index } => {
                vec![index]
            }
            Action::Swap { i, j } => vec![i, j],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Initial => write!(f, "Initial array"),
            Action::Set { index, value } => write!(f, "Set arr[{}] = {}", index, value),
            Action::Swap { i, j } => write!(f, "Swap arr[{}] ↔ arr[{}]", i, j),
            Action::Insert { index, value } => write!(f, "Insert {} at index {}", value, index),
            Action::Delete { index } => write!(f, "Delete arr[{}]", index),
            Action::Complete => write!(f, "✓ Sorting complete!"),
        }
    }
}
