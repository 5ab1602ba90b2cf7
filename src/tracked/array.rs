use super::action::Action;
use crate::error::{Result, TrackvizError};
use crate::types::{Snapshot, Trace};

/// Returned by [`TrackedArray::get`] for an out-of-bounds read.
pub const MISSING: i32 = -1;

/// Integer array that records a snapshot before every mutation.
///
/// Each snapshot holds the state *before* the change together with the
/// indices about to be touched, so a front-end can highlight the step and
/// then animate towards the next snapshot.
///
/// The plain mutators (`set`, `swap`, `insert`, `erase`) ignore invalid
/// indices. Use the `try_*` variants to observe the failure.
#[derive(Debug, Clone)]
pub struct TrackedArray {
    data: Vec<i32>,
    trace: Trace,
}

impl TrackedArray {
    pub fn new(initial: &[i32]) -> Self {
        let mut array = Self {
            data: initial.to_vec(),
            trace: Trace::new(),
        };
        array.record(Action::Initial);
        array
    }

    fn record(&mut self, action: Action) {
        log::trace!("recording step {}: {}", self.trace.len(), action);
        self.trace
            .push(Snapshot::new(&self.data, action.highlights(), action.to_string()));
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.data.len() {
            return Err(TrackvizError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn values(&self) -> &[i32] {
        &self.data
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        self.trace.snapshots()
    }

    /// Reads are not recorded.
    pub fn try_get(&self, index: usize) -> Option<i32> {
        self.data.get(index).copied()
    }

    /// Returns [`MISSING`] when `index` is out of bounds.
    pub fn get(&self, index: usize) -> i32 {
        self.try_get(index).unwrap_or(MISSING)
    }

    pub fn try_set(&mut self, index: usize, value: i32) -> Result<()> {
        self.check_index(index)?;
        self.record(Action::Set { index, value });
        self.data[index] = value;
        Ok(())
    }

    pub fn set(&mut self, index: usize, value: i32) {
        if let Err(e) = self.try_set(index, value) {
            log::debug!("ignoring set: {}", e);
        }
    }

    pub fn try_swap(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_index(i)?;
        self.check_index(j)?;
        self.record(Action::Swap { i, j });
        self.data.swap(i, j);
        Ok(())
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        if let Err(e) = self.try_swap(i, j) {
            log::debug!("ignoring swap: {}", e);
        }
    }

    /// `index == len()` appends.
    pub fn try_insert(&mut self, index: usize, value: i32) -> Result<()> {
        if index > self.data.len() {
            return Err(TrackvizError::IndexOutOfBounds {
                index,
                len: self.data.len(),
            });
        }
        self.record(Action::Insert { index, value });
        self.data.insert(index, value);
        Ok(())
    }

    pub fn insert(&mut self, index: usize, value: i32) {
        if let Err(e) = self.try_insert(index, value) {
            log::debug!("ignoring insert: {}", e);
        }
    }

    pub fn try_erase(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.record(Action::Delete { index });
        self.data.remove(index);
        Ok(())
    }

    pub fn erase(&mut self, index: usize) {
        if let Err(e) = self.try_erase(index) {
            log::debug!("ignoring erase: {}", e);
        }
    }

    /// Append the completion snapshot and return the full history.
    ///
    /// Every call appends another completion snapshot.
    pub fn finish(&mut self) -> &Trace {
        self.record(Action::Complete);
        &self.trace
    }

    /// Append the completion snapshot and serialize the history as
    /// `{"trace": [...]}`.
    pub fn emit_trace(&mut self) -> Result<String> {
        self.finish().to_json()
    }

    /// History recorded so far, without a completion snapshot.
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}
