use crate::error::Result;
use serde::{Deserialize, Serialize};

/// One recorded state of the array, paired with the indices the next step touches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<i32>,
    pub highlights: Vec<usize>,
    pub action: String,
}

impl Snapshot {
    pub fn new(data: &[i32], highlights: Vec<usize>, action: impl Into<String>) -> Self {
        Self {
            data: data.to_vec(),
            highlights,
            action: action.into(),
        }
    }
}

/// Ordered history of snapshots, serialized as `{"trace": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    trace: Vec<Snapshot>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, snapshot: Snapshot) {
        self.trace.push(snapshot);
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.trace
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.trace.last()
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the output of an instrumented run back into snapshots.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
