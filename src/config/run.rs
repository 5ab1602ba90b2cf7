use super::traits::ConfigSection;
use crate::error::TrackvizError;
use crate::operations::{Operation, DEFAULT_ARRAY};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub operation: String,
    pub array: Vec<i32>,
    pub pretty: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            operation: Operation::BubbleSort.id().to_string(),
            array: DEFAULT_ARRAY.to_vec(),
            pretty: false,
        }
    }
}

impl RunConfig {
    pub fn operation(&self) -> Result<Operation, TrackvizError> {
        self.operation.parse()
    }
}

impl ConfigSection for RunConfig {
    fn section_name() -> &'static str {
        "run"
    }

    fn validate(&self) -> Result<(), TrackvizError> {
        if let Err(e) = self.operation() {
            return Err(TrackvizError::Configuration(e.to_string()));
        }
        if self.array.is_empty() {
            return Err(TrackvizError::Configuration(
                "Array must contain at least one element".to_string()
            ));
        }
        Ok(())
    }
}
