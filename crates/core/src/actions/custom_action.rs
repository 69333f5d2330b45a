use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// Any action kind this crate has no typed payload for. The inputs are carried
// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomAction {
    name: String,
    #[serde(flatten)]
    inputs: Map<String, Value>,
}

impl CustomAction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &Map<String, Value> {
        &self.inputs
    }
}
