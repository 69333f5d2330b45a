use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyMetadata {
    pub dao_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl ModifyMetadata {
    pub fn new(dao_name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            dao_name: dao_name.into(),
            summary: summary.into(),
            links: Vec::new(),
        }
    }
}
