use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

// Removes signers from the multisig.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveAddress {
    #[serde(default)]
    pub members: Vec<Address>,
}

impl RemoveAddress {
    pub fn new(members: Vec<Address>) -> Self {
        Self { members }
    }
}
