use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

// Adds signers to the multisig.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAddress {
    #[serde(default)]
    pub members: Vec<Address>,
}

impl AddAddress {
    pub fn new(members: Vec<Address>) -> Self {
        Self { members }
    }
}
