use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MintTokens {
    pub recipient: Address,
    pub amount: U256,
}

impl MintTokens {
    pub fn new(recipient: Address, amount: U256) -> Self {
        Self { recipient, amount }
    }
}
