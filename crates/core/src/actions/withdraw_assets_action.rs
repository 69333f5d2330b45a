use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawAssets {
    pub recipient: Address,
    pub token: Address,
    pub amount: U256,
}

impl WithdrawAssets {
    pub fn new(recipient: Address, token: Address, amount: U256) -> Self {
        Self {
            recipient,
            token,
            amount,
        }
    }
}
