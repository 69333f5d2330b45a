use serde::{Deserialize, Serialize};

/// Voting settings of the multisig. Both fields stay empty when the action is
/// synthesized, the form fills them in later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultisigVotingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_approvals: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub only_listed: Option<bool>,
}

impl MultisigVotingSettings {
    pub fn new(min_approvals: u32, only_listed: bool) -> Self {
        Self {
            min_approvals: Some(min_approvals),
            only_listed: Some(only_listed),
        }
    }
}
