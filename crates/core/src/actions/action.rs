use super::{
    add_address_action::AddAddress, custom_action::CustomAction, mint_tokens_action::MintTokens,
    modify_metadata_action::ModifyMetadata,
    modify_multisig_voting_settings_action::MultisigVotingSettings,
    remove_address_action::RemoveAddress, withdraw_assets_action::WithdrawAssets,
};
use eyre::{Result, eyre};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};
use serde_json::{Map, Value};

pub const ADD_ADDRESS: &str = "add_address";
pub const REMOVE_ADDRESS: &str = "remove_address";
pub const MODIFY_MULTISIG_VOTING_SETTINGS: &str = "modify_multisig_voting_settings";
pub const WITHDRAW_ASSETS: &str = "withdraw_assets";
pub const MINT_TOKENS: &str = "mint_tokens";
pub const MODIFY_METADATA: &str = "modify_metadata";

const KNOWN_ACTIONS: [&str; 6] = [
    ADD_ADDRESS,
    REMOVE_ADDRESS,
    MODIFY_MULTISIG_VOTING_SETTINGS,
    WITHDRAW_ASSETS,
    MINT_TOKENS,
    MODIFY_METADATA,
];

/// One governance operation queued for a proposal.
///
/// On the wire an action is an object whose `name` field selects the kind.
/// Names without a typed payload deserialize into [`Action::Custom`].
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    AddAddress(AddAddress),
    RemoveAddress(RemoveAddress),
    ModifyMultisigVotingSettings(MultisigVotingSettings),
    WithdrawAssets(WithdrawAssets),
    MintTokens(MintTokens),
    ModifyMetadata(ModifyMetadata),
    Custom(CustomAction),
}

// Wire form of the typed kinds.
#[derive(Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "snake_case")]
enum TaggedAction {
    AddAddress(AddAddress),
    RemoveAddress(RemoveAddress),
    ModifyMultisigVotingSettings(MultisigVotingSettings),
    WithdrawAssets(WithdrawAssets),
    MintTokens(MintTokens),
    ModifyMetadata(ModifyMetadata),
}

impl From<TaggedAction> for Action {
    fn from(tagged: TaggedAction) -> Self {
        match tagged {
            TaggedAction::AddAddress(a) => Action::AddAddress(a),
            TaggedAction::RemoveAddress(a) => Action::RemoveAddress(a),
            TaggedAction::ModifyMultisigVotingSettings(a) => Action::ModifyMultisigVotingSettings(a),
            TaggedAction::WithdrawAssets(a) => Action::WithdrawAssets(a),
            TaggedAction::MintTokens(a) => Action::MintTokens(a),
            TaggedAction::ModifyMetadata(a) => Action::ModifyMetadata(a),
        }
    }
}

impl Action {
    /// The settings action synthesized next to membership changes.
    pub fn multisig_settings() -> Self {
        Action::ModifyMultisigVotingSettings(MultisigVotingSettings::default())
    }

    /// Builds an action from a name and its inputs. Known names are parsed
    /// into their typed payload and fail if the inputs do not fit it.
    pub fn custom(name: impl Into<String>, inputs: Map<String, Value>) -> Result<Self> {
        let name = name.into();
        let mut object = inputs;
        object.insert("name".to_string(), Value::String(name.clone()));
        serde_json::from_value(Value::Object(object))
            .map_err(|e| eyre!("Action: invalid inputs for {}: {}", name, e))
    }

    pub fn name(&self) -> &str {
        match self {
            Action::AddAddress(_) => ADD_ADDRESS,
            Action::RemoveAddress(_) => REMOVE_ADDRESS,
            Action::ModifyMultisigVotingSettings(_) => MODIFY_MULTISIG_VOTING_SETTINGS,
            Action::WithdrawAssets(_) => WITHDRAW_ASSETS,
            Action::MintTokens(_) => MINT_TOKENS,
            Action::ModifyMetadata(_) => MODIFY_METADATA,
            Action::Custom(custom) => custom.name(),
        }
    }

    /// True for actions that change the set of multisig signers.
    pub fn updates_multisig_voting(&self) -> bool {
        matches!(self, Action::AddAddress(_) | Action::RemoveAddress(_))
    }

    pub fn is_multisig_settings(&self) -> bool {
        matches!(self, Action::ModifyMultisigVotingSettings(_))
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let tagged = match self {
            Action::AddAddress(a) => TaggedAction::AddAddress(a.clone()),
            Action::RemoveAddress(a) => TaggedAction::RemoveAddress(a.clone()),
            Action::ModifyMultisigVotingSettings(a) => {
                TaggedAction::ModifyMultisigVotingSettings(*a)
            }
            Action::WithdrawAssets(a) => TaggedAction::WithdrawAssets(a.clone()),
            Action::MintTokens(a) => TaggedAction::MintTokens(a.clone()),
            Action::ModifyMetadata(a) => TaggedAction::ModifyMetadata(a.clone()),
            Action::Custom(custom) => return custom.serialize(serializer),
        };
        tagged.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Action {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let known = match value.get("name").and_then(Value::as_str) {
            Some(name) => KNOWN_ACTIONS.contains(&name),
            None => {
                return Err(D::Error::custom(
                    "Invalid action: expected an object with a string `name` field",
                ));
            }
        };
        if known {
            let tagged: TaggedAction = serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(tagged.into())
        } else {
            let custom: CustomAction = serde_json::from_value(value).map_err(D::Error::custom)?;
            Ok(Action::Custom(custom))
        }
    }
}

impl From<AddAddress> for Action {
    fn from(action: AddAddress) -> Self {
        Action::AddAddress(action)
    }
}

impl From<RemoveAddress> for Action {
    fn from(action: RemoveAddress) -> Self {
        Action::RemoveAddress(action)
    }
}

impl From<WithdrawAssets> for Action {
    fn from(action: WithdrawAssets) -> Self {
        Action::WithdrawAssets(action)
    }
}

impl From<MintTokens> for Action {
    fn from(action: MintTokens) -> Self {
        Action::MintTokens(action)
    }
}

impl From<ModifyMetadata> for Action {
    fn from(action: ModifyMetadata) -> Self {
        Action::ModifyMetadata(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, address};
    use serde_json::json;

    #[test]
    fn test_known_action_from_json() -> Result<()> {
        let action: Action = serde_json::from_value(json!({
            "name": "add_address",
            "members": ["0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d"]
        }))?;
        assert_eq!(
            action,
            Action::AddAddress(AddAddress::new(vec![address!(
                "0x5F2F11ad8656439d5C14d9B351f8b09cDaC2A02d"
            )]))
        );
        assert!(action.updates_multisig_voting());
        assert!(!action.is_multisig_settings());
        Ok(())
    }

    #[test]
    fn test_synthesized_settings_serializes_to_bare_name() -> Result<()> {
        let value = serde_json::to_value(Action::multisig_settings())?;
        assert_eq!(value, json!({ "name": "modify_multisig_voting_settings" }));

        let parsed: Action = serde_json::from_value(value)?;
        assert!(parsed.is_multisig_settings());
        assert!(!parsed.updates_multisig_voting());
        Ok(())
    }

    #[test]
    fn test_unknown_name_is_kept_as_custom() -> Result<()> {
        let raw = json!({
            "name": "update_plugin",
            "plugin": "0x1111111111111111111111111111111111111111",
            "version": { "release": 1, "build": 2 }
        });
        let action: Action = serde_json::from_value(raw.clone())?;
        match &action {
            Action::Custom(custom) => {
                assert_eq!(custom.name(), "update_plugin");
                assert_eq!(custom.inputs().len(), 2);
            }
            other => panic!("expected a custom action, got {:?}", other),
        }
        assert_eq!(action.name(), "update_plugin");
        assert_eq!(serde_json::to_value(&action)?, raw);
        Ok(())
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let result = serde_json::from_value::<Action>(json!({ "members": [] }));
        assert!(result.is_err());
        let result = serde_json::from_value::<Action>(json!({ "name": 7 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_known_name_with_bad_payload_is_rejected() {
        let result = serde_json::from_value::<Action>(json!({
            "name": "withdraw_assets",
            "recipient": "not an address"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_constructor_routes_known_names() -> Result<()> {
        let mut inputs = Map::new();
        inputs.insert(
            "recipient".to_string(),
            json!("0x4444444444444444444444444444444444444444"),
        );
        inputs.insert("amount".to_string(), json!("0x64"));
        let action = Action::custom(MINT_TOKENS, inputs)?;
        assert_eq!(
            action,
            Action::MintTokens(MintTokens::new(
                address!("0x4444444444444444444444444444444444444444"),
                U256::from(100)
            ))
        );

        let action = Action::custom("set_plugin_metadata", Map::new())?;
        assert_eq!(action.name(), "set_plugin_metadata");
        assert!(matches!(action, Action::Custom(_)));
        Ok(())
    }
}
