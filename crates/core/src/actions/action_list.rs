use super::action::Action;

pub fn has_edit_multisig_action(actions: &[Action]) -> bool {
    actions.iter().any(Action::is_multisig_settings)
}

pub fn has_membership_changes(actions: &[Action]) -> bool {
    actions.iter().any(Action::updates_multisig_voting)
}

/// A list is settled when it carries exactly one settings action if any
/// signer changes are queued, and none otherwise.
pub fn invariant_holds(actions: &[Action]) -> bool {
    let settings = actions.iter().filter(|a| a.is_multisig_settings()).count();
    if has_membership_changes(actions) {
        settings == 1
    } else {
        settings == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{
        add_address_action::AddAddress, modify_metadata_action::ModifyMetadata,
        remove_address_action::RemoveAddress,
    };

    #[test]
    fn test_empty_list_is_settled() {
        assert!(!has_edit_multisig_action(&[]));
        assert!(!has_membership_changes(&[]));
        assert!(invariant_holds(&[]));
    }

    #[test]
    fn test_membership_without_settings_is_unsettled() {
        let actions = vec![Action::from(AddAddress::default())];
        assert!(has_membership_changes(&actions));
        assert!(!invariant_holds(&actions));
    }

    #[test]
    fn test_double_settings_is_unsettled() {
        let actions = vec![
            Action::from(RemoveAddress::default()),
            Action::multisig_settings(),
            Action::multisig_settings(),
        ];
        assert!(!invariant_holds(&actions));
    }

    #[test]
    fn test_orphan_settings_is_unsettled() {
        let actions = vec![
            Action::from(ModifyMetadata::new("Aurora DAO", "")),
            Action::multisig_settings(),
        ];
        assert!(has_edit_multisig_action(&actions));
        assert!(!invariant_holds(&actions));
    }
}
