pub mod actions {
    pub mod action;
    pub mod action_list;
    pub mod add_address_action;
    pub mod custom_action;
    pub mod mint_tokens_action;
    pub mod modify_metadata_action;
    pub mod modify_multisig_voting_settings_action;
    pub mod remove_address_action;
    pub mod withdraw_assets_action;
}

pub mod action_manager {
    pub mod actions_context;
    pub mod command;
    pub mod summary;
}

pub mod form {
    pub mod field_array;
    pub mod form_array;
}

pub mod types {
    pub mod config_wrapper;
}

pub use action_manager::actions_context::ActionsContext;
pub use actions::action::Action;
pub use form::{field_array::FieldArray, form_array::FormArray};
