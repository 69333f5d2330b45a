// Owns the ordered action list of one DAO creation or proposal creation flow.
// Signer changes pull in a single multisig settings action, which is removed
// again together with the last signer change.

use crate::actions::action::Action;
use crate::actions::action_list::{has_edit_multisig_action, has_membership_changes};
use crate::form::form_array::FormArray;
use log::{debug, warn};

pub struct ActionsContext<F: FormArray> {
    actions: Vec<Action>,
    selected_action_index: usize,
    form: F,
}

impl<F: FormArray> ActionsContext<F> {
    pub fn new(form: F) -> Self {
        Self {
            actions: Vec::new(),
            selected_action_index: 0,
            form,
        }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn selected_action_index(&self) -> usize {
        self.selected_action_index
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Ends the flow, handing back the assembled list and the form.
    pub fn into_parts(self) -> (Vec<Action>, F) {
        (self.actions, self.form)
    }

    pub fn add_action(&mut self, new_action: Action) {
        if new_action.is_multisig_settings() {
            warn!(
                "ActionsContext: ignoring {}, it is added automatically with signer changes",
                new_action.name()
            );
            return;
        }
        debug!(
            "ActionsContext: adding {} at {}",
            new_action.name(),
            self.actions.len()
        );
        self.append_with_settings(new_action);
    }

    pub fn remove_action(&mut self, index: usize) {
        let Some(action) = self.actions.get(index) else {
            warn!(
                "ActionsContext: no action at {}, list has {}",
                index,
                self.actions.len()
            );
            return;
        };
        if action.is_multisig_settings() && has_membership_changes(&self.actions) {
            warn!(
                "ActionsContext: keeping {} at {} while signer changes remain",
                action.name(),
                index
            );
            return;
        }

        let removed = self.actions.remove(index);
        self.form.remove(index);
        debug!("ActionsContext: removed {} at {}", removed.name(), index);

        // The last signer change is gone, drop the settings action with it.
        if !has_membership_changes(&self.actions) {
            if let Some(settings_index) = self.actions.iter().position(Action::is_multisig_settings)
            {
                let settings = self.actions.remove(settings_index);
                self.form.remove(settings_index);
                debug!(
                    "ActionsContext: removed {} at {} with the last signer change",
                    settings.name(),
                    settings_index
                );
            }
        }
    }

    /// Appends a copy of the action at `index` to the end of the list.
    pub fn duplicate_action(&mut self, index: usize) {
        let Some(action) = self.actions.get(index).cloned() else {
            warn!(
                "ActionsContext: cannot duplicate {}, list has {}",
                index,
                self.actions.len()
            );
            return;
        };
        if action.is_multisig_settings() {
            warn!("ActionsContext: {} cannot be duplicated", action.name());
            return;
        }
        debug!(
            "ActionsContext: duplicating {} from {} to {}",
            action.name(),
            index,
            self.actions.len()
        );
        self.append_with_settings(action);
    }

    /// Not clamped, the cursor may point past the end of the list.
    pub fn set_selected_action_index(&mut self, index: usize) {
        self.selected_action_index = index;
    }

    fn append_with_settings(&mut self, action: Action) {
        let needs_settings =
            action.updates_multisig_voting() && !has_edit_multisig_action(&self.actions);
        self.push(action);
        if needs_settings {
            debug!(
                "ActionsContext: adding settings action at {}",
                self.actions.len()
            );
            self.push(Action::multisig_settings());
        }
    }

    fn push(&mut self, action: Action) {
        self.form.append(&action);
        self.actions.push(action);
    }
}
