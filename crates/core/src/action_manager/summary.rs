use super::actions_context::ActionsContext;
use crate::actions::action::Action;
use crate::actions::action_list::invariant_holds;
use crate::form::field_array::{FieldArray, FormField};
use serde::Serialize;

// Snapshot of a flow, printed by the CLI after a replay.
#[derive(Debug, Serialize)]
pub struct ActionListSummary {
    pub actions: Vec<Action>,
    pub selected_action_index: usize,
    pub form_field: String,
    pub form_rows: Vec<FormField>,
    pub invariant_holds: bool,
}

impl ActionListSummary {
    pub fn from_context(ctx: &ActionsContext<FieldArray>) -> Self {
        Self {
            actions: ctx.actions().to_vec(),
            selected_action_index: ctx.selected_action_index(),
            form_field: ctx.form().name().to_string(),
            form_rows: ctx.form().fields().to_vec(),
            invariant_holds: invariant_holds(ctx.actions()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::remove_address_action::RemoveAddress;
    use eyre::Result;

    #[test]
    fn test_summary_of_context() -> Result<()> {
        let mut ctx = ActionsContext::new(FieldArray::new("dao_actions"));
        ctx.add_action(RemoveAddress::default().into());
        ctx.set_selected_action_index(1);

        let summary = ActionListSummary::from_context(&ctx);
        assert_eq!(summary.actions.len(), 2);
        assert_eq!(summary.form_rows.len(), 2);
        assert_eq!(summary.form_field, "dao_actions");
        assert_eq!(summary.selected_action_index, 1);
        assert!(summary.invariant_holds);

        let value = serde_json::to_value(&summary)?;
        assert_eq!(value["actions"][1]["name"], "modify_multisig_voting_settings");
        Ok(())
    }
}
