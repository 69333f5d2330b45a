use super::actions_context::ActionsContext;
use crate::actions::action::Action;
use crate::form::form_array::FormArray;
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user gesture against the action list: picking an action from the add
/// menu, the per-row delete and duplicate buttons, or expanding a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    Add(Action),
    Remove(usize),
    Duplicate(usize),
    Select(usize),
}

impl Command {
    pub fn apply<F: FormArray>(self, ctx: &mut ActionsContext<F>) {
        match self {
            Command::Add(action) => ctx.add_action(action),
            Command::Remove(index) => ctx.remove_action(index),
            Command::Duplicate(index) => ctx.duplicate_action(index),
            Command::Select(index) => ctx.set_selected_action_index(index),
        }
    }
}

/// Applies the commands in order and returns how many were applied.
pub fn replay<F, I>(ctx: &mut ActionsContext<F>, commands: I) -> usize
where
    F: FormArray,
    I: IntoIterator<Item = Command>,
{
    let mut applied = 0;
    for command in commands {
        command.apply(ctx);
        applied += 1;
    }
    applied
}

pub fn commands_from_json_value(value: Value) -> Result<Vec<Command>> {
    if !value.is_array() {
        return Err(eyre!("Command script: expected a JSON array"));
    }
    Ok(serde_json::from_value(value)?)
}

pub fn commands_from_json_str(json_str: &str) -> Result<Vec<Command>> {
    let value: Value = serde_json::from_str(json_str)?;
    commands_from_json_value(value)
}
