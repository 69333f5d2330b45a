use super::form_array::FormArray;
use crate::actions::action::Action;
use log::{trace, warn};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormField {
    pub id: Uuid,
    pub value: Value,
}

/// In-memory field array. Every appended row gets a fresh key so rows can be
/// told apart after removals shift them.
#[derive(Debug, Clone)]
pub struct FieldArray {
    name: String,
    fields: Vec<FormField>,
}

impl FieldArray {
    pub const DEFAULT_NAME: &'static str = "actions";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn values(&self) -> Vec<Value> {
        self.fields.iter().map(|f| f.value.clone()).collect()
    }
}

impl Default for FieldArray {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAME)
    }
}

impl FormArray for FieldArray {
    fn append(&mut self, action: &Action) {
        let value = match serde_json::to_value(action) {
            Ok(v) => v,
            Err(e) => {
                warn!("FieldArray: could not serialize {}: {}", action.name(), e);
                Value::Null
            }
        };
        let id = Uuid::new_v4();
        trace!("FieldArray({}): append {} as {}", self.name, action.name(), id);
        self.fields.push(FormField { id, value });
    }

    fn remove(&mut self, index: usize) {
        if index < self.fields.len() {
            let field = self.fields.remove(index);
            trace!("FieldArray({}): removed {} at {}", self.name, field.id, index);
        } else {
            trace!(
                "FieldArray({}): ignoring remove at {}, len is {}",
                self.name,
                index,
                self.fields.len()
            );
        }
    }

    fn len(&self) -> usize {
        self.fields.len()
    }
}
