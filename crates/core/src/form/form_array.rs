use crate::actions::action::Action;

/// The form-state array that backs a proposal's action list and ends up in
/// the proposal transaction payload.
///
/// Rows are index aligned with the manager's list. `remove` on an index past
/// the end must be a no-op.
pub trait FormArray {
    fn append(&mut self, action: &Action);
    fn remove(&mut self, index: usize);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
