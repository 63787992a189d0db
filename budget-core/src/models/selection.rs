use serde::{Deserialize, Serialize};

/// Input and output categories chosen on the selection step.
///
/// Both lists keep insertion order and never hold duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl SelectionState {
    pub fn new<I, O>(inputs: I, outputs: O) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            inputs: dedup(inputs),
            outputs: dedup(outputs),
        }
    }

    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn has_input(&self, id: &str) -> bool {
        self.inputs.iter().any(|i| i == id)
    }

    pub fn has_output(&self, id: &str) -> bool {
        self.outputs.iter().any(|o| o == id)
    }

    /// True when at least one input and one output are chosen.
    pub fn is_complete(&self) -> bool {
        !self.inputs.is_empty() && !self.outputs.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && self.outputs.is_empty()
    }

    /// Adds `id` to the inputs if absent, removes it otherwise.
    /// Returns whether the id is selected afterwards.
    pub fn toggle_input(&mut self, id: &str) -> bool {
        toggle(&mut self.inputs, id)
    }

    /// Adds `id` to the outputs if absent, removes it otherwise.
    /// Returns whether the id is selected afterwards.
    pub fn toggle_output(&mut self, id: &str) -> bool {
        toggle(&mut self.outputs, id)
    }

    pub fn set_inputs<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.inputs = dedup(ids);
    }

    pub fn set_outputs<I>(&mut self, ids: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.outputs = dedup(ids);
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
        self.outputs.clear();
    }
}

fn toggle(
    list: &mut Vec<String>,
    id: &str,
) -> bool {
    if let Some(pos) = list.iter().position(|i| i == id) {
        list.remove(pos);
        false
    } else {
        list.push(id.to_string());
        true
    }
}

fn dedup<I>(ids: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for id in ids {
        let id = id.into();
        if !out.contains(&id) {
            out.push(id);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_selection_is_empty_and_incomplete() {
        let selection = SelectionState::default();

        assert!(selection.is_empty());
        assert!(!selection.is_complete());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionState::default();

        assert!(selection.toggle_input("budget"));
        assert!(selection.has_input("budget"));
        assert!(!selection.toggle_input("budget"));
        assert!(!selection.has_input("budget"));
    }

    #[test]
    fn toggle_keeps_insertion_order() {
        let mut selection = SelectionState::default();
        selection.toggle_output("runtime");
        selection.toggle_output("profit");
        selection.toggle_output("revenue");
        selection.toggle_output("profit");

        assert_eq!(selection.outputs(), ["runtime", "revenue"]);
    }

    #[test]
    fn complete_requires_both_sides() {
        let inputs_only = SelectionState::new(["budget"], Vec::<String>::new());
        let outputs_only = SelectionState::new(Vec::<String>::new(), ["profit"]);
        let both = SelectionState::new(["budget"], ["profit"]);

        assert!(!inputs_only.is_complete());
        assert!(!outputs_only.is_complete());
        assert!(both.is_complete());
    }

    #[test]
    fn set_inputs_drops_duplicates() {
        let mut selection = SelectionState::default();
        selection.set_inputs(["budget", "expenditure", "budget"]);

        assert_eq!(selection.inputs(), ["budget", "expenditure"]);
    }
}
