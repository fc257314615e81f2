use serde::{Deserialize, Serialize};

/// Gating condition for an action's success. All three parts are opaque
/// reference strings (e.g. `roll.total`) and are never evaluated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
    pub left: String,
    pub op: String,
    pub right: String,
}

/// A single playable action definition.
///
/// `formula` and `on_success` are opaque dice/effect expressions using the
/// `@name` variable convention. An empty `on_success` means "no effect"; a
/// missing check means the action always succeeds. Field order matters: it
/// is the JSON key order the rest of the system expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,
    pub label: String,
    pub formula: String,
    #[serde(rename = "onSuccess")]
    pub on_success: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check: Option<Check>,
}

impl ActionRecord {
    pub fn new(id: &str, label: &str, formula: &str, on_success: &str) -> Self {
        ActionRecord {
            id: id.to_string(),
            label: label.to_string(),
            formula: formula.to_string(),
            on_success: on_success.to_string(),
            check: None,
        }
    }

    pub fn with_check(mut self, left: &str, op: &str, right: &str) -> Self {
        self.check = Some(Check {
            left: left.to_string(),
            op: op.to_string(),
            right: right.to_string(),
        });
        self
    }
}
