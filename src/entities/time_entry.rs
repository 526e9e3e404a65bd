use serde::{Deserialize, Serialize};

/// A tracked block of time. Serializable as well, since a time entry can be
/// embedded in a request envelope for mutation methods.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEntry {
    pub time_entry_id: i64,
    pub project_id: i64,
    pub task_id: i64,
    pub staff_id: String,
    pub date: String,
    pub notes: String,
    pub hours: f64,
}
