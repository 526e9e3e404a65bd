use serde::{Deserialize, Deserializer};

/// A project, with the identifiers of the tasks and staff assigned to it.
///
/// The service nests the related identifiers two elements deep
/// (`tasks > task > task_id`, `staff > staff > staff_id`); they are collected
/// here as plain ordered id sequences.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project_id: String,
    pub client_id: String,
    pub name: String,
    #[serde(rename = "tasks", deserialize_with = "task_id_refs")]
    pub task_ids: Vec<i64>,
    #[serde(rename = "staff", deserialize_with = "staff_id_refs")]
    pub staff_ids: Vec<i64>,
}

fn task_id_refs<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct TaskRef {
        #[serde(default)]
        task_id: i64,
    }

    #[derive(Deserialize, Default)]
    struct Refs {
        #[serde(rename = "task", default)]
        tasks: Vec<TaskRef>,
    }

    Ok(Refs::deserialize(deserializer)?
        .tasks
        .into_iter()
        .map(|r| r.task_id)
        .collect())
}

fn staff_id_refs<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct StaffRef {
        #[serde(default)]
        staff_id: i64,
    }

    #[derive(Deserialize, Default)]
    struct Refs {
        #[serde(rename = "staff", default)]
        staff: Vec<StaffRef>,
    }

    Ok(Refs::deserialize(deserializer)?
        .staff
        .into_iter()
        .map(|r| r.staff_id)
        .collect())
}
