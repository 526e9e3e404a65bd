use serde::{Deserialize, Deserializer};

use super::project::Project;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contractor {
    pub contractor_id: String,
    pub name: String,
    pub email: String,
    pub rate: f64,
    pub task_id: String,
    #[serde(deserialize_with = "project_records")]
    pub projects: Vec<Project>,
}

fn project_records<'de, D>(deserializer: D) -> Result<Vec<Project>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, Default)]
    struct Records {
        #[serde(rename = "project", default)]
        projects: Vec<Project>,
    }

    Ok(Records::deserialize(deserializer)?.projects)
}
