use serde::Deserialize;

/// A staff member. The service calls these `staff` in request methods and
/// `member` in response elements.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "staff_id")]
    pub user_id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}
