use serde::Deserialize;

/// A customer record as returned by `client.list`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Client {
    pub client_id: String,
    #[serde(rename = "organization")]
    pub name: String,
}
