use serde::Deserialize;

/// A single invoice line. Monetary amounts are kept as the wire's decimal
/// strings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineItem {
    pub line_id: i64,
    pub amount: String,
    pub name: String,
    pub unit_cost: String,
    pub quantity: i64,
    #[serde(rename = "type")]
    pub kind: String,
}
