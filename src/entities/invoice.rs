use serde::{Deserialize, Deserializer};
use time::OffsetDateTime;

use super::line_item::LineItem;
use crate::utils::date_format;

/// An invoice header plus its line items.
///
/// Monetary amounts stay as the wire's decimal strings; `date` and `updated`
/// go through the datetime codec and may be absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Invoice {
    pub invoice_id: i64,
    pub client_id: i64,
    pub number: String,
    pub amount: String,
    pub currency_code: String,
    pub amount_outstanding: String,
    // payment status is reported under `paid`
    #[serde(rename = "paid")]
    pub status: String,
    #[serde(with = "date_format::fb_datetime_format_option")]
    pub date: Option<OffsetDateTime>,
    #[serde(with = "date_format::fb_datetime_format_option")]
    pub updated: Option<OffsetDateTime>,
    pub organization: String,
    #[serde(deserialize_with = "line_records")]
    pub lines: Vec<LineItem>,
}

fn line_records<'de, D>(deserializer: D) -> Result<Vec<LineItem>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize, Default)]
    struct Records {
        #[serde(rename = "line", default)]
        lines: Vec<LineItem>,
    }

    Ok(Records::deserialize(deserializer)?.lines)
}
