use time::{macros::format_description, OffsetDateTime, PrimitiveDateTime};

// FreshBooks emits datetimes as "2023-05-01 12:00:00" with no offset; the
// value is UTC. Some fields come back in standard RFC 3339 form instead.
pub fn parse_datetime(datetime_str: &str) -> Result<OffsetDateTime, String> {
    let primary = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(dt) = PrimitiveDateTime::parse(datetime_str, &primary) {
        return Ok(dt.assume_utc());
    }

    let rfc3339 = time::format_description::well_known::Rfc3339;
    if let Ok(dt) = OffsetDateTime::parse(datetime_str, &rfc3339) {
        return Ok(dt);
    }

    Err(format!(
        "Failed to parse datetime '{datetime_str}': no matching format"
    ))
}

/// Optional plain-date serialization (`YYYY-MM-DD`), used by the request
/// envelope's date filters.
pub mod fb_date_format_option {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use time::{macros::format_description, Date};

    pub fn serialize<S>(date: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(date) => {
                let formatted = date
                    .format(&format_description!("[year]-[month]-[day]"))
                    .map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&formatted)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;

        match opt {
            Some(s) if !s.is_empty() => {
                Date::parse(&s, &format_description!("[year]-[month]-[day]"))
                    .map(Some)
                    .map_err(serde::de::Error::custom)
            }
            _ => Ok(None),
        }
    }
}

/// Serialization module for datetime elements in the service's primary
/// layout.
pub mod fb_datetime_format {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use time::{macros::format_description, OffsetDateTime};

    pub fn serialize<S>(datetime: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = datetime
            .format(&format_description!(
                "[year]-[month]-[day] [hour]:[minute]:[second]"
            ))
            .map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let datetime_str = String::deserialize(deserializer)?;
        super::parse_datetime(&datetime_str).map_err(serde::de::Error::custom)
    }
}

/// Optional datetime serialization. An absent or empty element decodes to
/// `None`; text that matches neither layout is still a decode error.
pub mod fb_datetime_format_option {
    use serde::{self, Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;

    pub fn serialize<S>(datetime: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match datetime {
            Some(dt) => super::fb_datetime_format::serialize(dt, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt = Option::<String>::deserialize(deserializer)?;

        match opt {
            Some(s) if !s.is_empty() => super::parse_datetime(&s)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
