use serde::{Deserialize, Serialize};
use time::Date;

use crate::entities::{
    client::Client, contractor::Contractor, invoice::Invoice, project::Project, task::Task,
    time_entry::TimeEntry, user::User,
};
use crate::utils::date_format;

/// The request document sent to the API.
///
/// `method` is stamped by the operation being invoked and never trusted from
/// the caller; `page` and `per_page` left at zero fall back to defaults.
/// Optional filters are omitted from the wire entirely when unset — string
/// filters by the empty-string convention, the rest through `Option`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "request")]
pub struct Request {
    /// Overwritten by the invoked operation; any caller-supplied value is
    /// ignored.
    #[serde(rename = "@method")]
    pub method: String,
    pub per_page: u32,
    pub page: u32,

    // optional filters used by various methods
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(
        with = "date_format::fb_date_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_from: Option<Date>,
    #[serde(
        with = "date_format::fb_date_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub date_to: Option<Date>,
    #[serde(
        with = "date_format::fb_date_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_from: Option<Date>,
    #[serde(
        with = "date_format::fb_date_format_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_to: Option<Date>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub task_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub client_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub invoice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_entry: Option<TimeEntry>,
}

impl Request {
    pub(crate) fn set_defaults(&mut self, default_per_page: u32, method: &str) {
        if self.per_page < 1 {
            self.per_page = default_per_page;
        }
        if self.page < 1 {
            self.page = 1;
        }
        self.method = method.to_string();
    }

    /// Renders the envelope in the service's XML dialect. Indentation is
    /// cosmetic.
    pub(crate) fn to_xml(&self) -> std::result::Result<String, quick_xml::SeError> {
        let mut out = String::new();
        let mut serializer = quick_xml::se::Serializer::new(&mut out);
        serializer.indent(' ', 2);
        self.serialize(serializer)?;
        Ok(out)
    }
}

/// The reply document. The service populates only the section matching the
/// invoked method; the others stay empty and carry no meaning. A non-empty
/// `error` fails the call regardless of section contents.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Response {
    pub error: String,
    pub clients: ClientList,
    pub projects: ProjectList,
    pub tasks: TaskList,
    #[serde(rename = "staff_members")]
    pub users: UserList,
    pub time_entries: TimeEntryList,
    pub contractors: ContractorList,
    pub invoices: InvoiceList,
}

/// Pagination attributes carried by every list section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub total: u32,
    pub per_page: u32,
}

macro_rules! list_section {
    ($(#[$meta:meta])* $name:ident, $child:literal, $field:ident: $entity:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq, Deserialize)]
        pub struct $name {
            #[serde(rename = "@page", default)]
            pub page: u32,
            #[serde(rename = "@total", default)]
            pub total: u32,
            #[serde(rename = "@per_page", default)]
            pub per_page: u32,
            #[serde(rename = $child, default)]
            pub $field: Vec<$entity>,
        }

        impl $name {
            /// The section's pagination attributes as one value.
            #[must_use]
            pub fn pagination(&self) -> Pagination {
                Pagination {
                    page: self.page,
                    total: self.total,
                    per_page: self.per_page,
                }
            }
        }
    };
}

list_section!(ClientList, "client", clients: Client);
list_section!(ProjectList, "project", projects: Project);
list_section!(TaskList, "task", tasks: Task);
list_section!(
    /// Staff members arrive under `staff_members` with `member` children.
    UserList, "member", users: User
);
list_section!(TimeEntryList, "time_entry", time_entries: TimeEntry);
list_section!(ContractorList, "contractor", contractors: Contractor);
list_section!(InvoiceList, "invoice", invoices: Invoice);

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    #[test]
    fn defaults_fill_unset_page_and_per_page() {
        let mut request = Request::default();
        request.set_defaults(25, "client.list");
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 25);
        assert_eq!(request.method, "client.list");
    }

    #[test]
    fn defaults_keep_positive_page_and_per_page() {
        let mut request = Request {
            page: 3,
            per_page: 100,
            ..Request::default()
        };
        request.set_defaults(25, "invoice.list");
        assert_eq!(request.page, 3);
        assert_eq!(request.per_page, 100);
    }

    #[test]
    fn method_is_overwritten_regardless_of_prior_value() {
        let mut request = Request {
            method: "payment.delete".to_string(),
            ..Request::default()
        };
        request.set_defaults(25, "task.list");
        assert_eq!(request.method, "task.list");
    }

    #[test]
    fn unset_filters_are_absent_from_the_wire() {
        let mut request = Request::default();
        request.set_defaults(25, "invoice.list");
        let xml = request.to_xml().unwrap();

        assert!(xml.contains(r#"method="invoice.list""#));
        assert!(xml.contains("<per_page>25</per_page>"));
        assert!(xml.contains("<page>1</page>"));
        for filter in [
            "email",
            "username",
            "date_from",
            "date_to",
            "update_from",
            "update_to",
            "task_id",
            "project_id",
            "client_id",
            "invoice_id",
            "time_entry",
        ] {
            assert!(!xml.contains(&format!("<{filter}>")), "unexpected {filter} in {xml}");
        }
    }

    #[test]
    fn set_filters_are_emitted() {
        let mut request = Request {
            email: "mary@example.com".to_string(),
            date_from: Some(date!(2023 - 05 - 01)),
            project_id: "12".to_string(),
            ..Request::default()
        };
        request.set_defaults(25, "time_entry.list");
        let xml = request.to_xml().unwrap();

        assert!(xml.contains("<email>mary@example.com</email>"));
        assert!(xml.contains("<date_from>2023-05-01</date_from>"));
        assert!(xml.contains("<project_id>12</project_id>"));
        assert!(!xml.contains("<username>"));
    }

    #[test]
    fn envelope_round_trips_through_the_codec() {
        let mut request = Request {
            username: "mary".to_string(),
            update_from: Some(date!(2024 - 01 - 31)),
            client_id: "77".to_string(),
            time_entry: Some(TimeEntry {
                project_id: 12,
                task_id: 4,
                staff_id: "3".to_string(),
                date: "2024-02-01".to_string(),
                notes: "retainer".to_string(),
                hours: 7.5,
                ..TimeEntry::default()
            }),
            ..Request::default()
        };
        request.set_defaults(25, "time_entry.create");

        let xml = request.to_xml().unwrap();
        let reparsed: Request = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(reparsed, request);
    }
}
