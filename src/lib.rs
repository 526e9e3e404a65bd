//! # freshbooks-rs
//!
//! A Rust client library for the FreshBooks Classic XML API
//! (`api/2.1/xml-in`).
//!
//! A [`Client`] is constructed from an account name and a [`Credential`] —
//! either a static API token or a delegated OAuth token — and exposes one
//! listing method per entity family. Callers fill a [`Request`] with optional
//! filters; the invoked operation stamps its own method name and pagination
//! defaults.
//!
//! ```no_run
//! # async fn run() -> freshbooks_rs::error::Result<()> {
//! use freshbooks_rs::{Client, Request};
//!
//! let client = Client::new("acme", "my-api-token")?;
//! let (invoices, pagination) = client.invoices().list(Request::default()).await?;
//! println!("{} invoices of {}", invoices.len(), pagination.total);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod client;
pub mod entities;
pub mod envelope;
pub mod error;
pub mod oauth;
pub mod utils;

pub use client::Client;
pub use envelope::{Pagination, Request, Response};
pub use error::Error;
pub use oauth::{Credential, OAuthToken};

// Re-export the entity records for convenience. The client record stays under
// `entities::client` so the API client keeps the `Client` name.
pub use entities::contractor::Contractor;
pub use entities::invoice::Invoice;
pub use entities::line_item::LineItem;
pub use entities::project::Project;
pub use entities::task::Task;
pub use entities::time_entry::TimeEntry;
pub use entities::user::User;
