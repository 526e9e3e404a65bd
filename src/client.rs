use reqwest::header;
use url::Url;

use crate::entities;
use crate::entities::{
    contractor::Contractor, invoice::Invoice, project::Project, task::Task,
    time_entry::TimeEntry, user::User,
};
use crate::envelope::{Pagination, Request, Response};
use crate::error::{Error, Result};
use crate::oauth::Credential;

const API_DOMAIN: &str = "freshbooks.com";
const API_PATH: &str = "api/2.1/xml-in";
/// Placeholder basic-auth password the service expects next to an API token.
const TOKEN_PASSWORD: &str = "X";
const DEFAULT_PER_PAGE: u32 = 25;

/// This is the client that is used for interacting with the FreshBooks API.
/// It holds the account endpoint and the credential selected at construction;
/// both are read-only afterwards, so one instance can serve concurrent calls.
#[derive(Clone, Debug)]
pub struct Client {
    endpoint: Url,
    credential: Credential,
    per_page: u32,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client bound to an account's API endpoint
    /// (`https://<account>.freshbooks.com/api/2.1/xml-in`).
    pub fn new(account: &str, credential: impl Into<Credential>) -> Result<Self> {
        let endpoint = Url::parse(&format!("https://{account}.{API_DOMAIN}/{API_PATH}"))
            .map_err(|_| Error::InvalidEndpoint)?;
        Ok(Self::from_url(endpoint, credential))
    }

    /// Creates a client bound to an explicit endpoint URL, for self-hosted
    /// proxies or local test servers.
    #[must_use]
    pub fn from_url(endpoint: Url, credential: impl Into<Credential>) -> Self {
        Self {
            endpoint,
            credential: credential.into(),
            per_page: DEFAULT_PER_PAGE,
            http: reqwest::Client::new(),
        }
    }

    /// Serializes the envelope, attaches the selected credential, performs
    /// the exchange, and returns the raw reply body. Any non-success HTTP
    /// status is a transport failure.
    #[instrument(skip(self, request))]
    async fn send(&self, request: &Request) -> Result<String> {
        let body = request.to_xml()?;
        trace!(url = %self.endpoint, %body, "sending request");

        let builder = self.http.post(self.endpoint.clone()).body(body);
        let builder = match &self.credential {
            Credential::ApiToken(token) => builder.basic_auth(token, Some(TOKEN_PASSWORD)),
            Credential::OAuth(token) => builder.header(header::AUTHORIZATION, token.auth_header()),
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let response_body = response.text().await.ok();
            return Err(Error::Http {
                status,
                response_body,
            });
        }

        Ok(response.text().await?)
    }

    /// Stamps the method name and pagination defaults, performs the exchange,
    /// and decodes the reply envelope. A populated `<error>` element fails
    /// the call even when list sections decoded alongside it.
    #[instrument(skip(self, request))]
    async fn request(&self, mut request: Request, method: &str) -> Result<Response> {
        request.set_defaults(self.per_page, method);

        let text = self.send(&request).await?;
        let response: Response =
            quick_xml::de::from_str(&text).map_err(|e| Error::Deserialization(e, Some(text)))?;

        if !response.error.is_empty() {
            return Err(Error::Api(response.error));
        }
        Ok(response)
    }

    /// Access the clients API
    #[must_use]
    pub fn clients(&self) -> ClientsApi<'_> {
        ClientsApi { client: self }
    }

    /// Access the projects API
    #[must_use]
    pub fn projects(&self) -> ProjectsApi<'_> {
        ProjectsApi { client: self }
    }

    /// Access the tasks API
    #[must_use]
    pub fn tasks(&self) -> TasksApi<'_> {
        TasksApi { client: self }
    }

    /// Access the staff members API
    #[must_use]
    pub fn staff(&self) -> StaffApi<'_> {
        StaffApi { client: self }
    }

    /// Access the time entries API
    #[must_use]
    pub fn time_entries(&self) -> TimeEntriesApi<'_> {
        TimeEntriesApi { client: self }
    }

    /// Access the contractors API
    #[must_use]
    pub fn contractors(&self) -> ContractorsApi<'_> {
        ContractorsApi { client: self }
    }

    /// Access the invoices API
    #[must_use]
    pub fn invoices(&self) -> InvoicesApi<'_> {
        InvoicesApi { client: self }
    }
}

/// API handler for the `client.list` method
#[derive(Debug)]
pub struct ClientsApi<'a> {
    client: &'a Client,
}

impl ClientsApi<'_> {
    /// Retrieve the clients matching the request's filters. This method
    /// exposes no pagination.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<Vec<entities::client::Client>> {
        let response = self.client.request(request, "client.list").await?;
        Ok(response.clients.clients)
    }
}

/// API handler for the `project.list` method
#[derive(Debug)]
pub struct ProjectsApi<'a> {
    client: &'a Client,
}

impl ProjectsApi<'_> {
    /// Retrieve a page of projects.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<Project>, Pagination)> {
        let response = self.client.request(request, "project.list").await?;
        let pagination = response.projects.pagination();
        Ok((response.projects.projects, pagination))
    }
}

/// API handler for the `task.list` method
#[derive(Debug)]
pub struct TasksApi<'a> {
    client: &'a Client,
}

impl TasksApi<'_> {
    /// Retrieve a page of tasks.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<Task>, Pagination)> {
        let response = self.client.request(request, "task.list").await?;
        let pagination = response.tasks.pagination();
        Ok((response.tasks.tasks, pagination))
    }
}

/// API handler for the `staff.list` method
#[derive(Debug)]
pub struct StaffApi<'a> {
    client: &'a Client,
}

impl StaffApi<'_> {
    /// Retrieve a page of staff members.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<User>, Pagination)> {
        let response = self.client.request(request, "staff.list").await?;
        let pagination = response.users.pagination();
        Ok((response.users.users, pagination))
    }
}

/// API handler for the `time_entry.list` method
#[derive(Debug)]
pub struct TimeEntriesApi<'a> {
    client: &'a Client,
}

impl TimeEntriesApi<'_> {
    /// Retrieve a page of time entries.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<TimeEntry>, Pagination)> {
        let response = self.client.request(request, "time_entry.list").await?;
        let pagination = response.time_entries.pagination();
        Ok((response.time_entries.time_entries, pagination))
    }
}

/// API handler for the `contractor.list` method
#[derive(Debug)]
pub struct ContractorsApi<'a> {
    client: &'a Client,
}

impl ContractorsApi<'_> {
    /// Retrieve a page of contractors.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<Contractor>, Pagination)> {
        let response = self.client.request(request, "contractor.list").await?;
        let pagination = response.contractors.pagination();
        Ok((response.contractors.contractors, pagination))
    }
}

/// API handler for the `invoice.list` method
#[derive(Debug)]
pub struct InvoicesApi<'a> {
    client: &'a Client,
}

impl InvoicesApi<'_> {
    /// Retrieve a page of invoices.
    #[instrument(skip(self, request))]
    pub async fn list(&self, request: Request) -> Result<(Vec<Invoice>, Pagination)> {
        let response = self.client.request(request, "invoice.list").await?;
        let pagination = response.invoices.pagination();
        Ok((response.invoices.invoices, pagination))
    }
}
