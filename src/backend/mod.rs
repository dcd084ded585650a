//! Supabase client: a thin query builder over the hosted PostgREST layer.
//!
//! Every query is one HTTP round trip against `/rest/v1/<table>` with
//! equality filters in the query string. There is no retry, no caching, and
//! no timeout beyond the reqwest defaults.

mod auth;

pub use auth::Credentials;

use crate::settings::Settings;
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// PostgREST modifier requesting exactly one row; zero or multiple matches
/// become an error response from the backend.
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("error decoding backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Handle to the hosted backend. Holds the base URL, the service API key,
/// and one shared `reqwest::Client`.
pub struct Backend {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl Backend {
    pub fn new(settings: &Settings) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        })
    }

    /// Starts a query against one backend table.
    pub fn table(&self, name: &str) -> QueryBuilder<'_> {
        QueryBuilder {
            backend: self,
            table: name.to_string(),
            select: "*".to_string(),
            filters: Vec::new(),
            single: false,
        }
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// Attaches the project API key. Per-table requests use the service key
    /// as the bearer token as well; auth requests may override it.
    pub(crate) fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.authed(self.http.request(method, url))
    }
}

/// Builder for a single table operation: equality filters, column selection,
/// and single-row mode, mirroring the query surface the handlers need.
pub struct QueryBuilder<'a> {
    backend: &'a Backend,
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    single: bool,
}

impl<'a> QueryBuilder<'a> {
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Issues the select and decodes the JSON body into `T` — one typed
    /// deserialization boundary per backend response.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, BackendError> {
        let url = self.backend.rest_url(&self.table);
        let mut request = self
            .backend
            .request(Method::GET, &url)
            .query(&self.query_pairs());
        if self.single {
            request = request.header(ACCEPT, HeaderValue::from_static(SINGLE_OBJECT_ACCEPT));
        }
        let body = check_status(request.send().await?).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Inserts one row. The caller echoes its own input; the backend-assigned
    /// row is not read back.
    pub async fn insert<T: Serialize>(self, row: &T) -> Result<(), BackendError> {
        let url = self.backend.rest_url(&self.table);
        let response = self
            .backend
            .request(Method::POST, &url)
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Full-resource replace of every row matching the active filters.
    pub async fn update<T: Serialize>(self, row: &T) -> Result<(), BackendError> {
        let url = self.backend.rest_url(&self.table);
        let response = self
            .backend
            .request(Method::PATCH, &url)
            .query(&self.filter_pairs())
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Deletes every row matching the active filters. Succeeds even when
    /// nothing matched.
    pub async fn delete(self) -> Result<(), BackendError> {
        let url = self.backend.rest_url(&self.table);
        let response = self
            .backend
            .request(Method::DELETE, &url)
            .query(&self.filter_pairs())
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_string(), self.select.clone())];
        pairs.extend(self.filter_pairs());
        pairs
    }

    fn filter_pairs(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}")))
            .collect()
    }
}

/// Maps non-2xx responses to `BackendError::Status`, exposing the raw body
/// text as the error message.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BackendError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(BackendError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn backend() -> Backend {
        Backend::new(&Settings {
            api_url: "https://project.supabase.co/".into(),
            api_key: "service-key".into(),
            port: 0,
        })
        .unwrap()
    }

    #[test]
    fn rest_url_trims_trailing_slash() {
        assert_eq!(
            backend().rest_url("books"),
            "https://project.supabase.co/rest/v1/books"
        );
    }

    #[test]
    fn query_pairs_carry_select_and_filters() {
        let b = backend();
        let q = b.table("books").select("book_id").eq("authorId", 3);
        assert_eq!(
            q.query_pairs(),
            vec![
                ("select".to_string(), "book_id".to_string()),
                ("authorId".to_string(), "eq.3".to_string()),
            ]
        );
    }

    #[test]
    fn filters_preserve_order() {
        let b = backend();
        let q = b
            .table("course_participants")
            .eq("course_id", "7")
            .eq("user_id", "12");
        assert_eq!(
            q.filter_pairs(),
            vec![
                ("course_id".to_string(), "eq.7".to_string()),
                ("user_id".to_string(), "eq.12".to_string()),
            ]
        );
    }

    #[test]
    fn single_defaults_off() {
        let b = backend();
        assert!(!b.table("courses").single);
        assert!(b.table("courses").single().single);
    }

    #[test]
    fn status_error_keeps_raw_body() {
        let err = BackendError::Status {
            status: 406,
            message: "JSON object requested, multiple (or no) rows returned".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON object requested, multiple (or no) rows returned"
        );
    }
}
