//! Biblio API client.
//!
//! Each call issues exactly one GET against the fixed base URL and reads the
//! full body before decoding. No retries, no caching, no state shared between
//! calls beyond the connection pool.

use crate::config::{Config, api};
use crate::error::ClientResult;
use crate::models::{Payload, Record};
use crate::request::ApiRequest;
use crate::response;

/// Client for the Ghent University Academic Bibliography API.
#[derive(Debug, Clone)]
pub struct BiblioClient {
    /// Pooled HTTP client.
    client: reqwest::Client,

    /// API base URL.
    base_url: String,
}

impl BiblioClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self { client, base_url: config.base_url })
    }

    /// Get a single publication.
    ///
    /// Returns `None` when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` for a non-integer id, before any request goes out.
    pub async fn publication(&self, publication_id: &str) -> ClientResult<Option<Record>> {
        let payload = self.fetch(ApiRequest::publication(publication_id)?).await?;
        Ok(payload.and_then(Payload::into_single))
    }

    /// Get all the publications of a person, identified by UGent id.
    ///
    /// Returns an empty vector when no person or publications are found.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` for a non-integer id, before any request goes out.
    pub async fn publications_by_person(&self, ugent_id: &str) -> ClientResult<Vec<Record>> {
        let payload = self.fetch(ApiRequest::person_publications(ugent_id)?).await?;
        Ok(payload.map(Payload::into_records).unwrap_or_default())
    }

    /// Get all the publications of an organisation, optionally limited to one
    /// year of publication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidYear` when the year is not all digits, before any
    /// request goes out.
    pub async fn publications_by_organisation(
        &self,
        organisation: &str,
        year: Option<&str>,
    ) -> ClientResult<Vec<Record>> {
        let request = ApiRequest::organisation_publications(organisation, year)?;
        let payload = self.fetch(request).await?;
        Ok(payload.map(Payload::into_records).unwrap_or_default())
    }

    /// Get all the publications of a project.
    pub async fn publications_by_project(&self, project: &str) -> ClientResult<Vec<Record>> {
        let payload = self.fetch(ApiRequest::project_publications(project)).await?;
        Ok(payload.map(Payload::into_records).unwrap_or_default())
    }

    /// Get all the publications shared by a group of people, identified by
    /// their UGent ids.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` when any id is not an integer; no request goes out.
    pub async fn publications_by_group<S: AsRef<str>>(
        &self,
        ugent_ids: &[S],
    ) -> ClientResult<Vec<Record>> {
        let payload = self.fetch(ApiRequest::group_publications(ugent_ids)?).await?;
        Ok(payload.map(Payload::into_records).unwrap_or_default())
    }

    /// Search all publications for a keyword. An absent or empty keyword
    /// returns everything.
    pub async fn search(&self, query: Option<&str>) -> ClientResult<Vec<Record>> {
        let payload = self.fetch(ApiRequest::search(query)).await?;
        Ok(payload.map(Payload::into_records).unwrap_or_default())
    }

    /// Issue a prepared request and decode whatever comes back.
    ///
    /// # Errors
    ///
    /// Returns an error on transport or decode failure; a non-success status
    /// is `Ok(None)`.
    pub async fn fetch(&self, request: ApiRequest) -> ClientResult<Option<Payload>> {
        let url = request.url(&self.base_url)?;
        tracing::debug!(%url, "issuing Biblio API request");

        let response = self.client.get(url).query(request.params()).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        if status != 200 {
            tracing::debug!(status, "non-success status, no result");
        }

        response::decode(status, &body)
    }
}
