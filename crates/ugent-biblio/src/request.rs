//! Request construction for the Biblio API.
//!
//! Pure construction logic: every constructor validates its inputs and
//! produces a relative path plus query parameters without touching the
//! network. The same inputs always yield the same request.

use url::Url;

use crate::error::{ClientError, ClientResult};

/// A prepared GET request: a path under the API base URL plus query
/// parameters. Every request carries `format=json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    path: String,
    params: Vec<(String, String)>,
}

impl ApiRequest {
    fn with_path(path: String) -> Self {
        Self { path, params: vec![("format".to_string(), "json".to_string())] }
    }

    /// Request for a single publication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` when the id does not parse as an integer.
    pub fn publication(id: &str) -> ClientResult<Self> {
        let id = parse_id(id)?;
        Ok(Self::with_path(format!("publication/{id}")))
    }

    /// Request for all publications of a person.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` when the UGent id does not parse as an integer.
    pub fn person_publications(ugent_id: &str) -> ClientResult<Self> {
        let id = parse_id(ugent_id)?;
        Ok(Self::with_path(format!("person/{id}/publication/export")))
    }

    /// Request for all publications of an organisation, optionally limited to
    /// a single year of publication.
    ///
    /// # Errors
    ///
    /// Returns `InvalidYear` when a year is given that is not all digits.
    pub fn organisation_publications(organisation: &str, year: Option<&str>) -> ClientResult<Self> {
        let year_segment = match year {
            Some(year) => {
                validate_year(year)?;
                format!("/{year}")
            }
            None => String::new(),
        };

        Ok(Self::with_path(format!("organization/{organisation}{year_segment}/publication/export")))
    }

    /// Request for all publications of a project.
    #[must_use]
    pub fn project_publications(project: &str) -> Self {
        Self::with_path(format!("project/{project}/publication/export"))
    }

    /// Request for all publications shared by a group of people, identified by
    /// their UGent ids.
    ///
    /// # Errors
    ///
    /// Returns `InvalidId` when any of the ids does not parse as an integer.
    pub fn group_publications<S: AsRef<str>>(ugent_ids: &[S]) -> ClientResult<Self> {
        let ids = ugent_ids
            .iter()
            .map(|id| parse_id(id.as_ref()).map(|id| id.to_string()))
            .collect::<ClientResult<Vec<_>>>()?;

        Ok(Self::with_path(format!("group/{}/publication/export", ids.join(","))))
    }

    /// Keyword search across all publications. An absent or empty keyword
    /// returns everything.
    #[must_use]
    pub fn search(query: Option<&str>) -> Self {
        let mut request = Self::with_path("publication/export".to_string());

        if let Some(keyword) = query {
            if !keyword.is_empty() {
                request.params.push(("q".to_string(), keyword.to_string()));
            }
        }

        request
    }

    /// Path under the API base URL.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Query parameters, always including `format=json`.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Absolute URL for this request under the given base.
    ///
    /// # Errors
    ///
    /// Returns an error when the base does not parse as a URL.
    pub fn url(&self, base: &str) -> ClientResult<Url> {
        let base = Url::parse(base)?;
        Ok(base.join(&self.path)?)
    }
}

/// Parse an identifier. Path segments use the parsed value, so leading zeroes
/// and surrounding whitespace are canonicalized away.
fn parse_id(value: &str) -> ClientResult<u64> {
    value.trim().parse().map_err(|_| ClientError::invalid_id(value))
}

fn validate_year(year: &str) -> ClientResult<()> {
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(ClientError::invalid_year(year));
    }
    Ok(())
}
