//! Project list acquisition with a static fallback.
//!
//! A single read-only request against the GitHub repository-listing API,
//! mapped into display-ready [`ProjectSummary`] records. Any failure (the
//! endpoint unreachable, a non-2xx status, a malformed body) substitutes the
//! embedded fallback list, so callers always have projects to render.

use once_cell::sync::Lazy;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// Default base URL of the repository-listing API.
pub const DEFAULT_LISTING_BASE_URL: &str = "https://api.github.com";

/// Substituted when a remote entry carries no description.
pub const NO_DESCRIPTION_PLACEHOLDER: &str = "No description provided.";

/// Placeholder link meaning "no link".
pub const NO_LINK: &str = "#";

/// Upper bound on entries requested from the listing endpoint.
const PER_PAGE: &str = "100";

/// One display-ready entry in a project list, whether sourced remotely or
/// from the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Unique within the list; stable render key.
    pub id: u64,
    pub title: String,
    pub description: String,
    /// URL of the full project, or [`NO_LINK`].
    pub link: String,
}

/// Where a resolved list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    Remote,
    Fallback,
}

/// Outcome of a resolve attempt. Never an error: the fallback path produces
/// a complete list plus an advisory note.
#[derive(Debug, Clone)]
pub struct ResolvedProjects {
    pub entries: Vec<ProjectSummary>,
    pub source: ProjectSource,
    /// Human-readable advisory, present only when the fallback was triggered
    /// by a failure.
    pub notice: Option<String>,
}

/// Errors from the remote listing request.
#[derive(Debug, Error)]
pub enum ProjectsError {
    /// Request never produced a response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status.
    #[error("listing API returned status {0}")]
    Status(reqwest::StatusCode),

    /// Response body did not match the expected schema.
    #[error("malformed listing payload: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Wire schema of one repository entry as returned by the listing API.
#[derive(Debug, Deserialize)]
struct RepoEntry {
    id: u64,
    name: String,
    description: Option<String>,
    html_url: String,
}

impl From<RepoEntry> for ProjectSummary {
    fn from(entry: RepoEntry) -> Self {
        Self {
            id: entry.id,
            title: entry.name,
            description: entry
                .description
                .unwrap_or_else(|| NO_DESCRIPTION_PLACEHOLDER.to_string()),
            link: entry.html_url,
        }
    }
}

/// The seven fixed entries shown when remote retrieval fails.
pub static FALLBACK_PROJECTS: Lazy<Vec<ProjectSummary>> = Lazy::new(|| {
    let entries = [
        (
            "AI-Powered Career Counseling System",
            "Web-based AI platform for personalized career guidance, integrating web scraping \
             and data preprocessing in Python, with a React chatbot interface powered by the \
             OpenAI API plus personality assessment and course recommendation modules.",
        ),
        (
            "Data Visualization Dashboards",
            "Dynamic dashboards built with Tableau, Matplotlib, Seaborn, and D3.js to surface \
             actionable insights through user-friendly visual interfaces.",
        ),
        (
            "DevOps Automation for ML Models",
            "Machine learning models deployed with Docker and GitHub workflows; end-to-end ML \
             pipelines automated using Apache Airflow and MLflow.",
        ),
        (
            "Predictive Machine Learning Models",
            "Predictive models analyzing relationships between diabetes, high blood pressure, \
             gender, and anemia, developed with scikit-learn and TensorFlow.",
        ),
        (
            "Java-Based Data Warehouse",
            "A Java data warehouse for large-scale datasets, covering data indexing, querying, \
             and ETL processes.",
        ),
        (
            "Blockchain-Based File Storage",
            "A custom blockchain in Go with IPFS for decentralized storage; smart contracts \
             deployed with Solidity using Ganache, Truffle, and MetaMask.",
        ),
        (
            "Full-Stack Web Application (Express.js)",
            "Scalable Express.js backend following MVC with microservices, RESTful APIs over \
             MongoDB and MySQL, containerized with Docker and GitLab CI/CD.",
        ),
    ];
    entries
        .into_iter()
        .enumerate()
        .map(|(i, (title, description))| ProjectSummary {
            id: i as u64 + 1,
            title: title.to_string(),
            description: description.to_string(),
            link: NO_LINK.to_string(),
        })
        .collect()
});

/// Client for the repository-listing endpoint.
///
/// The base URL is injectable so tests can point at a local mock server.
#[derive(Debug, Clone)]
pub struct ProjectsClient {
    client: reqwest::Client,
    base_url: String,
}

impl ProjectsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(crate::default_client::create_client(), base_url)
    }

    /// Create a client with a custom HTTP client.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetch the remote listing for `identifier`, most recently pushed first,
    /// capped at one page of 100 entries.
    pub async fn fetch(&self, identifier: &str) -> Result<Vec<ProjectSummary>, ProjectsError> {
        let url = format!("{}/users/{identifier}/repos", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("sort", "pushed"), ("per_page", PER_PAGE)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProjectsError::Status(status));
        }

        let entries: Vec<RepoEntry> = response.json().await.map_err(ProjectsError::Decode)?;
        Ok(entries.into_iter().map(ProjectSummary::from).collect())
    }

    /// Resolve the project list for `identifier`: one attempt, no retry.
    ///
    /// An empty identifier short-circuits to an empty list with no network
    /// call. Any fetch failure yields `fallback` unchanged together with an
    /// advisory note; this method itself never fails.
    pub async fn resolve(
        &self,
        identifier: &str,
        fallback: &[ProjectSummary],
    ) -> ResolvedProjects {
        if identifier.is_empty() {
            return ResolvedProjects {
                entries: Vec::new(),
                source: ProjectSource::Remote,
                notice: None,
            };
        }

        match self.fetch(identifier).await {
            Ok(entries) => ResolvedProjects {
                entries,
                source: ProjectSource::Remote,
                notice: None,
            },
            Err(err) => {
                warn!("project listing fetch failed: {err}");
                ResolvedProjects {
                    entries: fallback.to_vec(),
                    source: ProjectSource::Fallback,
                    notice: Some(
                        "Failed to load projects from GitHub. Showing the saved project list."
                            .to_string(),
                    ),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fallback_list_has_seven_entries_with_unique_ids() {
        let mut ids: Vec<u64> = FALLBACK_PROJECTS.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 7);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
        assert!(FALLBACK_PROJECTS.iter().all(|p| p.link == NO_LINK));
        assert!(FALLBACK_PROJECTS.iter().all(|p| !p.title.is_empty()));
    }

    #[test]
    fn missing_description_maps_to_placeholder() {
        let entry = RepoEntry {
            id: 1,
            name: "x".to_string(),
            description: None,
            html_url: "http://e/x".to_string(),
        };
        let summary = ProjectSummary::from(entry);
        assert_eq!(
            summary,
            ProjectSummary {
                id: 1,
                title: "x".to_string(),
                description: NO_DESCRIPTION_PLACEHOLDER.to_string(),
                link: "http://e/x".to_string(),
            }
        );
    }

    #[test]
    fn present_description_is_kept_verbatim() {
        let entry = RepoEntry {
            id: 9,
            name: "folio".to_string(),
            description: Some("terminal portfolio".to_string()),
            html_url: "http://e/folio".to_string(),
        };
        let summary = ProjectSummary::from(entry);
        assert_eq!(summary.description, "terminal portfolio");
    }
}
