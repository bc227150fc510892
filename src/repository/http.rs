use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::entry::{RawEntry, Section};
use crate::domain::taxonomy::{Category, Mood, Tag};
use crate::repository::{EntryReader, RepositoryError, RepositoryResult, TaxonomyReader};

/// Repository backed by the remote content API.
///
/// `reqwest::Client` pools connections internally and is cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpContentRepository {
    client: Client,
    base_url: String,
}

impl HttpContentRepository {
    /// Build a repository for the API rooted at `base_url`.
    pub fn new(base_url: &str, timeout: Duration) -> RepositoryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("cozy-journal/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn collection_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> RepositoryResult<T> {
        let url = self.collection_url(path);
        log::debug!("Fetching {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                RepositoryError::Transport(format!("timeout fetching {url}"))
            } else {
                RepositoryError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RepositoryError::Http {
                status: status.as_u16(),
                url,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RepositoryError::Decode(e.to_string()))
    }
}

impl EntryReader for HttpContentRepository {
    async fn list_entries(&self, section: Section) -> RepositoryResult<Vec<RawEntry>> {
        self.get_json(section.collection()).await
    }
}

impl TaxonomyReader for HttpContentRepository {
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.get_json("categories").await
    }

    async fn list_tags(&self) -> RepositoryResult<Vec<Tag>> {
        self.get_json("tags").await
    }

    async fn list_moods(&self) -> RepositoryResult<Vec<Mood>> {
        self.get_json("moods").await
    }
}
