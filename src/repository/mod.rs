use std::future::Future;

use crate::domain::entry::{RawEntry, Section};
use crate::domain::taxonomy::{Category, Mood, Tag};

pub mod errors;
pub mod http;

pub use errors::{RepositoryError, RepositoryResult};
pub use http::HttpContentRepository;

/// Read-only access to section entries.
pub trait EntryReader {
    /// List every raw entry of a section in the order the API returns them.
    fn list_entries(
        &self,
        section: Section,
    ) -> impl Future<Output = RepositoryResult<Vec<RawEntry>>>;
}

/// Read-only access to the lookup collections used for enrichment.
pub trait TaxonomyReader {
    fn list_categories(&self) -> impl Future<Output = RepositoryResult<Vec<Category>>>;
    fn list_tags(&self) -> impl Future<Output = RepositoryResult<Vec<Tag>>>;
    fn list_moods(&self) -> impl Future<Output = RepositoryResult<Vec<Mood>>>;
}
