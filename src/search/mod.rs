mod google;

pub use google::GoogleSearchClient;

use crate::error::Result;
use crate::models::SearchResult;
use std::future::Future;

/// A web search backend.
///
/// An empty vector is a valid answer; callers treat errors the same way.
pub trait WebSearch: Send + Sync {
    fn search(&self, query: &str) -> impl Future<Output = Result<Vec<SearchResult>>> + Send;
}
