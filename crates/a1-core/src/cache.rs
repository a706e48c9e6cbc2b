//! Shared CMS fetch layer.
//!
//! Every CMS read in the site goes through [`CmsCache`], so two renderers
//! asking for the same endpoint at the same time share one upstream request.
//!
//! Two policies are supported:
//!
//! - [`CachePolicy::NoStore`]: always fetch fresh, but join a request that is
//!   already in flight for the same endpoint. The entry is dropped as soon as
//!   it resolves, so the next call fetches again. A short TTL bounds any
//!   entry whose caller went away before dropping it.
//! - [`CachePolicy::Revalidate`]: keep a successful body for the configured
//!   window and serve it from memory until it expires.
//!
//! Failures are never cached under either policy.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use crate::error::AppError;
use crate::traits::CmsSource;

/// Default revalidation window.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(60);

const MAX_ENTRIES: u64 = 1_000;

/// Upper bound on how long a resolved `NoStore` body can outlive its
/// request, should the caller be dropped before invalidating it.
const IN_FLIGHT_TTL: Duration = Duration::from_secs(1);

/// How long a fetched body may be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    NoStore,
    Revalidate,
}

/// A [`CmsSource`] wrapper providing request de-duplication and caching.
#[derive(Clone)]
pub struct CmsCache<S> {
    source: S,
    in_flight: Cache<String, Arc<str>>,
    revalidated: Cache<String, Arc<str>>,
}

impl<S: CmsSource> CmsCache<S> {
    pub fn new(source: S, revalidate: Duration) -> Self {
        Self::with_in_flight_ttl(source, revalidate, IN_FLIGHT_TTL)
    }

    fn with_in_flight_ttl(source: S, revalidate: Duration, in_flight_ttl: Duration) -> Self {
        Self {
            source,
            in_flight: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(in_flight_ttl)
                .build(),
            revalidated: Cache::builder()
                .max_capacity(MAX_ENTRIES)
                .time_to_live(revalidate)
                .build(),
        }
    }

    /// The wrapped transport.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch an endpoint under the given policy.
    pub async fn fetch(&self, endpoint: &str, policy: CachePolicy) -> Result<Arc<str>, AppError> {
        match policy {
            CachePolicy::NoStore => {
                let result = self.load(&self.in_flight, endpoint).await;
                self.in_flight.invalidate(endpoint).await;
                result
            }
            CachePolicy::Revalidate => self.load(&self.revalidated, endpoint).await,
        }
    }

    /// Fetch and decode JSON.
    pub async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        policy: CachePolicy,
    ) -> Result<T, AppError> {
        let body = self.fetch(endpoint, policy).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn load(
        &self,
        cache: &Cache<String, Arc<str>>,
        endpoint: &str,
    ) -> Result<Arc<str>, AppError> {
        cache
            .try_get_with(endpoint.to_string(), async {
                tracing::debug!(endpoint = %endpoint, "Fetching from CMS");
                self.source.fetch(endpoint).await.map(Arc::from)
            })
            .await
            .map_err(|e: Arc<AppError>| (*e).clone())
    }
}
