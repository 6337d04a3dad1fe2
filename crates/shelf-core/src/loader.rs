//! Catalog loader: three independent request lines over a [`CatalogSource`].
//!
//! Each line (catalog list, single detail, bulk details) moves through
//! [`RequestStatus`] as `loading → succeeded | failed`. A line stamps every
//! request it issues with a fresh generation; when a response arrives, it is
//! applied only if its generation is still the most recent one for that
//! line. A slow response to an older request can therefore never overwrite
//! the result of a newer one.
//!
//! State lives behind a [`RwLock`] that is never held across an `.await`.
//! Callers that find the catalog line already loading can wait for it with
//! [`CatalogLoader::settle_catalog`].

use std::{
    pin::pin,
    sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use log::debug;
use tokio::sync::Notify;

use crate::{
    error::Result,
    models::{Recipe, RequestStatus},
    normalize::Normalizer,
    source::CatalogSource,
};

/// Outcome of a fetch call as seen by the line that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response was written to the line.
    Applied,
    /// A newer request superseded this one; the response was dropped.
    Discarded,
    /// No request was issued.
    Skipped,
}

/// One request line: status, last good payload, last error, and the
/// generation of the most recent request.
#[derive(Debug, Clone, Default)]
pub struct RequestLine<T> {
    pub status: RequestStatus,
    pub data: T,
    pub error: Option<String>,
    generation: u64,
}

impl<T> RequestLine<T> {
    /// Marks the line as loading and returns the tag for the new request.
    fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.status = RequestStatus::Loading;
        self.generation
    }

    fn is_current(&self, tag: u64) -> bool {
        self.generation == tag
    }

    /// Applies a response if `tag` is still the latest request.
    fn finish(&mut self, tag: u64, outcome: Result<T>) -> Completion {
        if !self.is_current(tag) {
            return Completion::Discarded;
        }
        match outcome {
            Ok(data) => {
                self.status = RequestStatus::Succeeded;
                self.data = data;
                self.error = None;
            }
            Err(e) => {
                self.status = RequestStatus::Failed;
                self.error = Some(e.to_string());
            }
        }
        Completion::Applied
    }
}

#[derive(Debug, Default)]
struct LoaderState {
    catalog: RequestLine<Arc<Vec<Recipe>>>,
    detail: RequestLine<Option<Recipe>>,
    bulk: RequestLine<Vec<Recipe>>,
}

/// Loads the catalog, recipe details and favorite details from a source.
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    normalizer: Normalizer,
    state: RwLock<LoaderState>,
    catalog_settled: Notify,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        let normalizer = match source.image_host() {
            Some(host) => Normalizer::new().with_image_host(host),
            None => Normalizer::new(),
        };
        Self {
            source,
            normalizer,
            state: RwLock::new(LoaderState::default()),
            catalog_settled: Notify::new(),
        }
    }

    /// Loads the catalog once. Does nothing while a load is in flight or
    /// after one has succeeded.
    pub async fn fetch_catalog(&self) -> Completion {
        let tag = {
            let mut state = self.write();
            match state.catalog.status {
                RequestStatus::Loading | RequestStatus::Succeeded => {
                    debug!("Catalog fetch skipped ({})", state.catalog.status.as_str());
                    return Completion::Skipped;
                }
                RequestStatus::Idle | RequestStatus::Failed => state.catalog.begin(),
            }
        };
        self.run_catalog(tag).await
    }

    /// Reloads the catalog, replacing it wholesale on success. Does nothing
    /// while a load is in flight.
    pub async fn refresh_catalog(&self) -> Completion {
        let tag = {
            let mut state = self.write();
            if state.catalog.status == RequestStatus::Loading {
                debug!("Catalog refresh skipped (loading)");
                return Completion::Skipped;
            }
            state.catalog.begin()
        };
        self.run_catalog(tag).await
    }

    async fn run_catalog(&self, tag: u64) -> Completion {
        debug!("Catalog request {tag} started");
        let outcome = self
            .source
            .fetch_catalog()
            .await
            .map(|raw| Arc::new(self.normalizer.normalize_all(raw)));

        let completion = self.write().catalog.finish(tag, outcome);
        self.catalog_settled.notify_waiters();
        debug!("Catalog request {tag} {completion:?}");
        completion
    }

    /// Waits until the catalog line is no longer loading and returns its
    /// status. Returns at once when nothing is in flight.
    pub async fn settle_catalog(&self) -> RequestStatus {
        loop {
            let mut settled = pin!(self.catalog_settled.notified());
            // Must be registered before the status is read
            settled.as_mut().enable();

            let status = self.catalog_status();
            if status != RequestStatus::Loading {
                return status;
            }
            debug!("Waiting for catalog request in flight");
            settled.await;
        }
    }

    /// Loads the detail record for `id`. Only the most recent call's
    /// response is kept.
    pub async fn fetch_by_id(&self, id: &str) -> Completion {
        let tag = self.write().detail.begin();
        debug!("Detail request {tag} for '{id}' started");

        let outcome = self
            .source
            .fetch_by_id(id)
            .await
            .map(|raw| Some(self.normalizer.normalize(raw)));

        let completion = self.write().detail.finish(tag, outcome);
        debug!("Detail request {tag} {completion:?}");
        completion
    }

    /// Loads detail records for `ids`. An empty list succeeds immediately
    /// without contacting the source.
    pub async fn fetch_by_ids(&self, ids: &[String]) -> Completion {
        let tag = self.write().bulk.begin();

        if ids.is_empty() {
            debug!("Bulk request {tag} has no ids");
            return self.write().bulk.finish(tag, Ok(Vec::new()));
        }

        debug!("Bulk request {tag} for {} id(s) started", ids.len());
        let outcome = self
            .source
            .fetch_by_ids(ids)
            .await
            .map(|raw| self.normalizer.normalize_all(raw));

        let completion = self.write().bulk.finish(tag, outcome);
        debug!("Bulk request {tag} {completion:?}");
        completion
    }

    /// Snapshot of the loaded catalog.
    pub fn catalog(&self) -> Arc<Vec<Recipe>> {
        Arc::clone(&self.read().catalog.data)
    }

    pub fn catalog_status(&self) -> RequestStatus {
        self.read().catalog.status
    }

    pub fn catalog_error(&self) -> Option<String> {
        self.read().catalog.error.clone()
    }

    /// The recipe applied by the latest detail request.
    pub fn selected(&self) -> Option<Recipe> {
        self.read().detail.data.clone()
    }

    pub fn detail_status(&self) -> RequestStatus {
        self.read().detail.status
    }

    pub fn detail_error(&self) -> Option<String> {
        self.read().detail.error.clone()
    }

    /// Details from the latest bulk request.
    pub fn bulk_details(&self) -> Vec<Recipe> {
        self.read().bulk.data.clone()
    }

    pub fn bulk_status(&self) -> RequestStatus {
        self.read().bulk.status
    }

    pub fn bulk_error(&self) -> Option<String> {
        self.read().bulk.error.clone()
    }

    /// Looks a recipe up in the loaded catalog.
    pub fn find_in_catalog(&self, id: &str) -> Option<Recipe> {
        self.read().catalog.data.iter().find(|r| r.id == id).cloned()
    }

    fn read(&self) -> RwLockReadGuard<'_, LoaderState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, LoaderState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests;
