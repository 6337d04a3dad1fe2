//! Tests for the catalog loader.

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::oneshot;

use super::*;
use crate::{error::ShelfError, normalize::RawRecipe};

fn raw(value: serde_json::Value) -> RawRecipe {
    serde_json::from_value(value).expect("Failed to build raw recipe")
}

/// Source that fails the first `failures` catalog requests with a fixed
/// message and counts every call.
#[derive(Default)]
struct ScriptedSource {
    failures: AtomicUsize,
    catalog_calls: AtomicUsize,
    bulk_calls: AtomicUsize,
}

impl ScriptedSource {
    fn failing(times: usize) -> Self {
        Self {
            failures: AtomicUsize::new(times),
            ..Self::default()
        }
    }
}

#[async_trait]
impl CatalogSource for ScriptedSource {
    async fn fetch_catalog(&self) -> Result<Vec<RawRecipe>> {
        self.catalog_calls.fetch_add(1, Ordering::SeqCst);
        let remaining = self.failures.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failures.store(remaining - 1, Ordering::SeqCst);
            return Err(ShelfError::fetch("rate limited"));
        }
        Ok(vec![
            raw(json!({"id": 1, "title": "Pad Thai", "readyInMinutes": 30})),
            raw(json!({"id": 2})),
        ])
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RawRecipe> {
        Err(ShelfError::RecipeNotFound { id: id.to_string() })
    }

    async fn fetch_by_ids(&self, ids: &[String]) -> Result<Vec<RawRecipe>> {
        self.bulk_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ids.iter().map(|id| raw(json!({"id": id}))).collect())
    }
}

/// Source whose catalog and detail responses are released by the test.
#[derive(Default)]
struct GatedSource {
    catalog_gate: Mutex<Option<oneshot::Receiver<Vec<RawRecipe>>>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<Result<RawRecipe>>>>,
}

impl GatedSource {
    fn gate_catalog(&self) -> oneshot::Sender<Vec<RawRecipe>> {
        let (tx, rx) = oneshot::channel();
        *self.catalog_gate.lock().unwrap() = Some(rx);
        tx
    }

    fn gate(&self, id: &str) -> oneshot::Sender<Result<RawRecipe>> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id.to_string(), rx);
        tx
    }
}

#[async_trait]
impl CatalogSource for GatedSource {
    async fn fetch_catalog(&self) -> Result<Vec<RawRecipe>> {
        let gate = self.catalog_gate.lock().unwrap().take();
        match gate {
            Some(rx) => rx.await.map_err(|_| ShelfError::fetch("gate dropped")),
            None => Ok(Vec::new()),
        }
    }

    async fn fetch_by_id(&self, id: &str) -> Result<RawRecipe> {
        let gate = self.gates.lock().unwrap().remove(id);
        match gate {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ShelfError::fetch("gate dropped"))),
            None => Err(ShelfError::RecipeNotFound { id: id.to_string() }),
        }
    }

    async fn fetch_by_ids(&self, _ids: &[String]) -> Result<Vec<RawRecipe>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn test_catalog_loads_and_normalizes() {
    let loader = CatalogLoader::new(Arc::new(ScriptedSource::default()));
    assert_eq!(loader.catalog_status(), RequestStatus::Idle);

    assert_eq!(loader.fetch_catalog().await, Completion::Applied);
    assert_eq!(loader.catalog_status(), RequestStatus::Succeeded);

    let catalog = loader.catalog();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].title, "Pad Thai");
    assert_eq!(catalog[0].time, 30);
    assert_eq!(catalog[1].title, "Untitled Recipe");
    assert_eq!(catalog[1].cuisine, "International");
}

#[tokio::test]
async fn test_catalog_fetch_is_skipped_after_success() {
    let source = Arc::new(ScriptedSource::default());
    let loader = CatalogLoader::new(source.clone());

    loader.fetch_catalog().await;
    assert_eq!(loader.fetch_catalog().await, Completion::Skipped);
    assert_eq!(source.catalog_calls.load(Ordering::SeqCst), 1);

    assert_eq!(loader.refresh_catalog().await, Completion::Applied);
    assert_eq!(source.catalog_calls.load(Ordering::SeqCst), 2);
    assert_eq!(loader.catalog().len(), 2);
}

#[tokio::test]
async fn test_settle_waits_for_catalog_in_flight() {
    let source = Arc::new(GatedSource::default());
    let release = source.gate_catalog();
    let loader = CatalogLoader::new(source);

    let (first, (second, status)) = futures::join!(loader.fetch_catalog(), async {
        tokio::task::yield_now().await;
        let second = loader.fetch_catalog().await;
        assert_eq!(loader.catalog_status(), RequestStatus::Loading);
        let _ = release.send(vec![raw(json!({"id": 5, "title": "Ramen"}))]);
        (second, loader.settle_catalog().await)
    });

    assert_eq!(first, Completion::Applied);
    assert_eq!(second, Completion::Skipped);
    assert_eq!(status, RequestStatus::Succeeded);
    assert_eq!(loader.catalog().len(), 1);
}

#[tokio::test]
async fn test_settle_returns_at_once_when_idle() {
    let loader = CatalogLoader::new(Arc::new(ScriptedSource::default()));
    assert_eq!(loader.settle_catalog().await, RequestStatus::Idle);
}

#[tokio::test]
async fn test_failure_then_success_clears_error() {
    let source = Arc::new(ScriptedSource::failing(1));
    let loader = CatalogLoader::new(source.clone());

    loader.fetch_catalog().await;
    assert_eq!(loader.catalog_status(), RequestStatus::Failed);
    assert_eq!(loader.catalog_error().as_deref(), Some("rate limited"));
    assert!(loader.catalog().is_empty());

    // A failed line accepts a new request
    assert_eq!(loader.fetch_catalog().await, Completion::Applied);
    assert_eq!(loader.catalog_status(), RequestStatus::Succeeded);
    assert_eq!(loader.catalog_error(), None);
    assert_eq!(source.catalog_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_empty_bulk_request_skips_source() {
    let source = Arc::new(ScriptedSource::default());
    let loader = CatalogLoader::new(source.clone());

    assert_eq!(loader.fetch_by_ids(&[]).await, Completion::Applied);
    assert_eq!(loader.bulk_status(), RequestStatus::Succeeded);
    assert!(loader.bulk_details().is_empty());
    assert_eq!(source.bulk_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_bulk_request_normalizes_details() {
    let source = Arc::new(ScriptedSource::default());
    let loader = CatalogLoader::new(source.clone());

    let ids = vec!["7".to_string(), "9".to_string()];
    loader.fetch_by_ids(&ids).await;

    let details = loader.bulk_details();
    assert_eq!(details.len(), 2);
    assert_eq!(details[0].id, "7");
    assert_eq!(details[1].title, "Untitled Recipe");
    assert_eq!(source.bulk_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_detail_failure_is_recorded_on_its_own_line() {
    let loader = CatalogLoader::new(Arc::new(ScriptedSource::default()));

    loader.fetch_by_id("missing").await;
    assert_eq!(loader.detail_status(), RequestStatus::Failed);
    assert_eq!(
        loader.detail_error().as_deref(),
        Some("Recipe with ID missing not found")
    );
    assert_eq!(loader.catalog_status(), RequestStatus::Idle);
    assert_eq!(loader.selected(), None);
}

#[tokio::test]
async fn test_stale_detail_response_is_discarded() {
    let source = Arc::new(GatedSource::default());
    let first = source.gate("first");
    let second = source.gate("second");
    let loader = CatalogLoader::new(source.clone());

    let release = async {
        // The newer request resolves first, the older one last
        let _ = second.send(Ok(raw(json!({"id": "second", "title": "Second"}))));
        tokio::task::yield_now().await;
        let _ = first.send(Ok(raw(json!({"id": "first", "title": "First"}))));
    };

    let (older, newer, ()) = futures::join!(
        loader.fetch_by_id("first"),
        loader.fetch_by_id("second"),
        release
    );

    assert_eq!(older, Completion::Discarded);
    assert_eq!(newer, Completion::Applied);
    assert_eq!(loader.detail_status(), RequestStatus::Succeeded);
    assert_eq!(loader.selected().map(|r| r.id), Some("second".to_string()));
}

#[tokio::test]
async fn test_stale_failure_does_not_mark_line_failed() {
    let source = Arc::new(GatedSource::default());
    let first = source.gate("first");
    let second = source.gate("second");
    let loader = CatalogLoader::new(source.clone());

    let release = async {
        let _ = second.send(Ok(raw(json!({"id": "second"}))));
        tokio::task::yield_now().await;
        let _ = first.send(Err(ShelfError::fetch("timeout")));
    };

    let (older, _, ()) = futures::join!(
        loader.fetch_by_id("first"),
        loader.fetch_by_id("second"),
        release
    );

    assert_eq!(older, Completion::Discarded);
    assert_eq!(loader.detail_status(), RequestStatus::Succeeded);
    assert_eq!(loader.detail_error(), None);
}

#[tokio::test]
async fn test_find_in_catalog() {
    let loader = CatalogLoader::new(Arc::new(ScriptedSource::default()));
    assert!(loader.find_in_catalog("1").is_none());

    loader.fetch_catalog().await;
    assert_eq!(
        loader.find_in_catalog("1").map(|r| r.title),
        Some("Pad Thai".to_string())
    );
}
