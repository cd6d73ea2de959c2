//! Shared fixtures: a Rocket client over in-memory stores, a scripted
//! upstream and a manual clock

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mcc_application::use_cases::{CatalogService, CatalogServiceConfig, TrendingService};
use mcc_domain::error::{Error, Result};
use mcc_domain::ports::{CatalogFetcher, TrendingStore};
use mcc_domain::value_objects::TrendingCacheRecord;
use mcc_infrastructure::AppContext;
use mcc_infrastructure::config::{AdminConfig, AppConfig};
use mcc_providers::cache::MemoryCacheStore;
use mcc_providers::clock::ManualClock;
use mcc_providers::trending::MemoryTrendingStore;
use mcc_server::build_rocket;
use rocket::local::asynchronous::Client;
use serde_json::{Value, json};

pub const TEST_API_KEY: &str = "test-secret-key-12345";

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

/// Upstream stand-in: echoes the endpoint, counts calls, fails on demand
#[derive(Debug, Default)]
pub struct ScriptedUpstream {
    calls: AtomicUsize,
    fail_status: Mutex<Option<u16>>,
}

impl ScriptedUpstream {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn fail_with(&self, status: Option<u16>) {
        *self.fail_status.lock().unwrap() = status;
    }
}

#[async_trait]
impl CatalogFetcher for ScriptedUpstream {
    async fn fetch(&self, endpoint: &str) -> Result<Value> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(status) = *self.fail_status.lock().unwrap() {
            return Err(Error::fetch_status(endpoint, status, "server error"));
        }
        Ok(json!({ "items": [endpoint], "call": call }))
    }

    fn base_url(&self) -> &str {
        "http://upstream.test"
    }
}

/// Trending store whose backend is down
#[derive(Debug)]
pub struct DownTrendingStore;

#[async_trait]
impl TrendingStore for DownTrendingStore {
    async fn find_by_type(&self, _category_type: &str) -> Result<Option<TrendingCacheRecord>> {
        Err(Error::storage("connection refused"))
    }

    fn provider_name(&self) -> &str {
        "down"
    }
}

/// A running test harness
pub struct Harness {
    pub client: Client,
    pub upstream: Arc<ScriptedUpstream>,
    pub clock: Arc<ManualClock>,
    pub cache: Arc<MemoryCacheStore>,
    pub trending: Arc<MemoryTrendingStore>,
}

pub struct HarnessBuilder {
    config: AppConfig,
    trending_store: Option<Arc<dyn TrendingStore>>,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            trending_store: None,
        }
    }

    pub fn with_admin_key(mut self) -> Self {
        self.config.admin = AdminConfig::with_key(TEST_API_KEY);
        self
    }

    pub fn with_trending_store(mut self, store: Arc<dyn TrendingStore>) -> Self {
        self.trending_store = Some(store);
        self
    }

    pub async fn build(self) -> Harness {
        let upstream = Arc::new(ScriptedUpstream::default());
        let clock = Arc::new(ManualClock::new(t0()));
        let cache = Arc::new(MemoryCacheStore::new());
        let trending = Arc::new(MemoryTrendingStore::new());

        let catalog = Arc::new(CatalogService::new(
            cache.clone(),
            upstream.clone(),
            clock.clone(),
            CatalogServiceConfig::default(),
        ));
        let trending_store = self
            .trending_store
            .unwrap_or_else(|| trending.clone() as Arc<dyn TrendingStore>);
        let trending_service = Arc::new(TrendingService::new(
            trending_store,
            self.config.trending.default_type.clone(),
        ));

        let context = AppContext::new(self.config, catalog, trending_service, clock.clone());
        let client = Client::tracked(build_rocket(context))
            .await
            .expect("valid rocket instance");

        Harness {
            client,
            upstream,
            clock,
            cache,
            trending,
        }
    }
}

pub async fn harness() -> Harness {
    HarnessBuilder::new().build().await
}
