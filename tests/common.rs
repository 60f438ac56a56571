// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: In-memory catalog fixtures and a store wrapper that counts round trips and injects failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 NutriPlan
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `nutriplan_labels`

use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use nutriplan_labels::config::HealthLabelsConfig;
use nutriplan_labels::context::HealthLabelsContext;
use nutriplan_labels::database::{Database, HealthLabelsManager, HealthLabelsStore};
use nutriplan_labels::errors::{AppError, AppResult};
use nutriplan_labels::models::{
    Category, MappingUpdate, NewCategory, NewMapping, NewProvider, NewStandardLabel, Provider,
    ProviderMapping, SeverityLevel, StandardLabel,
};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fresh migrated in-memory database
pub async fn create_test_manager() -> Result<HealthLabelsManager> {
    init_test_logging();
    let config = HealthLabelsConfig::for_testing();
    let database = Database::new(&config.database).await?;
    Ok(database.health_labels())
}

// ================================================================================================
// Store wrapper
// ================================================================================================

/// Store wrapper counting round trips, with switchable failures and latency
pub struct CountingStore {
    inner: HealthLabelsManager,
    calls: AtomicUsize,
    fail_all: AtomicBool,
    fail_categories: AtomicBool,
    failing_provider: Mutex<Option<String>>,
    delay_ms: AtomicU64,
}

impl CountingStore {
    pub fn new(inner: HealthLabelsManager) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
            fail_all: AtomicBool::new(false),
            fail_categories: AtomicBool::new(false),
            failing_provider: Mutex::new(None),
            delay_ms: AtomicU64::new(0),
        }
    }

    /// Total datastore calls so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn reset_calls(&self) {
        self.calls.store(0, Ordering::SeqCst);
    }

    /// Make every call fail
    pub fn set_failing(&self, failing: bool) {
        self.fail_all.store(failing, Ordering::SeqCst);
    }

    /// Make only category reads fail
    pub fn set_categories_failing(&self, failing: bool) {
        self.fail_categories.store(failing, Ordering::SeqCst);
    }

    /// Make mapping reads fail for one provider only
    pub fn set_failing_provider(&self, provider_name: Option<&str>) {
        *self.failing_provider.lock().unwrap() = provider_name.map(ToOwned::to_owned);
    }

    /// Delay every call
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(
            u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            Ordering::SeqCst,
        );
    }

    async fn enter(&self, operation: &str) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_ms.load(Ordering::SeqCst);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::database(format!("injected failure in {operation}")));
        }
        Ok(())
    }
}

#[async_trait]
impl HealthLabelsStore for CountingStore {
    async fn fetch_categories(&self) -> AppResult<Vec<Category>> {
        self.enter("fetch_categories").await?;
        if self.fail_categories.load(Ordering::SeqCst) {
            return Err(AppError::database("injected failure in fetch_categories"));
        }
        self.inner.fetch_categories().await
    }

    async fn fetch_standard_labels(
        &self,
        category_name: Option<&str>,
    ) -> AppResult<Vec<StandardLabel>> {
        self.enter("fetch_standard_labels").await?;
        self.inner.fetch_standard_labels(category_name).await
    }

    async fn fetch_providers(&self) -> AppResult<Vec<Provider>> {
        self.enter("fetch_providers").await?;
        self.inner.fetch_providers().await
    }

    async fn fetch_mappings_for_provider(
        &self,
        provider_name: &str,
    ) -> AppResult<Vec<ProviderMapping>> {
        self.enter("fetch_mappings_for_provider").await?;
        let provider_fails =
            self.failing_provider.lock().unwrap().as_deref() == Some(provider_name);
        if provider_fails {
            return Err(AppError::database(format!(
                "injected failure for provider {provider_name}"
            )));
        }
        self.inner.fetch_mappings_for_provider(provider_name).await
    }

    async fn fetch_label_categories(
        &self,
        label_keys: &[String],
    ) -> AppResult<HashMap<String, Uuid>> {
        self.enter("fetch_label_categories").await?;
        self.inner.fetch_label_categories(label_keys).await
    }

    async fn find_active_label_id(&self, label_key: &str) -> AppResult<Option<Uuid>> {
        self.enter("find_active_label_id").await?;
        self.inner.find_active_label_id(label_key).await
    }

    async fn find_active_provider_id(&self, provider_name: &str) -> AppResult<Option<Uuid>> {
        self.enter("find_active_provider_id").await?;
        self.inner.find_active_provider_id(provider_name).await
    }

    async fn insert_mapping(&self, mapping: &NewMapping) -> AppResult<Uuid> {
        self.enter("insert_mapping").await?;
        self.inner.insert_mapping(mapping).await
    }

    async fn update_mapping(&self, mapping_id: Uuid, update: &MappingUpdate) -> AppResult<u64> {
        self.enter("update_mapping").await?;
        self.inner.update_mapping(mapping_id, update).await
    }
}

// ================================================================================================
// Catalog fixture
// ================================================================================================

/// Small catalog used across tests
///
/// - allergies: `dairy-free`, `gluten-free`, `celery-free` (critical)
/// - preferences: `vegan`, `keto-friendly`
/// - cuisines: `mediterranean`, `italian`
/// - `edamam` maps everything; `spoonacular` maps `gluten-free`, `vegan`,
///   `italian`, has an unsupported row for `celery-free`, and no row for the rest
pub async fn seed_fixture_catalog(manager: &HealthLabelsManager) -> Result<()> {
    for (name, priority) in [("allergy", 1), ("dietary_preference", 2), ("cuisine_type", 3)] {
        manager
            .create_category(&NewCategory {
                name: name.to_owned(),
                description: None,
                priority,
            })
            .await?;
    }

    let edamam = create_provider(manager, "edamam", "Edamam", 1).await?;
    let spoonacular = create_provider(manager, "spoonacular", "Spoonacular", 2).await?;

    let labels = [
        ("allergy", "dairy-free", SeverityLevel::Critical),
        ("allergy", "gluten-free", SeverityLevel::Critical),
        ("allergy", "celery-free", SeverityLevel::Critical),
        ("dietary_preference", "vegan", SeverityLevel::Preference),
        ("dietary_preference", "keto-friendly", SeverityLevel::Preference),
        ("cuisine_type", "mediterranean", SeverityLevel::Preference),
        ("cuisine_type", "italian", SeverityLevel::Preference),
    ];
    let mut ids = HashMap::new();
    for (category, key, severity) in labels {
        let id = manager
            .create_standard_label(&NewStandardLabel {
                category_name: category.to_owned(),
                label_key: key.to_owned(),
                display_name: key.to_owned(),
                description: None,
                severity_level: severity,
            })
            .await?;
        ids.insert(key, id);
    }

    let edamam_tokens = [
        ("dairy-free", "DAIRY_FREE"),
        ("gluten-free", "GLUTEN_FREE"),
        ("celery-free", "CELERY_FREE"),
        ("vegan", "VEGAN"),
        ("keto-friendly", "KETO_FRIENDLY"),
        ("mediterranean", "MEDITERRANEAN"),
        ("italian", "Italian"),
    ];
    for (key, token) in edamam_tokens {
        insert(manager, ids[key], edamam, token, true).await?;
    }

    insert(manager, ids["gluten-free"], spoonacular, "gluten", true).await?;
    insert(manager, ids["vegan"], spoonacular, "vegan", true).await?;
    insert(manager, ids["italian"], spoonacular, "Italian", true).await?;
    let celery_free = ids["celery-free"];
    insert(manager, celery_free, spoonacular, "celery-free", false).await?;

    Ok(())
}

async fn create_provider(
    manager: &HealthLabelsManager,
    name: &str,
    display_name: &str,
    priority: i32,
) -> Result<Uuid> {
    Ok(manager
        .create_provider(&NewProvider {
            provider_name: name.to_owned(),
            display_name: display_name.to_owned(),
            api_base_url: None,
            priority,
        })
        .await?)
}

async fn insert(
    manager: &HealthLabelsManager,
    standard_label_id: Uuid,
    provider_id: Uuid,
    token: &str,
    is_supported: bool,
) -> Result<()> {
    manager
        .insert_mapping(&NewMapping {
            standard_label_id,
            provider_id,
            provider_label_key: token.to_owned(),
            provider_label_value: None,
            is_supported,
            mapping_notes: None,
        })
        .await?;
    Ok(())
}

// ================================================================================================
// Context fixtures
// ================================================================================================

/// Context over the fixture catalog, with direct access to the store wrapper
pub struct TestFixture {
    pub context: HealthLabelsContext,
    pub store: Arc<CountingStore>,
    pub manager: HealthLabelsManager,
}

/// Fixture catalog behind a counting store with the default test configuration
pub async fn create_fixture() -> Result<TestFixture> {
    create_fixture_with_config(&HealthLabelsConfig::for_testing()).await
}

/// Fixture catalog behind a counting store with a custom configuration
pub async fn create_fixture_with_config(config: &HealthLabelsConfig) -> Result<TestFixture> {
    let manager = create_test_manager().await?;
    seed_fixture_catalog(&manager).await?;

    let store = Arc::new(CountingStore::new(manager.clone()));
    let context = HealthLabelsContext::new(
        Arc::clone(&store) as Arc<dyn HealthLabelsStore>,
        config,
    );
    Ok(TestFixture {
        context,
        store,
        manager,
    })
}

/// Owned label keys
pub fn labels(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|key| (*key).to_owned()).collect()
}
