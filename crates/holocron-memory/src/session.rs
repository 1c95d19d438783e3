//! Session state: who prefers which locale.

use crate::store::PreferenceStore;
use holocron_core::{config::MemoryConfig, error::HolocronError, locale::Locale};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tokio::sync::Mutex;
use tracing::{info, warn};

/// Shared per-requester locale preferences.
///
/// `set` is serialized so the in-memory map and the persistent copy agree on
/// the last write; `get` never waits on persistence.
#[derive(Clone)]
pub struct SessionStore {
    default_locale: Locale,
    prefs: Arc<RwLock<HashMap<String, Locale>>>,
    write_lock: Arc<Mutex<()>>,
    persistence: Option<PreferenceStore>,
}

impl SessionStore {
    /// Non-persistent store; preferences vanish on restart.
    pub fn in_memory(default_locale: Locale) -> Self {
        Self {
            default_locale,
            prefs: Arc::new(RwLock::new(HashMap::new())),
            write_lock: Arc::new(Mutex::new(())),
            persistence: None,
        }
    }

    /// Store backed by `persistence`, preloaded with every saved preference.
    pub async fn with_persistence(
        default_locale: Locale,
        persistence: PreferenceStore,
    ) -> Result<Self, HolocronError> {
        let saved = persistence.load_all().await?;
        let count = saved.len();
        let prefs = saved
            .into_iter()
            .map(|(id, tag)| (id, Locale::new(&tag)))
            .collect();
        info!("loaded {count} saved language preference(s)");
        Ok(Self {
            default_locale,
            prefs: Arc::new(RwLock::new(prefs)),
            write_lock: Arc::new(Mutex::new(())),
            persistence: Some(persistence),
        })
    }

    /// Build from config: persistent when `config.persist`, else in-memory.
    pub async fn open(config: &MemoryConfig, default_locale: Locale) -> Result<Self, HolocronError> {
        if !config.persist {
            return Ok(Self::in_memory(default_locale));
        }
        let persistence = PreferenceStore::new(config).await?;
        Self::with_persistence(default_locale, persistence).await
    }

    /// The requester's locale, or the default when unset.
    pub fn get(&self, requester_id: &str) -> Locale {
        self.preference(requester_id)
            .unwrap_or_else(|| self.default_locale.clone())
    }

    /// The requester's explicit choice, if any.
    pub fn preference(&self, requester_id: &str) -> Option<Locale> {
        self.prefs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(requester_id)
            .cloned()
    }

    /// Record a choice. Visible to the next `get` as soon as this returns,
    /// even if persisting fails (the failure is returned).
    pub async fn set(&self, requester_id: &str, locale: Locale) -> Result<(), HolocronError> {
        let _guard = self.write_lock.lock().await;
        let tag = locale.as_str().to_string();
        self.prefs
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(requester_id.to_string(), locale);
        if let Some(ref store) = self.persistence {
            if let Err(e) = store.save(requester_id, &tag).await {
                warn!("failed to persist language for {requester_id}: {e}");
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    pub fn is_persistent(&self) -> bool {
        self.persistence.is_some()
    }

    /// Number of requesters with an explicit preference.
    pub fn len(&self) -> usize {
        self.prefs
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
