//! The lookup pipeline: parse → to-native → resolve → render.
//!
//! Transports call [`Lookup::resolve_and_render`] with the raw message text
//! and get back blocks ready to send. When nothing matches, the numbered
//! suggestions are remembered per requester so a bare number in the next
//! message picks one.

use crate::render::Renderer;
use holocron_catalog::{Catalog, Query, Resolution, Resolver, Selector};
use holocron_core::{locale::Locale, message::OutputBlock};
use holocron_memory::SessionStore;
use holocron_translate::{TextCategory, TranslationCache};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, info};

/// Suggestions offered to a requester, awaiting a numeric pick.
#[derive(Debug, Clone)]
struct PendingChoice {
    names: Vec<String>,
    selector: Option<Selector>,
}

/// Shared entry point for every transport.
pub struct Lookup {
    catalog: Arc<Catalog>,
    resolver: Resolver,
    cache: Arc<TranslationCache>,
    sessions: SessionStore,
    renderer: Renderer,
    pending: Mutex<HashMap<String, PendingChoice>>,
}

impl Lookup {
    pub fn new(
        catalog: Arc<Catalog>,
        resolver: Resolver,
        cache: Arc<TranslationCache>,
        sessions: SessionStore,
        renderer: Renderer,
    ) -> Self {
        Self {
            catalog,
            resolver,
            cache,
            sessions,
            renderer,
            pending: Mutex::new(HashMap::new()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &TranslationCache {
        &self.cache
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Answer one free-text lookup from `requester_id`.
    pub async fn resolve_and_render(&self, raw_text: &str, requester_id: &str) -> Vec<OutputBlock> {
        let locale = self.sessions.get(requester_id);
        let text = raw_text.trim();
        if text.is_empty() {
            return self.notice("usage", &locale).await;
        }

        if let Some((name, selector)) = self.take_pick(requester_id, text) {
            debug!("{requester_id} picked '{name}'");
            return self.render_named(&name, selector, &locale).await;
        }

        let query = Query::parse(text);
        if query.name.is_empty() {
            return self.notice("usage", &locale).await;
        }
        let native = self.cache.to_native(&query.name).await;

        match self.resolver.resolve(&self.catalog, &native) {
            Resolution::Found(candidate) => {
                self.clear_pending(requester_id);
                info!(
                    "lookup '{}' → '{}' ({:.2}) for {requester_id}",
                    query.name, candidate.name, candidate.score
                );
                self.render_named(&candidate.name, query.selector, &locale)
                    .await
            }
            Resolution::NotFound { suggestions } if suggestions.is_empty() => {
                self.clear_pending(requester_id);
                info!("lookup '{}' found nothing for {requester_id}", query.name);
                self.notice("not_found", &locale).await
            }
            Resolution::NotFound { suggestions } => {
                let names: Vec<String> = suggestions.into_iter().map(|c| c.name).collect();
                let blocks = self.suggest(&names, &locale).await;
                self.pending_map().insert(
                    requester_id.to_string(),
                    PendingChoice {
                        names,
                        selector: query.selector,
                    },
                );
                blocks
            }
        }
    }

    async fn render_named(
        &self,
        name: &str,
        selector: Option<Selector>,
        locale: &Locale,
    ) -> Vec<OutputBlock> {
        match self.catalog.unit_by_name(name) {
            Some(unit) => {
                self.renderer
                    .render(&self.catalog, unit, locale, selector)
                    .await
            }
            None => self.notice("not_found", locale).await,
        }
    }

    /// "Not found" followed by a numbered suggestion list and a pick hint.
    async fn suggest(&self, names: &[String], locale: &Locale) -> Vec<OutputBlock> {
        let m = self.renderer.markup();
        let mut lines = vec![
            m.bold(&m.escape(&self.renderer.label("not_found", locale).await)),
            m.escape(&self.renderer.label("did_you_mean", locale).await),
        ];
        for (i, name) in names.iter().enumerate() {
            let shown = self
                .cache
                .localize(name, locale, TextCategory::UnitName)
                .await;
            let entry = if shown == *name {
                format!("{}. {}", i + 1, m.escape(name))
            } else {
                format!("{}. {} ({})", i + 1, m.escape(&shown), m.escape(name))
            };
            lines.push(entry);
        }
        lines.push(m.italic(&m.escape(&self.renderer.label("pick_hint", locale).await)));
        vec![OutputBlock::text(lines.join("\n"), m)]
    }

    async fn notice(&self, key: &str, locale: &Locale) -> Vec<OutputBlock> {
        let m = self.renderer.markup();
        let text = m.escape(&self.renderer.label(key, locale).await);
        vec![OutputBlock::text(text, m)]
    }

    /// Consume a pending choice if `text` is a bare in-range number.
    fn take_pick(&self, requester_id: &str, text: &str) -> Option<(String, Option<Selector>)> {
        if !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: usize = text.parse().ok()?;
        let mut pending = self.pending_map();
        let choice = pending.get(requester_id)?;
        let name = choice.names.get(index.checked_sub(1)?)?.clone();
        let selector = choice.selector;
        pending.remove(requester_id);
        Some((name, selector))
    }

    fn clear_pending(&self, requester_id: &str) {
        self.pending_map().remove(requester_id);
    }

    fn pending_map(&self) -> std::sync::MutexGuard<'_, HashMap<String, PendingChoice>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
