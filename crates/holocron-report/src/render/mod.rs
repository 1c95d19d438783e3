//! Report rendering: header plus one piece per gear tier or relic level.


use crate::chunk::{chunk_report, SEPARATOR};
use crate::labels;
use holocron_catalog::{Catalog, GearTier, Selector, Unit};
use holocron_core::{
    config::{DefaultView, ReportConfig},
    locale::Locale,
    markup::MarkupMode,
    message::OutputBlock,
};
use holocron_translate::{TextCategory, TranslationCache};
use std::sync::Arc;

/// A rendered but not yet chunked report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub header: String,
    /// One entry per tier (or the single relic level), in display order.
    pub sections: Vec<String>,
    pub image: Option<String>,
    pub markup: MarkupMode,
}

impl Report {
    /// Header followed by every section.
    pub fn pieces(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.header.as_str()).chain(self.sections.iter().map(String::as_str))
    }

    pub fn full_text(&self) -> String {
        self.pieces().collect::<Vec<_>>().join(SEPARATOR)
    }
}

/// Renders units into localized, escaped, size-bounded blocks.
pub struct Renderer {
    config: ReportConfig,
    cache: Arc<TranslationCache>,
}

impl Renderer {
    pub fn new(config: ReportConfig, cache: Arc<TranslationCache>) -> Self {
        Self { config, cache }
    }

    pub fn markup(&self) -> MarkupMode {
        self.config.markup
    }

    /// Render and chunk a unit report.
    pub async fn render(
        &self,
        catalog: &Catalog,
        unit: &Unit,
        locale: &Locale,
        selector: Option<Selector>,
    ) -> Vec<OutputBlock> {
        let report = self.build(catalog, unit, locale, selector).await;
        chunk_report(&report, self.config.caption_limit, self.config.message_limit)
    }

    /// Render a unit report without chunking.
    pub async fn build(
        &self,
        catalog: &Catalog,
        unit: &Unit,
        locale: &Locale,
        selector: Option<Selector>,
    ) -> Report {
        let header = self.header(unit, locale).await;
        let mut sections = Vec::new();

        match selector {
            Some(Selector::Relic(requested)) => {
                let level = Selector::clamp_relic(requested);
                sections.push(self.relic_section(catalog, level, locale).await);
            }
            _ if unit.tier_count() == 0 => {
                sections.push(self.placeholder("no_gear_data", locale).await);
            }
            Some(Selector::Gear(requested)) => {
                let number = Selector::clamp_tier(requested, unit.tier_count());
                if let Some(tier) = unit.tier(number) {
                    sections.push(self.tier_section(catalog, tier, locale).await);
                }
            }
            None => {
                let shown = match self.config.default_view {
                    DefaultView::All => unit.tier_count(),
                    DefaultView::First => 1,
                };
                for tier in unit.tiers().iter().take(shown) {
                    sections.push(self.tier_section(catalog, tier, locale).await);
                }
            }
        }

        Report {
            header,
            sections,
            image: unit.image.clone(),
            markup: self.config.markup,
        }
    }

    async fn header(&self, unit: &Unit, locale: &Locale) -> String {
        let m = self.config.markup;
        let name = self
            .cache
            .localize(&unit.name, locale, TextCategory::UnitName)
            .await;
        let mut header = m.bold(&m.escape(&name));

        let mut traits = vec![self.label(unit.alignment.label_key(), locale).await];
        if let Some(ref role) = unit.role {
            traits.push(self.role(role, locale).await);
        }
        let traits: Vec<String> = traits.iter().map(|t| m.escape(t)).collect();
        header.push('\n');
        header.push_str(&traits.join(" \u{00b7} "));

        if self.config.show_description && !unit.description.trim().is_empty() {
            let description = self
                .cache
                .localize(&unit.description, locale, TextCategory::Description)
                .await;
            header.push('\n');
            header.push_str(&m.italic(&m.escape(&description)));
        }
        header
    }

    async fn tier_section(&self, catalog: &Catalog, tier: &GearTier, locale: &Locale) -> String {
        let m = self.config.markup;
        let title = format!("{} {}", self.label("tier", locale).await, tier.number());
        let mut lines = vec![m.bold(&m.escape(&title))];
        for (i, id) in tier.items().iter().enumerate() {
            let name = catalog.lookup_gear_name(id);
            let shown = if name == id.as_str() {
                // Unknown id: show it raw, untranslated.
                id.clone()
            } else {
                self.cache
                    .localize(name, locale, TextCategory::GearMaterial)
                    .await
            };
            lines.push(format!("{} {}", self.marker(i + 1), m.escape(&shown)));
        }
        lines.join("\n")
    }

    async fn relic_section(&self, catalog: &Catalog, level: u8, locale: &Locale) -> String {
        let m = self.config.markup;
        let title = format!("{} {}", self.label("relic", locale).await, level);
        let mut lines = vec![m.bold(&m.escape(&title))];
        match catalog.relics().and_then(|t| t.requirement(level)) {
            None => lines.push(self.placeholder("no_relic_data", locale).await),
            Some(req) if req.resources.is_empty() => {
                lines.push(self.placeholder("no_extra_resources", locale).await)
            }
            Some(req) => {
                for (i, (resource, count)) in req.resources.iter().enumerate() {
                    let name = self
                        .cache
                        .localize(resource, locale, TextCategory::RelicMaterial)
                        .await;
                    lines.push(format!(
                        "{} {} \u{00d7} {count}",
                        self.marker(i + 1),
                        m.escape(&name)
                    ));
                }
            }
        }
        lines.join("\n")
    }

    /// Italic "no data"-style line.
    async fn placeholder(&self, key: &str, locale: &Locale) -> String {
        let m = self.config.markup;
        m.italic(&m.escape(&self.label(key, locale).await))
    }

    pub(crate) async fn label(&self, key: &str, locale: &Locale) -> String {
        if let Some(builtin) = labels::builtin(key, locale.language()) {
            return builtin.to_string();
        }
        self.cache
            .localize(labels::english(key), locale, TextCategory::Label)
            .await
    }

    async fn role(&self, role: &str, locale: &Locale) -> String {
        match labels::role_key(role) {
            Some(key) => self.label(key, locale).await,
            None => self.cache.localize(role, locale, TextCategory::Label).await,
        }
    }

    fn marker(&self, position: usize) -> String {
        if !self.config.numbered {
            return "\u{2022}".to_string();
        }
        match position {
            1..=9 => format!("{position}\u{fe0f}\u{20e3}"),
            10 => "\u{1f51f}".to_string(),
            _ => format!("{position}."),
        }
    }
}
