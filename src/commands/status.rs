//! /status: catalog and translation summary.

use crate::i18n;
use holocron_report::Lookup;
use std::time::Instant;

pub(super) fn handle_status(lookup: &Lookup, uptime: &Instant, lang: &str) -> String {
    let catalog = lookup.catalog();
    let cache = lookup.cache();
    let relic_levels = catalog.relics().map_or(0, |r| r.len());
    let translator = cache
        .translator_name()
        .unwrap_or_else(|| i18n::t("translator_off", lang));

    let mut out = format!(
        "{}\n\
         {} {}\n\
         {} {}\n\
         {} {}\n\
         {} {relic_levels}\n\
         {} {translator}\n\
         {} {}",
        i18n::t("status_header", lang),
        i18n::t("uptime", lang),
        i18n::uptime(uptime.elapsed().as_secs()),
        i18n::t("units", lang),
        catalog.unit_count(),
        i18n::t("gear_items", lang),
        catalog.gear_count(),
        i18n::t("relic_levels", lang),
        i18n::t("translator", lang),
        i18n::t("cached_translations", lang),
        cache.memo().len(),
    );
    if catalog.is_empty() {
        out.push_str(&format!("\n\n{}", i18n::t("catalog_empty", lang)));
    }
    out
}
