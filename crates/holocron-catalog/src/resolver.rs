//! Fuzzy resolution of free text to a catalog unit.

use crate::catalog::Catalog;
use crate::similarity::name_score;
use holocron_core::config::ResolverConfig;
use tracing::debug;

/// A scored candidate unit name.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    pub score: f64,
}

/// Outcome of resolving a query.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Best match clearing the acceptance threshold.
    Found(Candidate),
    /// Nothing cleared the threshold. `suggestions` may be empty.
    NotFound { suggestions: Vec<Candidate> },
}

/// Matches queries against every canonical unit name.
#[derive(Debug, Clone)]
pub struct Resolver {
    min_score: f64,
    max_suggestions: usize,
    suggestion_floor: f64,
}

impl Resolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self {
            min_score: config.min_score,
            max_suggestions: config.max_suggestions,
            suggestion_floor: config.suggestion_floor,
        }
    }

    /// All unit names scored against `query`, best first. Equal scores keep
    /// catalog order.
    pub fn rank(&self, catalog: &Catalog, query: &str) -> Vec<Candidate> {
        let mut ranked: Vec<Candidate> = catalog
            .all_unit_names()
            .iter()
            .map(|name| Candidate {
                name: name.clone(),
                score: name_score(query, name),
            })
            .collect();
        // Stable sort: ties stay in insertion order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Resolve to the single best match, or suggestions when nothing clears
    /// the threshold.
    pub fn resolve(&self, catalog: &Catalog, query: &str) -> Resolution {
        let ranked = self.rank(catalog, query);
        match ranked.first() {
            Some(best) if best.score >= self.min_score => {
                debug!("resolved '{query}' → '{}' ({:.3})", best.name, best.score);
                Resolution::Found(best.clone())
            }
            _ => {
                let suggestions: Vec<Candidate> = ranked
                    .into_iter()
                    .filter(|c| c.score >= self.suggestion_floor && c.score > 0.0)
                    .take(self.max_suggestions)
                    .collect();
                debug!(
                    "no match for '{query}', {} suggestion(s)",
                    suggestions.len()
                );
                Resolution::NotFound { suggestions }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::sample_catalog;

    fn resolver() -> Resolver {
        Resolver::new(&ResolverConfig::default())
    }

    #[test]
    fn test_every_verbatim_name_resolves_to_itself() {
        let catalog = sample_catalog();
        for name in catalog.all_unit_names() {
            match resolver().resolve(&catalog, name) {
                Resolution::Found(c) => {
                    assert_eq!(&c.name, name);
                    assert_eq!(c.score, 1.0);
                }
                other => panic!("'{name}' did not resolve: {other:?}"),
            }
        }
    }

    #[test]
    fn test_typo_resolves_to_darth_revan() {
        let catalog = sample_catalog();
        match resolver().resolve(&catalog, "revn") {
            Resolution::Found(c) => assert_eq!(c.name, "Darth Revan"),
            other => panic!("expected Darth Revan, got {other:?}"),
        }
    }

    #[test]
    fn test_tie_breaks_by_catalog_order() {
        // "revan" is an equal word match for both Revans; Darth Revan loads first.
        let catalog = sample_catalog();
        let ranked = resolver().rank(&catalog, "revan");
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].name, "Darth Revan");
        assert_eq!(ranked[1].name, "Jedi Knight Revan");
    }

    #[test]
    fn test_below_threshold_is_not_found() {
        let catalog = sample_catalog();
        match resolver().resolve(&catalog, "zzzzzzzz") {
            Resolution::NotFound { suggestions } => assert!(suggestions.is_empty()),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_offers_ranked_suggestions() {
        let catalog = sample_catalog();
        let strict = Resolver::new(&ResolverConfig {
            min_score: 0.99,
            max_suggestions: 2,
            suggestion_floor: 0.3,
        });
        match strict.resolve(&catalog, "revn") {
            Resolution::NotFound { suggestions } => {
                assert_eq!(suggestions.len(), 2);
                assert_eq!(suggestions[0].name, "Darth Revan");
                assert_eq!(suggestions[1].name, "Jedi Knight Revan");
                assert!(suggestions.iter().all(|c| c.score < 0.99));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_catalog_never_matches() {
        let catalog = Catalog::empty();
        assert_eq!(
            resolver().resolve(&catalog, "Darth Revan"),
            Resolution::NotFound {
                suggestions: vec![]
            }
        );
    }

    #[test]
    fn test_punctuated_name_matches_by_word() {
        let catalog = sample_catalog();
        match resolver().resolve(&catalog, "rex") {
            Resolution::Found(c) => assert_eq!(c.name, "CT-7567 \"Rex\""),
            other => panic!("expected Rex, got {other:?}"),
        }
    }
}
