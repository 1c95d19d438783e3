/// Kind of text being localized. Part of every cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextCategory {
    UnitName,
    Description,
    GearMaterial,
    RelicMaterial,
    Label,
    /// Free-text user queries translated back into the native locale.
    SearchQuery,
}

impl TextCategory {
    pub const ALL: [TextCategory; 6] = [
        Self::UnitName,
        Self::Description,
        Self::GearMaterial,
        Self::RelicMaterial,
        Self::Label,
        Self::SearchQuery,
    ];

    /// Key used in the localization table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnitName => "unit_names",
            Self::Description => "descriptions",
            Self::GearMaterial => "gear_materials",
            Self::RelicMaterial => "relic_materials",
            Self::Label => "labels",
            Self::SearchQuery => "search_query",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrips_every_category() {
        for c in TextCategory::ALL {
            assert_eq!(TextCategory::parse(c.as_str()), Some(c));
        }
        assert_eq!(TextCategory::parse("nope"), None);
    }
}
