//! Skill Category Lookup Tables
//!
//! Declared skill categories (render order + heading label) and one inline
//! SVG descriptor per category. Unknown keys fall back to a plain circle.
//!
//! The icon table is checked against the declared categories when the render
//! pipeline is built, so an icon keyed by a typo fails at load time instead of
//! silently never rendering.

use rustc_hash::FxHashMap;

use crate::error::LookupError;

/// A declared skill category: data key and visible heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub label: &'static str,
}

/// Vector icon descriptor: the inner SVG elements for one category.
#[derive(Debug, Clone, Copy)]
pub struct SkillIcon {
    pub key: &'static str,
    pub body: &'static str,
}

// ============================================================================
// DECLARED CATEGORIES
// Render order is table order.
// ============================================================================

pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory { key: "programming", label: "Programming & Scripting" },
    SkillCategory { key: "bigDataTechnologies", label: "Big Data Technologies" },
    SkillCategory { key: "dataProcessing", label: "Data Processing Frameworks" },
    SkillCategory { key: "cloudPlatforms", label: "Cloud Platforms & Services" },
    SkillCategory { key: "databases", label: "Databases & Storage" },
    SkillCategory { key: "dataWarehousing", label: "Data Warehousing & Modeling" },
    SkillCategory { key: "etlTools", label: "ETL & Integration Tools" },
    SkillCategory { key: "dataGovernance", label: "Data Quality & Governance" },
    SkillCategory { key: "versionControl", label: "Version Control & Collaboration" },
    SkillCategory { key: "containerization", label: "Containerization & DevOps" },
    SkillCategory { key: "monitoring", label: "Monitoring & Logging" },
    SkillCategory { key: "visualization", label: "Visualization & Reporting" },
    SkillCategory { key: "methodologies", label: "Methodologies" },
    SkillCategory { key: "softSkills", label: "Professional Skills" },
    // Legacy keys still found in older documents
    SkillCategory { key: "toolsAndDevOps", label: "Tools & DevOps" },
    SkillCategory { key: "analyticsTools", label: "Analytics & Data" },
    SkillCategory { key: "integrationTools", label: "Integration & Tools" },
    SkillCategory { key: "otherTools", label: "Productivity Tools" },
];

// ============================================================================
// EMBEDDED ICONS
// ============================================================================

const SVG_PROPS: &str = r#"width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.8" stroke-linecap="round" stroke-linejoin="round""#;

const FALLBACK_ICON: &str = r#"<circle cx="12" cy="12" r="9"/>"#;

pub static SKILL_ICONS: &[SkillIcon] = &[
    SkillIcon { key: "programming", body: r#"<path d="M16 18l6-6-6-6"/><path d="M8 6L2 12l6 6"/>"# },
    SkillIcon { key: "bigDataTechnologies", body: r#"<circle cx="7" cy="12" r="3"/><circle cx="17" cy="7" r="3"/><circle cx="17" cy="17" r="3"/><path d="M10 12h4M14 7l-1 2M14 17l-1-2"/>"# },
    SkillIcon { key: "dataProcessing", body: r#"<rect x="3" y="4" width="7" height="6" rx="1"/><rect x="14" y="4" width="7" height="6" rx="1"/><rect x="3" y="14" width="7" height="6" rx="1"/><path d="M10 7h4M7 10v4M17 10v4"/>"# },
    SkillIcon { key: "cloudPlatforms", body: r#"<path d="M18 18H7a4 4 0 010-8 5 5 0 019.5 1.5A3.5 3.5 0 0118 18z"/>"# },
    SkillIcon { key: "databases", body: r#"<ellipse cx="12" cy="5" rx="8" ry="3"/><path d="M4 5v6c0 1.7 3.6 3 8 3s8-1.3 8-3V5"/><path d="M4 11v6c0 1.7 3.6 3 8 3s8-1.3 8-3v-6"/>"# },
    SkillIcon { key: "dataWarehousing", body: r#"<path d="M3 7l9-5 9 5v10l-9 5-9-5V7z"/><path d="M3 12l9 5 9-5"/>"# },
    SkillIcon { key: "etlTools", body: r#"<path d="M3 7h6v6H3zM9 10h6M15 10v4M15 14h6"/>"# },
    SkillIcon { key: "dataGovernance", body: r#"<path d="M12 2l7 4v6c0 5-3 8-7 10-4-2-7-5-7-10V6l7-4z"/><path d="M9 12l2 2 4-4"/>"# },
    SkillIcon { key: "versionControl", body: r#"<circle cx="6" cy="6" r="2"/><circle cx="6" cy="18" r="2"/><circle cx="18" cy="12" r="2"/><path d="M8 6h6a4 4 0 014 4v0M8 18h6a4 4 0 004-4v0"/>"# },
    SkillIcon { key: "containerization", body: r#"<rect x="3" y="7" width="18" height="10" rx="2"/><path d="M7 7v10M12 7v10M17 7v10"/>"# },
    SkillIcon { key: "monitoring", body: r#"<path d="M3 12h3l3 6 4-12 3 6h5"/>"# },
    SkillIcon { key: "visualization", body: r#"<rect x="3" y="10" width="4" height="10"/><rect x="10" y="6" width="4" height="14"/><rect x="17" y="3" width="4" height="17"/>"# },
    SkillIcon { key: "methodologies", body: r#"<path d="M4 6h16M4 12h12M4 18h8"/>"# },
    SkillIcon { key: "softSkills", body: r#"<path d="M12 12a5 5 0 100-10 5 5 0 000 10z"/><path d="M20 21a8 8 0 10-16 0"/>"# },
    SkillIcon { key: "toolsAndDevOps", body: r#"<path d="M12 2v4M12 18v4M4.9 4.9l2.8 2.8M16.3 16.3l2.8 2.8M2 12h4M18 12h4M4.9 19.1l2.8-2.8M16.3 7.7l2.8-2.8"/>"# },
    SkillIcon { key: "analyticsTools", body: r#"<path d="M3 3v18h18"/><path d="M7 15l4-4 3 3 4-5"/>"# },
    SkillIcon { key: "integrationTools", body: r#"<path d="M7 7h10v10H7z"/><path d="M2 12h5M17 12h5"/>"# },
    SkillIcon { key: "otherTools", body: r#"<path d="M12 2l3 5-3 5-3-5 3-5z"/><path d="M5 19h14M5 22h14"/>"# },
];

// ============================================================================
// LOOKUP
// ============================================================================

/// Icon descriptors keyed by category, validated against a category list.
#[derive(Debug, Clone)]
pub struct IconTable {
    icons: FxHashMap<&'static str, &'static str>,
}

impl IconTable {
    /// Build from `entries`, rejecting keys not declared in `categories` and
    /// keys that appear twice.
    pub fn validate(
        entries: &[SkillIcon],
        categories: &[SkillCategory],
    ) -> Result<Self, LookupError> {
        let mut icons = FxHashMap::default();
        for entry in entries {
            if !categories.iter().any(|c| c.key == entry.key) {
                return Err(LookupError::UnknownCategory(entry.key.to_string()));
            }
            if icons.insert(entry.key, entry.body).is_some() {
                return Err(LookupError::DuplicateIcon(entry.key.to_string()));
            }
        }

        let missing = categories.iter().filter(|c| !icons.contains_key(c.key)).count();
        if missing > 0 {
            tracing::debug!("{} skill categories will use the fallback icon", missing);
        }

        Ok(Self { icons })
    }

    /// The embedded table checked against [`SKILL_CATEGORIES`].
    pub fn builtin() -> Result<Self, LookupError> {
        Self::validate(SKILL_ICONS, SKILL_CATEGORIES)
    }

    /// Complete `<svg>` markup for a category key.
    pub fn icon(&self, key: &str) -> String {
        let body = self.icons.get(key).copied().unwrap_or(FALLBACK_ICON);
        format!("<svg {}>{}</svg>", SVG_PROPS, body)
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Icon markup for a category key using the embedded table.
///
/// # Examples
/// ```
/// use profile_page::lookup::skill_icon;
///
/// assert!(skill_icon("databases").contains("<ellipse"));
/// assert!(skill_icon("unheardOf").contains(r#"<circle cx="12" cy="12" r="9"/>"#));
/// ```
pub fn skill_icon(key: &str) -> String {
    let body = SKILL_ICONS
        .iter()
        .find(|icon| icon.key == key)
        .map(|icon| icon.body)
        .unwrap_or(FALLBACK_ICON);
    format!("<svg {}>{}</svg>", SVG_PROPS, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_validates() {
        let table = IconTable::builtin().unwrap();
        assert_eq!(table.len(), SKILL_CATEGORIES.len());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let entries = [SkillIcon { key: "programing", body: "<path/>" }];
        let err = IconTable::validate(&entries, SKILL_CATEGORIES).unwrap_err();
        assert_eq!(err, LookupError::UnknownCategory("programing".to_string()));
    }

    #[test]
    fn test_duplicate_icon_rejected() {
        let entries = [
            SkillIcon { key: "databases", body: "<path/>" },
            SkillIcon { key: "databases", body: "<circle/>" },
        ];
        let err = IconTable::validate(&entries, SKILL_CATEGORIES).unwrap_err();
        assert_eq!(err, LookupError::DuplicateIcon("databases".to_string()));
    }

    #[test]
    fn test_fallback_icon() {
        let table = IconTable::validate(&[], SKILL_CATEGORIES).unwrap();
        assert!(table.is_empty());
        let svg = table.icon("programming");
        assert!(svg.starts_with("<svg width=\"20\""));
        assert!(svg.contains(FALLBACK_ICON));
    }

    #[test]
    fn test_category_keys_unique() {
        let mut keys: Vec<_> = SKILL_CATEGORIES.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SKILL_CATEGORIES.len());
    }
}
