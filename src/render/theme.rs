//! Theme colors as CSS custom properties on the document root.
//!
//! Each color role in `siteConfig.themeColors` drives one or more custom
//! properties. Roles not in [`THEME_ROLES`] are ignored.

use crate::dom::Dom;
use crate::model::ThemeColors;
use crate::render::SectionOutcome;

/// A document color role and the custom properties it sets.
#[derive(Debug, Clone, Copy)]
pub struct ThemeRole {
    pub role: &'static str,
    pub properties: &'static [&'static str],
}

// ============================================================================
// COLOR ROLES
// Aliased properties keep older stylesheets working.
// ============================================================================

pub static THEME_ROLES: &[ThemeRole] = &[
    ThemeRole { role: "primaryRed", properties: &["--primary-red", "--accent"] },
    ThemeRole { role: "lightRed", properties: &["--light-red"] },
    ThemeRole { role: "darkRed", properties: &["--dark-red"] },
    ThemeRole { role: "textDark", properties: &["--text-dark", "--text-primary"] },
    ThemeRole {
        role: "textLight",
        properties: &["--text-light", "--text-secondary", "--text-tertiary"],
    },
    ThemeRole {
        role: "bgLight",
        properties: &["--bg-light", "--bg-secondary", "--bg-tertiary"],
    },
    ThemeRole { role: "white", properties: &["--white", "--bg-primary"] },
];

/// Properties written for a role, or `None` for an unknown role.
pub fn properties_for(role: &str) -> Option<&'static [&'static str]> {
    THEME_ROLES.iter().find(|r| r.role == role).map(|r| r.properties)
}

pub fn apply<D: Dom + ?Sized>(dom: &mut D, colors: Option<&ThemeColors>) -> SectionOutcome {
    let Some(colors) = colors.filter(|c| !c.is_empty()) else {
        return SectionOutcome::NoData;
    };

    let mut written = 0usize;
    for (role, value) in colors {
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        let Some(properties) = properties_for(role) else {
            tracing::debug!("Ignoring unknown theme color role {}", role);
            continue;
        };
        for property in properties {
            dom.set_root_style_property(property, value);
            written += 1;
        }
    }

    if written == 0 {
        SectionOutcome::NoData
    } else {
        SectionOutcome::Rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::StaticDom;

    fn colors(entries: &[(&str, &str)]) -> ThemeColors {
        entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_aliases_written() {
        let mut dom = StaticDom::from_template("<html><body></body></html>");
        let theme = colors(&[("primaryRed", "#b22222"), ("textLight", "#666")]);

        assert_eq!(apply(&mut dom, Some(&theme)), SectionOutcome::Rendered);
        assert_eq!(dom.root_style("--primary-red"), Some("#b22222"));
        assert_eq!(dom.root_style("--accent"), Some("#b22222"));
        assert_eq!(dom.root_style("--text-light"), Some("#666"));
        assert_eq!(dom.root_style("--text-tertiary"), Some("#666"));
        assert_eq!(dom.root_styles().len(), 5);
    }

    #[test]
    fn test_empty_and_unknown_roles_skipped() {
        let mut dom = StaticDom::from_template("<html></html>");
        let theme = colors(&[("primaryRed", ""), ("neonGreen", "#0f0")]);
        assert_eq!(apply(&mut dom, Some(&theme)), SectionOutcome::NoData);
        assert!(dom.root_styles().is_empty());
        assert_eq!(apply(&mut dom, None), SectionOutcome::NoData);
    }

    #[test]
    fn test_roles_map_to_distinct_properties() {
        let mut seen: Vec<_> = THEME_ROLES.iter().flat_map(|r| r.properties.iter()).collect();
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total);
    }
}
