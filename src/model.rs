//! Input document model.
//!
//! Mirrors the JSON profile document loaded once per page lifetime:
//! - `profile`, `bio`: hero banner and header
//! - `navigation`, `contact`: header nav list
//! - `publications`, `projects`, `education`: card grids
//! - `skills`: category key -> ordered skill labels
//! - `siteConfig.themeColors`: color role -> CSS color value
//!
//! Every field is optional. A field holding the wrong JSON type (e.g. an
//! object where a list is expected) fails the whole parse, so a malformed
//! document never reaches the renderers.

use std::collections::BTreeMap;

use serde::{de::Error as _, Deserialize, Deserializer};
use serde_json::Value;

/// The whole profile document. Read-only after load.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileDocument {
    pub profile: Option<Profile>,
    pub bio: Option<Bio>,
    pub navigation: Option<Vec<NavigationItem>>,
    pub contact: Option<ContactInfo>,
    pub publications: Option<Vec<Publication>>,
    pub projects: Option<Vec<Project>>,
    pub education: Option<Vec<EducationEntry>>,
    pub skills: Option<SkillsMap>,
    pub site_config: Option<SiteConfig>,
}

impl ProfileDocument {
    /// Theme colors, if the document declares any.
    pub fn theme_colors(&self) -> Option<&ThemeColors> {
        self.site_config.as_ref()?.theme_colors.as_ref()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub profile_image: Option<String>,
    /// Hero metric strings such as `"12 Publications"`.
    pub metrics: Option<Vec<String>>,
    pub cv_path: Option<String>,
}

/// Free-text bio fields. Values are trusted HTML fragments.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Bio {
    pub introduction: Option<String>,
    pub background: Option<String>,
    pub research_focus: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct NavigationItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub google_scholar: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.linkedin.is_none()
            && self.github.is_none()
            && self.google_scholar.is_none()
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Publication {
    pub title: String,
    pub authors: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub links: Option<PublicationLinks>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PublicationLinks {
    pub paper: Option<String>,
    /// Placeholder shown instead of a paper link, e.g. `"under review"`.
    pub status: Option<String>,
    pub github: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    /// Free-form filter tag. `"all"` is reserved for the unfiltered view.
    pub category: String,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    pub short_description: Option<String>,
    pub detailed_description: Option<String>,
    pub metrics: Option<Vec<ProjectMetric>>,
    pub tech_stack: Option<Vec<String>>,
    pub links: Option<ProjectLinks>,
    pub document_path: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectMetric {
    pub value: String,
    pub label: String,
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub year: Option<String>,
    pub logo: Option<String>,
}

/// Skill category key -> ordered skill labels.
pub type SkillsMap = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    pub theme_colors: Option<ThemeColors>,
}

/// Color role name -> CSS color value.
pub type ThemeColors = BTreeMap<String, String>;

/// Years appear both as `"2021"` and `2021` in hand-written documents.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// Ids are keys, so a numeric id is as good as a string one.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(string_or_number(deserializer)?.unwrap_or_default())
}
