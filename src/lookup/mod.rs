//! Static lookup tables.
//!
//! - `skills`: declared skill categories and their icons
//! - `projects`: project category labels and link icons

pub mod projects;
pub mod skills;

pub use projects::{category_label, LinkIcon, ALL_CATEGORY};
pub use skills::{skill_icon, IconTable, SkillCategory, SKILL_CATEGORIES};
