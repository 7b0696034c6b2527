//! Project category filter.
//!
//! One active category at a time, starting at `"all"`. The category list is
//! derived from the projects (unique, first-appearance order), never declared.

use crate::lookup::ALL_CATEGORY;
use crate::model::Project;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    categories: Vec<String>,
    active: String,
}

impl CategoryFilter {
    pub fn from_projects(projects: &[Project]) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for project in projects {
            let category = project.category.as_str();
            // "all" is the synthetic selector; a project tagged with it still
            // shows under "all" but gets no second button.
            if category.is_empty() || category == ALL_CATEGORY {
                continue;
            }
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        Self {
            categories,
            active: ALL_CATEGORY.to_string(),
        }
    }

    /// Derived categories, excluding `"all"`.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    /// Make `category` the active selector. Unknown categories are refused.
    pub fn select(&mut self, category: &str) -> bool {
        if category != ALL_CATEGORY && !self.categories.iter().any(|c| c == category) {
            tracing::warn!("Ignoring unknown project category: {}", category);
            return false;
        }
        self.active = category.to_string();
        true
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.active == ALL_CATEGORY || project.category == self.active
    }

    /// Projects passing the filter, in original order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, category: &str) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_uppercase(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let projects = vec![
            project("a", "github"),
            project("b", "academic"),
            project("c", "github"),
            project("d", ""),
            project("e", "robotics"),
        ];
        let filter = CategoryFilter::from_projects(&projects);
        assert_eq!(filter.categories(), &["github", "academic", "robotics"]);
        assert_eq!(filter.active(), "all");
    }

    #[test]
    fn test_apply_exact_match_preserves_order() {
        let projects = vec![
            project("a", "github"),
            project("b", "academic"),
            project("c", "github"),
            project("d", "GitHub"),
        ];
        let mut filter = CategoryFilter::from_projects(&projects);

        assert!(filter.select("github"));
        let ids: Vec<_> = filter.apply(&projects).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        assert!(filter.select("all"));
        assert_eq!(filter.apply(&projects).len(), 4);
    }

    #[test]
    fn test_unknown_category_refused() {
        let projects = vec![project("a", "github")];
        let mut filter = CategoryFilter::from_projects(&projects);
        assert!(filter.select("github"));
        assert!(!filter.select("nope"));
        assert_eq!(filter.active(), "github");
    }

    #[test]
    fn test_project_tagged_all_gets_no_button() {
        let projects = vec![project("a", "all"), project("b", "github")];
        let filter = CategoryFilter::from_projects(&projects);
        assert_eq!(filter.categories(), &["github"]);
        assert_eq!(filter.apply(&projects).len(), 2);
    }
}
