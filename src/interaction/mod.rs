//! Project grid interaction state.
//!
//! [`ProjectsController`] owns the two state machines behind the project
//! grid: the category filter and per-card expansion. The DOM is a projection
//! of this state; handlers mutate the controller and then re-render.

pub mod expansion;
pub mod filter;

use std::time::Duration;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::dom::{Dom, NodeId, ScrollBehavior};
use crate::model::Project;

pub use expansion::{Activation, CardOutcome, EventTarget};
pub use filter::CategoryFilter;

#[derive(Debug, Clone)]
pub struct ProjectsController {
    projects: Vec<Project>,
    /// Card key per project, same order. Unique within the grid.
    keys: Vec<String>,
    filter: CategoryFilter,
    /// Card key -> expanded. Absent means collapsed.
    expanded: FxHashMap<String, bool>,
}

/// The project id, or `project-{index}` when the id is empty or already
/// taken by an earlier card.
fn card_keys(projects: &[Project]) -> Vec<String> {
    let declared: FxHashSet<&str> = projects
        .iter()
        .map(|p| p.id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    let mut used: FxHashSet<String> = FxHashSet::default();

    projects
        .iter()
        .enumerate()
        .map(|(index, project)| {
            if !project.id.is_empty() && used.insert(project.id.clone()) {
                return project.id.clone();
            }
            let mut key = format!("project-{}", index);
            let mut suffix = 1;
            while declared.contains(key.as_str()) || used.contains(&key) {
                key = format!("project-{}-{}", index, suffix);
                suffix += 1;
            }
            tracing::debug!("Project {:?} at position {} keyed as {}", project.id, index, key);
            used.insert(key.clone());
            key
        })
        .collect()
}

impl ProjectsController {
    pub fn new(projects: Vec<Project>) -> Self {
        let filter = CategoryFilter::from_projects(&projects);
        let keys = card_keys(&projects);
        Self {
            projects,
            keys,
            filter,
            expanded: FxHashMap::default(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Every card as `(key, project)`, original order.
    pub fn cards(&self) -> impl Iterator<Item = (&str, &Project)> {
        self.keys.iter().map(String::as_str).zip(self.projects.iter())
    }

    /// The project behind a card key.
    pub fn card(&self, key: &str) -> Option<&Project> {
        self.cards().find(|(k, _)| *k == key).map(|(_, p)| p)
    }

    pub fn categories(&self) -> &[String] {
        self.filter.categories()
    }

    pub fn active_category(&self) -> &str {
        self.filter.active()
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Switch the active category. Every card collapses, including when the
    /// category is unchanged.
    pub fn select_category(&mut self, category: &str) -> bool {
        if !self.filter.select(category) {
            return false;
        }
        self.expanded.clear();
        tracing::debug!("Project filter set to {}", category);
        true
    }

    /// Cards in the grid under the current filter, original order.
    pub fn visible_cards(&self) -> Vec<(&str, &Project)> {
        self.cards().filter(|(_, p)| self.filter.matches(p)).collect()
    }

    pub fn visible_projects(&self) -> Vec<&Project> {
        self.visible_cards().into_iter().map(|(_, p)| p).collect()
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.card(key).is_some_and(|p| self.filter.matches(p))
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.values().filter(|e| **e).count()
    }

    pub fn set_expanded(&mut self, key: &str, expanded: bool) {
        self.expanded.insert(key.to_string(), expanded);
    }

    /// Deliver a user event to one card.
    pub fn activate_card(&mut self, key: &str, activation: &Activation) -> CardOutcome {
        if !self.is_visible(key) {
            return CardOutcome::UnknownCard;
        }
        if !activation.toggles() {
            return CardOutcome::Ignored;
        }
        let expanded = !self.is_expanded(key);
        self.set_expanded(key, expanded);
        if expanded {
            CardOutcome::Expanded
        } else {
            CardOutcome::Collapsed
        }
    }
}

/// Scroll requested after a card expands.
///
/// Fires after a fixed settle delay and is never cancelled: a card collapsed
/// within the delay still gets scrolled to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledScroll {
    pub grid: NodeId,
    pub card_key: String,
    pub delay: Duration,
}

impl ScheduledScroll {
    pub fn new(grid: NodeId, card_key: &str, delay: Duration) -> Self {
        Self {
            grid,
            card_key: card_key.to_string(),
            delay,
        }
    }

    /// Reduced-motion preference is read when the scroll fires.
    pub fn behavior<D: Dom + ?Sized>(dom: &D) -> ScrollBehavior {
        if dom.prefers_reduced_motion() {
            ScrollBehavior::Auto
        } else {
            ScrollBehavior::Smooth
        }
    }

    pub async fn run<D: Dom + ?Sized>(self, dom: &mut D) {
        tokio::time::sleep(self.delay).await;
        let behavior = Self::behavior(dom);
        dom.scroll_child_into_view(self.grid, &self.card_key, behavior);
    }
}
