//! Anchor resolution.
//!
//! Queries every selector once per render pass and hands renderers a struct
//! of optional handles, so a missing anchor is just a `None` field.

use crate::config::Selectors;
use crate::dom::{Dom, NodeId};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchors {
    pub page_title: Option<NodeId>,
    pub site_logo: Option<NodeId>,
    pub nav_links: Option<NodeId>,
    pub profile_name: Option<NodeId>,
    pub profile_title: Option<NodeId>,
    pub profile_image: Option<NodeId>,
    pub profile_intro: Option<NodeId>,
    pub profile_background: Option<NodeId>,
    pub profile_research: Option<NodeId>,
    pub hero_metrics: Option<NodeId>,
    pub cv_button: Option<NodeId>,
    pub publications_grid: Option<NodeId>,
    pub projects_grid: Option<NodeId>,
    pub education_grid: Option<NodeId>,
    pub skills_container: Option<NodeId>,
}

impl Anchors {
    pub fn resolve<D: Dom + ?Sized>(dom: &D, selectors: &Selectors) -> Self {
        let anchors = Self {
            page_title: dom.query(&selectors.page_title),
            site_logo: dom.query(&selectors.site_logo),
            nav_links: dom.query(&selectors.nav_links),
            profile_name: dom.query(&selectors.profile_name),
            profile_title: dom.query(&selectors.profile_title),
            profile_image: dom.query(&selectors.profile_image),
            profile_intro: dom.query(&selectors.profile_intro),
            profile_background: dom.query(&selectors.profile_background),
            profile_research: dom.query(&selectors.profile_research),
            hero_metrics: dom.query(&selectors.hero_metrics),
            cv_button: dom.query(&selectors.cv_button),
            publications_grid: dom.query(&selectors.publications_grid),
            projects_grid: dom.query(&selectors.projects_grid),
            education_grid: dom.query(&selectors.education_grid),
            skills_container: dom.query(&selectors.skills_container),
        };
        tracing::debug!("Resolved {}/15 anchors", anchors.resolved_count());
        anchors
    }

    pub fn resolved_count(&self) -> usize {
        [
            self.page_title,
            self.site_logo,
            self.nav_links,
            self.profile_name,
            self.profile_title,
            self.profile_image,
            self.profile_intro,
            self.profile_background,
            self.profile_research,
            self.hero_metrics,
            self.cv_button,
            self.publications_grid,
            self.projects_grid,
            self.education_grid,
            self.skills_container,
        ]
        .iter()
        .filter(|a| a.is_some())
        .count()
    }
}
