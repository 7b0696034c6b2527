//! Section Renderers
//!
//! Each section maps one slice of the profile document onto one or more
//! anchors. Contract shared by every renderer:
//! - missing anchor or absent/empty data: no-op, no error
//! - otherwise the complete fragment is built first, then written in a
//!   single replace, so an anchor is never left half-populated
//!
//! ## Sections (render order)
//! 1. Page meta - document title
//! 2. Header - logo, navigation and contact links
//! 3. Banner - name, title, image, bio, hero metrics, CV link
//! 4. Publications - card grid
//! 5. Projects - filter bar + expandable card grid
//! 6. Skills - capped lists per declared category
//! 7. Education - degree/institution items
//! 8. Theme - CSS custom properties on the document root

pub mod banner;
pub mod education;
pub mod header;
pub mod page_meta;
pub mod projects;
pub mod publications;
pub mod skills;
pub mod theme;

use crate::anchors::Anchors;
use crate::config::RenderConfig;
use crate::dom::Dom;
use crate::error::{LookupError, RenderError};
use crate::interaction::ProjectsController;
use crate::lookup::IconTable;
use crate::model::ProfileDocument;

/// What a section renderer did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    Rendered,
    MissingAnchor,
    NoData,
    /// Fragment could not be built; anchor left untouched.
    Failed(String),
}

impl SectionOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SectionOutcome::Rendered)
    }

    /// Log and convert a fragment build failure.
    pub(crate) fn failed(error: RenderError) -> Self {
        tracing::warn!("{}", error);
        SectionOutcome::Failed(error.to_string())
    }
}

/// Result of one pass over every section.
#[derive(Debug)]
pub struct RenderReport {
    pub sections: Vec<(&'static str, SectionOutcome)>,
    /// Interaction state for the project grid, present only when the grid
    /// was rendered.
    pub projects: Option<ProjectsController>,
}

impl RenderReport {
    pub fn outcome(&self, section: &str) -> Option<&SectionOutcome> {
        self.sections
            .iter()
            .find(|(name, _)| *name == section)
            .map(|(_, outcome)| outcome)
    }

    pub fn rendered_count(&self) -> usize {
        self.sections.iter().filter(|(_, o)| o.is_rendered()).count()
    }
}

/// Stateless renderer configured once at construction.
#[derive(Debug, Clone)]
pub struct RenderPipeline {
    config: RenderConfig,
    icons: IconTable,
}

impl RenderPipeline {
    /// Build a pipeline, validating the skill icon table.
    pub fn new(config: RenderConfig) -> Result<Self, LookupError> {
        let icons = IconTable::builtin()?;
        Ok(Self { config, icons })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn icons(&self) -> &IconTable {
        &self.icons
    }

    /// Resolve anchors and render every section.
    pub fn render<D: Dom + ?Sized>(&self, dom: &mut D, document: &ProfileDocument) -> RenderReport {
        let anchors = Anchors::resolve(dom, &self.config.selectors);
        self.render_with(dom, &anchors, document)
    }

    /// Render every section against already-resolved anchors.
    pub fn render_with<D: Dom + ?Sized>(
        &self,
        dom: &mut D,
        anchors: &Anchors,
        document: &ProfileDocument,
    ) -> RenderReport {
        let mut sections = Vec::with_capacity(8);

        sections.push(("page_meta", page_meta::render(dom, anchors, document.profile.as_ref())));
        sections.push((
            "header",
            header::render(dom, anchors, document.profile.as_ref(), document.navigation.as_deref(), document.contact.as_ref()),
        ));
        sections.push((
            "banner",
            banner::render(dom, anchors, document.profile.as_ref(), document.bio.as_ref()),
        ));
        sections.push((
            "publications",
            publications::render(dom, anchors.publications_grid, document.publications.as_deref()),
        ));

        let mut controller = None;
        let projects_outcome = match document.projects.as_deref() {
            Some(list) if !list.is_empty() => match anchors.projects_grid {
                Some(grid) => {
                    let fresh = ProjectsController::new(list.to_vec());
                    let outcome = projects::render(dom, grid, &fresh);
                    if outcome.is_rendered() {
                        controller = Some(fresh);
                    }
                    outcome
                }
                None => SectionOutcome::MissingAnchor,
            },
            _ => SectionOutcome::NoData,
        };
        sections.push(("projects", projects_outcome));

        sections.push((
            "skills",
            skills::render(
                dom,
                anchors.skills_container,
                document.skills.as_ref(),
                &self.icons,
                self.config.skills_visible,
            ),
        ));
        sections.push((
            "education",
            education::render(dom, anchors.education_grid, document.education.as_deref()),
        ));
        sections.push(("theme", theme::apply(dom, document.theme_colors())));

        for (name, outcome) in &sections {
            tracing::debug!("Section {}: {:?}", name, outcome);
        }

        RenderReport {
            sections,
            projects: controller,
        }
    }
}

/// Render an askama template, tagging failures with the section name.
pub(crate) fn render_template<T: askama::Template>(
    section: &'static str,
    template: &T,
) -> Result<String, RenderError> {
    template
        .render()
        .map_err(|source| RenderError::Template { section, source })
}

/// Join the present, non-empty parts with `sep`.
pub(crate) fn join_present(parts: &[Option<&str>], sep: &str) -> String {
    parts
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(sep)
}
