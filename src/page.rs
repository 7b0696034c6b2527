//! Page lifecycle.
//!
//! `init` is the single entry point: resolve the data source, await the one
//! fetch, then render every section synchronously. Nothing touches the
//! document before the fetch succeeds. The returned [`ProfilePage`] owns the
//! interaction state and handles filter clicks and card activations.

use crate::anchors::Anchors;
use crate::config::RenderConfig;
use crate::dom::Dom;
use crate::fetch::{fetch_profile, DataSource};
use crate::interaction::{Activation, CardOutcome, ProjectsController, ScheduledScroll};
use crate::model::ProfileDocument;
use crate::render::{projects, RenderPipeline, RenderReport};

/// Load the profile document and render the page.
///
/// `base` is the page location the data path is resolved against. Returns
/// `None`, with the document untouched, when the pipeline cannot be built or
/// the document cannot be loaded.
pub async fn init<D: Dom + ?Sized>(
    dom: &mut D,
    config: RenderConfig,
    base: Option<&str>,
) -> Option<ProfilePage> {
    let pipeline = match RenderPipeline::new(config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            tracing::error!("Invalid lookup tables: {}", e);
            return None;
        }
    };

    let source = match DataSource::resolve(base, &pipeline.config().data_path) {
        Ok(source) => source,
        Err(e) => {
            tracing::error!("Error loading profile data: {}", e);
            return None;
        }
    };

    tracing::debug!("Loading profile from {}", source);
    let document = fetch_profile(&source).await?;
    tracing::info!("Profile loaded successfully");

    Some(ProfilePage::mount(dom, pipeline, document))
}

/// A rendered page and its interaction state.
#[derive(Debug)]
pub struct ProfilePage {
    pipeline: RenderPipeline,
    document: ProfileDocument,
    anchors: Anchors,
    projects: Option<ProjectsController>,
    report: RenderReport,
}

impl ProfilePage {
    /// Resolve anchors once and render every section.
    pub fn mount<D: Dom + ?Sized>(dom: &mut D, pipeline: RenderPipeline, document: ProfileDocument) -> Self {
        let anchors = Anchors::resolve(dom, &pipeline.config().selectors);

        let mut report = pipeline.render_with(dom, &anchors, &document);
        let projects = report.projects.take();
        tracing::info!("Rendered {} of {} sections", report.rendered_count(), report.sections.len());

        Self {
            pipeline,
            document,
            anchors,
            projects,
            report,
        }
    }

    /// Render every section again from the same document, resolving anchors
    /// afresh. Interaction state returns to its initial values.
    pub fn rerender<D: Dom + ?Sized>(&mut self, dom: &mut D) {
        self.anchors = Anchors::resolve(dom, &self.pipeline.config().selectors);
        let mut report = self.pipeline.render_with(dom, &self.anchors, &self.document);
        self.projects = report.projects.take();
        self.report = report;
    }

    pub fn document(&self) -> &ProfileDocument {
        &self.document
    }

    pub fn anchors(&self) -> &Anchors {
        &self.anchors
    }

    pub fn report(&self) -> &RenderReport {
        &self.report
    }

    /// `None` when the project grid was not rendered.
    pub fn projects(&self) -> Option<&ProjectsController> {
        self.projects.as_ref()
    }

    /// A filter button was clicked. Rebuilds the filter bar and the grid,
    /// with every card collapsed.
    pub fn on_category_click<D: Dom + ?Sized>(&mut self, dom: &mut D, category: &str) -> bool {
        let (Some(controller), Some(grid)) = (self.projects.as_mut(), self.anchors.projects_grid) else {
            return false;
        };
        if !controller.select_category(category) {
            return false;
        }
        projects::render(dom, grid, controller).is_rendered()
    }

    /// A card received a click or key event. `card_key` is the card's
    /// `data-project-id`. Re-renders that card and, when it expanded, returns
    /// the scroll to run after the settle delay.
    pub fn on_card_activation<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        card_key: &str,
        activation: &Activation,
    ) -> Option<ScheduledScroll> {
        let grid = self.anchors.projects_grid?;
        let controller = self.projects.as_mut()?;

        let outcome = controller.activate_card(card_key, activation);
        let expanded = match outcome {
            CardOutcome::Expanded => true,
            CardOutcome::Collapsed => false,
            CardOutcome::Ignored | CardOutcome::UnknownCard => return None,
        };

        if !projects::render_card(dom, grid, controller, card_key).is_rendered() {
            // Keep state and markup in agreement.
            controller.set_expanded(card_key, !expanded);
            return None;
        }

        expanded.then(|| ScheduledScroll::new(grid, card_key, self.pipeline.config().scroll_delay()))
    }
}
