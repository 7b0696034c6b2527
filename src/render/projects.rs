//! Project grid: category filter bar and expandable cards.
//!
//! The grid is a projection of [`ProjectsController`]. A filter change
//! re-renders the bar and the whole grid; a card toggle re-renders only that
//! card, found by its card key.

use askama::Template;

use crate::dom::{Dom, NodeId};
use crate::error::RenderError;
use crate::interaction::ProjectsController;
use crate::lookup::{category_label, LinkIcon, ALL_CATEGORY};
use crate::model::Project;
use crate::render::{render_template, SectionOutcome};

/// Class of the filter bar inserted before the grid.
pub const FILTER_CONTAINER_CLASS: &str = "project-filter-container";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterButton {
    pub category: String,
    pub label: String,
    pub active: bool,
}

#[derive(Template)]
#[template(path = "sections/project_filter.html")]
struct FilterBarTemplate<'a> {
    buttons: &'a [FilterButton],
}

struct MetricView<'a> {
    value: &'a str,
    label: &'a str,
    tooltip: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLink {
    pub href: String,
    pub label: &'static str,
    pub class: &'static str,
    pub icon: Option<&'static str>,
    pub download: bool,
}

#[derive(Template)]
#[template(path = "sections/project_card.html")]
struct ProjectCardTemplate<'a> {
    id: &'a str,
    category: &'a str,
    expanded: bool,
    title: &'a str,
    year: Option<&'a str>,
    summary: Option<&'a str>,
    metrics: Vec<MetricView<'a>>,
    detail: Option<&'a str>,
    tech_stack: &'a [String],
    links: Vec<CardLink>,
}

/// "All Projects" followed by one button per discovered category.
pub fn filter_buttons(controller: &ProjectsController) -> Vec<FilterButton> {
    std::iter::once(ALL_CATEGORY)
        .chain(controller.categories().iter().map(String::as_str))
        .map(|category| FilterButton {
            category: category.to_string(),
            label: category_label(category).to_string(),
            active: controller.filter().is_active(category),
        })
        .collect()
}

pub fn filter_bar_html(controller: &ProjectsController) -> Result<String, RenderError> {
    let buttons = filter_buttons(controller);
    render_template("projects", &FilterBarTemplate { buttons: &buttons })
}

/// Code, demo and document links, in that order.
pub fn card_links(project: &Project) -> Vec<CardLink> {
    let mut links = Vec::new();
    let present = |s: &Option<String>| non_empty(s).map(str::to_string);

    if let Some(project_links) = &project.links {
        if let Some(href) = present(&project_links.github) {
            links.push(CardLink {
                href,
                label: "GitHub",
                class: "github-link",
                icon: Some(LinkIcon::GitHub.svg()),
                download: false,
            });
        }
        if let Some(href) = present(&project_links.website) {
            links.push(CardLink {
                href,
                label: "Live Demo",
                class: "demo-link",
                icon: None,
                download: false,
            });
        }
    }
    if let Some(href) = present(&project.document_path) {
        links.push(CardLink {
            href,
            label: "View Document",
            class: "document-link",
            icon: Some(LinkIcon::Document.svg()),
            download: true,
        });
    }

    links
}

/// Markup for one card. `key` becomes `data-project-id`.
pub fn card_html(project: &Project, key: &str, expanded: bool) -> Result<String, RenderError> {
    let summary = non_empty(&project.short_description);

    let metrics = project
        .metrics
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|m| MetricView {
            value: &m.value,
            label: &m.label,
            tooltip: m.tooltip.as_deref().unwrap_or_default(),
        })
        .collect();

    let template = ProjectCardTemplate {
        id: key,
        category: &project.category,
        expanded,
        title: &project.title,
        year: non_empty(&project.year),
        summary,
        metrics,
        detail: non_empty(&project.detailed_description).or(summary),
        tech_stack: project.tech_stack.as_deref().unwrap_or_default(),
        links: card_links(project),
    };
    render_template("projects", &template)
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Render the filter bar and every visible card.
pub fn render<D: Dom + ?Sized>(dom: &mut D, grid: NodeId, controller: &ProjectsController) -> SectionOutcome {
    let bar = match filter_bar_html(controller) {
        Ok(html) => html,
        Err(e) => return SectionOutcome::failed(e),
    };

    let mut cards = Vec::new();
    for (key, project) in controller.visible_cards() {
        match card_html(project, key, controller.is_expanded(key)) {
            Ok(html) => cards.push((key.to_string(), html)),
            Err(e) => return SectionOutcome::failed(e),
        }
    }

    dom.replace_sibling_before(grid, FILTER_CONTAINER_CLASS, &bar);
    dom.set_keyed_children(grid, &cards);
    SectionOutcome::Rendered
}

/// Re-render a single card after its expansion state changed.
pub fn render_card<D: Dom + ?Sized>(
    dom: &mut D,
    grid: NodeId,
    controller: &ProjectsController,
    key: &str,
) -> SectionOutcome {
    let Some(project) = controller.card(key) else {
        return SectionOutcome::NoData;
    };
    let html = match card_html(project, key, controller.is_expanded(key)) {
        Ok(html) => html,
        Err(e) => return SectionOutcome::failed(e),
    };
    if dom.replace_keyed_child(grid, key, &html) {
        SectionOutcome::Rendered
    } else {
        SectionOutcome::MissingAnchor
    }
}
