//! Publication cards.

use askama::Template;

use crate::dom::{Dom, NodeId};
use crate::model::Publication;
use crate::render::{join_present, render_template, SectionOutcome};

/// Card image used when a publication declares none.
pub const DEFAULT_PUBLICATION_IMAGE: &str = "images/pic01.jpg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAction {
    pub href: String,
    pub label: String,
}

#[derive(Template)]
#[template(path = "sections/publication_card.html")]
struct PublicationCardTemplate<'a> {
    image: &'a str,
    title: &'a str,
    authors_line: Option<String>,
    description: Option<&'a str>,
    actions: Vec<CardAction>,
}

/// "Read Paper" when a paper link exists, otherwise a status placeholder;
/// then "View Project" for a code link.
pub fn card_actions(publication: &Publication) -> Vec<CardAction> {
    let mut actions = Vec::new();
    let Some(links) = &publication.links else {
        return actions;
    };

    if let Some(paper) = links.paper.as_deref().filter(|p| !p.is_empty()) {
        actions.push(CardAction {
            href: paper.to_string(),
            label: "Read Paper".to_string(),
        });
    } else if let Some(status) = links.status.as_deref().filter(|s| !s.is_empty()) {
        actions.push(CardAction {
            href: "#".to_string(),
            label: format!("Paper ({})", status),
        });
    }

    if let Some(github) = links.github.as_deref().filter(|g| !g.is_empty()) {
        actions.push(CardAction {
            href: github.to_string(),
            label: "View Project".to_string(),
        });
    }

    actions
}

pub fn card_html(publication: &Publication) -> Result<String, crate::error::RenderError> {
    let authors_line = join_present(
        &[publication.authors.as_deref(), publication.venue.as_deref()],
        ", ",
    );
    let template = PublicationCardTemplate {
        image: publication
            .image
            .as_deref()
            .filter(|i| !i.is_empty())
            .unwrap_or(DEFAULT_PUBLICATION_IMAGE),
        title: &publication.title,
        authors_line: (!authors_line.is_empty()).then_some(authors_line),
        description: publication.description.as_deref().filter(|d| !d.is_empty()),
        actions: card_actions(publication),
    };
    render_template("publications", &template)
}

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    grid: Option<NodeId>,
    publications: Option<&[Publication]>,
) -> SectionOutcome {
    let Some(publications) = publications.filter(|p| !p.is_empty()) else {
        return SectionOutcome::NoData;
    };
    let Some(grid) = grid else {
        return SectionOutcome::MissingAnchor;
    };

    let mut html = String::new();
    for publication in publications {
        match card_html(publication) {
            Ok(card) => html.push_str(&card),
            Err(e) => return SectionOutcome::failed(e),
        }
    }
    dom.set_inner_html(grid, &html);
    SectionOutcome::Rendered
}
