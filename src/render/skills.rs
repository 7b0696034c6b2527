//! Skills: one block per declared category, in table order.
//!
//! Categories absent from the document, or with no skills, are skipped.
//! Each list is capped at the configured number of visible skills.

use askama::Template;

use crate::dom::{Dom, NodeId};
use crate::lookup::{IconTable, SKILL_CATEGORIES};
use crate::model::SkillsMap;
use crate::render::{render_template, SectionOutcome};

#[derive(Template)]
#[template(path = "sections/skills_category.html")]
struct SkillsCategoryTemplate<'a> {
    key: &'a str,
    label: &'a str,
    icon: String,
    skills: &'a [String],
}

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    container: Option<NodeId>,
    skills: Option<&SkillsMap>,
    icons: &IconTable,
    visible: usize,
) -> SectionOutcome {
    let Some(skills) = skills.filter(|s| !s.is_empty()) else {
        return SectionOutcome::NoData;
    };
    let Some(container) = container else {
        return SectionOutcome::MissingAnchor;
    };

    let mut html = String::new();
    let mut rendered = 0usize;
    for category in SKILL_CATEGORIES {
        let Some(list) = skills.get(category.key).filter(|l| !l.is_empty()) else {
            continue;
        };
        let template = SkillsCategoryTemplate {
            key: category.key,
            label: category.label,
            icon: icons.icon(category.key),
            skills: &list[..list.len().min(visible)],
        };
        match render_template("skills", &template) {
            Ok(block) => html.push_str(&block),
            Err(e) => return SectionOutcome::failed(e),
        }
        rendered += 1;
    }

    let undeclared = skills.keys().filter(|k| !SKILL_CATEGORIES.iter().any(|c| c.key == k.as_str())).count();
    if undeclared > 0 {
        tracing::debug!("Skipped {} undeclared skill categories", undeclared);
    }

    if rendered == 0 {
        return SectionOutcome::NoData;
    }
    dom.set_inner_html(container, &html);
    SectionOutcome::Rendered
}
