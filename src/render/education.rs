//! Education items.

use askama::Template;

use crate::dom::{Dom, NodeId};
use crate::error::RenderError;
use crate::model::EducationEntry;
use crate::render::{join_present, render_template, SectionOutcome};

/// Prefix rewrites applied to degree names, first occurrence only.
const DEGREE_PREFIXES: &[(&str, &str)] = &[
    ("Diploma in ", ""),
    ("Bachelor's in ", ""),
    ("Master's in ", "Master's "),
];

#[derive(Template)]
#[template(path = "sections/education_item.html")]
struct EducationItemTemplate<'a> {
    logo: Option<&'a str>,
    logo_alt: String,
    degree: String,
    place: String,
    year: Option<&'a str>,
}

/// Shorten verbose degree names: `"Master's in Data Science"` becomes
/// `"Master's Data Science"`, `"Diploma in Robotics"` becomes `"Robotics"`.
pub fn normalize_degree(degree: &str) -> String {
    DEGREE_PREFIXES
        .iter()
        .fold(degree.to_string(), |acc, (from, to)| acc.replacen(from, to, 1))
}

pub fn item_html(entry: &EducationEntry) -> Result<String, RenderError> {
    let institution = entry.institution.as_deref().unwrap_or_default();
    let template = EducationItemTemplate {
        logo: entry.logo.as_deref().filter(|l| !l.is_empty()),
        logo_alt: format!("{} logo", institution).trim_start().to_string(),
        degree: normalize_degree(&entry.degree),
        place: join_present(&[entry.institution.as_deref(), entry.location.as_deref()], ", "),
        year: entry.year.as_deref().filter(|y| !y.is_empty()),
    };
    render_template("education", &template)
}

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    grid: Option<NodeId>,
    education: Option<&[EducationEntry]>,
) -> SectionOutcome {
    let Some(education) = education.filter(|e| !e.is_empty()) else {
        return SectionOutcome::NoData;
    };
    let Some(grid) = grid else {
        return SectionOutcome::MissingAnchor;
    };

    let items: Result<String, RenderError> = education.iter().map(item_html).collect();
    match items {
        Ok(html) => {
            dom.set_inner_html(grid, &html);
            SectionOutcome::Rendered
        }
        Err(e) => SectionOutcome::failed(e),
    }
}
