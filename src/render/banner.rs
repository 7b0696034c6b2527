//! Banner: hero name, title line, portrait, bio blocks, metrics and CV link.
//!
//! Bio fields are trusted HTML and are written as-is.

use askama::Template;

use crate::anchors::Anchors;
use crate::dom::{Dom, NodeId};
use crate::model::{Bio, Profile};
use crate::render::{join_present, render_template, SectionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroMetric {
    pub value: String,
    pub label: String,
}

impl HeroMetric {
    /// `"12 Publications"` -> value `12`, label `Publications`.
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(' ') {
            Some((value, label)) => Self {
                value: value.to_string(),
                label: label.to_string(),
            },
            None => Self {
                value: raw.to_string(),
                label: String::new(),
            },
        }
    }
}

#[derive(Template)]
#[template(path = "sections/hero_metrics.html")]
struct HeroMetricsTemplate<'a> {
    metrics: &'a [HeroMetric],
}

/// Tracks whether anything was written and whether an anchor was missing.
#[derive(Default)]
struct Progress {
    rendered: bool,
    missing_anchor: bool,
}

impl Progress {
    fn write<D: Dom + ?Sized>(
        &mut self,
        dom: &mut D,
        anchor: Option<NodeId>,
        write: impl FnOnce(&mut D, NodeId),
    ) {
        match anchor {
            Some(node) => {
                write(dom, node);
                self.rendered = true;
            }
            None => self.missing_anchor = true,
        }
    }

    fn outcome(&self) -> SectionOutcome {
        if self.rendered {
            SectionOutcome::Rendered
        } else if self.missing_anchor {
            SectionOutcome::MissingAnchor
        } else {
            SectionOutcome::NoData
        }
    }
}

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    anchors: &Anchors,
    profile: Option<&Profile>,
    bio: Option<&Bio>,
) -> SectionOutcome {
    let mut progress = Progress::default();

    if let Some(profile) = profile {
        // Metrics first: the only fallible fragment in this section.
        let metrics_html = match profile.metrics.as_deref() {
            Some(raw) if !raw.is_empty() => {
                let metrics: Vec<HeroMetric> = raw.iter().map(|m| HeroMetric::parse(m)).collect();
                match render_template("banner", &HeroMetricsTemplate { metrics: &metrics }) {
                    Ok(html) => Some(html),
                    Err(e) => return SectionOutcome::failed(e),
                }
            }
            _ => None,
        };

        if let Some(name) = profile.name.as_deref() {
            progress.write(dom, anchors.profile_name, |dom, node| dom.set_text(node, name));
        }

        let title_line = join_present(
            &[profile.title.as_deref(), profile.organization.as_deref()],
            " | ",
        );
        if !title_line.is_empty() {
            progress.write(dom, anchors.profile_title, |dom, node| dom.set_text(node, &title_line));
        }

        if let Some(src) = profile.profile_image.as_deref() {
            progress.write(dom, anchors.profile_image, |dom, node| {
                dom.set_attribute(node, "src", src);
                dom.set_attribute(node, "alt", profile.name.as_deref().unwrap_or_default());
                dom.set_attribute(node, "decoding", "async");
            });
        }

        if let Some(html) = metrics_html {
            progress.write(dom, anchors.hero_metrics, |dom, node| dom.set_inner_html(node, &html));
        }

        if let Some(cv) = profile.cv_path.as_deref() {
            progress.write(dom, anchors.cv_button, |dom, node| dom.set_attribute(node, "href", cv));
        }
    }

    if let Some(bio) = bio {
        let blocks = [
            (anchors.profile_intro, bio.introduction.as_deref()),
            (anchors.profile_background, bio.background.as_deref()),
            (anchors.profile_research, bio.research_focus.as_deref()),
        ];
        for (anchor, html) in blocks {
            if let Some(html) = html.filter(|h| !h.is_empty()) {
                progress.write(dom, anchor, |dom, node| dom.set_inner_html(node, html));
            }
        }
    }

    progress.outcome()
}
