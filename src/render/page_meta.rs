//! Page meta: document title.

use crate::anchors::Anchors;
use crate::dom::Dom;
use crate::model::Profile;
use crate::render::SectionOutcome;

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    anchors: &Anchors,
    profile: Option<&Profile>,
) -> SectionOutcome {
    let Some(name) = profile.and_then(|p| p.name.as_deref()).filter(|n| !n.is_empty()) else {
        return SectionOutcome::NoData;
    };
    let Some(title) = anchors.page_title else {
        return SectionOutcome::MissingAnchor;
    };
    dom.set_text(title, name);
    SectionOutcome::Rendered
}
