//! Header: logo, navigation list and contact links.
//!
//! Contact links are appended after the navigation items inside the same
//! list. The list is rebuilt whole on every pass.

use askama::Template;

use crate::anchors::Anchors;
use crate::dom::{escape_html, Dom};
use crate::model::{ContactInfo, NavigationItem, Profile};
use crate::render::{render_template, SectionOutcome};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
}

#[derive(Template)]
#[template(path = "sections/nav_links.html")]
struct NavLinksTemplate<'a> {
    items: &'a [NavLink],
}

/// Navigation items followed by contact links, in display order.
pub fn nav_links(navigation: Option<&[NavigationItem]>, contact: Option<&ContactInfo>) -> Vec<NavLink> {
    let mut links: Vec<NavLink> = navigation
        .unwrap_or_default()
        .iter()
        .map(|item| NavLink {
            label: item.label.clone(),
            href: item.href.clone(),
            external: false,
        })
        .collect();

    if let Some(contact) = contact {
        if let Some(email) = &contact.email {
            links.push(NavLink {
                label: email.clone(),
                href: format!("mailto:{}", email),
                external: false,
            });
        }
        let external = [
            (&contact.linkedin, "LinkedIn"),
            (&contact.github, "GitHub"),
            (&contact.google_scholar, "Google Scholar"),
        ];
        for (href, label) in external {
            if let Some(href) = href {
                links.push(NavLink {
                    label: label.to_string(),
                    href: href.clone(),
                    external: true,
                });
            }
        }
    }

    links
}

pub fn render<D: Dom + ?Sized>(
    dom: &mut D,
    anchors: &Anchors,
    profile: Option<&Profile>,
    navigation: Option<&[NavigationItem]>,
    contact: Option<&ContactInfo>,
) -> SectionOutcome {
    let mut rendered = false;
    let mut missing_anchor = false;

    // Logo
    if let Some(name) = profile.and_then(|p| p.name.as_deref()) {
        match anchors.site_logo {
            Some(logo) => {
                dom.set_inner_html(logo, &format!("<strong>{}</strong>", escape_html(name)));
                rendered = true;
            }
            None => missing_anchor = true,
        }
    }

    // Navigation + contact
    let links = nav_links(navigation, contact);
    if !links.is_empty() {
        match anchors.nav_links {
            Some(list) => match render_template("header", &NavLinksTemplate { items: &links }) {
                Ok(html) => {
                    dom.set_inner_html(list, &html);
                    rendered = true;
                }
                Err(e) => return SectionOutcome::failed(e),
            },
            None => missing_anchor = true,
        }
    }

    if rendered {
        SectionOutcome::Rendered
    } else if missing_anchor {
        SectionOutcome::MissingAnchor
    } else {
        SectionOutcome::NoData
    }
}
