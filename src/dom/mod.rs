//! Document seam.
//!
//! Renderers and the interaction layer only talk to the page through [`Dom`].
//! A browser binding implements it over the live document; [`StaticDom`]
//! implements it over a template string for previews and tests.

mod static_dom;

pub use static_dom::{NodeSnapshot, ScrollRecord, StaticDom};

/// Opaque handle to an element resolved from a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// `scrollIntoView` behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    /// Instant jump, used when the user prefers reduced motion.
    Auto,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Auto => "auto",
        }
    }
}

/// Mutations the page needs from its host document.
///
/// Every write replaces; nothing appends. That keeps a second render pass
/// identical to the first.
pub trait Dom {
    /// Resolve `#id` or bare tag selectors. `None` when the template lacks it.
    fn query(&self, selector: &str) -> Option<NodeId>;

    /// Replace the element's children with trusted markup.
    fn set_inner_html(&mut self, node: NodeId, html: &str);

    /// Replace the element's children with a single text node.
    fn set_text(&mut self, node: NodeId, text: &str);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    /// Write a custom property on the document root (`--name`).
    fn set_root_style_property(&mut self, name: &str, value: &str);

    /// Insert `html` immediately before `node`, removing any earlier sibling
    /// inserted with the same `class`.
    fn replace_sibling_before(&mut self, node: NodeId, class: &str, html: &str);

    /// Replace the element's children with keyed fragments, in order.
    fn set_keyed_children(&mut self, node: NodeId, children: &[(String, String)]);

    /// Swap one keyed child in place. Returns `false` if the key is unknown.
    fn replace_keyed_child(&mut self, node: NodeId, key: &str, html: &str) -> bool;

    /// `scrollIntoView({ behavior, block: "nearest" })` on a keyed child.
    fn scroll_child_into_view(&mut self, node: NodeId, key: &str, behavior: ScrollBehavior);

    /// `(prefers-reduced-motion: reduce)`
    fn prefers_reduced_motion(&self) -> bool;
}

/// Escape text for element content and quoted attribute values, with the
/// same escaper the askama templates use.
pub fn escape_html(input: &str) -> String {
    askama_escape::escape(input, askama_escape::Html).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use askama::Template;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom" & 'Jerry'"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#x27;Jerry&#x27;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[derive(Template)]
    #[template(source = "{{ value }}", ext = "html")]
    struct Echo<'a> {
        value: &'a str,
    }

    #[test]
    fn test_direct_writes_escape_like_templates() {
        let value = r#"Ada & "Bea" <c> 'd'"#;
        assert_eq!(escape_html(value), Echo { value }.render().unwrap());
    }
}
