//! In-memory document backed by a template string.
//!
//! Anchors are discovered once by scanning the template for `id="..."`
//! attributes, the `<title>` element and the `<html>` root. Writes are kept
//! per node and spliced back into the template by [`StaticDom::to_html`].

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

use super::{escape_html, Dom, NodeId, ScrollBehavior};

/// Selector under which the `<html>` element is registered.
pub const ROOT_SELECTOR: &str = ":root";

const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn id_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<([a-zA-Z][a-zA-Z0-9-]*)\b[^>]*?\sid\s*=\s*"([^"]+)"[^>]*>"#)
            .expect("static id regex")
    })
}

fn named_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<(title|html)\b[^>]*>").expect("static tag regex"))
}

#[derive(Debug, Clone, PartialEq)]
enum Content {
    Html(String),
    Keyed(Vec<(String, String)>),
}

impl Content {
    fn to_html(&self) -> String {
        match self {
            Content::Html(html) => html.clone(),
            Content::Keyed(children) => children.iter().map(|(_, html)| html.as_str()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
struct Node {
    selector: String,
    tag: String,
    open_start: usize,
    open_end: usize,
    content: Option<Content>,
    attributes: BTreeMap<String, String>,
    before: Option<(String, String)>,
}

/// A `scroll_child_into_view` call, recorded for inspection.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollRecord {
    pub node: NodeId,
    pub key: String,
    pub behavior: ScrollBehavior,
}

/// Observable state of one anchor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeSnapshot {
    /// `None` while the template content is untouched.
    pub inner_html: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub before: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StaticDom {
    template: String,
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    root_style: BTreeMap<String, String>,
    reduced_motion: bool,
    scrolls: Vec<ScrollRecord>,
}

impl StaticDom {
    pub fn from_template(template: impl Into<String>) -> Self {
        let template = template.into();
        let mut nodes = Vec::new();
        let mut index = HashMap::new();

        let mut register = |selector: String, tag: &str, start: usize, end: usize| {
            if index.contains_key(&selector) {
                return;
            }
            let id = NodeId(nodes.len());
            index.insert(selector.clone(), id);
            nodes.push(Node {
                selector,
                tag: tag.to_ascii_lowercase(),
                open_start: start,
                open_end: end,
                content: None,
                attributes: BTreeMap::new(),
                before: None,
            });
        };

        for caps in id_tag_regex().captures_iter(&template) {
            let (Some(whole), Some(tag), Some(id)) = (caps.get(0), caps.get(1), caps.get(2)) else {
                continue;
            };
            register(format!("#{}", id.as_str()), tag.as_str(), whole.start(), whole.end());
        }

        for caps in named_tag_regex().captures_iter(&template) {
            let (Some(whole), Some(tag)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let tag = tag.as_str().to_ascii_lowercase();
            let selector = if tag == "html" { ROOT_SELECTOR.to_string() } else { tag.clone() };
            register(selector, &tag, whole.start(), whole.end());
        }

        tracing::debug!("Template scanned: {} anchors", nodes.len());

        Self {
            template,
            nodes,
            index,
            root_style: BTreeMap::new(),
            reduced_motion: false,
            scrolls: Vec::new(),
        }
    }

    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    pub fn anchor_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, selector: &str) -> Option<&Node> {
        self.index.get(selector).map(|id| &self.nodes[id.0])
    }

    /// Current children of an anchor, or `None` if never written.
    pub fn inner_html(&self, selector: &str) -> Option<String> {
        self.node(selector)?.content.as_ref().map(Content::to_html)
    }

    pub fn attribute(&self, selector: &str, name: &str) -> Option<&str> {
        self.node(selector)?.attributes.get(name).map(String::as_str)
    }

    /// Markup inserted before the anchor via `replace_sibling_before`.
    pub fn sibling_before(&self, selector: &str) -> Option<&str> {
        self.node(selector)?.before.as_ref().map(|(_, html)| html.as_str())
    }

    /// Keys of the anchor's keyed children, in order.
    pub fn child_keys(&self, selector: &str) -> Vec<String> {
        match self.node(selector).and_then(|n| n.content.as_ref()) {
            Some(Content::Keyed(children)) => children.iter().map(|(k, _)| k.clone()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn keyed_child(&self, selector: &str, key: &str) -> Option<&str> {
        match self.node(selector)?.content.as_ref()? {
            Content::Keyed(children) => children
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, html)| html.as_str()),
            Content::Html(_) => None,
        }
    }

    pub fn root_style(&self, name: &str) -> Option<&str> {
        self.root_style.get(name).map(String::as_str)
    }

    pub fn root_styles(&self) -> &BTreeMap<String, String> {
        &self.root_style
    }

    pub fn title(&self) -> Option<String> {
        self.inner_html("title")
    }

    pub fn scrolls(&self) -> &[ScrollRecord] {
        &self.scrolls
    }

    /// State of every anchor, keyed by selector.
    pub fn snapshot(&self) -> BTreeMap<String, NodeSnapshot> {
        self.nodes
            .iter()
            .map(|n| {
                (
                    n.selector.clone(),
                    NodeSnapshot {
                        inner_html: n.content.as_ref().map(Content::to_html),
                        attributes: n.attributes.clone(),
                        before: n.before.as_ref().map(|(_, html)| html.clone()),
                    },
                )
            })
            .collect()
    }

    /// True when no renderer has touched any anchor or the root style.
    pub fn is_pristine(&self) -> bool {
        self.root_style.is_empty()
            && self
                .nodes
                .iter()
                .all(|n| n.content.is_none() && n.attributes.is_empty() && n.before.is_none())
    }

    /// Splice every write back into the template.
    pub fn to_html(&self) -> String {
        let mut out = String::with_capacity(self.template.len() * 2);
        let mut cursor = 0;

        let mut order: Vec<&Node> = self.nodes.iter().collect();
        order.sort_by_key(|n| n.open_start);

        for node in order {
            // Swallowed by an ancestor whose content was replaced.
            if node.open_start < cursor {
                continue;
            }
            out.push_str(&self.template[cursor..node.open_start]);
            if let Some((_, html)) = &node.before {
                out.push_str(html);
            }

            let mut attributes = node.attributes.clone();
            if node.selector == ROOT_SELECTOR && !self.root_style.is_empty() {
                let style = self
                    .root_style
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k, v))
                    .collect::<Vec<_>>()
                    .join("; ");
                attributes.insert("style".to_string(), style);
            }
            out.push_str(&rewrite_open_tag(
                &self.template[node.open_start..node.open_end],
                &attributes,
            ));
            cursor = node.open_end;

            let Some(content) = &node.content else {
                continue;
            };
            if VOID_TAGS.contains(&node.tag.as_str()) {
                continue;
            }
            if let Some(close_start) = find_close_tag(&self.template, &node.tag, node.open_end) {
                out.push_str(&content.to_html());
                cursor = close_start;
            }
        }

        out.push_str(&self.template[cursor..]);
        out
    }
}

impl Dom for StaticDom {
    fn query(&self, selector: &str) -> Option<NodeId> {
        self.index.get(selector).copied()
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.content = Some(Content::Html(html.to_string()));
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.content = Some(Content::Html(escape_html(text)));
        }
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn set_root_style_property(&mut self, name: &str, value: &str) {
        self.root_style.insert(name.to_string(), value.to_string());
    }

    fn replace_sibling_before(&mut self, node: NodeId, class: &str, html: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.before = Some((class.to_string(), html.to_string()));
        }
    }

    fn set_keyed_children(&mut self, node: NodeId, children: &[(String, String)]) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.content = Some(Content::Keyed(children.to_vec()));
        }
    }

    fn replace_keyed_child(&mut self, node: NodeId, key: &str, html: &str) -> bool {
        let Some(Content::Keyed(children)) = self.nodes.get_mut(node.0).and_then(|n| n.content.as_mut())
        else {
            return false;
        };
        match children.iter_mut().find(|(k, _)| k == key) {
            Some(child) => {
                child.1 = html.to_string();
                true
            }
            None => false,
        }
    }

    fn scroll_child_into_view(&mut self, node: NodeId, key: &str, behavior: ScrollBehavior) {
        self.scrolls.push(ScrollRecord {
            node,
            key: key.to_string(),
            behavior,
        });
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.reduced_motion
    }
}

/// Byte offset of the `</tag>` closing the element whose open tag ends at `from`.
fn find_close_tag(template: &str, tag: &str, from: usize) -> Option<usize> {
    let pattern = format!(r"(?i)<(/?){}\b[^>]*>", regex::escape(tag));
    let re = Regex::new(&pattern).ok()?;
    let mut depth = 1usize;
    for caps in re.captures_iter(&template[from..]) {
        let whole = caps.get(0)?;
        let closing = caps.get(1).map(|m| !m.as_str().is_empty()).unwrap_or(false);
        if closing {
            depth -= 1;
            if depth == 0 {
                return Some(from + whole.start());
            }
        } else if !whole.as_str().ends_with("/>") {
            depth += 1;
        }
    }
    None
}

/// Set or replace attributes on a single open tag.
fn rewrite_open_tag(open_tag: &str, attributes: &BTreeMap<String, String>) -> String {
    let mut tag = open_tag.to_string();
    for (name, value) in attributes {
        let rendered = format!(" {}=\"{}\"", name, escape_html(value));
        let pattern = format!(r#"\s{}\s*=\s*"[^"]*""#, regex::escape(name));
        match Regex::new(&pattern) {
            Ok(re) if re.is_match(&tag) => {
                tag = re.replacen(&tag, 1, NoExpand(&rendered)).into_owned();
            }
            _ => {
                let insert_at = if tag.ends_with("/>") {
                    tag.len() - 2
                } else {
                    tag.len() - 1
                };
                let head = tag[..insert_at].trim_end().to_string();
                let tail = tag[insert_at..].to_string();
                let spacer = if tail.starts_with('/') { " " } else { "" };
                tag = format!("{}{}{}{}", head, rendered, spacer, tail);
            }
        }
    }
    tag
}
