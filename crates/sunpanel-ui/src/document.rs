//! Host page abstraction.
//!
//! Everything the presentation layer does to a page goes through
//! [`Document`]. A browser binding implements it over the real DOM;
//! [`MemoryDocument`] implements it in memory for tests and headless use.

use std::collections::BTreeMap;

/// Handle to an element owned by a [`Document`].
///
/// Handles are only meaningful for the document that issued them and are
/// never stored across page loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

pub trait Document {
    /// First element matching `selector`, in document order.
    fn query_selector(&self, selector: &str) -> Option<ElementId>;

    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<ElementId>;

    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    fn style(&self, el: ElementId, property: &str) -> Option<String>;

    fn set_style(&mut self, el: ElementId, property: &str, value: &str);

    fn set_inner_html(&mut self, el: ElementId, html: &str);

    fn has_class(&self, el: ElementId, class: &str) -> bool;

    fn is_disabled(&self, el: ElementId) -> bool;

    /// Activate the element as if the user clicked it.
    fn click(&mut self, el: ElementId);

    fn body_background(&self) -> Option<String>;

    fn set_body_background(&mut self, value: &str);

    /// Whether the host delivers touch events.
    fn supports_touch(&self) -> bool;

    /// Whether the host can register service workers.
    fn supports_service_worker(&self) -> bool;
}

/// A simple selector: optional tag, optional id, any number of classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    /// Parse `tag#id.class1.class2`; every part is optional.
    fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let mut compound = Compound::default();
        let mut current = String::new();
        let mut marker: Option<char> = None;

        for ch in s.chars() {
            match ch {
                '#' | '.' => {
                    compound.take_part(marker, &mut current);
                    marker = Some(ch);
                }
                _ => current.push(ch),
            }
        }
        compound.take_part(marker, &mut current);

        if compound == Compound::default() {
            None
        } else {
            Some(compound)
        }
    }

    fn take_part(&mut self, marker: Option<char>, value: &mut String) {
        if value.is_empty() {
            return;
        }
        let v = std::mem::take(value);
        match marker {
            None => self.tag = Some(v.to_lowercase()),
            Some('#') => self.id = Some(v),
            Some(_) => self.classes.push(v),
        }
    }

    fn matches(&self, node: &Node) -> bool {
        self.tag.as_ref().map_or(true, |t| *t == node.tag)
            && self.id.as_ref().map_or(true, |id| node.id.as_ref() == Some(id))
            && self.classes.iter().all(|c| node.classes.contains(c))
    }
}

/// Comma-separated list of compound selectors.
fn parse_selector_list(selector: &str) -> Vec<Compound> {
    selector.split(',').filter_map(Compound::parse).collect()
}

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    style: BTreeMap<String, String>,
    inner_html: String,
    disabled: bool,
    clicks: u32,
}

/// In-memory document with a flat element list.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    body_background: Option<String>,
    touch: bool,
    service_worker: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_touch(mut self, enabled: bool) -> Self {
        self.touch = enabled;
        self
    }

    pub fn with_service_worker(mut self, enabled: bool) -> Self {
        self.service_worker = enabled;
        self
    }

    /// Append an element described as `tag#id.class`, e.g.
    /// `button#viewWeatherBtn.weather-btn`. The tag defaults to `div`.
    pub fn append(&mut self, spec: &str) -> ElementId {
        let compound = Compound::parse(spec).unwrap_or_default();
        self.nodes.push(Node {
            tag: compound.tag.unwrap_or_else(|| "div".to_string()),
            id: compound.id,
            classes: compound.classes,
            ..Node::default()
        });
        ElementId(self.nodes.len() - 1)
    }

    pub fn add_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            if !node.classes.iter().any(|c| c == class) {
                node.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, el: ElementId, class: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.classes.retain(|c| c != class);
        }
    }

    pub fn set_disabled(&mut self, el: ElementId, disabled: bool) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.disabled = disabled;
        }
    }

    pub fn inner_html(&self, el: ElementId) -> Option<&str> {
        self.nodes.get(el.0).map(|n| n.inner_html.as_str())
    }

    /// How many times the element has been clicked.
    pub fn clicks(&self, el: ElementId) -> u32 {
        self.nodes.get(el.0).map_or(0, |n| n.clicks)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Document for MemoryDocument {
    fn query_selector(&self, selector: &str) -> Option<ElementId> {
        self.query_selector_all(selector).into_iter().next()
    }

    fn query_selector_all(&self, selector: &str) -> Vec<ElementId> {
        let list = parse_selector_list(selector);
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| list.iter().any(|c| c.matches(node)))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn style(&self, el: ElementId, property: &str) -> Option<String> {
        self.nodes.get(el.0)?.style.get(property).cloned()
    }

    fn set_style(&mut self, el: ElementId, property: &str, value: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.style.insert(property.to_string(), value.to_string());
        }
    }

    fn set_inner_html(&mut self, el: ElementId, html: &str) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.inner_html = html.to_string();
        }
    }

    fn has_class(&self, el: ElementId, class: &str) -> bool {
        self.nodes
            .get(el.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn is_disabled(&self, el: ElementId) -> bool {
        self.nodes.get(el.0).is_some_and(|n| n.disabled)
    }

    fn click(&mut self, el: ElementId) {
        if let Some(node) = self.nodes.get_mut(el.0) {
            node.clicks += 1;
        }
    }

    fn body_background(&self) -> Option<String> {
        self.body_background.clone()
    }

    fn set_body_background(&mut self, value: &str) {
        self.body_background = Some(value.to_string());
    }

    fn supports_touch(&self) -> bool {
        self.touch
    }

    fn supports_service_worker(&self) -> bool {
        self.service_worker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compound() {
        let c = Compound::parse("button#go.weather-btn.active").unwrap();
        assert_eq!(c.tag.as_deref(), Some("button"));
        assert_eq!(c.id.as_deref(), Some("go"));
        assert_eq!(c.classes, vec!["weather-btn", "active"]);
        assert!(Compound::parse("  ").is_none());
    }

    #[test]
    fn test_append_defaults_to_div() {
        let mut doc = MemoryDocument::new();
        let el = doc.append(".main");
        assert_eq!(doc.query_selector("div.main"), Some(el));
    }

    #[test]
    fn test_selector_list_in_document_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.append(".map-btn");
        let _ = doc.append(".unrelated");
        let b = doc.append(".city-card");
        let c = doc.append("a.btn-back");

        let found = doc.query_selector_all(".city-card, .map-btn ,.btn-back");
        assert_eq!(found, vec![a, b, c]);
    }

    #[test]
    fn test_element_by_id() {
        let mut doc = MemoryDocument::new();
        let _ = doc.append(".x");
        let btn = doc.append("button#viewWeatherBtn");
        assert_eq!(doc.element_by_id("viewWeatherBtn"), Some(btn));
        assert_eq!(doc.query_selector("#viewWeatherBtn"), Some(btn));
        assert_eq!(doc.element_by_id("missing"), None);
    }

    #[test]
    fn test_classes_and_state() {
        let mut doc = MemoryDocument::new();
        let el = doc.append(".city-card");
        doc.add_class(el, "selected");
        assert!(doc.has_class(el, "selected"));
        doc.remove_class(el, "selected");
        assert!(!doc.has_class(el, "selected"));

        doc.set_disabled(el, true);
        assert!(doc.is_disabled(el));
    }

    #[test]
    fn test_unknown_handle_is_ignored() {
        let mut doc = MemoryDocument::new();
        let ghost = ElementId(42);
        doc.set_style(ghost, "opacity", "1");
        doc.click(ghost);
        assert_eq!(doc.style(ghost, "opacity"), None);
        assert_eq!(doc.clicks(ghost), 0);
        assert!(!doc.has_class(ghost, "x"));
    }
}
