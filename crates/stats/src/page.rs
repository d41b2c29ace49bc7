// ABOUTME: Typed query interface over a parsed HTML page.
// ABOUTME: Wraps scraper's document tree behind Page, Locator, and Node so extractors never touch markup types.

//! Page querying.
//!
//! Extractors ask for elements by a stable identifier ([`Locator`]) and work
//! with the returned [`Node`] capabilities only: visible text, attribute
//! lookup, and descendant traversal. The `scraper` tree stays private to this
//! module.

use scraper::node::Element;
use scraper::{ElementRef, Html};

/// A stable way of identifying one element in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locator<'a> {
    /// `<tag id="id">`
    Id { tag: &'a str, id: &'a str },
    /// `<tag class="... class ...">`
    Class { tag: &'a str, class: &'a str },
    /// `<meta property="property">`
    MetaProperty(&'a str),
}

impl Locator<'_> {
    fn matches(&self, el: &Element) -> bool {
        match *self {
            Locator::Id { tag, id } => el.name() == tag && el.id() == Some(id),
            Locator::Class { tag, class } => el.name() == tag && el.classes().any(|c| c == class),
            Locator::MetaProperty(property) => {
                el.name() == "meta" && el.attr("property") == Some(property)
            }
        }
    }
}

/// Loaded page content, parsed once and queried immutably.
#[derive(Debug, Clone)]
pub struct Page {
    html: Html,
}

impl Page {
    /// Parses a full HTML document. Parsing is lenient and never fails.
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Returns the first element in document order matching the locator.
    pub fn find(&self, locator: &Locator<'_>) -> Option<Node<'_>> {
        self.html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| locator.matches(el.value()))
            .map(Node::new)
    }

    /// Returns the `content` of `<meta property="...">`, trimmed and non-empty.
    pub fn meta_property(&self, property: &str) -> Option<&str> {
        self.find(&Locator::MetaProperty(property))
            .and_then(|node| node.attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
    }
}

/// A located element exposing text, attributes, and children.
#[derive(Debug, Clone, Copy)]
pub struct Node<'a> {
    el: ElementRef<'a>,
}

impl<'a> Node<'a> {
    fn new(el: ElementRef<'a>) -> Self {
        Self { el }
    }

    /// Lowercase tag name.
    pub fn name(&self) -> &'a str {
        self.el.value().name()
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.el.value().attr(name)
    }

    /// Visible text with nested markup ignored, trimmed of surrounding whitespace.
    pub fn text(&self) -> String {
        self.el.text().collect::<String>().trim().to_string()
    }

    /// Direct child elements.
    pub fn children(&self) -> impl Iterator<Item = Node<'a>> + 'a {
        self.el.children().filter_map(ElementRef::wrap).map(Node::new)
    }

    /// All descendant elements with one of the given tag names, in document order.
    pub fn descendants_named(&self, tags: &[&str]) -> Vec<Node<'a>> {
        self.el
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .map(Node::new)
            .collect()
    }

    /// Table rows below this element.
    pub fn rows(&self) -> Vec<Node<'a>> {
        self.descendants_named(&["tr"])
    }

    /// Data cells (`td`) of a row, left to right.
    pub fn cells(&self) -> Vec<Node<'a>> {
        self.descendants_named(&["td"])
    }

    /// Header or data cells that carry a `title` attribute, left to right.
    pub fn titled_cells(&self) -> Vec<Node<'a>> {
        self.descendants_named(&["td", "th"])
            .into_iter()
            .filter(|cell| cell.attr("title").is_some())
            .collect()
    }
}
