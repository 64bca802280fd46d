//! Element construction with optional text and class.

use crate::dom::{Document, NodeId};

/// Builder for one element with optional text content and class.
///
/// The default builder produces an empty `p`.
///
/// # Examples
///
/// ```
/// use employee_directory::dom::Document;
/// use employee_directory::inbound::page::ElementBuilder;
///
/// let mut document = Document::new();
/// let heading = ElementBuilder::new("h2").text("Hello").build(&mut document);
/// assert_eq!(document.outer_html(heading), "<h2>Hello</h2>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBuilder {
    tag: String,
    text: String,
    class_name: Option<String>,
}

impl Default for ElementBuilder {
    fn default() -> Self {
        Self::new("p")
    }
}

impl ElementBuilder {
    /// Start a builder for `tag`.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: String::new(),
            class_name: None,
        }
    }

    /// Replace the tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Set the text content; empty text adds no text node.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the class attribute; an empty class is not applied.
    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Create the element in `document`. The element is left detached.
    pub fn build(self, document: &mut Document) -> NodeId {
        let element = document.create_element(&self.tag);
        if !self.text.is_empty() {
            document.set_text_content(element, self.text);
        }
        if let Some(class_name) = self.class_name.filter(|class| !class.is_empty()) {
            document.set_class_name(element, &class_name);
        }
        element
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn default_builds_an_empty_paragraph() {
        let mut document = Document::new();

        let element = ElementBuilder::default().build(&mut document);

        assert_eq!(document.outer_html(element), "<p></p>");
        assert!(document.children(element).is_empty());
        assert_eq!(document.parent(element), None);
    }

    #[test]
    fn applies_text_and_class() {
        let mut document = Document::new();

        let element = ElementBuilder::new("p")
            .text("Select an Employee to display their posts.")
            .class_name("default-text")
            .build(&mut document);

        assert_eq!(
            document.outer_html(element),
            "<p class=\"default-text\">Select an Employee to display their posts.</p>"
        );
    }

    #[rstest]
    #[case::empty_text("", None)]
    #[case::empty_class("", Some(""))]
    fn empty_inputs_leave_the_element_bare(#[case] text: &str, #[case] class: Option<&str>) {
        let mut document = Document::new();
        let mut builder = ElementBuilder::new("button").text(text);
        if let Some(class) = class {
            builder = builder.class_name(class);
        }

        let element = builder.build(&mut document);

        assert!(document.children(element).is_empty());
        assert_eq!(document.class_name(element), "");
    }
}
