//! HTML serialisation of document subtrees.

use super::document::{Document, ElementData, NodeData};
use super::NodeId;

impl Document {
    /// Serialise `id` and its descendants as HTML.
    ///
    /// A fragment serialises as its children; text and attribute values are
    /// escaped. An `option` whose value matches the value set on its `select`
    /// is marked `selected`.
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    /// Serialise the children of `id` as HTML.
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        for child in self.children(id) {
            self.write_html(*child, &mut out);
        }
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.data {
            NodeData::Text(text) => out.push_str(&escape_text(text)),
            NodeData::Fragment => {
                for child in &node.children {
                    self.write_html(*child, out);
                }
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.tag);
                for (name, value) in &element.attributes {
                    out.push_str(&format!(" {name}=\"{}\"", escape_attribute(value)));
                }
                if !element.classes.is_empty() {
                    out.push_str(&format!(
                        " class=\"{}\"",
                        escape_attribute(&element.classes.join(" "))
                    ));
                }
                if element.disabled {
                    out.push_str(" disabled");
                }
                if self.is_selected_option(id, element) {
                    out.push_str(" selected");
                }
                out.push('>');
                for child in &node.children {
                    self.write_html(*child, out);
                }
                out.push_str("</");
                out.push_str(&element.tag);
                out.push('>');
            }
        }
    }

    fn is_selected_option(&self, id: NodeId, option: &ElementData) -> bool {
        if option.tag != "option" {
            return false;
        }
        let mut current = self.parent(id);
        while let Some(ancestor) = current {
            if self.tag(ancestor) == Some("select") {
                let chosen = self
                    .node(ancestor)
                    .and_then(|node| match &node.data {
                        NodeData::Element(select) => select.value.as_deref(),
                        NodeData::Text(_) | NodeData::Fragment => None,
                    });
                return chosen.is_some() && chosen == self.attribute(id, "value");
            }
            current = self.parent(ancestor);
        }
        false
    }
}

fn escape_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(raw: &str) -> String {
    escape_text(raw).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    //! Serialisation coverage for element, text, and fragment nodes.

    use super::*;

    #[test]
    fn serialises_attributes_classes_and_disabled_state() {
        let mut document = Document::new();
        let button = document.create_element("button");
        document.set_data(button, "post-id", "7");
        document.add_class(button, "primary");
        document.set_disabled(button, true);
        document.set_text_content(button, "Show Comments");

        assert_eq!(
            document.outer_html(button),
            "<button data-post-id=\"7\" class=\"primary\" disabled>Show Comments</button>"
        );
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let mut document = Document::new();
        let paragraph = document.create_element("p");
        document.set_attribute(paragraph, "title", "say \"hi\"");
        document.set_text_content(paragraph, "a < b & c");

        assert_eq!(
            document.outer_html(paragraph),
            "<p title=\"say &quot;hi&quot;\">a &lt; b &amp; c</p>"
        );
    }

    #[test]
    fn fragments_serialise_as_their_children() {
        let mut document = Document::new();
        let fragment = document.create_document_fragment();
        let first = document.create_element("h3");
        let second = document.create_element("p");
        document.append_child(fragment, first);
        document.append_child(fragment, second);

        assert_eq!(document.outer_html(fragment), "<h3></h3><p></p>");
    }

    #[test]
    fn marks_the_option_matching_the_select_value() {
        let mut document = Document::new();
        let select = document.create_element("select");
        for (value, label) in [("1", "Leanne"), ("3", "Clementine")] {
            let option = document.create_element("option");
            document.set_attribute(option, "value", value);
            document.set_text_content(option, label);
            document.append_child(select, option);
        }

        let untouched = document.outer_html(select);
        document.set_value(select, "3");

        assert_eq!(
            untouched,
            "<select><option value=\"1\">Leanne</option><option value=\"3\">Clementine</option></select>"
        );
        assert_eq!(
            document.outer_html(select),
            "<select><option value=\"1\">Leanne</option><option value=\"3\" selected>Clementine</option></select>"
        );
    }
}
