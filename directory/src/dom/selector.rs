//! Structured element selectors.
//!
//! Only the shapes the page needs are supported: a tag name, an `id`, and
//! attribute equality. Parts combine with AND semantics.

/// Element selector equivalent to `tag#id[name="value"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub(super) tag: Option<String>,
    pub(super) id: Option<String>,
    pub(super) attributes: Vec<(String, String)>,
}

impl Selector {
    /// Match elements by tag name (`section`).
    #[must_use]
    pub fn tag(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Match an element by its `id` attribute (`#selectMenu`).
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Additionally require `name="value"`.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Additionally require `data-{key}="value"`.
    #[must_use]
    pub fn with_data(self, key: &str, value: impl Into<String>) -> Self {
        self.with_attribute(format!("data-{key}"), value)
    }

    pub(super) fn matches<'a>(
        &self,
        tag: &str,
        attribute: impl Fn(&str) -> Option<&'a str>,
    ) -> bool {
        if self.tag.as_deref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        if let Some(wanted) = self.id.as_deref() {
            if attribute("id") != Some(wanted) {
                return false;
            }
        }
        self.attributes
            .iter()
            .all(|(name, value)| attribute(name) == Some(value.as_str()))
    }
}
