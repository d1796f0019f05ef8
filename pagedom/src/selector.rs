//! Minimal CSS selector matching.
//!
//! Supports compound selectors built from a tag name, `#id` and any number
//! of `.class` parts, grouped with commas: `div.card, .dot, #hero`.
//! Combinators and attribute selectors are not supported.

use crate::element::Element;

/// One compound selector: `tag#id.class1.class2`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Compound {
    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.is_empty() || input.contains(char::is_whitespace) {
            return None;
        }

        let mut compound = Compound::default();
        // Split before each '.' or '#', keeping the marker with its name.
        let mut parts = Vec::new();
        let mut start = 0;
        for (i, c) in input.char_indices() {
            if (c == '.' || c == '#') && i > start {
                parts.push(&input[start..i]);
                start = i;
            }
        }
        parts.push(&input[start..]);

        for part in parts {
            if let Some(class) = part.strip_prefix('.') {
                if !is_ident(class) {
                    return None;
                }
                compound.classes.push(class.to_string());
            } else if let Some(id) = part.strip_prefix('#') {
                if !is_ident(id) || compound.id.is_some() {
                    return None;
                }
                compound.id = Some(id.to_string());
            } else {
                if !is_ident(part) || compound.tag.is_some() {
                    return None;
                }
                compound.tag = Some(part.to_ascii_lowercase());
            }
        }

        Some(compound)
    }

    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if &element.id != id {
                return false;
            }
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    groups: Vec<Compound>,
}

impl Selector {
    /// Parse a selector list. Returns `None` for syntax this engine doesn't handle.
    pub fn parse(input: &str) -> Option<Self> {
        let groups = input
            .split(',')
            .map(Compound::parse)
            .collect::<Option<Vec<_>>>()?;
        if groups.is_empty() {
            return None;
        }
        Some(Self { groups })
    }

    pub fn matches(&self, element: &Element) -> bool {
        self.groups.iter().any(|group| group.matches(element))
    }
}
