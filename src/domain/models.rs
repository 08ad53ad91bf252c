use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    #[default]
    Text,
    Code,
    /// Not rendered; stands in for dialogs and inputs the page declares.
    Marker,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: Option<ElementId>,
    #[serde(default)]
    pub parent: Option<ElementId>,
    #[serde(default)]
    pub kind: ElementKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Element {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Collapsed panels show only their first line until expanded.
    pub fn is_collapsed(&self) -> bool {
        self.has_class("collapse") && !self.has_class("in")
    }

    pub fn line_count(&self) -> u32 {
        match self.kind {
            ElementKind::Marker => 0,
            _ if self.is_collapsed() => 1,
            _ => self.text.lines().count().max(1) as u32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "element")]
    pub elements: Vec<Element>,
}

impl PageDocument {
    pub fn position(&self, id: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.id.as_ref().is_some_and(|eid| eid.as_str() == id))
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.position(id).map(|idx| &self.elements[idx])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.position(id).map(move |idx| &mut self.elements[idx])
    }

    pub fn ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().filter_map(|e| e.id.as_ref())
    }

    /// Walks the parent chain of the element at `idx`. Cycles in a
    /// hand-written page file terminate after visiting every element once.
    pub fn is_descendant_of(&self, idx: usize, ancestor: &str) -> bool {
        let mut current = self.elements.get(idx).and_then(|e| e.parent.clone());
        let mut steps = 0;
        while let Some(parent) = current {
            if parent.as_str() == ancestor {
                return true;
            }
            steps += 1;
            if steps > self.elements.len() {
                return false;
            }
            current = self.get(parent.as_str()).and_then(|e| e.parent.clone());
        }
        false
    }
}
