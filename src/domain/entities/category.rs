//! Service category entity.

use serde::{Deserialize, Serialize};

/// Opaque category identifier, e.g. `mason` or `civil_eng`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryId(String);

impl CategoryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CategoryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Broad grouping shown as section headers on the categories screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryKind {
    Home,
    Industrial,
    Professional,
}

impl CategoryKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home Services",
            Self::Industrial => "Industrial & Factory",
            Self::Professional => "Professional",
        }
    }
}

/// A bookable service category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    kind: CategoryKind,
}

impl Category {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: CategoryId::new(id),
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> CategoryKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accessors() {
        let category = Category::new("mason", "Mason", CategoryKind::Home);
        assert_eq!(category.id().as_str(), "mason");
        assert_eq!(category.name(), "Mason");
        assert_eq!(category.kind(), CategoryKind::Home);
    }

    #[test]
    fn test_kind_from_seed_shape() {
        let kind: CategoryKind = serde_json::from_str(r#""PROFESSIONAL""#).unwrap();
        assert_eq!(kind, CategoryKind::Professional);
    }
}
