//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category, keyed by the integer the catalog serves on each dish
///
/// Keys outside the mapping are legal on a [`Dish`](super::Dish); they simply
/// have no label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
#[repr(i64)]
pub enum Category {
    Comida = 1,
    Bebidas = 2,
    Postres = 3,
}

impl Category {
    /// All mapped categories in key order
    pub const ALL: [Category; 3] = [Category::Comida, Category::Bebidas, Category::Postres];

    /// Resolve a catalog key
    pub fn from_key(key: i64) -> Option<Self> {
        match key {
            1 => Some(Self::Comida),
            2 => Some(Self::Bebidas),
            3 => Some(Self::Postres),
            _ => None,
        }
    }

    pub const fn key(&self) -> i64 {
        *self as i64
    }

    /// Display label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Comida => "Comida",
            Self::Bebidas => "Bebidas",
            Self::Postres => "Postres",
        }
    }
}

impl From<Category> for i64 {
    fn from(category: Category) -> Self {
        category.key()
    }
}

impl TryFrom<i64> for Category {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_key(value).ok_or_else(|| format!("unknown category key: {}", value))
    }
}

/// Label lookup for a raw key; `None` for unmapped keys
pub fn category_label(key: i64) -> Option<&'static str> {
    Category::from_key(key).map(|c| c.label())
}
