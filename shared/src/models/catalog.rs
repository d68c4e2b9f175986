//! Catalog Model
//!
//! The dish list fetched from the catalog provider, kept in server order.

use super::dish::Dish;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    /// Look up a dish by id (first occurrence wins)
    pub fn get(&self, id: i64) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    /// Dishes with the given category key, in catalog order
    pub fn by_category(&self, key: i64) -> impl Iterator<Item = &Dish> {
        self.dishes.iter().filter(move |d| d.category == key)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl From<Vec<Dish>> for Catalog {
    fn from(dishes: Vec<Dish>) -> Self {
        Self::new(dishes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Dish::new(1, "Taco", 10.0, 1),
            Dish::new(2, "Agua", 2.5, 2),
            Dish::new(3, "Flan", 4.0, 3),
            Dish::new(4, "Torta", 8.0, 1),
        ])
    }

    #[test]
    fn test_get() {
        let catalog = sample();
        assert_eq!(catalog.get(3).map(|d| d.name.as_str()), Some("Flan"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_by_category_keeps_order() {
        let catalog = sample();
        let ids: Vec<i64> = catalog.by_category(1).map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(catalog.by_category(5).count(), 0);
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let catalog = Catalog::new(vec![Dish::new(1, "Taco", 10.0, 1), Dish::new(1, "Otro", 1.0, 2)]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().name, "Taco");
    }

    #[test]
    fn test_deserialize_array() {
        let json = r#"[{"id":1,"name":"Taco","price":10,"category":1}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
    }
}
