//! Shared types for the HTTP layer.

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::Catalog;

/// Shared context for all routes. The catalog is read-only once serving starts.
#[derive(Clone)]
pub struct ApiContext {
    pub catalog: Arc<Catalog>,
}

impl ApiContext {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

/// `{hospitals: [...], count}` envelope used by the list-style endpoints.
#[derive(Debug, Serialize)]
pub struct HospitalList<T: Serialize> {
    pub hospitals: Vec<T>,
    pub count: usize,
}

impl<T: Serialize> HospitalList<T> {
    pub fn new(hospitals: Vec<T>) -> Self {
        let count = hospitals.len();
        Self { hospitals, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_matches_length() {
        let list = HospitalList::new(vec![1, 2, 3]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["count"], 3);
        assert_eq!(json["hospitals"].as_array().unwrap().len(), 3);
    }
}
