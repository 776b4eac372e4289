use super::types::Category;
use crate::catalog::Catalog;
use crate::models::hospital::{BED_ER, BED_MATERNITY, BED_PEDIATRIC};
use crate::models::HospitalRecord;

/// Maximum number of candidates carried to the recommendation stage.
pub const MAX_CANDIDATES: usize = 3;

/// Whether a hospital can take a patient in this category.
pub fn is_eligible(hospital: &HospitalRecord, category: Category) -> bool {
    match category {
        Category::Cardiac => hospital.has_specialty("cardiac") && hospital.beds.get(BED_ER) > 0,
        Category::Pediatric => hospital.beds.get(BED_PEDIATRIC) > 0,
        Category::Maternity => hospital.beds.get(BED_MATERNITY) > 0,
        Category::General => hospital.available_beds > 0,
    }
}

/// Eligible hospitals, most available beds first (stable), at most three.
pub fn select_candidates(catalog: &Catalog, category: Category) -> Vec<&HospitalRecord> {
    let mut eligible: Vec<&HospitalRecord> = catalog
        .hospitals()
        .iter()
        .filter(|h| is_eligible(h, category))
        .collect();

    eligible.sort_by(|a, b| b.available_beds.cmp(&a.available_beds));
    eligible.truncate(MAX_CANDIDATES);
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::{sample_catalog, sample_records};

    fn ids(candidates: &[&HospitalRecord]) -> Vec<u32> {
        candidates.iter().map(|h| h.id).collect()
    }

    #[test]
    fn cardiac_needs_specialty_and_er_beds() {
        let catalog = sample_catalog();
        // 3 has no ER beds; 5 lists "Cardiology", which lacks "cardiac".
        // 1 and 7 tie at 20 beds and keep catalog order.
        assert_eq!(ids(&select_candidates(&catalog, Category::Cardiac)), vec![1, 7, 6]);
    }

    #[test]
    fn pediatric_needs_pediatric_beds() {
        let catalog = sample_catalog();
        assert_eq!(ids(&select_candidates(&catalog, Category::Pediatric)), vec![5, 2, 8]);
    }

    #[test]
    fn maternity_needs_maternity_beds() {
        let catalog = sample_catalog();
        assert_eq!(ids(&select_candidates(&catalog, Category::Maternity)), vec![5, 1, 4]);
    }

    #[test]
    fn general_needs_any_available_bed() {
        let catalog = sample_catalog();
        assert_eq!(ids(&select_candidates(&catalog, Category::General)), vec![3, 5, 1]);
    }

    #[test]
    fn never_more_than_three_and_sorted_descending() {
        let catalog = sample_catalog();
        for category in [
            Category::Cardiac,
            Category::Pediatric,
            Category::Maternity,
            Category::General,
        ] {
            let picked = select_candidates(&catalog, category);
            assert!(picked.len() <= MAX_CANDIDATES);
            assert!(picked
                .windows(2)
                .all(|w| w[0].available_beds >= w[1].available_beds));
            assert!(picked.iter().all(|h| is_eligible(h, category)));
        }
    }

    #[test]
    fn fewer_than_three_eligible_returns_all_of_them() {
        let records: Vec<_> = sample_records()
            .into_iter()
            .filter(|h| h.id == 2 || h.id == 3)
            .collect();
        let catalog = Catalog::new(records).unwrap();
        assert_eq!(ids(&select_candidates(&catalog, Category::Pediatric)), vec![2]);
    }

    #[test]
    fn no_eligible_hospital_yields_empty() {
        let catalog = Catalog::default();
        assert!(select_candidates(&catalog, Category::Cardiac).is_empty());

        let records: Vec<_> = sample_records().into_iter().filter(|h| h.id == 3).collect();
        let catalog = Catalog::new(records).unwrap();
        assert!(select_candidates(&catalog, Category::Maternity).is_empty());
    }
}
