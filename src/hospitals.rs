//! Read-only queries over the hospital catalog.
//!
//! Everything here is a linear scan over a small in-memory list; no indexes.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::geo::{self, Coordinates};
use crate::models::HospitalRecord;

// ═══════════════════════════════════════════════════════════
// Lookup
// ═══════════════════════════════════════════════════════════

pub fn find_by_id(catalog: &Catalog, id: u32) -> Option<&HospitalRecord> {
    catalog.hospitals().iter().find(|h| h.id == id)
}

// ═══════════════════════════════════════════════════════════
// Nearby search
// ═══════════════════════════════════════════════════════════

/// A hospital with its distance from the query point (rough miles, one decimal).
#[derive(Debug, Clone, Serialize)]
pub struct NearbyHospital<'a> {
    #[serde(flatten)]
    pub hospital: &'a HospitalRecord,
    pub distance: f64,
}

/// Hospitals within `radius` of `origin`, closest first.
///
/// Inclusion uses the exact distance; ordering uses the rounded distance,
/// ties keeping catalog order.
pub fn nearby(catalog: &Catalog, origin: Coordinates, radius: f64) -> Vec<NearbyHospital<'_>> {
    let mut hits: Vec<NearbyHospital<'_>> = catalog
        .hospitals()
        .iter()
        .filter_map(|h| {
            let distance = geo::planar_distance(origin, h.coordinates());
            (distance <= radius).then(|| NearbyHospital {
                hospital: h,
                distance: geo::round_tenth(distance),
            })
        })
        .collect();

    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    hits
}

// ═══════════════════════════════════════════════════════════
// Filter
// ═══════════════════════════════════════════════════════════

/// Optional filter criteria. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Bed category that must have capacity. `"all"` and empty are no-ops;
    /// unknown categories match nothing.
    pub bed_type: Option<String>,
    /// Only filters when `true`.
    pub available: Option<bool>,
    /// Only filters when `true`.
    pub emergency: Option<bool>,
}

impl FilterCriteria {
    pub fn matches(&self, h: &HospitalRecord) -> bool {
        if let Some(bed_type) = self.bed_type.as_deref() {
            if !bed_type.is_empty() && bed_type != "all" && h.beds.get(bed_type) == 0 {
                return false;
            }
        }
        if self.available == Some(true) && h.available_beds == 0 {
            return false;
        }
        if self.emergency == Some(true) && !h.emergency_services {
            return false;
        }
        true
    }
}

pub fn filter<'a>(catalog: &'a Catalog, criteria: &FilterCriteria) -> Vec<&'a HospitalRecord> {
    catalog
        .hospitals()
        .iter()
        .filter(|h| criteria.matches(h))
        .collect()
}

// ═══════════════════════════════════════════════════════════
// Statistics
// ═══════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_hospitals: usize,
    pub total_available_beds: u64,
    /// Minutes, one decimal. 0.0 for an empty catalog.
    pub average_wait_time: f64,
    /// Hospitals flagged for emergency services.
    pub emergency_services: usize,
}

pub fn stats(catalog: &Catalog) -> CatalogStats {
    let hospitals = catalog.hospitals();
    let total_available_beds = hospitals.iter().map(|h| u64::from(h.available_beds)).sum();
    let total_wait: u64 = hospitals.iter().map(|h| u64::from(h.wait_time)).sum();
    let average_wait_time = if hospitals.is_empty() {
        0.0
    } else {
        geo::round_tenth(total_wait as f64 / hospitals.len() as f64)
    };

    CatalogStats {
        total_hospitals: hospitals.len(),
        total_available_beds,
        average_wait_time,
        emergency_services: hospitals.iter().filter(|h| h.emergency_services).count(),
    }
}
