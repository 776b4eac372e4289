//! In-memory hospital catalog.
//!
//! Loaded once at startup from the static JSON data file, optionally enriched
//! with coordinates, then shared read-only (`Arc<Catalog>`) with every request
//! handler. Nothing mutates it after serving starts.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::geo::enrich::{enrich_records, EnrichmentReport, Geocoder};
use crate::models::HospitalRecord;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Cannot read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write catalog {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate hospital id: {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    hospitals: Vec<HospitalRecord>,
}

impl Catalog {
    /// Build a catalog, enforcing unique ids and filling missing coordinates
    /// with the state centroid. Order is preserved.
    pub fn new(mut hospitals: Vec<HospitalRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(hospitals.len());
        for h in &hospitals {
            if !seen.insert(h.id) {
                return Err(CatalogError::DuplicateId(h.id));
            }
        }

        let mut filled = 0usize;
        for h in hospitals.iter_mut().filter(|h| !h.has_coordinates()) {
            let coords = h.coordinates();
            h.set_coordinates(coords);
            filled += 1;
        }
        if filled > 0 {
            tracing::debug!(filled, "Hospitals without coordinates placed at state center");
        }

        Ok(Self { hospitals })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<HospitalRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), hospitals = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Write the catalog as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), CatalogError> {
        let json = serde_json::to_string_pretty(&self.hospitals)?;
        std::fs::write(path, json).map_err(|source| CatalogError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn hospitals(&self) -> &[HospitalRecord] {
        &self.hospitals
    }

    pub fn len(&self) -> usize {
        self.hospitals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hospitals.is_empty()
    }

    /// Geocode every record in place. Ids and order are untouched, so the
    /// catalog invariants still hold afterwards.
    pub fn enrich(&mut self, geocoder: &dyn Geocoder, delay: Duration) -> EnrichmentReport {
        enrich_records(&mut self.hospitals, geocoder, delay)
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use crate::geo::Coordinates;
    use crate::models::{BedCounts, HospitalRecord};

    #[allow(clippy::too_many_arguments)]
    fn hospital(
        id: u32,
        name: &str,
        city: &str,
        state: &str,
        coords: Option<(f64, f64)>,
        specialties: &[&str],
        beds: [(&str, u32); 4],
        available_beds: u32,
        wait_time: u32,
        emergency_services: bool,
    ) -> HospitalRecord {
        let mut h = HospitalRecord {
            id,
            name: name.to_string(),
            address: format!("{id}00 Main St"),
            city: city.to_string(),
            state: state.to_string(),
            zip: "10001".to_string(),
            lat: None,
            lng: None,
            phone: None,
            hospital_type: None,
            beds: beds.into_iter().collect::<BedCounts>(),
            available_beds,
            wait_time,
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            emergency_services,
        };
        if let Some((lat, lng)) = coords {
            h.set_coordinates(Coordinates { lat, lng });
        }
        h
    }

    /// Eight hospitals covering every eligibility rule:
    /// - cardiac: ids 1, 7 (tie at 20 beds), 6 (0 beds); 3 has no ER beds,
    ///   5 lists "Cardiology" which does not contain "cardiac"
    /// - id 6 has no coordinates and no available beds
    pub(crate) fn sample_records() -> Vec<HospitalRecord> {
        vec![
            hospital(
                1,
                "St. Mary Heart Institute",
                "New York",
                "NY",
                Some((40.75, -73.99)),
                &["Cardiac Care", "Trauma"],
                [("er", 5), ("icu", 3), ("pediatric", 0), ("maternity", 2)],
                20,
                30,
                true,
            ),
            hospital(
                2,
                "Riverside Children's Hospital",
                "New York",
                "NY",
                Some((40.80, -73.95)),
                &["Pediatrics"],
                [("er", 3), ("icu", 1), ("pediatric", 8), ("maternity", 0)],
                15,
                20,
                true,
            ),
            hospital(
                3,
                "Valley Cardiac Center",
                "Los Angeles",
                "CA",
                Some((34.05, -118.24)),
                &["cardiac surgery"],
                [("er", 0), ("icu", 4), ("pediatric", 0), ("maternity", 0)],
                30,
                45,
                false,
            ),
            hospital(
                4,
                "Lakeside Women's Hospital",
                "Chicago",
                "IL",
                Some((41.88, -87.63)),
                &["Obstetrics", "Gynecology"],
                [("er", 2), ("icu", 0), ("pediatric", 0), ("maternity", 6)],
                12,
                15,
                true,
            ),
            hospital(
                5,
                "Metro General",
                "Houston",
                "TX",
                Some((29.76, -95.37)),
                &["Cardiology", "Neurology"],
                [("er", 6), ("icu", 2), ("pediatric", 2), ("maternity", 1)],
                25,
                60,
                true,
            ),
            hospital(
                6,
                "Desert Regional Cardiac",
                "Phoenix",
                "AZ",
                None,
                &["Cardiac Care"],
                [("er", 1), ("icu", 0), ("pediatric", 1), ("maternity", 0)],
                0,
                10,
                true,
            ),
            hospital(
                7,
                "Harbor Heart & Vascular",
                "New York",
                "NY",
                Some((40.70, -74.01)),
                &["CARDIAC Rehab"],
                [("er", 2), ("icu", 1), ("pediatric", 0), ("maternity", 0)],
                20,
                25,
                false,
            ),
            hospital(
                8,
                "Summit Community Hospital",
                "Denver",
                "CO",
                Some((39.74, -104.99)),
                &[],
                [("er", 1), ("icu", 0), ("pediatric", 4), ("maternity", 2)],
                8,
                40,
                false,
            ),
        ]
    }

    pub(crate) fn sample_catalog() -> super::Catalog {
        super::Catalog::new(sample_records()).unwrap()
    }
}
