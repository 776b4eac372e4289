//! Startup enrichment: attach geocoded coordinates to catalog records.
//!
//! Runs once, sequentially, before the server starts. Lookups are spaced by a
//! fixed delay to respect the geocoder's rate limit. A miss or a per-record
//! error falls back to the state centroid; enrichment itself never fails.

use std::time::Duration;

use thiserror::Error;

use super::{fallback_for_state, Coordinates};
use crate::models::HospitalRecord;

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("Geocoder connection failed: {0}")]
    Connection(String),

    #[error("Geocoder request timed out after {0}s")]
    Timeout(u64),

    #[error("Geocoder returned status {status}")]
    Status { status: u16 },

    #[error("Geocoder response parsing error: {0}")]
    ResponseParsing(String),

    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

/// Address-to-coordinate lookup (allows mocking).
pub trait Geocoder {
    /// `Ok(None)` means the service answered but found no match.
    fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// How each record's coordinates were resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Geocoded,
    /// No match; state centroid used.
    Fallback,
    /// Lookup error; state centroid used.
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentReport {
    pub geocoded: usize,
    pub fallback: usize,
    pub failed: usize,
}

impl EnrichmentReport {
    pub fn total(&self) -> usize {
        self.geocoded + self.fallback + self.failed
    }

    fn record(&mut self, resolution: Resolution) {
        match resolution {
            Resolution::Geocoded => self.geocoded += 1,
            Resolution::Fallback => self.fallback += 1,
            Resolution::Failed => self.failed += 1,
        }
    }
}

/// Geocode every record in place, pausing `delay` between lookups.
pub fn enrich_records(
    records: &mut [HospitalRecord],
    geocoder: &dyn Geocoder,
    delay: Duration,
) -> EnrichmentReport {
    let total = records.len();
    let mut report = EnrichmentReport::default();

    for (idx, record) in records.iter_mut().enumerate() {
        if idx > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }

        let resolution = resolve_one(record, geocoder);
        match resolution {
            Resolution::Geocoded => {
                tracing::info!(
                    "{}/{}: {} - {}, {}",
                    idx + 1,
                    total,
                    record.name,
                    record.city,
                    record.state
                );
            }
            Resolution::Fallback => {
                tracing::warn!("{}/{}: {} - using state center", idx + 1, total, record.name);
            }
            Resolution::Failed => {
                tracing::warn!(
                    "{}/{}: {} - lookup error, using state center",
                    idx + 1,
                    total,
                    record.name
                );
            }
        }
        report.record(resolution);
    }

    report
}

fn resolve_one(record: &mut HospitalRecord, geocoder: &dyn Geocoder) -> Resolution {
    match geocoder.geocode(&record.postal_address()) {
        Ok(Some(coords)) if coords.is_finite() => {
            record.set_coordinates(coords);
            Resolution::Geocoded
        }
        Ok(_) => {
            record.set_coordinates(fallback_for_state(&record.state));
            Resolution::Fallback
        }
        Err(e) => {
            tracing::debug!(id = record.id, error = %e, "Geocode lookup failed");
            record.set_coordinates(fallback_for_state(&record.state));
            Resolution::Failed
        }
    }
}
