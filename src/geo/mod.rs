//! Coordinates, the planar distance used by nearby search, and the
//! state-centroid fallback table.
//!
//! Distance is a flat-earth approximation: Euclidean distance in degrees
//! scaled by 69 (miles per degree of latitude). It ignores curvature and
//! longitude compression, which is tolerable for a small, approximate dataset
//! in the contiguous US. Kept as-is so radius semantics stay stable for
//! existing clients.

pub mod enrich;
pub mod nominatim;

use serde::{Deserialize, Serialize};

/// Rough miles per degree.
pub const MILES_PER_DEGREE: f64 = 69.0;

/// Geographic center of the contiguous United States.
pub const US_CENTER: Coordinates = Coordinates {
    lat: 39.8283,
    lng: -98.5795,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Planar approximation distance in rough miles.
pub fn planar_distance(a: Coordinates, b: Coordinates) -> f64 {
    let dlat = b.lat - a.lat;
    let dlng = b.lng - a.lng;
    (dlat * dlat + dlng * dlng).sqrt() * MILES_PER_DEGREE
}

/// Round to one decimal place, correctly rounded with ties to even
/// (2.25 → 2.2, while 0.15 is stored just below the tie → 0.1).
pub fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Centroid for a two-letter state or territory code.
pub fn state_center(code: &str) -> Option<Coordinates> {
    let code = code.trim();
    STATE_CENTERS
        .iter()
        .find(|(c, _, _)| c.eq_ignore_ascii_case(code))
        .map(|&(_, lat, lng)| Coordinates { lat, lng })
}

/// State centroid, or the US center for unknown codes.
pub fn fallback_for_state(code: &str) -> Coordinates {
    state_center(code).unwrap_or(US_CENTER)
}

const STATE_CENTERS: &[(&str, f64, f64)] = &[
    ("AK", 64.2008, -149.4937),
    ("AL", 32.3182, -86.9023),
    ("AR", 35.2010, -91.8318),
    ("AS", -14.2710, -170.1322),
    ("AZ", 34.0489, -111.0937),
    ("CA", 36.7783, -119.4179),
    ("CO", 39.5501, -105.7821),
    ("CT", 41.6032, -73.0877),
    ("DC", 38.9072, -77.0369),
    ("DE", 38.9108, -75.5277),
    ("FL", 27.9944, -81.7603),
    ("GA", 32.1656, -82.9001),
    ("GU", 13.4443, 144.7937),
    ("HI", 19.8968, -155.5828),
    ("IA", 41.8780, -93.0977),
    ("ID", 44.0682, -114.7420),
    ("IL", 40.6331, -89.3985),
    ("IN", 40.2672, -86.1349),
    ("KS", 39.0119, -98.4842),
    ("KY", 37.8393, -84.2700),
    ("LA", 30.9843, -91.9623),
    ("MA", 42.4072, -71.3824),
    ("MD", 39.0458, -76.6413),
    ("ME", 45.2538, -69.4455),
    ("MI", 44.3148, -85.6024),
    ("MN", 46.7296, -94.6859),
    ("MO", 37.9643, -91.8318),
    ("MP", 15.0979, 145.6739),
    ("MS", 32.3547, -89.3985),
    ("MT", 46.8797, -110.3626),
    ("NC", 35.7596, -79.0193),
    ("ND", 47.5515, -101.0020),
    ("NE", 41.4925, -99.9018),
    ("NH", 43.1939, -71.5724),
    ("NJ", 40.0583, -74.4057),
    ("NM", 34.5199, -105.8701),
    ("NV", 38.8026, -116.4194),
    ("NY", 42.1657, -74.9481),
    ("OH", 40.4173, -82.9071),
    ("OK", 35.4676, -97.5164),
    ("OR", 43.8041, -120.5542),
    ("PA", 41.2033, -77.1945),
    ("PR", 18.2208, -66.5901),
    ("RI", 41.5801, -71.4774),
    ("SC", 33.8361, -81.1637),
    ("SD", 43.9695, -99.9018),
    ("TN", 35.5175, -86.5804),
    ("TX", 31.9686, -99.9018),
    ("UT", 39.3210, -111.0937),
    ("VA", 37.4316, -78.6569),
    ("VI", 18.3358, -64.8963),
    ("WA", 47.7511, -120.7401),
    ("WI", 43.7844, -88.7879),
    ("WV", 38.5976, -80.4549),
    ("WY", 43.0760, -107.2903),
];
