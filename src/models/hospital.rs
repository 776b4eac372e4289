use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::{self, Coordinates};

/// Bed category keys used by the recommendation pipeline.
pub const BED_ER: &str = "er";
pub const BED_PEDIATRIC: &str = "pediatric";
pub const BED_MATERNITY: &str = "maternity";

/// One facility from the static hospital catalog.
///
/// Field names on the wire follow the data file (`availableBeds`, `waitTime`,
/// `emergency_services`) so the frontend can consume records unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalRecord {
    pub id: u32,
    pub name: String,
    /// Street line.
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(deserialize_with = "string_or_number")]
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hospital_type: Option<String>,
    pub beds: BedCounts,
    #[serde(rename = "availableBeds")]
    pub available_beds: u32,
    /// Minutes.
    #[serde(rename = "waitTime")]
    pub wait_time: u32,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub emergency_services: bool,
}

impl HospitalRecord {
    /// Stored coordinates, or the state centroid when the record has none.
    pub fn coordinates(&self) -> Coordinates {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Coordinates { lat, lng },
            _ => geo::fallback_for_state(&self.state),
        }
    }

    pub fn set_coordinates(&mut self, coords: Coordinates) {
        self.lat = Some(coords.lat);
        self.lng = Some(coords.lng);
    }

    pub fn has_coordinates(&self) -> bool {
        self.lat.is_some() && self.lng.is_some()
    }

    /// Case-insensitive substring match against the specialty tags.
    pub fn has_specialty(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.specialties
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
    }

    /// Single-line postal address used for geocoding lookups.
    pub fn postal_address(&self) -> String {
        format!(
            "{}, {}, {} {}, USA",
            self.address, self.city, self.state, self.zip
        )
    }
}

/// Bed capacity per category (`er`, `icu`, `pediatric`, `maternity`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BedCounts(BTreeMap<String, u32>);

impl BedCounts {
    /// Capacity for a category. Unknown categories read as zero.
    pub fn get(&self, category: &str) -> u32 {
        self.0.get(category).copied().unwrap_or(0)
    }
}

impl<K: Into<String>> FromIterator<(K, u32)> for BedCounts {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Zip {
        Text(String),
        Number(u64),
    }

    Ok(match Zip::deserialize(deserializer)? {
        Zip::Text(s) => s,
        Zip::Number(n) => format!("{n:05}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAW: &str = r#"{
        "id": 7,
        "name": "Mercy General",
        "address": "4001 J St",
        "city": "Sacramento",
        "state": "CA",
        "zip": 95819,
        "phone": "(916) 453-4545",
        "beds": {"er": 4, "icu": 2, "pediatric": 0, "maternity": 3},
        "availableBeds": 9,
        "waitTime": 35,
        "specialties": ["Cardiac Surgery", "Stroke"],
        "emergency_services": true
    }"#;

    #[test]
    fn parses_data_file_shape() {
        let h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        assert_eq!(h.id, 7);
        assert_eq!(h.zip, "95819");
        assert_eq!(h.available_beds, 9);
        assert_eq!(h.wait_time, 35);
        assert_eq!(h.beds.get(BED_ER), 4);
        assert_eq!(h.beds.get(BED_MATERNITY), 3);
        assert!(h.emergency_services);
        assert!(h.lat.is_none());
        assert!(h.hospital_type.is_none());
    }

    #[test]
    fn serializes_camel_case_counts_and_skips_missing_optionals() {
        let h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["availableBeds"], 9);
        assert_eq!(json["waitTime"], 35);
        assert_eq!(json["beds"]["icu"], 2);
        assert!(json.get("lat").is_none());
        assert!(json.get("hospital_type").is_none());
        assert_eq!(json["phone"], "(916) 453-4545");
    }

    #[test]
    fn rejects_negative_bed_counts() {
        let raw = RAW.replace(r#""er": 4"#, r#""er": -1"#);
        assert!(serde_json::from_str::<HospitalRecord>(&raw).is_err());
    }

    #[test]
    fn rejects_negative_available_beds() {
        let raw = RAW.replace(r#""availableBeds": 9"#, r#""availableBeds": -2"#);
        assert!(serde_json::from_str::<HospitalRecord>(&raw).is_err());
    }

    #[test]
    fn unknown_bed_category_reads_zero() {
        let h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        assert_eq!(h.beds.get("burn"), 0);
    }

    #[test]
    fn specialty_match_is_case_insensitive_substring() {
        let h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        assert!(h.has_specialty("cardiac"));
        assert!(h.has_specialty("STROKE"));
        assert!(!h.has_specialty("oncology"));
    }

    #[test]
    fn coordinates_fall_back_to_state_center() {
        let mut h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        let c = h.coordinates();
        assert_eq!(c, geo::fallback_for_state("CA"));

        h.set_coordinates(Coordinates { lat: 38.57, lng: -121.46 });
        assert!(h.has_coordinates());
        assert_eq!(h.coordinates().lat, 38.57);
    }

    #[test]
    fn postal_address_format() {
        let h: HospitalRecord = serde_json::from_str(RAW).unwrap();
        assert_eq!(h.postal_address(), "4001 J St, Sacramento, CA 95819, USA");
    }
}
