use super::types::{Recommendation, Urgency};
use crate::models::HospitalRecord;

pub const NO_MATCH_REASONING: &str = "No hospitals found matching your criteria.";

/// Pick the first (highest-capacity) candidate and explain the pick.
pub fn recommend<'a>(candidates: &[&'a HospitalRecord], urgency: Urgency) -> Recommendation<'a> {
    match candidates.first() {
        Some(best) => Recommendation {
            hospital: Some(*best),
            reasoning: build_reasoning(best, urgency),
        },
        None => Recommendation {
            hospital: None,
            reasoning: NO_MATCH_REASONING.to_string(),
        },
    }
}

/// Template the recommended hospital's fields into a short explanation.
pub fn build_reasoning(hospital: &HospitalRecord, urgency: Urgency) -> String {
    format!(
        "I recommend {} because:\n\
         - {} beds available\n\
         - Wait time: {} minutes\n\
         - Location: {}, {}\n\
         - Specialties: {}\n\
         - Urgency level: {}",
        hospital.name,
        hospital.available_beds,
        hospital.wait_time,
        hospital.city,
        hospital.state,
        hospital.specialties.join(", "),
        urgency,
    )
}
