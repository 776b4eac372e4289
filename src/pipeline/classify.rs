use super::types::{Category, Triage, Urgency};

const CARDIAC_KEYWORDS: &[&str] = &["chest", "heart", "cardiac"];
const PEDIATRIC_KEYWORDS: &[&str] = &["child", "kid", "baby"];
// "baby" also appears in the pediatric set, which is checked first, so it
// never selects maternity. Left in place until the intended priority is settled.
const MATERNITY_KEYWORDS: &[&str] = &["pregnancy", "labor", "baby"];

/// Classify a free-text message into a category and urgency by keyword
/// containment. First matching rule wins: cardiac, pediatric, maternity,
/// then general.
pub fn classify_message(text: &str) -> Triage {
    let lower = text.to_lowercase();

    if contains_any(&lower, CARDIAC_KEYWORDS) {
        return Triage {
            category: Category::Cardiac,
            urgency: Urgency::Critical,
        };
    }

    if contains_any(&lower, PEDIATRIC_KEYWORDS) {
        return Triage {
            category: Category::Pediatric,
            urgency: Urgency::Moderate,
        };
    }

    if contains_any(&lower, MATERNITY_KEYWORDS) {
        return Triage {
            category: Category::Maternity,
            urgency: Urgency::Urgent,
        };
    }

    Triage {
        category: Category::General,
        urgency: Urgency::Routine,
    }
}

/// Substring containment, not word matching ("heartburn" is cardiac).
fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}
