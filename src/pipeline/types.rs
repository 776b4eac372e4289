use super::PipelineError;
use crate::models::HospitalRecord;

/// Triage bucket derived from the user's message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cardiac,
    Pediatric,
    Maternity,
    General,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cardiac => "cardiac",
            Category::Pediatric => "pediatric",
            Category::Maternity => "maternity",
            Category::General => "general",
        }
    }
}

/// Severity label attached alongside the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    Critical,
    Moderate,
    Urgent,
    Routine,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Critical => "critical",
            Urgency::Moderate => "moderate",
            Urgency::Urgent => "urgent",
            Urgency::Routine => "routine",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of the classifier stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triage {
    pub category: Category,
    pub urgency: Urgency,
}

/// Output of the recommendation stage. `hospital` is `None` when no
/// candidate survived selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation<'a> {
    pub hospital: Option<&'a HospitalRecord>,
    pub reasoning: String,
}

/// Record threaded through the three stages for one request.
///
/// Every derived field is write-once: a stage may fill the fields it owns but
/// never overwrite what an earlier stage produced.
#[derive(Debug, Clone, Default)]
pub struct PipelineState<'a> {
    user_message: String,
    triage: Option<Triage>,
    candidates: Option<Vec<&'a HospitalRecord>>,
    recommendation: Option<Recommendation<'a>>,
}

impl<'a> PipelineState<'a> {
    pub fn new(user_message: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            ..Self::default()
        }
    }

    pub fn user_message(&self) -> &str {
        &self.user_message
    }

    pub fn category(&self) -> Option<Category> {
        self.triage.map(|t| t.category)
    }

    pub fn urgency(&self) -> Option<Urgency> {
        self.triage.map(|t| t.urgency)
    }

    pub fn candidates(&self) -> Option<&[&'a HospitalRecord]> {
        self.candidates.as_deref()
    }

    pub fn recommendation(&self) -> Option<&Recommendation<'a>> {
        self.recommendation.as_ref()
    }

    pub fn set_triage(&mut self, triage: Triage) -> Result<(), PipelineError> {
        if self.triage.is_some() {
            return Err(PipelineError::FieldOverwrite("triage"));
        }
        self.triage = Some(triage);
        Ok(())
    }

    pub fn set_candidates(
        &mut self,
        candidates: Vec<&'a HospitalRecord>,
    ) -> Result<(), PipelineError> {
        if self.candidates.is_some() {
            return Err(PipelineError::FieldOverwrite("candidates"));
        }
        self.candidates = Some(candidates);
        Ok(())
    }

    pub fn set_recommendation(
        &mut self,
        recommendation: Recommendation<'a>,
    ) -> Result<(), PipelineError> {
        if self.recommendation.is_some() {
            return Err(PipelineError::FieldOverwrite("recommendation"));
        }
        self.recommendation = Some(recommendation);
        Ok(())
    }
}
