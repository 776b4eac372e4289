//! Runs classify → select → recommend for one message.
//!
//! A fixed linear chain: no branching, no retries, no shared state between
//! requests. Each stage reads what the previous stage wrote and fills only
//! its own fields.

use super::candidates::select_candidates;
use super::classify::classify_message;
use super::recommend::recommend;
use super::types::{PipelineState, Recommendation, Urgency};
use super::PipelineError;
use crate::catalog::Catalog;

/// Final answer of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome<'a> {
    pub recommendation: Recommendation<'a>,
    pub urgency: Urgency,
}

pub fn run_pipeline<'a>(
    catalog: &'a Catalog,
    user_message: &str,
) -> Result<PipelineOutcome<'a>, PipelineError> {
    let mut state = PipelineState::new(user_message);

    triage_stage(&mut state)?;
    finder_stage(&mut state, catalog)?;
    recommendation_stage(&mut state)?;

    let urgency = state.urgency().ok_or(PipelineError::MissingField("urgency"))?;
    let recommendation = state
        .recommendation()
        .cloned()
        .ok_or(PipelineError::MissingField("recommendation"))?;

    tracing::debug!(
        category = state.category().map_or("none", |c| c.as_str()),
        %urgency,
        candidates = state.candidates().map_or(0, |c| c.len()),
        hospital_id = ?recommendation.hospital.map(|h| h.id),
        "Pipeline finished"
    );

    Ok(PipelineOutcome {
        recommendation,
        urgency,
    })
}

fn triage_stage(state: &mut PipelineState<'_>) -> Result<(), PipelineError> {
    let triage = classify_message(state.user_message());
    state.set_triage(triage)
}

fn finder_stage<'a>(
    state: &mut PipelineState<'a>,
    catalog: &'a Catalog,
) -> Result<(), PipelineError> {
    let category = state.category().ok_or(PipelineError::MissingField("category"))?;
    state.set_candidates(select_candidates(catalog, category))
}

fn recommendation_stage(state: &mut PipelineState<'_>) -> Result<(), PipelineError> {
    let urgency = state.urgency().ok_or(PipelineError::MissingField("urgency"))?;
    let recommendation = {
        let candidates = state
            .candidates()
            .ok_or(PipelineError::MissingField("candidates"))?;
        recommend(candidates, urgency)
    };
    state.set_recommendation(recommendation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::test_fixtures::sample_catalog;
    use crate::pipeline::recommend::NO_MATCH_REASONING;
    use crate::pipeline::types::Category;

    #[test]
    fn chest_pain_recommends_top_cardiac_hospital() {
        let catalog = sample_catalog();
        let outcome = run_pipeline(&catalog, "I have chest pain").unwrap();

        assert_eq!(outcome.urgency, Urgency::Critical);
        assert_eq!(outcome.recommendation.hospital.unwrap().id, 1);
        assert!(outcome
            .recommendation
            .reasoning
            .starts_with("I recommend St. Mary Heart Institute because:"));
        assert!(outcome.recommendation.reasoning.ends_with("Urgency level: critical"));
    }

    #[test]
    fn routine_checkup_uses_general_capacity() {
        let catalog = sample_catalog();
        let outcome = run_pipeline(&catalog, "routine checkup").unwrap();
        assert_eq!(outcome.urgency, Urgency::Routine);
        assert_eq!(outcome.recommendation.hospital.unwrap().id, 3);
    }

    #[test]
    fn empty_catalog_yields_no_match() {
        let catalog = Catalog::default();
        let outcome = run_pipeline(&catalog, "my baby has a fever").unwrap();
        assert_eq!(outcome.urgency, Urgency::Moderate);
        assert!(outcome.recommendation.hospital.is_none());
        assert_eq!(outcome.recommendation.reasoning, NO_MATCH_REASONING);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let catalog = sample_catalog();
        let first = run_pipeline(&catalog, "contractions, I think it's labor").unwrap();
        let second = run_pipeline(&catalog, "contractions, I think it's labor").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.urgency, Urgency::Urgent);
        assert_eq!(first.recommendation.hospital.unwrap().id, 5);
    }

    #[test]
    fn stages_keep_earlier_fields() {
        let catalog = sample_catalog();
        let mut state = PipelineState::new("chest tightness");

        triage_stage(&mut state).unwrap();
        finder_stage(&mut state, &catalog).unwrap();
        recommendation_stage(&mut state).unwrap();

        assert_eq!(state.user_message(), "chest tightness");
        assert_eq!(state.category(), Some(Category::Cardiac));
        assert_eq!(state.urgency(), Some(Urgency::Critical));
        assert_eq!(state.candidates().unwrap().len(), 3);
        assert_eq!(state.recommendation().unwrap().hospital.unwrap().id, 1);
    }

    #[test]
    fn stage_out_of_order_is_an_error() {
        let catalog = sample_catalog();
        let mut state = PipelineState::new("chest");
        let err = finder_stage(&mut state, &catalog).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField("category")));

        let err = recommendation_stage(&mut state).unwrap_err();
        assert!(matches!(err, PipelineError::MissingField("urgency")));
    }

    #[test]
    fn rerunning_a_stage_is_an_error() {
        let mut state = PipelineState::new("chest");
        triage_stage(&mut state).unwrap();
        assert!(matches!(
            triage_stage(&mut state),
            Err(PipelineError::FieldOverwrite("triage"))
        ));
    }
}
