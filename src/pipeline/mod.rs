//! Symptom-to-hospital recommendation pipeline.
//!
//! Three stages run in sequence for every chat request:
//! classify (keywords → category + urgency), candidates (eligibility filter +
//! capacity ranking, top 3), recommend (pick the first, template a reason).

pub mod candidates;
pub mod classify;
pub mod orchestrator;
pub mod recommend;
pub mod types;

use thiserror::Error;

pub use orchestrator::{run_pipeline, PipelineOutcome};
pub use types::{Category, PipelineState, Recommendation, Triage, Urgency};

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Stage input missing: {0}")]
    MissingField(&'static str),

    #[error("Stage tried to overwrite {0}")]
    FieldOverwrite(&'static str),
}
