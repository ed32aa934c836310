use crate::{FlowStep, QuestionKey};

/// A flow action that is not available in the current state. The flow is
/// left untouched when one is returned.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("not available during {0}")]
    WrongStep(FlowStep),

    #[error("{value:?} is not an option for {key}")]
    InvalidOption { key: QuestionKey, value: String },

    #[error("there is no suggestion to act on")]
    NoContent,
}
