use serde::{Deserialize, Deserializer};

use crate::models::domain::PipelineState;

/// Treats an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvalRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub topic: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub quiz_questions: Vec<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub user_answers: Vec<String>,
}

impl From<StudyRequest> for PipelineState {
    fn from(request: StudyRequest) -> Self {
        PipelineState::new(request.topic)
    }
}

impl From<EvalRequest> for PipelineState {
    fn from(request: EvalRequest) -> Self {
        PipelineState::new(request.topic)
            .with_summary(request.summary)
            .with_quiz_questions(request.quiz_questions)
            .with_user_answers(request.user_answers)
    }
}
