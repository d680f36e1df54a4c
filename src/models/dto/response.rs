use serde::Serialize;

use crate::models::domain::PipelineState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyResponse {
    pub topic: String,
    pub summary: String,
    pub quiz_questions: Vec<String>,
    pub quiz_text: String,
    pub feedback: String,
}

impl From<PipelineState> for StudyResponse {
    fn from(state: PipelineState) -> Self {
        StudyResponse {
            topic: state.topic,
            summary: state.summary.map(|c| c.into_text()).unwrap_or_default(),
            quiz_questions: state.quiz_questions.unwrap_or_default(),
            quiz_text: state.quiz_text.map(|c| c.into_text()).unwrap_or_default(),
            feedback: state.feedback.map(|c| c.into_text()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvalResponse {
    pub feedback: String,
}

impl From<PipelineState> for EvalResponse {
    fn from(state: PipelineState) -> Self {
        EvalResponse {
            feedback: state.feedback.map(|c| c.into_text()).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Completion;

    #[test]
    fn test_study_response_flattens_failures_to_empty() {
        let state = PipelineState {
            topic: "Volcanoes".to_string(),
            summary: Some(Completion::Failed("401 Unauthorized".to_string())),
            quiz_text: Some(Completion::Failed("401 Unauthorized".to_string())),
            quiz_questions: Some(vec![String::new()]),
            ..PipelineState::default()
        };

        let response = StudyResponse::from(state);
        assert_eq!(response.topic, "Volcanoes");
        assert_eq!(response.summary, "");
        assert_eq!(response.quiz_text, "");
        assert_eq!(response.quiz_questions, vec![String::new()]);
        assert_eq!(response.feedback, "");
    }

    #[test]
    fn test_study_response_serializes_all_keys() {
        let response = StudyResponse::from(PipelineState::new("Volcanoes"));
        let value = serde_json::to_value(&response).unwrap();

        for key in ["topic", "summary", "quiz_questions", "quiz_text", "feedback"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["feedback"], "");
        assert_eq!(value["quiz_questions"], serde_json::json!([]));
    }
}
