use crate::{
    constants::prompts::grading_prompt,
    models::domain::{PipelineState, StateUpdate},
    services::completion_service::CompletionService,
};

/// Grades the answers in one completion call. Questions and answers are
/// paired by position; the longer list is truncated, never padded.
pub async fn run(state: &PipelineState, completion: &CompletionService) -> StateUpdate {
    let prompt = build_prompt(state);
    let feedback = completion.complete(&prompt).await;

    StateUpdate {
        feedback: Some(feedback),
        ..StateUpdate::default()
    }
}

pub fn build_prompt(state: &PipelineState) -> String {
    let pairs = state.questions().iter().zip(state.user_answers.iter());
    grading_prompt(state.summary_text(), pairs)
}
