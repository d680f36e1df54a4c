use crate::{
    constants::prompts::summary_prompt,
    models::domain::{PipelineState, StateUpdate},
    services::completion_service::CompletionService,
};

pub async fn run(state: &PipelineState, completion: &CompletionService) -> StateUpdate {
    let summary = completion.complete(&summary_prompt(&state.topic)).await;

    StateUpdate {
        summary: Some(summary),
        ..StateUpdate::default()
    }
}
