use std::sync::Arc;

use crate::{
    models::{
        domain::PipelineState,
        dto::{EvalRequest, EvalResponse, StudyRequest, StudyResponse},
    },
    services::{
        completion_service::CompletionService,
        orchestrator_steps::study_steps::{full_chain, grading_chain, study_chain},
        step_executor::{PipelineStep, StepHandler},
    },
};

/// Runs pipeline steps strictly in series, merging each step's update into
/// the state before the next step starts.
pub struct PipelineService {
    completion: Arc<CompletionService>,
}

impl PipelineService {
    pub fn new(completion: Arc<CompletionService>) -> Self {
        Self { completion }
    }

    pub async fn run(&self, mut state: PipelineState, steps: &[PipelineStep]) -> PipelineState {
        for step in steps {
            log::info!("Executing {} step: {}", step, step.description());
            let update = StepHandler::execute(*step, &state, &self.completion).await;
            log::debug!("Step {} contributed {:?}", step, update.keys());
            state.merge(update);
        }
        state
    }

    /// Summarize, quiz and grade in one pass.
    pub async fn run_full(&self, topic: &str, user_answers: Vec<String>) -> PipelineState {
        let state = PipelineState::new(topic).with_user_answers(user_answers);
        self.run(state, &full_chain()).await
    }

    pub async fn study(&self, request: StudyRequest) -> StudyResponse {
        let state = self.run(request.into(), &study_chain()).await;
        log_failures(&state);
        state.into()
    }

    pub async fn evaluate(&self, request: EvalRequest) -> EvalResponse {
        let state = self.run(request.into(), &grading_chain()).await;
        log_failures(&state);
        state.into()
    }
}

fn log_failures(state: &PipelineState) {
    let fields = [
        ("summary", &state.summary),
        ("quiz_text", &state.quiz_text),
        ("feedback", &state.feedback),
    ];
    for (field, completion) in fields {
        if let Some(reason) = completion.as_ref().and_then(|c| c.failure_reason()) {
            log::warn!("Returning empty {} after failed completion: {}", field, reason);
        }
    }
}
