use std::fmt;

use crate::{
    models::domain::{PipelineState, StateUpdate},
    services::{
        completion_service::CompletionService,
        nodes::{evaluator, quiz_generator, summarizer},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Summarize,
    GenerateQuiz,
    Evaluate,
}

impl PipelineStep {
    pub fn step_name(&self) -> &'static str {
        match self {
            PipelineStep::Summarize => "summarizer",
            PipelineStep::GenerateQuiz => "quiz_generator",
            PipelineStep::Evaluate => "evaluator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PipelineStep::Summarize => "Explain the topic in a short summary with one example",
            PipelineStep::GenerateQuiz => "Generate numbered quiz questions from the summary",
            PipelineStep::Evaluate => "Grade the student's answers against the quiz",
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.step_name())
    }
}

pub struct StepHandler;

impl StepHandler {
    pub async fn execute(
        step: PipelineStep,
        state: &PipelineState,
        completion: &CompletionService,
    ) -> StateUpdate {
        match step {
            PipelineStep::Summarize => summarizer::run(state, completion).await,
            PipelineStep::GenerateQuiz => quiz_generator::run(state, completion).await,
            PipelineStep::Evaluate => evaluator::run(state, completion).await,
        }
    }
}
