use crate::services::step_executor::PipelineStep;

pub const ENTRY_STEP: PipelineStep = PipelineStep::Summarize;
pub const FINISH_STEP: PipelineStep = PipelineStep::Evaluate;

/// The whole chain: summarize, then quiz, then grade.
pub fn full_chain() -> Vec<PipelineStep> {
    vec![ENTRY_STEP, PipelineStep::GenerateQuiz, FINISH_STEP]
}

/// The chain up to, but not including, grading.
pub fn study_chain() -> Vec<PipelineStep> {
    full_chain()
        .into_iter()
        .take_while(|step| *step != FINISH_STEP)
        .collect()
}

/// Grading on its own, against caller-supplied quiz and answers.
pub fn grading_chain() -> Vec<PipelineStep> {
    vec![FINISH_STEP]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_chain_runs_from_entry_to_finish() {
        let chain = full_chain();

        assert_eq!(chain.first(), Some(&ENTRY_STEP));
        assert_eq!(chain.last(), Some(&FINISH_STEP));
        let names: Vec<&str> = chain.iter().map(|s| s.step_name()).collect();
        assert_eq!(names, vec!["summarizer", "quiz_generator", "evaluator"]);
    }

    #[test]
    fn study_chain_stops_before_grading() {
        assert_eq!(
            study_chain(),
            vec![PipelineStep::Summarize, PipelineStep::GenerateQuiz]
        );
    }

    #[test]
    fn grading_chain_is_evaluator_only() {
        assert_eq!(grading_chain(), vec![PipelineStep::Evaluate]);
    }
}
