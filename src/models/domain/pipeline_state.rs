use crate::models::domain::Completion;

/// Record threaded through the study pipeline. Each step reads what earlier
/// steps produced and contributes its own fields; nothing is ever cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub topic: String,
    pub summary: Option<Completion>,
    pub quiz_text: Option<Completion>,
    pub quiz_questions: Option<Vec<String>>,
    pub user_answers: Vec<String>,
    pub feedback: Option<Completion>,
}

impl PipelineState {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(Completion::Text(summary.into()));
        self
    }

    pub fn with_quiz_questions(mut self, questions: Vec<String>) -> Self {
        self.quiz_questions = Some(questions);
        self
    }

    pub fn with_user_answers(mut self, answers: Vec<String>) -> Self {
        self.user_answers = answers;
        self
    }

    pub fn summary_text(&self) -> &str {
        self.summary.as_ref().map(Completion::text).unwrap_or_default()
    }

    pub fn quiz_text(&self) -> &str {
        self.quiz_text.as_ref().map(Completion::text).unwrap_or_default()
    }

    pub fn questions(&self) -> &[String] {
        self.quiz_questions.as_deref().unwrap_or_default()
    }

    pub fn feedback_text(&self) -> &str {
        self.feedback.as_ref().map(Completion::text).unwrap_or_default()
    }

    /// Union of the current state and `update`; fields present in the update
    /// overwrite earlier values.
    pub fn merge(&mut self, update: StateUpdate) {
        if let Some(summary) = update.summary {
            self.summary = Some(summary);
        }
        if let Some(quiz_text) = update.quiz_text {
            self.quiz_text = Some(quiz_text);
        }
        if let Some(questions) = update.quiz_questions {
            self.quiz_questions = Some(questions);
        }
        if let Some(feedback) = update.feedback {
            self.feedback = Some(feedback);
        }
    }
}

/// Partial state contributed by one pipeline step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    pub summary: Option<Completion>,
    pub quiz_text: Option<Completion>,
    pub quiz_questions: Option<Vec<String>>,
    pub feedback: Option<Completion>,
}

impl StateUpdate {
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        if self.summary.is_some() {
            keys.push("summary");
        }
        if self.quiz_text.is_some() {
            keys.push("quiz_text");
        }
        if self.quiz_questions.is_some() {
            keys.push("quiz_questions");
        }
        if self.feedback.is_some() {
            keys.push("feedback");
        }
        keys
    }
}
