/// Result of a single completion call.
///
/// A failed call keeps its reason so callers and tests can tell "the model
/// said nothing" apart from "the call failed". Both render as text through
/// [`Completion::text`], where a failure is the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Text(String),
    Failed(String),
}

impl Completion {
    pub fn text(&self) -> &str {
        match self {
            Completion::Text(text) => text,
            Completion::Failed(_) => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            Completion::Text(text) => text,
            Completion::Failed(_) => String::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Completion::Failed(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Completion::Text(_) => None,
            Completion::Failed(reason) => Some(reason),
        }
    }
}
