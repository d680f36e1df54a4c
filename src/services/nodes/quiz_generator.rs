use crate::{
    constants::prompts::quiz_prompt,
    models::domain::{PipelineState, StateUpdate},
    services::completion_service::CompletionService,
};

pub async fn run(state: &PipelineState, completion: &CompletionService) -> StateUpdate {
    let quiz_text = completion.complete(&quiz_prompt(state.summary_text())).await;
    let questions = parse_quiz_questions(quiz_text.text());

    StateUpdate {
        quiz_text: Some(quiz_text),
        quiz_questions: Some(questions),
        ..StateUpdate::default()
    }
}

/// Characters that end a line in model output: `\n`, `\r`, vertical tab,
/// form feed, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Pulls question text out of numbered (`1. ...`) or bulleted (`- ...`)
/// lines. Everything up to the first period is treated as the numbering.
///
/// Never returns an empty list: when no line qualifies, the whole raw text
/// becomes the single question.
pub fn parse_quiz_questions(raw: &str) -> Vec<String> {
    // `\r\n` splits into a line plus an empty one, and empty lines are dropped.
    let questions: Vec<String> = raw
        .split(LINE_BREAKS)
        .map(str::trim)
        .filter(|line| {
            line.chars()
                .next()
                .is_some_and(|first| first.is_numeric() || first == '-')
        })
        .map(|line| line.split_once('.').map_or(line, |(_, rest)| rest).trim())
        .filter(|question| !question.is_empty())
        .map(str::to_string)
        .collect();

    if questions.is_empty() {
        vec![raw.to_string()]
    } else {
        questions
    }
}
