use std::fmt::Write;

/// Characters of prompt/response text included in log previews.
pub const LOG_PREVIEW_CHARS: usize = 80;

pub const SUMMARY_INSTRUCTIONS: &str =
    "in 3–4 clear sentences for a student. Make it easy to understand and include one simple example.";

pub const QUIZ_INSTRUCTIONS: &str =
    "Create 3 simple quiz questions to test understanding. Return them as numbered lines 1., 2., 3.";

pub const GRADING_PREAMBLE: &str = "You are a tutor grading short answers.
Given the topic summary, the quiz questions, and the student's answers, grade each as Correct / Partially Correct / Incorrect and give one-sentence feedback.

";

pub fn summary_prompt(topic: &str) -> String {
    format!("Explain the topic '{topic}' {SUMMARY_INSTRUCTIONS}")
}

pub fn quiz_prompt(summary: &str) -> String {
    format!("Based on this summary:\n{summary}\n\n{QUIZ_INSTRUCTIONS}")
}

pub fn grading_prompt<'a, I>(summary: &str, pairs: I) -> String
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut prompt = format!("{GRADING_PREAMBLE}Summary:\n{summary}\n\nQuestions & Answers:\n");
    for (index, (question, answer)) in pairs.into_iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = write!(prompt, "{}. Q: {}\n   A: {}\n", index + 1, question, answer);
    }
    prompt
}
