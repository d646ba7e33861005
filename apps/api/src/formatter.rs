//! Output post-processing. Only interview Q&A output is reshaped.

use crate::catalog::Action;

const QUESTION_MARKER: &str = "Question:";
const ANSWER_MARKER: &str = "Answer:";
const BOLD_ANSWER: &str = "\n**Answer:**";
/// Ends every Q&A block.
pub const QA_SEPARATOR: &str = "\n\n---\n";

pub fn format_output(action: Action, raw: &str) -> String {
    match action {
        Action::InterviewQa => format_interview_qa(raw),
        _ => raw.to_string(),
    }
}

/// Bolds each `Answer:` marker and splits the text into `Question:` blocks,
/// each terminated by [`QA_SEPARATOR`]. Text without any question marker comes
/// back as a single prefixed block.
pub fn format_interview_qa(raw: &str) -> String {
    let bolded = raw.replace(ANSWER_MARKER, BOLD_ANSWER);
    bolded
        .split(QUESTION_MARKER)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| format!("{QUESTION_MARKER} {block}{QA_SEPARATOR}"))
        .collect()
}
