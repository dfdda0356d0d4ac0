use crate::constants::quiz_prompt::quiz_prompt;
use crate::models::domain::{GenerationRequest, Mode, SummaryStyle};

/// Flashcards and quiz questions generated when no count is given.
pub const DEFAULT_ITEM_COUNT: u8 = 5;

pub const VIDEO_QUERY_INSTRUCTION: &str = "Suggest one short YouTube search query (at most six words) that would find an educational video about the main topic of this text. Reply with the query only, without quotes or explanation.";

const TRUNCATION_MARKER: &str = "\n[...]";

/// Assembles the prompt for a generation request, bounding the context to
/// `max_context_chars` characters.
pub fn build_prompt(request: &GenerationRequest, max_context_chars: usize) -> String {
    let context = truncate_chars(&request.text, max_context_chars);
    let query = request.query.as_deref().unwrap_or("").trim();

    match request.mode {
        Mode::Qa => format!(
            "Context:\n{}\n\nQuestion:\n{}\n\nExplain it simply.",
            context, query
        ),
        Mode::Summary => summary_prompt(request.params.style, &context),
        Mode::Flashcards => format!(
            "Create {} flashcards in 'Question - Answer' format from this:\n\n{}",
            request.params.count.unwrap_or(DEFAULT_ITEM_COUNT),
            context
        ),
        Mode::Quiz => quiz_prompt(
            request.params.count.unwrap_or(DEFAULT_ITEM_COUNT),
            request.params.difficulty.unwrap_or_default().as_str(),
            &context,
        ),
        Mode::Outline => format!(
            "Create a notebook-style outline of the following content. Use numbered section headings, short bullet points for key ideas under each heading, and a final list of key terms with one-line definitions.\n\n{}",
            context
        ),
        Mode::Custom => format!("{}\n\n{}", query, context),
    }
}

fn summary_prompt(style: Option<SummaryStyle>, context: &str) -> String {
    match style {
        None => format!("Summarize the following content:\n\n{}", context),
        Some(SummaryStyle::BulletPoints) => format!(
            "Summarize the following content as a concise list of bullet points, one key idea per bullet:\n\n{}",
            context
        ),
        Some(SummaryStyle::Executive) => format!(
            "Write an executive summary of the following content: a short overview paragraph followed by the key takeaways and their implications, in plain business language:\n\n{}",
            context
        ),
        Some(SummaryStyle::Technical) => format!(
            "Write a technical summary of the following content, preserving terminology, definitions, figures and methods precisely:\n\n{}",
            context
        ),
    }
}

/// Cuts `text` to at most `max_chars` characters on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", &text[..byte_index], TRUNCATION_MARKER),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::domain::Difficulty;

    #[test]
    fn qa_prompt_includes_context_and_question() {
        let request = GenerationRequest::new(Mode::Qa, "Water boils at 100C.")
            .with_query("  When does water boil?  ");

        let prompt = build_prompt(&request, 1_000);

        assert_eq!(
            prompt,
            "Context:\nWater boils at 100C.\n\nQuestion:\nWhen does water boil?\n\nExplain it simply."
        );
    }

    #[test]
    fn summary_style_changes_phrasing() {
        let plain = build_prompt(&GenerationRequest::new(Mode::Summary, "text"), 100);
        let bullets = build_prompt(
            &GenerationRequest::new(Mode::Summary, "text").with_style(Some(SummaryStyle::BulletPoints)),
            100,
        );
        let executive = build_prompt(
            &GenerationRequest::new(Mode::Summary, "text").with_style(Some(SummaryStyle::Executive)),
            100,
        );
        let technical = build_prompt(
            &GenerationRequest::new(Mode::Summary, "text").with_style(Some(SummaryStyle::Technical)),
            100,
        );

        assert!(plain.starts_with("Summarize the following content:"));
        assert!(bullets.contains("bullet points"));
        assert!(executive.contains("executive summary"));
        assert!(technical.contains("technical summary"));
    }

    #[test]
    fn flashcards_prompt_uses_count() {
        let prompt = build_prompt(&GenerationRequest::new(Mode::Flashcards, "cells").with_count(12), 100);
        assert!(prompt.starts_with("Create 12 flashcards in 'Question - Answer' format"));

        let prompt = build_prompt(&GenerationRequest::new(Mode::Flashcards, "cells"), 100);
        assert!(prompt.starts_with(&format!("Create {} flashcards", DEFAULT_ITEM_COUNT)));

        let defaults = crate::models::dto::request::FlashcardsRequest::default();
        assert_eq!(defaults.count, DEFAULT_ITEM_COUNT);
    }

    #[test]
    fn quiz_prompt_uses_count_and_difficulty() {
        let request = GenerationRequest::new(Mode::Quiz, "cells")
            .with_count(3)
            .with_difficulty(Difficulty::Easy);

        let prompt = build_prompt(&request, 100);

        assert!(prompt.starts_with("Generate 3 easy multiple-choice questions"));
        assert!(prompt.contains("Answer: <Letter>"));
    }

    #[test]
    fn custom_prompt_puts_instruction_first() {
        let request = GenerationRequest::new(Mode::Custom, "body").with_query(VIDEO_QUERY_INSTRUCTION);
        let prompt = build_prompt(&request, 100);

        assert!(prompt.starts_with(VIDEO_QUERY_INSTRUCTION));
        assert!(prompt.ends_with("body"));
    }

    #[test]
    fn truncate_chars_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 10), "héllo");
        assert_eq!(truncate_chars("héllo", 2), format!("hé{}", TRUNCATION_MARKER));
        assert_eq!(truncate_chars("", 0), "");
    }

    #[test]
    fn long_context_is_bounded() {
        let text = "x".repeat(500);
        let prompt = build_prompt(&GenerationRequest::new(Mode::Outline, text), 50);

        assert_eq!(prompt.matches('x').count(), 50);
        assert!(prompt.ends_with(TRUNCATION_MARKER));
    }
}
