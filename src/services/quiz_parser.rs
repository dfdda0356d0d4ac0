//! Recovers structured multiple-choice questions from free-form generated text.
//!
//! Accepted block shape, one item per line:
//!
//! ```text
//! Q1. Capital of France?
//! A) Berlin
//! B) Paris
//! C) Rome
//! D) Madrid
//! Answer: B
//! ```
//!
//! Markers are case-insensitive, indentation is ignored and the colon after
//! `Answer` is optional. Anything that does not match is skipped, so a broken
//! block never takes its neighbours down with it. This grammar has to stay in
//! step with the format requested in [`crate::constants::quiz_prompt`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::{OptionLetter, QuizQuestion};

static QUIZ_BLOCK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?im)^[ \t]*Q[ \t]*(\d+)[ \t]*[.):][ \t]*([^\n]+?)[ \t]*\n",
        r"[ \t]*A\)[ \t]*([^\n]+?)[ \t]*\n",
        r"[ \t]*B\)[ \t]*([^\n]+?)[ \t]*\n",
        r"[ \t]*C\)[ \t]*([^\n]+?)[ \t]*\n",
        r"[ \t]*D\)[ \t]*([^\n]+?)[ \t]*\n",
        r"[ \t]*Answer[ \t]*:?[ \t]*([A-D])\b",
    ))
    .expect("QUIZ_BLOCK_REGEX is a valid regex pattern")
});

/// Parses every well-formed block in `raw`, in source order.
///
/// When `limit` is given the result keeps only the first `limit` questions.
/// An empty result means nothing could be recognised; it is up to the caller
/// to report that as a parse failure.
pub fn parse_quiz(raw: &str, limit: Option<usize>) -> Vec<QuizQuestion> {
    let normalized = raw.replace("\r\n", "\n");

    let questions = QUIZ_BLOCK_REGEX
        .captures_iter(&normalized)
        .filter_map(|caps| {
            let question = caps.get(2)?.as_str().trim();
            let options = [
                caps.get(3)?.as_str().trim(),
                caps.get(4)?.as_str().trim(),
                caps.get(5)?.as_str().trim(),
                caps.get(6)?.as_str().trim(),
            ];
            let answer = caps.get(7)?.as_str().chars().next().and_then(OptionLetter::from_char)?;

            if question.is_empty() || options.iter().any(|o| o.is_empty()) {
                log::debug!("Skipping quiz block Q{} with empty text", &caps[1]);
                return None;
            }

            Some(QuizQuestion::new(question, options, answer))
        });

    match limit {
        Some(limit) => questions.take(limit).collect(),
        None => questions.collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_QUESTIONS: &str = "Q1. Capital of France?\nA) Berlin\nB) Paris\nC) Rome\nD) Madrid\nAnswer: B\n\nQ2. 2+2=?\nA) 3\nB) 4\nC) 5\nD) 6\nAnswer: B";

    fn block(n: usize, answer: &str) -> String {
        format!(
            "Q{n}. Question {n}?\nA) a{n}\nB) b{n}\nC) c{n}\nD) d{n}\nAnswer: {answer}",
            n = n,
            answer = answer
        )
    }

    #[test]
    fn parses_two_well_formed_blocks() {
        let questions = parse_quiz(TWO_QUESTIONS, None);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Capital of France?");
        assert_eq!(questions[0].option(OptionLetter::B), "Paris");
        assert_eq!(questions[0].correct_answer, OptionLetter::B);
        assert_eq!(questions[1].question, "2+2=?");
        assert_eq!(questions[1].option(OptionLetter::D), "6");
    }

    #[test]
    fn empty_input_yields_no_questions() {
        assert!(parse_quiz("", None).is_empty());
        assert!(parse_quiz("I'm sorry, I cannot create a quiz from this text.", None).is_empty());
    }

    #[test]
    fn returns_n_questions_in_source_order() {
        let raw = (1..=7).map(|n| block(n, "C")).collect::<Vec<_>>().join("\n\n");

        let questions = parse_quiz(&raw, None);

        assert_eq!(questions.len(), 7);
        for (i, q) in questions.iter().enumerate() {
            assert_eq!(q.question, format!("Question {}?", i + 1));
        }
    }

    #[test]
    fn block_missing_an_option_is_excluded_without_touching_neighbours() {
        let broken = "Q2. Broken?\nA) one\nB) two\nC) three\nAnswer: A";
        let raw = format!("{}\n\n{}\n\n{}", block(1, "A"), broken, block(3, "D"));

        let questions = parse_quiz(&raw, None);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].question, "Question 1?");
        assert_eq!(questions[1].question, "Question 3?");
        assert_eq!(questions[1].correct_answer, OptionLetter::D);
    }

    #[test]
    fn answer_outside_a_to_d_rejects_the_block() {
        let raw = format!("{}\n\n{}\n\n{}", block(1, "E"), block(2, "B"), block(3, "Both"));

        let questions = parse_quiz(&raw, None);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Question 2?");
    }

    #[test]
    fn missing_answer_line_rejects_the_block() {
        let raw = format!(
            "Q1. No answer?\nA) a\nB) b\nC) c\nD) d\n\n{}",
            block(2, "A")
        );

        let questions = parse_quiz(&raw, None);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "Question 2?");
    }

    #[test]
    fn text_is_trimmed_and_answer_uppercased() {
        let raw = "  Q1.   Spaced out?   \n  A)   alpha  \nB)beta\t\nC) gamma \nD) delta\nanswer:   c";

        let questions = parse_quiz(raw, None);

        assert_eq!(questions.len(), 1);
        let q = &questions[0];
        assert_eq!(q.question, "Spaced out?");
        assert_eq!(q.option(OptionLetter::A), "alpha");
        assert_eq!(q.option(OptionLetter::B), "beta");
        assert_eq!(q.option(OptionLetter::C), "gamma");
        assert_eq!(q.correct_answer, OptionLetter::C);
    }

    #[test]
    fn answer_colon_is_optional() {
        let raw = "Q1. Colonless?\nA) a\nB) b\nC) c\nD) d\nAnswer D";

        let questions = parse_quiz(raw, None);

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, OptionLetter::D);
    }

    #[test]
    fn windows_line_endings_are_accepted() {
        let raw = TWO_QUESTIONS.replace('\n', "\r\n");

        assert_eq!(parse_quiz(&raw, None).len(), 2);
    }

    #[test]
    fn truncates_to_requested_count_keeping_earliest() {
        let raw = (1..=5).map(|n| block(n, "A")).collect::<Vec<_>>().join("\n\n");

        let questions = parse_quiz(&raw, Some(3));

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].question, "Question 1?");
        assert_eq!(questions[2].question, "Question 3?");
    }

    #[test]
    fn limit_larger_than_available_returns_all() {
        assert_eq!(parse_quiz(TWO_QUESTIONS, Some(10)).len(), 2);
    }

    #[test]
    fn surrounding_chatter_is_ignored() {
        let raw = format!(
            "Sure! Here is your quiz:\n\n{}\n\nGood luck with your studies.",
            TWO_QUESTIONS
        );

        assert_eq!(parse_quiz(&raw, None).len(), 2);
    }

    #[test]
    fn option_text_may_not_span_lines() {
        let raw = "Q1. Multi?\nA) first line\ncontinued\nB) b\nC) c\nD) d\nAnswer: A";

        assert!(parse_quiz(raw, None).is_empty());
    }

    #[test]
    fn accepts_alternative_number_punctuation() {
        let raw = "Q1) Paren?\nA) a\nB) b\nC) c\nD) d\nAnswer: A\n\nq2: Colon?\na) a\nb) b\nc) c\nd) d\nANSWER: b";

        let questions = parse_quiz(raw, None);

        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].correct_answer, OptionLetter::B);
    }
}
