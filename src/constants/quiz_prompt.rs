/// Worked example embedded in the quiz prompt. The quiz parser must accept it verbatim.
pub const QUIZ_FORMAT_EXAMPLE: &str = "Q1. What is the capital of France?
A) Berlin
B) Paris
C) Rome
D) Madrid
Answer: B";

pub const QUIZ_FORMAT_INSTRUCTIONS: &str = "Use this exact format, numbered Q1., Q2., etc. Put each question on one line, then exactly four options on their own lines starting with A), B), C), D), then the correct answer on its own line as \"Answer: <Letter>\". Separate questions with a blank line. Do not use markdown, bold text or any commentary before or after the questions.";

pub fn quiz_prompt(count: u8, difficulty: &str, context: &str) -> String {
    format!(
        "Generate {count} {difficulty} multiple-choice questions from the text below. {instructions}

Example:

{example}

Now generate the quiz from this text:

{context}
",
        count = count,
        difficulty = difficulty,
        instructions = QUIZ_FORMAT_INSTRUCTIONS,
        example = QUIZ_FORMAT_EXAMPLE,
        context = context,
    )
}
