use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One of the four answer slots of a multiple-choice question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for OptionLetter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => OptionLetter::from_char(c),
            _ => None,
        }
        .ok_or_else(|| AppError::Validation(format!("'{}' is not one of A, B, C or D", s.trim())))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: BTreeMap<OptionLetter, String>, // always exactly A-D
    pub correct_answer: OptionLetter,
}

impl QuizQuestion {
    pub fn new(question: &str, options: [&str; 4], correct_answer: OptionLetter) -> Self {
        QuizQuestion {
            question: question.trim().to_string(),
            options: OptionLetter::ALL
                .into_iter()
                .zip(options)
                .map(|(letter, text)| (letter, text.trim().to_string()))
                .collect(),
            correct_answer,
        }
    }

    pub fn option(&self, letter: OptionLetter) -> &str {
        self.options.get(&letter).map(String::as_str).unwrap_or_default()
    }

    /// Renders the question back into the block format the parser accepts.
    pub fn to_block(&self, number: usize) -> String {
        let mut block = format!("Q{}. {}\n", number, self.question);
        for letter in OptionLetter::ALL {
            block.push_str(&format!("{}) {}\n", letter, self.option(letter)));
        }
        block.push_str(&format!("Answer: {}", self.correct_answer));
        block
    }
}
