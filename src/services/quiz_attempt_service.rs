use chrono::Utc;

use crate::models::domain::{FeedbackTier, QuestionOutcome, QuizAttempt, QuizQuestion, QuizResult};

/// Thresholds for turning a score into feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradingPolicy {
    pub pass_percent: u32,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self { pass_percent: 70 }
    }
}

impl GradingPolicy {
    pub fn new(pass_percent: u32) -> Self {
        Self {
            pass_percent: pass_percent.min(100),
        }
    }

    /// Full marks is `Perfect`; at or above the pass percentage is `Pass`.
    /// Compared in integers so that exactly 70% lands on `Pass`.
    pub fn tier(&self, score: usize, total: usize) -> FeedbackTier {
        if total == 0 {
            return FeedbackTier::Retry;
        }
        if score >= total {
            FeedbackTier::Perfect
        } else if score * 100 >= total * self.pass_percent as usize {
            FeedbackTier::Pass
        } else {
            FeedbackTier::Retry
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct QuizAttemptService {
    policy: GradingPolicy,
}

impl QuizAttemptService {
    pub fn new(policy: GradingPolicy) -> Self {
        Self { policy }
    }

    /// Number of questions whose stored selection equals the correct answer.
    pub fn score(questions: &[QuizQuestion], attempt: &QuizAttempt) -> usize {
        questions
            .iter()
            .enumerate()
            .filter(|(i, q)| attempt.selection(*i) == Some(q.correct_answer))
            .count()
    }

    /// Grade an attempt; unanswered questions count as incorrect.
    pub fn grade(&self, questions: &[QuizQuestion], attempt: &QuizAttempt) -> QuizResult {
        let outcomes: Vec<QuestionOutcome> = questions
            .iter()
            .enumerate()
            .map(|(index, q)| {
                let selected = attempt.selection(index);
                QuestionOutcome {
                    index,
                    selected,
                    correct_answer: q.correct_answer,
                    is_correct: selected == Some(q.correct_answer),
                }
            })
            .collect();

        let score = outcomes.iter().filter(|o| o.is_correct).count();
        let total = questions.len();
        let tier = self.policy.tier(score, total);

        QuizResult {
            score,
            total,
            tier,
            message: tier.message().to_string(),
            questions: outcomes,
            submitted_at: Utc::now(),
        }
    }
}
