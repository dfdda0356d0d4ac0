use std::sync::Arc;

use validator::Validate;

use crate::{
    clients::GenerationClient,
    errors::{AppError, AppResult},
    models::{
        domain::{GenerationRequest, Mode, OptionLetter, Quiz, QuizResult, SessionContext},
        dto::{
            quiz_dto::QuizDto,
            request::{AnswerRequest, GenerateQuizRequest},
        },
    },
    repositories::SessionRepository,
    services::{
        auth_service::load_session, quiz_attempt_service::QuizAttemptService,
        quiz_parser::parse_quiz,
        study_service::{current_document, ensure_same_document},
    },
};

pub struct QuizService {
    sessions: Arc<dyn SessionRepository>,
    generator: Arc<dyn GenerationClient>,
    grader: QuizAttemptService,
}

impl QuizService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        generator: Arc<dyn GenerationClient>,
        grader: QuizAttemptService,
    ) -> Self {
        Self {
            sessions,
            generator,
            grader,
        }
    }

    /// Generates and parses a new quiz. On any failure the previous quiz is left untouched.
    pub async fn generate(&self, session_id: &str, request: GenerateQuizRequest) -> AppResult<QuizDto> {
        request.validate()?;

        let session = load_session(self.sessions.as_ref(), session_id).await?;
        let document = current_document(&session)?;
        let document_id = document.id.clone();
        let generation = GenerationRequest::new(Mode::Quiz, document.text.clone())
            .with_count(request.count)
            .with_difficulty(request.difficulty);

        let raw = self.generator.generate(&generation).await.map_err(|e| {
            log::warn!("Session {}: quiz generation failed: {}", session_id, e);
            e
        })?;

        let questions = parse_quiz(&raw, Some(request.count as usize));
        if questions.is_empty() {
            log::warn!(
                "Session {}: no quiz questions could be parsed from {} chars of model output",
                session_id,
                raw.len()
            );
            return Err(AppError::QuizParse(
                "The generated quiz was not in the expected format. Please try again.".to_string(),
            ));
        }
        if questions.len() < request.count as usize {
            log::info!(
                "Session {}: parsed {} of {} requested questions",
                session_id,
                questions.len(),
                request.count
            );
        }

        let quiz = Quiz::new(questions, request.count, request.difficulty);
        let dto = QuizDto::from(&quiz);

        self.sessions
            .modify(
                session_id,
                Box::new(move |session: &mut SessionContext| {
                    ensure_same_document(session, &document_id)?;
                    session.quiz = Some(quiz);
                    Ok(())
                }),
            )
            .await
            .map_err(|e| {
                if matches!(e, AppError::Conflict(_)) {
                    log::warn!("Session {}: discarded quiz for a replaced document", session_id);
                }
                e
            })?;

        Ok(dto)
    }

    pub async fn current(&self, session_id: &str) -> AppResult<QuizDto> {
        let session = load_session(self.sessions.as_ref(), session_id).await?;
        held_quiz(&session)
    }

    /// Records a selection. Answering after a submission discards the stale result.
    pub async fn answer(
        &self,
        session_id: &str,
        index: usize,
        request: AnswerRequest,
    ) -> AppResult<QuizDto> {
        let letter: OptionLetter = request.answer.parse()?;

        let session = self
            .sessions
            .modify(
                session_id,
                Box::new(move |session: &mut SessionContext| {
                    let quiz = session.quiz.as_mut().ok_or_else(no_quiz)?;
                    if index >= quiz.len() {
                        return Err(AppError::Validation(format!(
                            "Question index {} is out of range (quiz has {} questions)",
                            index,
                            quiz.len()
                        )));
                    }
                    quiz.attempt.select(index, letter);
                    quiz.result = None;
                    Ok(())
                }),
            )
            .await?;

        held_quiz(&session)
    }

    pub async fn submit(&self, session_id: &str) -> AppResult<QuizResult> {
        let grader = self.grader;
        let session = self
            .sessions
            .modify(
                session_id,
                Box::new(move |session: &mut SessionContext| {
                    let quiz = session.quiz.as_mut().ok_or_else(no_quiz)?;
                    if quiz.is_empty() {
                        return Err(AppError::Validation("The quiz has no questions".to_string()));
                    }
                    quiz.result = Some(grader.grade(&quiz.questions, &quiz.attempt));
                    Ok(())
                }),
            )
            .await?;

        let result = session
            .quiz
            .and_then(|quiz| quiz.result)
            .ok_or_else(no_quiz)?;
        log::info!(
            "Session {} scored {}/{} ({:?})",
            session_id,
            result.score,
            result.total,
            result.tier
        );
        Ok(result)
    }

    /// Clears answers and result so the same questions can be retaken.
    pub async fn retake(&self, session_id: &str) -> AppResult<QuizDto> {
        let session = self
            .sessions
            .modify(
                session_id,
                Box::new(|session: &mut SessionContext| {
                    session.quiz.as_mut().ok_or_else(no_quiz)?.reset_attempt();
                    Ok(())
                }),
            )
            .await?;

        held_quiz(&session)
    }

    /// Discards the quiz entirely; the next one must be generated.
    pub async fn clear(&self, session_id: &str) -> AppResult<()> {
        self.sessions
            .modify(
                session_id,
                Box::new(|session: &mut SessionContext| {
                    session.quiz = None;
                    Ok(())
                }),
            )
            .await?;

        log::debug!("Session {} cleared its quiz", session_id);
        Ok(())
    }
}

fn held_quiz(session: &SessionContext) -> AppResult<QuizDto> {
    session.quiz.as_ref().map(QuizDto::from).ok_or_else(no_quiz)
}

fn no_quiz() -> AppError {
    AppError::NotFound("No quiz has been generated yet".to_string())
}
