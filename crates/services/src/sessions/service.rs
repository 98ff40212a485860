use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use range_core::model::{
    Answer, Color, HandColorCatalog, HandColorEntry, Question, ResultSummary, SessionId,
};

use super::plan::QuestionPlanner;
use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASE & TICKETS ───────────────────────────────────────────────────────────
//

/// Coarse drill phase. `Result` is terminal until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Quiz,
    Result,
}

/// Handle for the deferred advance scheduled by an accepted answer.
///
/// The host waits until `due_at_ms` and hands the ticket back through
/// `complete_reveal`. Tickets from another session or another question are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTicket {
    pub session_id: SessionId,
    pub question_index: usize,
    pub due_at_ms: i64,
}

impl RevealTicket {
    /// Milliseconds left until the ticket may be applied.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> u64 {
        u64::try_from(self.due_at_ms.saturating_sub(now_ms)).unwrap_or(0)
    }
}

/// What `complete_reveal` did with a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Stale, duplicate or premature ticket; state unchanged.
    Ignored,
    /// Moved on to the question at this index.
    Advanced(usize),
    /// The last question was answered; the session is now in `Result`.
    Finished,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Question sequence, position and recorded answers for one drill.
///
/// Transitions consume the state and return the next one. Outside a reveal
/// window `answers.len() == current_index` while in `Quiz`; during the window
/// the current question's answer is already recorded, so the count is one higher.
#[derive(Clone, PartialEq)]
pub struct SessionState {
    id: SessionId,
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Answer>,
    phase: SessionPhase,
}

impl SessionState {
    /// Sample a fresh session of up to `sample_size` questions from `catalog`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions were selected.
    pub fn start<R: Rng + ?Sized>(
        catalog: &HandColorCatalog,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let plan = QuestionPlanner::new(catalog, sample_size).build(rng);
        if plan.is_empty() {
            return Err(SessionError::Empty);
        }
        tracing::debug!(
            catalog = plan.catalog_size,
            selected = plan.total(),
            "question plan built"
        );
        Self::from_questions(plan.questions)
    }

    /// Same as [`SessionState::start`] for a raw entry list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Catalog` for an empty list and
    /// `SessionError::Empty` if no questions were selected.
    pub fn from_entries<R: Rng + ?Sized>(
        entries: Vec<HandColorEntry>,
        sample_size: usize,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let catalog = HandColorCatalog::new(entries)?;
        Self::start(&catalog, sample_size, rng)
    }

    /// Build a session over a fixed, already ordered question list.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if `questions` is empty.
    pub fn from_questions(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        let id = SessionId::generate();
        tracing::debug!(session = %id, questions = questions.len(), "drill session started");
        Ok(Self {
            id,
            questions,
            current: 0,
            answers: Vec::new(),
            phase: SessionPhase::Quiz,
        })
    }

    /// Questionless stand-in, only ever observed between a take and a put-back.
    pub(super) fn vacant() -> Self {
        Self {
            id: SessionId::nil(),
            questions: Vec::new(),
            current: 0,
            answers: Vec::new(),
            phase: SessionPhase::Result,
        }
    }

    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Result
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            SessionPhase::Quiz => self.questions.get(self.current),
            SessionPhase::Result => None,
        }
    }

    /// True while the current question is answered and waiting to advance.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.phase == SessionPhase::Quiz && self.answers.len() == self.current + 1
    }

    /// The answer being shown during a reveal window.
    #[must_use]
    pub fn revealed_answer(&self) -> Option<&Answer> {
        if self.is_revealing() {
            self.answers.last()
        } else {
            None
        }
    }

    /// Returns a summary of the current session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            question_number: (self.current + 1).min(self.questions.len()),
            total: self.questions.len(),
            answered: self.answers.len(),
            remaining: self.questions.len().saturating_sub(self.answers.len()),
            is_complete: self.is_complete(),
        }
    }

    /// Score the answers recorded so far.
    #[must_use]
    pub fn summary(&self) -> ResultSummary {
        ResultSummary::from_answers(&self.answers)
    }

    /// Record `selected` for the current question and schedule the advance.
    ///
    /// Returns the state unchanged and no ticket when the session is finished,
    /// the index is out of range, or the current question is already answered.
    #[must_use]
    pub fn submit_answer(
        mut self,
        selected: Color,
        now_ms: i64,
        reveal_delay_ms: u64,
    ) -> (Self, Option<RevealTicket>) {
        if self.phase != SessionPhase::Quiz || self.answers.len() != self.current {
            tracing::debug!(session = %self.id, index = self.current, "ignoring duplicate or late answer");
            return (self, None);
        }
        if self.current >= self.questions.len() {
            return (self, None);
        }

        let answer = Answer::grade(&self.questions[self.current], selected);
        tracing::debug!(
            session = %self.id,
            index = self.current,
            hand = %answer.hand,
            correct = answer.is_correct,
            "answer recorded"
        );
        self.answers.push(answer);

        let delay = i64::try_from(reveal_delay_ms).unwrap_or(i64::MAX);
        let ticket = RevealTicket {
            session_id: self.id,
            question_index: self.current,
            due_at_ms: now_ms.saturating_add(delay),
        };
        (self, Some(ticket))
    }

    /// Apply the deferred advance for `ticket` once its reveal window has passed.
    #[must_use]
    pub fn complete_reveal(mut self, ticket: &RevealTicket, now_ms: i64) -> (Self, RevealOutcome) {
        let applies = ticket.session_id == self.id
            && ticket.question_index == self.current
            && self.is_revealing()
            && now_ms >= ticket.due_at_ms;
        if !applies {
            tracing::debug!(session = %self.id, ticket_session = %ticket.session_id, index = ticket.question_index, "ignoring reveal ticket");
            return (self, RevealOutcome::Ignored);
        }

        if self.current + 1 < self.questions.len() {
            self.current += 1;
            let index = self.current;
            tracing::debug!(session = %self.id, index, "advanced to next question");
            (self, RevealOutcome::Advanced(index))
        } else {
            self.phase = SessionPhase::Result;
            tracing::info!(session = %self.id, answered = self.answers.len(), "drill session finished");
            (self, RevealOutcome::Finished)
        }
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("id", &self.id)
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("phase", &self.phase)
            .finish()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
