use rand::Rng;

use range_core::TimerState;
use range_core::model::{Color, HandColorCatalog};

use super::service::{RevealOutcome, RevealTicket, SessionPhase, SessionState};
use super::view::{DrillReport, DrillView, Feedback};
use crate::error::SessionError;

/// A session and its stopwatch, advanced together.
///
/// The stopwatch runs exactly while a question is waiting for an answer: it is
/// resumed when each question starts (including the first) and paused by every
/// accepted answer, so reveal windows never count towards the total.
#[derive(Debug, Clone, PartialEq)]
pub struct DrillState {
    session: SessionState,
    timer: TimerState,
}

impl DrillState {
    /// Sample a new session and start timing the first question at `now_ms`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions were selected.
    pub fn start<R: Rng + ?Sized>(
        catalog: &HandColorCatalog,
        sample_size: usize,
        rng: &mut R,
        now_ms: i64,
    ) -> Result<Self, SessionError> {
        let session = SessionState::start(catalog, sample_size, rng)?;
        Ok(Self::from_session(session, now_ms))
    }

    pub(super) fn vacant() -> Self {
        Self {
            session: SessionState::vacant(),
            timer: TimerState::new(),
        }
    }

    /// Wrap a fresh session and start timing its first question.
    #[must_use]
    pub fn from_session(session: SessionState, now_ms: i64) -> Self {
        Self {
            session,
            timer: TimerState::new().resume(now_ms),
        }
    }

    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// Answering time as of `now_ms`. Read-only; safe to poll from a refresh tick.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: i64) -> u64 {
        self.timer.elapsed(now_ms)
    }

    /// Record an answer and stop the clock. No-op (and no ticket) when the
    /// session rejects the submission.
    #[must_use]
    pub fn submit_answer(
        self,
        selected: Color,
        now_ms: i64,
        reveal_delay_ms: u64,
    ) -> (Self, Option<RevealTicket>) {
        let (session, ticket) = self.session.submit_answer(selected, now_ms, reveal_delay_ms);
        let timer = if ticket.is_some() {
            self.timer.pause(now_ms)
        } else {
            self.timer
        };
        (Self { session, timer }, ticket)
    }

    /// Apply a reveal ticket; the clock restarts only when another question follows.
    #[must_use]
    pub fn complete_reveal(self, ticket: &RevealTicket, now_ms: i64) -> (Self, RevealOutcome) {
        let (session, outcome) = self.session.complete_reveal(ticket, now_ms);
        let timer = match outcome {
            RevealOutcome::Advanced(_) => self.timer.resume(now_ms),
            RevealOutcome::Ignored | RevealOutcome::Finished => self.timer,
        };
        (Self { session, timer }, outcome)
    }

    /// Result-screen data, once the session has finished.
    #[must_use]
    pub fn report(&self) -> Option<DrillReport> {
        if !self.session.is_complete() {
            return None;
        }
        Some(DrillReport {
            summary: self.session.summary(),
            elapsed_ms: self.timer.accumulated_ms(),
        })
    }

    /// Snapshot for rendering at `now_ms`.
    #[must_use]
    pub fn view(&self, now_ms: i64) -> DrillView {
        if let Some(report) = self.report() {
            return DrillView::Result(report);
        }
        let progress = self.session.progress();
        let hand = self
            .session
            .current_question()
            .map(|q| q.hand.clone())
            .unwrap_or_default();
        let feedback = self.session.revealed_answer().map(|a| Feedback {
            selected: a.selected_color,
            correct: a.correct_color,
            is_correct: a.is_correct,
        });
        DrillView::Question {
            number: progress.question_number,
            total: progress.total,
            hand,
            elapsed_ms: self.elapsed_ms(now_ms),
            feedback,
        }
    }
}
