use std::time::Duration;

use rand::Rng;
use tokio::time::Instant;

use range_core::model::{Color, HandColorCatalog};

use super::drill::DrillState;
use super::service::{RevealOutcome, RevealTicket};
use super::view::DrillView;
use super::workflow::DrillLoopService;
use crate::error::SessionError;

/// Single-owner host that drives a drill on tokio time.
///
/// Timestamps come from a monotonic `tokio::time::Instant` anchored at the
/// service clock when the runner is created, so the stopwatch is unaffected by
/// wall-clock jumps and tests can run on paused time.
///
/// Every `async` method is cancel-safe: dropping a pending `wait_for_reveal`
/// keeps the reveal ticket, and the next wait picks it up.
pub struct DrillRunner {
    service: DrillLoopService,
    state: DrillState,
    pending: Option<RevealTicket>,
    anchor: Instant,
    anchor_ms: i64,
}

impl DrillRunner {
    /// Load the catalog and start the first drill with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn start(service: DrillLoopService) -> Result<Self, SessionError> {
        let anchor = Instant::now();
        let (catalog, _origin) = service.load_catalog().await;
        Self::begin(service, &catalog, &mut rand::rng(), anchor)
    }

    /// Same as [`DrillRunner::start`] with an injected RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn start_with_rng<R: Rng + ?Sized>(
        service: DrillLoopService,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        let anchor = Instant::now();
        let (catalog, _origin) = service.load_catalog().await;
        Self::begin(service, &catalog, rng, anchor)
    }

    fn begin<R: Rng + ?Sized>(
        service: DrillLoopService,
        catalog: &HandColorCatalog,
        rng: &mut R,
        anchor: Instant,
    ) -> Result<Self, SessionError> {
        let anchor_ms = service.clock().now_ms();
        let now_ms = anchor_ms.saturating_add(elapsed_ms(anchor));
        let state = DrillState::start(catalog, service.settings().sample_size(), rng, now_ms)?;
        Ok(Self {
            service,
            state,
            pending: None,
            anchor,
            anchor_ms,
        })
    }

    fn now_ms(&self) -> i64 {
        self.anchor_ms.saturating_add(elapsed_ms(self.anchor))
    }

    // Feed the owned state through a consuming transition without cloning it.
    fn apply<T>(&mut self, transition: impl FnOnce(DrillState) -> (DrillState, T)) -> T {
        let current = std::mem::replace(&mut self.state, DrillState::vacant());
        let (next, output) = transition(current);
        self.state = next;
        output
    }

    #[must_use]
    pub fn state(&self) -> &DrillState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> DrillView {
        self.state.view(self.now_ms())
    }

    /// Ticket for the reveal window currently open, if any.
    #[must_use]
    pub fn pending(&self) -> Option<&RevealTicket> {
        self.pending.as_ref()
    }

    /// Record an answer without waiting. Returns false if it was ignored.
    pub fn answer(&mut self, selected: Color) -> bool {
        let now = self.now_ms();
        let delay = self.service.settings().reveal_delay_ms();
        let ticket = self.apply(|state| state.submit_answer(selected, now, delay));
        match ticket {
            Some(ticket) => {
                self.pending = Some(ticket);
                true
            }
            None => false,
        }
    }

    /// Wait out the open reveal window, then advance.
    ///
    /// Returns `RevealOutcome::Ignored` immediately when nothing is pending.
    /// The ticket stays pending until it has been applied.
    pub async fn wait_for_reveal(&mut self) -> RevealOutcome {
        let Some(ticket) = self.pending else {
            return RevealOutcome::Ignored;
        };
        let remaining = ticket.remaining_ms(self.now_ms());
        if remaining > 0 {
            tokio::time::sleep(Duration::from_millis(remaining)).await;
        }
        let now = self.now_ms();
        let outcome = self.apply(|state| state.complete_reveal(&ticket, now));
        self.pending = None;
        outcome
    }

    /// Answer and wait for the resulting advance.
    pub async fn answer_and_advance(&mut self, selected: Color) -> RevealOutcome {
        if !self.answer(selected) {
            return RevealOutcome::Ignored;
        }
        self.wait_for_reveal().await
    }

    /// Replace the drill wholesale; any open reveal window is dropped with it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn restart(&mut self) -> Result<(), SessionError> {
        let (catalog, _origin) = self.service.load_catalog().await;
        self.restart_from(&catalog, &mut rand::rng())
    }

    /// Same as [`DrillRunner::restart`] with an injected RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn restart_with_rng<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let (catalog, _origin) = self.service.load_catalog().await;
        self.restart_from(&catalog, rng)
    }

    fn restart_from<R: Rng + ?Sized>(
        &mut self,
        catalog: &HandColorCatalog,
        rng: &mut R,
    ) -> Result<(), SessionError> {
        let now_ms = self.now_ms();
        let fresh = DrillState::start(catalog, self.service.settings().sample_size(), rng, now_ms)?;
        self.pending = None;
        self.state = fresh;
        Ok(())
    }
}

fn elapsed_ms(anchor: Instant) -> i64 {
    i64::try_from(anchor.elapsed().as_millis()).unwrap_or(i64::MAX)
}
