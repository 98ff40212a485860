use std::sync::Arc;

use rand::Rng;

use range_core::Clock;
use range_core::model::{Color, DrillSettings, HandColorCatalog};
use storage::{CatalogOrigin, CatalogSource, load_catalog_or_default};

use super::drill::DrillState;
use super::service::{RevealOutcome, RevealTicket};
use super::view::DrillView;
use crate::error::SessionError;

/// Orchestrates catalog loading, drill start/restart and answering.
///
/// Owns the time source and the catalog source; the drill state itself stays
/// with the caller and is passed through every call.
#[derive(Clone)]
pub struct DrillLoopService {
    clock: Clock,
    catalog: Arc<dyn CatalogSource>,
    settings: DrillSettings,
}

impl DrillLoopService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            clock,
            catalog,
            settings: DrillSettings::default(),
        }
    }

    /// Service configured from `RANGE_DRILL_SAMPLE_SIZE` / `RANGE_DRILL_REVEAL_MS`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Settings` if a variable is set but invalid.
    pub fn from_env(clock: Clock, catalog: Arc<dyn CatalogSource>) -> Result<Self, SessionError> {
        Self::from_lookup(clock, catalog, |key| std::env::var(key).ok())
    }

    /// Same as [`DrillLoopService::from_env`] with an injectable variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Settings` if a value is invalid.
    pub fn from_lookup<F>(
        clock: Clock,
        catalog: Arc<dyn CatalogSource>,
        lookup: F,
    ) -> Result<Self, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = DrillSettings::from_lookup(lookup)?;
        Ok(Self::new(clock, catalog).with_settings(settings))
    }

    #[must_use]
    pub fn with_settings(mut self, settings: DrillSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn settings(&self) -> &DrillSettings {
        &self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load the catalog, falling back to the bundled table on any failure.
    pub async fn load_catalog(&self) -> (HandColorCatalog, CatalogOrigin) {
        load_catalog_or_default(self.catalog.as_ref()).await
    }

    /// Start a new drill with the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn start(&self) -> Result<DrillState, SessionError> {
        let (catalog, _origin) = self.load_catalog().await;
        self.start_from_catalog(&catalog, &mut rand::rng())
    }

    /// Start a new drill with an injected RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn start_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<DrillState, SessionError> {
        let (catalog, _origin) = self.load_catalog().await;
        self.start_from_catalog(&catalog, rng)
    }

    /// Start a drill from an already loaded catalog.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub fn start_from_catalog<R: Rng + ?Sized>(
        &self,
        catalog: &HandColorCatalog,
        rng: &mut R,
    ) -> Result<DrillState, SessionError> {
        DrillState::start(catalog, self.settings.sample_size(), rng, self.clock.now_ms())
    }

    /// Discard `previous` and start over with a freshly loaded, re-sampled drill.
    ///
    /// Tickets issued for `previous` can no longer apply to the new state.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn restart(&self, previous: DrillState) -> Result<DrillState, SessionError> {
        tracing::debug!(session = %previous.session().id(), "restarting drill");
        drop(previous);
        self.start().await
    }

    /// Same as [`DrillLoopService::restart`] with an injected RNG.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions could be selected.
    pub async fn restart_with_rng<R: Rng + ?Sized>(
        &self,
        previous: DrillState,
        rng: &mut R,
    ) -> Result<DrillState, SessionError> {
        tracing::debug!(session = %previous.session().id(), "restarting drill");
        drop(previous);
        self.start_with_rng(rng).await
    }

    /// Answer the current question at the clock's current time.
    #[must_use]
    pub fn submit_answer(
        &self,
        state: DrillState,
        selected: Color,
    ) -> (DrillState, Option<RevealTicket>) {
        state.submit_answer(selected, self.clock.now_ms(), self.settings.reveal_delay_ms())
    }

    /// Apply a reveal ticket at the clock's current time.
    #[must_use]
    pub fn complete_reveal(
        &self,
        state: DrillState,
        ticket: &RevealTicket,
    ) -> (DrillState, RevealOutcome) {
        state.complete_reveal(ticket, self.clock.now_ms())
    }

    /// Render-ready snapshot at the clock's current time.
    #[must_use]
    pub fn view(&self, state: &DrillState) -> DrillView {
        state.view(self.clock.now_ms())
    }
}
