#![forbid(unsafe_code)]

pub mod error;
pub mod sessions;

pub use range_core::Clock;

pub use error::SessionError;

pub use sessions::{
    DrillLoopService, DrillReport, DrillRunner, DrillState, DrillView, Feedback, RevealOutcome,
    RevealTicket, SessionPhase, SessionProgress, SessionState,
};
