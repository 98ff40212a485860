mod drill;
mod plan;
mod progress;
mod runner;
mod service;
mod view;
mod workflow;

// Public API of the drill subsystem.
pub use crate::error::SessionError;
pub use drill::DrillState;
pub use plan::{QuestionPlan, QuestionPlanner};
pub use progress::SessionProgress;
pub use runner::DrillRunner;
pub use service::{RevealOutcome, RevealTicket, SessionPhase, SessionState};
pub use view::{DrillReport, DrillView, Feedback};
pub use workflow::DrillLoopService;
