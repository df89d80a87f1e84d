//! Session orchestration over the pure rules in [`crate::game`]: the
//! boundary the input collaborator drives, the history log, the
//! auto-advance sweep and the statistics aggregate.

pub mod foundation_safety;
pub mod moves;
pub mod session;
pub mod stats;


pub use moves::{MoveRecord, MovedUnit};
pub use session::{DropOutcome, Session};
pub use stats::Statistics;
