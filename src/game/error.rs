//! Action errors

use thiserror::Error;

use super::{Action, RunState};

/// Why an action was refused. A refused action changes nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("cannot {action} here")]
    Illegal { action: Action },
    #[error("the run is over ({state:?})")]
    RunOver { state: RunState },
}
