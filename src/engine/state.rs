use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Streaming engine lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Idle,
    Running {
        #[serde(skip)]
        start_time: Option<Instant>,
        ticks_processed: u64,
    },
    Stopped {
        #[serde(skip)]
        duration: Option<Duration>,
        total_ticks: u64,
    },
    Error {
        error_msg: String,
        recoverable: bool,
    },
}

impl EngineState {
    /// Check if transition from current state to target state is valid
    pub fn can_transition_to(&self, target: &EngineState) -> bool {
        use EngineState::*;

        matches!(
            (self, target),
            (Idle, Running { .. }) |

            (Running { .. }, Stopped { .. }) |
            (Running { .. }, Error { .. }) |

            (Stopped { .. }, Running { .. }) |
            (Stopped { .. }, Idle) |

            (Error { recoverable: true, .. }, Idle)
        )
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Idle => "Idle",
            Self::Running { .. } => "Running",
            Self::Stopped { .. } => "Stopped",
            Self::Error { .. } => "Error",
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running { .. })
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Idle
    }
}
