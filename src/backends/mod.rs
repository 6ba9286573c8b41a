//! # Backends Module
//!
//! Execution strategies for consumer business logic. A topic fixes its
//! backend at setup time: `Inline` runs `perform` on the caller's path,
//! `Scheduled` hands the serializable batch to a deferred execution
//! mechanism and returns immediately.

pub mod in_process;
pub mod scheduler;

pub use in_process::InProcessScheduler;
pub use scheduler::{ScheduledJob, Scheduler};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Closed set of execution modes, serializable for jobs and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    Inline,
    Scheduled,
}

/// The backend a topic dispatches through.
///
/// Selection happens once during topic setup and never varies per
/// invocation. The scheduled variant carries its deferred execution
/// mechanism so a controller needs no further wiring at dispatch time.
#[derive(Clone)]
pub enum BackendStrategy {
    /// Run `perform` synchronously on the current call path; errors
    /// propagate to the caller of `invoke`.
    Inline,
    /// Enqueue the batch and return; `perform` runs later through the
    /// scheduler's own execution channel, which also owns error reporting.
    Scheduled(Arc<dyn Scheduler>),
}

impl BackendStrategy {
    /// Build a scheduled strategy around a deferred execution mechanism.
    pub fn scheduled(scheduler: impl Scheduler + 'static) -> Self {
        Self::Scheduled(Arc::new(scheduler))
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Self::Inline => BackendKind::Inline,
            Self::Scheduled(_) => BackendKind::Scheduled,
        }
    }
}

impl std::fmt::Debug for BackendStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inline => f.write_str("BackendStrategy::Inline"),
            Self::Scheduled(_) => f.write_str("BackendStrategy::Scheduled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_reflects_variant() {
        assert_eq!(BackendStrategy::Inline.kind(), BackendKind::Inline);

        let (scheduler, _queue) = InProcessScheduler::new();
        assert_eq!(
            BackendStrategy::scheduled(scheduler).kind(),
            BackendKind::Scheduled
        );
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BackendKind::Scheduled).unwrap();
        assert_eq!(json, "\"scheduled\"");
    }
}
