//! Timer phase enumeration.

use serde::Serialize;

/// Where a timer session is in its lifecycle.
///
/// ```text
/// Idle ──start──▶ Preparing ──countdown 0 / skip──▶ Running ──end──▶ Finished
///                    │  ▲                              │  ▲
///                  pause│start                      pause│start
///                    ▼  │                              ▼  │
///                    Paused ◀─────────────────────────────┘
/// ```
///
/// `reset` returns any phase to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Fresh session, waiting for the first start
    Idle,
    /// Counting down before brew time starts
    Preparing,
    /// Brew time is advancing
    Running,
    /// Stopped mid-session; resumes where it left off
    Paused,
    /// Every step is done
    Finished,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Preparing => "preparing",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::Finished => "finished",
        }
    }

    /// True for the phases the one-second clock advances in.
    pub fn is_ticking(&self) -> bool {
        matches!(self, Phase::Preparing | Phase::Running)
    }
}
