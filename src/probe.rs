//! Capability Probe
//!
//! Tracks whether the AI host is present. Availability latches: once the
//! host has been seen, later checks are not made and the flag stays up.

use std::time::Duration;
use tracing::{info, warn};

use crate::host::AiHost;

/// Shortest allowed gap between availability checks
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Default)]
pub struct CapabilityProbe {
    available: bool,
    checks: u64,
}

impl CapabilityProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Polling is wanted only until the host shows up
    pub fn needs_polling(&self) -> bool {
        !self.available
    }

    pub fn checks(&self) -> u64 {
        self.checks
    }

    /// Record one check result and return the (latched) flag
    pub fn record(&mut self, present: bool) -> bool {
        if self.available {
            return true;
        }
        self.checks += 1;
        if present {
            info!("✅ AI host available after {} check(s)", self.checks);
            self.available = true;
        } else {
            warn!("AI host not available. Make sure the host is running and enabled.");
        }
        self.available
    }
}

/// Check now, then every `interval` until the host is present.
///
/// The timer lives inside the returned future; dropping it stops polling.
/// Intervals below [`MIN_INTERVAL`] are raised to it.
pub async fn wait_until_available(
    host: &dyn AiHost,
    probe: &mut CapabilityProbe,
    interval: Duration,
) {
    let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    while probe.needs_polling() {
        ticker.tick().await;
        let present = host.is_available().await;
        probe.record(present);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_latches() {
        let mut probe = CapabilityProbe::new();
        assert!(!probe.record(false));
        assert!(probe.needs_polling());
        assert!(probe.record(true));
        assert!(probe.record(false));
        assert!(probe.is_available());
        assert!(!probe.needs_polling());
        assert_eq!(probe.checks(), 2);
    }
}
