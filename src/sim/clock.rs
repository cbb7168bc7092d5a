//! Phase clock
//!
//! Linear ramp from `PHASE_START` down to `PHASE_END` over one cycle,
//! repeating forever. The host feeds frame deltas through `advance`, which
//! returns the events for that frame in dispatch order: a `CycleStart` if any
//! cycle boundary was crossed, then a single `Tick` with the new phase.

use serde::{Deserialize, Serialize};

use crate::consts::{CYCLE_DURATION_MS, PHASE_END, PHASE_START};

/// Clock run state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockState {
    #[default]
    Idle,
    Running,
}

/// Event produced by a clock frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockEvent {
    /// A new cycle has begun; always precedes that cycle's first tick
    CycleStart,
    /// Phase value for this frame (degrees)
    Tick(f64),
}

/// Cyclic phase driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseClock {
    state: ClockState,
    /// Cycle length (ms)
    duration_ms: f64,
    /// Time into the current cycle (ms), always in `[0, duration_ms)`
    elapsed_ms: f64,
    /// Completed cycles since the last start
    cycles: u64,
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new(CYCLE_DURATION_MS)
    }
}

impl PhaseClock {
    pub fn new(duration_ms: f64) -> Self {
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            log::warn!("Invalid cycle duration {duration_ms}, using {CYCLE_DURATION_MS}");
            CYCLE_DURATION_MS
        };
        Self {
            state: ClockState::Idle,
            duration_ms,
            elapsed_ms: 0.0,
            cycles: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Cycle boundaries crossed since the last start
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Current phase (degrees)
    pub fn phase(&self) -> f64 {
        let t = self.elapsed_ms / self.duration_ms;
        PHASE_START + (PHASE_END - PHASE_START) * t
    }

    /// Begin running from the initial phase. No-op when already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        self.state = ClockState::Running;
        self.elapsed_ms = 0.0;
        self.cycles = 0;
    }

    /// Stop delivering events. No-op when idle.
    pub fn cancel(&mut self) {
        if !self.is_running() {
            return;
        }
        self.state = ClockState::Idle;
    }

    /// Cancel then start: running again from the initial phase
    pub fn restart(&mut self) {
        self.cancel();
        self.start();
    }

    /// Advance by `dt_ms` and report what happened this frame.
    ///
    /// Idle clocks report nothing. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<ClockEvent> {
        if !self.is_running() {
            return Vec::new();
        }

        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let total = self.elapsed_ms + dt_ms;
        let wraps = (total / self.duration_ms).floor() as u64;
        self.elapsed_ms = total.rem_euclid(self.duration_ms);
        // rem_euclid may round up to the divisor
        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = 0.0;
        }
        self.cycles = self.cycles.saturating_add(wraps);

        // Skipped cycles collapse into one start: clearing twice changes nothing
        let mut events = Vec::with_capacity(2);
        if wraps > 0 {
            if wraps > 1 {
                log::debug!("Frame stalled across {wraps} cycles");
            }
            events.push(ClockEvent::CycleStart);
        }
        events.push(ClockEvent::Tick(self.phase()));
        events
    }
}
