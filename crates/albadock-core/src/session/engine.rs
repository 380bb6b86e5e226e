//! Ringing confirmation state machine.
//!
//! A session is a wall-clock-based state machine. It does not own
//! threads or timers - the caller feeds it hold events and periodic
//! ticks and drops it when the episode ends, so destroying a session
//! tears down everything with it.
//!
//! ## State Transitions
//!
//! ```text
//! Sliding -> Confirmed (terminal)
//! ```
//!
//! Progress is derived from elapsed continuous-hold time, never from
//! tick counts, so irregular tick delivery cannot distort it. Releasing
//! before the full hold duration resets progress to exactly 0; no
//! partial credit carries across releases.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::alarm::Alarm;
use crate::events::Event;
use crate::session::stimulus::{self, StimulusSample};

/// Continuous hold required to confirm, in milliseconds.
pub const CONFIRMATION_HOLD_MS: u64 = 2000;

/// Suggested tick cadence for smooth progress rendering.
pub const RECOMMENDED_TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    /// Waiting for the sustained confirmation gesture.
    Sliding,
    /// Gesture completed. Terminal; every further input is a no-op.
    Confirmed,
}

/// One ringing episode for a single alarm.
///
/// Ephemeral by design: there is no persistence, and a fresh session
/// always starts at progress 0. "No active alarm" is represented by not
/// constructing a session at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfirmationSession {
    alarm: Alarm,
    state: SessionState,
    /// Hold completion percentage, 0..=100.
    progress: f64,
    /// Epoch ms at which ringing began.
    started_epoch_ms: u64,
    /// Time since ringing began. Monotone under ticks, independent of
    /// hold progress; drives the stimulus profile.
    elapsed_ringing_ms: u64,
    /// Epoch ms of the authoritative hold-start, if a hold is active.
    #[serde(default)]
    hold_started_epoch_ms: Option<u64>,
}

impl ConfirmationSession {
    /// Begin a ringing episode for `alarm` at `now_ms` (epoch ms).
    pub fn start(alarm: Alarm, now_ms: u64) -> (Self, Event) {
        let event = Event::RingingStarted {
            alarm_id: alarm.id.clone(),
            sound: alarm.sound,
            at: Utc::now(),
        };
        let session = Self {
            alarm,
            state: SessionState::Sliding,
            progress: 0.0,
            started_epoch_ms: now_ms,
            elapsed_ringing_ms: 0,
            hold_started_epoch_ms: None,
        };
        (session, event)
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn alarm(&self) -> &Alarm {
        &self.alarm
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn elapsed_ringing_ms(&self) -> u64 {
        self.elapsed_ringing_ms
    }

    pub fn is_confirmed(&self) -> bool {
        self.state == SessionState::Confirmed
    }

    pub fn is_holding(&self) -> bool {
        self.hold_started_epoch_ms.is_some()
    }

    /// Audio parameters for this instant, or `None` once confirmed:
    /// stimulus generation stops the moment the session terminates.
    pub fn stimulus(&self) -> Option<StimulusSample> {
        if self.is_confirmed() {
            return None;
        }
        Some(stimulus::sample(self.elapsed_ringing_ms, self.alarm.sound))
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::SessionSnapshot {
            state: self.state,
            progress: self.progress,
            elapsed_ringing_ms: self.elapsed_ringing_ms,
            holding: self.is_holding(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// The user pressed down on the slider. The first hold-start after a
    /// reset is authoritative; repeated starts while holding are ignored
    /// and never restart or double-count elapsed time.
    pub fn on_hold_start(&mut self, now_ms: u64) -> Option<Event> {
        if self.is_confirmed() || self.is_holding() {
            return None;
        }
        self.hold_started_epoch_ms = Some(now_ms);
        self.progress = 0.0;
        Some(Event::HoldStarted { at: Utc::now() })
    }

    /// The user released (pointer up, leave, or cancel). Before the full
    /// hold duration this resets progress to exactly 0.
    pub fn on_hold_end(&mut self) -> Option<Event> {
        if self.is_confirmed() {
            return None;
        }
        self.hold_started_epoch_ms.take()?;
        let held_ms = (self.progress / 100.0 * CONFIRMATION_HOLD_MS as f64).round() as u64;
        self.progress = 0.0;
        Some(Event::HoldReleased {
            held_ms,
            at: Utc::now(),
        })
    }

    /// Call periodically with the current epoch ms. Recomputes progress
    /// from the wall clock and returns `Some(Event::WakeConfirmed)` the
    /// instant the continuous hold reaches the confirmation duration.
    pub fn on_tick(&mut self, now_ms: u64) -> Option<Event> {
        if self.is_confirmed() {
            return None;
        }
        // Ringing clock never runs backwards, even if `now_ms` does.
        let since_start = now_ms.saturating_sub(self.started_epoch_ms);
        self.elapsed_ringing_ms = self.elapsed_ringing_ms.max(since_start);

        let hold_started = self.hold_started_epoch_ms?;
        let held_ms = now_ms.saturating_sub(hold_started);
        if held_ms >= CONFIRMATION_HOLD_MS {
            self.progress = 100.0;
            self.state = SessionState::Confirmed;
            self.hold_started_epoch_ms = None;
            return Some(Event::WakeConfirmed {
                alarm_id: self.alarm.id.clone(),
                elapsed_ringing_ms: self.elapsed_ringing_ms,
                at: Utc::now(),
            });
        }
        self.progress = held_ms as f64 / CONFIRMATION_HOLD_MS as f64 * 100.0;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alarm::{AlarmTime, Sound};
    use std::collections::BTreeSet;

    fn session() -> ConfirmationSession {
        let alarm = Alarm::new(AlarmTime::new(6, 30), BTreeSet::from([1, 3]), Sound::Sea, true);
        ConfirmationSession::start(alarm, 1_000).0
    }

    #[test]
    fn starts_sliding_at_zero_progress() {
        let s = session();
        assert_eq!(s.state(), SessionState::Sliding);
        assert_eq!(s.progress(), 0.0);
        assert!(!s.is_holding());
    }

    #[test]
    fn progress_tracks_continuous_hold() {
        let mut s = session();
        s.on_hold_start(2_000);
        assert!(s.on_tick(3_000).is_none());
        assert!((s.progress() - 50.0).abs() < f64::EPSILON);
        assert_eq!(s.state(), SessionState::Sliding);
    }

    #[test]
    fn release_resets_progress_to_exactly_zero() {
        let mut s = session();
        s.on_hold_start(2_000);
        s.on_tick(3_900);
        assert!(s.progress() > 90.0);
        let released = s.on_hold_end();
        assert!(matches!(released, Some(Event::HoldReleased { .. })));
        assert_eq!(s.progress(), 0.0);
        assert!(!s.is_holding());
    }

    #[test]
    fn full_hold_confirms_exactly_once() {
        let mut s = session();
        s.on_hold_start(2_000);
        let confirmed = s.on_tick(4_000);
        assert!(matches!(confirmed, Some(Event::WakeConfirmed { .. })));
        assert_eq!(s.state(), SessionState::Confirmed);
        assert_eq!(s.progress(), 100.0);
        // Terminal: further inputs are no-ops and never emit again.
        assert!(s.on_tick(10_000).is_none());
        assert!(s.on_hold_start(10_000).is_none());
        assert!(s.on_hold_end().is_none());
        assert_eq!(s.state(), SessionState::Confirmed);
    }

    #[test]
    fn partial_hold_does_not_carry_over() {
        let mut s = session();
        s.on_hold_start(1_000);
        s.on_tick(2_000); // held 1000 ms
        s.on_hold_end();
        s.on_hold_start(2_500);
        // 1500 ms into the second hold: would have confirmed if the
        // first 1000 ms carried over.
        assert!(s.on_tick(4_000).is_none());
        assert!(matches!(s.on_tick(4_500), Some(Event::WakeConfirmed { .. })));
    }

    #[test]
    fn repeated_hold_start_does_not_restart_the_clock() {
        let mut s = session();
        assert!(s.on_hold_start(2_000).is_some());
        assert!(s.on_hold_start(3_500).is_none());
        // Confirmation is measured from the first start.
        assert!(matches!(s.on_tick(4_000), Some(Event::WakeConfirmed { .. })));
    }

    #[test]
    fn irregular_ticks_do_not_distort_progress() {
        let mut s = session();
        s.on_hold_start(2_000);
        // One late tick is equivalent to many regular ones.
        s.on_tick(2_010);
        s.on_tick(3_990);
        assert!((s.progress() - 99.5).abs() < 0.01);
    }

    #[test]
    fn ringing_clock_is_monotone_and_independent_of_holds() {
        let mut s = session();
        s.on_tick(5_000);
        assert_eq!(s.elapsed_ringing_ms(), 4_000);
        // A stale tick cannot wind it back.
        s.on_tick(3_000);
        assert_eq!(s.elapsed_ringing_ms(), 4_000);
        s.on_hold_start(6_000);
        s.on_hold_end();
        s.on_tick(7_000);
        assert_eq!(s.elapsed_ringing_ms(), 6_000);
    }

    #[test]
    fn stimulus_stops_at_confirmation() {
        let mut s = session();
        s.on_tick(2_000);
        assert!(s.stimulus().is_some());
        s.on_hold_start(2_000);
        s.on_tick(4_000);
        assert!(s.is_confirmed());
        assert!(s.stimulus().is_none());
    }

    #[test]
    fn snapshot_reflects_current_state() {
        let mut s = session();
        s.on_hold_start(1_000);
        s.on_tick(1_500);
        match s.snapshot() {
            Event::SessionSnapshot {
                state,
                progress,
                elapsed_ringing_ms,
                holding,
                ..
            } => {
                assert_eq!(state, SessionState::Sliding);
                assert!((progress - 25.0).abs() < f64::EPSILON);
                assert_eq!(elapsed_ringing_ms, 500);
                assert!(holding);
            }
            other => panic!("expected SessionSnapshot, got {other:?}"),
        }
    }
}
