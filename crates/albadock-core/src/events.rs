use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::alarm::Sound;
use crate::session::SessionState;

/// Every state change in the system produces an Event.
/// The presentation layer polls for these; the CLI prints them as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A confirmation session was created for a triggered alarm.
    RingingStarted {
        alarm_id: String,
        sound: Sound,
        at: DateTime<Utc>,
    },
    /// The confirmation hold gesture began.
    HoldStarted {
        at: DateTime<Utc>,
    },
    /// The hold was released before completing; progress resets to 0.
    HoldReleased {
        held_ms: u64,
        at: DateTime<Utc>,
    },
    /// The sustained hold completed. One-shot; the session is terminal
    /// after this and stimulus sampling must stop.
    WakeConfirmed {
        alarm_id: String,
        elapsed_ringing_ms: u64,
        at: DateTime<Utc>,
    },
    /// Full session state for rendering.
    SessionSnapshot {
        state: SessionState,
        progress: f64,
        elapsed_ringing_ms: u64,
        holding: bool,
        at: DateTime<Utc>,
    },
    /// The holiday gate produced a prompt.
    HolidayPromptShown {
        alarm_id: String,
        target_date: NaiveDate,
        at: DateTime<Utc>,
    },
    /// A one-off exception date was appended to an alarm.
    AlarmDayDisabled {
        alarm_id: String,
        date: NaiveDate,
        at: DateTime<Utc>,
    },
}
