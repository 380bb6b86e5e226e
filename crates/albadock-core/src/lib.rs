//! # Alba Dock Core Library
//!
//! Core business logic for the Alba Dock wake-up alarm. All operations
//! are available through a standalone CLI binary; any GUI is a thin
//! presentation layer over this same library.
//!
//! ## Architecture
//!
//! - **Recurrence evaluation**: pure weekday-plus-exception matching
//!   deciding which alarms ring on a date
//! - **Notification gate**: the once-per-date "tomorrow is a holiday"
//!   prompt decision, deterministic in an injected clock and calendar
//! - **Confirmation session**: a wall-clock-based state machine for the
//!   slide-to-wake gesture, ticked by the caller
//! - **Stimulus profile**: pure escalation curve for the wake-up audio
//! - **Storage**: JSON alarm store and TOML configuration
//!
//! ## Key Components
//!
//! - [`ConfirmationSession`]: ringing-to-confirmed state machine
//! - [`NotificationGate`]: pre-holiday prompt gate
//! - [`AlarmStore`]: durable alarm repository
//! - [`HolidayCalendar`]: swappable date lookup seam

pub mod alarm;
pub mod error;
pub mod events;
pub mod gate;
pub mod holiday;
pub mod recurrence;
pub mod session;
pub mod simulation;
pub mod storage;

pub use alarm::{Alarm, AlarmTime, Sound};
pub use error::{ConfigError, RepositoryError};
pub use events::Event;
pub use gate::{HolidayPrompt, NotificationGate, ResolvedDates, PROMPT_HOUR};
pub use holiday::{HolidayCalendar, StaticHolidayCalendar};
pub use recurrence::{due_on, is_due_on};
pub use session::{ConfirmationSession, SessionState, StimulusSample, CONFIRMATION_HOLD_MS};
pub use simulation::HolidayDemo;
pub use storage::{AlarmStore, Config};
