mod engine;
mod stimulus;

pub use engine::{ConfirmationSession, SessionState, CONFIRMATION_HOLD_MS, RECOMMENDED_TICK_MS};
pub use stimulus::{frequency_for, gain_at, sample, StimulusSample, MAX_GAIN, SAMPLE_INTERVAL_MS};
