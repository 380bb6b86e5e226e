//! Progressive wake-up stimulus profile.
//!
//! Pure functions mapping elapsed ringing time to audio parameters:
//! 0-5 s very soft, 5-20 s gradual ramp, 20+ s stable. The base
//! frequency varies slightly by sound (microvariation to reduce
//! habituation). The caller samples this periodically and renders a
//! short decaying tone burst per sample; rendering is out of scope
//! here, and sampling must stop once the session confirms.

use serde::{Deserialize, Serialize};

use crate::alarm::Sound;

/// Hard ceiling on output gain.
pub const MAX_GAIN: f64 = 0.1;

/// Suggested cadence for tone bursts, in milliseconds.
pub const SAMPLE_INTERVAL_MS: u64 = 1200;

const QUIET_GAIN: f64 = 0.03;
const STABLE_GAIN: f64 = 0.09;
const RAMP_START_SECS: f64 = 5.0;
const RAMP_END_SECS: f64 = 20.0;

/// Audio parameters for one tone burst.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StimulusSample {
    pub gain: f64,
    pub frequency_hz: f64,
}

/// Gain for the given elapsed ringing time. Piecewise linear,
/// monotonically non-decreasing, continuous at both phase boundaries,
/// clamped to [`MAX_GAIN`].
pub fn gain_at(elapsed_ms: u64) -> f64 {
    let t = elapsed_ms as f64 / 1000.0;
    let gain = if t < RAMP_START_SECS {
        QUIET_GAIN
    } else if t < RAMP_END_SECS {
        QUIET_GAIN
            + (t - RAMP_START_SECS) / (RAMP_END_SECS - RAMP_START_SECS)
                * (STABLE_GAIN - QUIET_GAIN)
    } else {
        STABLE_GAIN
    };
    gain.min(MAX_GAIN)
}

/// Base tone for a catalog sound, in Hz.
pub fn frequency_for(sound: Sound) -> f64 {
    match sound {
        Sound::Sea => 400.0,
        Sound::Rain => 420.0,
        Sound::Wind => 380.0,
        Sound::Water => 440.0,
    }
}

/// One periodic sample: gain for the elapsed time plus the sound's base
/// frequency.
pub fn sample(elapsed_ms: u64, sound: Sound) -> StimulusSample {
    StimulusSample {
        gain: gain_at(elapsed_ms),
        frequency_hz: frequency_for(sound),
    }
}
