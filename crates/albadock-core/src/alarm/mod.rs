//! Alarm model and normalization.
//!
//! Alarms are persisted as JSON records with camelCase field names
//! (`id`, `time`, `days`, `enabled`, `disabledDates`, `sound`, `aroma`).
//! Loading is lenient: malformed or missing fields normalize to their
//! defaults instead of failing the load, so a damaged store never drops
//! an alarm from the list.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

/// The fixed catalog of ambient wake-up tones. No custom imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sound {
    #[default]
    Sea,
    Rain,
    Wind,
    Water,
}

impl Sound {
    pub const ALL: [Sound; 4] = [Sound::Sea, Sound::Rain, Sound::Wind, Sound::Water];

    /// Parse a stored sound id. Unknown ids yield `None`; callers that
    /// load persisted data coerce to the default instead.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "sea" => Some(Sound::Sea),
            "rain" => Some(Sound::Rain),
            "wind" => Some(Sound::Wind),
            "water" => Some(Sound::Water),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Sound::Sea => "sea",
            Sound::Rain => "rain",
            Sound::Wind => "wind",
            Sound::Water => "water",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sound::Sea => "Mar suave",
            Sound::Rain => "Lluvia ligera",
            Sound::Wind => "Viento natural",
            Sound::Water => "Agua fluyendo",
        }
    }
}

/// Wall-clock time of day, serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AlarmTime {
    pub hour: u8,
    pub minute: u8,
}

impl AlarmTime {
    /// Clamps out-of-range components into a valid time of day.
    pub fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: hour.min(23),
            minute: minute.min(59),
        }
    }

    /// 12-hour display, e.g. `6:30 a.m.`
    pub fn format_12h(&self) -> String {
        let period = if self.hour >= 12 { "p.m." } else { "a.m." };
        let h12 = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", h12, self.minute, period)
    }
}

impl Default for AlarmTime {
    /// The canonical default, matching the seeded alarm.
    fn default() -> Self {
        Self { hour: 6, minute: 30 }
    }
}

impl fmt::Display for AlarmTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for AlarmTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("invalid time '{s}': expected HH:MM"))?;
        let hour: u8 = h.trim().parse().map_err(|_| format!("invalid hour '{h}'"))?;
        let minute: u8 = m.trim().parse().map_err(|_| format!("invalid minute '{m}'"))?;
        if hour > 23 || minute > 59 {
            return Err(format!("time '{s}' out of range"));
        }
        Ok(Self { hour, minute })
    }
}

impl Serialize for AlarmTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for AlarmTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A recurring wake-up alarm.
///
/// `disabled_dates` holds one-off exception dates: the alarm is
/// suppressed on exactly those dates even when the weekday matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alarm {
    #[serde(deserialize_with = "de_id", default)]
    pub id: String,
    #[serde(deserialize_with = "de_time", default)]
    pub time: AlarmTime,
    /// Weekday indices, 0=Sunday .. 6=Saturday. Empty never matches.
    #[serde(deserialize_with = "de_days", default)]
    pub days: BTreeSet<u8>,
    #[serde(deserialize_with = "de_enabled", default = "default_true")]
    pub enabled: bool,
    #[serde(deserialize_with = "de_dates", default)]
    pub disabled_dates: BTreeSet<NaiveDate>,
    #[serde(deserialize_with = "de_sound", default)]
    pub sound: Sound,
    /// Auxiliary aroma-dock flag. No scheduling effect.
    #[serde(deserialize_with = "de_aroma", default = "default_true")]
    pub aroma: bool,
}

impl Alarm {
    /// Create a new alarm with a fresh id. Out-of-range weekdays are dropped.
    pub fn new(time: AlarmTime, days: BTreeSet<u8>, sound: Sound, aroma: bool) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            time,
            days: days.into_iter().filter(|&d| d <= 6).collect(),
            enabled: true,
            disabled_dates: BTreeSet::new(),
            sound,
            aroma,
        }
    }
}

fn default_true() -> bool {
    true
}

// Lenient field deserializers. Each reads the raw JSON value so a wrong
// type degrades to the field default instead of failing the whole load.

fn de_id<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(match v {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn de_time<'de, D: Deserializer<'de>>(d: D) -> Result<AlarmTime, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_str()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default())
}

fn de_days<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<u8>, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(serde_json::Value::as_u64)
                .filter(|&day| day <= 6)
                .map(|day| day as u8)
                .collect()
        })
        .unwrap_or_default())
}

fn de_enabled<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_bool().unwrap_or(true))
}

fn de_dates<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeSet<NaiveDate>, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_array()
        .map(|arr| {
            arr.iter()
                .filter_map(serde_json::Value::as_str)
                .filter_map(|s| s.parse().ok())
                .collect()
        })
        .unwrap_or_default())
}

fn de_sound<'de, D: Deserializer<'de>>(d: D) -> Result<Sound, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_str().and_then(Sound::from_id).unwrap_or_default())
}

fn de_aroma<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    let v = serde_json::Value::deserialize(d)?;
    Ok(v.as_bool().unwrap_or(true))
}

pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Human-readable weekday summary, e.g. `Monday, Wednesday`.
pub fn format_days(days: &BTreeSet<u8>) -> String {
    if days.is_empty() {
        return "Never".into();
    }
    if days.len() == 7 {
        return "Every day".into();
    }
    days.iter()
        .filter_map(|&d| DAY_NAMES.get(d as usize).copied())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sound_coerces_to_default() {
        let json = r#"{"id":"1","time":"06:30","days":[1,3],"enabled":true,
                       "disabledDates":[],"sound":"thunder","aroma":true}"#;
        let alarm: Alarm = serde_json::from_str(json).unwrap();
        assert_eq!(alarm.sound, Sound::Sea);
    }

    #[test]
    fn missing_fields_default() {
        let json = r#"{"id":"1","time":"07:15","days":[0,6]}"#;
        let alarm: Alarm = serde_json::from_str(json).unwrap();
        assert!(alarm.enabled);
        assert!(alarm.aroma);
        assert!(alarm.disabled_dates.is_empty());
        assert_eq!(alarm.sound, Sound::Sea);
    }

    #[test]
    fn malformed_time_and_days_normalize() {
        let json = r#"{"id":2,"time":"25:99","days":[1,9,3,-1],"sound":7}"#;
        let alarm: Alarm = serde_json::from_str(json).unwrap();
        assert_eq!(alarm.id, "2");
        assert_eq!(alarm.time, AlarmTime::default());
        assert_eq!(alarm.days.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(alarm.sound, Sound::Sea);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // The original seed data carried a `critical` flag nothing read.
        let json = r#"{"id":"1","time":"06:30","days":[1,3],"critical":true}"#;
        let alarm: Alarm = serde_json::from_str(json).unwrap();
        assert_eq!(alarm.time.to_string(), "06:30");
    }

    #[test]
    fn unparsable_exception_dates_are_dropped() {
        let json = r#"{"id":"1","time":"06:30","days":[1],
                       "disabledDates":["2025-11-05","not-a-date","2025-13-40"]}"#;
        let alarm: Alarm = serde_json::from_str(json).unwrap();
        assert_eq!(alarm.disabled_dates.len(), 1);
    }

    #[test]
    fn persisted_field_names_are_camel_case() {
        let alarm = Alarm::new(AlarmTime::new(6, 30), BTreeSet::from([1, 3]), Sound::Sea, true);
        let json = serde_json::to_value(&alarm).unwrap();
        let obj = json.as_object().unwrap();
        for key in ["id", "time", "days", "enabled", "disabledDates", "sound", "aroma"] {
            assert!(obj.contains_key(key), "missing field {key}");
        }
        assert_eq!(obj["time"], "06:30");
        assert_eq!(obj["sound"], "sea");
    }

    #[test]
    fn time_display_12h() {
        assert_eq!(AlarmTime::new(6, 30).format_12h(), "6:30 a.m.");
        assert_eq!(AlarmTime::new(0, 5).format_12h(), "12:05 a.m.");
        assert_eq!(AlarmTime::new(12, 0).format_12h(), "12:00 p.m.");
        assert_eq!(AlarmTime::new(19, 45).format_12h(), "7:45 p.m.");
    }

    #[test]
    fn format_days_summary() {
        assert_eq!(format_days(&BTreeSet::new()), "Never");
        assert_eq!(format_days(&BTreeSet::from([0, 1, 2, 3, 4, 5, 6])), "Every day");
        assert_eq!(format_days(&BTreeSet::from([1, 3])), "Monday, Wednesday");
    }
}
