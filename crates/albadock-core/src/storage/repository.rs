//! JSON-file alarm store.
//!
//! Alarms live in a single JSON array at `<data_dir>/alarms.json`.
//! Loading is lenient end to end: a missing or corrupt file yields the
//! seeded default list, and malformed record fields normalize per the
//! alarm model instead of dropping the alarm. Writes go through a
//! load-modify-save cycle; callers are single-threaded.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use super::data_dir;
use crate::alarm::{Alarm, AlarmTime, Sound};
use crate::error::RepositoryError;

const STORE_FILE: &str = "alarms.json";

/// The list a fresh install starts with: one Monday/Wednesday alarm.
pub fn default_alarms() -> Vec<Alarm> {
    vec![Alarm {
        id: "1".into(),
        time: AlarmTime::new(6, 30),
        days: BTreeSet::from([1, 3]),
        enabled: true,
        disabled_dates: BTreeSet::new(),
        sound: Sound::Sea,
        aroma: true,
    }]
}

/// Durable alarm repository.
#[derive(Debug, Clone)]
pub struct AlarmStore {
    path: PathBuf,
}

impl AlarmStore {
    /// Open the store in the application data directory.
    pub fn open() -> Result<Self, RepositoryError> {
        let dir = data_dir().map_err(|e| RepositoryError::OpenFailed {
            path: PathBuf::from(STORE_FILE),
            message: e.to_string(),
        })?;
        Ok(Self {
            path: dir.join(STORE_FILE),
        })
    }

    /// Open a store at an explicit path.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All alarms. Never fails: anomalies fall back to the defaults.
    pub fn list(&self) -> Vec<Alarm> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| default_alarms()),
            Err(_) => default_alarms(),
        }
    }

    pub fn get(&self, id: &str) -> Option<Alarm> {
        self.list().into_iter().find(|a| a.id == id)
    }

    fn save(&self, alarms: &[Alarm]) -> Result<(), RepositoryError> {
        let json = serde_json::to_string_pretty(alarms)?;
        std::fs::write(&self.path, json).map_err(|source| RepositoryError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    /// Create and persist a new alarm. An alarm must ring on at least
    /// one weekday to be persisted.
    pub fn add(
        &self,
        time: AlarmTime,
        days: BTreeSet<u8>,
        sound: Sound,
        aroma: bool,
    ) -> Result<Alarm, RepositoryError> {
        let alarm = Alarm::new(time, days, sound, aroma);
        if alarm.days.is_empty() {
            return Err(RepositoryError::EmptyDays);
        }
        let mut alarms = self.list();
        alarms.push(alarm.clone());
        self.save(&alarms)?;
        Ok(alarm)
    }

    /// Whole-record replace by id, revalidating the weekday set.
    pub fn update(&self, updated: Alarm) -> Result<Alarm, RepositoryError> {
        if updated.days.is_empty() {
            return Err(RepositoryError::EmptyDays);
        }
        let mut alarms = self.list();
        let slot = alarms
            .iter_mut()
            .find(|a| a.id == updated.id)
            .ok_or_else(|| RepositoryError::AlarmNotFound(updated.id.clone()))?;
        *slot = updated.clone();
        self.save(&alarms)?;
        Ok(updated)
    }

    pub fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut alarms = self.list();
        let before = alarms.len();
        alarms.retain(|a| a.id != id);
        if alarms.len() == before {
            return Err(RepositoryError::AlarmNotFound(id.into()));
        }
        self.save(&alarms)
    }

    /// Flip the master switch.
    pub fn toggle(&self, id: &str) -> Result<Alarm, RepositoryError> {
        let mut alarms = self.list();
        let alarm = alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RepositoryError::AlarmNotFound(id.into()))?;
        alarm.enabled = !alarm.enabled;
        let updated = alarm.clone();
        self.save(&alarms)?;
        Ok(updated)
    }

    /// Append a one-off exception date. Idempotent: adding a date that
    /// is already present is a no-op.
    pub fn append_disabled_date(&self, id: &str, date: NaiveDate) -> Result<Alarm, RepositoryError> {
        let mut alarms = self.list();
        let alarm = alarms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| RepositoryError::AlarmNotFound(id.into()))?;
        let inserted = alarm.disabled_dates.insert(date);
        let updated = alarm.clone();
        if inserted {
            self.save(&alarms)?;
        }
        Ok(updated)
    }
}
