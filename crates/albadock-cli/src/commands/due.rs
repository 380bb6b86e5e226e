use albadock_core::recurrence::due_on;
use albadock_core::storage::AlarmStore;
use chrono::{Local, NaiveDate};

pub fn run(date: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let date: NaiveDate = match date {
        Some(raw) => raw.parse()?,
        None => Local::now().date_naive(),
    };
    let store = AlarmStore::open()?;
    let alarms = store.list();
    let due = due_on(&alarms, date);
    println!("{}", serde_json::to_string_pretty(&due)?);
    Ok(())
}
