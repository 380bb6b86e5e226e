use clap::Subcommand;

use albadock_core::alarm::{format_days, AlarmTime, Sound};
use albadock_core::storage::AlarmStore;
use albadock_core::{Config, Event};
use chrono::Utc;

#[derive(Subcommand)]
pub enum AlarmAction {
    /// List all alarms as JSON
    List,
    /// Create a new alarm
    Add {
        /// Time of day, HH:MM
        #[arg(long)]
        time: String,
        /// Weekday indices 0=Sun..6=Sat, comma separated (e.g. 1,3)
        #[arg(long, value_delimiter = ',')]
        days: Vec<u8>,
        /// Sound id (sea, rain, wind, water); defaults to the configured
        /// default sound
        #[arg(long)]
        sound: Option<String>,
        /// Disable the aroma dock for this alarm
        #[arg(long)]
        no_aroma: bool,
    },
    /// Show one alarm
    Show { id: String },
    /// Delete an alarm
    Rm { id: String },
    /// Flip the enabled switch
    Toggle { id: String },
    /// Skip a single date (append a one-off exception)
    Skip {
        id: String,
        /// Date to skip, YYYY-MM-DD
        date: String,
    },
}

pub fn run(action: AlarmAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = AlarmStore::open()?;

    match action {
        AlarmAction::List => {
            let alarms = store.list();
            println!("{}", serde_json::to_string_pretty(&alarms)?);
        }
        AlarmAction::Add {
            time,
            days,
            sound,
            no_aroma,
        } => {
            let time: AlarmTime = time.parse()?;
            let sound = match sound {
                Some(raw) => {
                    Sound::from_id(&raw).ok_or_else(|| format!("unknown sound id '{raw}'"))?
                }
                None => Config::load_or_default().default_sound,
            };
            let alarm = store.add(time, days.into_iter().collect(), sound, !no_aroma)?;
            println!("{}", serde_json::to_string_pretty(&alarm)?);
        }
        AlarmAction::Show { id } => match store.get(&id) {
            Some(alarm) => {
                println!("{}", serde_json::to_string_pretty(&alarm)?);
                eprintln!(
                    "{} on {}",
                    alarm.time.format_12h(),
                    format_days(&alarm.days)
                );
            }
            None => {
                eprintln!("no alarm with id '{id}'");
                std::process::exit(1);
            }
        },
        AlarmAction::Rm { id } => {
            store.delete(&id)?;
            println!("{{\"type\": \"alarm_deleted\"}}");
        }
        AlarmAction::Toggle { id } => {
            let alarm = store.toggle(&id)?;
            println!("{}", serde_json::to_string_pretty(&alarm)?);
        }
        AlarmAction::Skip { id, date } => {
            let date = date.parse()?;
            let alarm = store.append_disabled_date(&id, date)?;
            let event = Event::AlarmDayDisabled {
                alarm_id: alarm.id,
                date,
                at: Utc::now(),
            };
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }

    Ok(())
}
