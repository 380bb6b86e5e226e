use clap::Subcommand;

use albadock_core::gate::{NotificationGate, ResolvedDates};
use albadock_core::holiday::StaticHolidayCalendar;
use albadock_core::simulation::{HolidayDemo, DEMO_LABEL};
use albadock_core::storage::repository::default_alarms;
use albadock_core::storage::AlarmStore;
use albadock_core::Event;
use chrono::{Local, NaiveDateTime, Utc};

#[derive(Subcommand)]
pub enum GateAction {
    /// Evaluate whether the pre-holiday prompt should appear
    Check {
        /// Use the built-in demo scenario (pinned clock, demo holiday,
        /// seeded alarm list)
        #[arg(long)]
        demo: bool,
        /// Override "now" (YYYY-MM-DDTHH:MM:SS); defaults to the local clock
        #[arg(long)]
        now: Option<String>,
        /// Dates whose prompt was already answered this runtime
        #[arg(long, value_delimiter = ',')]
        resolved: Vec<String>,
    },
}

pub fn run(action: GateAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GateAction::Check {
            demo,
            now,
            resolved,
        } => {
            let mut record = ResolvedDates::new();
            for raw in resolved {
                record.mark(raw.parse()?);
            }

            let prompt = if demo {
                eprintln!("{DEMO_LABEL}");
                HolidayDemo::new().evaluate(&default_alarms(), &record)
            } else {
                let now: NaiveDateTime = match now {
                    Some(raw) => raw.parse()?,
                    None => Local::now().naive_local(),
                };
                let alarms = AlarmStore::open()?.list();
                NotificationGate::evaluate(
                    now,
                    &alarms,
                    &StaticHolidayCalendar::default(),
                    &record,
                )
            };

            match prompt {
                Some(prompt) => {
                    let event = Event::HolidayPromptShown {
                        alarm_id: prompt.alarm.id.clone(),
                        target_date: prompt.target_date,
                        at: Utc::now(),
                    };
                    println!("{}", serde_json::to_string(&event)?);
                    println!("{}", serde_json::to_string_pretty(&prompt)?);
                }
                None => println!("null"),
            }
        }
    }
    Ok(())
}
