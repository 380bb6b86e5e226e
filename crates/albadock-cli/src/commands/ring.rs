use clap::Args;

use albadock_core::session::{ConfirmationSession, SAMPLE_INTERVAL_MS};
use albadock_core::storage::repository::default_alarms;
use albadock_core::storage::AlarmStore;

/// Replays a deterministic ringing episode on a logical clock and
/// prints every event as JSON: an optional failed partial hold, then a
/// sustained hold until confirmation. Stimulus samples are printed on
/// the audio cadence while ringing.
#[derive(Args)]
pub struct RingArgs {
    /// Alarm id to ring (omit with --demo)
    pub id: Option<String>,
    /// Ring the seeded demo alarm without touching the store
    #[arg(long)]
    pub demo: bool,
    /// Length of a first, released hold in ms (0 to skip it)
    #[arg(long, default_value = "1000")]
    pub partial_hold_ms: u64,
    /// Length of the final sustained hold in ms
    #[arg(long, default_value = "2500")]
    pub hold_ms: u64,
    /// Logical tick interval in ms
    #[arg(long, default_value = "50")]
    pub tick_ms: u64,
}

pub fn run(args: RingArgs) -> Result<(), Box<dyn std::error::Error>> {
    let alarm = if args.demo {
        default_alarms().remove(0)
    } else {
        let id = args.id.as_deref().ok_or("provide an alarm id or --demo")?;
        AlarmStore::open()?
            .get(id)
            .ok_or_else(|| format!("no alarm with id '{id}'"))?
    };

    let tick_ms = args.tick_ms.max(1);
    let mut now: u64 = 0;
    let (mut session, started) = ConfirmationSession::start(alarm, now);
    println!("{}", serde_json::to_string(&started)?);

    let mut next_sample = 0u64;
    let mut advance = |session: &mut ConfirmationSession, now: &mut u64, until: u64| {
        while *now < until && !session.is_confirmed() {
            *now += tick_ms;
            if *now >= next_sample {
                if let Some(sample) = session.stimulus() {
                    println!("{}", serde_json::to_string(&sample).unwrap_or_default());
                }
                next_sample += SAMPLE_INTERVAL_MS;
            }
            if let Some(event) = session.on_tick(*now) {
                println!("{}", serde_json::to_string(&event).unwrap_or_default());
            }
        }
    };

    if args.partial_hold_ms > 0 {
        if let Some(event) = session.on_hold_start(now) {
            println!("{}", serde_json::to_string(&event)?);
        }
        let release_at = now + args.partial_hold_ms;
        advance(&mut session, &mut now, release_at);
        if let Some(event) = session.on_hold_end() {
            println!("{}", serde_json::to_string(&event)?);
        }
    }

    if let Some(event) = session.on_hold_start(now) {
        println!("{}", serde_json::to_string(&event)?);
    }
    let deadline = now + args.hold_ms;
    advance(&mut session, &mut now, deadline);

    println!("{}", serde_json::to_string(&session.snapshot())?);
    Ok(())
}
