use albadock_core::alarm::Sound;
use albadock_core::session::sample;

pub fn run(elapsed_ms: u64, sound: &str) -> Result<(), Box<dyn std::error::Error>> {
    let sound = Sound::from_id(sound).ok_or_else(|| format!("unknown sound id '{sound}'"))?;
    let sample = sample(elapsed_ms, sound);
    println!("{}", serde_json::to_string_pretty(&sample)?);
    Ok(())
}
