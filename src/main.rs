use anyhow::{Context, Result, bail};
use emojiart::palette::Palette;
use emojiart::replay::{self, ReplayScript};
use emojiart::settings::Settings;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: emojiart <replay <script.json> | palette>";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load().context("Failed to load settings")?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["replay", path] => run_replay(Path::new(path), &settings),
        ["palette"] => {
            for emoji in Palette::from_settings(&settings).emojis() {
                println!("{emoji}");
            }
            Ok(())
        }
        _ => bail!(USAGE),
    }
}

fn run_replay(path: &Path, settings: &Settings) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let script: ReplayScript = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse script {}", path.display()))?;
    info!(path = %path.display(), events = script.events.len(), "Replaying script");

    let report = replay::run(&script, settings);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
