use std::{
    env,
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use arcade_flyer::{server::run_replay, AircraftPreset, FlightConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: flyer_replay <config.(yaml|json)|preset> <script.jsonl>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config_arg, script_arg) = match args.as_slice() {
        [config, script] => (config, script),
        _ => return Err(USAGE.into()),
    };

    let config = load_config(config_arg)?;
    info!("Loaded flight config: {:?}", config);

    let script = BufReader::new(File::open(script_arg)?);
    let stdout = io::stdout();
    let final_state = run_replay(&config, script, stdout.lock())?;

    info!(
        "Final position ({:.3}, {:.3}, {:.3}), grounded: {}",
        final_state.position.x,
        final_state.position.y,
        final_state.position.z,
        final_state.grounded
    );

    Ok(())
}

/// A path that exists is read as a config file; anything else must name a preset.
fn load_config(arg: &str) -> Result<FlightConfig, Box<dyn std::error::Error>> {
    if Path::new(arg).exists() {
        Ok(FlightConfig::from_file(arg)?)
    } else {
        Ok(arg.parse::<AircraftPreset>()?.config())
    }
}
