use std::fs;
use std::path::PathBuf;

use regression_lab::api::{LabConfig, RegressionLab};
use regression_lab::render::NullRenderer;
use regression_lab::telemetry::init_default_tracing;

#[derive(Debug)]
struct CliArgs {
    preset: String,
    config_path: Option<PathBuf>,
    list: bool,
}

fn main() {
    init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            LabConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LabConfig::default(),
    };

    let mut lab = RegressionLab::new(NullRenderer::default(), config.with_seed_initial_points(false))
        .map_err(|err| err.to_string())?;

    if args.list {
        for name in lab.presets().names() {
            println!("{name}");
        }
        return Ok(());
    }

    lab.load_preset(&args.preset).map_err(|err| err.to_string())?;
    lab.render().map_err(|err| err.to_string())?;
    let json = lab.snapshot_json_pretty().map_err(|err| err.to_string())?;
    println!("{json}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut preset: Option<String> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut list = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--list" => list = true,
            "-h" | "--help" => {
                println!(
                    "Usage: cargo run --bin preset_snapshot -- [--config <path>] [--list] <preset>"
                );
                std::process::exit(0);
            }
            _ if arg.starts_with('-') => {
                return Err(format!("unknown argument `{arg}`"));
            }
            _ => {
                if preset.replace(arg).is_some() {
                    return Err("only one preset name may be given".to_owned());
                }
            }
        }
    }

    if !list && preset.is_none() {
        return Err("missing preset name (try --list)".to_owned());
    }

    Ok(CliArgs {
        preset: preset.unwrap_or_default(),
        config_path,
        list,
    })
}
