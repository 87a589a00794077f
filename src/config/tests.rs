use std::io::Write as _;

use clap::{CommandFactory, FromArgMatches};

use crate::args::PodiumArgs;
use crate::error::{AppError, AppResult};

use super::types::ConfigFile;
use super::{apply_config, load_config_file};

fn write_config(dir: &tempfile::TempDir, name: &str, body: &str) -> AppResult<std::path::PathBuf> {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path)?;
    file.write_all(body.as_bytes())?;
    Ok(path)
}

fn parse_cli(argv: &[&str]) -> AppResult<(PodiumArgs, clap::ArgMatches)> {
    let matches = PodiumArgs::command().try_get_matches_from(argv.iter().copied())?;
    let args = PodiumArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

#[test]
fn loads_toml_config() -> AppResult<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(
        &dir,
        "podium.toml",
        r#"
date = "2025-10-03"
tick_secs = 30

[window]
start = "14:00"
minutes = 720
"#,
    )?;
    let config = load_config_file(&path)?;
    if config.date.as_deref() != Some("2025-10-03") || config.tick_secs != Some(30) {
        return Err(AppError::config("toml top-level fields not loaded"));
    }
    let window = config
        .window
        .ok_or_else(|| AppError::config("window table missing"))?;
    if window.start.as_deref() != Some("14:00") || window.minutes != Some(720) {
        return Err(AppError::config("window table not loaded"));
    }
    Ok(())
}

#[test]
fn loads_json_config() -> AppResult<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(
        &dir,
        "podium.json",
        r#"{ "no_color": true, "window": { "minutes": 600 } }"#,
    )?;
    let config = load_config_file(&path)?;
    if config.no_color != Some(true) {
        return Err(AppError::config("json field not loaded"));
    }
    if config.window.and_then(|window| window.minutes) != Some(600) {
        return Err(AppError::config("json window not loaded"));
    }
    Ok(())
}

#[test]
fn rejects_unknown_extension() -> AppResult<()> {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "podium.yaml", "date: 2025-10-03")?;
    if load_config_file(&path).is_ok() {
        return Err(AppError::config("yaml accepted"));
    }
    Ok(())
}

#[test]
fn cli_wins_over_config() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["podium", "--tick-secs", "5"])?;
    let config = ConfigFile {
        date: Some("2025-10-03".to_owned()),
        tick_secs: Some(120),
        ..ConfigFile::default()
    };
    apply_config(&mut args, &matches, &config)?;
    if args.tick_secs != Some(5) {
        return Err(AppError::config("config overrode the CLI tick"));
    }
    if args.date.map(|date| date.to_string()) != Some("2025-10-03".to_owned()) {
        return Err(AppError::config("config date not applied"));
    }
    Ok(())
}

#[test]
fn config_fills_window_when_cli_silent() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["podium"])?;
    let config: ConfigFile = toml::from_str(
        r#"
[window]
start = "12:00"
minutes = 900
"#,
    )?;
    apply_config(&mut args, &matches, &config)?;
    if args.window_start.map(|time| time.to_string()) != Some("12:00:00".to_owned()) {
        return Err(AppError::config("window.start not applied"));
    }
    if args.window_minutes != Some(900) {
        return Err(AppError::config("window.minutes not applied"));
    }
    Ok(())
}

#[test]
fn invalid_config_values_error() -> AppResult<()> {
    let (mut args, matches) = parse_cli(&["podium"])?;
    let bad_time = ConfigFile {
        window: Some(super::types::WindowConfig {
            start: Some("half twee".to_owned()),
            minutes: None,
        }),
        ..ConfigFile::default()
    };
    if apply_config(&mut args, &matches, &bad_time).is_ok() {
        return Err(AppError::config("bad window.start accepted"));
    }

    let (mut fresh_args, fresh_matches) = parse_cli(&["podium"])?;
    let zero_tick = ConfigFile {
        tick_secs: Some(0),
        ..ConfigFile::default()
    };
    if apply_config(&mut fresh_args, &fresh_matches, &zero_tick).is_ok() {
        return Err(AppError::config("zero tick accepted"));
    }
    Ok(())
}
