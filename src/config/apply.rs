use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{PodiumArgs, parse_date_arg, parse_time_arg};
use crate::error::{AppError, AppResult, ConfigError, ValidationError};

use super::types::ConfigFile;

/// Applies file configuration under CLI values: a field set on the command
/// line always wins.
///
/// # Errors
///
/// Returns an error when a config value fails validation.
pub fn apply_config(
    args: &mut PodiumArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "date")
        && let Some(value) = config.date.as_deref()
    {
        let date = parse_date_arg(value).map_err(|err| {
            AppError::config(ConfigError::InvalidField {
                field: "date",
                source: err,
            })
        })?;
        args.date = Some(date);
    }

    if !is_cli(matches, "tick_secs")
        && let Some(value) = config.tick_secs
    {
        if value == 0 {
            return Err(AppError::config(ConfigError::FieldMustBePositive {
                field: "tick_secs",
                source: ValidationError::TickIntervalZero,
            }));
        }
        args.tick_secs = Some(value);
    }

    if !is_cli(matches, "no_color")
        && let Some(value) = config.no_color
    {
        args.no_color = value;
    }

    if !is_cli(matches, "no_splash")
        && let Some(value) = config.no_splash
    {
        args.no_splash = value;
    }

    if let Some(window) = config.window.as_ref() {
        if !is_cli(matches, "window_start")
            && let Some(value) = window.start.as_deref()
        {
            let start = parse_time_arg(value).map_err(|err| {
                AppError::config(ConfigError::InvalidField {
                    field: "window.start",
                    source: err,
                })
            })?;
            args.window_start = Some(start);
        }

        if !is_cli(matches, "window_minutes")
            && let Some(value) = window.minutes
        {
            if value == 0 {
                return Err(AppError::config(ConfigError::FieldMustBePositive {
                    field: "window.minutes",
                    source: ValidationError::WindowDurationZero,
                }));
            }
            args.window_minutes = Some(value);
        }
    }

    Ok(())
}

fn is_cli(matches: &ArgMatches, id: &str) -> bool {
    matches!(matches.value_source(id), Some(ValueSource::CommandLine))
}
