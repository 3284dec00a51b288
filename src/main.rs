//! # Cronkit: six-field cron expression generator
//!
//! Usage:
//!   cronkit field hour between_hours 9 17          # one field token: 9-17
//!   cronkit field week-day specific_week_days 1 3 5
//!   cronkit render                                 # every schedule in ~/.cronkit/schedules.toml
//!   cronkit render --file ./schedules.toml --name nightly
//!   cronkit merge linear 1-5 3-7 10-12             # 1-7,10-12
//!   cronkit merge week-day FRI-MON TUE-WED         # FRI-WED

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use cronkit_core::{CronkitConfig, OutputFormat};
use cronkit_expr::{
    DayExpression, HourExpression, MonthExpression, PartExpression, ScheduleFile,
    SecondMinuteExpression, WeekDayExpression,
};
use cronkit_range::{
    CircularMonth, CircularWeekDay, IntCircularRange, Interval, Month, TransformedSegment, WeekDay,
    merge_circular_ranges, merge_ranges,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cronkit", version, about = "Six-field cron expression generator")]
struct Cli {
    /// Config file (default: ~/.cronkit/config.toml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single field token
    Field {
        field: FieldKind,
        /// Expression name, e.g. every_n_hour or specific_week_days
        expression: String,
        #[arg(allow_negative_numbers = true)]
        args: Vec<i32>,
    },
    /// Render the schedules in a schedule file
    Render {
        /// Schedule file (default: schedules_path from the config)
        #[arg(short, long)]
        file: Option<String>,
        /// Only render the schedule with this name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Merge START-END ranges over a cycle
    Merge {
        cycle: CycleKind,
        #[arg(required = true, allow_hyphen_values = true)]
        ranges: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FieldKind {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    WeekDay,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CycleKind {
    /// Plain integers, no wrap-around
    Linear,
    /// 0..23
    Hour,
    /// JAN..DEC or 1..12
    Month,
    /// MON..SUN or 0..7
    WeekDay,
}

#[derive(Serialize)]
struct FieldOutput<'a> {
    field: String,
    expression: &'a str,
    arguments: &'a [i32],
    token: String,
}

#[derive(Serialize)]
struct MergeOutput {
    cycle: String,
    ranges: Vec<String>,
    merged: String,
}

fn value_name<V: ValueEnum>(value: V) -> String {
    value
        .to_possible_value()
        .map(|v| v.get_name().to_string())
        .unwrap_or_default()
}

fn expand_path(p: &str) -> String {
    shellexpand::tilde(p).to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => CronkitConfig::load_from(std::path::Path::new(&expand_path(path)))?,
        None => CronkitConfig::load()?,
    };

    // Initialize logging
    let filter = if cli.verbose {
        "cronkit=debug".to_string()
    } else {
        format!("cronkit={}", config.log.level)
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let json = cli.json || config.output.format == OutputFormat::Json;
    let pretty = config.output.pretty;

    match cli.command {
        Commands::Field {
            field,
            expression,
            args,
        } => {
            let token = render_field(field, &expression, &args)?;
            if json {
                let output = FieldOutput {
                    field: value_name(field),
                    expression: &expression,
                    arguments: &args,
                    token,
                };
                print_json(&output, pretty)?;
            } else {
                println!("{token}");
            }
        }
        Commands::Render { file, name } => {
            let path = match file {
                Some(f) => std::path::PathBuf::from(expand_path(&f)),
                None => config.resolved_schedules_path(),
            };
            let schedules = ScheduleFile::load(&path)?;
            let mut rendered = schedules.render_all();
            if let Some(name) = &name {
                rendered.retain(|r| &r.name == name);
                if rendered.is_empty() {
                    bail!("No schedule named '{name}' in {}", path.display());
                }
            }

            if json {
                print_json(&rendered, pretty)?;
            } else {
                let width = rendered.iter().map(|r| r.name.len()).max().unwrap_or(0);
                for r in &rendered {
                    match (&r.cron, &r.error) {
                        (Some(cron), _) => println!("{:width$}  {cron}", r.name),
                        (None, Some(error)) => println!("{:width$}  ❌ {error}", r.name),
                        (None, None) => {}
                    }
                }
            }

            let failed = rendered.iter().filter(|r| !r.is_ok()).count();
            if failed > 0 {
                bail!("{failed} schedule(s) failed to render");
            }
        }
        Commands::Merge { cycle, ranges } => {
            let merged = merge_cycle(cycle, &ranges)?;
            if json {
                let output = MergeOutput {
                    cycle: value_name(cycle),
                    ranges,
                    merged,
                };
                print_json(&output, pretty)?;
            } else {
                println!("{merged}");
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{text}");
    Ok(())
}

fn render_field(field: FieldKind, expression: &str, args: &[i32]) -> Result<String> {
    let token = match field {
        FieldKind::Second | FieldKind::Minute => expression
            .parse::<SecondMinuteExpression>()?
            .generate_final_expression(args)?,
        FieldKind::Hour => expression
            .parse::<HourExpression>()?
            .generate_final_expression(args)?,
        FieldKind::Day => expression
            .parse::<DayExpression>()?
            .generate_final_expression(args)?,
        FieldKind::Month => expression
            .parse::<MonthExpression>()?
            .generate_final_expression(args)?,
        FieldKind::WeekDay => expression
            .parse::<WeekDayExpression>()?
            .generate_final_expression(args)?,
    };
    Ok(token)
}

/// Splits `START-END` at the first `-` that follows a character, so negative
/// linear bounds (`-5-3`) still parse.
fn split_range(range: &str) -> Result<(&str, &str)> {
    let split = range
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '-')
        .map(|(i, _)| i)
        .with_context(|| format!("Range '{range}' is not START-END"))?;
    Ok((range[..split].trim(), range[split + 1..].trim()))
}

fn parse_month(text: &str) -> Result<Month> {
    if let Ok(number) = text.parse::<i32>() {
        return Month::from_number(number).with_context(|| format!("No month {number}"));
    }
    Month::ALL
        .into_iter()
        .find(|m| m.abbreviation().eq_ignore_ascii_case(text) || m.name().eq_ignore_ascii_case(text))
        .with_context(|| format!("Unknown month '{text}'"))
}

fn parse_week_day(text: &str) -> Result<WeekDay> {
    if let Ok(index) = text.parse::<i32>() {
        return WeekDay::from_cron_index(index).with_context(|| format!("No weekday {index}"));
    }
    WeekDay::ALL
        .into_iter()
        .find(|d| d.abbreviation().eq_ignore_ascii_case(text) || d.name().eq_ignore_ascii_case(text))
        .with_context(|| format!("Unknown weekday '{text}'"))
}

fn join_segments(segments: &[TransformedSegment]) -> String {
    segments
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

fn merge_cycle(cycle: CycleKind, ranges: &[String]) -> Result<String> {
    let pairs = ranges
        .iter()
        .map(|r| split_range(r))
        .collect::<Result<Vec<_>>>()?;

    let merged = match cycle {
        CycleKind::Linear => {
            let intervals = pairs
                .iter()
                .map(|(a, b)| -> Result<_> { Ok(Interval::new(a.parse::<i64>()?, b.parse::<i64>()?)) })
                .collect::<Result<Vec<_>>>()?;
            merge_ranges(&intervals)
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }
        CycleKind::Hour => {
            let hours: Vec<i32> = (0..=23).collect();
            let ranges = pairs
                .iter()
                .map(|(a, b)| -> Result<_> { Ok(IntCircularRange::new(a.parse()?, b.parse()?, &hours)) })
                .collect::<Result<Vec<_>>>()?;
            join_segments(&merge_circular_ranges(&ranges)?)
        }
        CycleKind::Month => {
            let ranges = pairs
                .iter()
                .map(|(a, b)| -> Result<_> { Ok(CircularMonth::new(parse_month(a)?, parse_month(b)?)) })
                .collect::<Result<Vec<_>>>()?;
            join_segments(&merge_circular_ranges(&ranges)?)
        }
        CycleKind::WeekDay => {
            let ranges = pairs
                .iter()
                .map(|(a, b)| -> Result<_> { Ok(CircularWeekDay::new(parse_week_day(a)?, parse_week_day(b)?)) })
                .collect::<Result<Vec<_>>>()?;
            join_segments(&merge_circular_ranges(&ranges)?)
        }
    };

    tracing::debug!("Merged {} {:?} ranges -> {}", ranges.len(), cycle, merged);
    Ok(merged)
}
