//! `freetime` CLI — list a day's calendar events and find free time blocks.
//!
//! Events come from a calendar service's event listing (JSON), read from a
//! file or stdin.
//!
//! ## Usage
//!
//! ```sh
//! # Free blocks today within 09:00-18:00, at least 15 minutes long
//! freetime free -i events.json
//!
//! # Custom working hours and minimum block length
//! freetime free tomorrow --start 8 --end 17 --min-duration 30 -i events.json
//!
//! # Machine-readable output
//! freetime free 2026-01-26 --json < events.json
//!
//! # List the events on a day
//! freetime events "next monday" -i events.json
//!
//! # This week's events, Monday to Sunday
//! freetime week -i events.json
//! ```

mod render;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use freetime_engine::config::{
    parse_timezone, DEFAULT_DAY_END_HOUR, DEFAULT_DAY_START_HOUR, DEFAULT_MIN_DURATION_MINUTES,
};
use freetime_engine::{
    compute_availability, events_on_day, parse_events, resolve_day, start_day, today_in,
    week_start, AvailabilityConfig, RawEvent,
};
use std::io::{self, Read};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "freetime",
    version,
    about = "Find free time in a day's calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find free time blocks within working hours
    Free {
        #[command(flatten)]
        day: DayArgs,
        /// Day start hour (0-23)
        #[arg(long, env = "FREETIME_DAY_START", default_value_t = DEFAULT_DAY_START_HOUR)]
        start: u32,
        /// Day end hour (0-23)
        #[arg(long, env = "FREETIME_DAY_END", default_value_t = DEFAULT_DAY_END_HOUR)]
        end: u32,
        /// Minimum block duration in minutes
        #[arg(long, env = "FREETIME_MIN_DURATION", default_value_t = DEFAULT_MIN_DURATION_MINUTES)]
        min_duration: u32,
    },
    /// List events for a day
    Events {
        #[command(flatten)]
        day: DayArgs,
    },
    /// List this week's events, Monday to Sunday
    Week {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct DayArgs {
    /// Date (today, tomorrow, yesterday, "next monday", YYYY-MM-DD, MM-DD)
    #[arg(default_value = "today")]
    date: String,
    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args)]
struct SourceArgs {
    /// Event listing JSON file (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// IANA timezone for the day and the output
    #[arg(long, env = "FREETIME_TZ", default_value = "America/New_York")]
    tz: String,
    /// Resolve relative dates against this day (YYYY-MM-DD) instead of the current date
    #[arg(long, env = "FREETIME_TODAY")]
    today: Option<String>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

/// A resolved day with the events that fall on it.
struct DayEvents {
    date: NaiveDate,
    tz: Tz,
    events: Vec<RawEvent>,
}

/// The timezone, the current day and every event in the listing.
struct Listing {
    tz: Tz,
    today: NaiveDate,
    events: Vec<RawEvent>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Free {
            day,
            start,
            end,
            min_duration,
        } => {
            let DayEvents { date, tz, events } = load_day(&day)?;
            let config = AvailabilityConfig {
                day_start_hour: start,
                day_end_hour: end,
                min_duration_minutes: min_duration,
                timezone: tz,
            };
            let window = config
                .window_for(date)
                .context("Failed to build working window")?;

            let availability = compute_availability(&events, &window, config.min_duration());
            info!(
                %date,
                events = events.len(),
                busy = availability.busy.len(),
                free = availability.free.len(),
                blocked_all_day = availability.blocked_all_day,
                "computed free blocks"
            );

            if day.source.json {
                println!("{}", render::free_json(&availability.free)?);
            } else {
                print!("{}", render::free_report(date, &config, &availability));
            }
        }
        Commands::Events { day } => {
            let DayEvents { date, tz, events } = load_day(&day)?;
            info!(%date, events = events.len(), "listing events");

            if day.source.json {
                println!("{}", render::events_json(&events)?);
            } else {
                print!("{}", render::events_report(date, tz, &events));
            }
        }
        Commands::Week { source } => {
            let Listing { tz, today, events } = load_listing(&source)?;
            let week = group_week(events, today, tz);
            info!(%today, monday = %week_start(today), "listing week");

            if source.json {
                println!("{}", render::week_json(&week, tz)?);
            } else {
                print!("{}", render::week_report(&week, today, tz));
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=warn", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Resolve the requested day and read the events that fall on it.
fn load_day(args: &DayArgs) -> Result<DayEvents> {
    let Listing { tz, today, events } = load_listing(&args.source)?;
    let date = resolve_day(&args.date, today)?;
    debug!(expr = %args.date, %today, %date, "resolved day");

    let events = events_on_day(events, date, tz)?;
    Ok(DayEvents { date, tz, events })
}

/// Read the whole event listing along with the timezone and current day.
fn load_listing(args: &SourceArgs) -> Result<Listing> {
    let tz = parse_timezone(&args.tz)?;
    let today = match args.today.as_deref() {
        Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .with_context(|| format!("Invalid --today date: {}", raw))?,
        None => today_in(tz),
    };

    let json = read_input(args.input.as_deref())?;
    let events = if json.trim().is_empty() {
        Vec::new()
    } else {
        parse_events(&json).context("Failed to parse event listing")?
    };

    Ok(Listing { tz, today, events })
}

/// Bucket events by the day they start on, for the Monday-to-Sunday week
/// containing `today`. Events starting outside the week or without a usable
/// start are dropped.
fn group_week(events: Vec<RawEvent>, today: NaiveDate, tz: Tz) -> Vec<(NaiveDate, Vec<RawEvent>)> {
    let monday = week_start(today);
    let mut week: Vec<(NaiveDate, Vec<RawEvent>)> = (0..7)
        .map(|offset| (monday + Duration::days(offset), Vec::new()))
        .collect();

    for event in events {
        let Some(day) = start_day(&event, tz) else {
            debug!(id = ?event.id, "skipping event without a start day");
            continue;
        };
        let offset = (day - monday).num_days();
        if let Some((_, bucket)) = usize::try_from(offset).ok().and_then(|i| week.get_mut(i)) {
            bucket.push(event);
        }
    }
    week
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
