//! WBGT CLI - Command-line interface for WBGT Analytics
//!
//! Commands:
//! - report: Produce a full forecast analytics report
//! - windows: List good-weather windows in a feed
//! - trend: Compute the trend of one metric
//! - compare: Compare two days' feeds
//! - summarize: Print a human-readable summary using display preferences

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use wbgt_analytics::config::{DisplayPreferences, TemperatureUnit, TimeFormat, WindUnit};
use wbgt_analytics::pipeline::WeatherAnalyzer;
use wbgt_analytics::trend::Metric;
use wbgt_analytics::types::Slot;
use wbgt_analytics::{advisor, risk, score, trend, windows, ANALYTICS_VERSION};

/// WBGT - Heat-stress analytics for weather observation feeds
#[derive(Parser)]
#[command(name = "wbgt")]
#[command(version = ANALYTICS_VERSION)]
#[command(about = "Analyze WBGT weather feeds", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce a full forecast analytics report as JSON
    Report {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,
    },

    /// List good-weather windows in a feed
    Windows {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Rain probability ceiling (percent, exclusive)
        #[arg(long, default_value_t = windows::DEFAULT_MAX_RAIN_PCT)]
        max_rain: f64,

        /// UV index ceiling (exclusive)
        #[arg(long, default_value_t = windows::DEFAULT_MAX_UV_INDEX)]
        max_uv: f64,

        /// Highest acceptable risk tier level (0-4)
        #[arg(long, default_value = "1")]
        max_tier_level: u8,
    },

    /// Compute the trend of one metric over a feed
    Trend {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Metric to track
        #[arg(long, value_enum, default_value = "wbgt")]
        metric: MetricArg,
    },

    /// Compare two days' feeds
    Compare {
        /// Feed for the first day
        #[arg(long)]
        day_a: PathBuf,

        /// Feed for the second day
        #[arg(long)]
        day_b: PathBuf,
    },

    /// Print a human-readable summary of current conditions
    Summarize {
        /// Input file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Temperature unit
        #[arg(long, value_enum, default_value = "celsius")]
        temperature_unit: TemperatureUnitArg,

        /// Wind unit
        #[arg(long, value_enum, default_value = "ms")]
        wind_unit: WindUnitArg,

        /// Clock format
        #[arg(long, value_enum, default_value = "h24")]
        time_format: TimeFormatArg,

        /// Single-line output
        #[arg(long)]
        compact: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    Wbgt,
    Temperature,
    Humidity,
    WindSpeed,
    UvIndex,
    RainChance,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Metric {
        match arg {
            MetricArg::Wbgt => Metric::Wbgt,
            MetricArg::Temperature => Metric::Temperature,
            MetricArg::Humidity => Metric::Humidity,
            MetricArg::WindSpeed => Metric::WindSpeed,
            MetricArg::UvIndex => Metric::UvIndex,
            MetricArg::RainChance => Metric::RainChance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TemperatureUnitArg {
    Celsius,
    Fahrenheit,
}

#[derive(Clone, Copy, ValueEnum)]
enum WindUnitArg {
    /// Meters per second
    Ms,
    /// Kilometers per hour
    Kmh,
    /// Miles per hour
    Mph,
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeFormatArg {
    /// 12-hour clock
    H12,
    /// 24-hour clock
    H24,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                serde_json::to_string(&CliError::from(e))
                    .unwrap_or_else(|_| "Unknown error".to_string())
            );
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), WbgtCliError> {
    match cli.command {
        Commands::Report { input, output } => cmd_report(&input, &output),

        Commands::Windows {
            input,
            max_rain,
            max_uv,
            max_tier_level,
        } => cmd_windows(&input, max_rain, max_uv, max_tier_level),

        Commands::Trend { input, metric } => cmd_trend(&input, metric.into()),

        Commands::Compare { day_a, day_b } => cmd_compare(&day_a, &day_b),

        Commands::Summarize {
            input,
            temperature_unit,
            wind_unit,
            time_format,
            compact,
        } => {
            let prefs = DisplayPreferences {
                temperature_unit: match temperature_unit {
                    TemperatureUnitArg::Celsius => TemperatureUnit::Celsius,
                    TemperatureUnitArg::Fahrenheit => TemperatureUnit::Fahrenheit,
                },
                wind_unit: match wind_unit {
                    WindUnitArg::Ms => WindUnit::MetersPerSecond,
                    WindUnitArg::Kmh => WindUnit::KilometersPerHour,
                    WindUnitArg::Mph => WindUnit::MilesPerHour,
                },
                time_format: match time_format {
                    TimeFormatArg::H12 => TimeFormat::TwelveHour,
                    TimeFormatArg::H24 => TimeFormat::TwentyFourHour,
                },
                compact_view: compact,
            };
            cmd_summarize(&input, prefs)
        }
    }
}

fn cmd_report(input: &Path, output: &Path) -> Result<(), WbgtCliError> {
    let feed = read_input(input)?;
    let report = WeatherAnalyzer::new().analyze_json(&feed)?;

    if output.to_string_lossy() == "-" {
        println!("{report}");
    } else {
        fs::write(output, report)?;
    }
    Ok(())
}

fn cmd_windows(
    input: &Path,
    max_rain: f64,
    max_uv: f64,
    max_tier_level: u8,
) -> Result<(), WbgtCliError> {
    let slots = ingest_file(input)?;

    let found = windows::find_windows(&slots, |slot| {
        risk::classify(slot.wbgt_c).level() <= max_tier_level
            && slot.rain_chance_pct < max_rain
            && slot.uv_index < max_uv
    });

    println!("{}", serde_json::to_string_pretty(&found)?);
    Ok(())
}

fn cmd_trend(input: &Path, metric: Metric) -> Result<(), WbgtCliError> {
    let slots = ingest_file(input)?;
    let result = trend::trend_of(&slots, metric);

    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::json!({
            "metric": metric,
            "trend": result,
        }))?
    );
    Ok(())
}

fn cmd_compare(day_a: &Path, day_b: &Path) -> Result<(), WbgtCliError> {
    let feed_a = read_input(day_a)?;
    let feed_b = read_input(day_b)?;

    let report = WeatherAnalyzer::new().compare_json(&feed_a, &feed_b)?;
    println!("{report}");
    Ok(())
}

fn cmd_summarize(input: &Path, prefs: DisplayPreferences) -> Result<(), WbgtCliError> {
    let slots = ingest_file(input)?;
    let latest = slots.last().ok_or(WbgtCliError::NoSlots)?;

    let tier = risk::classify(latest.wbgt_c);
    let band = risk::safety_band(latest.wbgt_c);
    let slot_score = score::score_slot(latest);

    let time = prefs.time_format.format_time(latest.timestamp);
    let temp = prefs.temperature_unit.convert(latest.temperature_c);
    let wind = prefs.wind_unit.convert(latest.wind_speed_ms);

    if prefs.compact_view {
        println!(
            "{time} WBGT {wbgt:.1}{tu} {label} | temp {temp:.1}{tu} | wind {wind:.1} {wu} | score {slot_score}",
            wbgt = prefs.temperature_unit.convert(latest.wbgt_c),
            tu = prefs.temperature_unit.suffix(),
            label = band.label(),
            wu = prefs.wind_unit.suffix(),
        );
        return Ok(());
    }

    println!("Conditions at {time}");
    println!(
        "  WBGT        {:.1}{} ({} / {})",
        prefs.temperature_unit.convert(latest.wbgt_c),
        prefs.temperature_unit.suffix(),
        tier.label(),
        band.label()
    );
    println!(
        "  Temperature {temp:.1}{}",
        prefs.temperature_unit.suffix()
    );
    println!("  Wind        {wind:.1} {}", prefs.wind_unit.suffix());
    println!("  Score       {slot_score}");
    println!();

    let rec = advisor::advise(tier);
    println!("{}: {}", rec.title, rec.message);
    for action in rec.actions {
        println!("  - {action}");
    }
    println!();
    println!("{}", advisor::activity_advice(band));
    Ok(())
}

fn ingest_file(input: &Path) -> Result<Vec<Slot>, WbgtCliError> {
    let feed = read_input(input)?;
    Ok(WeatherAnalyzer::new().ingest(&feed)?)
}

fn read_input(input: &Path) -> Result<String, WbgtCliError> {
    if input.to_string_lossy() == "-" {
        if atty::is(atty::Stream::Stdin) {
            eprintln!("reading feed from stdin (press Ctrl-D to finish)...");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}

#[derive(Debug)]
enum WbgtCliError {
    Io(io::Error),
    Analytics(wbgt_analytics::AnalyticsError),
    Json(serde_json::Error),
    NoSlots,
}

impl From<io::Error> for WbgtCliError {
    fn from(e: io::Error) -> Self {
        WbgtCliError::Io(e)
    }
}

impl From<wbgt_analytics::AnalyticsError> for WbgtCliError {
    fn from(e: wbgt_analytics::AnalyticsError) -> Self {
        WbgtCliError::Analytics(e)
    }
}

impl From<serde_json::Error> for WbgtCliError {
    fn from(e: serde_json::Error) -> Self {
        WbgtCliError::Json(e)
    }
}

#[derive(serde::Serialize)]
struct CliError {
    code: String,
    message: String,
    hint: Option<String>,
}

impl From<WbgtCliError> for CliError {
    fn from(e: WbgtCliError) -> Self {
        match e {
            WbgtCliError::Io(e) => CliError {
                code: "IO_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check file paths and permissions".to_string()),
            },
            WbgtCliError::Analytics(e) => CliError {
                code: "ANALYTICS_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Ensure the feed is a JSON array or data/forecast/observations envelope".to_string()),
            },
            WbgtCliError::Json(e) => CliError {
                code: "JSON_ERROR".to_string(),
                message: e.to_string(),
                hint: Some("Check JSON syntax".to_string()),
            },
            WbgtCliError::NoSlots => CliError {
                code: "NO_SLOTS".to_string(),
                message: "No slots found in input".to_string(),
                hint: Some("Ensure the feed is not empty".to_string()),
            },
        }
    }
}
