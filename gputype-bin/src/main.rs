//! Command-line interface for gputype
//!
//! Exits with the primary GPU classification:
//! `1` NVIDIA, `2` AMD, `-2` unknown, `-1` detection failed.

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use gputype::{DetectionReport, DetectorConfig, DeviceInventory, GraphicsCardType, ScanStrategy};
use log::{debug, error, warn, Level, LevelFilter};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::process;

const DEFAULT_STRATEGY: Strategy = Strategy::Full;
const DEFAULT_FORMAT: OutputFormat = OutputFormat::None;

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(name = "gputype")]
#[command(version = gputype::VERSION)]
#[command(about = "Detects the primary GPU vendor and reports it as the exit code", long_about = None)]
struct Cli {
    /// How enumerated adapters are walked
    #[arg(long, value_enum, env = "GPUTYPE_STRATEGY", default_value_t = DEFAULT_STRATEGY)]
    strategy: Strategy,

    /// Diagnostic output on stdout
    #[arg(long, value_enum, env = "GPUTYPE_FORMAT", default_value_t = DEFAULT_FORMAT)]
    format: OutputFormat,

    /// Print every enumerated video controller
    #[arg(long)]
    list: bool,

    /// Ignore "Microsoft Basic Display Adapter" entries
    #[arg(long)]
    skip_basic_display: bool,

    /// Log verbosity on stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            strategy: DEFAULT_STRATEGY,
            format: DEFAULT_FORMAT,
            list: false,
            skip_basic_display: false,
            verbose: 0,
        }
    }
}

impl Cli {
    fn detector_config(&self) -> DetectorConfig {
        DetectorConfig {
            strategy: match self.strategy {
                Strategy::Full => ScanStrategy::FullScan,
                Strategy::FirstMatch => ScanStrategy::FirstMatch,
            },
            skip_basic_display: self.skip_basic_display,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Full,
    FirstMatch,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    None,
    Text,
    Json,
}

/// Parse arguments without ever exiting: a clap usage error would exit
/// with 2, which launchers read as AMD.
fn parse_cli<I, T>(args: I) -> (Cli, Option<clap::Error>)
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => (cli, None),
        Err(e) => {
            use clap::error::ErrorKind;
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                let _ = e.print();
            }
            let cli = Cli::try_parse_from(["gputype"]).unwrap_or_default();
            (cli, Some(e))
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .try_init();
}

fn write_report<W: Write>(out: &mut W, report: &DetectionReport, cli: &Cli) -> anyhow::Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let json = report.to_json().context("serializing report")?;
            writeln!(out, "{}", json)?;
            return Ok(());
        }
        OutputFormat::Text => {
            writeln!(out, "{}", report.classification)?;
            if !report.classification.is_detected() {
                match &report.error {
                    Some(err) => writeln!(out, "error: {}", err)?,
                    None => writeln!(out, "no NVIDIA or AMD adapter found")?,
                }
            }
        }
        OutputFormat::None => {}
    }

    if cli.list {
        for (index, device) in report.devices.iter().enumerate() {
            let vendor = device.vendor();
            writeln!(
                out,
                "{}{}: {} [{}] {}",
                if vendor.is_recognized() { "*" } else { " " },
                index,
                device.adapter_compatibility.as_deref().unwrap_or("<none>"),
                vendor,
                device.name.as_deref().unwrap_or("")
            )?;
        }
    }

    out.flush().context("flushing output")?;
    Ok(())
}

fn run<I, T>(args: I, inventory: &dyn DeviceInventory) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let (cli, parse_error) = parse_cli(args);
    init_logging(cli.verbose);

    if let Some(e) = parse_error {
        debug!("Ignoring arguments: {}", e.kind());
    }

    let config = cli.detector_config();
    let report = gputype::detect_report(inventory, &config);

    let stdout = io::stdout();
    if let Err(e) = write_report(&mut stdout.lock(), &report, &cli) {
        warn!("Failed to write report: {:#}", e);
    }

    report.exit_code()
}

/// `run` behind the catch-all boundary: a panic anywhere in detection
/// becomes the ERROR code.
fn guarded_run<I, T>(args: I, inventory: &dyn DeviceInventory) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    panic::catch_unwind(AssertUnwindSafe(|| run(args, inventory)))
        .unwrap_or(GraphicsCardType::ERROR.exit_code())
}

/// Log a panic, or hand back the stderr line when no logger is installed yet
fn panic_report(message: impl std::fmt::Display, logger_ready: bool) -> Option<String> {
    if logger_ready {
        error!("Detection aborted: {}", message);
        None
    } else {
        Some(format!("gputype: detection aborted: {}", message))
    }
}

fn main() {
    panic::set_hook(Box::new(|info| {
        if let Some(line) = panic_report(info, log::log_enabled!(Level::Error)) {
            eprintln!("{}", line);
        }
    }));

    let inventory = gputype::system_inventory();
    let code = guarded_run(env::args_os(), inventory.as_ref());
    process::exit(code);
}
