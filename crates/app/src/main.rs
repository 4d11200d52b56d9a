use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use log::{debug, info};
use quiz_core::catalog::builtin_bank;
use quiz_core::model::{OptionOrder, QuestionBank, QuizSettings};
use ui::{App, UiApp, build_app_context};

const SHUFFLE_ENV: &str = "QUIZ_SHUFFLE";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    UnknownArg(String),
    InvalidShuffleEnv { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidShuffleEnv { raw } => {
                write!(f, "invalid {SHUFFLE_ENV} value: {raw}")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    settings: QuizSettings,
}

impl UiApp for DesktopApp {
    fn bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn settings(&self) -> QuizSettings {
        self.settings
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Args {
    option_order: OptionOrder,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--shuffle | --no-shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --shuffle");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {SHUFFLE_ENV}  1/true/yes/on or 0/false/no/off");
    eprintln!("  RUST_LOG      log filter, e.g. info or services=debug");
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Args {
    /// Environment sets the default; command-line flags win.
    fn parse(
        args: impl IntoIterator<Item = String>,
        shuffle_env: Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut option_order = match shuffle_env {
            None => OptionOrder::default(),
            Some(raw) => parse_flag(&raw)
                .map(OptionOrder::from_shuffle)
                .ok_or(ArgsError::InvalidShuffleEnv { raw })?,
        };

        for arg in args {
            match arg.as_str() {
                "--shuffle" => option_order = OptionOrder::Shuffled,
                "--no-shuffle" => option_order = OptionOrder::Fixed,
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self { option_order }))
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = Args::parse(std::env::args().skip(1), std::env::var(SHUFFLE_ENV).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };
    debug!("parsed arguments: {args:?}");

    let bank = Arc::new(builtin_bank()?);
    let settings = QuizSettings::new(args.option_order);
    info!(
        "launching quiz with {} questions, options {:?}",
        bank.len(),
        settings.option_order()
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { bank, settings });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
