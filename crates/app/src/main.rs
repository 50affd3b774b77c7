use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, QuizLoopService, RankService, build_catalog};
use storage::{RankTable, StateDirectory};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loop: Arc<QuizLoopService>,
    ranks_are_fallback: bool,
}

impl UiApp for DesktopApp {
    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    fn ranks_are_fallback(&self) -> bool {
        self.ranks_are_fallback
    }
}

struct Args {
    csv_path: Option<PathBuf>,
    ranks_url: String,
    offline: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--csv <path>] [--ranks-url <url>] [--offline]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --csv        bundled state/capital table");
    eprintln!("  --ranks-url  {}", services::DEFAULT_POPULATION_URL);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_CSV, QUIZ_RANKS_URL");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut csv_path = std::env::var("QUIZ_CSV").ok().map(PathBuf::from);
        let mut ranks_url = std::env::var("QUIZ_RANKS_URL")
            .unwrap_or_else(|_| services::DEFAULT_POPULATION_URL.to_string());
        let mut offline = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--csv" => {
                    let value = require_value(args, "--csv")?;
                    csv_path = Some(PathBuf::from(value));
                }
                "--ranks-url" => {
                    ranks_url = require_value(args, "--ranks-url")?;
                }
                "--offline" => {
                    offline = true;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            csv_path,
            ranks_url,
            offline,
        })
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse(&mut std::env::args().skip(1))?;

    let directory = match &args.csv_path {
        Some(path) => StateDirectory::from_path(path)?,
        None => StateDirectory::bundled(),
    };

    let ranks = if args.offline {
        log::info!("offline mode, using the built-in rank table");
        RankTable::fallback()
    } else {
        RankService::with_url(&args.ranks_url)
            .load(&directory)
            .await
    };
    let ranks_are_fallback = ranks.is_fallback();

    let catalog = Arc::new(build_catalog(&directory, &ranks)?);
    let quiz_loop = Arc::new(QuizLoopService::new(Clock::default_clock(), catalog));

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loop,
        ranks_are_fallback,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("US State Capitals Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
