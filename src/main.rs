// SPDX-License-Identifier: MPL-2.0
use iced_slides::app::{self, Flags};
use iced_slides::config::{self, paths};
use iced_slides::deck;
use iced_slides::navigation::ControllerSettings;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const HELP: &str = "\
iced_slides - present a slide deck

USAGE:
  iced_slides [OPTIONS] <DECK.toml>

OPTIONS:
  --config-dir DIR     Read settings.toml from DIR
  --no-auto-advance    Never advance slides automatically
  -h, --help           Print this help

ENVIRONMENT:
  ICED_SLIDES_CONFIG_DIR   Config directory (overridden by --config-dir)
  RUST_LOG                 Log filter, e.g. iced_slides=debug
";

struct Args {
    deck: PathBuf,
    config_dir: Option<String>,
    no_auto_advance: bool,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let no_auto_advance = args.contains("--no-auto-advance");
    let deck = args.free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    Ok(Some(Args {
        deck,
        config_dir,
        no_auto_advance,
    }))
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer())
        .init();
}

fn main() -> iced::Result {
    init_tracing();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(args.config_dir);
    let (config, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("warning: {warning}");
    }

    let deck = match deck::load_from_path(&args.deck) {
        Ok(deck) => deck,
        Err(err) => {
            tracing::error!(
                path = %args.deck.display(),
                kind = err.kind(),
                %err,
                "cannot open deck"
            );
            eprintln!("error: cannot open {}: {err}", args.deck.display());
            std::process::exit(1);
        }
    };

    let mut settings = ControllerSettings::from_config(&config.navigation);
    if args.no_auto_advance {
        settings = settings.without_auto_advance();
    }

    tracing::info!(
        title = deck.title(),
        slides = deck.slide_count(),
        "presenting deck"
    );

    app::run(Flags {
        deck,
        settings,
        window: config.window,
    })
}
