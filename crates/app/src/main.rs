use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use flashcard_core::{DEFAULT_FLIP_DURATION_MS, Deck, DeckController, builtin};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use ui::vm::Locale;
use ui::{App, UiApp, build_app_context};

const LANG_ENV: &str = "FLASHCARDS_LANG";
const FLIP_MS_ENV: &str = "FLASHCARDS_FLIP_MS";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidLang { raw: String },
    InvalidFlipMs { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidLang { raw } => write!(f, "invalid --lang value: {raw}"),
            ArgsError::InvalidFlipMs { raw } => write!(f, "invalid --flip-ms value: {raw}"),
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
    deck: Deck,
    locale: Locale,
    flip_duration_ms: u32,
}

impl UiApp for DesktopApp {
    fn deck(&self) -> Deck {
        self.deck.clone()
    }

    fn locale(&self) -> Locale {
        self.locale
    }

    fn flip_duration_ms(&self) -> u32 {
        self.flip_duration_ms
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    locale: Locale,
    flip_duration_ms: u32,
}

#[derive(Debug, Default)]
struct EnvDefaults {
    lang: Option<String>,
    flip_ms: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            lang: std::env::var(LANG_ENV).ok(),
            flip_ms: std::env::var(FLIP_MS_ENV).ok(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--lang <en|ru>] [--flip-ms <millis>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --lang en");
    eprintln!("  --flip-ms {DEFAULT_FLIP_DURATION_MS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {LANG_ENV}, {FLIP_MS_ENV}, RUST_LOG");
}

impl Args {
    /// Environment values seed the defaults; flags override them. A bad
    /// environment value is logged and ignored, a bad flag is an error.
    fn parse(
        env: EnvDefaults,
        args: &mut impl Iterator<Item = String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut locale = env
            .lang
            .and_then(|raw| {
                raw.parse::<Locale>()
                    .inspect_err(|err| warn!(%err, "ignoring {LANG_ENV}"))
                    .ok()
            })
            .unwrap_or_default();
        let mut flip_duration_ms = env
            .flip_ms
            .and_then(|raw| {
                parse_flip_ms(raw)
                    .inspect_err(|err| warn!(%err, "ignoring {FLIP_MS_ENV}"))
                    .ok()
            })
            .unwrap_or(DEFAULT_FLIP_DURATION_MS);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => {
                    let value = require_value(args, "--lang")?;
                    locale = value
                        .parse()
                        .map_err(|_| ArgsError::InvalidLang { raw: value.clone() })?;
                }
                "--flip-ms" => {
                    let value = require_value(args, "--flip-ms")?;
                    flip_duration_ms = parse_flip_ms(value)?;
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            locale,
            flip_duration_ms,
        }))
    }
}

fn parse_flip_ms(raw: String) -> Result<u32, ArgsError> {
    match raw.trim().parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ArgsError::InvalidFlipMs { raw }),
    }
}

fn load_deck() -> Result<Deck, flashcard_core::Error> {
    let (deck, _) = DeckController::initialize(builtin::english_russian_cards())?;
    Ok(deck)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let Some(parsed) = Args::parse(EnvDefaults::from_env(), &mut argv).inspect_err(|_| {
        print_usage();
    })?
    else {
        print_usage();
        return Ok(());
    };

    // An empty deck has no first card to show, so it must fail before launch.
    let deck = load_deck()?;
    info!(
        cards = deck.len(),
        locale = %parsed.locale,
        flip_ms = parsed.flip_duration_ms,
        "starting flashcards"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        deck,
        locale: parsed.locale,
        flip_duration_ms: parsed.flip_duration_ms,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Flashcards")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn main() {
    init_tracing();
    if let Err(err) = run() {
        error!(%err, "flashcards failed to start");
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(env: EnvDefaults, args: &[&str]) -> Result<Option<Args>, ArgsError> {
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(env, &mut iter)
    }

    #[test]
    fn defaults_to_english_and_reference_duration() {
        let args = parse(EnvDefaults::default(), &[]).unwrap().unwrap();
        assert_eq!(
            args,
            Args {
                locale: Locale::English,
                flip_duration_ms: DEFAULT_FLIP_DURATION_MS,
            }
        );
    }

    #[test]
    fn flags_override_environment() {
        let env = EnvDefaults {
            lang: Some("en".into()),
            flip_ms: Some("250".into()),
        };
        let args = parse(env, &["--lang", "ru", "--flip-ms", "600"]).unwrap().unwrap();
        assert_eq!(args.locale, Locale::Russian);
        assert_eq!(args.flip_duration_ms, 600);
    }

    #[test]
    fn invalid_environment_values_fall_back() {
        let env = EnvDefaults {
            lang: Some("klingon".into()),
            flip_ms: Some("0".into()),
        };
        let args = parse(env, &[]).unwrap().unwrap();
        assert_eq!(args.locale, Locale::English);
        assert_eq!(args.flip_duration_ms, DEFAULT_FLIP_DURATION_MS);
    }

    #[test]
    fn rejects_bad_flags() {
        assert!(matches!(
            parse(EnvDefaults::default(), &["--flip-ms", "0"]),
            Err(ArgsError::InvalidFlipMs { .. })
        ));
        assert!(matches!(
            parse(EnvDefaults::default(), &["--lang"]),
            Err(ArgsError::MissingValue { flag: "--lang" })
        ));
        assert!(matches!(
            parse(EnvDefaults::default(), &["--verbose"]),
            Err(ArgsError::UnknownArg(_))
        ));
    }

    #[test]
    fn help_stops_parsing() {
        assert!(parse(EnvDefaults::default(), &["--help"]).unwrap().is_none());
    }

    #[test]
    fn builtin_deck_loads() {
        assert_eq!(load_deck().unwrap().len(), 9);
    }
}
