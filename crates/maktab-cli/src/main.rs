use chrono::Datelike;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use maktab_locale::{
    format_date, format_datetime, format_number, format_time, month_name, parse_number,
    to_persian_digits, to_western_digits, weekday_name,
};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "maktab-cli")]
#[command(about = "Maktab CLI - Persian locale conversions for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert digits in text to Persian (or back with --western)
    Digits {
        /// Text to convert (prompted for when omitted)
        text: Option<String>,

        /// Convert Persian digits back to Western instead
        #[arg(short = 'w', long)]
        western: bool,
    },
    /// Format a number with thousands grouping and Persian digits
    Number {
        /// Numeric value to format
        value: Option<String>,
    },
    /// Parse a locale numeral into a decimal value
    Parse {
        /// Numeral text, Persian or Western digits
        text: Option<String>,
    },
    /// Render an ISO-8601 date as YYYY/MM/DD with Persian digits
    Date {
        /// ISO-8601 date or date-time string
        value: Option<String>,
    },
    /// Localize an HH:MM[:SS] time string
    Time {
        /// Time string
        value: Option<String>,
    },
    /// Render an ISO-8601 date-time as date - time with Persian digits
    Datetime {
        /// ISO-8601 date or date-time string
        value: Option<String>,
    },
    /// Show today's date in Dari
    Today,
    /// Look up a message in the Dari catalog
    Message {
        /// Dot-separated message key, e.g. auth.loginTitle
        key: Option<String>,

        /// Placeholder value as name=value (repeatable)
        #[arg(short = 'p', long = "param", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
    },
}

fn main() {
    dotenv().ok();

    init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Digits { text, western } => handle_digits(text, western),
        Commands::Number { value } => handle_number(value),
        Commands::Parse { text } => handle_parse(text),
        Commands::Date { value } => handle_date(value),
        Commands::Time { value } => handle_time(value),
        Commands::Datetime { value } => handle_datetime(value),
        Commands::Today => handle_today(),
        Commands::Message { key, params } => handle_message(key, params),
    }
}

fn init_logging() {
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "{}={},maktab_locale={}",
                    env!("CARGO_CRATE_NAME"),
                    log_level,
                    log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn prompt_text(prompt: &str) -> String {
    Input::new()
        .with_prompt(prompt)
        .interact_text()
        .expect("Failed to read input")
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, value)) => Ok((name.to_string(), value.to_string())),
        None => Err(format!("expected name=value, got: {}", s)),
    }
}

fn handle_digits(text: Option<String>, western: bool) {
    let text = text.unwrap_or_else(|| prompt_text("Text"));
    let converted = if western {
        to_western_digits(&text)
    } else {
        to_persian_digits(&text)
    };
    println!("{}", converted);
}

fn handle_number(value: Option<String>) {
    let value = value.unwrap_or_else(|| prompt_text("Number"));
    println!("{}", format_number(&value));
}

fn handle_parse(text: Option<String>) {
    let text = text.unwrap_or_else(|| prompt_text("Numeral"));
    let value = parse_number(&text);
    if value.is_nan() {
        eprintln!("❌ Not a valid numeral: {}", text);
        std::process::exit(1);
    }
    println!("{}", value);
}

fn handle_date(value: Option<String>) {
    let value = value.unwrap_or_else(|| prompt_text("Date (ISO-8601)"));
    let formatted = format_date(value.as_str());
    if formatted.is_empty() {
        eprintln!("❌ Could not parse date: {}", value);
        std::process::exit(1);
    }
    println!("{}", formatted);
}

fn handle_time(value: Option<String>) {
    let value = value.unwrap_or_else(|| prompt_text("Time (HH:MM[:SS])"));
    println!("{}", format_time(&value));
}

fn handle_datetime(value: Option<String>) {
    let value = value.unwrap_or_else(|| prompt_text("Date-time (ISO-8601)"));
    let formatted = format_datetime(value.as_str());
    if formatted.is_empty() {
        eprintln!("❌ Could not parse date-time: {}", value);
        std::process::exit(1);
    }
    println!("{}", formatted);
}

fn handle_today() {
    let today = chrono::Local::now().date_naive();
    println!(
        "{} {} {} {}",
        weekday_name(today),
        to_persian_digits(today.day()),
        month_name(today),
        to_persian_digits(today.year())
    );
    println!("{}", format_date(today));
}

fn handle_message(key: Option<String>, params: Vec<(String, String)>) {
    let key = key.unwrap_or_else(|| prompt_text("Message key"));
    let params: Vec<(&str, &str)> = params
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    println!("{}", maktab_i18n::translate_with(&key, &params));
}
