use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use destiny_config::{CONFIG_ENV, DestinyConfig, LoggingConfig, load_config, resolve_config_path};
use destiny_numerology::{BirthDate, Gender, LoshuGrid, NumerologyReport, digit_reduce, digit_sum};
use destiny_prompt::{PromptContext, PromptKind};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "destiny", about = "Destiny numerology CLI", version)]
struct Cli {
    /// Config file (default: $DESTINY_CONFIG, then ./destiny.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct DateArgs {
    /// Day of birth, as stored on the profile (e.g. 05)
    #[arg(long)]
    day: String,
    /// Month of birth
    #[arg(long)]
    month: String,
    /// Year of birth
    #[arg(long)]
    year: String,
    /// Reject dates that do not exist on the calendar
    #[arg(long)]
    strict: bool,
}

impl DateArgs {
    /// The date as entered, for display in prompts.
    fn as_entered(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Digit sum and single-digit reduction of a number
    Reduce {
        /// Non-negative integer
        n: u64,
    },
    /// Full numerology report for a date of birth
    Profile {
        #[command(flatten)]
        date: DateArgs,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Loshu grid and missing numbers for a date of birth
    Grid {
        #[command(flatten)]
        date: DateArgs,
    },
    /// Fill the active prompt template with a chart
    Prompt {
        /// report_gen or chat_consultant
        #[arg(long, default_value = "report_gen")]
        kind: PromptKind,
        /// Display name substituted for {{name}}
        #[arg(long)]
        name: String,
        #[command(flatten)]
        date: DateArgs,
        /// male or female
        #[arg(long)]
        gender: Gender,
        /// Question substituted for {{question}}
        #[arg(long)]
        question: Option<String>,
    },
    /// List configured prompt versions
    Prompts {
        /// report_gen or chat_consultant
        #[arg(long)]
        kind: PromptKind,
    },
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load(explicit: Option<&Path>) -> Result<DestinyConfig> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let env_value = std::env::var(CONFIG_ENV).ok();
    let path = resolve_config_path(explicit, env_value.as_deref(), &cwd);
    load_config(path.as_deref()).context("failed to load configuration")
}

fn birth_date(args: &DateArgs, config: &DestinyConfig) -> Result<BirthDate> {
    let date = BirthDate::from_profile_fields(&args.day, &args.month, &args.year)?;
    if args.strict || config.profile.strict_dates {
        BirthDate::validated(date.day, date.month, date.year)
            .with_context(|| format!("{date} is not a calendar date"))?;
    } else if !date.is_calendar_date() {
        tracing::warn!(%date, "computing on a date that does not exist on the calendar");
    }
    Ok(date)
}

fn print_report(date: &BirthDate, gender: Gender, report: &NumerologyReport) {
    println!("Date: {date} ({gender})");
    println!("Moolank: {}", report.moolank);
    println!("Bhagyank: {}", report.bhagyank);
    println!("Kua: {}", report.kua);
    println!("Missing numbers: {}", display_missing(&report.missing_numbers));
    println!("Loshu grid:");
    println!("{}", report.loshu_grid.render());
}

fn display_missing(missing: &[u8]) -> String {
    if missing.is_empty() {
        return "none".to_string();
    }
    missing.iter().map(u8::to_string).collect::<Vec<_>>().join(", ")
}

fn run(cli: Cli, config: &DestinyConfig) -> Result<()> {
    match cli.command {
        Commands::Reduce { n } => {
            println!("Digit sum: {}", digit_sum(n));
            println!("Reduced: {}", digit_reduce(n));
        }

        Commands::Profile { date, gender, json } => {
            let date = birth_date(&date, config)?;
            let report = NumerologyReport::compute(&date, gender);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&date, gender, &report);
            }
        }

        Commands::Grid { date } => {
            let date = birth_date(&date, config)?;
            let grid = LoshuGrid::for_date(&date);
            println!("{}", grid.render());
            println!("Missing numbers: {}", display_missing(&grid.missing_numbers()));
        }

        Commands::Prompt {
            kind,
            name,
            date,
            gender,
            question,
        } => {
            let registry = config.prompt_registry()?;
            let dob = date.as_entered();
            let date = birth_date(&date, config)?;
            let report = NumerologyReport::compute(&date, gender);
            let mut ctx = PromptContext::new(&name)
                .with_birth_date(date)
                .with_dob(&dob)
                .with_report(&report);
            if kind == PromptKind::ChatConsultant {
                ctx = ctx.with_history(&[]);
            }
            if let Some(q) = question.as_deref() {
                ctx = ctx.with_question(q);
            }
            println!("{}", ctx.render(registry.template(kind)));
        }

        Commands::Prompts { kind } => {
            let registry = config.prompt_registry()?;
            let mut any = false;
            for p in registry.versions(kind) {
                any = true;
                let marker = if p.is_active { "*" } else { " " };
                println!("{marker} {} ({} chars)", p.version, p.content.chars().count());
            }
            if !any {
                println!("No {kind} prompts configured; the built-in default is used.");
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.logging);

    match run(cli, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
