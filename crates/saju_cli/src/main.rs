use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use saju_base::{
    EarthlyBranch, HeavenlyStem, KST_MERIDIAN_DEG, day_pillar, hour_pillar,
    month_pillar_with_term, year_pillar,
};
use saju_rs::{BirthRecord, SajuConfig, SajuEngine, SajuError, SajuReport, parse_date, parse_time};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (사주) calendar CLI")]
struct Cli {
    /// JSON configuration file (anchor, month offset, meridian, regions)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart for a birth record
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth clock time (HH:MM)
        #[arg(long)]
        time: String,
        /// Gender: 남/여, male/female, m/f
        #[arg(long, default_value = "남")]
        gender: String,
        /// Birthplace name (Korean or romanized); unknown names apply no correction
        #[arg(long, default_value = "")]
        location: String,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Year pillar for a calendar year
    Year {
        /// Gregorian year
        #[arg(allow_hyphen_values = true)]
        year: i32,
    },
    /// Month pillar and governing solar term for a date
    Month {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Day pillar for a date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Hour pillar for a day stem and clock time
    Hour {
        /// Day stem symbol (갑, 甲 or Gap)
        day_stem: String,
        /// Clock time (HH:MM), already corrected
        time: String,
    },
    /// Ten god of a target stem relative to a reference stem
    TenGod {
        /// Reference (day) stem
        reference: String,
        /// Target stem
        target: String,
    },
    /// Hidden stems of a branch
    Hidden {
        /// Branch symbol (자, 子 or Ja)
        branch: String,
        /// Also show ten gods relative to this day stem
        #[arg(long)]
        day_stem: Option<String>,
    },
    /// List known birthplaces and their clock corrections
    Regions,
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "saju_cli=info,saju_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = match load_engine(cli.config.as_deref()) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };
    let config = engine.config();

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            location,
            json,
        } => {
            let record = match BirthRecord::parse(&date, &time, &gender, &location) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            let report = engine.calculate(&record);
            if json {
                match serde_json::to_string_pretty(&report) {
                    Ok(s) => println!("{s}"),
                    Err(e) => {
                        eprintln!("Failed to serialize report: {e}");
                        std::process::exit(1);
                    }
                }
            } else {
                print_report(&report);
            }
        }

        Commands::Year { year } => {
            let p = year_pillar(year, config);
            println!(
                "{year}: {} ({}) - {} {}",
                p.hangul(),
                p.hanja(),
                p.stem.element().name(),
                p.branch.animal()
            );
        }

        Commands::Month { date } => {
            let date = require_date(&date);
            let (p, term) = month_pillar_with_term(date, config);
            println!(
                "{} ({}) - {} {} ({})",
                p.hangul(),
                p.hanja(),
                term.hangul(),
                term.hanja(),
                term.name()
            );
        }

        Commands::Day { date } => {
            let date = require_date(&date);
            let p = day_pillar(date, config);
            println!(
                "{} ({}) - day master {} {}",
                p.hangul(),
                p.hanja(),
                p.stem,
                p.stem.element().hangul()
            );
        }

        Commands::Hour { day_stem, time } => {
            let stem = require_stem(&day_stem);
            let time = match parse_time(&time) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            let p = hour_pillar(stem, time);
            println!(
                "{} ({}) - slot starts {:02}:00",
                p.hangul(),
                p.hanja(),
                p.branch.slot_start_hour()
            );
        }

        Commands::TenGod { reference, target } => {
            let reference = require_stem(&reference);
            let target = require_stem(&target);
            let god = saju_rs::ten_god(reference, target);
            println!(
                "{} -> {}: {} ({}) {}",
                reference,
                target,
                god.hangul(),
                god.hanja(),
                god.name()
            );
        }

        Commands::Hidden { branch, day_stem } => {
            let branch = require_branch(&branch);
            let day_stem = day_stem.as_deref().map(require_stem);
            println!("{} ({})", branch, branch.animal());
            for (i, &s) in branch.hidden_stems().iter().enumerate() {
                let label = if i == 0 { "main" } else { "sub " };
                match day_stem {
                    Some(d) => println!(
                        "  {label} {} {} - {}",
                        s,
                        s.element().hangul(),
                        saju_rs::ten_god(d, s).hangul()
                    ),
                    None => println!("  {label} {} {}", s, s.element().hangul()),
                }
            }
        }

        Commands::Regions => {
            let meridian = config.standard_meridian_deg;
            if meridian != KST_MERIDIAN_DEG {
                println!("Standard meridian: {meridian:.2} deg");
            }
            for r in config.regions.regions() {
                println!(
                    "{:<6} {:<12} {:>8.2} deg {:>+4} min",
                    r.name,
                    r.aliases.join("/"),
                    r.longitude_deg,
                    r.offset_minutes(meridian)
                );
            }
        }
    }
}

fn load_engine(path: Option<&Path>) -> Result<SajuEngine, SajuError> {
    let Some(path) = path else {
        return Ok(SajuEngine::default());
    };
    let text = std::fs::read_to_string(path)
        .map_err(|e| SajuError::Config(format!("{}: {e}", path.display())))?;
    let config: SajuConfig = serde_json::from_str(&text)
        .map_err(|e| SajuError::Config(format!("{}: {e}", path.display())))?;
    tracing::info!(path = %path.display(), "loaded configuration");
    SajuEngine::new(config)
}

fn print_report(report: &SajuReport) {
    println!("Birth:     {} {} ({})", report.birth_date, report.birth_time, report.gender);
    if report.birth_place.is_empty() {
        println!("Corrected: {} (no location)", report.corrected_time);
    } else {
        println!(
            "Corrected: {} ({}, {:+} min)",
            report.corrected_time, report.birth_place, report.time_offset_minutes
        );
    }
    if report.day_shift != 0 {
        println!("           correction crosses midnight ({:+} day)", report.day_shift);
    }
    println!();
    println!("        Stem      Branch    Stem god  Branch god");
    for p in report.four_pillars.entries() {
        println!(
            "{:<6}  {:<8}  {:<8}  {:<8}  {}",
            p.kind.hangul(),
            p.pillar.stem.to_string(),
            p.pillar.branch.to_string(),
            p.stem_ten_god.hangul(),
            p.branch_ten_god.hangul()
        );
    }
    println!();
    let b = &report.element_balance;
    println!(
        "Elements:  목 {}  화 {}  토 {}  금 {}  수 {}",
        b.wood, b.fire, b.earth, b.metal, b.water
    );
    println!(
        "Day master: {} {} {}",
        report.summary.day_stem, report.summary.five_element, report.analysis.personality
    );
}

fn require_date(s: &str) -> chrono::NaiveDate {
    match parse_date(s) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn require_stem(s: &str) -> HeavenlyStem {
    match HeavenlyStem::from_symbol(s) {
        Some(stem) => stem,
        None => {
            eprintln!("Unknown stem: {s}. Use 갑..계, 甲..癸 or Gap..Gye.");
            std::process::exit(1);
        }
    }
}

fn require_branch(s: &str) -> EarthlyBranch {
    match EarthlyBranch::from_symbol(s) {
        Some(branch) => branch,
        None => {
            eprintln!("Unknown branch: {s}. Use 자..해, 子..亥 or Ja..Hae.");
            std::process::exit(1);
        }
    }
}
