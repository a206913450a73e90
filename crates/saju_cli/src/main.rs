use chrono::{Datelike, Local};
use clap::{Parser, Subcommand, ValueEnum};
use saju_base::{
    ALL_ELEMENTS, Chart, Gender, LifePhaseTimeline, Pillar, Stem, annual_pillars, calculate_chart,
    day_pillar, find_active_phase,
};
use saju_time::{ALL_SOLAR_TERMS, CivilDate, LunarDate, lunar_date_of};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillar chart CLI")]
struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = Format::Text, env = "SAJU_FORMAT")]
    format: Format,
    /// Log at debug level (overrides SAJU_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Four pillars, element counts and yin/yang balance for a birth date
    Chart {
        /// Birth date (YYYY-MM-DD)
        date: CivilDate,
        /// Birth hour 0-23; omit when unknown
        #[arg(long)]
        hour: Option<u32>,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: Gender,
    },
    /// Ten-year life phases for a birth date
    Phases {
        /// Birth date (YYYY-MM-DD)
        date: CivilDate,
        /// male or female
        #[arg(long, default_value = "male")]
        gender: Gender,
        /// Highlight the phase active at this age
        #[arg(long)]
        age: Option<u32>,
    },
    /// Convert a Gregorian date to the lunar calendar
    Lunar {
        /// Date (YYYY-MM-DD)
        date: CivilDate,
    },
    /// Annual pillar for a year, or a run of years
    YearPillar {
        /// Gregorian year
        #[arg(allow_negative_numbers = true)]
        year: i32,
        /// Last year of the run (inclusive)
        #[arg(long)]
        to: Option<i32>,
    },
    /// Approximate solar-term dates for a year
    Terms {
        /// Gregorian year
        year: i32,
    },
    /// Today's day pillar, optionally against a birth chart
    Today {
        /// Birth date (YYYY-MM-DD) whose day master is compared with today
        #[arg(long)]
        birth: Option<CivilDate>,
    },
}

#[derive(Serialize)]
struct ChartReport<'a> {
    chart: &'a Chart,
    day_master: Stem,
    lunar: Option<LunarDate>,
}

#[derive(Serialize)]
struct TodayReport {
    date: CivilDate,
    day: Pillar,
    relation: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Chart { date, hour, gender } => {
            let chart = require_chart(&date, hour, gender);
            let lunar = lunar_date_of(&date).ok();
            match cli.format {
                Format::Json => print_json(&ChartReport {
                    chart: &chart,
                    day_master: chart.day_master(),
                    lunar,
                }),
                Format::Text => print_chart(&chart, lunar),
            }
        }

        Commands::Phases { date, gender, age } => {
            let chart = require_chart(&date, None, gender);
            let timeline = chart.life_phases().unwrap_or_else(|e| {
                eprintln!("Failed to compute life phases: {e}");
                std::process::exit(1);
            });
            match cli.format {
                Format::Json => print_json(&timeline),
                Format::Text => print_phases(&timeline, age),
            }
        }

        Commands::Lunar { date } => {
            let lunar = lunar_date_of(&date).unwrap_or_else(|e| {
                eprintln!("Lunar conversion failed: {e}");
                std::process::exit(1);
            });
            match cli.format {
                Format::Json => print_json(&lunar),
                Format::Text => {
                    let leap = if lunar.is_leap_month { " (leap month)" } else { "" };
                    println!("{date} -> lunar {lunar}{leap}");
                }
            }
        }

        Commands::YearPillar { year, to } => {
            let to = to.unwrap_or(year);
            if to < year {
                eprintln!("--to ({to}) must not precede the start year ({year})");
                std::process::exit(1);
            }
            let run = annual_pillars(year, to);
            match cli.format {
                Format::Json => print_json(&run),
                Format::Text => {
                    for (y, p) in &run {
                        println!("{y}: {p} {} ({})", p.korean_name(), p.branch.animal());
                    }
                }
            }
        }

        Commands::Terms { year } => {
            let terms: Vec<_> = ALL_SOLAR_TERMS
                .iter()
                .map(|t| {
                    let (month, day) = t.approximate_date();
                    (*t, month, day)
                })
                .collect();
            match cli.format {
                Format::Json => print_json(&terms),
                Format::Text => {
                    for (t, month, day) in &terms {
                        let marker = if t.is_major() { "*" } else { " " };
                        println!(
                            "{marker} {year}-{month:02}-{day:02}  {:<20} {}",
                            t.name(),
                            t.korean_name()
                        );
                    }
                }
            }
        }

        Commands::Today { birth } => {
            let now = Local::now().date_naive();
            let today = CivilDate::new(now.year(), now.month(), now.day()).unwrap_or_else(|e| {
                eprintln!("Invalid local date: {e}");
                std::process::exit(1);
            });
            let day = day_pillar(&today);
            let relation = birth.map(|b| {
                let master = day_pillar(&b).stem;
                format!(
                    "{} {} {}",
                    master.element().name(),
                    master.element().relation_to(day.stem.element()).name(),
                    day.stem.element().name()
                )
            });
            match cli.format {
                Format::Json => print_json(&TodayReport {
                    date: today,
                    day,
                    relation,
                }),
                Format::Text => {
                    println!("{today}: {day} {}", day.korean_name());
                    if let Some(r) = relation {
                        println!("Day master vs today: {r}");
                    }
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SAJU_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn require_chart(date: &CivilDate, hour: Option<u32>, gender: Gender) -> Chart {
    calculate_chart(date.year(), date.month(), date.day(), hour, gender).unwrap_or_else(|e| {
        eprintln!("Failed to compute chart: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    let out = serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        eprintln!("Failed to serialize output: {e}");
        std::process::exit(1);
    });
    println!("{out}");
}

fn pillar_line(label: &str, pillar: Option<&Pillar>) -> String {
    match pillar {
        Some(p) => format!(
            "{label:<6} {p}  {} [{}/{}]",
            p.korean_name(),
            p.stem.element().name(),
            p.branch.element().name()
        ),
        None => format!("{label:<6} unknown"),
    }
}

fn print_chart(chart: &Chart, lunar: Option<LunarDate>) {
    match lunar {
        Some(l) => println!("Birth: {} (lunar {l})", chart.birth_date),
        None => println!("Birth: {}", chart.birth_date),
    }
    println!("{}", pillar_line("Year", Some(&chart.year)));
    println!("{}", pillar_line("Month", Some(&chart.month)));
    println!("{}", pillar_line("Day", Some(&chart.day)));
    println!("{}", pillar_line("Hour", chart.hour.as_ref()));

    let master = chart.day_master();
    println!(
        "Day master: {} {} ({} {})",
        master.name(),
        master.glyph(),
        master.polarity().name(),
        master.element().name()
    );

    let counts: Vec<String> = ALL_ELEMENTS
        .iter()
        .map(|&e| format!("{} {}", e.name(), chart.elements.count(e)))
        .collect();
    println!("Elements: {}", counts.join("  "));
    let missing = chart.elements.missing();
    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|e| e.name()).collect();
        println!("Missing: {}", names.join(", "));
    }
    println!("Yin/Yang: {} / {}", chart.polarity.yin, chart.polarity.yang);
}

fn print_phases(timeline: &LifePhaseTimeline, age: Option<u32>) {
    println!(
        "Direction: {}  ({} days to term, start age {})",
        timeline.direction.name(),
        timeline.boundary_days,
        timeline.start_age
    );
    let active = age.and_then(|a| find_active_phase(&timeline.phases, a));
    for p in &timeline.phases {
        let marker = if active.is_some_and(|a| a.order == p.order) { ">" } else { " " };
        println!(
            "{marker} {:>2}  {}  age {:>3}-{:<3} {}-{}",
            p.order,
            p.pillar(),
            p.start_age,
            p.end_age,
            p.start_year,
            p.end_year
        );
    }
    if let (Some(a), None) = (age, active) {
        println!("No phase active at age {a}");
    }
}
