//! Analyze Binary
//!
//! Estimates hero's equity on a partially known board and explains the
//! board texture, outs, and draws.

use clap::Parser;
use colored::Colorize;
use oddsmith::analysis::Analysis;
use oddsmith::analysis::Report;
use oddsmith::cards::card::Card;
use oddsmith::simulation::Scenario;
use oddsmith::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, required = true, help = "hero's two hole cards, e.g. \"Ah Kd\"")]
    hero: String,
    #[arg(long, default_value = "", help = "known board cards, zero to five")]
    board: String,
    #[arg(long, default_value = "", help = "cards known to be out of play")]
    dead: String,
    #[arg(long, short, default_value_t = 1)]
    opponents: usize,
    #[arg(long, short, help = "simulation iterations")]
    iterations: Option<usize>,
    #[arg(long, help = "JSON file of tuning overrides")]
    config: Option<std::path::PathBuf>,
    #[arg(long, help = "print the report as JSON")]
    json: bool,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    oddsmith::log(match args.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    });
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(iterations) = args.iterations {
        config.iterations = iterations;
    }
    let hero = Card::parse(&args.hero)?;
    let board = Card::parse(&args.board)?;
    let dead = Card::parse(&args.dead)?;
    let scenario = Scenario::new(&hero, &board, &dead, args.opponents)?;
    let report = Analysis::new(config).run(&scenario);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display(&scenario, &report);
    }
    Ok(())
}

fn display(scenario: &Scenario, report: &Report) {
    println!("{}", scenario.to_string().bold());
    println!(
        "{} {}  {} {}  {} {}",
        "win".green(),
        format!("{:.2}%", report.win).green().bold(),
        "tie".yellow(),
        format!("{:.2}%", report.tie).yellow(),
        "loss".red(),
        format!("{:.2}%", report.loss).red(),
    );
    let hottest = report
        .heatmap
        .iter()
        .filter(|(_, equity)| **equity > report.win)
        .map(|(card, equity)| format!("{}:{:.0}", card, equity))
        .collect::<Vec<String>>();
    if !hottest.is_empty() {
        println!("{} {}", "helps".cyan(), hottest.join(" "));
    }
    print!("{}", report);
}
