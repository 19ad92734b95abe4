use clap::{Arg, clap_app};
use colored::Colorize;
use rayon::prelude::*;

use partigen::program_flow::OrExit;
use partigen::strategy::Strategy;
use partigen::timer::Timer;
use partigen::util::extract_optional_numeric_arg;
use partigen::validation::{validate, ValidationReport};

fn main() {
    let mut app = clap_app!(validate_strategies =>
        (version: "0.1")
        (author: "Aaron Zhou")
    );
    app = app.arg(
        Arg::with_name("max_n")
            .long("max-n").short("n").takes_value(true)
            .help("cross-check every strategy for each n in 0..=max_n; defaults to 30")
    );
    let matches = app.get_matches();
    let max_n = extract_optional_numeric_arg::<usize>(&matches, "max_n")
        .unwrap_or_exit(None::<String>)
        .unwrap_or(30);

    println!("=> cross-checking {} strategies for n in 0..={}", Strategy::ALL.len(), max_n);
    let mut timer = Timer::new();

    // one independent set of generators per n, so the checks run in parallel
    let reports: Vec<ValidationReport> = (0..=max_n)
        .into_par_iter()
        .map(validate)
        .collect::<Result<Vec<ValidationReport>, _>>()
        .unwrap_or_exit(Some("failed to validate the strategies"));
    timer.print();

    let mut num_failed = 0usize;
    for report in reports.iter() {
        match report.agreed_count() {
            Some(count) if report.is_ok() => {
                println!("n = {:>3}: {:>10} partitions {}", report.n, count, "ok".green());
            }
            _ => {
                num_failed += 1;
                println!("n = {:>3}: {}", report.n, "FAILED".red().bold());
                for (strategy, count) in report.counts.iter() {
                    println!("    {:<24} {}", strategy.name(), count);
                }
                for failure in report.failures.iter() {
                    println!("    {}", failure);
                }
            }
        }
    }

    if num_failed > 0 {
        eprintln!("{}", format!("{} of {} values of n failed validation", num_failed, reports.len()).red().bold());
        std::process::exit(1);
    }
    println!("{}", format!("all {} values of n passed", reports.len()).green().bold());
}
