use clap::{Arg, clap_app};

use partigen::bounded::BoundedPartitions;
use partigen::program_flow::OrExit;
use partigen::strategy::{enumerate_partitions, Partitions, Strategy};
use partigen::timer::Timer;
use partigen::util::{extract_boolean_flag, extract_numeric_arg, extract_optional_numeric_arg,
                     extract_optional_str_arg, get_output_writer, write_partitions};

fn main() {
    let mut app = clap_app!(enumerate_partitions =>
        (version: "0.1")
        (author: "Aaron Zhou")
        (@arg strategy: --strategy -s +takes_value "one of reduction, reduction-descending, multiset, bounded, \
                                                     ascending-baseline, ascending-accelerated; \
                                                     defaults to ascending-accelerated")
        (@arg limit: --limit -k +takes_value "stop after printing this many partitions")
        (@arg out_path: --out -o +takes_value "write the partitions to this file instead of stdout")
        (@arg timer: --timer "print timing information")
    );
    app = app
        .arg(
            Arg::with_name("n")
                .long("n").short("n").takes_value(true).required(true)
                .allow_hyphen_values(true)
                .help("the integer to partition")
        )
        .arg(
            Arg::with_name("min_part")
                .long("min-part").short("m").takes_value(true)
                .help("the smallest allowed part; only used with the bounded strategy")
        )
        .arg(
            Arg::with_name("count_only")
                .long("count-only").short("c")
                .help("only report the number of partitions")
        );
    let matches = app.get_matches();

    let n = extract_numeric_arg::<i64>(&matches, "n").unwrap_or_exit(None::<String>);
    let strategy = extract_optional_str_arg(&matches, "strategy")
        .map_or(Ok(Strategy::AscendingAccelerated), |s| s.parse::<Strategy>())
        .unwrap_or_exit(None::<String>);
    let min_part = extract_optional_numeric_arg::<i64>(&matches, "min_part").unwrap_or_exit(None::<String>);
    let limit = extract_optional_numeric_arg::<usize>(&matches, "limit").unwrap_or_exit(None::<String>);
    let out_path = extract_optional_str_arg(&matches, "out_path");
    let count_only = extract_boolean_flag(&matches, "count_only");
    let use_timer = extract_boolean_flag(&matches, "timer");

    let partitions: Partitions = match (strategy, min_part) {
        (Strategy::Bounded, Some(min_part)) => BoundedPartitions::new(n, min_part)
            .unwrap_or_exit(Some("failed to create the bounded generator"))
            .into(),
        (_, Some(_)) => {
            eprintln!("--min-part is ignored by the {} strategy", strategy);
            enumerate_partitions(n, strategy).unwrap_or_exit(None::<String>)
        }
        (_, None) => enumerate_partitions(n, strategy).unwrap_or_exit(None::<String>)
    };

    let mut timer = Timer::new();
    if use_timer {
        println!("=> enumerating the partitions of {} with the {} strategy", n, strategy);
    }

    let num_partitions = if count_only {
        match limit {
            Some(k) => partitions.take(k).count(),
            None => partitions.count_remaining()
        }
    } else {
        let mut writer = get_output_writer(out_path.as_ref().map(|s| s.as_str()))
            .unwrap_or_exit(None::<String>);
        write_partitions(&mut writer, partitions, limit)
            .unwrap_or_exit(Some(format!("failed to write the partitions of {}", n)))
    };

    if count_only {
        println!("{}", num_partitions);
    }
    if use_timer {
        timer.print_throughput(strategy.name(), num_partitions);
    }
    if let Some(path) = out_path {
        println!("wrote {} partitions to {}", num_partitions, path);
    }
}
