//! Command-line front-end for the clique search heuristics.
//!
//! ```text
//! maxclique --input graph.mtx --output results.csv aco --iterations 200 --ants 50
//! maxclique --input graph.mtx ref --agents 25
//! ```
//!
//! The result record is appended to `--output` as one comma-separated
//! line; batch tooling runs many invocations and tabulates those lines.

use std::fs::OpenOptions;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

use maxclique::aco::AcoConfig;
use maxclique::graph::Graph;
use maxclique::reference::ReferenceConfig;
use maxclique::result::Value;
use maxclique::strategy::Algorithm;
use maxclique::{Error, Result};

fn main() {
    let matches = App::new("maxclique")
        .about("Heuristic maximum-clique search")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(
            Arg::with_name("input")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(true)
                .help("Graph instance in coordinate/Matrix Market format"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .help("Append the run's result record to this file"),
        )
        .subcommand(
            SubCommand::with_name("aco")
                .about("Ant Colony Optimization search")
                .arg(
                    Arg::with_name("iterations")
                        .long("iterations")
                        .takes_value(true)
                        .default_value("100")
                        .help("Number of algorithm iterations"),
                )
                .arg(
                    Arg::with_name("ants")
                        .long("ants")
                        .takes_value(true)
                        .default_value("100")
                        .help("Ants count"),
                )
                .arg(
                    Arg::with_name("alpha")
                        .long("alpha")
                        .takes_value(true)
                        .default_value("2.0")
                        .help("Alpha parameter (selection sharpness)"),
                )
                .arg(
                    Arg::with_name("rho")
                        .long("rho")
                        .takes_value(true)
                        .default_value("0.995")
                        .help("Rho parameter (evaporation retention)"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true)
                        .help("Random seed"),
                ),
        )
        .subcommand(
            SubCommand::with_name("ref")
                .about("Greedy randomized baseline")
                .arg(
                    Arg::with_name("agents")
                        .long("agents")
                        .takes_value(true)
                        .default_value("10")
                        .help("Agents count"),
                )
                .arg(
                    Arg::with_name("seed")
                        .long("seed")
                        .takes_value(true)
                        .help("Random seed"),
                ),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let input = matches.value_of("input").unwrap();
    let mut graph = Graph::from_file(input)?;
    println!("instance {input}:");
    graph.display_statistics();

    let algorithm = match matches.subcommand() {
        ("aco", Some(sub)) => {
            let mut config = AcoConfig::default()
                .with_iterations(parse_usize(sub, "iterations")?)
                .with_ants(parse_usize(sub, "ants")?)
                .with_alpha(parse_f64(sub, "alpha")?)
                .with_rho(parse_f64(sub, "rho")?);
            if let Some(seed) = parse_seed(sub)? {
                config = config.with_seed(seed);
            }
            Algorithm::AntColony(config)
        }
        ("ref", Some(sub)) => {
            let mut config = ReferenceConfig::default().with_agents(parse_usize(sub, "agents")?);
            if let Some(seed) = parse_seed(sub)? {
                config = config.with_seed(seed);
            }
            Algorithm::Reference(config)
        }
        _ => unreachable!("a subcommand is required"),
    };

    let record = algorithm.run(&mut graph)?;

    if let Some(path) = matches.value_of("output") {
        let mut sink = OpenOptions::new().append(true).create(true).open(path)?;
        record.save(&mut sink)?;
    }

    if let Some(Value::Int(size)) = record.get("best_clique_size") {
        println!("best clique size: {size}");
    }
    if let Some(Value::Float(seconds)) = record.get("execution_time") {
        println!("Execution time: {seconds}");
    }
    Ok(())
}

fn parse_usize(matches: &ArgMatches, name: &str) -> Result<usize> {
    let raw = matches.value_of(name).unwrap();
    raw.parse()
        .map_err(|_| Error::Config(format!("--{name} expects an integer, got {raw:?}")))
}

fn parse_f64(matches: &ArgMatches, name: &str) -> Result<f64> {
    let raw = matches.value_of(name).unwrap();
    raw.parse()
        .map_err(|_| Error::Config(format!("--{name} expects a number, got {raw:?}")))
}

fn parse_seed(matches: &ArgMatches) -> Result<Option<u64>> {
    match matches.value_of("seed") {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| Error::Config(format!("--seed expects an integer, got {raw:?}"))),
    }
}
