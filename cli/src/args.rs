//! Parsing command-line arguments.

use crate::config;
use anyhow::Result;
use clap::{
    crate_authors, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction,
    ArgMatches, Command,
};
use rlife_lib::Config;
use std::path::PathBuf;

fn parse_positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(String::from("must be a positive integer")),
    }
}

fn parse_probability(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(p) if (0.0..=1.0).contains(&p) => Ok(p),
        _ => Err(String::from("must be a number between 0 and 1")),
    }
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) generations: u64,
    pub(crate) neighbors: bool,
}

/// The command-line interface.
pub(crate) fn command() -> Command {
    Command::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about(crate_description!())
        .long_about(
            "Conway's Game of Life on a torus\n\
             \n\
             Fills a grid with random cells and prints its generations in \n\
             Plaintext format.\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`;\n\
             * Each generation starts with a line `#G <generation> population <count>`.\n",
        )
        .arg(
            Arg::new("X")
                .help("Width of the grid [default: 200]")
                .index(1)
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the grid [default: 100]")
                .index(2)
                .value_parser(parse_positive),
        )
        .arg(
            Arg::new("PROBABILITY")
                .help("Probability that a cell is initially alive [default: 0.2]")
                .short('p')
                .long("probability")
                .value_parser(parse_probability),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random number generator")
                .long_help(
                    "Seed of the random number generator\n\
                     The same seed with the same size and probability always \
                     gives the same grid.\n",
                )
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     Supports JSON (.json), YAML (.yaml, .yml) and TOML (.toml).\n\
                     Values given on the command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Number of generations to print")
                .long_help(
                    "Number of generations to print\n\
                     The first one is the initial grid. Stops early if all cells die.\n",
                )
                .short('g')
                .long("generations")
                .default_value("1")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("NEIGHBORS")
                .help("Also prints the number of living neighbors of each cell")
                .short('n')
                .long("neighbors")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Builds the configuration from parsed arguments.
    pub(crate) fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => config::load(path)?,
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<usize>("X") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<usize>("Y") {
            config.height = height;
        }
        if let Some(&alive_probability) = matches.get_one::<f64>("PROBABILITY") {
            config.alive_probability = alive_probability;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }
        config.validate()?;

        Ok(Args {
            config,
            generations: matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(1),
            neighbors: matches.get_flag("NEIGHBORS"),
        })
    }

    /// Parses the command-line arguments.
    ///
    /// Exits the process on invalid arguments.
    pub(crate) fn parse() -> Result<Self> {
        Args::from_matches(&command().get_matches())
    }
}
