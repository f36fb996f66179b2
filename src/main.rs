//! wayfinder command line

use std::path::PathBuf;

use anyhow::Error;
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;

use wayfinder::{route, RoadMap, RouteRequest, SearchOptions};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();

    let map = RoadMap::romania();
    map.validate()?;

    match opts.command {
        Command::Route(args) => {
            let options = args.search_options()?;
            let request = RouteRequest {
                start: args.from,
                end: args.to,
                algorithm: args.algorithm,
            };

            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_rng(&mut rand::rng()),
            };

            let report = route(map, &request, &options, &mut rng)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Locations => {
            for location in map.locations() {
                let estimate = map.estimate(location);
                match map.coordinates(location) {
                    Some(point) => println!("{:<16} h={:<4} ({}, {})", location, estimate, point.x, point.y),
                    None => println!("{:<16} h={:<4}", location, estimate),
                }
            }
        }
    }

    Ok(())
}

/// Classical graph search over the road map of Romania.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find a route between two locations and print it as JSON
    Route(RouteArgs),
    /// List every location with its heuristic estimate and coordinates
    Locations,
}

#[derive(clap::Args)]
struct RouteArgs {
    /// bfs, dfs, ucs, dls, ids, astar, ao_star or genetic
    #[arg(short, long)]
    algorithm: String,

    /// Start location (random when omitted)
    #[arg(long)]
    from: Option<String>,

    /// Goal location (random when omitted)
    #[arg(long)]
    to: Option<String>,

    /// JSON file with search options
    #[arg(long)]
    options: Option<PathBuf>,

    /// Seed for the random route and the genetic algorithm
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    depth_limit: Option<usize>,

    #[arg(long)]
    max_depth: Option<usize>,

    #[arg(long)]
    population_size: Option<usize>,

    #[arg(long)]
    generations: Option<usize>,

    #[arg(long)]
    mutation_rate: Option<f64>,
}

impl RouteArgs {
    /// Options file first, then flags on top
    fn search_options(&self) -> Result<SearchOptions, Error> {
        let mut options = match &self.options {
            Some(path) => SearchOptions::from_file(path)?,
            None => SearchOptions::default(),
        };

        if let Some(depth_limit) = self.depth_limit {
            options.depth_limit = depth_limit;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if let Some(population_size) = self.population_size {
            options.population_size = population_size;
        }
        if let Some(generations) = self.generations {
            options.generations = generations;
        }
        if let Some(mutation_rate) = self.mutation_rate {
            options.mutation_rate = mutation_rate;
        }

        options.validate()?;
        Ok(options)
    }
}
