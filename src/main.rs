//! u-bitga CLI - run the binary GA on a benchmark function.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::Context;
use clap::{ArgGroup, Parser};
use std::process::ExitCode;
use u_bitga::ga::{FitnessFunction, GaConfig, GaRunner};

/// Generational binary genetic algorithm
#[derive(Parser, Debug)]
#[command(name = "u-bitga")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("function").required(true).args(["onemax", "rosenbrock", "f101"])))]
struct Args {
    /// Shuffle the chromosome bit order
    #[arg(short, long)]
    shuffle: bool,

    /// OneMax fitness function
    #[arg(short, long)]
    onemax: bool,

    /// Rosenbrock fitness function
    #[arg(short, long)]
    rosenbrock: bool,

    /// F101 fitness function
    #[arg(short, long)]
    f101: bool,

    /// Population size
    #[arg(long, default_value = "200")]
    population: usize,

    /// Chromosome length in bits
    #[arg(long, default_value = "100")]
    length: usize,

    /// Number of generations
    #[arg(long, default_value = "50")]
    generations: usize,

    /// Crossover probability
    #[arg(long, default_value = "0.9")]
    crossover: f64,

    /// Mutation probability
    #[arg(long, default_value = "0.5")]
    mutation: f64,

    /// Tournament size
    #[arg(long, default_value = "3")]
    tournament: usize,

    /// Number of elites carried over each generation
    #[arg(long, default_value = "2")]
    elitism: usize,

    /// Random seed (default: clock and process id)
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn fitness(&self) -> FitnessFunction {
        if self.f101 {
            FitnessFunction::F101
        } else if self.rosenbrock {
            FitnessFunction::Rosenbrock
        } else {
            FitnessFunction::OneMax
        }
    }

    /// Rates are passed through unclamped so out-of-range values are reported.
    fn config(&self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_fitness(self.fitness())
            .with_shuffle(self.shuffle)
            .with_population_size(self.population)
            .with_chromosome_length(self.length)
            .with_max_generations(self.generations)
            .with_tournament_size(self.tournament)
            .with_elitism_size(self.elitism);
        config.crossover_rate = self.crossover;
        config.mutation_rate = self.mutation;
        config.seed = self.seed;
        config
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = args.config();
    GaRunner::run_with_observer(&config, |stats| {
        if stats.generation > 0 {
            println!(
                "generation: {:03} fitness: {:.6}",
                stats.generation, stats.best_fitness
            );
        }
    })
    .with_context(|| format!("cannot run {}", config.fitness.map_or("GA", |f| f.name())))?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
