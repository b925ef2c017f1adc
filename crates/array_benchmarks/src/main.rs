// CLI driver for the scalar-vs-vectorized array benchmarks.

use std::time::Instant;

use clap::Parser;

use array_benchmarks::{BenchConfig, population, scaling, search, summing};
use bench_harness::{BenchError, elapsed_msec};

// setup command line args

#[derive(Parser)]
#[command(about = "Compare naive scalar loops against vectorized array routines")]
pub struct CliArgs {
    /// skip the array population benchmarks
    #[clap(long, action)]
    skip_population: bool,
    /// skip the scaling benchmarks
    #[clap(long, action)]
    skip_scaling: bool,
    /// skip the summing benchmarks
    #[clap(long, action)]
    skip_summing: bool,
    /// skip the search benchmarks
    #[clap(long, action)]
    skip_search: bool,
    /// repetitions per benchmark
    #[clap(long)]
    count: Option<u32>,
    /// element count of each benchmark array
    #[clap(long)]
    length: Option<usize>,
}

impl CliArgs {
    fn into_config(self) -> BenchConfig {
        let defaults = BenchConfig::default();
        BenchConfig {
            population: !self.skip_population,
            scaling: !self.skip_scaling,
            summing: !self.skip_summing,
            search: !self.skip_search,
            length: self.length.unwrap_or(defaults.length),
            count: self.count.unwrap_or(defaults.count),
        }
    }
}

fn main() -> Result<(), BenchError> {
    env_logger::init();

    let config = CliArgs::parse().into_config();
    log::debug!("running with {config:?}");

    let start = Instant::now();

    if config.population {
        population::run(&config)?;
    }
    if config.scaling {
        scaling::run(&config)?;
    }
    if config.summing {
        summing::run(&config)?;
    }
    if config.search {
        search::run(&config)?;
    }

    println!("\n\nall benchmarks took {:.6} msec", elapsed_msec(start));

    Ok(())
}
