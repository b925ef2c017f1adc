// top-level library module

pub mod nd;
pub mod population;
pub mod scalar;
pub mod scaling;
pub mod search;
pub mod simd;
pub mod summing;

/// Element count used by the reference runs.
pub const DEFAULT_LENGTH: usize = 10_000_000;

/// Repetitions per benchmark; short runs on 32-bit ARM boards.
pub const DEFAULT_COUNT: u32 = if cfg!(target_arch = "arm") { 5 } else { 50 };

/// Which benchmark groups to run and with what workload. All groups run
/// by default; the CLI can switch individual groups off.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    pub population: bool,
    pub scaling: bool,
    pub summing: bool,
    pub search: bool,
    /// element count of each category's array
    pub length: usize,
    /// repetitions per benchmark
    pub count: u32,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            population: true,
            scaling: true,
            summing: true,
            search: true,
            length: DEFAULT_LENGTH,
            count: DEFAULT_COUNT,
        }
    }
}
