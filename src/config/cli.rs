use clap::Parser;
use std::path::PathBuf;

use super::{EngineConfig, FileConfig};
use crate::utils::error::Result;

#[derive(Debug, Clone, Parser)]
#[command(name = "u-grouping")]
#[command(about = "Generates groups of teams in repeated courses without overlap")]
pub struct CliConfig {
    #[arg(long, help = "Number of courses to generate")]
    pub courses: usize,

    #[arg(long, alias = "teams_per_group", help = "Number of teams in each group")]
    pub teams_per_group: usize,

    #[arg(short, long, help = "Team list, one team per line")]
    pub file: PathBuf,

    #[arg(short, long, default_value = "./out.csv")]
    pub out: PathBuf,

    #[arg(long, help = "Seed for a reproducible schedule")]
    pub seed: Option<u64>,

    #[arg(long, help = "TOML file with an [engine] table")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Engine ceilings from `--config`, or the defaults.
    pub fn engine_config(&self) -> Result<EngineConfig> {
        match &self.config {
            Some(path) => Ok(FileConfig::from_file(path)?.engine),
            None => Ok(EngineConfig::default()),
        }
    }
}
