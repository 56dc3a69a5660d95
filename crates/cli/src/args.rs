use clap::{ArgAction, Parser};
use dirguard_config::{Config, RuntimeSettings};
use dirguard_core::{Constraint, Error, Mode, Result};
use dirguard_utils::parse_size;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirguard")]
#[command(
    about = "Delete the oldest files in a directory until it fits a size or file-count limit",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Maximum total size (e.g. 4096, 500K, 2G), or file count with --count
    #[arg(allow_negative_numbers = true)]
    pub limit: String,

    /// Directory to keep within the limit
    pub dir: PathBuf,

    /// Treat LIMIT as a maximum number of files
    #[arg(short, long)]
    pub count: bool,

    /// Include files in subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Print before/after totals and every removed file (repeat for more logging)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Show what would be removed without deleting anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Print the enforcement report as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.count {
            Mode::Count
        } else {
            Mode::Size
        }
    }

    /// Parse the limit and build a validated configuration
    pub fn to_config(&self) -> Result<Config> {
        let limit = match self.mode() {
            Mode::Size => parse_size(&self.limit)?,
            Mode::Count => self.limit.trim().parse::<u64>().map_err(|_| {
                Error::configuration(format!(
                    "please give a numeric value for the file count, got '{}'",
                    self.limit
                ))
            })?,
        };

        let settings = RuntimeSettings {
            recursive: self.recursive,
            verbose: self.verbose > 0,
            dry_run: self.dry_run,
        };
        Config::load(&self.dir, Constraint::new(self.mode(), limit), settings)
    }
}
