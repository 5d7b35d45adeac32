use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tb_catalog::PartSort;
use tb_core::Category;

#[derive(Parser)]
#[command(name = "trustbuilds")]
#[command(about = "Trust-scored PC builds and upgrade advice", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "TRUSTBUILDS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Catalog directory, overrides `catalog.path`
    #[arg(long, global = true, env = "TRUSTBUILDS_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Fail on any catalog integrity issue
    #[arg(long, global = true)]
    pub strict: bool,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Browse curated builds
    #[command(subcommand)]
    Builds(BuildsCommands),

    /// Find the best build for a budget
    Budget {
        /// Budget in USD (default from config: 1500)
        amount: Option<f64>,

        #[arg(long)]
        json: bool,
    },

    /// Recommend upgrades for your current parts
    Upgrade {
        /// Upgrade budget in USD (default from config: 500)
        #[arg(long)]
        budget: Option<f64>,

        /// Current part as <category>=<part id, name or free text>
        #[arg(long = "part", value_name = "CATEGORY=PART", value_parser = parse_part)]
        parts: Vec<(Category, String)>,

        #[arg(long)]
        json: bool,
    },

    /// Browse parts
    #[command(subcommand)]
    Parts(PartsCommands),

    /// Compute a trust score from raw factors
    Score {
        /// Annual failure rate in percent
        #[arg(long)]
        failure_rate: f64,

        /// Warranty length in years
        #[arg(long)]
        warranty: f64,

        /// Brand reputation, 0-100
        #[arg(long)]
        reputation: f64,

        /// RMA experience, 0-5
        #[arg(long)]
        rma: f64,

        #[arg(long)]
        json: bool,
    },

    /// Audit the catalog and report integrity issues
    Validate {
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
pub enum BuildsCommands {
    /// List all builds
    List {
        #[arg(long)]
        json: bool,
    },

    /// Show build details
    Show {
        /// Build slug
        slug: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PartsCommands {
    /// List parts
    List {
        #[arg(long)]
        category: Option<Category>,

        /// Match name, model, brand or id
        #[arg(long)]
        search: Option<String>,

        #[arg(long, value_enum, default_value_t = SortArg::Name)]
        sort: SortArg,

        #[arg(long)]
        json: bool,
    },

    /// Show part details
    Show {
        /// Part id
        id: String,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Name,
    Price,
    Trust,
}

impl From<SortArg> for PartSort {
    fn from(sort: SortArg) -> Self {
        match sort {
            SortArg::Name => PartSort::Name,
            SortArg::Price => PartSort::Price,
            SortArg::Trust => PartSort::Trust,
        }
    }
}

fn parse_part(raw: &str) -> Result<(Category, String), String> {
    let (category, part) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected <category>=<part>, got '{raw}'"))?;
    let category: Category = category.parse().map_err(|e| format!("{e}"))?;
    let part = part.trim();
    if part.is_empty() {
        return Err(format!("no part given for {category}"));
    }
    Ok((category, part.to_string()))
}
