use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_INPUT: &str = "tmp/all_logs_all_refs.txt";
pub const DEFAULT_OUTPUT: &str = "public/gitLogData.js";
pub const DEFAULT_ELEMENT_ID: &str = "gitLogOutput";

#[derive(Parser)]
#[command(name = "gitlog-table")]
#[command(about = "Per-author daily insertion table from a git log export")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Default)]
pub struct CommonArgs {
    #[arg(long, global = true, help = "JSON file mapping raw author names to canonical names")]
    pub aliases: Option<PathBuf>,

    #[arg(long, global = true, help = "Only count commits from this date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub since: Option<String>,

    #[arg(long, global = true, help = "Only count commits up to this date (RFC3339, YYYY-MM-DD, or natural language)")]
    pub until: Option<String>,

    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,

    #[arg(short, long, global = true, help = "Only log errors and hide the progress spinner")]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the table and write it as a page script (or bare HTML).
    Render {
        #[arg(help = "Git log export to read", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        #[arg(short, long, help = "File to write", default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        #[arg(long, help = "Id of the page element that receives the table", default_value = DEFAULT_ELEMENT_ID)]
        element_id: String,

        #[arg(long, help = "Write the bare HTML table instead of a script")]
        html: bool,
    },
    /// Print daily totals to the terminal.
    Summary {
        #[arg(help = "Git log export to read", default_value = DEFAULT_INPUT)]
        input: PathBuf,

        #[arg(long, help = "Output as JSON", conflicts_with = "ndjson")]
        json: bool,

        #[arg(long, help = "Output as NDJSON")]
        ndjson: bool,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        crate::logging::init(self.common.verbose, self.common.quiet);

        match self.command {
            Commands::Render { input, output, element_id, html } => {
                crate::render::exec(&self.common, &input, &output, &element_id, html)
            }
            Commands::Summary { input, json, ndjson } => {
                crate::summary::exec(&self.common, &input, json, ndjson)
            }
        }
    }
}
