pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod parse;
pub mod render;
pub mod summary;
pub mod totals;
pub mod util;

pub use config::AuthorAliases;
pub use error::{LogTableError, Result};
pub use model::{CommitRecord, DailyTotals};
pub use parse::parse_log;
pub use render::render_table;
pub use totals::{aggregate, build_daily_totals};
