pub mod exec;
pub mod html;
pub mod output;

pub use exec::exec;
pub use html::{html_escape, render_table};
pub use output::{output_json, output_ndjson, output_summary, script_fragment, write_artifact};
