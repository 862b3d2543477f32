//! CLI domain: parse, route, output, and presentation only.
//! Docset selection itself lives in `activation`; the route table only dispatches.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{DocsetRow, ResolveReport};
pub use route::RunContext;
