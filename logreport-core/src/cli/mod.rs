mod args;
mod date_filter;
mod run;


pub use args::Cli;
pub use date_filter::{InvalidDateFormat, parse_date_filter};
pub use run::run;
