pub mod cli;
pub mod logging;
pub mod records;
pub mod report;
