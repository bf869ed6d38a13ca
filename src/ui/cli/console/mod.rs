mod console;
mod report;

pub use console::{Console, MenuAction};
pub use report::{write_build_report, write_stats};
