#![forbid(unsafe_code)]

mod town;

pub use town::{init_tracing, log_summary, TownConfig};
