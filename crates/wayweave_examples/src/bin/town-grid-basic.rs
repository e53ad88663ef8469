use wayweave::prelude::*;
use wayweave_examples::{init_tracing, log_summary, TownConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let mut town = TownConfig::default().build()?;
    log_summary("before", &town);

    let report = synthesize(&mut town, 2.0)?;
    log_summary("after", &town);
    println!(
        "passes: {} | final threshold: {} | added: {} | removed: {}",
        report.passes, report.final_threshold, report.added, report.removed
    );

    Ok(())
}
