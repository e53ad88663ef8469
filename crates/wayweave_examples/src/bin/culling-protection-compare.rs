use wayweave::prelude::*;
use wayweave_examples::{init_tracing, log_summary, TownConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let base = TownConfig::default().with_blocks(14).with_seed(7).build()?;

    for protection in [
        ClosestProtection::Unprotected,
        ClosestProtection::ProtectClosest,
    ] {
        let mut town = base.clone();
        let config = SynthesisConfig::new().with_closest_protection(protection);
        let report = Synthesizer::try_new(config)?.run(&mut town, 1.5)?;

        let orphaned = town
            .buildings
            .iter()
            .filter(|b| b.connections().is_empty())
            .count();
        log_summary(&format!("{protection:?}"), &town);
        println!(
            "{protection:?}: removed {} connections, {} buildings left without a road",
            report.removed, orphaned
        );
    }

    Ok(())
}
