//! `strata place`: parse, place and anneal a netlist, then write the
//! placement report.

use strata_place::{place, PlacementContext};

use crate::pipeline::{load_circuit, load_placer_config, write_report};
use crate::{GlobalArgs, PlaceArgs, ReportFormat};

/// Runs the `strata place` command.
pub fn run(args: &PlaceArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let mut config = load_placer_config(global)?;
    if args.thread {
        config.parallel = true;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut circuit = load_circuit(&args.file, global)?;
    let mut ctx = PlacementContext::new(config);
    log::info!("using seed {}", ctx.seed());

    let report = place(&mut circuit, &mut ctx)?;

    let contents = match args.format {
        ReportFormat::Text => report.render_text(),
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    write_report(&args.output, &contents, global)?;

    if !global.quiet {
        eprintln!(
            "   Result: HPWL {} -> {} over {} temperature steps",
            report.initial_hpwl,
            report.final_hpwl,
            report.steps.len()
        );
    }
    Ok(0)
}
