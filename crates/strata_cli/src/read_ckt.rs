//! `strata read_ckt`: parse a netlist and write its statistics report.

use crate::pipeline::{load_circuit, write_report};
use crate::{GlobalArgs, ReadCktArgs};

/// Runs the `strata read_ckt` command.
pub fn run(args: &ReadCktArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let circuit = load_circuit(&args.file, global)?;
    let report = strata_netlist::circuit_statistics(&circuit);
    write_report(&args.output, &report, global)?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_statistics_report() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("and.bench");
        let output = tmp.path().join("ckt_details.txt");
        fs::write(&input, "INPUT(a)\nINPUT(b)\nc = AND(a, b)\nOUTPUT(c)\n").unwrap();

        let args = ReadCktArgs {
            file: input.display().to_string(),
            output: output.display().to_string(),
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: None,
        };
        assert_eq!(run(&args, &global).unwrap(), 0);

        let report = fs::read_to_string(&output).unwrap();
        assert!(report.starts_with("2 primary inputs\n1 primary outputs\n"));
        assert!(report.contains("Total Area: 6"));
        assert!(report.contains("\n\nFanout...\n"));
    }

    #[test]
    fn duplicate_declaration_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("dup.bench");
        fs::write(&input, "INPUT(a)\nINPUT(a)\n").unwrap();
        let args = ReadCktArgs {
            file: input.display().to_string(),
            output: tmp.path().join("out.txt").display().to_string(),
        };
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: None,
        };
        let err = run(&args, &global).unwrap_err();
        assert!(err.to_string().contains("failed to parse circuit"));
    }
}
