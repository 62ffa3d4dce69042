//! Shared pipeline helpers for CLI commands: config loading, netlist
//! reading with diagnostic rendering, and report writing.

use std::fs;
use std::path::Path;

use strata_config::PlacerConfig;
use strata_diagnostics::{DiagnosticSink, TerminalRenderer};
use strata_netlist::{read_circuit, Circuit};

use crate::GlobalArgs;

/// Loads the `--config` file, or the defaults when none was given.
pub fn load_placer_config(global: &GlobalArgs) -> Result<PlacerConfig, Box<dyn std::error::Error>> {
    match &global.config {
        Some(path) => Ok(strata_config::load_config(Path::new(path))?),
        None => Ok(PlacerConfig::default()),
    }
}

/// Reads a netlist, rendering every diagnostic to stderr.
///
/// Record-level errors are reported and skipped; only fatal netlist errors
/// are returned.
pub fn load_circuit(path: &str, global: &GlobalArgs) -> Result<Circuit, Box<dyn std::error::Error>> {
    if !global.quiet {
        eprintln!("Reading circuit file from {path}");
    }
    let sink = DiagnosticSink::new();
    let result = read_circuit(Path::new(path), &sink);
    render_diagnostics(&sink, path, global);
    Ok(result?)
}

/// Renders all diagnostics in the sink to stderr, followed by a summary
/// line unless quiet.
pub fn render_diagnostics(sink: &DiagnosticSink, source: &str, global: &GlobalArgs) {
    let renderer = TerminalRenderer::new(global.color);
    for diag in &sink.diagnostics() {
        eprintln!("{}", renderer.render(diag, source));
    }
    if let Some(summary) = diagnostic_summary(sink) {
        if !global.quiet {
            eprintln!("   {summary}");
        }
    }
}

/// `"<n> error(s), <m> warning(s) in netlist"`, or `None` when the sink is
/// clean.
pub fn diagnostic_summary(sink: &DiagnosticSink) -> Option<String> {
    let (errors, warnings) = (sink.error_count(), sink.warning_count());
    (errors + warnings > 0)
        .then(|| format!("{errors} error(s), {warnings} warning(s) in netlist"))
}

/// Writes a report file.
pub fn write_report(path: &str, contents: &str, global: &GlobalArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !global.quiet {
        eprintln!("Writing to {path}");
    }
    fs::write(path, contents).map_err(|e| format!("failed to open {path}: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn global(config: Option<String>) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config,
        }
    }

    #[test]
    fn default_config_without_flag() {
        let config = load_placer_config(&global(None)).unwrap();
        assert_eq!(config.anneal.moves_per_temperature, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn config_file_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("strata.toml");
        fs::write(&path, "seed = 7\nparallel = true\n").unwrap();
        let config = load_placer_config(&global(Some(path.display().to_string()))).unwrap();
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }

    #[test]
    fn bad_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("strata.toml");
        fs::write(&path, "bogus = 1\n").unwrap();
        assert!(load_placer_config(&global(Some(path.display().to_string()))).is_err());
    }

    #[test]
    fn missing_netlist_reports_failed_to_open() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.bench");
        let err = load_circuit(&path.display().to_string(), &global(None)).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }

    #[test]
    fn netlist_with_malformed_lines_still_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("small.bench");
        fs::write(&path, "INPUT(a)\ngarbage here\nb = NOT(a)\n").unwrap();
        let circuit = load_circuit(&path.display().to_string(), &global(None)).unwrap();
        assert_eq!(circuit.gate_count(), 2);
    }

    #[test]
    fn summary_counts_errors_and_warnings() {
        let sink = DiagnosticSink::new();
        assert!(diagnostic_summary(&sink).is_none());
        strata_netlist::parse_circuit("INPUT(a)\nbad line\nb = NOT(ghost)\n", &sink).unwrap();
        assert_eq!(
            diagnostic_summary(&sink).as_deref(),
            Some("1 error(s), 1 warning(s) in netlist")
        );
    }

    #[test]
    fn write_report_into_missing_dir_fails() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope").join("out.txt");
        let err = write_report(&path.display().to_string(), "x", &global(None)).unwrap_err();
        assert!(err.to_string().starts_with("failed to open"));
    }
}
