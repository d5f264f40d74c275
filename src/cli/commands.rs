//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::format::{FormatConfig, LineEnding};
use crate::pipeline::{FaultPolicy, Pipeline, PipelineConfig, PipelineError, PipelineReport};
use crate::scaffold::{InterfacePrefix, ScaffoldConfig, ScaffoldEngine};

use super::{Cli, CliError, CliResult, ExitCode};

/// Build the engine configuration from command-line flags.
pub fn scaffold_config(cli: &Cli) -> ScaffoldConfig {
    let line_ending = if cli.crlf { LineEnding::CrLf } else { LineEnding::Lf };
    ScaffoldConfig::new()
        .with_format(
            FormatConfig::new()
                .with_indent_width(cli.indent)
                .with_line_ending(line_ending),
        )
        .with_fail_marker(cli.fail_marker.clone())
        .with_mock_policy(InterfacePrefix::new(cli.interface_prefix))
}

/// Build the pipeline configuration from command-line arguments.
pub fn pipeline_config(cli: &Cli) -> CliResult<PipelineConfig> {
    let fault_policy = if cli.keep_going { FaultPolicy::Skip } else { FaultPolicy::Abort };
    Ok(PipelineConfig::new(cli.output_dir.clone())
        .with_workers(
            positive(cli.read_workers, "READ")?,
            positive(cli.generate_workers, "GENERATE")?,
            positive(cli.write_workers, "WRITE")?,
        )
        .with_queue_capacity(positive(cli.queue_capacity, "--queue-capacity")?)
        .with_extension(cli.extension.clone())
        .with_fault_policy(fault_policy))
}

fn positive(value: u32, name: &str) -> CliResult<NonZeroUsize> {
    usize::try_from(value)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| CliError::usage(format!("error: {name} must be at least 1")))
}

/// Scaffold every input file into the output directory.
pub fn scaffold(cli: &Cli) -> CliResult<ExitCode> {
    let inputs = cli.input_paths();
    if inputs.is_empty() {
        return Err(CliError::usage("error: INPUTS lists no files"));
    }

    let engine = Arc::new(ScaffoldEngine::new(scaffold_config(cli)));
    let pipeline = Pipeline::new(engine, pipeline_config(cli)?);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::failure(format!("Error starting async runtime: {}", e)))?;

    let report = runtime.block_on(pipeline.run(inputs)).map_err(|e| CliError::failure(render_error(e)))?;

    for failure in &report.failures {
        eprintln!("{}", render_error_ref(failure));
    }
    println!("{}", summary(&report, cli));

    if report.failures.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// One-line run summary.
pub fn summary(report: &PipelineReport, cli: &Cli) -> String {
    let mut line = format!(
        "Generated {} test file(s) from {} source(s) into {}",
        report.written.len(),
        report.files_read,
        cli.output_dir.display()
    );
    if !report.failures.is_empty() {
        line.push_str(&format!(" ({} skipped)", report.failures.len()));
    }
    line
}

/// Render a fatal pipeline error; parse failures get a source diagnostic.
fn render_error(err: PipelineError) -> String {
    match err {
        PipelineError::Parse { source, .. } => format!("{:?}", miette::Report::new(source)),
        other => format!("Error: {}", other),
    }
}

/// Render a skipped item without taking ownership.
fn render_error_ref(err: &PipelineError) -> String {
    match err {
        PipelineError::Parse { source, .. } => source.render_plain(),
        other => format!("Error: {}", other),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::parse_args;
    use std::fs;

    fn cli_for(inputs: &str, out: &std::path::Path, extra: &[&str]) -> Cli {
        let out = out.to_string_lossy().to_string();
        let mut args = vec!["testgen", inputs, out.as_str(), "2", "2", "2"];
        args.extend_from_slice(extra);
        parse_args(args).unwrap()
    }

    #[test]
    fn test_scaffold_writes_one_file_per_class() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Shop.cs");
        fs::write(&source, "namespace Shop { public class Cart { public int Count() => 0; } }").unwrap();
        let out = dir.path().join("out");

        let cli = cli_for(&source.to_string_lossy(), &out, &["--fail-marker", "todo"]);
        assert_eq!(scaffold(&cli).unwrap(), ExitCode::SUCCESS);

        let written = fs::read_to_string(out.join("Shop.Tests.CartTests.cs")).unwrap();
        assert!(written.contains("Assert.Fail(\"todo\");"));
    }

    #[test]
    fn test_parse_failure_is_a_run_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("Broken.cs");
        fs::write(&source, "public class Broken {").unwrap();
        let cli = cli_for(&source.to_string_lossy(), &dir.path().join("out"), &[]);

        let err = scaffold(&cli).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::FAILURE);
        assert!(err.message.contains("Broken.cs"), "{}", err.message);
    }

    #[test]
    fn test_keep_going_reports_skipped_files() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("Good.cs");
        fs::write(&good, "public class Good { }").unwrap();
        let missing = dir.path().join("Missing.cs");
        let inputs = format!("{}|{}", good.display(), missing.display());
        let out = dir.path().join("out");
        let cli = cli_for(&inputs, &out, &["--keep-going"]);

        assert_eq!(scaffold(&cli).unwrap(), ExitCode::FAILURE);
        assert!(out.join("GoodTests.cs").exists());
    }

    #[test]
    fn test_summary_mentions_skips() {
        let report = PipelineReport {
            files_read: 2,
            written: vec!["a".into()],
            failures: vec![PipelineError::WorkerPanicked("x".to_string())],
            ..PipelineReport::default()
        };
        let cli = parse_args(["testgen", "a.cs", "out", "1", "1", "1"]).unwrap();
        assert_eq!(
            summary(&report, &cli),
            "Generated 1 test file(s) from 2 source(s) into out (1 skipped)"
        );
    }
}
