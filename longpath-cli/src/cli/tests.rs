//! Tests for CLI argument parsing, command execution and report rendering.

use std::io::Cursor;

use clap::Parser;
use rstest::rstest;
use tempfile::tempdir;

use super::*;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("fixture must be writable");
    path
}

fn path10_contents() -> String {
    (1..10u64)
        .map(|id| format!("{id} {}\n", id + 1))
        .collect()
}

#[test]
fn estimate_arguments_parse_with_defaults() {
    let cli = Cli::try_parse_from(["longpath", "estimate", "graph.edges"])
        .expect("arguments must parse");
    let Command::Estimate(command) = cli.command else {
        panic!("expected the estimate command");
    };
    assert!(matches!(command.strategy, StrategyArg::DoubleSweep));
    assert!(matches!(command.format, FormatArg::Auto));
    assert_eq!(command.seed, longpath_core::DEFAULT_RNG_SEED);
    assert!(command.samples.is_none());
}

#[test]
fn generate_arguments_parse_fraction_band() {
    let cli = Cli::try_parse_from([
        "longpath",
        "generate",
        "300",
        "out.edges",
        "--min-fraction",
        "0.8",
        "--max-fraction",
        "0.9",
        "--seed",
        "7",
    ])
    .expect("arguments must parse");
    let Command::Generate(command) = cli.command else {
        panic!("expected the generate command");
    };
    assert_eq!(command.vertices, 300);
    assert!((command.min_fraction - 0.8).abs() < f64::EPSILON);
    assert!((command.max_fraction - 0.9).abs() < f64::EPSILON);
    assert_eq!(command.seed, 7);
}

#[test]
fn double_sweep_recovers_the_path_diameter_end_to_end() {
    let dir = tempdir().expect("temp dir must exist");
    let path = write_fixture(&dir, "path10.mtx", &path10_contents());

    let cli = Cli::try_parse_from([
        "longpath",
        "estimate",
        path.to_str().expect("path is UTF-8"),
        "--strategy",
        "double-sweep",
        "--seed",
        "5",
    ])
    .expect("arguments must parse");

    let summary = run_cli(cli).expect("estimation must succeed");
    let ExecutionSummary::Estimate(summary) = summary else {
        panic!("expected an estimate summary");
    };
    assert_eq!(summary.data_source, "path10");
    assert_eq!(summary.vertices, 10);
    assert_eq!(summary.component_size, 10);
    assert_eq!(summary.max_degree, 2);
    assert_eq!(summary.estimate.hops(), 9);
}

#[test]
fn single_pair_runs_on_geometric_input_with_heuristic() {
    let dir = tempdir().expect("temp dir must exist");
    // A four-vertex path laid out on a line.
    let contents = "1 0.0 0.0 2 0.2 0.0\n2 0.2 0.0 3 0.4 0.0\n3 0.4 0.0 4 0.6 0.0\n";
    let path = write_fixture(&dir, "line.edges", contents);

    let cli = Cli::try_parse_from([
        "longpath",
        "estimate",
        path.to_str().expect("path is UTF-8"),
        "--strategy",
        "single-pair",
        "--source",
        "1",
        "--destination",
        "4",
        "--euclidean-heuristic",
    ])
    .expect("arguments must parse");

    let summary = run_cli(cli).expect("estimation must succeed");
    let ExecutionSummary::Estimate(summary) = summary else {
        panic!("expected an estimate summary");
    };
    assert_eq!(summary.estimate.hops(), 3);
    let path = summary.estimate.path().expect("single pair yields a path");
    assert_eq!(path.len(), 4);
}

#[test]
fn single_pair_without_endpoints_is_rejected() {
    let dir = tempdir().expect("temp dir must exist");
    let path = write_fixture(&dir, "tiny.mtx", "1 2\n");

    let cli = Cli::try_parse_from([
        "longpath",
        "estimate",
        path.to_str().expect("path is UTF-8"),
        "--strategy",
        "single-pair",
        "--source",
        "1",
    ])
    .expect("arguments must parse");

    let err = run_cli(cli).expect_err("missing destination must fail");
    assert!(matches!(err, CliError::MissingEndpoints));
}

#[test]
fn heuristic_on_plain_input_is_rejected() {
    let dir = tempdir().expect("temp dir must exist");
    let path = write_fixture(&dir, "plain.mtx", "1 2\n2 3\n");

    let cli = Cli::try_parse_from([
        "longpath",
        "estimate",
        path.to_str().expect("path is UTF-8"),
        "--strategy",
        "single-pair",
        "--source",
        "1",
        "--destination",
        "3",
        "--euclidean-heuristic",
    ])
    .expect("arguments must parse");

    let err = run_cli(cli).expect_err("plain input has no positions");
    assert!(matches!(err, CliError::HeuristicUnavailable));
}

#[test]
fn missing_input_file_reports_the_path() {
    let cli = Cli::try_parse_from(["longpath", "estimate", "/definitely/not/here.mtx"])
        .expect("arguments must parse");
    let err = run_cli(cli).expect_err("missing file must fail");
    assert!(matches!(err, CliError::Io { .. }));
}

#[rstest]
#[case("edges")]
#[case("pairs")]
fn generated_instances_round_trip_through_estimate(#[case] flag: &str) {
    let dir = tempdir().expect("temp dir must exist");
    let output = dir.path().join(format!("instance.{flag}"));

    let generate = Cli::try_parse_from([
        "longpath",
        "generate",
        "40",
        output.to_str().expect("path is UTF-8"),
        "--format",
        flag,
        "--min-fraction",
        "0.5",
        "--max-fraction",
        "1.0",
        "--seed",
        "9",
    ])
    .expect("arguments must parse");

    let summary = run_cli(generate).expect("generation must succeed");
    let ExecutionSummary::Generate(generated) = summary else {
        panic!("expected a generate summary");
    };
    assert_eq!(generated.vertices, 40);
    assert!(generated.calibrated);
    assert!(generated.component_size >= 20);

    let estimate = Cli::try_parse_from([
        "longpath",
        "estimate",
        output.to_str().expect("path is UTF-8"),
        "--strategy",
        "sampled",
        "--samples",
        "4",
    ])
    .expect("arguments must parse");

    let summary = run_cli(estimate).expect("estimation must succeed");
    let ExecutionSummary::Estimate(estimated) = summary else {
        panic!("expected an estimate summary");
    };
    assert_eq!(estimated.component_size, generated.component_size);
    assert_eq!(estimated.estimate.trials(), 4);
    assert!(estimated.estimate.length() >= 0.0);
}

#[test]
fn explicit_radius_skips_calibration() {
    let dir = tempdir().expect("temp dir must exist");
    let output = dir.path().join("fixed.edges");

    let cli = Cli::try_parse_from([
        "longpath",
        "generate",
        "15",
        output.to_str().expect("path is UTF-8"),
        "--radius",
        "1.5",
    ])
    .expect("arguments must parse");

    let summary = run_cli(cli).expect("generation must succeed");
    let ExecutionSummary::Generate(summary) = summary else {
        panic!("expected a generate summary");
    };
    assert!(!summary.calibrated);
    // Radius 1.5 exceeds the unit-square diameter, so the graph is complete.
    assert_eq!(summary.edges, 15 * 14 / 2);
    assert_eq!(summary.component_size, 15);
}

#[test]
fn render_summary_lists_the_report_fields() {
    let dir = tempdir().expect("temp dir must exist");
    let path = write_fixture(&dir, "path10.mtx", &path10_contents());

    let cli = Cli::try_parse_from([
        "longpath",
        "estimate",
        path.to_str().expect("path is UTF-8"),
    ])
    .expect("arguments must parse");
    let summary = run_cli(cli).expect("estimation must succeed");

    let mut buffer = Cursor::new(Vec::new());
    render_summary(&summary, &mut buffer).expect("rendering must succeed");
    let text = String::from_utf8(buffer.into_inner()).expect("output is UTF-8");

    assert!(text.contains("data source: path10"));
    assert!(text.contains("largest component: 10 vertices"));
    assert!(text.contains("average degree: 1.800"));
    assert!(text.contains("strategy: double-sweep"));
    assert!(text.contains("estimated longest simple path: 9"));
}

#[test]
fn derive_data_source_name_prefers_the_override() {
    use super::commands::derive_data_source_name;

    let path = std::path::Path::new("/tmp/graph_n300.edges");
    assert_eq!(derive_data_source_name(path, Some("custom")), "custom");
    assert_eq!(derive_data_source_name(path, None), "graph_n300");
}
