//! Command implementations and argument parsing for the longpath CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use longpath_core::{
    DEFAULT_RNG_SEED, DegreeStats, EstimateError, EstimatorBuilder, GraphSource, PathEstimate,
    Strategy, VertexId, largest_component,
};
use longpath_providers_edgelist::{
    EdgeListError, EdgeListFormat, EdgeListSource, EuclideanHeuristic,
};
use longpath_providers_geometric::{
    FractionBand, GeometricConfig, GeometricError, GeometricGraph, calibrate_radius,
};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "longpath",
    about = "Estimate the longest simple path in a graph's largest connected component."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Estimate the longest simple path of an edge-list graph.
    Estimate(EstimateCommand),
    /// Generate a random geometric test instance.
    Generate(GenerateCommand),
}

/// Options accepted by the `estimate` command.
#[derive(Debug, Args, Clone)]
pub struct EstimateCommand {
    /// Path to the edge-list file.
    pub path: PathBuf,

    /// Input encoding; `auto` detects from the first record.
    #[arg(long, value_enum, default_value = "auto")]
    pub format: FormatArg,

    /// Estimation strategy to run.
    #[arg(long, value_enum, default_value = "double-sweep")]
    pub strategy: StrategyArg,

    /// Source vertex id (single-pair strategy only).
    #[arg(long)]
    pub source: Option<u64>,

    /// Destination vertex id (single-pair strategy only).
    #[arg(long)]
    pub destination: Option<u64>,

    /// Override the number of randomised trials.
    #[arg(long)]
    pub samples: Option<usize>,

    /// Seed for the trial RNG.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,

    /// Bias single-pair frontier order by Euclidean distance to the
    /// destination (geometric input only).
    #[arg(long)]
    pub euclidean_heuristic: bool,

    /// Override name for the data source (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateCommand {
    /// Number of vertices to place in the unit square.
    pub vertices: usize,

    /// Path of the file to write.
    pub output: PathBuf,

    /// Output encoding.
    #[arg(long, value_enum, default_value = "edges")]
    pub format: OutputFormatArg,

    /// Smallest acceptable largest-component fraction when calibrating.
    #[arg(long, default_value_t = 0.9)]
    pub min_fraction: f64,

    /// Largest acceptable largest-component fraction when calibrating.
    #[arg(long, default_value_t = 0.95)]
    pub max_fraction: f64,

    /// Explicit connectivity radius; skips calibration.
    #[arg(long)]
    pub radius: Option<f64>,

    /// Seed for point placement and calibration probes.
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    pub seed: u64,
}

/// Input encodings selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    /// Detect from the first non-blank record.
    Auto,
    /// `u v` or `u v weight` lines.
    Plain,
    /// `u x_u y_u v x_v y_v` lines.
    Geometric,
}

/// Estimation strategies selectable on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    /// Max-relaxation search between `--source` and `--destination`.
    SinglePair,
    /// Multi-source sampled max-relaxation.
    Sampled,
    /// Double-sweep depth heuristic.
    DoubleSweep,
}

/// Output encodings for generated instances.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    /// Six-field geometric lines with coordinates.
    Edges,
    /// Two-field `u v` lines.
    Pairs,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading or writing an instance.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Edge-list ingestion failed.
    #[error(transparent)]
    EdgeList(#[from] EdgeListError),
    /// Instance generation or calibration failed.
    #[error(transparent)]
    Geometric(#[from] GeometricError),
    /// Core estimation failed.
    #[error(transparent)]
    Core(#[from] EstimateError),
    /// The single-pair strategy was selected without both endpoints.
    #[error("the single-pair strategy requires --source and --destination")]
    MissingEndpoints,
    /// The Euclidean heuristic needs geometric input and a single-pair
    /// destination with a known position.
    #[error(
        "--euclidean-heuristic requires the single-pair strategy on geometric input \
         with a positioned destination"
    )]
    HeuristicUnavailable,
}

/// Summarises an `estimate` run.
#[derive(Debug, Clone)]
pub struct EstimateSummary {
    /// Name reported by the data source.
    pub data_source: String,
    /// Total vertices in the loaded graph.
    pub vertices: usize,
    /// Vertices in the largest connected component.
    pub component_size: usize,
    /// Maximum degree over the component.
    pub max_degree: usize,
    /// Average degree over the component.
    pub average_degree: f64,
    /// The estimate produced by the selected strategy.
    pub estimate: PathEstimate,
}

/// Summarises a `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    /// Path the instance was written to.
    pub output: PathBuf,
    /// Number of vertices placed.
    pub vertices: usize,
    /// Number of undirected edges written.
    pub edges: usize,
    /// Connectivity radius used.
    pub radius: f64,
    /// Whether the radius came from calibration.
    pub calibrated: bool,
    /// Size of the instance's largest connected component.
    pub component_size: usize,
}

/// Outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// An `estimate` run completed.
    Estimate(EstimateSummary),
    /// A `generate` run completed.
    Generate(GenerateSummary),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when parsing or execution fails.
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Estimate(command) => {
            Span::current().record("command", field::display("estimate"));
            run_estimate(command).map(ExecutionSummary::Estimate)
        }
        Command::Generate(command) => {
            Span::current().record("command", field::display("generate"));
            run_generate(command).map(ExecutionSummary::Generate)
        }
    }
}

#[instrument(
    name = "cli.estimate",
    err,
    skip(command),
    fields(path = field::Empty, strategy = field::Empty),
)]
pub(super) fn run_estimate(command: EstimateCommand) -> Result<EstimateSummary, CliError> {
    let EstimateCommand {
        path,
        format,
        strategy,
        source,
        destination,
        samples,
        seed,
        euclidean_heuristic,
        name,
    } = command;

    let span = Span::current();
    span.record("path", field::display(path.display()));

    let chosen_name = derive_data_source_name(&path, name.as_deref());
    let reader = open_reader(&path)?;
    let edge_source = match format {
        FormatArg::Auto => EdgeListSource::from_reader(chosen_name, reader)?,
        FormatArg::Plain => {
            EdgeListSource::with_format(chosen_name, reader, EdgeListFormat::Plain)?
        }
        FormatArg::Geometric => {
            EdgeListSource::with_format(chosen_name, reader, EdgeListFormat::Geometric)?
        }
    };

    let graph = edge_source.build_graph();
    let component = largest_component(&graph)?;
    let degrees = DegreeStats::for_component(&graph, &component);

    let strategy = resolve_strategy(strategy, source, destination)?;
    span.record("strategy", field::debug(strategy));

    let mut builder = EstimatorBuilder::new()
        .with_strategy(strategy)
        .with_rng_seed(seed);
    if let Some(samples) = samples {
        builder = builder.with_sample_count(samples);
    }
    let estimator = builder.build()?;

    let estimate = if euclidean_heuristic {
        let Strategy::SinglePair { destination, .. } = strategy else {
            return Err(CliError::HeuristicUnavailable);
        };
        let heuristic = EuclideanHeuristic::towards(&edge_source, destination)
            .ok_or(CliError::HeuristicUnavailable)?;
        estimator.estimate_with_heuristic(&graph, &component, &heuristic)?
    } else {
        estimator.estimate(&graph, &component)?
    };

    info!(
        data_source = edge_source.name(),
        component_size = component.len(),
        length = estimate.length(),
        "estimate completed"
    );
    Ok(EstimateSummary {
        data_source: edge_source.name().to_owned(),
        vertices: graph.vertex_count(),
        component_size: component.len(),
        max_degree: degrees.max(),
        average_degree: degrees.average(),
        estimate,
    })
}

#[instrument(
    name = "cli.generate",
    err,
    skip(command),
    fields(vertices = command.vertices, output = field::Empty),
)]
pub(super) fn run_generate(command: GenerateCommand) -> Result<GenerateSummary, CliError> {
    let GenerateCommand {
        vertices,
        output,
        format,
        min_fraction,
        max_fraction,
        radius,
        seed,
    } = command;

    Span::current().record("output", field::display(output.display()));

    let (radius, calibrated) = match radius {
        Some(radius) => (radius, false),
        None => {
            let band = FractionBand {
                min: min_fraction,
                max: max_fraction,
            };
            (calibrate_radius(vertices, band, seed)?, true)
        }
    };

    let instance = GeometricGraph::generate(&GeometricConfig {
        vertices,
        radius,
        seed,
    })?;

    let file = File::create(&output).map_err(|source| CliError::Io {
        path: output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let write_result = match format {
        OutputFormatArg::Edges => instance.write_edges(&mut writer),
        OutputFormatArg::Pairs => instance.write_pairs(&mut writer),
    };
    write_result
        .and_then(|()| writer.flush())
        .map_err(|source| CliError::Io {
            path: output.clone(),
            source,
        })?;

    info!(
        vertices,
        radius,
        calibrated,
        edges = instance.edges().len(),
        "instance written"
    );
    Ok(GenerateSummary {
        output,
        vertices,
        edges: instance.edges().len(),
        radius,
        calibrated,
        component_size: instance.largest_component_size(),
    })
}

fn resolve_strategy(
    strategy: StrategyArg,
    source: Option<u64>,
    destination: Option<u64>,
) -> Result<Strategy, CliError> {
    match strategy {
        StrategyArg::SinglePair => match (source, destination) {
            (Some(source), Some(destination)) => Ok(Strategy::SinglePair {
                source: VertexId::new(source),
                destination: VertexId::new(destination),
            }),
            _ => Err(CliError::MissingEndpoints),
        },
        StrategyArg::Sampled => Ok(Strategy::SampledRelaxation),
        StrategyArg::DoubleSweep => Ok(Strategy::DoubleSweep),
    }
}

fn open_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "edge_list".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Estimate(summary) => {
            writeln!(writer, "data source: {}", summary.data_source)?;
            writeln!(writer, "vertices: {}", summary.vertices)?;
            writeln!(
                writer,
                "largest component: {} vertices",
                summary.component_size
            )?;
            writeln!(writer, "max degree: {}", summary.max_degree)?;
            writeln!(writer, "average degree: {:.3}", summary.average_degree)?;
            writeln!(
                writer,
                "strategy: {} ({} trials)",
                summary.estimate.strategy(),
                summary.estimate.trials()
            )?;
            writeln!(
                writer,
                "estimated longest simple path: {}",
                format_length(summary.estimate.length())
            )?;
        }
        ExecutionSummary::Generate(summary) => {
            writeln!(writer, "output: {}", summary.output.display())?;
            writeln!(writer, "vertices: {}", summary.vertices)?;
            writeln!(writer, "edges: {}", summary.edges)?;
            let suffix = if summary.calibrated { " (calibrated)" } else { "" };
            writeln!(writer, "radius: {:.4}{suffix}", summary.radius)?;
            writeln!(
                writer,
                "largest component: {} vertices",
                summary.component_size
            )?;
        }
    }
    Ok(())
}

fn format_length(length: f64) -> String {
    if length.fract() == 0.0 {
        format!("{}", length as u64)
    } else {
        format!("{length:.3}")
    }
}
