//! Command-line interface for generating, solving, rendering and inspecting mazes

use crate::algorithm::executor::{GenerationMode, MazeGenerator};
use crate::algorithm::pathfinding::{SolveAlgorithm, solve};
use crate::analysis::statistics::MazeStatistics;
use crate::io::configuration::{
    DEFAULT_ALGORITHM, DEFAULT_CELL_SIZE, DEFAULT_COLS, DEFAULT_MODE, DEFAULT_ROWS, MAX_DIMENSION,
    MIN_DIMENSION,
};
use crate::io::document::{load_maze, maze_to_json, solution_to_json, write_document};
use crate::io::error::{MazeError, Result, file_system_error, invalid_parameter};
use crate::io::image::Rasterizer;
use crate::io::progress::StageProgress;
use crate::spatial::Point;
use crate::spatial::ascii::render_ascii;
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridmaze")]
#[command(
    author,
    version,
    about = "Generate, solve and render grid mazes, optionally guided by image edges"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,

    /// Suppress the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level filter implied by the verbosity count
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Generate a maze and write it as JSON (and optionally PNG)
    Generate(GenerateArgs),
    /// Solve a maze document and report the search result as JSON
    Solve(SolveArgs),
    /// Render a maze document to PNG
    Render(RenderArgs),
    /// Print a maze document as ASCII art with statistics
    Show(ShowArgs),
}

/// Arguments of `generate`
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of cell rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of cell columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Generation mode: kruskal, recursive or image
    #[arg(short, long, default_value = DEFAULT_MODE)]
    pub mode: GenerationMode,

    /// Source image for image mode
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Random seed for reproducible generation (drawn at random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Start cell as `row,col` on the border
    #[arg(long, value_parser = parse_point, requires = "end")]
    pub start: Option<Point>,

    /// End cell as `row,col` on the border
    #[arg(long, value_parser = parse_point, requires = "start")]
    pub end: Option<Point>,

    /// Maze JSON destination (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also render the maze to this PNG file
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Pixels per cell edge for the PNG
    #[arg(short = 'k', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,
}

/// Arguments of `solve`
#[derive(Args)]
pub struct SolveArgs {
    /// Maze JSON document
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,

    /// Search algorithm: astar, bfs or dfs
    #[arg(short, long, default_value = DEFAULT_ALGORITHM)]
    pub algorithm: SolveAlgorithm,

    /// Solution JSON destination (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments of `render`
#[derive(Args)]
pub struct RenderArgs {
    /// Maze JSON document
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,

    /// Pixels per cell edge
    #[arg(short = 'k', long, default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: u32,

    /// PNG destination
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments of `show`
#[derive(Args)]
pub struct ShowArgs {
    /// Maze JSON document
    #[arg(value_name = "MAZE")]
    pub maze: PathBuf,
}

/// Parse a `row,col` coordinate
///
/// # Errors
///
/// Returns `InvalidParameter` if the text is not two comma-separated indices
pub fn parse_point(text: &str) -> Result<Point> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| invalid_parameter("point", &text, &"expected `row,col`"))?;
    let index = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| invalid_parameter("point", &text, &e))
    };
    Ok([index(row)?, index(col)?])
}

/// Check requested dimensions against the command-line bounds
///
/// # Errors
///
/// Returns `InvalidDimensions` if either side lies outside
/// `MIN_DIMENSION..=MAX_DIMENSION`
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let bounds = MIN_DIMENSION..=MAX_DIMENSION;
    if bounds.contains(&rows) && bounds.contains(&cols) {
        Ok(())
    } else {
        Err(MazeError::InvalidDimensions {
            rows,
            cols,
            reason: format!("rows and cols must lie in {MIN_DIMENSION}..={MAX_DIMENSION}"),
        })
    }
}

/// Executes a parsed command line with stage progress
pub struct CommandRunner {
    cli: Cli,
    progress: StageProgress,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            StageProgress::new(command_name(&cli.command))
        } else {
            StageProgress::hidden()
        };
        Self { cli, progress }
    }

    /// Run the command, writing textual output to stdout
    ///
    /// # Errors
    ///
    /// Returns any error produced by the selected command
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.execute(&mut handle)
    }

    /// Run the command, writing textual output to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Dimensions, options or endpoints are invalid
    /// - A document or image cannot be read, decoded or written
    pub fn execute<W: Write>(mut self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Command::Generate(args) => Self::generate(&mut self.progress, args, out)?,
            Command::Solve(args) => Self::solve(&mut self.progress, args, out)?,
            Command::Render(args) => Self::render(&mut self.progress, args)?,
            Command::Show(args) => Self::show(&mut self.progress, args, out)?,
        }
        for (stage, elapsed) in self.progress.finish() {
            debug!("{stage} took {elapsed:?}");
        }
        Ok(())
    }

    fn generate<W: Write>(
        progress: &mut StageProgress,
        args: &GenerateArgs,
        out: &mut W,
    ) -> Result<()> {
        validate_dimensions(args.rows, args.cols)?;

        let image = match (&args.image, args.mode.needs_image()) {
            (Some(path), true) => {
                progress.stage("reading image");
                Some(std::fs::read(path).map_err(|e| file_system_error(path, "read image", e))?)
            }
            (Some(path), false) => {
                warn!("ignoring {} for {} generation", path.display(), args.mode);
                None
            }
            (None, _) => None,
        };

        let seed = args.seed.unwrap_or_else(rand::random);
        info!("using seed {seed}");

        progress.stage("generating");
        let mut generator = MazeGenerator::new(seed);
        let maze = match (args.start, args.end) {
            (Some(start), Some(end)) => generator.generate_with_endpoints(
                args.rows,
                args.cols,
                args.mode,
                image.as_deref(),
                (start, end),
            )?,
            _ => generator.generate(args.rows, args.cols, args.mode, image.as_deref())?,
        };

        // Reject an unusable cell size before any document is written
        let raster = args
            .png
            .as_ref()
            .map(|path| -> Result<_> {
                let rasterizer = Rasterizer::new(args.cell_size)?;
                rasterizer.canvas_size(&maze)?;
                Ok((rasterizer, path))
            })
            .transpose()?;

        progress.stage("writing maze");
        let document = maze_to_json(&maze)?;
        emit(args.output.as_deref(), &document, out)?;

        if let Some((rasterizer, path)) = raster {
            progress.stage("rendering");
            rasterizer.export_png(&maze, path)?;
        }
        Ok(())
    }

    fn solve<W: Write>(progress: &mut StageProgress, args: &SolveArgs, out: &mut W) -> Result<()> {
        progress.stage("loading maze");
        let maze = load_maze(&args.maze)?;

        progress.stage("searching");
        let solution = solve(&maze, args.algorithm)?;
        if !solution.is_solved() {
            warn!("{} found no path from start to end", args.algorithm);
        }

        progress.stage("writing solution");
        emit(args.output.as_deref(), &solution_to_json(&solution)?, out)
    }

    fn render(progress: &mut StageProgress, args: &RenderArgs) -> Result<()> {
        progress.stage("loading maze");
        let maze = load_maze(&args.maze)?;

        progress.stage("rendering");
        Rasterizer::new(args.cell_size)?.export_png(&maze, &args.output)
    }

    fn show<W: Write>(progress: &mut StageProgress, args: &ShowArgs, out: &mut W) -> Result<()> {
        progress.stage("loading maze");
        let maze = load_maze(&args.maze)?;

        progress.stage("measuring");
        let stats = MazeStatistics::measure(&maze);
        let report = format!(
            "{}\n\n{}x{} cells, {} open passages, {} dead ends\n\
             solution length {}, complexity {:.3}\n",
            render_ascii(&maze),
            maze.rows(),
            maze.cols(),
            stats.open_passages,
            stats.dead_ends,
            stats.solution_length,
            stats.complexity
        );
        write_stdout(out, &report)
    }
}

const fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Generate(_) => "generate",
        Command::Solve(_) => "solve",
        Command::Render(_) => "render",
        Command::Show(_) => "show",
    }
}

// Documents go to the file when one is given, otherwise to the output stream
fn emit<W: Write>(path: Option<&Path>, document: &str, out: &mut W) -> Result<()> {
    match path {
        Some(path) => write_document(path, document),
        None => write_stdout(out, &format!("{document}\n")),
    }
}

fn write_stdout<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| file_system_error("<stdout>", "write output", e))
}
