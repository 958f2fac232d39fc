mod render;

use std::{
    ffi::OsStr,
    io::Write,
    path::{Path, PathBuf},
};

use clap::Parser;
use crossterm::{
    queue,
    style::{self, Attribute, Color, Stylize},
};
use mazecarve::{Coord, Generator, Maze, MazeConfig, Solver};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Generate a maze, optionally solve it, and print it to the terminal.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of cell rows (1-255)
    #[arg(short, long, default_value_t = 10)]
    rows: u8,
    /// Number of cell columns (1-255)
    #[arg(short, long, default_value_t = 20)]
    cols: u8,
    /// Generation algorithm: dfs_bfs, wilson, kruskal, prim or eller
    #[arg(short, long, default_value = "dfs_bfs")]
    generator: Generator,
    /// Solving algorithm: dfs, bfs, dijkstra, a_star or dead_end_filling
    #[arg(short, long)]
    solver: Option<Solver>,
    /// Break extra walls after generation so several routes exist
    #[arg(short, long)]
    multiple_paths: bool,
    /// Number of extra-path attempts, a tenth of the cells by default
    #[arg(long)]
    trials: Option<usize>,
    /// Seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// Solution entry as `row,col`, top-left by default
    #[arg(long, value_parser = parse_coord)]
    entry: Option<Coord>,
    /// Solution exit as `row,col`, bottom-right by default
    #[arg(long, value_parser = parse_coord)]
    exit: Option<Coord>,
    /// Print with ASCII characters instead of emoji blocks
    #[arg(long)]
    ascii: bool,
    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_coord(s: &str) -> Result<Coord, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<u8>()
            .map_err(|e| format!("invalid coordinate `{}`: {}", part, e))
    };
    Ok((parse(row)?, parse(col)?))
}

/// Set up logging. The returned guard must live until the end of `main` so buffered
/// log lines reach the file.
fn init_tracing(log_file: Option<&Path>, verbose: u8) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    match log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path.file_name().unwrap_or(OsStr::new("mazecarve.log"));
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let _guard = init_tracing(args.log_file.as_deref(), args.verbose);

    let config = MazeConfig {
        rows: args.rows,
        cols: args.cols,
        generator: args.generator,
        allow_multiple_paths: args.multiple_paths,
        trials: args.trials,
        seed: args.seed,
        ..Default::default()
    };
    let mut maze = Maze::with_config(&config)?;

    let mut stdout = std::io::stdout();
    let mut summary = format!("Generator: {}", maze.generator());
    if let Some(solver) = args.solver {
        let entry = args.entry.unwrap_or(maze.entry());
        let exit = args.exit.unwrap_or(maze.exit());
        let goal_reached = maze.solve(solver, entry, exit)?;
        if !goal_reached {
            tracing::warn!("No path found from {:?} to {:?}", entry, exit);
        }
        summary.push_str(&format!(" | Solver: {}", solver));
    }

    render::print_board(&mut stdout, &maze.board(), args.ascii)?;
    queue!(
        stdout,
        style::PrintStyledContent(
            format!("{}\n", summary)
                .with(Color::Green)
                .attribute(Attribute::Bold)
        )
    )?;
    stdout.flush()?;
    Ok(())
}
