//! Plate Layout CLI
//!
//! Usage:
//!   plate-layout [OPTIONS] <SCENE> <COMMAND>
//!
//! Commands:
//!   check   Audit every stored socket group
//!   scale   Compute the display scale for a viewport
//!   place   Validate a candidate position for a socket group

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use plate_layout::layout::{
    fit, lint, plate_origins, Board, DisplayMode, GroupId, PlateId, Point, Region,
};
use plate_layout::{EngineConfig, Scene};

#[derive(Parser)]
#[command(name = "plate-layout")]
#[command(about = "Validate and scale socket layouts on wall plates")]
struct Cli {
    /// Scene file with plates and socket groups (TOML format)
    scene: PathBuf,

    /// Engine configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Audit every stored socket group; exits non-zero on warnings
    Check,

    /// Compute the display scale for a viewport
    Scale {
        /// Viewport width in pixels
        #[arg(long)]
        width: f64,

        /// Viewport height in pixels
        #[arg(long)]
        height: f64,

        /// Show only this plate
        #[arg(long)]
        focus: Option<u32>,
    },

    /// Validate moving a socket group to a new anchor position
    Place {
        #[arg(long)]
        group: u32,

        #[arg(long)]
        x: f64,

        #[arg(long)]
        y: f64,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "plate_layout=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let board = match Scene::from_file(&cli.scene)
        .and_then(|scene| scene.into_board(config.layout.clone()))
    {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error loading scene '{}': {}", cli.scene.display(), e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command {
        Command::Check => run_check(&board),
        Command::Scale {
            width,
            height,
            focus,
        } => run_scale(&board, &config, Region::new(width, height), focus),
        Command::Place { group, x, y } => run_place(&board, GroupId(group), Point::new(x, y)),
    }
}

fn run_check(board: &Board) -> ExitCode {
    let warnings = lint::check(board);
    if warnings.is_empty() {
        println!(
            "ok: {} plates, {} socket groups",
            board.plates().len(),
            board.groups().len()
        );
        return ExitCode::SUCCESS;
    }
    for warning in &warnings {
        println!("{}", warning);
    }
    ExitCode::FAILURE
}

fn run_scale(
    board: &Board,
    config: &EngineConfig,
    viewport: Region,
    focus: Option<u32>,
) -> ExitCode {
    let (plates, mode) = match focus {
        Some(id) => match board.plate(PlateId(id)) {
            Some(plate) => (vec![plate.clone()], DisplayMode::SinglePlate),
            None => {
                eprintln!("Error: unknown plate {}", id);
                return ExitCode::FAILURE;
            }
        },
        None => (board.plates().to_vec(), DisplayMode::AllPlates),
    };

    let result = match fit(&plates, viewport, mode, &config.viewport) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("scale: {:.4}", result.scale);
    if result.centered {
        println!("centered: offset {:.1}px", result.offset_x);
    } else {
        println!("left-aligned");
    }
    for (id, origin) in plate_origins(&plates, &result, &config.viewport) {
        println!("plate {}: origin ({:.1}, {:.1})", id, origin.x, origin.y);
    }
    ExitCode::SUCCESS
}

fn run_place(board: &Board, group: GroupId, position: Point) -> ExitCode {
    let validation = match board.validate_move(group, position) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match validation.error {
        None => {
            println!("valid: group {} at ({}, {})", group, position.x, position.y);
            ExitCode::SUCCESS
        }
        Some(e) => {
            println!("invalid: {}", e);
            if let Some(suggestion) = e.suggest(position) {
                println!(
                    "suggestion: ({:.1}, {:.1})",
                    suggestion.x, suggestion.y
                );
            }
            ExitCode::FAILURE
        }
    }
}
