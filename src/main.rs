mod constant;
mod error;
mod headless;
mod log;
mod session;
mod viewer;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{error::AppError, session::Session};

#[derive(Parser, Debug)]
#[command(name = "befunge")]
#[command(about = "Step through a Befunge-93 program")]
struct Cli {
    /// Program file, or `-` to read it from stdin
    program: PathBuf,

    /// Delay between steps in the window, in milliseconds
    #[arg(long, default_value_t = constant::DEFAULT_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Seed for the `?` instruction (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run in the terminal without opening a window
    #[arg(long)]
    headless: bool,

    /// Interrupt a headless run after this many steps
    #[arg(long, requires = "headless")]
    max_steps: Option<u64>,
}

fn read_program(path: &Path) -> Result<String, AppError> {
    let read = if headless::reads_program_from_stdin(path) {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source).map(|_| source)
    } else {
        fs::read_to_string(path)
    };

    read.map_err(|source| AppError::ReadProgram {
        path: path.to_path_buf(),
        source,
    })
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "befunge=info,lang_vm=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let source = match read_program(&cli.program) {
        Ok(source) => source,
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    };
    let grid = lang_loader::load(&source);
    info!(program = %cli.program.display(), "program loaded");

    if cli.headless {
        let mut session = Session::new(grid, cli.seed);
        let input = headless::input_lines(&cli.program);
        let stdout = io::stdout();
        if let Err(err) = headless::run(&mut session, input, stdout.lock(), cli.max_steps) {
            error!("{}", err);
            std::process::exit(1);
        }
        return;
    }

    viewer::run(
        &cli.program.display().to_string(),
        grid,
        cli.seed,
        Duration::from_millis(cli.delay_ms),
    )
}
