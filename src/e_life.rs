use e_life::cli::{parse_args, program_name};
use e_life::display::{format_usage, prepare_terminal, restore_terminal};
use e_life::{random, run_loop_with_config, GridConfig, LifeConfig, LifeResult, RunSummary};
use log::{debug, error, info, warn};
use std::io::{self, BufWriter};
use std::process::ExitCode;

/// Exit status used when the user interrupts the run
const INTERRUPTED_EXIT_CODE: i32 = 130;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let grid_config = match parse_args(&args) {
        Ok(grid_config) => grid_config,
        Err(e) => {
            debug!("{}", e);
            println!("{}", format_usage(&program_name(&args)));
            return ExitCode::FAILURE;
        }
    };

    match run(grid_config) {
        Ok(summary) => {
            info!(
                "Finished after {} generations ({:?})",
                summary.final_generation, summary.stop_reason
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("e_life: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(grid_config: GridConfig) -> LifeResult<RunSummary> {
    let config = LifeConfig::from_env()?;
    random::init_process_rng(config.simulation.seed);

    let mut grid = e_life::random_grid(&grid_config, &config.simulation)?;

    // Ctrl-C ends the process; only the cursor needs putting back first.
    if let Err(e) = ctrlc::set_handler(|| {
        let _ = restore_terminal(&mut io::stdout());
        std::process::exit(INTERRUPTED_EXIT_CODE);
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    let mut out = BufWriter::new(io::stdout());
    prepare_terminal(&mut out, config.display.hide_cursor)?;
    let summary = run_loop_with_config(&mut grid, &config.display, &mut out);
    restore_terminal(&mut out)?;

    Ok(summary?)
}
