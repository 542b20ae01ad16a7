use mastermind::cli::{CliInterface, parse_cli};
use mastermind::logging::{LogTarget, init_logging, log_file_path};
use mastermind::tui::TuiInterface;
use mastermind::{GameError, Secret, game_loop, seeded_rng};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();

    let target = match log_file_path() {
        Some(path) if cli.tui => LogTarget::File(path),
        _ => LogTarget::Stderr,
    };
    init_logging(target);

    let mut rng = seeded_rng(cli.seed);
    let secret = Secret::generate(&mut rng);
    log::debug!("secret generated (seed: {:?})", cli.seed);

    let result = if cli.tui {
        match TuiInterface::new() {
            Ok(mut interface) => game_loop(secret, &mut interface),
            Err(e) => {
                eprintln!("Failed to start terminal UI: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let stdin = io::stdin();
        let mut interface = CliInterface::new(stdin.lock());
        game_loop(secret, &mut interface)
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(GameError::Aborted) => {
            println!("Exiting. The secret was: {secret}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
