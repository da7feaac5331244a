use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{self, LogTarget};
use hangman::tui::TuiInterface;
use hangman::{WordBank, run_session};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = parse_cli();
    let config = cli.config();

    let target = if cli.tui {
        LogTarget::File(&config.log_path)
    } else {
        LogTarget::Stderr
    };
    if let Err(e) = logging::init(cli.verbose, target) {
        eprintln!("Failed to set up logging: {e}");
    }

    let wordbank = match &cli.wordbank_path {
        Some(path) => match WordBank::from_file(path) {
            Ok(bank) => bank,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return ExitCode::FAILURE;
            }
        },
        None => WordBank::embedded(),
    };
    log::info!("loaded {} words", wordbank.words().len());

    let rng = rand::rng();
    if cli.tui {
        match TuiInterface::new() {
            Ok(mut tui) => run_session(&config, wordbank, &mut tui, rng),
            Err(e) => {
                eprintln!("Failed to start the terminal interface: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut interface = CliInterface::stdio();
        run_session(&config, wordbank, &mut interface, rng);
    }
    ExitCode::SUCCESS
}
