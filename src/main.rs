//! Thali interactive cart shell

use std::{io, process::ExitCode};

use thiserror::Error;
use tracing::info;

use thali::{
    config::Config,
    menu::{Menu, MenuError},
    observability::{ObservabilityError, init_subscriber},
    shell::{Shell, ShellError},
};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Observability(#[from] ObservabilityError),

    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Shell(#[from] ShellError),
}

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            let code = if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };

            _ = err.print();

            return code;
        }
    };

    if let Err(err) = run(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "errors after startup are reported on stderr for the shell user"
        )]
        {
            eprintln!("thali: {err}");
        }

        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run(config: &Config) -> Result<(), AppError> {
    init_subscriber(&config.logging)?;

    let menu = match &config.menu {
        Some(path) => Menu::load(path)?,
        None => Menu::builtin()?,
    };

    info!(
        items = menu.items().len(),
        currency = menu.currency().iso_alpha_code,
        "menu loaded"
    );

    Shell::new(menu).run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
