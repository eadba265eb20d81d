//! Command dispatch

use std::io;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::application::services::CalculatorService;
use crate::application::ApplicationError;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::cli::render::render_form;
use crate::cli::session::Session;
use crate::config::{global_config_path, Settings};
use crate::infrastructure::di::ServiceContainer;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Completion { shell }) => cmd_completion(*shell),
        Some(Commands::Config { command }) => cmd_config(cli, command),
        Some(Commands::Calc {
            items,
            adjustment,
            toml,
        }) => cmd_calc(&container(cli)?, items, adjustment.as_deref(), *toml),
        Some(Commands::Form) | None => cmd_form(&container(cli)?),
    }
}

fn container(cli: &Cli) -> CliResult<ServiceContainer> {
    let settings = Settings::load(cli.config.as_deref())?;
    Ok(ServiceContainer::new(settings))
}

#[instrument(skip(container))]
fn cmd_form(container: &ServiceContainer) -> CliResult<()> {
    let mut session = Session::new(container.calculator(), &container.settings.labels);
    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout.lock())
}

/// Build a session from command-line rows: the first text fills the initial
/// row, each further text adds one. Adjustment text uses numeric-field rules.
pub fn calculator_from_args(
    container: &ServiceContainer,
    items: &[String],
    adjustment: Option<&str>,
) -> CalculatorService {
    let mut service = container.calculator();
    for (idx, text) in items.iter().enumerate() {
        let id = if idx == 0 {
            service
                .items()
                .at_position(1)
                .map(|item| item.id.clone())
                .unwrap_or_else(|| service.add())
        } else {
            service.add()
        };
        service.update_text(&id, text);
    }
    if let Some(text) = adjustment {
        service.edit_adjustment(text);
    }
    service
}

#[instrument(skip(container))]
fn cmd_calc(
    container: &ServiceContainer,
    items: &[String],
    adjustment: Option<&str>,
    as_toml: bool,
) -> CliResult<()> {
    let service = calculator_from_args(container, items, adjustment);
    debug!("calc: {} rows, figures={:?}", service.items().len(), service.figures());

    let text = if as_toml {
        toml::to_string_pretty(&service.figures()).map_err(|e| {
            ApplicationError::OperationFailed {
                context: "serialize figures".into(),
                source: Box::new(e),
            }
        })?
    } else {
        render_form(&service.view(&container.settings.labels))
    };
    output::raw(&mut io::stdout().lock(), &text)?;
    Ok(())
}

#[instrument(skip(cli))]
fn cmd_config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(settings.to_toml()?.trim_end());
        }
        ConfigCommands::Init => {
            let path = global_config_path()
                .ok_or_else(|| CliError::Usage("cannot determine config directory".into()))?;
            Settings::write_template(&path)?;
            output::success(&format!("Created {}", path.display()));
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => return Err(CliError::Usage("cannot determine config directory".into())),
        },
    }
    Ok(())
}

fn cmd_completion(shell: clap_complete::Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
