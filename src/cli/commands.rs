//! Command dispatch

use std::io;

use clap::CommandFactory;
use clap_complete::generate;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, LineageService};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::demo_coven;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage(
            "no command given, try `bloodline --help`".to_string(),
        ));
    };

    match command {
        Commands::Config { command } => return config_command(cli, command),
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            return Ok(());
        }
        _ => {}
    }

    let service = build_service(cli)?;
    match command {
        Commands::Demo => _ancestor(&service, "c", "b"),
        Commands::Tree => _tree(&service),
        Commands::Ancestor { left, right } => _ancestor(&service, left, right),
        Commands::Seniority { left, right } => _seniority(&service, left, right),
        Commands::Find { name } => _find(&service, name),
        Commands::Count { name } => _count(&service, name.as_deref()),
        Commands::Millennials { after } => _millennials(&service, *after),
        Commands::Config { .. } | Commands::Completion { .. } => Ok(()),
    }
}

fn build_service(cli: &Cli) -> CliResult<LineageService> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(?settings, "settings loaded");
    let coven = demo_coven().map_err(ApplicationError::from)?;
    Ok(LineageService::new(coven, settings))
}

fn config_command(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => {
                return Err(ApplicationError::Config {
                    message: "cannot determine config directory".to_string(),
                }
                .into())
            }
        },
    }
    Ok(())
}

#[instrument(skip(service))]
fn _ancestor(service: &LineageService, left: &str, right: &str) -> CliResult<()> {
    let ancestor = service.closest_common_ancestor(left, right)?;
    output::info(&ancestor.name);
    Ok(())
}

#[instrument(skip(service))]
fn _tree(service: &LineageService) -> CliResult<()> {
    for tree in service.render()? {
        print!("{tree}");
    }
    Ok(())
}

#[instrument(skip(service))]
fn _seniority(service: &LineageService, left: &str, right: &str) -> CliResult<()> {
    let seniority = service.seniority(left, right)?;
    output::detail(&format!(
        "{}: {} from the original",
        seniority.left, seniority.left_distance
    ));
    output::detail(&format!(
        "{}: {} from the original",
        seniority.right, seniority.right_distance
    ));
    let verdict = if seniority.left_is_more_senior {
        format!("{} is more senior than {}", seniority.left, seniority.right)
    } else {
        format!("{} is not more senior than {}", seniority.left, seniority.right)
    };
    output::action("seniority", &verdict);
    Ok(())
}

#[instrument(skip(service))]
fn _find(service: &LineageService, name: &str) -> CliResult<()> {
    let vampire = service.find(name)?;
    output::info(vampire);
    Ok(())
}

#[instrument(skip(service))]
fn _count(service: &LineageService, name: Option<&str>) -> CliResult<()> {
    let census = service.census(name)?;
    output::header(&census.name);
    output::detail(&format!("offspring:   {}", census.offspring));
    output::detail(&format!("descendants: {}", census.descendants));
    Ok(())
}

#[instrument(skip(service))]
fn _millennials(service: &LineageService, after: Option<i32>) -> CliResult<()> {
    let millennials = service.millennials(after)?;
    output::action(
        &format!("turned after {}", millennials.year),
        &millennials.vampires.iter().map(|v| v.name.as_str()).join(", "),
    );
    Ok(())
}
