use super::{cli_manager, command::Command, common};
use abagen::generator;
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks an input framework file for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let source = common::read_framework_source(file)?;
        let framework = generator::build_framework(
            &source.language,
            &source.assumptions,
            &source.rules,
            &source.contraries,
            source.preferences.as_deref(),
        )?;
        info!(
            "the framework has {} literal(s), {} assumption(s), {} rule(s), {} contraries and {} preference(s)",
            framework.language().len(),
            framework.n_assumptions(),
            framework.rules().len(),
            framework.contraries().len(),
            framework.preferences().len(),
        );
        info!("the framework is atomic: {}", framework.is_atomic());
        info!("the framework is circular: {}", framework.is_circular());
        Ok(())
    }
}
