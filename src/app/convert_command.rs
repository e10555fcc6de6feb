use super::{cli_manager, command::Command, common};
use abagen::aba::{AbaError, AbaFramework};
use abagen::generator::{self, ConvertTo};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::warn;

const CMD_NAME: &str = "convert";

pub(crate) struct ConvertCommand;

impl ConvertCommand {
    pub(crate) fn new() -> Self {
        ConvertCommand
    }
}

impl<'a> Command<'a> for ConvertCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Converts a framework to an atomic or non-circular one")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(common::convert_to_arg().required(true))
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let source = common::read_framework_source(file)?;
        let convert_to = common::convert_to_from_matches(arg_matches).unwrap();
        type ConvertFn = fn(&str, &str, &str, &str, Option<&str>) -> Result<AbaFramework<String>>;
        let convert: ConvertFn = match convert_to {
            ConvertTo::Atomic => generator::convert_to_atomic,
            ConvertTo::NonCircular => generator::convert_to_non_circular,
        };
        let converted: Result<AbaFramework<String>> = convert(
            &source.language,
            &source.assumptions,
            &source.rules,
            &source.contraries,
            source.preferences.as_deref(),
        );
        let framework = match converted {
            Err(e)
                if matches!(
                    e.downcast_ref::<AbaError>(),
                    Some(AbaError::ConversionNotNeeded(_))
                ) =>
            {
                warn!("{}; keeping the framework unconverted", e);
                generator::build_framework(
                    &source.language,
                    &source.assumptions,
                    &source.rules,
                    &source.contraries,
                    source.preferences.as_deref(),
                )?
            }
            other => other?,
        };
        print!("{}", framework);
        Ok(())
    }
}
