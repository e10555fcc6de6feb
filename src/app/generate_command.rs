use super::{cli_manager, command::Command, common};
use abagen::aba::AbaFramework;
use abagen::generator::{self, ConvertTo};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "generate";

const ARG_PROBLEM: &str = "PROBLEM";

pub(crate) struct GenerateCommand;

impl GenerateCommand {
    pub(crate) fn new() -> Self {
        GenerateCommand
    }
}

impl<'a> Command<'a> for GenerateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Generates the arguments or attacks of a framework")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_arg())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .possible_values(&["arguments", "attacks", "preference-attacks"])
                    .help("what to generate")
                    .required(true),
            )
            .arg(common::convert_to_arg())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let source = common::read_framework_source(file)?;
        let convert_to = common::convert_to_from_matches(arg_matches);
        type GenerateFn = fn(
            &str,
            &str,
            &str,
            &str,
            Option<&str>,
            Option<ConvertTo>,
        ) -> Result<AbaFramework<String>>;
        let generate: GenerateFn = match arg_matches.value_of(ARG_PROBLEM).unwrap() {
            "arguments" => generator::create_arguments,
            "attacks" => generator::create_attacks,
            "preference-attacks" => generator::create_preference_attacks,
            _ => unreachable!(),
        };
        let framework = generate(
            &source.language,
            &source.assumptions,
            &source.rules,
            &source.contraries,
            source.preferences.as_deref(),
            convert_to,
        )?;
        if let Some(arguments) = framework.arguments() {
            info!("generated {} argument(s)", arguments.len());
        }
        if let Some(attacks) = framework.attacks() {
            info!("generated {} attack(s)", attacks.len());
        }
        print!("{}", framework);
        Ok(())
    }
}
