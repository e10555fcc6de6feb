use super::app_helper::{init_logger, init_logger_with_level};
use super::{command::Command, writable_string::WritableString};
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, Arg};
use log::info;
use std::{ffi::OsString, str::FromStr};
use sysinfo::System;

/// A structure used to hold the set of commands and to process the CLI arguments against them.
pub(crate) struct CliManager<'a> {
    app_name: &'a str,
    version: &'a str,
    about: &'a str,
    commands: Vec<Box<dyn Command<'a>>>,
}

const LOGGING_LEVEL_ARG: &str = "LOGGING_LEVEL_ARG";

pub(crate) fn logging_level_cli_arg<'a>() -> Arg<'a, 'a> {
    Arg::with_name(LOGGING_LEVEL_ARG)
        .long("logging-level")
        .multiple(false)
        .default_value("info")
        .possible_values(&["trace", "debug", "info", "warn", "error", "off"])
        .help("set the minimal logging level")
}

impl<'a> CliManager<'a> {
    pub fn new(app_name: &'a str, version: &'a str, about: &'a str) -> Self {
        CliManager {
            app_name,
            version,
            about,
            commands: vec![],
        }
    }

    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.commands.push(command);
    }

    pub fn parse_cli<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<T> = args.into_iter().collect();
        let mut app = App::new(self.app_name)
            .global_setting(AppSettings::DisableVersion)
            .global_setting(AppSettings::VersionlessSubcommands)
            .setting(AppSettings::NeedsSubcommandHelp)
            .setting(AppSettings::SubcommandRequired)
            .version(self.version)
            .about(self.about);
        for c in self.commands.iter() {
            app = app.subcommand(c.clap_subcommand());
        }
        match app.clone().get_matches_from_safe(args.iter().cloned()) {
            Ok(matches) => {
                for c in self.commands.iter() {
                    if let Some(matches) = matches.subcommand_matches(c.name()) {
                        let level = matches
                            .value_of(LOGGING_LEVEL_ARG)
                            .map(|s| log::LevelFilter::from_str(s).unwrap())
                            .unwrap_or(log::LevelFilter::Info);
                        init_logger_with_level(level);
                        info!("{} {}", self.app_name, self.version);
                        log_sys_info();
                        return c.execute(matches);
                    }
                }
                unreachable!()
            }
            Err(clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            }) => {
                init_logger();
                self.print_help(&mut app, args.as_slice());
                Ok(())
            }
            Err(e) => {
                init_logger();
                info!("{} {}", self.app_name, self.version);
                Err(anyhow!("{}", e))
            }
        }
    }

    fn print_help<T>(&self, app: &mut App, args: &[T])
    where
        T: Into<OsString> + Clone,
    {
        // "app help cmd" and "app cmd --help" both display the subcommand help
        let subcommand_name = args
            .iter()
            .skip(1)
            .map(|a| a.clone().into().into_string().unwrap_or_default())
            .find(|a| self.commands.iter().any(|c| c.name() == a));
        let mut message = WritableString::default();
        match subcommand_name {
            Some(name) => {
                let c = self
                    .commands
                    .iter()
                    .find(|c| c.name() == name)
                    .expect("just found");
                c.clap_subcommand().write_long_help(&mut message).unwrap();
            }
            None => app.write_long_help(&mut message).unwrap(),
        }
        message.to_string().split('\n').for_each(|l| info!("{}", l));
    }
}

fn log_sys_info() {
    info!("----------------------------------------");
    let sys = System::new_all();
    info!(
        "running on {} {}",
        System::name().unwrap_or_else(|| "an unknown system".to_string()),
        System::os_version().unwrap_or_default(),
    );
    if let Some(cpu) = sys.cpus().first() {
        info!("CPU: {} x{}", cpu.brand(), sys.cpus().len());
    }
    info!(
        "memory: {} MB",
        sys.total_memory() / (1024 * 1024)
    );
    info!("----------------------------------------");
}
