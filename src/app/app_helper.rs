use super::{cli_manager::CliManager, command::Command};
use anyhow::Result;
use log::{error, info};
use std::{ffi::OsString, sync::Once, time::SystemTime};

static LOGGER_INIT: Once = Once::new();

/// The main structure used to build the app.
///
/// Create a helper, add the app commands, then call
/// [`launch_app`](Self::launch_app): the logger is initialized, the CLI
/// arguments are read, and the matching command is executed. If the command
/// returns an error, its chain is displayed and the process exits with a
/// status of 1.
pub(crate) struct AppHelper<'a> {
    cli_manager: CliManager<'a>,
}

impl<'a> AppHelper<'a> {
    /// Creates a new instance of the helper given the app name, version and description.
    pub fn new(app_name: &'a str, version: &'a str, about: &'a str) -> Self {
        AppHelper {
            cli_manager: CliManager::new(app_name, version, about),
        }
    }

    /// Adds a new command to the app. See [`Command`] for more information.
    pub fn add_command(&mut self, command: Box<dyn Command<'a>>) {
        self.cli_manager.add_command(command);
    }

    /// Launches the application, reading the CLI arguments from `std::env::args_os()`.
    ///
    /// This function consumes the helper.
    pub fn launch_app(self) {
        self.launch_app_with_args(std::env::args_os())
    }

    /// Launches the application with the provided CLI arguments.
    ///
    /// This function consumes the helper.
    pub fn launch_app_with_args<I, T>(self, args: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        if let Err(e) = self.execute_app(args) {
            error!("an error occurred: {}", e);
            e.chain()
                .skip(1)
                .for_each(|err| error!("caused by: {}", err));
            std::process::exit(1);
        }
    }

    fn execute_app<I, T>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let start_time = SystemTime::now();
        let result = self.cli_manager.parse_cli(args);
        if result.is_ok() {
            info!(
                "exiting successfully after {:?}",
                start_time.elapsed().unwrap_or_default()
            );
        }
        result
    }
}

pub(crate) fn init_logger() {
    init_logger_with_level(log::LevelFilter::Info)
}

pub(crate) fn init_logger_with_level(level: log::LevelFilter) {
    LOGGER_INIT.call_once(|| {
        let colors = fern::colors::ColoredLevelConfig::new().info(fern::colors::Color::Cyan);
        fern::Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{:5}] {} {}",
                    colors.color(record.level()),
                    chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                    message
                ))
            })
            .level(level)
            .chain(std::io::stdout())
            .apply()
            .unwrap_or(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{App, Arg, ArgMatches, SubCommand};

    struct LocalCommand;

    impl<'a> Command<'a> for LocalCommand {
        fn name(&self) -> &str {
            "local"
        }

        fn clap_subcommand(&self) -> App<'a, 'a> {
            SubCommand::with_name("local")
                .about("a local command")
                .arg(Arg::with_name("fail").short("f"))
        }

        fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
            if arg_matches.is_present("fail") {
                Err(anyhow::anyhow!("asked to fail"))
            } else {
                Ok(())
            }
        }
    }

    fn helper_with_local_command() -> AppHelper<'static> {
        let mut h = AppHelper::new("app", "0.1.0", "about");
        h.add_command(Box::new(LocalCommand));
        h
    }

    #[test]
    fn test_execute_command() {
        helper_with_local_command()
            .execute_app(vec!["app", "local"])
            .unwrap();
    }

    #[test]
    fn test_execute_failing_command() {
        helper_with_local_command()
            .execute_app(vec!["app", "local", "-f"])
            .unwrap_err();
    }

    #[test]
    fn test_no_subcommand_is_an_error() {
        helper_with_local_command()
            .execute_app(vec!["app"])
            .unwrap_err();
    }

    #[test]
    fn test_unknown_subcommand_is_an_error() {
        helper_with_local_command()
            .execute_app(vec!["app", "unknown"])
            .unwrap_err();
    }
}
