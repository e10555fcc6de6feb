use anyhow::Result;
use clap::App;
use clap::ArgMatches;

/// A trait for the commands available in the app.
///
/// A command declares its CLI arguments through a clap subcommand and executes
/// itself against the matches clap computed for them. Each command must have a
/// unique name.
pub(crate) trait Command<'a> {
    /// Returns the name of the command.
    fn name(&self) -> &str;

    /// Returns the clap subcommand describing the CLI arguments of this command.
    fn clap_subcommand(&self) -> App<'a, 'a>;

    /// Executes the command given the matches for its arguments.
    ///
    /// Returning `Ok(())` makes the app exit with a success status code.
    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()>;
}
