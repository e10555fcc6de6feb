mod app_helper;
pub(crate) use app_helper::AppHelper;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;

mod convert_command;
pub(crate) use convert_command::ConvertCommand;

mod generate_command;
pub(crate) use generate_command::GenerateCommand;

mod writable_string;
