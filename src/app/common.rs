use abagen::generator::ConvertTo;
use abagen::io::{FrameworkSource, TextFrameworkReader};
use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};
use log::info;
use std::{fs, fs::File, io::BufReader, path::PathBuf, str::FromStr};

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the framework")
        .required(true)
}

pub(crate) const ARG_CONVERT_TO: &str = "CONVERT_TO";

pub(crate) fn convert_to_arg() -> Arg<'static, 'static> {
    use strum::VariantNames;
    Arg::with_name(ARG_CONVERT_TO)
        .short("t")
        .long("convert-to")
        .empty_values(false)
        .multiple(false)
        .possible_values(ConvertTo::VARIANTS)
        .help("the conversion to apply to the framework first")
        .required(false)
}

pub(crate) fn convert_to_from_matches(arg_matches: &ArgMatches<'_>) -> Option<ConvertTo> {
    arg_matches
        .value_of(ARG_CONVERT_TO)
        .map(|v| ConvertTo::from_str(v).expect("checked by clap"))
}

pub(crate) fn read_framework_source(file_path: &str) -> Result<FrameworkSource> {
    let canonicalized = fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    info!("reading input file {:?}", canonicalized);
    let mut file_reader = BufReader::new(File::open(canonicalized)?);
    let source = TextFrameworkReader.read(&mut file_reader)?;
    info!(
        "the instance declares a preference section: {}",
        source.preferences.is_some()
    );
    Ok(source)
}
