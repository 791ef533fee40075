/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;
use std::process::exit;

use log::error;

pub use crate::errors::CliErrors;
use crate::workflow::create_and_exec_workflow_from_cmd;

mod cmd_args;
mod cmd_parsers;
mod errors;
mod file_io;
mod workflow;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    // global flags given after a subcommand only land in its matches
    let logging = options
        .subcommand()
        .map_or(&options, |(_, sub_options)| sub_options);

    cmd_parsers::global_options::setup_logger(logging);

    let result = create_and_exec_workflow_from_cmd(&options);

    if let Err(err) = result {
        println!();
        error!(" Could not complete workflow, reason {:?}", err);

        println!();
        exit(-1);
    }
}

/// Parse `args` as a command line and run it, without
/// setting up logging or exiting the process
pub fn run_from<I, T>(args: I) -> Result<(), CliErrors>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone
{
    let options = cmd_args::create_cmd_args().try_get_matches_from(args)?;

    create_and_exec_workflow_from_cmd(&options)
}
