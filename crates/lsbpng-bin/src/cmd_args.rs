/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{AFTER_HELP, EXT_HELP, STRICT_CRC_HELP, STRICT_HELP};

pub mod help_strings;

fn input_arg() -> Arg {
    Arg::new("in")
        .help("Carrier png to read")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn output_arg(help: &'static str) -> Arg {
    Arg::new("out")
        .help(help)
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

fn payload_arg() -> Arg {
    Arg::new("payload")
        .help("File whose bytes are hidden in the image")
        .value_parser(value_parser!(PathBuf))
        .required(true)
}

#[rustfmt::skip]
fn embed_cmd() -> Command {
    Command::new("embed")
        .about("Hide a file in a png image")
        .arg(input_arg())
        .arg(output_arg("Where to write the new png"))
        .arg(payload_arg())
        .arg(Arg::new("ext")
            .long("ext")
            .help("Extension tag stored with the payload")
            .long_help(EXT_HELP)
            .default_value("txt"))
}

#[rustfmt::skip]
fn extract_cmd() -> Command {
    Command::new("extract")
        .about("Recover a file hidden in a png image")
        .arg(input_arg())
        .arg(output_arg("Where to write the recovered file"))
}

#[rustfmt::skip]
fn capacity_cmd() -> Command {
    Command::new("capacity")
        .about("Show how many bytes a png image can hold")
        .arg(input_arg())
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("lsbpng")
        .about("Hide files in the least significant bits of png images")
        .after_help(AFTER_HELP)
        .subcommand(embed_cmd())
        .subcommand(extract_cmd())
        .subcommand(capacity_cmd())
        .args_conflicts_with_subcommands(true)
        .subcommand_negates_reqs(true)
        .arg(input_arg())
        .arg(output_arg("Where to write the new png"))
        .arg(payload_arg())
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("LOGGING")
            .help("Display information about the decoding and embedding steps"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Treat recoverable png problems as errors")
            .long_help(STRICT_HELP))
        .arg(Arg::new("strict-crc")
            .long("strict-crc")
            .action(ArgAction::SetTrue)
            .global(true)
            .help_heading("ADVANCED")
            .help("Verify the checksum of every png chunk")
            .long_help(STRICT_CRC_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of an image to accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of an image to accept")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
