/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::info;
use lsbpng_stego::header::DEFAULT_EXTENSION;
use lsbpng_stego::{embed_png, extract_png, StegoImage};

use crate::cmd_parsers::get_decoder_options;
use crate::errors::CliErrors;
use crate::file_io::{read_file, verify_file_paths, write_file_atomic};

fn get_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a Path, CliErrors> {
    args.get_one::<PathBuf>(id)
        .map(PathBuf::as_path)
        .ok_or_else(|| CliErrors::Args(format!("Missing argument <{id}>")))
}

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CliErrors> {
    match args.subcommand() {
        Some(("embed", sub)) => embed_file(sub),
        Some(("extract", sub)) => extract_file(sub),
        Some(("capacity", sub)) => show_capacity(sub),
        _ => embed_file(args)
    }
}

fn embed_file(args: &ArgMatches) -> Result<(), CliErrors> {
    let input = get_path(args, "in")?;
    let output = get_path(args, "out")?;
    let payload_path = get_path(args, "payload")?;

    let extension = args
        .try_get_one::<String>("ext")
        .ok()
        .flatten()
        .map_or(DEFAULT_EXTENSION, String::as_str);

    verify_file_paths(input, output)?;

    let options = get_decoder_options(args);

    let carrier = read_file(input)?;
    let payload = read_file(payload_path)?;

    info!("Hiding {:?} in {:?}", payload_path, input);

    let out = embed_png(&carrier, &payload, extension, options)?;

    write_file_atomic(output, &out)
}

fn extract_file(args: &ArgMatches) -> Result<(), CliErrors> {
    let input = get_path(args, "in")?;
    let output = get_path(args, "out")?;

    verify_file_paths(input, output)?;

    let options = get_decoder_options(args);
    let carrier = read_file(input)?;

    let extracted = extract_png(&carrier, options)?;

    info!(
        "Recovered {} bytes, extension tag {:?}",
        extracted.data.len(),
        extracted.extension()
    );

    write_file_atomic(output, &extracted.data)
}

fn show_capacity(args: &ArgMatches) -> Result<(), CliErrors> {
    let input = get_path(args, "in")?;

    let options = get_decoder_options(args);
    let carrier = read_file(input)?;

    let image = StegoImage::from_png(&carrier, options)?;
    let capacity = image.capacity();

    println!("{}: {}x{} {:?}", input.display(), image.width(), image.height(), image.color());
    println!(
        "{} embeddable bits, {} taken by the header",
        capacity.total_bits, capacity.header_bits
    );
    println!("Maximum payload: {} bytes", capacity.max_payload_bytes);

    Ok(())
}
