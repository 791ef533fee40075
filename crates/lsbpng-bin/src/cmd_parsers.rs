/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::info;
use lsbpng_core::options::DecoderOptions;

pub mod global_options;

/// Build decoder options from global command line flags
pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options
        .get_one::<usize>("max-width")
        .copied()
        .unwrap_or(1 << 14);
    let max_height = options
        .get_one::<usize>("max-height")
        .copied()
        .unwrap_or(1 << 14);
    let strict_mode = options.get_flag("strict");
    let confirm_crc = options.get_flag("strict-crc");

    if strict_mode {
        info!("Strict mode enabled");
    }
    if confirm_crc {
        info!("Verifying chunk checksums");
    }

    DecoderOptions::default()
        .set_max_width(max_width)
        .set_max_height(max_height)
        .set_strict_mode(strict_mode)
        .set_confirm_crc(confirm_crc)
}
