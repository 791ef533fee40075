/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::path::{Path, PathBuf};

use nanorand::{Rng, WyRand};
use serde::Deserialize;

mod hardening;
mod scenarios;

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JsonColor {
    Rgb,
    Rgba
}

impl JsonColor {
    pub fn to_png(self) -> png::ColorType {
        match self {
            Self::Rgb => png::ColorType::Rgb,
            Self::Rgba => png::ColorType::Rgba
        }
    }

    pub fn components(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4
        }
    }
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum JsonFilter {
    None,
    Sub,
    Up,
    Avg,
    Paeth,
    /// Let the encoder pick a filter per row
    Adaptive
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Expect {
    Ok,
    Capacity,
    Header
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:           String,
    pub width:          u32,
    pub height:         u32,
    pub color:          JsonColor,
    pub filter:         JsonFilter,
    pub payload_length: usize,
    pub max_payload:    u64,
    pub extension:      Option<String>,
    pub expect:         Expect,
    pub comment:        Option<String>
}

pub fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

pub fn random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = WyRand::new_seed(seed);
    (0..len).map(|_| rng.generate::<u8>()).collect()
}

/// Write `pixels` as a png using the png crate
pub fn make_carrier(
    pixels: &[u8], width: u32, height: u32, color: JsonColor, filter: JsonFilter
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color.to_png());
        encoder.set_depth(png::BitDepth::Eight);

        match filter {
            JsonFilter::Adaptive => {
                encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);
            }
            fixed => {
                encoder.set_adaptive_filter(png::AdaptiveFilterType::NonAdaptive);
                encoder.set_filter(match fixed {
                    JsonFilter::Sub => png::FilterType::Sub,
                    JsonFilter::Up => png::FilterType::Up,
                    JsonFilter::Avg => png::FilterType::Avg,
                    JsonFilter::Paeth => png::FilterType::Paeth,
                    _ => png::FilterType::NoFilter
                });
            }
        }
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(pixels).unwrap();
    }
    out
}

/// Decode with the png crate
pub fn decode_ref(data: &[u8]) -> (png::OutputInfo, Vec<u8>) {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();

    (info, buf)
}
