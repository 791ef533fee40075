/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use lsbpng_core::options::DecoderOptions;
use lsbpng_stego::errors::StegoErrors;
use lsbpng_stego::header::DEFAULT_EXTENSION;
use lsbpng_stego::{embed_with_tag, extract_png, StegoImage};

use crate::{decode_ref, make_carrier, random_bytes, sample_path, Expect, TestEntry};

/// Run one entry, returning a description of what went wrong
fn run_entry(entry: &TestEntry, seed: u64) -> Result<(), String> {
    let components = entry.color.components();
    let pixels = random_bytes(
        entry.width as usize * entry.height as usize * components,
        seed
    );
    let carrier = make_carrier(&pixels, entry.width, entry.height, entry.color, entry.filter);
    let payload = random_bytes(entry.payload_length, seed ^ 0xFFFF);
    let extension = entry.extension.as_deref().unwrap_or(DEFAULT_EXTENSION);

    let mut image = StegoImage::from_png(&carrier, DecoderOptions::default())
        .map_err(|e| format!("decoding carrier failed: {e:?}"))?;

    let capacity = image.capacity();
    if capacity.max_payload_bytes != entry.max_payload {
        return Err(format!(
            "capacity {} but expected {}",
            capacity.max_payload_bytes, entry.max_payload
        ));
    }

    let result = embed_with_tag(&mut image, &payload, extension);

    match (entry.expect, result) {
        (Expect::Ok, Ok(_)) => {}
        (Expect::Capacity, Err(StegoErrors::Capacity { .. })) => return Ok(()),
        (Expect::Header, Err(StegoErrors::InvalidHeader(_))) => return Ok(()),
        (expect, result) => {
            return Err(format!("expected {expect:?} but embedding gave {result:?}"));
        }
    }

    let output = image
        .to_png()
        .map_err(|e| format!("encoding failed: {e:?}"))?;

    let (info, decoded) = decode_ref(&output);
    if info.color_type != entry.color.to_png() || decoded.len() != pixels.len() {
        return Err(format!("png crate decoded {info:?}"));
    }
    if pixels
        .iter()
        .zip(&decoded)
        .any(|(a, b)| (a & 0xFE) != (b & 0xFE))
    {
        return Err("pixels changed above the lowest bit".to_string());
    }

    let extracted = extract_png(&output, DecoderOptions::default())
        .map_err(|e| format!("extraction failed: {e:?}"))?;

    if extracted.data != payload {
        return Err("extracted payload differs".to_string());
    }
    if extracted.extension() != extension {
        return Err(format!("extension {:?}", extracted.extension()));
    }
    Ok(())
}

#[test]
fn test_scenarios() {
    let file = sample_path().join("scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();
    assert!(!entries.is_empty());

    let mut failed = Vec::new();

    for (i, entry) in entries.iter().enumerate() {
        if let Err(reason) = run_entry(entry, i as u64) {
            // report error
            eprintln!("Scenario {} failed: {}\nConfig:{:#?}\n", entry.name, reason, entry);
            failed.push(entry.name.clone());
        }
    }
    if !failed.is_empty() {
        panic!("Failed scenarios: {:?}", failed);
    }
}
