/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info};
use tempfile::NamedTempFile;

use crate::errors::CliErrors;

pub fn read_file(path: &Path) -> Result<Vec<u8>, CliErrors> {
    let data = fs::read(path)?;
    debug!("Read {} bytes from {:?}", data.len(), path);

    Ok(data)
}

/// Write `data` to `path` so that `path` either holds all
/// of it or is left as it was
///
/// Data goes to a temporary file next to `path` which is then
/// renamed over it.
pub fn write_file_atomic(path: &Path, data: &[u8]) -> Result<(), CliErrors> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new(".")
    };

    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;

    file.persist(path).map_err(|e| CliErrors::Io(e.error))?;

    info!("Wrote {} bytes to {:?}", data.len(), path);

    Ok(())
}

/// Refuse to process a file in place
pub fn verify_file_paths(input: &Path, output: &Path) -> Result<(), CliErrors> {
    if input == output {
        return Err(CliErrors::SamePath(output.to_path_buf()));
    }
    // different spellings of one file
    if let (Ok(a), Ok(b)) = (fs::canonicalize(input), fs::canonicalize(output)) {
        if a == b {
            return Err(CliErrors::SamePath(output.to_path_buf()));
        }
    }
    Ok(())
}
