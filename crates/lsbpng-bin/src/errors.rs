/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use lsbpng_stego::errors::StegoErrors;

/// Errors reported by the command line tool
pub enum CliErrors {
    Io(std::io::Error),
    Stego(StegoErrors),
    /// The same file was given as input and output
    SamePath(PathBuf),
    /// Bad command line
    Args(String)
}

impl Debug for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io(err) => writeln!(f, "{err}"),
            Self::Stego(err) => writeln!(f, "{err:?}"),
            Self::SamePath(path) => {
                writeln!(f, "Cannot use {path:?} as both input and output")
            }
            Self::Args(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for CliErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for CliErrors {}

impl From<std::io::Error> for CliErrors {
    fn from(value: std::io::Error) -> Self {
        CliErrors::Io(value)
    }
}

impl From<StegoErrors> for CliErrors {
    fn from(value: StegoErrors) -> Self {
        CliErrors::Stego(value)
    }
}

impl From<clap::Error> for CliErrors {
    fn from(value: clap::Error) -> Self {
        CliErrors::Args(value.to_string())
    }
}
