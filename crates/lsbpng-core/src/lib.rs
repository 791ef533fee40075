/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by the lsbpng crates
//!
//! It currently contains
//!
//! - A bytestream reader and writer with endian aware reads and writes
//! - Decoder options shared by the png container decoder and the
//!   steganography pipeline
//!
pub mod bytestream;
pub mod options;
