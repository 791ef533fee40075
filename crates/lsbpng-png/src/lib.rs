/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A minimal png container reader and writer
//!
//! This crate handles the parts of png a pixel level steganography
//! tool needs and nothing more
//!
//! - Reading the signature and chunk stream of 8 bit, non-interlaced
//!   RGB or RGBA images, gathering the compressed image data
//! - Undoing scanline filters on inflated image data
//! - Writing a minimal signature + IHDR + IDAT + IEND stream back
//!
//! Inflating and deflating image data is left to the caller.
//!
//! # Usage
//!
//!```no_run
//! use lsbpng_png::PngDecoder;
//! let data = std::fs::read("image.png").unwrap();
//! let container = PngDecoder::new(&data).decode_container().unwrap();
//!
//! println!("{}x{} {:?}", container.info.width, container.info.height, container.info.color);
//! println!("{} bytes of zlib data", container.idat.len());
//! ```
//!
//! # Chunk checksums
//!
//! By default chunk crc values are read but not verified, enable
//! [`DecoderOptions::set_confirm_crc`](lsbpng_core::options::DecoderOptions::set_confirm_crc)
//! to reject corrupt chunks.
#![allow(clippy::op_ref, clippy::identity_op)]

pub use decoder::{PngContainer, PngDecoder, PngInfo};
pub use encoder::PngEncoder;
pub use enums::PngColor;
pub use lsbpng_core;

pub mod constants;
pub mod crc;
mod decoder;
mod encoder;
mod enums;
pub mod error;
pub mod filters;
mod headers;
