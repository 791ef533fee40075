/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Least significant bit steganography for png images
//!
//! A payload is hidden one bit per channel byte in the pixels of an
//! 8 bit RGB or RGBA png, preceded by a small header recording its
//! length and a file extension tag.
//!
//! # Embedding
//!
//!```no_run
//! use lsbpng_stego::lsbpng_core::options::DecoderOptions;
//! use lsbpng_stego::{embed, StegoImage};
//!
//! let data = std::fs::read("carrier.png").unwrap();
//! let mut image = StegoImage::from_png(&data, DecoderOptions::default()).unwrap();
//!
//! println!("Room for {} bytes", image.capacity().max_payload_bytes);
//!
//! embed(&mut image, b"meet at noon").unwrap();
//! std::fs::write("secret.png", image.to_png().unwrap()).unwrap();
//! ```
//!
//! # Extracting
//!
//!```no_run
//! use lsbpng_stego::lsbpng_core::options::DecoderOptions;
//! use lsbpng_stego::extract_png;
//!
//! let data = std::fs::read("secret.png").unwrap();
//! let payload = extract_png(&data, DecoderOptions::default()).unwrap();
//!
//! println!("{} bytes of {}", payload.data.len(), payload.extension());
//! ```
//!
//! Output images are always written as one unfiltered IDAT chunk,
//! ancillary chunks of the input are dropped.
pub use capacity::{capacity, Capacity};
pub use embed::{embed, embed_png, embed_with_tag};
pub use extract::{extract, extract_png, ExtractedPayload};
pub use header::PayloadHeader;
pub use image::StegoImage;
pub use lsbpng_core;
pub use lsbpng_png;

mod capacity;
pub mod codec;
mod embed;
pub mod errors;
mod extract;
pub mod header;
mod image;
pub mod mapper;
