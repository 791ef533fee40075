/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! All supported options are put into one `DecoderOptions` so the same
//! configuration can be threaded from the command line down to the png
//! container decoder and the inflate stage.

/// Decoder options
///
/// The defaults are lenient, i.e chunk crc values are not
/// checked and unknown row filters are passed through untouched.
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:        usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:       usize,
    /// Maximum number of bytes the inflate stage may produce
    ///
    /// Images whose IHDR implies more image data than this
    /// are rejected before decompressing.
    ///
    /// - Default value: 1 << 30
    inflate_limit:    usize,
    /// Treat some warnings as errors
    ///
    /// When set to false, an unknown scanline filter
    /// is logged and the row is left as is.
    ///
    /// When set to true, the decoder returns an error instead.
    ///
    /// - Default value: false
    strict_mode:      bool,
    /// Verify the CRC of every chunk read
    ///
    /// - Default value: false
    confirm_crc:      bool,
    /// Verify the adler32 checksum at the end of the zlib stream
    ///
    /// - Default value: true
    confirm_checksum: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:        1 << 14,
            max_height:       1 << 14,
            inflate_limit:    1 << 30,
            strict_mode:      false,
            confirm_crc:      false,
            confirm_checksum: true
        }
    }
}

impl DecoderOptions {
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Get the limit past which image data will not be inflated
    pub const fn inflate_limit(&self) -> usize {
        self.inflate_limit
    }

    pub const fn strict_mode(&self) -> bool {
        self.strict_mode
    }

    pub const fn confirm_crc(&self) -> bool {
        self.confirm_crc
    }

    pub const fn confirm_checksum(&self) -> bool {
        self.confirm_checksum
    }

    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set the limit past which image data will not be inflated
    #[must_use]
    pub fn set_inflate_limit(mut self, limit: usize) -> Self {
        self.inflate_limit = limit;
        self
    }

    #[must_use]
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    #[must_use]
    pub fn set_confirm_crc(mut self, yes: bool) -> Self {
        self.confirm_crc = yes;
        self
    }

    #[must_use]
    pub fn set_confirm_checksum(mut self, yes: bool) -> Self {
        self.confirm_checksum = yes;
        self
    }
}
