/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static AFTER_HELP: &str = "Without a subcommand the three positional arguments embed
a file, i.e `lsbpng in.png out.png payload` is the same as
`lsbpng embed in.png out.png payload`";

pub static EXT_HELP: &str = "Extension tag stored with the payload

One to four ASCII letters or digits, written into the embedded
header and reported back on extraction.";

pub static STRICT_HELP: &str = "Treat recoverable png problems as errors

By default an unknown scanline filter leaves the row untouched
and a missing IEND chunk is ignored, both with a warning.
With this flag both abort.";

pub static STRICT_CRC_HELP: &str = "Verify the checksum of every png chunk

Chunk checksums are not checked by default, so a corrupt but
otherwise readable file is still processed.";
