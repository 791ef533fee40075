/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

/// Pick the log level from the logging flags, warnings by default
pub fn log_level(options: &ArgMatches) -> Level {
    // first match wins
    const FLAGS: [(&str, Level); 4] = [
        ("debug", Level::Debug),
        ("trace", Level::Trace),
        ("info", Level::Info),
        ("warn", Level::Warn)
    ];

    FLAGS
        .iter()
        .find(|(flag, _)| options.get_flag(flag))
        .map_or(Level::Warn, |(_, level)| *level)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_log_level() {
        let level = |args: &[&str]| {
            let matches = create_cmd_args().try_get_matches_from(args).unwrap();
            log_level(&matches)
        };

        assert_eq!(level(&["lsbpng", "a", "b", "c"]), Level::Warn);
        assert_eq!(level(&["lsbpng", "--trace", "a", "b", "c"]), Level::Trace);
        assert_eq!(level(&["lsbpng", "--info", "a", "b", "c"]), Level::Info);
        assert_eq!(level(&["lsbpng", "--warn", "a", "b", "c"]), Level::Warn);
        assert_eq!(level(&["lsbpng", "--info", "--warn", "a", "b", "c"]), Level::Info);
        assert_eq!(level(&["lsbpng", "extract", "a", "b", "--warn"]), Level::Warn);
        assert_eq!(level(&["lsbpng", "--debug", "--trace", "a", "b", "c"]), Level::Debug);
    }
}
