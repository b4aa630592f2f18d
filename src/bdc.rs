// SPDX-License-Identifier: Apache-2.0

use std::fs::File;

use bdinfo::BoardConfig;

const APP_NAME: &str = "bdc";

const ARG_IMAGE: &str = "image";
const ARG_BLOB: &str = "blob";
const ARG_VERBOSE: &str = "verbose";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = clap::Command::new(APP_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Show MAC addresses derived from tw150v1 board info")
        .arg(
            clap::Arg::new(ARG_IMAGE)
                .index(1)
                .required(true)
                .help("Flash image, or bdinfo content with --blob"),
        )
        .arg(
            clap::Arg::new(ARG_BLOB)
                .long(ARG_BLOB)
                .short('b')
                .action(clap::ArgAction::SetTrue)
                .help("Treat the file as the bdinfo partition content"),
        )
        .arg(
            clap::Arg::new(ARG_VERBOSE)
                .long(ARG_VERBOSE)
                .short('v')
                .action(clap::ArgAction::SetTrue)
                .help("Show debug log"),
        )
        .get_matches();

    enable_log(matches.get_flag(ARG_VERBOSE));

    // Required argument, clap already refused to run without it.
    let path = matches
        .get_one::<String>(ARG_IMAGE)
        .map(String::as_str)
        .unwrap_or_default();

    let config = if matches.get_flag(ARG_BLOB) {
        BoardConfig::new(&std::fs::read(path)?)
    } else {
        BoardConfig::from_flash(&mut File::open(path)?)
    };

    println!("base: {} ({})", config.base_mac, config.mac_source);
    println!("eth0: {}", config.wan.mac());
    println!("eth1: {}", config.lan.mac());
    println!("wmac: {}", config.wmac);
    Ok(())
}

fn enable_log(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter(Some("bdinfo"), level)
        .filter(Some(APP_NAME), level)
        .init();
}
