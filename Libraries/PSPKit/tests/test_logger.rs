// Copyright (c) ChefKiss 2021-2025. Licensed under the Thou Shalt Not Profit License version 1.5. See LICENSE for details.

#![deny(warnings, clippy::nursery, unused_extern_crates)]
#![cfg(feature = "logger")]

#[test]
fn record_format() {
    let mut out = String::new();
    pspkit::logger::format_record(
        &mut out,
        &log::Record::builder()
            .args(format_args!("disc {} ready", 0))
            .level(log::Level::Info)
            .target("umd")
            .build(),
    )
    .unwrap();
    assert_eq!(out, "INFO umd > disc 0 ready\n");
}

#[test]
fn records_append() {
    let mut out = String::new();
    for level in [log::Level::Warn, log::Level::Trace] {
        pspkit::logger::format_record(
            &mut out,
            &log::Record::builder()
                .args(format_args!("tick"))
                .level(level)
                .target("power")
                .build(),
        )
        .unwrap();
    }
    assert_eq!(out, "WARN power > tick\nTRACE power > tick\n");
}
