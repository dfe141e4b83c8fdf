//! Embedded puzzle packs
//!
//! Packs compiled into the binary at build time from `data/packs.txt`.

// Include generated pack list from build script
include!(concat!(env!("OUT_DIR"), "/packs.rs"));
