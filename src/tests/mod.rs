//! Most of these run without an OpenCL device.
//!
//! Tests under `device` need a real platform, a device of the configured
//! type and a `pipe.xclbin` built for it. They are ignored by default. Run
//! them with `cargo test -- --ignored` from a directory containing the
//! binary (or point `XCLBIN_PATH` at it).

mod cli;
mod pipeline;
mod scenario;

use std::collections::HashMap;
use std::ffi::OsString;

/// Builds an environment lookup from key/value pairs.
fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
    let map: HashMap<String, OsString> = vars.iter()
        .map(|&(k, v)| (k.to_string(), OsString::from(v)))
        .collect();
    move |key| map.get(key).cloned()
}
