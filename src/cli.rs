//! Command line options shared by the harness binaries.

use std::path::PathBuf;
use std::process;
use clap::Args;
use crate::config::{DeviceKind, HarnessConfig};
use crate::error::Result;


/// Overrides applied on top of `HarnessConfig::from_env`.
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct HarnessArgs {
    /// Path to the precompiled kernel binary.
    #[arg(long = "xclbin", value_name = "PATH")]
    pub xclbin: Option<PathBuf>,

    /// Device type to run on: 'accelerator' or 'cpu' (software emulation).
    #[arg(long = "device-type", value_name = "TYPE")]
    pub device_type: Option<String>,

    /// Number of i32 records to move through the device.
    #[arg(long, value_name = "N")]
    pub records: Option<usize>,

    /// Index of the OpenCL platform to use.
    #[arg(long, value_name = "IDX")]
    pub platform: Option<usize>,
}

impl HarnessArgs {
    /// Layers these options over `base`.
    pub fn apply(&self, base: HarnessConfig) -> Result<HarnessConfig> {
        let mut config = base;

        if let Some(ref path) = self.xclbin {
            config = config.binary_path(path.clone());
        }
        if let Some(ref kind) = self.device_type {
            config = config.device_kind(kind.parse::<DeviceKind>()?);
        }
        if let Some(records) = self.records {
            config = config.records(records);
        }
        if let Some(idx) = self.platform {
            config = config.platform_idx(idx);
        }

        config.validate()?;
        Ok(config)
    }

    /// Environment defaults with these options applied.
    pub fn config(&self) -> Result<HarnessConfig> {
        self.apply(HarnessConfig::from_env()?)
    }
}


/// Initializes logging from `RUST_LOG`. Harness output itself goes to
/// stdout regardless.
pub fn init_logging() {
    let _ = env_logger::builder().format_timestamp(None).try_init();
}

/// Reports a failed run and exits with status 1.
///
/// Both lines are plain text so scripts can match on them.
pub fn fail(err: &dyn std::fmt::Display) -> ! {
    println!("Error: {}", err);
    println!("Test failed");
    process::exit(1);
}
