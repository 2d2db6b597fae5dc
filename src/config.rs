//! Harness settings: which binary, which device, how to queue, how much data.

use std::env;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use ocl::flags::{CommandQueueProperties, DeviceType};
use crate::error::{Error, Result};

/// Binary loaded when nothing else is specified.
pub const DEFAULT_BINARY: &str = "pipe.xclbin";

/// Number of `i32` records moved through the device by default.
pub const DEFAULT_RECORDS: usize = 16;

pub const ENV_BINARY: &str = "XCLBIN_PATH";
pub const ENV_DEVICE_TYPE: &str = "XCLBIN_DEVICE_TYPE";
pub const ENV_RECORDS: &str = "XCLBIN_RECORDS";
pub const ENV_PLATFORM_IDX: &str = "XCLBIN_PLATFORM_IDX";


/// The kind of device to run on.
///
/// Hardware runs target an accelerator. Software emulation flows expose the
/// binary through a CPU device instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Accelerator,
    Cpu,
}

impl DeviceKind {
    pub fn device_type(&self) -> DeviceType {
        match *self {
            DeviceKind::Accelerator => DeviceType::ACCELERATOR,
            DeviceKind::Cpu => DeviceType::CPU,
        }
    }
}

impl Default for DeviceKind {
    fn default() -> DeviceKind {
        DeviceKind::Accelerator
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DeviceKind::Accelerator => write!(f, "accelerator"),
            DeviceKind::Cpu => write!(f, "cpu"),
        }
    }
}

impl FromStr for DeviceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<DeviceKind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "accelerator" | "acc" | "fpga" => Ok(DeviceKind::Accelerator),
            "cpu" => Ok(DeviceKind::Cpu),
            other => Err(Error::Config(format!("unknown device type '{}' \
                (expected 'accelerator' or 'cpu')", other))),
        }
    }
}


/// Command queue execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueOrder {
    InOrder,
    /// Lets the runtime execute enqueued kernels concurrently.
    OutOfOrder,
}

impl QueueOrder {
    /// Maps `1` to out-of-order and `0` to in-order. Any other value is an
    /// error.
    pub fn from_flag(flag: u8) -> Result<QueueOrder> {
        match flag {
            0 => Ok(QueueOrder::InOrder),
            1 => Ok(QueueOrder::OutOfOrder),
            f => Err(Error::Config(format!("concurrency flag must be 0 or 1, got {}", f))),
        }
    }

    pub fn properties(&self) -> Option<CommandQueueProperties> {
        match *self {
            QueueOrder::InOrder => None,
            QueueOrder::OutOfOrder => Some(CommandQueueProperties::new().out_of_order()),
        }
    }
}

impl Default for QueueOrder {
    fn default() -> QueueOrder {
        QueueOrder::InOrder
    }
}


/// Number formatting used when dumping buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    Decimal,
    Hex,
}


/// Settings shared by every harness.
#[derive(Debug, Clone, PartialEq)]
pub struct HarnessConfig {
    binary_path: PathBuf,
    device_kind: DeviceKind,
    queue_order: QueueOrder,
    records: usize,
    platform_idx: usize,
}

impl HarnessConfig {
    pub fn new() -> HarnessConfig {
        HarnessConfig {
            binary_path: PathBuf::from(DEFAULT_BINARY),
            device_kind: DeviceKind::default(),
            queue_order: QueueOrder::default(),
            records: DEFAULT_RECORDS,
            platform_idx: 0,
        }
    }

    /// Returns the defaults overridden by any `XCLBIN_*` environment
    /// variables which are set.
    pub fn from_env() -> Result<HarnessConfig> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Same as `::from_env` but reads variables through `lookup`.
    ///
    /// The binary path may be any OS string. Every other value must be
    /// valid unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<HarnessConfig>
            where F: Fn(&str) -> Option<OsString>
    {
        let mut config = HarnessConfig::new();

        if let Some(path) = lookup(ENV_BINARY) {
            config.binary_path = PathBuf::from(path);
        }
        if let Some(kind) = lookup_str(&lookup, ENV_DEVICE_TYPE)? {
            config.device_kind = kind.parse()?;
        }
        if let Some(records) = lookup_str(&lookup, ENV_RECORDS)? {
            config.records = parse_usize(ENV_RECORDS, &records)?;
        }
        if let Some(idx) = lookup_str(&lookup, ENV_PLATFORM_IDX)? {
            config.platform_idx = parse_usize(ENV_PLATFORM_IDX, &idx)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn binary_path<P: Into<PathBuf>>(mut self, path: P) -> HarnessConfig {
        self.binary_path = path.into();
        self
    }

    pub fn device_kind(mut self, kind: DeviceKind) -> HarnessConfig {
        self.device_kind = kind;
        self
    }

    pub fn queue_order(mut self, order: QueueOrder) -> HarnessConfig {
        self.queue_order = order;
        self
    }

    pub fn records(mut self, records: usize) -> HarnessConfig {
        self.records = records;
        self
    }

    pub fn platform_idx(mut self, idx: usize) -> HarnessConfig {
        self.platform_idx = idx;
        self
    }

    /// Rejects settings no run could succeed with.
    pub fn validate(&self) -> Result<()> {
        if self.records == 0 {
            return Err(Error::Config("record count must be at least 1".into()));
        }
        // Records are filled with their own index as an `i32`.
        if self.records > i32::max_value() as usize {
            return Err(Error::Config(format!("record count must be at most {}, got {}",
                i32::max_value(), self.records)));
        }
        if self.binary_path.as_os_str().is_empty() {
            return Err(Error::Config("binary path is empty".into()));
        }
        Ok(())
    }

    pub fn get_binary_path(&self) -> &Path {
        &self.binary_path
    }

    pub fn get_device_kind(&self) -> DeviceKind {
        self.device_kind
    }

    pub fn get_queue_order(&self) -> QueueOrder {
        self.queue_order
    }

    pub fn get_records(&self) -> usize {
        self.records
    }

    pub fn get_platform_idx(&self) -> usize {
        self.platform_idx
    }
}

impl Default for HarnessConfig {
    fn default() -> HarnessConfig {
        HarnessConfig::new()
    }
}

fn lookup_str<F>(lookup: &F, key: &str) -> Result<Option<String>>
        where F: Fn(&str) -> Option<OsString>
{
    match lookup(key) {
        Some(val) => val.into_string().map(Some).map_err(|val| Error::Config(
            format!("{} is not valid unicode: {:?}", key, val))),
        None => Ok(None),
    }
}

fn parse_usize(key: &str, val: &str) -> Result<usize> {
    val.trim().parse().map_err(|_| Error::Config(format!("{} must be a non-negative \
        integer, got '{}'", key, val)))
}
