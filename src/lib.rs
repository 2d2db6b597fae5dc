//! Host-side OpenCL harnesses for precompiled FPGA binaries.
//!
//! Each harness opens the first OpenCL platform, picks an accelerator (or,
//! for software emulation, a CPU) device, loads an `.xclbin` as the program
//! binary, then pushes a small `i32` array through one or more single
//! work-item kernels and reads the result back.
//!
//! The kernels themselves live in the binary and are opaque to the host.
//!
//! ## Harnesses
//!
//! * `simple_kernel`: `kernel0(input, output)`, a loopback whose output is
//!   checked against its input.
//! * `pipe_stall`: `kernel_in(input)`, `kernel_inter()`, `kernel_out(output)`
//!   connected through device-side pipes. Run on an in-order or out-of-order
//!   queue to observe stalling.
//!
//! ## Configuration
//!
//! See [`HarnessConfig`]. Defaults may be overridden with `XCLBIN_PATH`,
//! `XCLBIN_DEVICE_TYPE`, `XCLBIN_RECORDS` and `XCLBIN_PLATFORM_IDX`.
//!
//! [`HarnessConfig`]: struct.HarnessConfig.html

#[macro_use] extern crate colorify;

#[cfg(test)]
mod tests;
mod binary;
mod config;
mod pipeline;
mod report;
mod scenario;
mod session;
pub mod cli;
pub mod error;

pub use self::binary::XclBinary;
pub use self::config::{HarnessConfig, DeviceKind, QueueOrder, Radix, DEFAULT_BINARY,
    DEFAULT_RECORDS, ENV_BINARY, ENV_DEVICE_TYPE, ENV_RECORDS, ENV_PLATFORM_IDX};
pub use self::pipeline::{ArgRole, KernelStage, Pipeline, LoadedPipeline, WORK_SIZE};
pub use self::report::{format_values, render_dump, verify, RunReport, Verification};
pub use self::scenario::{Scenario, Outcome, SIMPLE_KERNEL, PIPE_KERNEL_IN, PIPE_KERNEL_INTER,
    PIPE_KERNEL_OUT, USAGE_CONCURRENT};
pub use self::session::Session;
pub use crate::error::{Error, Result, Step};
