//! Standard error type for the harnesses.
//!

use std::fmt;
use std::io;
use std::path::PathBuf;
use crate::config::DeviceKind;

pub type Result<T> = std::result::Result<T, Error>;


/// A named stage of harness setup or execution.
///
/// Every OpenCL call made by the harness is attributed to one of these so
/// that a failure can say what was being attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    FindPlatform,
    PlatformInfo,
    DeviceGroup,
    CreateContext,
    CreateQueue,
    BuildProgram,
    CreateKernel(String),
    AllocateBuffers,
    SetKernelArg { kernel: String, index: u32 },
    WriteInput,
    ExecuteKernel(String),
    FinishQueue,
    ReadOutput,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Step::FindPlatform => write!(f, "find an OpenCL platform"),
            Step::PlatformInfo => write!(f, "query platform info"),
            Step::DeviceGroup => write!(f, "create a device group"),
            Step::CreateContext => write!(f, "create a compute context"),
            Step::CreateQueue => write!(f, "create a command queue"),
            Step::BuildProgram => write!(f, "build program from binary"),
            Step::CreateKernel(ref name) => write!(f, "create compute kernel '{}'", name),
            Step::AllocateBuffers => write!(f, "allocate device memory"),
            Step::SetKernelArg { ref kernel, index } =>
                write!(f, "set argument {} of kernel '{}'", index, kernel),
            Step::WriteInput => write!(f, "write to input buffer"),
            Step::ExecuteKernel(ref name) => write!(f, "execute kernel '{}'", name),
            Step::FinishQueue => write!(f, "finish command queue"),
            Step::ReadOutput => write!(f, "read output array"),
        }
    }
}


/// An enum containing one of several harness error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Step: An OpenCL call failed:
    #[error("Failed to {step}: {cause}")]
    Step { step: Step, cause: ocl::Error },
    // BinaryOpen: The xclbin could not be opened:
    #[error("failed to open kernel binary '{}': {source}", path.display())]
    BinaryOpen { path: PathBuf, #[source] source: io::Error },
    // BinaryRead: The xclbin was opened but could not be read in full:
    #[error("failed to read kernel binary '{}': {source}", path.display())]
    BinaryRead { path: PathBuf, #[source] source: io::Error },
    // EmptyBinary:
    #[error("kernel binary '{}' is empty", path.display())]
    EmptyBinary { path: PathBuf },
    // NoPlatform:
    #[error("Failed to find an OpenCL platform (index {idx}, {available} available)")]
    NoPlatform { idx: usize, available: usize },
    // NoDevice:
    #[error("Failed to create a device group: no {device_kind} device on platform")]
    NoDevice { device_kind: DeviceKind },
    // EmptyPipeline: A pipeline with no kernel stages was loaded:
    #[error("pipeline has no kernel stages")]
    EmptyPipeline,
    // InputLength: The host input does not match the device buffer length:
    #[error("input holds {actual} records but the device buffer holds {expected}")]
    InputLength { expected: usize, actual: usize },
    // Config: A bad configuration value:
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Returns the step which failed for `Step` variants.
    pub fn step(&self) -> Option<&Step> {
        match *self {
            Error::Step { ref step, .. } => Some(step),
            _ => None,
        }
    }
}


/// Attaches a `Step` to the error side of an OpenCL result.
pub trait StepResultExt<T> {
    fn step(self, step: Step) -> Result<T>;
}

impl<T, E> StepResultExt<T> for std::result::Result<T, E> where E: Into<ocl::Error> {
    fn step(self, step: Step) -> Result<T> {
        self.map_err(|err| Error::Step { step, cause: err.into() })
    }
}
