//! Platform, device, context, queue and program setup.

use log::{debug, info};
use ocl::{core, Context, Device, Platform, Program, Queue};
use crate::binary::XclBinary;
use crate::config::HarnessConfig;
use crate::error::{Error, Result, Step, StepResultExt};


/// Everything needed to create kernels from a loaded xclbin and to enqueue
/// work on a single device.
///
/// Creating a `Session` runs, in order: platform discovery, device
/// selection, context creation, command queue creation, binary load and
/// program build. The first failure aborts the sequence.
#[derive(Debug, Clone)]
pub struct Session {
    platform: Platform,
    device: Device,
    context: Context,
    queue: Queue,
    program: Program,
    config: HarnessConfig,
}

impl Session {
    /// Opens a session as described by `config`.
    pub fn open(config: &HarnessConfig) -> Result<Session> {
        config.validate()?;

        let platform = select_platform(config.get_platform_idx())?;
        let vendor = platform.vendor().step(Step::PlatformInfo)?;
        let name = platform.name().step(Step::PlatformInfo)?;
        info!("Platform: '{}' ({}).", name, vendor);

        let device_kind = config.get_device_kind();
        let device = Device::list(platform, Some(device_kind.device_type()))
            .step(Step::DeviceGroup)?
            .first()
            .cloned()
            .ok_or(Error::NoDevice { device_kind })?;
        info!("Device: '{}' ({}).", device.name().unwrap_or_else(|_| "unknown".into()),
            device_kind);

        let context = Context::builder()
            .platform(platform)
            .devices(device)
            .build()
            .step(Step::CreateContext)?;

        let queue = Queue::new(&context, device, config.get_queue_order().properties())
            .step(Step::CreateQueue)?;
        debug!("Command queue created ({:?}).", config.get_queue_order());

        let binary = XclBinary::load(config.get_binary_path())?;
        let program = Self::build_program(&context, device, &binary)?;
        info!("Program built from '{}'.", binary.path().display());

        Ok(Session { platform, device, context, queue, program, config: config.clone() })
    }

    /// Creates and builds a program for `device` from a precompiled binary.
    ///
    /// Any build log produced by the runtime is carried in the returned
    /// error.
    pub fn build_program(context: &Context, device: Device, binary: &XclBinary)
            -> Result<Program>
    {
        let bins = [binary.as_bytes()];

        Program::builder()
            .devices(device)
            .binaries(&bins)
            .build(context)
            .step(Step::BuildProgram)
    }

    /// Blocks until every command enqueued so far has completed.
    pub fn finish(&self) -> Result<()> {
        self.queue.finish().step(Step::FinishQueue)
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}


/// Returns the platform at `idx` in the host's platform list.
fn select_platform(idx: usize) -> Result<Platform> {
    let ids = core::get_platform_ids().step(Step::FindPlatform)?;
    let available = ids.len();

    ids.get(idx)
        .map(|&id| Platform::new(id))
        .ok_or(Error::NoPlatform { idx, available })
}
