//! Kernel stages, device buffers and the write/execute/read cycle.
//!
//! Every stage is a single work-item kernel (global and local work size of
//! 1). Stages are enqueued in the order they were declared. Whether they may
//! overlap on the device is decided by the queue order of the `Session`.

use log::{debug, info};
use ocl::{Buffer, Event, Kernel, MemFlags, Queue};
use crate::error::{Error, Result, Step, StepResultExt};
use crate::report::RunReport;
use crate::session::Session;

/// Work size used for every kernel.
pub const WORK_SIZE: usize = 1;


/// The device buffer a kernel argument is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRole {
    /// Read-only on the device. Written by the host before execution.
    Input,
    /// Write-only on the device. Read back by the host after execution.
    Output,
}


/// A named kernel and the buffers bound to its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KernelStage {
    name: String,
    args: Vec<ArgRole>,
}

impl KernelStage {
    pub fn new<S: Into<String>>(name: S, args: &[ArgRole]) -> KernelStage {
        KernelStage { name: name.into(), args: args.to_vec() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[ArgRole] {
        &self.args
    }
}


/// An ordered list of kernel stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<KernelStage>,
}

impl Pipeline {
    pub fn new() -> Pipeline {
        Pipeline { stages: Vec::new() }
    }

    /// Appends a stage.
    pub fn stage<S: Into<String>>(mut self, name: S, args: &[ArgRole]) -> Pipeline {
        self.stages.push(KernelStage::new(name, args));
        self
    }

    pub fn stages(&self) -> &[KernelStage] {
        &self.stages
    }

    /// Returns true if any stage binds `role`.
    pub fn uses(&self, role: ArgRole) -> bool {
        self.stages.iter().any(|s| s.args.contains(&role))
    }

    /// Creates every kernel, allocates the device buffers, then binds each
    /// kernel's arguments.
    pub fn load(&self, session: &Session, records: usize) -> Result<LoadedPipeline> {
        if self.stages.is_empty() {
            return Err(Error::EmptyPipeline);
        }

        let queue = session.queue().clone();
        let mut kernels = Vec::with_capacity(self.stages.len());

        for stage in self.stages.iter() {
            let mut builder = Kernel::builder();
            builder.program(session.program())
                .name(stage.name.clone())
                .queue(queue.clone())
                .global_work_size(WORK_SIZE)
                .local_work_size(WORK_SIZE);

            // Arguments stay unset until the buffers exist.
            for _ in stage.args.iter() {
                builder.arg(None::<&Buffer<i32>>);
            }

            let kernel = builder.build()
                .step(Step::CreateKernel(stage.name.clone()))?;

            debug!("Created kernel '{}' ({} args).", stage.name, stage.args.len());
            kernels.push((stage.name.clone(), kernel));
        }

        let input = Buffer::<i32>::builder()
            .queue(queue.clone())
            .flags(MemFlags::new().read_only())
            .len(records)
            .build()
            .step(Step::AllocateBuffers)?;

        let output = Buffer::<i32>::builder()
            .queue(queue.clone())
            .flags(MemFlags::new().write_only())
            .len(records)
            .build()
            .step(Step::AllocateBuffers)?;

        debug!("Allocated input and output buffers ({} records each).", records);

        for (stage, (_, kernel)) in self.stages.iter().zip(kernels.iter()) {
            for (idx, role) in stage.args.iter().enumerate() {
                let buffer = match *role {
                    ArgRole::Input => &input,
                    ArgRole::Output => &output,
                };
                let idx = idx as u32;
                kernel.set_arg(idx, buffer)
                    .step(Step::SetKernelArg { kernel: stage.name.clone(), index: idx })?;
            }
        }

        Ok(LoadedPipeline { queue, kernels, input, output, records })
    }
}


/// A pipeline whose kernels and buffers exist on the device.
#[derive(Debug)]
pub struct LoadedPipeline {
    queue: Queue,
    kernels: Vec<(String, Kernel)>,
    input: Buffer<i32>,
    output: Buffer<i32>,
    records: usize,
}

impl LoadedPipeline {
    pub fn records(&self) -> usize {
        self.records
    }

    /// Names of the loaded kernels in enqueue order.
    pub fn kernel_names(&self) -> Vec<&str> {
        self.kernels.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Copies `data` into the input buffer. Buffer commands block by default.
    pub fn write_input(&self, data: &[i32]) -> Result<()> {
        if data.len() != self.records {
            return Err(Error::InputLength { expected: self.records, actual: data.len() });
        }

        self.input.write(data)
            .enq()
            .step(Step::WriteInput)
    }

    /// Enqueues every kernel in order then waits for the queue to drain.
    pub fn execute(&self) -> Result<()> {
        for (name, kernel) in self.kernels.iter() {
            unsafe {
                kernel.cmd()
                    .global_work_size(WORK_SIZE)
                    .local_work_size(WORK_SIZE)
                    .enq()
                    .step(Step::ExecuteKernel(name.clone()))?;
            }
            debug!("Enqueued kernel '{}'.", name);
        }

        self.queue.finish().step(Step::FinishQueue)
    }

    /// Reads the output buffer into a new vector.
    pub fn read_output(&self) -> Result<Vec<i32>> {
        let mut data = vec![0i32; self.records];
        let mut read_event = Event::empty();

        self.output.read(&mut data)
            .enew(&mut read_event)
            .enq()
            .step(Step::ReadOutput)?;

        read_event.wait_for().step(Step::ReadOutput)?;
        Ok(data)
    }

    /// Writes `input`, runs every stage, and reads the output back.
    pub fn run(&self, input: &[i32]) -> Result<RunReport> {
        self.write_input(input)?;
        self.execute()?;
        let output = self.read_output()?;
        info!("Ran {} kernel(s) over {} records.", self.kernels.len(), self.records);

        Ok(RunReport::new(input.to_vec(), output))
    }
}
