//! The two harnesses: a single loopback kernel and a three-stage pipe.

use log::info;
use crate::config::{HarnessConfig, QueueOrder, Radix};
use crate::error::Result;
use crate::pipeline::{ArgRole, Pipeline};
use crate::report::{render_dump, RunReport, Verification};
use crate::session::Session;

pub const SIMPLE_KERNEL: &str = "kernel0";
pub const PIPE_KERNEL_IN: &str = "kernel_in";
pub const PIPE_KERNEL_INTER: &str = "kernel_inter";
pub const PIPE_KERNEL_OUT: &str = "kernel_out";

pub const USAGE_CONCURRENT: &str = "Give 1 for concurrent OpenCL kernel execution and 0 otherwise.";


/// A fixed kernel pipeline together with how its results are shown and
/// judged.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: &'static str,
    pipeline: Pipeline,
    radix: Radix,
    verify: bool,
    queue_order: Option<QueueOrder>,
}

impl Scenario {
    /// `kernel0(input, output)` copies input to output. Dumps are printed in
    /// hex and the output is checked against the input. Always uses an
    /// out-of-order queue.
    pub fn simple_kernel() -> Scenario {
        Scenario {
            name: "simple_kernel",
            pipeline: Pipeline::new()
                .stage(SIMPLE_KERNEL, &[ArgRole::Input, ArgRole::Output]),
            radix: Radix::Hex,
            verify: true,
            queue_order: Some(QueueOrder::OutOfOrder),
        }
    }

    /// `kernel_in(input)` feeds `kernel_inter()` which feeds
    /// `kernel_out(output)` through device-side pipes. Dumps are printed in
    /// decimal and nothing is checked. The queue order is left to the
    /// caller.
    pub fn pipe_stall() -> Scenario {
        Scenario {
            name: "pipe_stall",
            pipeline: Pipeline::new()
                .stage(PIPE_KERNEL_IN, &[ArgRole::Input])
                .stage(PIPE_KERNEL_INTER, &[])
                .stage(PIPE_KERNEL_OUT, &[ArgRole::Output]),
            radix: Radix::Decimal,
            verify: false,
            queue_order: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    pub fn radix(&self) -> Radix {
        self.radix
    }

    pub fn verifies(&self) -> bool {
        self.verify
    }

    /// Applies any queue order this scenario requires.
    pub fn configure(&self, config: HarnessConfig) -> HarnessConfig {
        match self.queue_order {
            Some(order) => config.queue_order(order),
            None => config,
        }
    }

    /// Returns the host input: `0, 1, 2, ...` for `records` values.
    pub fn input(&self, records: usize) -> Vec<i32> {
        (0..records).map(|i| i as i32).collect()
    }

    /// Opens a session, runs the pipeline once and prints the dumps (and the
    /// verdict, if this scenario verifies).
    pub fn run(&self, config: &HarnessConfig) -> Result<Outcome> {
        let config = self.configure(config.clone());
        info!("Running '{}' with {:?}.", self.name, config);

        let session = Session::open(&config)?;
        let loaded = self.pipeline.load(&session, config.get_records())?;

        let input = self.input(config.get_records());
        print!("{}", render_dump("inputs", &input, self.radix));
        loaded.write_input(&input)?;
        loaded.execute()?;
        let output = loaded.read_output()?;
        print!("\n{}", render_dump("outputs", &output, self.radix));

        let report = RunReport::new(input, output);
        let verification = if self.verify { Some(report.verify()) } else { None };

        if let Some(ref v) = verification {
            print_verdict(v);
        }

        Ok(Outcome { report, verification })
    }
}


/// What a scenario run produced.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub report: RunReport,
    pub verification: Option<Verification>,
}

impl Outcome {
    /// Returns false only if verification ran and failed.
    pub fn passed(&self) -> bool {
        self.verification.map(|v| v.is_match()).unwrap_or(true)
    }
}


// The verdict line is matched by scripts and stays uncolored.
fn print_verdict(verification: &Verification) {
    println!("\n{}", verification.message());
    if let Verification::Mismatch { index, expected, actual } = *verification {
        printlnc!(dark_grey: "First difference at [{}]: expected {:x}, got {:x}.",
            index, expected, actual);
    }
}
