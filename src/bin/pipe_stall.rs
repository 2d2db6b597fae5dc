//! Pipe harness: `kernel_in` -> `kernel_inter` -> `kernel_out`.
//!
//! The single positional argument selects the queue: `1` lets the runtime
//! execute the three kernels concurrently (out-of-order queue), `0` runs them
//! strictly in order. With an in-order queue the pipes between the kernels
//! are expected to stall.

use clap::Parser;
use xclbin_harness::cli::{self, HarnessArgs};
use xclbin_harness::{QueueOrder, Scenario, USAGE_CONCURRENT};

#[derive(Parser, Debug)]
#[command(name = "pipe_stall", about = "Run the kernel_in/kernel_inter/kernel_out pipe.")]
struct Cli {
    /// 1 for concurrent (out-of-order) kernel execution, 0 otherwise.
    concurrent: Option<u8>,

    #[command(flatten)]
    harness: HarnessArgs,
}

fn main() {
    cli::init_logging();
    let args = Cli::parse();

    let concurrent = match args.concurrent {
        Some(c) => c,
        None => {
            println!("{}", USAGE_CONCURRENT);
            return;
        },
    };

    let config = match QueueOrder::from_flag(concurrent)
        .and_then(|order| Ok(args.harness.config()?.queue_order(order)))
    {
        Ok(config) => config,
        Err(err) => cli::fail(&err),
    };

    if let Err(err) = Scenario::pipe_stall().run(&config) {
        cli::fail(&err);
    }
}
