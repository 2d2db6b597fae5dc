//! Loopback harness: writes `0..N` to `kernel0`, reads it back and checks
//! that input and output match.

use clap::Parser;
use xclbin_harness::cli::{self, HarnessArgs};
use xclbin_harness::Scenario;

#[derive(Parser, Debug)]
#[command(name = "simple_kernel", about = "Run kernel0 from an xclbin and verify its output.")]
struct Cli {
    #[command(flatten)]
    harness: HarnessArgs,
}

fn main() {
    cli::init_logging();
    let args = Cli::parse();

    let config = match args.harness.config() {
        Ok(config) => config,
        Err(err) => cli::fail(&err),
    };

    if let Err(err) = Scenario::simple_kernel().run(&config) {
        cli::fail(&err);
    }
}
