use std::path::{Path, PathBuf};
use clap::Parser;
use crate::cli::HarnessArgs;
use crate::config::{DeviceKind, HarnessConfig, QueueOrder};
use crate::error::Error;

#[derive(Parser, Debug)]
struct TestCli {
    concurrent: Option<u8>,

    #[command(flatten)]
    harness: HarnessArgs,
}

#[test]
fn parses_all_options() {
    let cli = TestCli::try_parse_from(vec!["pipe_stall", "1", "--xclbin", "build/pipe.xclbin",
        "--device-type", "cpu", "--records", "8", "--platform", "1"]).unwrap();

    assert_eq!(cli.concurrent, Some(1));
    assert_eq!(cli.harness.xclbin, Some(PathBuf::from("build/pipe.xclbin")));
    assert_eq!(cli.harness.device_type.as_deref(), Some("cpu"));
    assert_eq!(cli.harness.records, Some(8));
    assert_eq!(cli.harness.platform, Some(1));
}

#[test]
fn positional_is_optional() {
    let cli = TestCli::try_parse_from(vec!["pipe_stall"]).unwrap();
    assert_eq!(cli.concurrent, None);
    assert_eq!(cli.harness, HarnessArgs::default());
}

#[test]
fn apply_overrides_base() {
    let base = HarnessConfig::new().queue_order(QueueOrder::OutOfOrder);
    let args = HarnessArgs {
        xclbin: Some(PathBuf::from("x.xclbin")),
        device_type: Some("cpu".into()),
        records: Some(4),
        platform: None,
    };

    let config = args.apply(base).unwrap();
    assert_eq!(config.get_binary_path(), Path::new("x.xclbin"));
    assert_eq!(config.get_device_kind(), DeviceKind::Cpu);
    assert_eq!(config.get_records(), 4);
    assert_eq!(config.get_platform_idx(), 0);
    assert_eq!(config.get_queue_order(), QueueOrder::OutOfOrder);
}

#[test]
fn apply_without_options_keeps_base() {
    let base = HarnessConfig::new().records(32);
    assert_eq!(HarnessArgs::default().apply(base.clone()).unwrap(), base);
}

#[test]
fn apply_rejects_invalid() {
    let zero = HarnessArgs { records: Some(0), ..HarnessArgs::default() };
    assert!(matches!(zero.apply(HarnessConfig::new()), Err(Error::Config(_))));

    let bad_kind = HarnessArgs { device_type: Some("dsp".into()), ..HarnessArgs::default() };
    assert!(matches!(bad_kind.apply(HarnessConfig::new()), Err(Error::Config(_))));
}
