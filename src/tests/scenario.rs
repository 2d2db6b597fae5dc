use crate::config::{HarnessConfig, QueueOrder, Radix};
use crate::pipeline::ArgRole;
use crate::report::{RunReport, Verification};
use crate::scenario::{Outcome, Scenario};

#[test]
fn simple_kernel_shape() {
    let scenario = Scenario::simple_kernel();
    let stages = scenario.pipeline().stages();

    assert_eq!(stages.len(), 1);
    assert_eq!(stages[0].name(), "kernel0");
    assert_eq!(stages[0].args(), &[ArgRole::Input, ArgRole::Output]);
    assert_eq!(scenario.radix(), Radix::Hex);
    assert!(scenario.verifies());
}

#[test]
fn simple_kernel_forces_out_of_order() {
    let config = Scenario::simple_kernel()
        .configure(HarnessConfig::new().queue_order(QueueOrder::InOrder));
    assert_eq!(config.get_queue_order(), QueueOrder::OutOfOrder);
}

#[test]
fn pipe_stall_shape() {
    let scenario = Scenario::pipe_stall();
    let stages = scenario.pipeline().stages();

    let names: Vec<&str> = stages.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["kernel_in", "kernel_inter", "kernel_out"]);
    assert_eq!(stages[0].args(), &[ArgRole::Input]);
    assert!(stages[1].args().is_empty());
    assert_eq!(stages[2].args(), &[ArgRole::Output]);
    assert_eq!(scenario.radix(), Radix::Decimal);
    assert!(!scenario.verifies());
}

#[test]
fn pipe_stall_keeps_caller_queue_order() {
    for &order in &[QueueOrder::InOrder, QueueOrder::OutOfOrder] {
        let config = Scenario::pipe_stall().configure(HarnessConfig::new().queue_order(order));
        assert_eq!(config.get_queue_order(), order);
    }
}

#[test]
fn input_is_index_sequence() {
    assert_eq!(Scenario::pipe_stall().input(5), vec![0, 1, 2, 3, 4]);
    assert!(Scenario::simple_kernel().input(0).is_empty());
}

#[test]
fn outcome_passes_unless_verification_fails() {
    let report = RunReport::new(vec![0], vec![1]);

    let unchecked = Outcome { report: report.clone(), verification: None };
    assert!(unchecked.passed());

    let failed = Outcome { report: report.clone(), verification: Some(report.verify()) };
    assert!(!failed.passed());

    let matched = Outcome { report, verification: Some(Verification::Matched) };
    assert!(matched.passed());
}
