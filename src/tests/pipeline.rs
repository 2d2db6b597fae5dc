use crate::pipeline::{ArgRole, KernelStage, Pipeline};

#[test]
fn stages_keep_declaration_order() {
    let pipeline = Pipeline::new()
        .stage("a", &[ArgRole::Input])
        .stage("b", &[])
        .stage("c", &[ArgRole::Output]);

    let names: Vec<&str> = pipeline.stages().iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert!(pipeline.stages()[1].args().is_empty());
}

#[test]
fn uses_reports_bound_roles() {
    let only_in = Pipeline::new().stage("k", &[ArgRole::Input]);
    assert!(only_in.uses(ArgRole::Input));
    assert!(!only_in.uses(ArgRole::Output));
    assert!(!Pipeline::new().uses(ArgRole::Input));
}

#[test]
fn stage_args_are_positional() {
    let stage = KernelStage::new("kernel0", &[ArgRole::Output, ArgRole::Input]);
    assert_eq!(stage.name(), "kernel0");
    assert_eq!(stage.args(), &[ArgRole::Output, ArgRole::Input]);
    assert_eq!(Pipeline::new().stage("kernel0", &[ArgRole::Output, ArgRole::Input]).stages(),
        &[stage]);
}
