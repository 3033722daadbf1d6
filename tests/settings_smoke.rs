use morphogen_engine::{
    GrayScottPreset, Orchestrator, ReactionDiffusion, SimError, SimSettings,
};

#[test]
fn settings_json_drives_a_reset() {
    let json = r#"{
        "width": 48,
        "height": 32,
        "params": { "diffusionA": 1.0, "diffusionB": 0.5 },
        "preset": "mitosis",
        "seed": { "xMin": 10, "xMax": 14, "yMin": 8, "yMax": 12 }
    }"#;
    let rd = ReactionDiffusion::from_settings_json(json).unwrap();
    assert_eq!((rd.width(), rd.height()), (48, 32));
    assert_eq!(rd.cell_b(10, 8), Some(1.0));
    assert_eq!(rd.cell_b(14, 8), Some(0.0));

    let echoed = SimSettings::from_json(&rd.settings_json()).unwrap();
    assert_eq!(echoed.preset, Some(GrayScottPreset::Mitosis));
    assert_eq!(echoed.params.diffusion_b(), 0.5);
    assert_eq!(echoed.resolved_params().feed(), 0.0367);
}

#[test]
fn defaults_fill_missing_fields() {
    let mut rd = ReactionDiffusion::from_settings_json("{}").unwrap();
    assert_eq!((rd.width(), rd.height()), (100, 100));

    rd.reset_with_settings_json(r#"{"width":12,"height":9}"#).unwrap();
    assert_eq!((rd.width(), rd.height()), (12, 9));
    assert_eq!(rd.cell_b(5, 4), Some(1.0));
}

#[test]
fn bad_settings_are_rejected_before_touching_state() {
    let mut orch = Orchestrator::new(SimSettings::default()).unwrap();
    orch.run();

    let err = SimSettings::from_json(r#"{"width":3,"height":3,"seed":{"xMin":0,"xMax":4,"yMin":0,"yMax":1}}"#)
        .unwrap_err();
    assert!(matches!(err, SimError::SeedOutOfBounds { .. }));

    let mut tiny = SimSettings::default();
    tiny.height = 2;
    assert!(orch.reset(tiny).is_err());
    assert_eq!(orch.simulator().frame(), 1);
    assert_eq!(orch.simulator().height(), 100);
}
