use morphogen_engine::ReactionDiffusion;

#[test]
fn perf_smoke_run() {
    let mut rd = ReactionDiffusion::new(128, 64).unwrap();
    rd.enable_perf_metrics(true);
    for _ in 0..12 {
        rd.run();
    }
    let stats = rd.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.render_ms() >= 0.0);
    assert_eq!(stats.frame(), 12);
    assert_eq!(stats.cells_updated(), 126 * 62);
    assert_eq!(stats.grid_size(), 128 * 64);
}
