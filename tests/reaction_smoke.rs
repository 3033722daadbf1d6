use morphogen_engine::{ReactionDiffusion, RENDER_INTERVAL};

#[test]
fn new_instance_is_rendered_and_seeded() {
    let rd = ReactionDiffusion::new(100, 100).unwrap();
    assert_eq!((rd.width(), rd.height()), (100, 100));
    assert_eq!(rd.frame(), 0);
    assert_eq!(rd.colors_len_elements(), 100 * 100);
    assert_eq!(rd.colors_len_bytes(), 100 * 100 * 4);

    // Centered 10x10 block.
    assert_eq!(rd.cell_b(45, 45), Some(1.0));
    assert_eq!(rd.cell_b(54, 54), Some(1.0));
    assert_eq!(rd.cell_b(55, 54), Some(0.0));
    assert_eq!(rd.cell_a(100, 0), None);
}

#[test]
fn run_refreshes_pixels_on_the_cadence() {
    let mut rd = ReactionDiffusion::new(64, 64).unwrap();
    let mut refreshed = Vec::new();
    for tick in 1..=3 * RENDER_INTERVAL {
        if rd.run() {
            refreshed.push(tick);
        }
    }
    assert_eq!(refreshed, vec![6, 12, 18]);
    assert_eq!(rd.frame(), 18);
    assert_eq!(rd.debug_log_json(), r#"["18"]"#);
}

#[test]
fn evaluate_mirrors_a_host_cycle() {
    let mut rd = ReactionDiffusion::new(40, 40).unwrap();
    rd.run();
    rd.run();

    // reset + run: fresh grid, one step.
    assert!(!rd.evaluate(true, true, 50, 30, 1.0, 0.5, 0.0545, 0.062).unwrap());
    assert_eq!((rd.width(), rd.height()), (50, 30));
    assert_eq!(rd.frame(), 1);

    // run only: rates are ignored.
    rd.evaluate(false, true, 0, 0, -1.0, -1.0, -1.0, -1.0).unwrap();
    assert_eq!(rd.frame(), 2);

    // idle
    rd.evaluate(false, false, 0, 0, 0.0, 0.0, 0.0, 0.0).unwrap();
    assert_eq!(rd.frame(), 2);
}

#[test]
fn planes_and_pixels_agree_after_render() {
    let mut rd = ReactionDiffusion::new(30, 30).unwrap();
    for _ in 0..40 {
        rd.run();
    }
    rd.render();

    let a = rd.concentrations_a();
    let b = rd.concentrations_b();
    assert_eq!(a.len(), 900);
    assert_eq!(b.len(), 900);
    assert!(a.iter().chain(&b).all(|v| (0.0..=1.0).contains(v)));

    let layout = rd.pixel_layout();
    assert_eq!(layout.colors_len_elements(), 900);
    assert_eq!(layout.colors_len_bytes(), 3600);
    assert_eq!((layout.width(), layout.height()), (30, 30));
}

#[test]
fn reset_and_extra_seed() {
    let mut rd = ReactionDiffusion::new(20, 20).unwrap();
    for _ in 0..10 {
        rd.run();
    }
    rd.reset(32, 16, 1.0, 0.3, 0.029, 0.057).unwrap();
    assert_eq!(rd.frame(), 0);
    assert_eq!(rd.colors_len_elements(), 32 * 16);
    assert_eq!(rd.debug_log_json(), "[]");

    rd.seed(1, 3, 1, 3).unwrap();
    assert_eq!(rd.cell_a(1, 1), Some(0.0));
    assert_eq!(rd.cell_b(2, 2), Some(1.0));
}
