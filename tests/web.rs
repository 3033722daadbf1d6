//! Browser-side checks, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use morphogen_engine::{init, ReactionDiffusion};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn init_and_run() {
    init();
    let mut rd = ReactionDiffusion::new(64, 48).unwrap();
    for _ in 0..6 {
        rd.run();
    }
    assert_eq!(rd.frame(), 6);
    assert_eq!(rd.colors_len_elements(), 64 * 48);
}

#[wasm_bindgen_test]
fn rejected_dimensions_surface_as_js_errors() {
    let err = ReactionDiffusion::new(2, 64).err().unwrap();
    let msg = err.as_string().unwrap();
    assert!(msg.contains("too small"), "{msg}");

    let mut rd = ReactionDiffusion::new(16, 16).unwrap();
    assert!(rd.seed(10, 20, 0, 1).is_err());
    assert!(rd.reset(16, 16, -1.0, 0.3, 0.055, 0.062).is_err());
    assert_eq!(rd.width(), 16);
}
