#![no_main]
use libfuzzer_sys::fuzz_target;
use readable_expr::{Expr, render_readable};

// Arbitrary bytes through the JSON tree format: decoding may fail, rendering
// a decoded tree may fail, neither may panic.
fuzz_target!(|data: &[u8]| {
    if let Ok(expr) = serde_json::from_slice::<Expr>(data) {
        let _ = render_readable(&expr);
    }
});
