#![no_main]

use libfuzzer_sys::fuzz_target;

// Accepts arbitrary bytes, attempts to parse as JSON, feeds to canonicalize_value().
// Goal: no panics, and a route for every value without null/boolean nodes.
fuzz_target!(|data: &[u8]| {
    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        if let Ok(route) = pattern_route_core::canonicalize_value(&value) {
            // Strings pass through, so canonicalizing the route is a fixed point
            let again = pattern_route_core::canonicalize_value(&serde_json::Value::String(route.clone()));
            assert_eq!(again.ok().as_deref(), Some(route.as_str()));
        }
    }
});
