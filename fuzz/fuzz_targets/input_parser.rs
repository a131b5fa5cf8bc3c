#![no_main]

use bintrace::tracer::trace_text;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Split the input into values and target at the first newline
    if let Ok(input) = std::str::from_utf8(data) {
        let (values, target) = input.split_once('\n').unwrap_or((input, ""));
        // Either a trace or an InputError, never a panic
        let _ = trace_text(values, target);
    }
});
