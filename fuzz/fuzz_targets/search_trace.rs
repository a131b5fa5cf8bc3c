#![no_main]

use bintrace::input::SearchRequest;
use bintrace::tracer::trace_request;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|request: SearchRequest| {
    let Ok(trace) = trace_request(&request) else {
        assert!(request.values.is_empty());
        return;
    };

    let outcome = trace.outcome();
    assert_eq!(outcome.found, request.values.contains(&request.target));
    if let Some(position) = outcome.position {
        assert_eq!(trace.sorted()[position], request.target);
    }
});
