#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Splitting never fails on malformed quoting; check the invariants that
    // hold for every input.
    let input = String::from_utf8_lossy(data);
    let argv = respargs::build_argv(&input).expect("build_argv only fails on allocation");

    assert!(!argv.is_empty());
    for arg in &argv {
        assert!(arg.len() <= input.len());
    }
    if respargs::argv::only_whitespace(&input) {
        assert_eq!(argv, [""]);
    }
});
