#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let (check_in, check_out) = s.split_once('|').unwrap_or((s, ""));
        // Must not panic and must never bill zero nights.
        assert!(semesterfaktura::billable_nights(check_in, check_out) >= 1);
    }
});
