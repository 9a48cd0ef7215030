#![no_main]

use libfuzzer_sys::fuzz_target;
use semesterfaktura::pdf::FontWeight;
use semesterfaktura::pdf::metrics::wrap_text;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must terminate and never drop characters of a single word.
        let lines = wrap_text(s, 10.0, FontWeight::Regular, 40.0);
        if !s.contains(char::is_whitespace) && !s.is_empty() {
            assert_eq!(lines.concat(), s);
        }
    }
});
