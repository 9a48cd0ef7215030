#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Errors are fine, panics are bugs.
        if let Ok(invoice) = semesterfaktura::InvoiceData::from_json(s) {
            let _ = semesterfaktura::validate_completeness(&invoice);
            let _ = semesterfaktura::pdf::invoice_file_name(&invoice);
        }
    }
});
