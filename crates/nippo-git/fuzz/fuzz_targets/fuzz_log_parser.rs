#![no_main]

use libfuzzer_sys::fuzz_target;
use nippo_git::parse_log_output;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(records) = parse_log_output(text) {
            for record in &records {
                assert!(record.hash.chars().count() <= 7);
            }
        }
    }
});
