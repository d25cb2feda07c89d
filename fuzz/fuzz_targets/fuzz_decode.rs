#![no_main]

use alphadec::decode;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary strings to decode() - should never panic
    // Malformed input must come back as an error, not a crash
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = decode(s);
    }
});
