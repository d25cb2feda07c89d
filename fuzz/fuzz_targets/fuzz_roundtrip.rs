#![no_main]

use alphadec::{decode_millis, encode_millis, parse};
use libfuzzer_sys::fuzz_target;

// 0000-01-01T00:00:00Z ..= 9999-12-31T23:59:59.999Z
const FIRST_MS: i64 = -62_167_219_200_000;
const LAST_MS: i64 = 253_402_300_799_999;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    // First 8 bytes pick an instant inside the canonical year range
    let raw = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let span = (LAST_MS - FIRST_MS + 1) as u64;
    let ms = FIRST_MS + (raw as u64 % span) as i64;

    let ad = encode_millis(ms).expect("instant in canonical range must encode");

    // Property 1: indices stay inside their level
    assert!(ad.period <= 25 && ad.bar <= 25, "letter index out of range");
    assert!(ad.arc <= 9 && ad.beat <= 9, "digit index out of range");

    // Property 2: decode is the exact inverse
    assert_eq!(decode_millis(&ad.canonical).unwrap(), ms, "roundtrip mismatch");

    // Property 3: parsed fields agree with the record
    let fields = parse(&ad.canonical).unwrap();
    assert_eq!(
        (fields.period, fields.arc, fields.bar, fields.beat, fields.ms_offset_in_beat),
        (ad.period, ad.arc, ad.bar, ad.beat, ad.ms_offset_in_beat),
        "parsed fields mismatch"
    );
});
