use crate::constants::{days_in_year, is_leap_year, Unit, MS_PER_DAY};
use crate::scaled::{Scaled, UnitSizes, SCALE};
use crate::{
    decode, decode_millis, encode, encode_millis, index_to_letter, letter_to_index, parse,
    AlphaDec, DecodeError, EncodeError, RangeError,
};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
}

fn canonical(t: DateTime<Utc>) -> String {
    encode(t).unwrap().canonical
}

// ----------------------------------------------------------------------------
// Hierarchy config
// ----------------------------------------------------------------------------

#[test]
fn test_leap_rule() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(1600));
    assert!(is_leap_year(0));
    assert!(!is_leap_year(2023));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_year(2024), 366);
    assert_eq!(days_in_year(2023), 365);
}

#[test]
fn test_unit_levels() {
    let counts: Vec<u32> = Unit::ALL.iter().map(|u| u.count()).collect();
    assert_eq!(counts, vec![26, 10, 26, 10]);
    assert_eq!(Unit::Period.max_index(), 25);
    assert_eq!(Unit::Beat.max_index(), 9);
    assert!(Unit::Period.is_lettered());
    assert!(!Unit::Arc.is_lettered());
    assert!(Unit::Bar.is_lettered());
    assert!(!Unit::Beat.is_lettered());
}

// ----------------------------------------------------------------------------
// Scaled-integer engine
// ----------------------------------------------------------------------------

#[test]
fn test_unit_sizes_common_year() {
    let sizes = UnitSizes::for_year(2023);
    assert_eq!(sizes.year.to_string(), "31536000000000000");
    assert_eq!(sizes.period.to_string(), "1212923076923076");
    assert_eq!(sizes.arc.to_string(), "121292307692307");
    assert_eq!(sizes.bar.to_string(), "4665088757396");
    assert_eq!(sizes.beat.to_string(), "466508875739");
}

#[test]
fn test_unit_sizes_leap_year() {
    let sizes = UnitSizes::for_year(2024);
    assert_eq!(sizes.year.to_string(), "31622400000000000");
    assert_eq!(sizes.period.to_string(), "1216246153846153");
    assert_eq!(sizes.arc.to_string(), "121624615384615");
    assert_eq!(sizes.bar.to_string(), "4677869822485");
    assert_eq!(sizes.beat.to_string(), "467786982248");
    assert_eq!(sizes.of(Unit::Bar), &sizes.bar);
}

#[test]
fn test_unit_sizes_truncate_without_carry() {
    // 26 periods fall short of the year by the truncated remainder
    let sizes = UnitSizes::for_year(2023);
    let covered = sizes.period.times(26);
    assert!(covered < sizes.year);
    assert_eq!(
        (sizes.year.as_raw() - covered.as_raw()).to_string(),
        "24"
    );
}

#[test]
fn test_scaled_millis_rounding() {
    let x = Scaled::from_millis(5) + Scaled::from_raw(1.into());
    assert_eq!(x.floor_millis(), Some(5));
    assert_eq!(x.ceil_millis(), Some(6));

    let exact = Scaled::from_millis(7);
    assert_eq!(exact.floor_millis(), Some(7));
    assert_eq!(exact.ceil_millis(), Some(7));
    assert_eq!(Scaled::zero().ceil_millis(), Some(0));
    assert_eq!(SCALE, 1_000_000);
}

#[test]
fn test_take_units() {
    let unit = Scaled::from_millis(10);
    let mut remaining = Scaled::from_millis(35);
    let taken = remaining.take_units(&unit);
    assert_eq!(taken, 3.into());
    assert_eq!(remaining, Scaled::from_millis(5));
}

// ----------------------------------------------------------------------------
// Letter codec
// ----------------------------------------------------------------------------

#[test]
fn test_index_to_letter_bounds() {
    assert_eq!(index_to_letter(0), Ok('A'));
    assert_eq!(index_to_letter(13), Ok('N'));
    assert_eq!(index_to_letter(25), Ok('Z'));
    assert_eq!(
        index_to_letter(26),
        Err(RangeError::IndexOutOfRange { index: 26, max: 25 })
    );
    assert_eq!(
        index_to_letter(-1),
        Err(RangeError::IndexOutOfRange { index: -1, max: 25 })
    );
    assert!(index_to_letter(i64::MAX).is_err());
}

#[test]
fn test_letter_to_index() {
    for (i, ch) in ('A'..='Z').enumerate() {
        assert_eq!(letter_to_index(ch), Ok(i as u8));
        assert_eq!(index_to_letter(i as i64), Ok(ch));
    }
    assert_eq!(letter_to_index('a'), Err(RangeError::InvalidLetter { ch: 'a' }));
    assert!(letter_to_index('0').is_err());
    assert!(letter_to_index('Ä').is_err());
}

// ----------------------------------------------------------------------------
// Encoder
// ----------------------------------------------------------------------------

#[test]
fn test_year_start_is_all_zero() {
    let ad = encode(utc(2024, 1, 1, 0, 0, 0)).unwrap();
    assert_eq!(
        (ad.period, ad.arc, ad.bar, ad.beat, ad.ms_offset_in_beat),
        (0, 0, 0, 0, 0)
    );
    assert_eq!(ad.canonical, "2024_A0A0_000000");
    assert_eq!(ad.arc_start_ms_in_year, 0);
    assert_eq!(ad.arc_end_ms_in_year, 121_624_615);
}

#[test]
fn test_known_vectors() {
    let cases = [
        (utc(1970, 1, 1, 0, 0, 0), "1970_A0A0_000000"),
        (utc(2023, 7, 2, 12, 0, 0), "2023_N0A0_000000"),
        (utc(2024, 7, 2, 12, 0, 0), "2024_N0J2_163597"),
        (utc(2000, 2, 29, 6, 0, 0), "2000_E2C3_207053"),
        (utc(2023, 1, 15, 0, 0, 0), "2023_A9Z2_408994"),
        (utc(2024, 1, 15, 0, 0, 0), "2024_A9Y5_370650"),
        (utc(1, 1, 1, 0, 0, 0), "0001_A0A0_000000"),
    ];
    for (t, expected) in cases {
        assert_eq!(canonical(t), expected, "wrong label for {t}");
    }
}

#[test]
fn test_millisecond_vectors() {
    let t = utc(2025, 6, 15, 8, 30, 15) + Duration::milliseconds(250);
    let ad = encode(t).unwrap();
    assert_eq!(ad.canonical, "2025_L7U4_247439");
    assert_eq!(ad.period_letter, 'L');
    assert_eq!(ad.bar_letter, 'U');
    assert_eq!((ad.period, ad.arc, ad.bar, ad.beat), (11, 7, 20, 4));

    let start = utc(2023, 1, 1, 0, 0, 0);
    assert_eq!(canonical(start + Duration::milliseconds(1)), "2023_A0A0_000001");
    // first beat of 2023 ends at 466_508.875739 ms
    assert_eq!(canonical(start + Duration::milliseconds(466_508)), "2023_A0A0_466508");
    assert_eq!(canonical(start + Duration::milliseconds(466_509)), "2023_A0A1_000000");
}

#[test]
fn test_last_millisecond_of_year() {
    let common = utc(2024, 1, 1, 0, 0, 0) - Duration::milliseconds(1);
    assert_eq!(canonical(common), "2023_Z9Z9_466507");
    let leap = utc(2025, 1, 1, 0, 0, 0) - Duration::milliseconds(1);
    assert_eq!(canonical(leap), "2024_Z9Z9_467785");
}

#[test]
fn test_leap_year_sensitivity() {
    // Same day-of-year offset (38 days) lands in different arcs
    let common = encode(utc(2023, 2, 8, 0, 0, 0)).unwrap();
    let leap = encode(utc(2024, 2, 8, 0, 0, 0)).unwrap();
    assert_eq!(common.canonical, "2023_C7B7_377041");
    assert_eq!(leap.canonical, "2024_C6Z8_270958");
    assert_ne!((common.period, common.arc), (leap.period, leap.arc));

    // 1900 is not a leap year, so it lines up with 2023 rather than 2024
    assert_eq!(canonical(utc(1900, 3, 1, 0, 0, 0)), "1900_E2A7_057514");
    assert_eq!(canonical(utc(2023, 3, 1, 0, 0, 0)), "2023_E2A7_057514");
    assert_eq!(canonical(utc(2024, 3, 1, 0, 0, 0)), "2024_E2Q1_452449");
}

#[test]
fn test_arc_bounds() {
    let ad = encode(utc(2023, 7, 2, 12, 0, 0)).unwrap();
    assert_eq!(ad.arc_start_ms_in_year, 15_767_999_999);
    assert_eq!(ad.arc_end_ms_in_year, 15_889_292_306);

    let (start, end) = ad.arc_bounds().unwrap();
    let year_start = utc(2023, 1, 1, 0, 0, 0);
    assert_eq!(start, year_start + Duration::milliseconds(15_767_999_999));
    assert_eq!(end, year_start + Duration::milliseconds(15_889_292_306));
    assert!(start < utc(2023, 7, 2, 12, 0, 0));
}

#[test]
fn test_derived_views() {
    let ad = encode(utc(2023, 2, 8, 0, 0, 0)).unwrap();
    assert_eq!(ad.readable(), "C7:B7");
    assert_eq!(ad.label(), "2023_C7B7");
    assert_eq!(ad.arc_label(), "C7");
    assert_eq!(ad.to_string(), "2023_C7B7_377041");
}

#[test]
fn test_sub_millisecond_truncated() {
    let t = utc(2023, 7, 2, 12, 0, 0) + Duration::nanoseconds(999_999);
    assert_eq!(canonical(t), "2023_N0A0_000000");
}

#[test]
fn test_encode_deterministic() {
    let t = utc(2025, 10, 19, 9, 41, 3);
    assert_eq!(encode(t).unwrap(), encode(t).unwrap());
}

#[test]
fn test_encode_year_out_of_range() {
    let too_late = utc(10_000, 1, 1, 0, 0, 0);
    assert_eq!(encode(too_late), Err(EncodeError::YearOutOfRange { year: 10_000 }));
    let too_early = utc(-1, 12, 31, 0, 0, 0);
    assert_eq!(encode(too_early), Err(EncodeError::YearOutOfRange { year: -1 }));
}

#[test]
fn test_encode_millis() {
    // 2023-07-02T12:00:00Z
    assert_eq!(encode_millis(1_688_299_200_000).unwrap().canonical, "2023_N0A0_000000");
    assert_eq!(
        encode_millis(i64::MAX),
        Err(EncodeError::InvalidInstant { millis: i64::MAX })
    );
}

#[test]
fn test_record_serializes_camel_case() {
    let ad = encode(utc(2023, 7, 2, 12, 0, 0)).unwrap();
    let json = serde_json::to_value(&ad).unwrap();
    assert_eq!(json["canonical"], "2023_N0A0_000000");
    assert_eq!(json["periodLetter"], "N");
    assert_eq!(json["msOffsetInBeat"], 0);
    assert_eq!(json["arcStartMsInYear"], 15_767_999_999_i64);

    let back: AlphaDec = serde_json::from_value(json).unwrap();
    assert_eq!(back, ad);
}

// ----------------------------------------------------------------------------
// Decoder
// ----------------------------------------------------------------------------

#[test]
fn test_decode_known_vectors() {
    assert_eq!(decode("2024_A0A0_000000").unwrap(), utc(2024, 1, 1, 0, 0, 0));
    assert_eq!(decode("2023_N0A0_000000").unwrap(), utc(2023, 7, 2, 12, 0, 0));
    assert_eq!(decode("2024_N0J2_163597").unwrap(), utc(2024, 7, 2, 12, 0, 0));
    assert_eq!(decode_millis("1970_A0A0_000000").unwrap(), 0);
}

#[test]
fn test_decode_rounds_boundary_up() {
    // bar B starts at 4_665_088.757396 ms; the first whole millisecond after it
    let t = decode("2023_A0B0_000000").unwrap();
    assert_eq!(t, utc(2023, 1, 1, 1, 17, 45) + Duration::milliseconds(89));
    assert_eq!(canonical(t), "2023_A0B0_000000");
}

#[test]
fn test_decode_hand_crafted_overflows_into_next_year() {
    let t = decode("2023_Z9Z9_999999").unwrap();
    assert_eq!(t, utc(2024, 1, 1, 0, 8, 53) + Duration::milliseconds(491));
}

#[test]
fn test_decode_rejects_malformed() {
    for bad in [
        "2024_A0A0_00000",
        "abcd_A0A0_000000",
        "2024_a0A0_000000",
        "2024_AAA0_000000",
        "2024_A0A0_0000000",
        "2024-A0A0-000000",
        " 2024_A0A0_000000",
        "2024_A0A0_000000\n",
        "２０２４_A0A0_000000",
        "",
    ] {
        assert_eq!(
            decode(bad),
            Err(DecodeError::MalformedCanonical { input: bad.to_owned() }),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_parse_fields() {
    let fields = parse("2024_N0J2_163597").unwrap();
    assert_eq!(fields.year, 2024);
    assert_eq!(fields.period, 13);
    assert_eq!(fields.arc, 0);
    assert_eq!(fields.bar, 9);
    assert_eq!(fields.beat, 2);
    assert_eq!(fields.ms_offset_in_beat, 163_597);
    assert_eq!(fields.ms_since_year_start(), Some(183 * MS_PER_DAY + 12 * 3_600_000));
}

#[test]
fn test_error_messages() {
    let err = decode("nope").unwrap_err();
    assert_eq!(
        err.to_string(),
        "bad AlphaDec canonical string (format YYYY_PaBt_MMMMMM): \"nope\""
    );
    let err = index_to_letter(26).unwrap_err();
    assert_eq!(err.to_string(), "index 26 is out of range [0, 25]");
    let err = EncodeError::YearOutOfRange { year: 12_345 };
    assert_eq!(err.to_string(), "year 12345 is outside the canonical range 0000-9999");
}
