use super::*;
use crate::range::Range;

#[test]
fn parses_bounded_and_open_bands_in_order() {
    let bands = BandSet::parse("100|200\n200|").unwrap();

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0], Band::new(Range::bounded(100, 200)));
    assert_eq!(bands[1], Band::new(Range::open(200)));
}

#[test]
fn missing_min_defaults_open_lower_bound() {
    let bands = BandSet::parse("|100").unwrap();

    assert_eq!(bands[0].range, Range::new(None, Some(100)));
    assert_eq!(bands[0].range.display_min(), 0);
}

#[test]
fn accepts_crlf_and_lone_cr_line_endings() {
    let crlf = BandSet::parse("1|2\r\n3|4").unwrap();
    let cr = BandSet::parse("1|2\r3|4").unwrap();

    assert_eq!(crlf, cr);
    assert_eq!(crlf.len(), 2);
}

#[test]
fn blank_lines_are_skipped() {
    let bands = BandSet::parse("1|2\n\n3|4\n").unwrap();

    assert_eq!(bands.len(), 2);
}

#[test]
fn empty_blob_fails_with_empty_config() {
    assert_eq!(
        BandSet::parse(""),
        Err(vec![BandConfigError::EmptyConfig])
    );
    assert_eq!(
        BandSet::parse("  \n \r\n"),
        Err(vec![BandConfigError::EmptyConfig])
    );
}

#[test]
fn line_without_separator_is_rejected() {
    let errors = BandSet::parse("100200").unwrap_err();

    assert!(errors.contains(&BandConfigError::MissingSeparator { line: 1 }));
}

#[test]
fn malformed_line_emits_chained_errors() {
    // No separator and a non-integer side: both problems surface at once.
    let errors = BandSet::parse("abc").unwrap_err();

    assert_eq!(
        errors,
        vec![
            BandConfigError::MissingSeparator { line: 1 },
            BandConfigError::NotInteger {
                line: 1,
                side: BandSide::Min,
                raw: "abc".to_string(),
            },
        ]
    );
}

#[test]
fn non_integer_min_is_reported_and_max_is_skipped() {
    let errors = BandSet::parse("abc|def").unwrap_err();

    assert_eq!(
        errors,
        vec![BandConfigError::NotInteger {
            line: 1,
            side: BandSide::Min,
            raw: "abc".to_string(),
        }]
    );
}

#[test]
fn non_integer_max_is_reported_when_min_is_clean() {
    let errors = BandSet::parse("100|def").unwrap_err();

    assert_eq!(
        errors,
        vec![BandConfigError::NotInteger {
            line: 1,
            side: BandSide::Max,
            raw: "def".to_string(),
        }]
    );
}

#[test]
fn signs_and_decimals_are_not_integers() {
    assert!(BandSet::parse("+1|2").is_err());
    assert!(BandSet::parse("1|2.5").is_err());
}

#[test]
fn inverted_and_equal_bounds_are_rejected() {
    assert_eq!(
        BandSet::parse("200|100").unwrap_err(),
        vec![BandConfigError::MinGreaterThanMax {
            line: 1,
            min: 200,
            max: 100,
        }]
    );
    assert_eq!(
        BandSet::parse("100|100").unwrap_err(),
        vec![BandConfigError::MinEqualsMax { line: 1, min: 100 }]
    );
}

#[test]
fn bare_separator_is_an_empty_range_option() {
    assert_eq!(
        BandSet::parse("|").unwrap_err(),
        vec![BandConfigError::EmptyRangeOption { line: 1 }]
    );
}

#[test]
fn errors_accumulate_across_lines() {
    let errors = BandSet::parse("100|200\n300|100\nx|9\n|").unwrap_err();

    assert_eq!(
        errors,
        vec![
            BandConfigError::MinGreaterThanMax {
                line: 2,
                min: 300,
                max: 100,
            },
            BandConfigError::NotInteger {
                line: 3,
                side: BandSide::Min,
                raw: "x".to_string(),
            },
            BandConfigError::EmptyRangeOption { line: 4 },
        ]
    );
}

#[test]
fn extra_separators_are_rejected_but_sides_still_checked() {
    let errors = BandSet::parse("1|2|3").unwrap_err();

    assert_eq!(
        errors,
        vec![BandConfigError::MissingSeparator { line: 1 }]
    );
}

#[test]
fn sides_are_trimmed_before_parsing() {
    let bands = BandSet::parse(" 100 | 200 ").unwrap();

    assert_eq!(bands[0].range, Range::bounded(100, 200));
}

#[test]
fn overflowing_values_are_not_integers() {
    let errors = BandSet::parse("99999999999999999999|").unwrap_err();

    assert!(matches!(
        errors.as_slice(),
        [BandConfigError::NotInteger { .. }]
    ));
}

#[test]
fn band_set_round_trips_through_serde() {
    let bands = BandSet::parse("100|200\n200|").unwrap();
    let json = serde_json::to_string(&bands).unwrap();
    let decoded: BandSet = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, bands);
}
