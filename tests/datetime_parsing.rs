use freshbooks_rs::utils::date_format::parse_datetime;
use time::macros::datetime;


#[test]
fn primary_layout_parses_as_utc() {
    test_utils::do_setup();
    let parsed = parse_datetime("2023-05-01 12:00:00").unwrap();
    assert_eq!(parsed, datetime!(2023-05-01 12:00:00 UTC));
}

#[test]
fn rfc3339_fallback_parses() {
    test_utils::do_setup();
    let parsed = parse_datetime("2023-05-01T12:00:00Z").unwrap();
    assert_eq!(parsed, datetime!(2023-05-01 12:00:00 UTC));

    let offset = parse_datetime("2023-05-01T12:00:00+02:00").unwrap();
    assert_eq!(offset, datetime!(2023-05-01 10:00:00 UTC));
}

#[test]
fn unknown_layout_is_an_error() {
    test_utils::do_setup();
    let err = parse_datetime("May 1st, 2023").unwrap_err();
    assert!(err.contains("May 1st, 2023"));
}
