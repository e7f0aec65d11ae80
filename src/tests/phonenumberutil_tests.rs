use strum::IntoEnumIterator;

use crate::{
    NumberKind, PhoneNumber, PhoneNumberFormat, PhoneNumberPart, PhoneNumberUtil,
    PHONE_NUMBER_UTIL, ZaPhoneRule,
    errors::{DialInError, RuleError},
    i18n::CountryCode,
};

use super::init_logging;

// Each of these fails because the digits left after sanitizing have the
// wrong length, or do not start with 27 or 0 followed by a known prefix.
const EXPECTED_CHECK_INVALIDS: &[&str] = &[
    "01134567",
    "113456789",
    "+113456789",
    "+270113456789",
    "(01) 345 6789",
    "27011 3455 6789",
    "011-34-6789",
    "01-345 6789",
    "011 34-67",
    "011/345/789",
    "+1/345/6789",
    "",
    "not a number",
    "0193456789",
    "0203456789",
    "0853456789",
];

const EXPECTED_CHECK_VALIDS: &[&str] = &[
    "0113456789",
    "27113456789",
    "+27113456789",
    "(011) 345 6789",
    "011 345 6789",
    "011-345-6789",
    "011-345 6789",
    "011 345-6789",
    "011/345/6789",
    "2711/345/6789",
];

const LANDLINE_PREFIXES: &[&str] = &[
    "10", "11", "12", "13", "14", "15", "16", "17", "18",
    "21", "22", "23", "24", "27", "28",
    "31", "32", "33", "34", "35", "36", "39",
    "40", "41", "42", "43", "44", "45", "46", "47", "48", "49",
    "51", "53", "54", "56", "57", "58",
];

const MOBILE_PREFIXES: &[&str] = &[
    "60", "61", "62", "63", "64", "65", "66",
    "71", "72", "73", "74", "76", "77", "78", "79",
    "81", "82", "83", "84",
];

fn get_phone_util() -> PhoneNumberUtil {
    init_logging();
    PhoneNumberUtil::new()
}

fn expected_format_result(number_format: PhoneNumberFormat) -> &'static str {
    match number_format {
        PhoneNumberFormat::National => "011 345 6789",
        PhoneNumberFormat::E164 => "+27113456789",
        PhoneNumberFormat::Intl => "+27 11 345 6789",
        PhoneNumberFormat::RFC3966 => "+27-11-345-6789",
    }
}

fn parse(phone_util: &PhoneNumberUtil, number: &str) -> PhoneNumber {
    phone_util
        .check(number)
        .unwrap_or_else(|| panic!("{number:?} should be a valid number"))
}

#[test]
fn check_rejects_invalid_numbers() {
    let phone_util = get_phone_util();
    for number in EXPECTED_CHECK_INVALIDS {
        assert_eq!(phone_util.check(number), None, "{number:?} should not parse");
    }
}

#[test]
fn check_accepts_valid_numbers() {
    let phone_util = get_phone_util();
    for number in EXPECTED_CHECK_VALIDS {
        let phone_number = parse(&phone_util, number);
        assert_eq!(phone_number.number(), "113456789");
        assert_eq!(phone_number.prefix(), "11");
        assert_eq!(phone_number.exchange(), "345");
        assert_eq!(phone_number.line(), "6789");
    }
}

#[test]
fn punctuation_does_not_change_the_result() {
    let phone_util = get_phone_util();
    let expected = parse(&phone_util, "0113456789");
    for number in EXPECTED_CHECK_VALIDS {
        assert_eq!(parse(&phone_util, number), expected);
    }
}

#[test]
fn formats_of_valid_numbers() {
    let phone_util = get_phone_util();
    for number in EXPECTED_CHECK_VALIDS {
        let phone_number = parse(&phone_util, number);
        for number_format in PhoneNumberFormat::iter() {
            assert_eq!(
                phone_number.format(number_format),
                expected_format_result(number_format),
                "{number:?} in {number_format}"
            );
        }
    }
}

#[test]
fn format_example_number() {
    let phone_util = get_phone_util();
    let phone_number = parse(&phone_util, "0115009000");

    assert_eq!(phone_number.prefix(), "11");
    assert_eq!(phone_number.exchange(), "500");
    assert_eq!(phone_number.line(), "9000");
    assert_eq!(phone_number.format_national(false, false), "011 500 9000");
    assert_eq!(phone_number.format_e164(), "+27115009000");
    assert_eq!(phone_number.format_intl(), "+27 11 500 9000");
    assert_eq!(phone_number.format_rfc3966(), "+27-11-500-9000");
    assert_eq!(phone_number.to_string(), "011 500 9000");
}

#[test]
fn e164_and_rfc3966_derive_from_intl() {
    let phone_util = get_phone_util();
    for number in ["0115009000", "0821234567", "+27 21 480 7700"] {
        let phone_number = parse(&phone_util, number);
        let intl = phone_number.format_intl();
        assert_eq!(phone_number.format_e164(), intl.replace(' ', ""));
        assert_eq!(phone_number.format_rfc3966(), intl.replace(' ', "-"));
    }
}

#[test]
fn format_national_options() {
    let phone_util = get_phone_util();
    let landline = parse(&phone_util, "0115009000");

    assert_eq!(landline.format_national(false, true), "011-500-9000");
    assert_eq!(landline.format_national(true, false), "(011) 500 9000");
    assert_eq!(landline.format_national(true, true), "(011) 500-9000");

    let mobile = parse(&phone_util, "082 123 4567");
    assert_eq!(mobile.format_national(false, false), "082 123 4567");
    assert_eq!(mobile.format_national(true, false), "082 123 4567");
    assert_eq!(mobile.format_national(true, true), "082-123-4567");
}

#[test]
fn getters() {
    let phone_util = get_phone_util();
    let phone_number = parse(&phone_util, "0115009000");

    assert_eq!(phone_number.get("number"), Some("115009000"));
    assert_eq!(phone_number.get("prefix"), Some("11"));
    assert_eq!(phone_number.get("three"), Some("500"));
    assert_eq!(phone_number.get("exchange"), Some("500"));
    assert_eq!(phone_number.get("four"), Some("9000"));
    assert_eq!(phone_number.get("line"), Some("9000"));
    assert_eq!(phone_number.get("five"), None);
    assert_eq!(phone_number.get("Prefix"), None);

    for part in PhoneNumberPart::iter() {
        assert_eq!(phone_number.get(part.as_ref()), Some(phone_number.part(part)));
    }
}

#[test]
fn classification() {
    let phone_util = get_phone_util();

    let landline = parse(&phone_util, "0115009000");
    assert!(landline.is(NumberKind::Landline));
    assert!(!landline.is(NumberKind::Mobile));
    assert_eq!(landline.kind(), NumberKind::Landline);

    let mobile = parse(&phone_util, "+27 82 123 4567");
    assert!(mobile.is(NumberKind::Mobile));
    assert!(!mobile.is(NumberKind::Landline));
    assert_eq!(mobile.kind(), NumberKind::Mobile);

    assert_eq!("landline".parse::<NumberKind>(), Ok(NumberKind::Landline));
    assert_eq!("mobile".parse::<NumberKind>(), Ok(NumberKind::Mobile));
    assert!("fax".parse::<NumberKind>().is_err());
}

#[test]
fn accepted_prefixes_match_the_known_ranges() {
    let phone_util = get_phone_util();
    for prefix in 0..100 {
        let prefix = format!("{prefix:02}");
        let parsed = phone_util.check(&format!("0{prefix}5009000"));

        let is_landline = LANDLINE_PREFIXES.contains(&prefix.as_str());
        let is_mobile = MOBILE_PREFIXES.contains(&prefix.as_str());
        assert_eq!(parsed.is_some(), is_landline || is_mobile, "prefix {prefix}");

        if let Some(phone_number) = parsed {
            assert_eq!(phone_number.is(NumberKind::Landline), is_landline, "prefix {prefix}");
            assert_eq!(phone_number.is(NumberKind::Mobile), is_mobile, "prefix {prefix}");
            assert_ne!(
                phone_number.is(NumberKind::Landline),
                phone_number.is(NumberKind::Mobile),
                "prefix {prefix}"
            );
        }
    }
}

#[test]
fn country_marker_is_required() {
    let phone_util = get_phone_util();
    assert!(phone_util.check("27821234567").is_some());
    assert!(phone_util.check("0821234567").is_some());
    assert!(phone_util.check("821234567").is_none());
    assert!(phone_util.check("26821234567").is_none());
    assert!(phone_util.check("00821234567").is_none());
    assert!(phone_util.check("270821234567").is_none());
}

#[test]
fn format_dial_in() {
    let phone_util = get_phone_util();
    let phone_number = parse(&phone_util, "0115009000");

    let exit_codes = phone_util.exit_codes().unwrap();
    assert!(!exit_codes.is_empty());
    for (country_code, exit_code) in exit_codes.iter() {
        assert_eq!(
            phone_util.format_dial_in(&phone_number, country_code).unwrap(),
            format!("{exit_code} 27 115009000")
        );
    }

    assert_eq!(
        phone_util.format_dial_in(&phone_number, CountryCode::usa()).unwrap(),
        "011 27 115009000"
    );
    assert_eq!(
        phone_util.format_dial_in(&phone_number, CountryCode::aus()).unwrap(),
        "0011 27 115009000"
    );
    assert_eq!(
        phone_util.format_dial_in_default(&phone_number).unwrap(),
        "011 27 115009000"
    );
}

#[test]
fn format_dial_in_errors() {
    let phone_util = get_phone_util();
    let phone_number = parse(&phone_util, "0115009000");

    assert!(matches!(
        phone_util.format_dial_in(&phone_number, ""),
        Err(DialInError::InvalidArgument)
    ));
    assert!(matches!(
        phone_util.format_dial_in(&phone_number, CountryCode::get_unknown()),
        Err(DialInError::InvalidOption(country)) if country == "ZZZ"
    ));
    // Country codes are case-sensitive.
    assert!(matches!(
        phone_util.format_dial_in(&phone_number, "usa"),
        Err(DialInError::InvalidOption(_))
    ));
}

#[test]
fn global_util() {
    init_logging();
    let phone_number = PHONE_NUMBER_UTIL.check("+27 (21) 480-7700").unwrap();
    assert_eq!(phone_number.format_e164(), "+27214807700");
    assert_eq!(
        PHONE_NUMBER_UTIL.format_dial_in(&phone_number, CountryCode::gbr()).unwrap(),
        "00 27 214807700"
    );
}

#[test]
fn validate_without_requirement() {
    let phone_util = get_phone_util();
    for number in EXPECTED_CHECK_VALIDS {
        assert_eq!(phone_util.validate(number, None), Ok(true));
        assert_eq!(phone_util.validate(number, Some("")), Ok(true));
    }
    for number in EXPECTED_CHECK_INVALIDS {
        assert_eq!(phone_util.validate(number, None), Ok(false));
    }
}

#[test]
fn validate_with_kind() {
    let phone_util = get_phone_util();
    for number in EXPECTED_CHECK_VALIDS {
        assert_eq!(phone_util.validate(number, Some("landline")), Ok(true));
        assert_eq!(phone_util.validate(number, Some("mobile")), Ok(false));
    }
    assert_eq!(phone_util.validate("083 123 4567", Some("mobile")), Ok(true));
}

#[test]
fn validate_with_format() {
    let phone_util = get_phone_util();
    for number_format in PhoneNumberFormat::iter() {
        let expected = expected_format_result(number_format);
        for number in EXPECTED_CHECK_VALIDS {
            assert_eq!(
                phone_util.validate(number, Some(number_format.as_ref())),
                Ok(*number == expected),
                "{number:?} as {number_format}"
            );
        }
        assert_eq!(phone_util.validate(expected, Some(number_format.as_ref())), Ok(true));
    }
}

#[test]
fn validate_with_unknown_requirement() {
    let phone_util = get_phone_util();
    assert_eq!(
        phone_util.validate("0113456789", Some("International")),
        Err(RuleError::UnknownRequirement("International".to_owned()))
    );
    // Unparseable input fails before the requirement is looked at.
    assert_eq!(phone_util.validate("01134567", Some("International")), Ok(false));
}

#[test]
fn rule_passes() {
    let phone_util = get_phone_util();
    assert_eq!(ZaPhoneRule::new().passes(&phone_util, "011 345 6789"), Ok(true));
    assert_eq!(
        ZaPhoneRule::new().format("E164").passes(&phone_util, "+27113456789"),
        Ok(true)
    );
    assert_eq!(
        ZaPhoneRule::new().format("E164").passes(&phone_util, "011 345 6789"),
        Ok(false)
    );
    assert!(ZaPhoneRule::new().format("e164").passes(&phone_util, "+27113456789").is_err());
}
