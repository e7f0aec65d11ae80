/// ISO 3166-1 alpha-3 codes of the countries a South African number is
/// most commonly dialled from.
pub struct CountryCode {
}

#[allow(unused)]
impl CountryCode {
    /// Country assumed by the dial-in format when the caller does not name one.
    pub fn default_dial_in() -> &'static str {
        return Self::usa();
    }

    /// Returns a code that no exit code table defines.
    pub fn get_unknown() -> &'static str {
        return Self::zzz();
    }

    pub fn aus() -> &'static str {
        "AUS"
    }

    pub fn can() -> &'static str {
        "CAN"
    }

    pub fn gbr() -> &'static str {
        "GBR"
    }

    pub fn jpn() -> &'static str {
        "JPN"
    }

    pub fn usa() -> &'static str {
        "USA"
    }

    pub fn zaf() -> &'static str {
        "ZAF"
    }

    pub fn zzz() -> &'static str {
        "ZZZ"
    }
}
