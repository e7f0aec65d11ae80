mod phonenumberutil;
mod regex_util;
pub mod i18n;
pub mod rule;
pub(crate) mod string_util;

#[cfg(test)]
mod tests;

pub use phonenumberutil::{
    NumberKind, PhoneNumberFormat, PhoneNumberPart, PHONE_NUMBER_UTIL,
    errors,
    exit_codes::ExitCodeTable,
    phone_number::PhoneNumber,
    phonenumberutil::PhoneNumberUtil,
};
pub use rule::ZaPhoneRule;
