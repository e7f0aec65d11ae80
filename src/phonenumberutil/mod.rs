mod helper_constants;
mod helper_functions;
pub mod errors;
pub mod enums;
pub mod exit_codes;
pub mod phone_number;
pub mod phonenumberutil;
mod phone_number_regexps;

use std::sync::LazyLock;

pub use enums::{NumberKind, PhoneNumberFormat, PhoneNumberPart};
use crate::phonenumberutil::{
    phone_number_regexps::PhoneNumberRegExps, phonenumberutil::PhoneNumberUtil,
};

static REG_EXPS: LazyLock<PhoneNumberRegExps> = LazyLock::new(|| {
    PhoneNumberRegExps::new()
});

pub static PHONE_NUMBER_UTIL: LazyLock<PhoneNumberUtil> = LazyLock::new(|| {
    PhoneNumberUtil::new()
});
