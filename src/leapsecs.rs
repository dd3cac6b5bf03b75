use thiserror::Error;

use crate::date::*;
use crate::nist::Hash;

// https://www.ucolick.org/~sla/leapsecs/dutc.html
//
// Before the year 4000 we expect there will be more than one leap
// second each month, at which point UTC as currently defined will no
// longer work. At that time DTAI is expected to be less than 4 hours,
// i.e. 14,400 seconds, which is less than 2^15.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("checksum failed {0} <> {1} data {2}")]
    Checksum(Hash, Hash, String),
    #[error("date out of range ({0} seconds)")]
    DateRange(i64),
    #[error("leap seconds list is empty")]
    Empty,
    #[error("leap seconds list has expired ({0})")]
    Expired(Gregorian),
    #[error("incorrect starting point {0} DTAI {1}")]
    FalseStart(Gregorian, i16),
    #[error("format error {0}")]
    Format(#[from] std::fmt::Error),
    #[error("time is not midnight ({0})")]
    Fractional(i64),
    #[error("{0}")]
    FromInt(#[from] std::num::TryFromIntError),
    #[error("leap is more than one second ({0} DTAI {1} -> {2})")]
    LargeLeap(Gregorian, i16, i16),
    #[error("timestamp and date do not match ({0} <> {1})")]
    Mismatch(Gregorian, Gregorian),
    #[error("no change in DTAI ({0} DTAI {1})")]
    NoLeap(Gregorian, i16),
    #[error("parse error {0}")]
    Nom(String),
    #[error("leap seconds are disordered ({0} >= {1})")]
    OutOfOrder(Gregorian, Gregorian),
    #[error("list expires before its last leap second ({0})")]
    TooLate(Gregorian),
    #[error("leap second before 1972 ({0})")]
    TooSoon(Gregorian),
    #[error("{0}")]
    Unicode(#[from] std::str::Utf8Error),
}
