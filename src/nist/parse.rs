use super::{Hash, UncheckedLeap, UncheckedList};
use crate::date::*;

use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::error::VerboseError;
use nom::multi::*;
use nom::sequence::*;
use std::str::FromStr;

type Result<'a, O> = nom::IResult<&'a str, O, VerboseError<&'a str>>;

fn dec64(input: &str) -> Result<u64> {
    map_res(digit1, u64::from_str)(input)
}

fn hex32(input: &str) -> Result<u32> {
    map_res(hex_digit1, |s| u32::from_str_radix(s, 16))(input)
}

fn month(input: &str) -> Result<i32> {
    alt((
        value(1, tag("Jan")),
        value(2, tag("Feb")),
        value(3, tag("Mar")),
        value(4, tag("Apr")),
        value(5, tag("May")),
        value(6, tag("Jun")),
        value(7, tag("Jul")),
        value(8, tag("Aug")),
        value(9, tag("Sep")),
        value(10, tag("Oct")),
        value(11, tag("Nov")),
        value(12, tag("Dec")),
    ))(input)
}

fn day(input: &str) -> Result<i32> {
    map_res(digit1, i32::from_str)(input)
}

fn date(input: &str) -> Result<Gregorian> {
    map(
        tuple((
            preceded(space1, day),
            preceded(space1, month),
            preceded(space1, day),
        )),
        |(d, m, y)| Gregorian(y, m, d),
    )(input)
}

fn empty(input: &str) -> Result<()> {
    value((), tuple((tag("#"), space0, line_ending)))(input)
}

fn comment(input: &str) -> Result<()> {
    value((), tuple((tag("#"), space1, not_line_ending, line_ending)))(input)
}

fn ignore(input: &str) -> Result<()> {
    value((), many0_count(alt((empty, comment))))(input)
}

fn updated(input: &str) -> Result<u64> {
    delimited(pair(tag("#$"), space1), dec64, pair(space0, line_ending))(input)
}

fn expires(input: &str) -> Result<u64> {
    delimited(pair(tag("#@"), space1), dec64, pair(space0, line_ending))(input)
}

fn leapsecs(input: &str) -> Result<Vec<UncheckedLeap>> {
    many1(tuple((
        terminated(dec64, space1),
        terminated(dec64, space1),
        delimited(tag("#"), date, pair(space0, line_ending)),
    )))(input)
}

fn hash(input: &str) -> Result<Hash> {
    let (rest, words) = delimited(
        tag("#h"),
        count(preceded(space1, hex32), 5),
        pair(space0, line_ending),
    )(input)?;
    let mut hash = Hash::default();
    hash.0.copy_from_slice(&words);
    Ok((rest, hash))
}

pub(super) fn parse(input: &str) -> Result<UncheckedList> {
    map(
        tuple((
            preceded(ignore, updated),
            preceded(ignore, expires),
            preceded(ignore, leapsecs),
            preceded(ignore, hash),
        )),
        |(updated, expires, leapsecs, hash)| UncheckedList {
            updated,
            expires,
            leapsecs,
            hash,
        },
    )(input)
}
