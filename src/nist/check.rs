use std::convert::TryFrom;

use super::{hash, LeapList, UncheckedLeap, UncheckedList};
use crate::date::*;
use crate::leapsecs::*;
use crate::scale::UtcTime;

fn timestamp(ntp: u64) -> Result<UtcTime> {
    let utc = UtcTime::new(i64::try_from(ntp)?, 0);
    if utc.date()?.year() < 1972 {
        Err(Error::TooSoon(utc.date()?))
    } else if utc.seconds_since_epoch() % 86400 != 0 {
        Err(Error::Fractional(utc.seconds_since_epoch()))
    } else {
        Ok(utc)
    }
}

fn check_next(
    acc: Result<Vec<UtcTime>>,
    &(ntp, dtai64, date): &UncheckedLeap,
) -> Result<Vec<UtcTime>> {
    let mut list = acc?;
    let ts = timestamp(ntp)?;
    let dtai = i16::try_from(dtai64)?;
    let this = UtcTime::new(ts.seconds_since_epoch(), dtai);
    if this.date()? != date {
        return Err(Error::Mismatch(this.date()?, date));
    }
    if let Some(&last) = list.last() {
        if this.seconds_since_epoch() <= last.seconds_since_epoch() {
            return Err(Error::OutOfOrder(last.date()?, this.date()?));
        } else if dtai == last.dtai() {
            return Err(Error::NoLeap(date, dtai));
        } else if (i32::from(dtai) - i32::from(last.dtai())).abs() != 1 {
            return Err(Error::LargeLeap(date, last.dtai(), dtai));
        }
    } else if date != Gregorian(1972, 1, 1) || dtai != 10 {
        return Err(Error::FalseStart(date, dtai));
    }
    list.push(this);
    Ok(list)
}

pub(super) fn check(u: UncheckedList) -> Result<LeapList> {
    let leaps = u.leapsecs.iter().fold(Ok(Vec::new()), check_next)?;
    // only a provenance stamp, often not at midnight
    let updated = i64::try_from(u.updated)?;
    let expires = timestamp(u.expires)?;
    let last = leaps.last().ok_or(Error::Empty)?;
    if expires.seconds_since_epoch() <= last.seconds_since_epoch() {
        return Err(Error::TooLate(expires.date()?));
    }
    hash::check(&u)?;
    Ok(LeapList {
        updated,
        expires: expires.seconds_since_epoch(),
        leaps,
    })
}
