// derive the GPS and Unix leap second table from UTC leap events

use log::debug;

use crate::date::*;
use crate::epoch::*;
use crate::leapsecs::*;
use crate::scale::*;

/// Start of a leap second in GPS time: the last second before the new
/// offset takes effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Row {
    pub start: GpsTime,
    /// GPS - UTC after the leap
    pub gps_utc: i64,
    /// UTC date on which the new offset takes effect
    pub date: Gregorian,
}

impl Row {
    pub fn week_number(&self) -> i64 {
        self.start.week_number()
    }
    pub fn time_of_week(&self) -> i64 {
        self.start.time_of_week()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeapTable {
    pub rows: Vec<Row>,
    pub gps_expiry: GpsTime,
    pub unix_expiry: UnixTime,
    pub expires: Gregorian,
    /// provenance only, never part of the lookup
    pub generated: Gregorian,
}

/// Build the table from leap events in ascending order. The events are
/// not checked; `nist::read_str()` does that. Expiry and the current
/// instant are NTP timestamps interpreted with the last known DTAI.
pub fn build(leaps: &[UtcTime], expires: i64, now: i64) -> Result<LeapTable> {
    let dtai = leaps.last().ok_or(Error::Empty)?.dtai();
    let mut rows = Vec::with_capacity(leaps.len());
    // date() bounds each instant, so the conversions cannot overflow
    for &leap in leaps {
        let date = leap.date()?;
        let gps = leap.to_gps();
        if gps.seconds_since_epoch() < 0 {
            debug!("skipping leap before GPS epoch {}", date);
            continue;
        }
        rows.push(Row {
            start: gps.offset(-1),
            gps_utc: i64::from(leap.dtai()) - TAI_GPS_OFFSET,
            date,
        });
    }
    let expires = UtcTime::new(expires, dtai);
    let expiry_date = expires.date()?;
    let generated = UtcTime::new(now, dtai).date()?;
    let table = LeapTable {
        rows,
        gps_expiry: expires.to_gps(),
        unix_expiry: expires.to_unix(),
        expires: expiry_date,
        generated,
    };
    debug!(
        "{} rows, expires {} ({}, {})",
        table.rows.len(),
        table.expires,
        table.gps_expiry,
        table.unix_expiry
    );
    Ok(table)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::nist;

    const LIST: &str = include_str!("../testdata/leap-seconds.list");
    const NOW: i64 = 3969475200; // 2025-10-15

    // utc_leaps[] as published for the list expiring 28-06-2026
    const ROWS: &[(i64, i64, i64, &str)] = &[
        (77, 259200, 1, "01-07-1981"),
        (129, 345601, 2, "01-07-1982"),
        (181, 432002, 3, "01-07-1983"),
        (286, 86403, 4, "01-07-1985"),
        (416, 432004, 5, "01-01-1988"),
        (521, 86405, 6, "01-01-1990"),
        (573, 172806, 7, "01-01-1991"),
        (651, 259207, 8, "01-07-1992"),
        (703, 345608, 9, "01-07-1993"),
        (755, 432009, 10, "01-07-1994"),
        (834, 86410, 11, "01-01-1996"),
        (912, 172811, 12, "01-07-1997"),
        (990, 432012, 13, "01-01-1999"),
        (1356, 13, 14, "01-01-2006"),
        (1512, 345614, 15, "01-01-2009"),
        (1695, 15, 16, "01-07-2012"),
        (1851, 259216, 17, "01-07-2015"),
        (1930, 17, 18, "01-01-2017"),
    ];

    fn table() -> LeapTable {
        let list = nist::read_str(LIST).expect("parse leap-seconds.list");
        build(&list.leaps, list.expires, NOW).expect("build table")
    }

    #[test]
    fn test() {
        let table = table();
        let rows: Vec<_> = table
            .rows
            .iter()
            .map(|r| (r.week_number(), r.time_of_week(), r.gps_utc, r.date.to_string()))
            .collect();
        let expected: Vec<_> =
            ROWS.iter().map(|&(w, t, o, d)| (w, t, o, d.to_string())).collect();
        assert_eq!(expected, rows);
        assert_eq!((2425, 18), (table.gps_expiry.week_number(), table.gps_expiry.time_of_week()));
        assert_eq!(1782604800, table.unix_expiry.seconds_since_epoch());
        assert_eq!(Gregorian(2026, 6, 28), table.expires);
        assert_eq!(Gregorian(2025, 10, 15), table.generated);
    }

    #[test]
    fn ordered() {
        let table = table();
        for pair in table.rows.windows(2) {
            assert!(pair[0].start < pair[1].start);
            assert!(pair[0].date < pair[1].date);
            assert_eq!(pair[0].gps_utc + 1, pair[1].gps_utc);
        }
    }

    #[test]
    fn repeatable() {
        let list = nist::read_str(LIST).unwrap();
        let one = build(&list.leaps, list.expires, NOW).unwrap();
        let two = build(&list.leaps, list.expires, NOW + 86400 * 30).unwrap();
        assert_eq!(one.rows, two.rows);
        assert_eq!(one.gps_expiry, two.gps_expiry);
        assert_eq!(one.unix_expiry, two.unix_expiry);
        assert_ne!(one.generated, two.generated);
    }

    #[test]
    fn epoch() {
        // a leap taking effect exactly at the GPS epoch is kept
        let leaps = [UtcTime::new(GPS_UTC_EPOCH_SECS, 19)];
        let table = build(&leaps, GPS_UTC_EPOCH_SECS + SECS_PER_WEEK, NOW).unwrap();
        assert_eq!(1, table.rows.len());
        assert_eq!(GpsTime::new(-1), table.rows[0].start);
        assert_eq!(0, table.rows[0].gps_utc);
        assert_eq!(Gregorian(1980, 1, 6), table.rows[0].date);
        assert_eq!((1, 0), (table.gps_expiry.week_number(), table.gps_expiry.time_of_week()));

        // one second earlier it is not
        let leaps = [UtcTime::new(GPS_UTC_EPOCH_SECS - 1, 19)];
        let table = build(&leaps, GPS_UTC_EPOCH_SECS, NOW).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn empty() {
        assert!(matches!(build(&[], 0, NOW), Err(Error::Empty)));
    }

    #[test]
    fn range() {
        let leaps = [UtcTime::new(3692217600, 37)];
        assert!(matches!(build(&leaps, i64::MAX - 5, NOW), Err(Error::DateRange(_))));
        assert!(matches!(build(&leaps, i64::MIN, NOW), Err(Error::DateRange(_))));
        assert!(matches!(build(&leaps, NOW, i64::MAX), Err(Error::DateRange(_))));
        let leaps = [UtcTime::new(i64::MAX, 37)];
        assert!(matches!(build(&leaps, NOW, NOW), Err(Error::DateRange(_))));
    }
}
