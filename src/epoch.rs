// fixed reference instants and offsets between time scales
//
// All instants are counted in seconds from 0h on MJD 0, so the
// difference between two epochs is a plain subtraction.

use crate::date::Gregorian;

pub const SECS_PER_DAY: i64 = 86400;
pub const SECS_PER_WEEK: i64 = 7 * SECS_PER_DAY;

/// NTP era 0, the origin of leap-seconds.list timestamps
pub const UTC_EPOCH: Gregorian = Gregorian(1900, 1, 1);
pub const UNIX_EPOCH: Gregorian = Gregorian(1970, 1, 1);
pub const GPS_EPOCH: Gregorian = Gregorian(1980, 1, 6);

/// TAI - GPS, constant since the GPS epoch
pub const TAI_GPS_OFFSET: i64 = 19;

/// TAI - UTC baseline used for Unix time; not the per-leap DTAI
pub const TAI_UNIX_OFFSET: i64 = 37;

pub const fn seconds(date: Gregorian) -> i64 {
    date.mjd().days() as i64 * SECS_PER_DAY
}

pub const GPS_UTC_EPOCH_SECS: i64 = seconds(GPS_EPOCH) - seconds(UTC_EPOCH);
pub const UNIX_UTC_EPOCH_SECS: i64 = seconds(UNIX_EPOCH) - seconds(UTC_EPOCH);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        assert_eq!(604800, SECS_PER_WEEK);
        assert_eq!(2524953600, GPS_UTC_EPOCH_SECS);
        assert_eq!(2208988800, UNIX_UTC_EPOCH_SECS);
        assert_eq!(0, seconds(Gregorian(1858, 11, 17)));
        assert_eq!(-SECS_PER_DAY, seconds(Gregorian(1858, 11, 16)));
        assert_eq!(3657 * SECS_PER_DAY, seconds(GPS_EPOCH) - seconds(UNIX_EPOCH));
    }
}
