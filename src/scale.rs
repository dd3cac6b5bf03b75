// instants in the UTC, GPS and Unix time scales
//
// Each scale is a distinct type so that a count of seconds can never
// be read against the wrong epoch. Only UTC needs to know DTAI; GPS
// and Unix time are continuous counts from their own epochs.

use crate::date::*;
use crate::epoch::*;
use crate::leapsecs::*;

/// Seconds since `UTC_EPOCH` (an NTP timestamp) together with the
/// TAI - UTC offset in effect at that instant.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UtcTime {
    secs: i64,
    dtai: i16,
}

/// Seconds since `GPS_EPOCH`.
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct GpsTime(i64);

/// Seconds since `UNIX_EPOCH`.
#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct UnixTime(i64);

impl UtcTime {
    /// The offset is trusted; nothing checks it against the instant.
    pub fn new(secs: i64, dtai: i16) -> Self {
        UtcTime { secs, dtai }
    }
    pub fn seconds_since_epoch(self) -> i64 {
        self.secs
    }
    pub fn dtai(self) -> i16 {
        self.dtai
    }
    fn tai(self) -> i64 {
        self.secs + i64::from(self.dtai)
    }
    pub fn to_gps(self) -> GpsTime {
        GpsTime(self.tai() - GPS_UTC_EPOCH_SECS - TAI_GPS_OFFSET)
    }
    pub fn to_unix(self) -> UnixTime {
        UnixTime(self.tai() - UNIX_UTC_EPOCH_SECS - TAI_UNIX_OFFSET)
    }
    /// The calendar day containing this instant.
    pub fn date(self) -> Result<Gregorian> {
        let days = self.secs.div_euclid(SECS_PER_DAY);
        let mjd = i64::from(UTC_EPOCH.mjd().days()) + days;
        let mjd = MJD::checked(mjd).ok_or(Error::DateRange(self.secs))?;
        Ok(Gregorian::from(mjd))
    }
}

impl GpsTime {
    pub fn new(secs: i64) -> Self {
        GpsTime(secs)
    }
    pub fn seconds_since_epoch(self) -> i64 {
        self.0
    }
    pub fn week_number(self) -> i64 {
        self.0.div_euclid(SECS_PER_WEEK)
    }
    pub fn time_of_week(self) -> i64 {
        self.0.rem_euclid(SECS_PER_WEEK)
    }
    pub fn offset(self, secs: i64) -> Self {
        GpsTime(self.0 + secs)
    }
    /// Inverse of `UtcTime::to_gps` for the given DTAI.
    pub fn to_utc(self, dtai: i16) -> UtcTime {
        let secs = self.0 + TAI_GPS_OFFSET + GPS_UTC_EPOCH_SECS;
        UtcTime::new(secs - i64::from(dtai), dtai)
    }
}

impl std::fmt::Display for GpsTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "wn {} tow {}", self.week_number(), self.time_of_week())
    }
}

impl UnixTime {
    pub fn new(secs: i64) -> Self {
        UnixTime(secs)
    }
    pub fn seconds_since_epoch(self) -> i64 {
        self.0
    }
    pub fn offset(self, secs: i64) -> Self {
        UnixTime(self.0 + secs)
    }
    /// Inverse of `UtcTime::to_unix` for the given DTAI.
    pub fn to_utc(self, dtai: i16) -> UtcTime {
        let secs = self.0 + TAI_UNIX_OFFSET + UNIX_UTC_EPOCH_SECS;
        UtcTime::new(secs - i64::from(dtai), dtai)
    }
}

impl std::fmt::Display for UnixTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unix {}", self.0)
    }
}
