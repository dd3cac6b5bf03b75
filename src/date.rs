#[derive(Copy, Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Gregorian(pub i32, pub i32, pub i32);

// the format used for dates in the generated header
impl std::fmt::Display for Gregorian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.day(), self.month(), self.year())
    }
}

impl Gregorian {
    pub const fn year(self) -> i32 {
        self.0
    }
    pub const fn month(self) -> i32 {
        self.1
    }
    pub const fn day(self) -> i32 {
        self.2
    }
    pub const fn mjd(self) -> MJD {
        let Gregorian(y, m, d) = self;
        let (y, m) = if m > 2 { (y, m + 1) } else { (y - 1, m + 13) };
        MJD(days_in_years(y) + muldiv(m, 153, 5) + d - 679004)
    }
}

impl From<MJD> for Gregorian {
    fn from(mjd: MJD) -> Gregorian {
        let mut d = mjd.0 + 678881;
        let mut y = muldiv(d, 400, 146097) + 1;
        y -= (days_in_years(y) > d) as i32;
        d -= days_in_years(y) - 31;
        let m = muldiv(d, 17, 520);
        d -= muldiv(m, 520, 17);
        if m > 10 {
            Gregorian(y + 1, m - 10, d)
        } else {
            Gregorian(y, m + 2, d)
        }
    }
}

impl From<Gregorian> for MJD {
    fn from(date: Gregorian) -> MJD {
        date.mjd()
    }
}

const fn days_in_years(y: i32) -> i32 {
    muldiv(y, 1461, 4) - muldiv(y, 1, 100) + muldiv(y, 1, 400)
}

const fn muldiv(var: i32, mul: i32, div: i32) -> i32 {
    (var * mul).div_euclid(div)
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd)]
pub struct MJD(i32);

// muldiv() overflows beyond about ten thousand years either side
const MJD_LIMIT: i64 = 4_000_000;

impl MJD {
    pub const fn days(self) -> i32 {
        self.0
    }
    pub fn checked(days: i64) -> Option<MJD> {
        if (-MJD_LIMIT..=MJD_LIMIT).contains(&days) {
            Some(MJD(days as i32))
        } else {
            None
        }
    }
}

impl std::fmt::Debug for MJD {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MJD({} {})", self.0, Gregorian::from(*self))
    }
}

impl From<i32> for MJD {
    fn from(mjd: i32) -> MJD {
        MJD(mjd)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test() {
        for &(date, mjd) in &[
            (Gregorian(-1, 12, 31), -678942),
            (Gregorian(0, 1, 1), -678941),
            (Gregorian(0, 12, 31), -678576),
            (Gregorian(1, 1, 1), -678575),
            (Gregorian(1858, 11, 16), -1),
            (Gregorian(1858, 11, 17), 0),
            (Gregorian(1900, 1, 1), 15020),
            (Gregorian(1970, 1, 1), 40587),
            (Gregorian(1980, 1, 6), 44244),
            (Gregorian(2001, 1, 1), 5 * 146097 - 678575),
            (Gregorian(2020, 2, 2), 58881),
        ] {
            let mjd = MJD::from(mjd);
            assert_eq!(date, Gregorian::from(mjd));
            assert_eq!(mjd, MJD::from(date));
        }
        assert_eq!(146097, days_in_years(400));
        assert_eq!(Some(MJD(61219)), MJD::checked(61219));
        assert_eq!(None, MJD::checked(i64::from(i32::MAX)));
        let _ = Gregorian::from(MJD(-4_000_000));
        let _ = Gregorian::from(MJD(4_000_000));
    }

    #[test]
    fn display() {
        assert_eq!("01-07-1981", Gregorian(1981, 7, 1).to_string());
        assert_eq!("28-06-2026", Gregorian(2026, 6, 28).to_string());
        assert_eq!(Gregorian(2026, 6, 28), Gregorian::from(MJD::from(61219)));
        assert_eq!("MJD(41317 01-01-1972)", format!("{:?}", Gregorian(1972, 1, 1).mjd()));
        let leap_day = Gregorian(1972, 2, 28).mjd().days() + 1;
        assert_eq!(Gregorian(1972, 2, 29), Gregorian::from(MJD::from(leap_day)));
    }
}
