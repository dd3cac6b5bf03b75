// fetch and parse leap-seconds.list

use anyhow::Context;
use log::info;
use std::io::Read;

use crate::leapsecs::*;
use crate::scale::UtcTime;
use crate::table::{self, LeapTable};

mod check;
mod hash;
mod parse;

pub const LIST_FILE: &str = "leap-seconds.list";
pub const LIST_URL: &str = "https://www.ietf.org/timezones/data/leap-seconds.list";

/// A checked leap-seconds.list. Timestamps are seconds since
/// `UTC_EPOCH`, i.e. NTP era 0.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeapList {
    pub updated: i64,
    pub expires: i64,
    pub leaps: Vec<UtcTime>,
}

impl LeapList {
    pub fn expired(&self, now: i64) -> bool {
        self.expires <= now
    }
    pub fn table(&self, now: i64) -> Result<LeapTable> {
        table::build(&self.leaps, self.expires, now)
    }
}

/// Use the local copy if there is one, otherwise fetch and save it.
pub fn read(name: &str, url: &str) -> anyhow::Result<LeapList> {
    let data = match load_file(name) {
        Ok(data) => data,
        Err(err) => {
            info!("{:#}", err);
            save_url(name, url)?
        }
    };
    read_bytes(&data).with_context(|| format!("in {}", name))
}

pub fn read_bytes(data: &[u8]) -> Result<LeapList> {
    read_str(std::str::from_utf8(data)?)
}

pub fn read_file(name: &str) -> anyhow::Result<LeapList> {
    Ok(read_bytes(&load_file(name)?)?)
}

pub fn read_str(text: &str) -> Result<LeapList> {
    match parse::parse(text) {
        Ok((_, unchecked)) => check::check(unchecked),
        Err(nom::Err::Error(err)) | Err(nom::Err::Failure(err)) => {
            Err(Error::Nom(nom::error::convert_error(text, err)))
        }
        Err(nom::Err::Incomplete(_)) => Err(Error::Nom("incomplete".into())),
    }
}

pub fn read_url(url: &str) -> anyhow::Result<LeapList> {
    Ok(read_bytes(&load_url(url)?)?)
}

////////////////////////////////////////////////////////////////////////

// public for error reporting
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Hash([u32; 5]);

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e] = self.0;
        write!(f, "{:08x} {:08x} {:08x} {:08x} {:08x}", a, b, c, d, e)
    }
}

// timestamp, DTAI, date
type UncheckedLeap = (u64, u64, crate::date::Gregorian);

#[derive(Clone, Debug, Default)]
struct UncheckedList {
    pub updated: u64,
    pub expires: u64,
    pub leapsecs: Vec<UncheckedLeap>,
    pub hash: Hash,
}

fn save_url(name: &str, url: &str) -> anyhow::Result<Vec<u8>> {
    info!("fetching {}", url);
    let data = load_url(url)?;
    std::fs::write(name, &data)
        .with_context(|| format!("failed to write {}", name))?;
    Ok(data)
}

fn load_file(name: &str) -> anyhow::Result<Vec<u8>> {
    let ctx = || format!("failed to read {}", name);
    let mut fh = std::fs::File::open(name).with_context(ctx)?;
    let mut data = Vec::new();
    fh.read_to_end(&mut data).with_context(ctx)?;
    Ok(data)
}

fn load_url(url: &str) -> anyhow::Result<Vec<u8>> {
    let mut data = Vec::new();
    curl_get(url, &mut data)
        .with_context(|| format!("failed to fetch {}", url))?;
    Ok(data)
}

fn curl_get(url: &str, buffer: &mut Vec<u8>) -> anyhow::Result<()> {
    let mut ua = curl::easy::Easy::new();
    ua.useragent(&format!(
        "leapsecs-gen/{} curl/{}",
        env!("CARGO_PKG_VERSION"),
        curl::Version::get().version()
    ))?;
    ua.fail_on_error(true)?;
    ua.follow_location(true)?;
    ua.url(url)?;
    let mut xfer = ua.transfer();
    xfer.write_function(|chunk| {
        buffer.extend_from_slice(chunk);
        Ok(chunk.len())
    })?;
    xfer.perform()?;
    Ok(())
}

////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test {
    use crate::date::Gregorian;
    use crate::leapsecs::Error;
    use crate::nist;

    const LIST: &str = include_str!("../testdata/leap-seconds.list");

    #[test]
    fn test() {
        let list = nist::read_str(LIST).expect("parse leap-seconds.list");
        assert_eq!(3945196800, list.updated);
        assert_eq!(3991593600, list.expires);
        assert_eq!(28, list.leaps.len());
        let first = list.leaps[0];
        assert_eq!((2272060800, 10), (first.seconds_since_epoch(), first.dtai()));
        assert_eq!(Gregorian(1972, 1, 1), first.date().unwrap());
        let last = list.leaps[27];
        assert_eq!((3692217600, 37), (last.seconds_since_epoch(), last.dtai()));
        assert!(!list.expired(3991593599));
        assert!(list.expired(3991593600));
        assert_eq!(18, list.table(list.updated).unwrap().rows.len());
    }

    #[test]
    fn file() {
        let name = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/leap-seconds.list");
        let list = nist::read_file(name).expect("read leap-seconds.list");
        assert_eq!(nist::read_str(LIST).unwrap(), list);
        assert!(nist::read_file("testdata/no-such-file").is_err());
    }

    #[test]
    fn bytes() {
        assert!(matches!(nist::read_bytes(b"\xff\xfe"), Err(Error::Unicode(_))));
        assert!(matches!(nist::read_str("#$\t1\n"), Err(Error::Nom(_))));
        assert!(matches!(nist::read_str(""), Err(Error::Nom(_))));
    }

    #[test]
    fn hash() {
        let hash = nist::Hash([0xfec4f1a7, 0x0c520bed, 0x8ba1d8a4, 0x7dee39cb, 0xda8d1c8b]);
        assert_eq!("fec4f1a7 0c520bed 8ba1d8a4 7dee39cb da8d1c8b", hash.to_string());
    }
}
