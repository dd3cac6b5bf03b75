use ring::digest::*;
use std::fmt::Write;

use super::{Hash, UncheckedList};
use crate::leapsecs::*;

// the checksum covers every number in the file, without separators

pub(super) fn sha1(input: &str) -> Hash {
    let out = digest(&SHA1_FOR_LEGACY_USE_ONLY, input.as_bytes());
    let mut hash = Hash::default();
    for (word, bytes) in hash.0.iter_mut().zip(out.as_ref().chunks_exact(4)) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
    hash
}

pub(super) fn hashin(list: &UncheckedList) -> Result<String> {
    let mut hashin = String::new();
    write!(hashin, "{}{}", list.updated, list.expires)?;
    for (ntp, dtai, _) in &list.leapsecs {
        write!(hashin, "{}{}", ntp, dtai)?;
    }
    Ok(hashin)
}

pub(super) fn check(list: &UncheckedList) -> Result<()> {
    let hashin = hashin(list)?;
    let output = sha1(&hashin);
    if list.hash != output {
        Err(Error::Checksum(list.hash.clone(), output, hashin))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::date::Gregorian;

    #[test]
    fn test() {
        // sha1("abc")
        let abc = Hash([0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
        assert_eq!(abc, sha1("abc"));

        let mut list = UncheckedList {
            updated: 1,
            expires: 2,
            leapsecs: vec![(3, 4, Gregorian(1900, 1, 1))],
            hash: Hash::default(),
        };
        assert_eq!("1234", hashin(&list).unwrap());
        assert!(matches!(check(&list), Err(Error::Checksum(..))));
        list.hash = sha1("1234");
        assert!(check(&list).is_ok());
    }
}
