#![no_main]
use leapsecs_gen::epoch::SECS_PER_WEEK;
use leapsecs_gen::scale::UtcTime;
use leapsecs_gen::*;
use libfuzzer_sys::fuzz_target;

// anything that gets past the checks must make a sane table
fn fuzz_list(data: &[u8]) {
    let list = match nist::read_bytes(data) {
        Ok(list) => list,
        Err(_) => return,
    };
    let table = list.table(list.expires).unwrap();
    assert!(table.rows.len() <= list.leaps.len());
    for row in &table.rows {
        assert!((0..SECS_PER_WEEK).contains(&row.time_of_week()));
    }
    header::render(&table).unwrap();
}

// arbitrary (timestamp, DTAI) pairs must convert without panicking
fn fuzz_scale(data: &[u8]) {
    for chunk in data.chunks_exact(6) {
        let mut secs = [0u8; 4];
        secs.copy_from_slice(&chunk[..4]);
        let secs = i64::from(u32::from_be_bytes(secs));
        let dtai = i16::from_be_bytes([chunk[4], chunk[5]]);
        let utc = UtcTime::new(secs, dtai);
        let gps = utc.to_gps();
        assert_eq!(utc, gps.to_utc(dtai));
        assert_eq!(utc, utc.to_unix().to_utc(dtai));
        assert_eq!(
            gps.seconds_since_epoch(),
            gps.week_number() * SECS_PER_WEEK + gps.time_of_week()
        );
        utc.date().unwrap();
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 1 {
        return;
    }
    let rest = &data[1..];
    match data[0] {
        0 => fuzz_list(rest),
        1 => fuzz_scale(rest),
        _ => (),
    }
});
