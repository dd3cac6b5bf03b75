// render the leap second table as a C header

use std::fmt::Write;

use crate::leapsecs::*;
use crate::table::LeapTable;

pub const GUARD: &str = "LIBSWIFTNAV_LEAP_SECONDS_H";

pub fn render(table: &LeapTable) -> Result<String> {
    let mut out = String::new();
    let banner = [
        format!("Automatically generated by {}. Please do", env!("CARGO_PKG_NAME")),
        "not hand edit!".to_string(),
        String::new(),
        format!("Updated: {}", table.generated),
    ];
    writeln!(out, "/{}", "*".repeat(78))?;
    for line in &banner {
        writeln!(out, " * {:<75}*", line)?;
    }
    writeln!(out, " {}/", "*".repeat(78))?;
    writeln!(out)?;
    writeln!(out, "#ifndef {}", GUARD)?;
    writeln!(out, "#define {}", GUARD)?;
    writeln!(out)?;
    writeln!(out, "#include <swiftnav/common.h>")?;
    writeln!(out)?;
    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "extern \"C\" {{")?;
    writeln!(out, "#endif")?;
    writeln!(out)?;
    writeln!(out, "/**")?;
    writeln!(out, " * Start times of UTC leap second events given in GPS time {{wn, tow, gps-utc}}")?;
    writeln!(out, " * The leap second event lasts for one second from the start time, and after")?;
    writeln!(out, " * that the new offset is in effect.")?;
    writeln!(out, " */")?;
    writeln!(out, "static const s32 utc_leaps[][3] = {{")?;
    // comments aligned one space after the widest entry, as clang-format does
    let entries: Vec<String> = table
        .rows
        .iter()
        .map(|row| format!("{{{}, {}, {}}},", row.week_number(), row.time_of_week(), row.gps_utc))
        .collect();
    let width = entries.iter().map(String::len).max().unwrap_or(0);
    for (entry, row) in entries.iter().zip(&table.rows) {
        writeln!(out, "    {:<width$} /* {} */", entry, row.date, width = width)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "/** GPS time when the utc_leaps table expires {} */", table.expires)?;
    writeln!(
        out,
        "static const s32 gps_time_utc_leaps_expiry[2] = {{{}, {}}};",
        table.gps_expiry.week_number(),
        table.gps_expiry.time_of_week()
    )?;
    writeln!(out)?;
    writeln!(out, "/** UNIX time when the utc_leaps table expires {} */", table.expires)?;
    writeln!(
        out,
        "static const s64 unix_time_utc_leaps_expiry = {};",
        table.unix_expiry.seconds_since_epoch()
    )?;
    writeln!(out)?;
    writeln!(out, "#ifdef __cplusplus")?;
    writeln!(out, "}}")?;
    writeln!(out, "#endif")?;
    writeln!(out)?;
    writeln!(out, "#endif  // {}", GUARD)?;
    Ok(out)
}
