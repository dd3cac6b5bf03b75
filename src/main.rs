use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, ColorChoice, Command};
use env_logger::{Builder, Target};
use log::{info, warn};
use std::convert::TryFrom;
use std::time::SystemTime;

use leapsecs_gen::epoch::UNIX_UTC_EPOCH_SECS;
use leapsecs_gen::scale::UtcTime;
use leapsecs_gen::{header, nist, Error};

fn cli() -> ArgMatches {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a GPS and Unix time leap second table")
        .color(ColorChoice::Auto)
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .value_name("PATH")
                .default_value(nist::LIST_FILE)
                .help("Local leap-seconds.list, downloaded if missing"),
        )
        .arg(
            Arg::new("url")
                .short('u')
                .long("url")
                .value_name("URL")
                .default_value(nist::LIST_URL)
                .help("Where to download leap-seconds.list"),
        )
        .arg(
            Arg::new("allow-expired")
                .long("allow-expired")
                .action(ArgAction::SetTrue)
                .help("Warn instead of failing when the list has expired"),
        )
        .arg(
            Arg::new("output")
                .value_name("OUTPUT")
                .required(true)
                .help("Header file to write, or - for stdout"),
        )
        .get_matches()
}

// seconds since UTC_EPOCH, ignoring leap seconds like the system clock does
fn now() -> Result<i64> {
    let unix = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .context("system clock is before 1970")?;
    Ok(i64::try_from(unix.as_secs())? + UNIX_UTC_EPOCH_SECS)
}

fn main() -> Result<()> {
    Builder::from_default_env()
        .target(Target::Stderr)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let matches = cli();
    let file = matches.get_one::<String>("file").context("missing --file")?;
    let url = matches.get_one::<String>("url").context("missing --url")?;
    let output = matches.get_one::<String>("output").context("missing OUTPUT")?;

    let now = now()?;
    let list = nist::read(file, url)?;
    info!("{} leap seconds in {}", list.leaps.len(), file);

    if list.expired(now) {
        let expires = UtcTime::new(list.expires, 0).date()?;
        if matches.get_flag("allow-expired") {
            warn!("leap seconds list expired on {}", expires);
        } else {
            bail!(Error::Expired(expires));
        }
    }

    let table = list.table(now)?;
    let text = header::render(&table)?;
    if output == "-" {
        print!("{}", text);
    } else {
        std::fs::write(output, &text)
            .with_context(|| format!("failed to write {}", output))?;
        info!("wrote {} rows to {}", table.rows.len(), output);
    }
    Ok(())
}
