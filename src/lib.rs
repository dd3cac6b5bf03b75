pub mod date;
pub mod epoch;
pub mod header;
pub mod leapsecs;
pub mod nist;
pub mod scale;
pub mod table;

pub use crate::leapsecs::*;
