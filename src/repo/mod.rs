//! One module per entity; every function issues exactly one SQL statement.
//!
//! `update` returns `Ok(None)` and `delete` returns `Ok(false)` when no row
//! carries the given id.
//!
//! `value` columns are read back through `CAST(value AS REAL)`: SQLite hands
//! whole-number reals back as INTEGER, which does not decode into `f64`.

pub mod retailers;
pub mod vendors;
pub mod leads;
pub mod deals;
pub mod proposals;
pub mod tickets;
pub mod profile;
