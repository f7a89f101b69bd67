//! One-shot importer that loads a `;`-delimited price list export into a
//! MySQL `products` table, normalizing comma decimal separators and the
//! `TRUE`/anything-else boolean encoding along the way.

pub mod config;
pub mod db;
pub mod import;
pub mod row;
