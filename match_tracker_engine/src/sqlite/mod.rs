//! SQLite database module for the Match Tracker Engine.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
