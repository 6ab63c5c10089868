//! Reader State Module
//!
//! Owns the two pieces of per-reader state the catalog UI relies on: the
//! bookmark set and the read statistics. Both persist to small JSON files
//! in the data directory and load back on startup.
//!
//! ## Core Concepts
//! - **External ownership**: The query engine never sees this state directly; it
//!   receives a membership predicate and stays independently testable.
//! - **Compatibility keys**: Membership accepts either the synthetic book id or the
//!   legacy title key, so bookmark files written by older clients keep working.
//!   New bookmarks are always stored under the id.
//! - **Write-through**: Every mutation persists immediately; a failed write is
//!   logged and the in-memory state stays authoritative for the session.

pub mod handlers;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
