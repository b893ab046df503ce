//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process repositories and a static bearer token table,
//!   with an optional demo catalogue for local runs.
//!
//! Adapters are thin translators between domain types and their storage
//! representation. They contain no business logic.

pub mod memory;
