//! Thin query layer over the shared `PgPool`. Each function is one
//! statement (or a select-then-write pair for upserts, matching the
//! product's last-writer-wins semantics).

pub mod analytics;
pub mod businesses;
pub mod sites;
pub mod users;
