//! Domain library for the SiteForge website builder.
//!
//! Everything here is independent of the HTTP layer: the business/industry
//! catalogue, the site content document model, the admin mutator, the
//! section renderer, and the generation pipeline (prompt, assembly,
//! fallback).

pub mod auth;
pub mod business;
pub mod content;
pub mod generate;
pub mod site;
pub mod user;
