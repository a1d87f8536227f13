//! # Geotrace Core
//!
//! The trace-to-map pipeline:
//!
//! 1. [`trace`] runs the external trace utility and captures its text.
//! 2. [`extract`] pulls delimited hop addresses out of that text, in order.
//! 3. [`filter`] drops the leading origin entry according to an [`OriginPolicy`].
//! 4. [`geolocation`] places each hop and [`assemble`] builds the ordered path.
//! 5. [`render`] draws the path on a world map.
//!
//! [`service::TraceService`] wires the stages together. Every external
//! collaborator sits behind a trait so the pipeline can run against fakes.
//!
//! [`OriginPolicy`]: geotrace_common::config::OriginPolicy

pub mod assemble;
pub mod extract;
pub mod filter;
pub mod geolocation;
pub mod render;
pub mod service;
pub mod trace;
