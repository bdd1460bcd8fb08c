//! Browser glue shared across components.
//!
//! These helpers isolate `web-sys` access so components stay close to
//! pure view code. Everything here is best-effort: a missing window,
//! document, or storage turns the operation into a silent no-op.

pub mod theme;
