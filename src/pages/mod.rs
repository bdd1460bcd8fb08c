//! Page layouts.

pub mod home;
