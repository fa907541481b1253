//! Pure page state, free of browser types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every feature keeps its transitions here so they can be unit-tested
//! natively. The `controller` layer reads DOM input, calls into these types,
//! and writes back whatever they report.

pub mod contact;
pub mod modal;
pub mod nav;
pub mod polish;
pub mod project;
pub mod toast;
