//! # portfolio-ui
//!
//! WASM interactivity for a static portfolio page. The markup and styles are
//! rendered ahead of time; this crate attaches behavior to them once the DOM
//! is ready: the mobile navigation toggle, the project detail dialog, the
//! contact form with its simulated send, and a single toast slot.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`state`] | Pure, natively testable state machines for every feature |
//! | [`config`] | Tunables and user-facing copy, overridable from the page |
//! | [`error`] | Shared error type |
//! | `dom` | `web-sys` lookup helpers and self-detaching listeners (`hydrate`) |
//! | `controller` | Binds features to the document and owns their state (`hydrate`) |
//! | `bootstrap` | WASM start hook and `dispose` export (`hydrate`) |

pub mod config;
pub mod error;
pub mod state;

#[cfg(feature = "hydrate")]
pub mod bootstrap;
#[cfg(feature = "hydrate")]
pub mod controller;
#[cfg(feature = "hydrate")]
pub mod dom;
