//! Core logic for the animated greeting card.
//!
//! This crate has no browser or network code. The `client` crate wires these
//! types to Leptos signals, `localStorage`, an `<audio>` element, and HTTP;
//! the server reuses the message types and validation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slides`] | Slide index, direction, and progress |
//! | [`audio`] | Background music toggle over an [`audio::AudioBackend`] |
//! | [`message`] | The greeting record and its validation |
//! | [`store`] | Durable cache of the last accepted message |
//! | [`remote`] | Submission contract and its error taxonomy |
//! | [`compose`] | Form state machine tying validation, submission, and cache together |

pub mod audio;
pub mod compose;
pub mod message;
pub mod remote;
pub mod slides;
pub mod store;
