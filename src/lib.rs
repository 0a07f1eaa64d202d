//! ## What is it?
//!
//! `camo` provides the [`Secret`] type: an immutable wrapper around a string
//! or byte buffer that keeps its content out of reach of generic inspection
//! machinery. A `Secret` cannot be serialized, its `Debug` output is redacted,
//! and the only way to get the content back out is a deliberate call to one of
//! its reveal methods.
//!
//! This makes it useful for carrying passwords, API keys and similar values
//! through a program without them leaking into logs, error messages or
//! serialized output by accident.
//!
//! ## What it is not
//!
//! This is not a hard security boundary. Code which holds a `Secret` can
//! always reveal it, and the content sits in ordinary heap memory - there is
//! no zeroing on drop, no constant-time comparison, and no protection against
//! a debugger or anything else that can read process memory. The wrapper
//! thwarts accidental exposure, nothing more.
//!
//! ## The zero value
//!
//! `Secret::default()` produces a zero value which carries no content at all.
//! It is intentionally distinguishable from an obscured empty string or
//! buffer, so that empty secrets never masquerade as "absent" ones. Revealing
//! a zero value is a programmer error and panics; see [`Secret::reveal`].
//!
//! ## Examples
//!
//! ```rust
//! use camo::SecretString;
//!
//! let password = SecretString::obscure("hunter2");
//! assert!(password.is_valid());
//! assert_eq!(format!("{:?}", password), "[REDACTED]");
//! assert_eq!(password.reveal(), "hunter2");
//! ```
#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod hashing;
pub mod secret;

pub use secret::{Obscurable, Secret, SecretBytes, SecretString};
