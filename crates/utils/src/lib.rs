//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Fixed-format report lines are addressed by character column and
//! whitespace-separated token, which the [StringExt] helpers make a little
//! less noisy. Numbers are printed the way MCNP prints them with [ValueExt].

// Alias for the format! macro
pub use std::format as f;

// Modules
mod string_ext;
mod value_ext;

// Flatten
pub use string_ext::StringExt;
pub use value_ext::ValueExt;
