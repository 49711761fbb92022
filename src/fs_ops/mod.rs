//! Filesystem transfer primitives: copy and move with fail-fast errors.

mod copy;
mod helpers;
mod transfer;

pub use copy::copy_file;
pub use transfer::move_file;
