//! Copying results to the system clipboard.

mod copy;

pub use copy::copy_to_clipboard;
