//! Top-level facade crate for redcount.
//!
//! Re-exports the core tracker and the HTTP server library so users can depend on a single crate.

pub mod core {
    pub use redcount_core::*;
}

pub mod server {
    pub use redcount_server::*;
}
