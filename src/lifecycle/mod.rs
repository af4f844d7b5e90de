//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Parse CLI → Load & validate config → Init logging → Bind listener
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast → server stops accepting → in-flight requests drain
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
