//! Platform-specific implementations
//!
//! This module provides platform-specific implementations of the
//! platform abstraction traits defined in ports/outbound/platform.rs.
//!
//! The correct platform is selected at compile time based on the target architecture.

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
mod desktop;

mod memory;
pub mod mock;

pub use memory::MemoryStorageProvider;

#[cfg(target_arch = "wasm32")]
pub use wasm::{
    create_platform, WasmDocumentProvider, WasmLocationProvider, WasmRandomProvider,
    WasmStorageProvider, WasmTaskProvider, WasmTimeProvider,
};

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{
    create_platform, DesktopDocumentProvider, DesktopLocationProvider, DesktopRandomProvider,
    DesktopStorageProvider, DesktopTaskProvider, DesktopTimeProvider,
};
