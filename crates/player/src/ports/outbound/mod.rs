//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to interact with external systems without
//! depending on concrete implementations.

pub mod platform;
pub mod platform_port;
pub mod raw_api_port;
pub mod remote_data_port;

pub use platform::{
    storage_keys, BackgroundTask, DocumentProvider, LocationProvider, MaybeSend, RandomProvider,
    StorageProvider, TaskProvider, TimeProvider,
};
pub use platform_port::PlatformPort;
pub use raw_api_port::{ApiError, RawApiPort};
pub use remote_data_port::RemoteDataPort;

#[cfg(test)]
pub use raw_api_port::MockRawApiPort;
#[cfg(test)]
pub use remote_data_port::MockRemoteDataPort;
