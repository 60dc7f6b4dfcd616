//! Core error types

use thiserror::Error;

/// Fatal setup errors for the demo client
#[derive(Error, Debug)]
pub enum DemoError {
    #[error("failed to connect to Wayland display: {0}")]
    Connect(#[from] wayland_client::ConnectError),

    #[error("Wayland dispatch error: {0}")]
    Dispatch(#[from] wayland_client::DispatchError),

    #[error("required global not advertised by compositor: {0}")]
    MissingGlobal(&'static str),

    #[error("failed to {what} SHM buffer: {source}")]
    Shm {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidSize { width: i32, height: i32 },
}

/// Result type for demo operations
pub type Result<T> = std::result::Result<T, DemoError>;
