pub mod errors;
pub mod session;
pub mod shm;
pub mod surface;
pub mod tree;

// Re-export key types
pub use errors::{DemoError, Result};
pub use session::{DemoApp, Globals, Session};
pub use shm::ShmBuffer;
pub use surface::{Role, Surface};
