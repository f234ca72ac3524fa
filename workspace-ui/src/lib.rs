pub mod api;
pub mod backend;
pub mod collaborators;
pub mod components;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod mutation;
pub mod preview;
pub mod session;
pub mod shell;
pub mod surfaces;
pub mod workbench;

pub use api::HttpBackend;
pub use backend::Backend;
pub use collaborators::*;
pub use config::ClientConfig;
pub use error::*;
pub use shell::WorkbenchShell;
pub use workbench::{Surfaces, Workbench};
