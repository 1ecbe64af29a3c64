pub mod context;
pub mod error;
pub mod init;
pub mod state;
