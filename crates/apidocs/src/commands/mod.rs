pub mod build;
pub mod fixtures;
pub mod init;
