pub mod families;
pub mod generate;
pub mod init;
