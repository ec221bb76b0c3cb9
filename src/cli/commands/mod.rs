pub mod config;
pub mod db;
pub mod init;
pub mod prompt;
pub mod save;
pub mod view;
