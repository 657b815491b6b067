pub mod batch;
pub mod checksum;
pub mod config;
pub mod detect;
pub mod encode;
pub mod formats;
pub mod validate;
