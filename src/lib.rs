pub mod config;
pub mod data;
pub mod feed;
pub mod map;
