pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod filter;
pub mod summary;
