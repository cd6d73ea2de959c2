//! Cache maintenance

pub mod sweeper;

pub use sweeper::spawn_ttl_sweeper;
