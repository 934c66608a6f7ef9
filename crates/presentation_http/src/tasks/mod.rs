//! Background tasks

pub mod cache_sweep;

pub use cache_sweep::spawn_cache_sweep_task;
