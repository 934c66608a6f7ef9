//! Concrete speech synthesis adapters

pub mod elevenlabs;
pub mod hosted_inference;
pub mod local_process;
pub mod playht;
pub mod silence;
