extern crate alloc;

pub mod battle;
pub mod dex;
pub mod effect;
pub mod error;
pub mod log;
pub mod seasonal;
