extern crate alloc;

mod abilities;
mod common;
mod conditions;
mod items;
mod mons;
mod moves;


pub use abilities::*;
pub use common::*;
pub use conditions::*;
pub use items::*;
pub use mons::*;
pub use moves::*;
