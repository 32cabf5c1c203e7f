mod fraction;
mod id;

pub use fraction::Fraction;
pub use id::{
    Id,
    Identifiable,
};
