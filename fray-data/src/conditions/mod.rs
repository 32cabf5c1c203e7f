mod condition_data;

pub use condition_data::{
    ConditionData,
    ConditionType,
};
