//! 2022: camp cleanup, supply stacks, tuning trouble

pub mod day_4;
pub mod day_5;
pub mod day_6;
