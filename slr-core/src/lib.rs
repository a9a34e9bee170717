pub mod booster;
pub mod launch;
pub mod outcome;
pub mod payload;
pub mod selection;

#[cfg(feature = "api")]
pub mod fetch;
