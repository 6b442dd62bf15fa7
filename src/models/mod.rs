pub mod membership;
pub mod mood;
