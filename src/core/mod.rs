pub mod errors;
pub mod fixtures;
pub mod helpers;
