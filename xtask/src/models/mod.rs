pub mod args;
pub mod country;
