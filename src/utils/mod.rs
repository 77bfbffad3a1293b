pub mod trace;
pub mod validation;
