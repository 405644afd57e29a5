pub mod args;
pub mod inputs;
pub mod inspect;
