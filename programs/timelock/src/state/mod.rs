pub mod token_lock;

pub use token_lock::*;
