pub mod initialize_lock;
pub mod deposit_tokens;
pub mod release;
pub mod emit_lock_quote;

pub use initialize_lock::*;
pub use deposit_tokens::*;
pub use release::*;
pub use emit_lock_quote::*;
