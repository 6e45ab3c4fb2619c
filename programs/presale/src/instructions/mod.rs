pub mod initialize_presale;
pub mod buy_tokens;
pub mod forward_funds;
pub mod end_presale;

pub use initialize_presale::*;
pub use buy_tokens::*;
pub use forward_funds::*;
pub use end_presale::*;
