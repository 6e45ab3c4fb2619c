pub mod presale_state;

pub use presale_state::*;
