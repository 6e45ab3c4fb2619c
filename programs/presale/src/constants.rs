//! Program-wide constants.

/// PDA seed of the sale state: `[PRESALE_SEED, mint]`.
pub const PRESALE_SEED: &[u8] = b"presale";

/// PDA seed of the token vault: `[VAULT_SEED, presale]`.
pub const VAULT_SEED: &[u8] = b"presale_vault";
