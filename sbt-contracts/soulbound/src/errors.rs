// soulbound/src/errors.rs
use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ContractError {
    AlreadyInitialized = 1, // initialize called twice
    NotInitialized = 2,     // registry used before initialize
    Unauthorized = 3,       // caller lacks the operator role
    InvalidTokenId = 4,     // token id must be positive
    AlreadyMinted = 5,      // token id already registered
    PendingClaim = 6,       // owner holds a soul that was minted but not claimed
    SoulExists = 7,         // owner already holds a claimed soul
    NotFound = 8,           // query on a token id that was never minted
    NotMinted = 9,          // claim without a prior mint
    AlreadyClaimed = 10,    // second claim on the same soul
    SoulNotFound = 11,      // per-owner query or burn on a missing soul
}
