//! Identity storage
//!
//! Only an in-memory store exists; it is populated once from seed identities.

mod memory;
mod seed;

pub use memory::InMemoryIdentityRepository;
pub use seed::{default_seed, SeedIdentity};
