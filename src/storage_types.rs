use soroban_sdk::{contracttype, Address, String};

pub const DEFAULT_GREETING: &str = "Hello, Shardeum!";

/// Time-to-live, in ledgers, for the contract instance (owner, greeting, total).
pub const INSTANCE_TTL_THRESHOLD: u32 = 518400; // ~30 days
pub const INSTANCE_TTL_EXTEND: u32 = 2592000; // ~150 days

/// Time-to-live, in ledgers, for per-sender greeting counters.
pub const USER_TTL_THRESHOLD: u32 = 518400;
pub const USER_TTL_EXTEND: u32 = 2592000;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    Greeting,
    TotalGreetings,
    UserGreetingCount(Address),
}

/// Payload of the `GreetingChanged` event.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GreetingChanged {
    pub sender: Address,
    pub greeting: String,
    pub timestamp: u64,
}
