#![no_std]
use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, String};

pub mod chain;
pub mod events;
pub mod metadata;
mod storage_types;

#[cfg(any(test, feature = "testutils"))]
pub mod deploy;

pub use storage_types::{
    DataKey, GreetingChanged, DEFAULT_GREETING, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
    USER_TTL_EXTEND, USER_TTL_THRESHOLD,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
}

#[contract]
pub struct HelloWorld;

#[contractimpl]
impl HelloWorld {
    /// Initialize the contract with its owner. Only can be called once.
    ///
    /// The greeting starts as `"Hello, Shardeum!"` and all counters at zero.
    pub fn initialize(e: Env, owner: Address) -> Result<(), Error> {
        let storage = e.storage().instance();
        if storage.has(&DataKey::Owner) {
            return Err(Error::AlreadyInitialized);
        }

        storage.set(&DataKey::Owner, &owner);
        storage.set(&DataKey::Greeting, &String::from_str(&e, DEFAULT_GREETING));
        storage.set(&DataKey::TotalGreetings, &0u64);
        storage.extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);

        log!(&e, "initialized", owner);
        Ok(())
    }

    /// Replace the greeting on behalf of `caller`.
    ///
    /// Any address may change the greeting; the owner is recorded but not
    /// enforced here. Bumps the global counter and the caller's own counter,
    /// then emits `GreetingChanged`.
    ///
    /// # Arguments
    /// * `caller` - The address changing the greeting, must authorize the call
    /// * `new_greeting` - The new greeting, stored as given
    pub fn set_greeting(e: Env, caller: Address, new_greeting: String) -> Result<(), Error> {
        if !e.storage().instance().has(&DataKey::Owner) {
            return Err(Error::NotInitialized);
        }
        caller.require_auth();

        let instance = e.storage().instance();
        instance.set(&DataKey::Greeting, &new_greeting);

        let total = Self::total_greetings(e.clone());
        instance.set(&DataKey::TotalGreetings, &(total + 1));
        instance.extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);

        let user_key = DataKey::UserGreetingCount(caller.clone());
        let user_count = Self::user_greeting_count(e.clone(), caller.clone());
        let persistent = e.storage().persistent();
        persistent.set(&user_key, &(user_count + 1));
        persistent.extend_ttl(&user_key, USER_TTL_THRESHOLD, USER_TTL_EXTEND);

        events::greeting_changed(&e, &caller, &new_greeting);
        Ok(())
    }

    /// The current greeting.
    pub fn greeting(e: Env) -> String {
        e.storage()
            .instance()
            .get(&DataKey::Greeting)
            .unwrap_or_else(|| String::from_str(&e, DEFAULT_GREETING))
    }

    pub fn get_greeting(e: Env) -> String {
        Self::greeting(e)
    }

    /// The address recorded as owner at initialization.
    pub fn owner(e: Env) -> Result<Address, Error> {
        e.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Number of successful greeting changes across all callers.
    pub fn total_greetings(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&DataKey::TotalGreetings)
            .unwrap_or(0)
    }

    pub fn get_total_greetings(e: Env) -> u64 {
        Self::total_greetings(e)
    }

    /// Number of greeting changes made by `user`, zero if none.
    ///
    /// # Arguments
    /// * `user` - The address to look up
    pub fn user_greeting_count(e: Env, user: Address) -> u64 {
        e.storage()
            .persistent()
            .get(&DataKey::UserGreetingCount(user))
            .unwrap_or(0)
    }

    pub fn get_user_greeting_count(e: Env, user: Address) -> u64 {
        Self::user_greeting_count(e, user)
    }
}
