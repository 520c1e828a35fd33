use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::storage_types::GreetingChanged;

pub const GREETING_CHANGED: Symbol = symbol_short!("greeting");

/// Publish a `GreetingChanged` event with topics `["greeting", sender]`.
///
/// Only call once the new greeting and counters have been written.
pub fn greeting_changed(e: &Env, sender: &Address, greeting: &String) {
    let event = GreetingChanged {
        sender: sender.clone(),
        greeting: greeting.clone(),
        timestamp: e.ledger().timestamp(),
    };
    e.events().publish((GREETING_CHANGED, sender.clone()), event);
}
