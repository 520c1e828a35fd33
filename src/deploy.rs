//! Deployment of the `HelloWorld` contract onto a host environment.
//!
//! The deployer is expected to be funded already; funding and network
//! failures surface from the host, not from here.

use soroban_sdk::{log, Address, Env};

use crate::{HelloWorld, HelloWorldClient};

/// A named deployment step, selectable by tag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeployScript {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

impl DeployScript {
    /// Whether a `--tags` filter selects this script. An empty filter selects
    /// every script.
    pub fn matches(&self, filter: &[&str]) -> bool {
        filter.is_empty() || filter.iter().any(|tag| self.tags.contains(tag))
    }
}

pub const HELLO_WORLD: DeployScript = DeployScript {
    name: "HelloWorld",
    tags: &["HelloWorld"],
};

pub struct Deployment<'a> {
    pub name: &'static str,
    pub contract_id: Address,
    pub deployer: Address,
    pub client: HelloWorldClient<'a>,
}

/// Register a fresh `HelloWorld` instance owned by `deployer` and log its
/// initial state.
///
/// Each call produces a new, independent instance; earlier deployments are
/// never reused.
pub fn deploy_hello_world<'a>(env: &Env, deployer: &Address) -> Deployment<'a> {
    let contract_id = env.register_contract(None, HelloWorld);
    let client = HelloWorldClient::new(env, &contract_id);
    client.initialize(deployer);

    log!(env, "initial greeting", client.greeting());
    log!(env, "total greetings", client.total_greetings());

    Deployment {
        name: HELLO_WORLD.name,
        contract_id,
        deployer: deployer.clone(),
        client,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{
        testutils::{Address as _, Logs},
        String,
    };

    #[test]
    fn test_deploy_sets_deployer_as_owner() {
        let env = Env::default();
        let deployer = Address::generate(&env);

        let deployment = deploy_hello_world(&env, &deployer);

        assert_eq!(deployment.name, "HelloWorld");
        assert_eq!(deployment.deployer, deployer);
        assert_eq!(deployment.client.owner(), deployer);
        assert_eq!(
            deployment.client.greeting(),
            String::from_str(&env, "Hello, Shardeum!")
        );
        assert_eq!(deployment.client.total_greetings(), 0);
    }

    #[test]
    fn test_deploy_logs_initial_state() {
        let env = Env::default();
        let deployer = Address::generate(&env);

        deploy_hello_world(&env, &deployer);

        let logs = env.logs().all();
        assert!(logs
            .iter()
            .any(|line| line.contains("initial greeting") && line.contains("Hello, Shardeum!")));
        assert!(logs
            .iter()
            .any(|line| line.contains("\"total greetings\", 0]")));
    }

    #[test]
    fn test_redeploy_creates_independent_instance() {
        let env = Env::default();
        env.mock_all_auths();
        let deployer = Address::generate(&env);

        let first = deploy_hello_world(&env, &deployer);
        let second = deploy_hello_world(&env, &deployer);
        assert_ne!(first.contract_id, second.contract_id);

        first
            .client
            .set_greeting(&deployer, &String::from_str(&env, "first only"));

        assert_eq!(first.client.total_greetings(), 1);
        assert_eq!(second.client.total_greetings(), 0);
        assert_eq!(
            second.client.greeting(),
            String::from_str(&env, "Hello, Shardeum!")
        );
    }

    #[test]
    fn test_tag_filter() {
        assert!(HELLO_WORLD.matches(&[]));
        assert!(HELLO_WORLD.matches(&["HelloWorld"]));
        assert!(HELLO_WORLD.matches(&["Token", "HelloWorld"]));
        assert!(!HELLO_WORLD.matches(&["Token"]));
    }
}
