//! Network metadata for the Shardeum Mezame testnet.
//!
//! Consumed by wallet and RPC tooling. Values are compile-time constants;
//! nothing here is ever mutated.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NativeCurrency {
    pub decimals: u8,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// RPC endpoints keyed by usage role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RpcUrls {
    pub default: &'static [&'static str],
    pub public: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BlockExplorer {
    pub name: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ChainDescriptor {
    pub id: u64,
    pub name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: RpcUrls,
    pub block_explorer: BlockExplorer,
    pub faucet_url: &'static str,
    pub testnet: bool,
}

impl ChainDescriptor {
    /// First endpoint of the `default` role.
    pub fn default_rpc_url(&self) -> Option<&'static str> {
        self.rpc_urls.default.first().copied()
    }
}

const MEZAME_RPC: &[&str] = &["https://api-mezame.shardeum.org/"];

pub static SHARDEUM_MEZAME: ChainDescriptor = ChainDescriptor {
    id: 8119,
    name: "Shardeum Mezame",
    native_currency: NativeCurrency {
        decimals: 18,
        name: "Shardeum",
        symbol: "SHM",
    },
    rpc_urls: RpcUrls {
        default: MEZAME_RPC,
        public: MEZAME_RPC,
    },
    block_explorer: BlockExplorer {
        name: "Shardeum Explorer",
        url: "https://explorer-mezame.shardeum.org",
    },
    faucet_url: "https://faucet-mezame.shardeum.org/",
    testnet: true,
};

pub fn shardeum_mezame() -> &'static ChainDescriptor {
    &SHARDEUM_MEZAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mezame_descriptor() {
        let chain = shardeum_mezame();

        assert_eq!(chain.id, 8119);
        assert_eq!(chain.name, "Shardeum Mezame");
        assert_eq!(chain.native_currency.decimals, 18);
        assert_eq!(chain.native_currency.name, "Shardeum");
        assert_eq!(chain.native_currency.symbol, "SHM");
        assert_eq!(chain.rpc_urls.default, ["https://api-mezame.shardeum.org/"]);
        assert_eq!(chain.rpc_urls.public, chain.rpc_urls.default);
        assert_eq!(chain.block_explorer.name, "Shardeum Explorer");
        assert_eq!(chain.block_explorer.url, "https://explorer-mezame.shardeum.org");
        assert!(chain.testnet);
    }

    #[test]
    fn test_descriptor_is_stable() {
        // Every call hands back the same static record
        assert!(core::ptr::eq(shardeum_mezame(), shardeum_mezame()));
        assert_eq!(
            shardeum_mezame().default_rpc_url(),
            Some("https://api-mezame.shardeum.org/")
        );
    }
}
