//! Document-head metadata registered by each frontend page.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PageMetadata {
    pub title: &'static str,
    pub description: &'static str,
}

pub const fn get_metadata(title: &'static str, description: &'static str) -> PageMetadata {
    PageMetadata { title, description }
}

pub const APP: PageMetadata = get_metadata(
    "Scaffold-Shard App",
    "Built with 🏗 Scaffold-Shard for Shardeum",
);

pub const BLOCK_EXPLORER: PageMetadata = get_metadata(
    "Block Explorer",
    "Block Explorer created with 🏗 Scaffold-Shard",
);

pub const PAGES: &[PageMetadata] = &[APP, BLOCK_EXPLORER];
