//! # Bestiary - Monster and stat-block extraction for D&D Beyond content
//!
//! Bestiary turns the semi-structured pages of a content site into
//! strongly-typed [`Monster`] records. It bundles a set of pattern parsers
//! for the messy free-text fields those pages carry (challenge ratings,
//! dice notation, type descriptors), one extraction pathway per page shape,
//! and a request bridge that exposes the whole thing as a small set of
//! asynchronous operations.
//!
//! ## Features
//!
//! - **Extraction Pathways**: Search results, encounter listings, stat-block
//!   pages, character-profile JSON, and homebrew collections
//! - **Pattern Parsers**: Challenge ratings (with fractions and XP figures),
//!   dice notation, monster type descriptors, CSS background-image URLs
//! - **Content Discovery**: Concurrent discovery of purchasable sources and
//!   homebrew creations, merged into a catalog that scopes later searches
//! - **Request Bridge**: A closed, exhaustively-matched set of exposed
//!   operations over a `{method, arguments}` wire format
//! - **Async/Await Support**: Built on tokio; parsing itself never suspends
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bestiary::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> bestiary::Result<()> {
//!     let client = DndBeyondClient::new();
//!
//!     // Discover purchased sources and homebrew to scope searches.
//!     let content = client.discover_content().await?;
//!     println!("{} sources available", content.sources.len());
//!
//!     // Search, then pull the full stat block for the first hit.
//!     let results = client.search_monsters("goblin", None).await?;
//!     if let Some(url) = results.first().and_then(|m| m.details_page_url.clone()) {
//!         let monster = client.monster_from_url(&url).await?;
//!         println!("{:?} has {:?} hit points", monster.name, monster.hp);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! - [`client`]: The exposed operations and the discovered-content catalog
//! - [`extract`]: One extraction pathway per source-page shape
//! - [`patterns`]: The fixed-grammar micro-parsers
//! - [`dice`]: The dice expression value type
//! - [`types`]: Monster, source and discovery records
//! - [`net`]: HTTP client, rate limiting, and document query helpers
//! - [`bridge`]: The request/response dispatch boundary
//! - [`error`]: Comprehensive error handling

pub mod bridge;
pub mod client;
pub mod dice;
pub mod error;
pub mod extract;
pub mod net;
pub mod patterns;
pub mod text;
pub mod types;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bestiary::prelude::*;
///
/// // Now you have access to:
/// // - DndBeyondClient, Bridge, Request
/// // - Monster, Source, EncounterEntry, DiscoveredContent, Dice
/// ```
pub mod prelude {
    pub use crate::{
        bridge::{Bridge, Call, Request},
        client::{BASE_URL, DndBeyondClient},
        dice::Dice,
        types::{DiscoveredContent, EncounterEntry, Monster, Source},
    };
}

// Re-export main types at crate root for direct access
pub use bridge::{Bridge, Call, Request};
pub use client::{BASE_URL, DndBeyondClient};
pub use dice::Dice;
pub use error::{Error, Result};
pub use types::{DiscoveredContent, EncounterEntry, Monster, Source};
