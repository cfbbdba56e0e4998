//! The D&D Beyond client: exposed operations and the content catalog.
//!
//! [`DndBeyondClient`] owns the fetch boundary and the catalog of
//! discovered content. The catalog is the explicit context that scopes
//! searches: created empty, replaced wholesale by
//! [`discover_content`](DndBeyondClient::discover_content), and read by
//! [`search_monsters`](DndBeyondClient::search_monsters) for its default
//! source filter and homebrew matches.

use futures::future;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use regex::Regex;

use crate::error::Result;
use crate::extract;
use crate::net::{Fetch, HttpClient, html};
use crate::types::{DiscoveredContent, EncounterEntry, Monster, Source};

/// Origin of the content site; relative URLs are resolved against it.
pub const BASE_URL: &str = "https://www.dndbeyond.com";

/// Source id of the basic rules, free for every account and the default
/// search scope when nothing has been discovered.
const BASIC_RULES_SOURCE_ID: &str = "1";

/// Personal character-profile pages are served as JSON under this suffix.
const CHARACTER_JSON_SUFFIX: &str = "/json";

static CHARACTER_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://www\.dndbeyond\.com/profile/[^/]+/characters/[^/]+$")
        .expect("valid character url pattern")
});

/// Client for extracting monster data from D&D Beyond pages.
///
/// All operations are asynchronous and independent; each call fetches
/// fresh documents and produces fresh records.
///
/// # Examples
///
/// ```rust,no_run
/// use bestiary::DndBeyondClient;
///
/// # async fn example() -> bestiary::Result<()> {
/// let client = DndBeyondClient::new();
/// client.discover_content().await?;
///
/// let results = client.search_monsters("goblin", None).await?;
/// println!("Found {} monsters", results.len());
/// # Ok(())
/// # }
/// ```
pub struct DndBeyondClient {
    fetcher: Box<dyn Fetch>,
    catalog: RwLock<DiscoveredContent>,
}

impl DndBeyondClient {
    /// Creates a client backed by the shared HTTP stack.
    pub fn new() -> Self {
        let http = HttpClient::new("dndbeyond")
            .with_rate_limit(500)
            .with_max_retries(3);
        Self::with_fetcher(Box::new(http))
    }

    /// Creates a client over a custom fetch boundary.
    ///
    /// Used by tests to serve synthetic documents without a network.
    pub fn with_fetcher(fetcher: Box<dyn Fetch>) -> Self {
        Self {
            fetcher,
            catalog: RwLock::new(DiscoveredContent::default()),
        }
    }

    /// The library version, answered by the bridge's capability probe.
    pub fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// A snapshot of the discovered content catalog.
    pub fn catalog(&self) -> DiscoveredContent {
        self.catalog.read().clone()
    }

    /// Searches the site for monsters matching `query`.
    ///
    /// The search is scoped to the purchased entries of `sources` when
    /// given, otherwise to the discovered catalog, otherwise to the free
    /// basic rules. Discovered homebrew whose fields contain the query are
    /// prepended to the results.
    pub async fn search_monsters(
        &self,
        query: &str,
        sources: Option<&[Source]>,
    ) -> Result<Vec<Monster>> {
        let url = self.search_url(query, sources);
        log::debug!("searching monsters: {url}");
        let body = self.fetcher.fetch_text(&url).await?;
        let document = html::parse(&body);

        let mut results: Vec<Monster> = {
            let catalog = self.catalog.read();
            catalog
                .homebrew
                .iter()
                .filter(|monster| monster.matches_query(query))
                .cloned()
                .collect()
        };
        results.extend(extract::search::extract_search_results(&document));
        Ok(results)
    }

    fn search_url(&self, query: &str, sources: Option<&[Source]>) -> String {
        let mut url = format!("{BASE_URL}/monsters?filter-type=0");

        let catalog_sources;
        let scoped: &[Source] = match sources {
            Some(sources) => sources,
            None => {
                catalog_sources = self.catalog.read().sources.clone();
                &catalog_sources
            }
        };

        if scoped.is_empty() {
            url.push_str("&filter-source=");
            url.push_str(BASIC_RULES_SOURCE_ID);
        } else {
            for source in scoped.iter().filter(|source| source.purchased) {
                url.push_str("&filter-source=");
                url.push_str(&source.id);
            }
        }

        url.push_str("&filter-search=");
        url.push_str(&urlencoding::encode(query));
        url
    }

    /// Extracts the monster or character at `url`.
    ///
    /// Character-profile URLs are fetched as JSON; everything else is
    /// parsed as a stat-block page.
    pub async fn monster_from_url(&self, url: &str) -> Result<Monster> {
        if CHARACTER_URL.is_match(url) {
            let json_url = format!("{url}{CHARACTER_JSON_SUFFIX}");
            log::debug!("fetching character profile: {json_url}");
            let document = self.fetcher.fetch_json(&json_url).await?;
            return extract::character::extract_character(&document, url);
        }

        let body = self.fetcher.fetch_text(url).await?;
        Ok(extract::statblock::extract_stat_block(&html::parse(&body), url))
    }

    /// Extracts every `{monster, quantity}` pair listed by the encounter at
    /// `url`.
    pub async fn monsters_from_encounter_url(&self, url: &str) -> Result<Vec<EncounterEntry>> {
        let body = self.fetcher.fetch_text(url).await?;
        extract::encounter::extract_encounter(&html::parse(&body))
    }

    /// Discovers purchasable sources and homebrew creations, replacing the
    /// catalog with the merged result.
    ///
    /// The two discovery pathways run concurrently; a failure in either
    /// propagates instead of leaving a half-populated catalog.
    pub async fn discover_content(&self) -> Result<DiscoveredContent> {
        let (sources, homebrew) =
            tokio::try_join!(self.discover_sources(), self.discover_homebrew())?;
        log::debug!(
            "discovered {} sources, {} homebrew creations",
            sources.len(),
            homebrew.len()
        );

        let content = DiscoveredContent { sources, homebrew };
        *self.catalog.write() = content.clone();
        Ok(content)
    }

    async fn discover_sources(&self) -> Result<Vec<Source>> {
        let body = self.fetcher.fetch_text(&format!("{BASE_URL}/monsters")).await?;
        let candidates = extract::catalog::extract_source_options(&html::parse(&body));

        // Entitlement checks are independent per source; join them rather
        // than checking serially.
        let checks = candidates
            .into_iter()
            .map(|source| self.is_source_purchased(source));
        future::join_all(checks).await.into_iter().collect()
    }

    async fn discover_homebrew(&self) -> Result<Vec<Monster>> {
        let body = self
            .fetcher
            .fetch_text(&format!("{BASE_URL}/my-collection"))
            .await?;
        Ok(extract::catalog::extract_homebrew_listing(&html::parse(&body)))
    }

    /// Determines whether a source is available to the current account.
    ///
    /// This is a stub. The marketplace entitlement lookup stopped working
    /// upstream, so every source is reported as purchased until a
    /// replacement exists. The basic rules short-circuit first: they are
    /// free for everyone and the lookup would fail for them regardless.
    pub async fn is_source_purchased(&self, mut source: Source) -> Result<Source> {
        if source.id == BASIC_RULES_SOURCE_ID {
            source.purchased = true;
            return Ok(source);
        }
        source.purchased = true;
        Ok(source)
    }
}

impl Default for DndBeyondClient {
    fn default() -> Self {
        Self::new()
    }
}
