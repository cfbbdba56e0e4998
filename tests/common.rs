//! Common test utilities and fixtures
//!
//! Synthetic documents mirroring the source site's page shapes, plus a stub
//! fetch boundary so client tests run without a network.

use async_trait::async_trait;
use bestiary::error::{Error, Result};
use bestiary::net::Fetch;
use std::collections::HashMap;

/// A fetch boundary serving canned documents keyed by exact URL.
#[allow(dead_code)]
pub struct StubFetch {
    pages: HashMap<String, String>,
}

#[allow(dead_code)]
impl StubFetch {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    pub fn with_page(mut self, url: &str, body: &str) -> Self {
        self.pages.insert(url.to_string(), body.to_string());
        self
    }
}

#[async_trait]
impl Fetch for StubFetch {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("no stubbed page for {url}")))
    }

    async fn fetch_json(&self, url: &str) -> Result<serde_json::Value> {
        let body = self.fetch_text(url).await?;
        serde_json::from_str(&body).map_err(Into::into)
    }
}

/// A search results page with a single Goblin row.
#[allow(dead_code)]
pub const SEARCH_RESULTS_HTML: &str = r#"
<div class="listing-container">
  <div class="listing-body">
    <div class="info">
      <div class="monster-icon">
        <a href="/avatars/goblin-large.png">
          <div class="image" style="background-image: url('/avatars/goblin.png')"></div>
        </a>
      </div>
      <div class="monster-name">
        <span class="name"> Goblin </span>
        <span class="source">Basic Rules</span>
      </div>
      <div class="monster-challenge">1/4</div>
      <div class="monster-type">
        <span class="type">Humanoid</span>
        <span class="subtype">Goblinoid</span>
      </div>
      <div class="monster-size">Small</div>
      <div class="monster-alignment">Neutral Evil</div>
      <div class="monster-environment"><span title="Forest, Grassland"></span></div>
      <a class="link" href="/monsters/goblin">Goblin</a>
    </div>
  </div>
</div>
"#;

/// A search results page with no rows.
#[allow(dead_code)]
pub const EMPTY_LISTING_HTML: &str = r#"
<div class="listing-container">
  <div class="listing-body"></div>
</div>
"#;

/// An encounter page with a quantity-marked row and an unmarked row.
#[allow(dead_code)]
pub const ENCOUNTER_HTML: &str = r#"
<div class="encounter-details__body-main">
  <div class="encounter-monster">
    <div class="encounter-monster__avatar"><img src="/avatars/goblin.png"></div>
    <div class="encounter-monster__details">
      <div class="encounter-monster__name">Goblin</div>
      <div class="encounter-monster__subtext">Small Humanoid</div>
    </div>
    <div class="encounter-monster__difficulty">
      <span class="difficulty__value">1/4</span>
    </div>
    <div class="encounter-monster__quantity">&#215;3</div>
    <a href="/monsters/goblin">Goblin</a>
  </div>
  <div class="encounter-monster">
    <div class="encounter-monster__avatar"><img src="/avatars/ogre.png"></div>
    <div class="encounter-monster__details">
      <div class="encounter-monster__name">Ogre</div>
      <div class="encounter-monster__subtext">Large Giant</div>
    </div>
    <div class="encounter-monster__difficulty">
      <span class="difficulty__value">2</span>
    </div>
    <a href="/monsters/ogre">Ogre</a>
  </div>
</div>
"#;

/// A stat-block detail page.
#[allow(dead_code)]
pub const STAT_BLOCK_HTML: &str = r#"
<h1 class="page-title">Young Red Dragon</h1>
<div id="content">
  <span class="source monster-source">Monster Manual</span>
  <div class="mon-stat-block">
    <div class="mon-stat-block__header">
      <div class="mon-stat-block__name">Young Red Dragon</div>
      <div class="mon-stat-block__meta">Large dragon (shapechanger), chaotic evil</div>
    </div>
    <div class="mon-stat-block__attributes">
      <div class="mon-stat-block__attribute">
        <span class="mon-stat-block__attribute-label">Armor Class</span>
        <span class="mon-stat-block__attribute-data">18</span>
      </div>
      <div class="mon-stat-block__attribute">
        <span class="mon-stat-block__attribute-label">Hit Points</span>
        <span class="mon-stat-block__attribute-data">178 (17d10 + 85)</span>
      </div>
    </div>
    <div class="mon-stat-block__tidbits">
      <div class="mon-stat-block__tidbit">
        <span class="mon-stat-block__tidbit-label">Challenge</span>
        <span class="mon-stat-block__tidbit-data">10 (5,900 XP)</span>
      </div>
    </div>
  </div>
  <div class="environment-tags">
    <span class="environment-tag">Hill</span>
    <span class="environment-tag"> Mountain </span>
  </div>
  <div class="detail-content">
    <div class="image"><a href="/images/dragon-large.png">Image</a></div>
  </div>
</div>
"#;

/// A stat-block page missing the hit points attribute and the block name.
#[allow(dead_code)]
pub const SPARSE_STAT_BLOCK_HTML: &str = r#"
<h1 class="page-title">Mystery Creature</h1>
<div id="content">
  <div class="mon-stat-block"></div>
</div>
"#;

/// A character-profile JSON document.
#[allow(dead_code)]
pub const CHARACTER_JSON: &str = r##"
{
  "character": {
    "name": "Mordai",
    "baseHitPoints": 38,
    "classes": [{"level": 3}, {"level": 2}],
    "currentXp": 14000,
    "race": {
      "baseName": "Tiefling",
      "fullName": "Bloodhunter Tiefling",
      "size": "Medium"
    },
    "avatarUrl": "",
    "frameAvatarUrl": "https://www.dndbeyond.com/avatars/frame.png",
    "themeColor": {"themeColor": "#C53131"}
  }
}
"##;

/// The monster search page carrying the source filter options.
#[allow(dead_code)]
pub const MONSTERS_FILTER_HTML: &str = r#"
<select id="filter-source">
  <option value="1">Basic Rules</option>
  <option value="2">Monster Manual</option>
</select>
<div class="listing-container"><div class="listing-body"></div></div>
"#;

/// The homebrew collection listing with one creation.
#[allow(dead_code)]
pub const MY_COLLECTION_HTML: &str = r#"
<div class="listing-container">
  <div class="listing-body">
    <div class="list-row">
      <div class="list-row-name-primary-text">
        <a class="link" href="/homebrew/creatures/1234-shadow-hound">Shadow Hound</a>
      </div>
      <div class="list-row-name-secondary-text">Homebrew</div>
    </div>
  </div>
</div>
"#;
