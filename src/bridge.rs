//! Request bridge: the method-dispatch boundary between an embedding
//! application and the client.
//!
//! A wire [`Request`] carries a method name and positional arguments. It is
//! parsed into the enumerated [`Call`] type before dispatch, so the set of
//! exposed operations is closed and matched exhaustively; an unknown method
//! is an error at parse time, never a silent no-op.
//!
//! # Examples
//!
//! ```rust
//! use bestiary::bridge::{Call, Request};
//! use serde_json::json;
//!
//! let request = Request {
//!     method: "getMonsterFromUrl".to_string(),
//!     arguments: vec![json!("https://www.dndbeyond.com/monsters/goblin")],
//! };
//! let call = Call::parse(request).unwrap();
//! assert!(matches!(call, Call::GetMonsterFromUrl { .. }));
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::DndBeyondClient;
use crate::error::{Error, Result};

/// One request as it arrives over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    /// Name of the exposed operation to invoke.
    pub method: String,
    /// Positional arguments for the operation.
    #[serde(default)]
    pub arguments: Vec<Value>,
}

/// The closed set of operations the bridge exposes.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    /// Capability probe; answered even by a disabled bridge.
    GetVersion,
    SearchMonsters {
        query: String,
        sources: Option<Vec<crate::types::Source>>,
    },
    GetMonsterFromUrl {
        url: String,
    },
    GetMonstersFromEncounterUrl {
        url: String,
    },
    DiscoverContent,
    IsSourcePurchased {
        source: crate::types::Source,
    },
}

impl Call {
    /// Parses a wire request into a call.
    ///
    /// Fails with [`Error::UnknownMethod`] for method names outside the
    /// exposed set and [`Error::Parse`] for missing or malformed arguments.
    pub fn parse(request: Request) -> Result<Self> {
        let mut arguments = request.arguments.into_iter();
        match request.method.as_str() {
            "getVersion" => Ok(Call::GetVersion),
            "searchMonsters" => {
                let query = required_arg(arguments.next(), "query")?;
                let sources = match arguments.next() {
                    None | Some(Value::Null) => None,
                    Some(value) => Some(
                        serde_json::from_value(value)
                            .map_err(|e| Error::parse(format!("invalid argument sources: {e}")))?,
                    ),
                };
                Ok(Call::SearchMonsters { query, sources })
            }
            "getMonsterFromUrl" => Ok(Call::GetMonsterFromUrl {
                url: required_arg(arguments.next(), "url")?,
            }),
            "getMonstersFromEncounterUrl" => Ok(Call::GetMonstersFromEncounterUrl {
                url: required_arg(arguments.next(), "url")?,
            }),
            "discoverContent" => Ok(Call::DiscoverContent),
            "isSourcePurchased" => Ok(Call::IsSourcePurchased {
                source: required_arg(arguments.next(), "source")?,
            }),
            other => Err(Error::unknown_method(other)),
        }
    }
}

fn required_arg<T: DeserializeOwned>(value: Option<Value>, name: &str) -> Result<T> {
    let value = value.ok_or_else(|| Error::parse(format!("missing argument: {name}")))?;
    serde_json::from_value(value).map_err(|e| Error::parse(format!("invalid argument {name}: {e}")))
}

/// Dispatches wire requests against a [`DndBeyondClient`].
///
/// A bridge constructed with [`Bridge::disabled`] answers only the version
/// probe (with `null`, so the caller can tell "reachable but not
/// authorized" from "unreachable") and fails fast on everything else.
pub struct Bridge {
    client: Option<Arc<DndBeyondClient>>,
}

impl Bridge {
    /// Creates a bridge over a live client.
    pub fn new(client: Arc<DndBeyondClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Creates a bridge with no client behind it.
    pub fn disabled() -> Self {
        Self { client: None }
    }

    /// Parses and dispatches one request, returning the operation's result
    /// serialized as JSON.
    pub async fn handle(&self, request: Request) -> Result<Value> {
        let call = Call::parse(request)?;

        let Some(client) = &self.client else {
            return match call {
                Call::GetVersion => Ok(Value::Null),
                _ => Err(Error::unavailable("bridge is not connected to a client")),
            };
        };

        match call {
            Call::GetVersion => Ok(Value::String(client.version().to_string())),
            Call::SearchMonsters { query, sources } => {
                to_value(client.search_monsters(&query, sources.as_deref()).await?)
            }
            Call::GetMonsterFromUrl { url } => to_value(client.monster_from_url(&url).await?),
            Call::GetMonstersFromEncounterUrl { url } => {
                to_value(client.monsters_from_encounter_url(&url).await?)
            }
            Call::DiscoverContent => to_value(client.discover_content().await?),
            Call::IsSourcePurchased { source } => {
                to_value(client.is_source_purchased(source).await?)
            }
        }
    }
}

fn to_value<T: Serialize>(value: T) -> Result<Value> {
    serde_json::to_value(value).map_err(Into::into)
}
