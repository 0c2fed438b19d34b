// src/specs/players.rs

use std::error::Error;
use std::fmt;

use serde::Deserialize;

use crate::config::options::Endpoint;
use crate::core::net;

/// One record from `/api/players`. The route returns more columns than
/// we use (team, status, keeper cost, ...); serde drops the rest.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

/// The app has served both numeric and string ids across schema
/// migrations. Accept either; both print bare.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PlayerId {
    Num(i64),
    Str(String),
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Num(n) => write!(f, "{n}"),
            PlayerId::Str(s) => write!(f, "{s}"),
        }
    }
}

/// GET the players route and decode the body.
pub fn fetch(ep: &Endpoint) -> Result<Vec<Player>, Box<dyn Error>> {
    let body = net::http_get(ep)?;
    decode(&body)
}

/// Decode a JSON array of player objects, order preserved. Anything else
/// (object, bare value, truncated body) is an error.
pub fn decode(body: &str) -> Result<Vec<Player>, Box<dyn Error>> {
    let players: Vec<Player> = serde_json::from_str(body)?;
    Ok(players)
}
