//! Response models for the Web API, decoded leniently.
//!
//! Every model tolerates the shape drift the Web API is known for:
//!
//! - unknown fields are ignored (no model denies them);
//! - missing fields fall back to their defaults and nullable fields are `Option`s;
//! - enumerated strings map unrecognized values onto an `Unknown` variant;
//! - polymorphic items ([`PlayableItem`]) map unrecognized `type` discriminators onto
//!   [`PlayableItem::Unknown`].

pub mod album;
pub mod artist;
pub mod common;
pub mod paging;
pub mod playlist;
pub mod track;
pub mod user;

pub use album::*;
pub use artist::*;
pub use common::*;
pub use paging::*;
pub use playlist::*;
pub use track::*;
pub use user::*;

// crates.io
use serde::de::DeserializeOwned;

/// Decodes a JSON body, reporting the path of the first field that could not be read.
pub fn from_slice<T>(body: &[u8]) -> Result<T, serde_path_to_error::Error<serde_json::Error>>
where
	T: DeserializeOwned,
{
	let mut de = serde_json::Deserializer::from_slice(body);

	serde_path_to_error::deserialize(&mut de)
}
