//! User profile models.

// self
use crate::{
	_prelude::*,
	model::{ExternalUrls, Followers, Image},
};

/// Public profile of any user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPublic {
	/// Display name, if the user set one.
	pub display_name: Option<String>,
	/// Known external URLs.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub external_urls: ExternalUrls,
	/// Follower information.
	pub followers: Option<Followers>,
	/// Web API link to the profile.
	pub href: Option<String>,
	/// Spotify user ID.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub id: String,
	/// Profile images.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub images: Vec<Image>,
	/// Spotify URI.
	pub uri: Option<String>,
}

/// Profile of the current user, including fields gated by scopes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserPrivate {
	/// Fields shared with [`UserPublic`].
	#[serde(flatten)]
	pub public: UserPublic,
	/// ISO 3166-1 alpha-2 country (`user-read-private`).
	pub country: Option<String>,
	/// Email address (`user-read-email`).
	pub email: Option<String>,
	/// Subscription level such as `premium` or `free` (`user-read-private`).
	pub product: Option<String>,
}
