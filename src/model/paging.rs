//! Paging envelopes.

// self
use crate::_prelude::*;

/// Offset-based page of items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: Deserialize<'de>"))]
pub struct Pager<T> {
	/// Web API link to this page.
	pub href: Option<String>,
	/// Items on this page.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub items: Vec<T>,
	/// Requested page size.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub limit: u32,
	/// Link to the next page, if any.
	pub next: Option<String>,
	/// Offset of the first item.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub offset: u32,
	/// Link to the previous page, if any.
	pub previous: Option<String>,
	/// Total number of items across all pages.
	#[serde(deserialize_with = "crate::model::null_as_default")]
	pub total: u32,
}
impl<T> Pager<T> {
	/// Returns `true` when another page can be requested.
	pub fn has_next(&self) -> bool {
		self.next.is_some()
	}
}
impl<T> Default for Pager<T> {
	fn default() -> Self {
		Self {
			href: None,
			items: Vec::new(),
			limit: 0,
			next: None,
			offset: 0,
			previous: None,
			total: 0,
		}
	}
}
