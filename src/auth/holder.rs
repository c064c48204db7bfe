//! Shared, mutable bearer token cell read by the request pipeline.
//!
//! [`TokenHolder`] is a single `Option<TokenSecret>` behind an `Arc<RwLock<_>>`. The wrapper
//! owns one holder and hands clones of the `Arc` to the transport, so every update is visible to
//! the next request that reads it. Requests already in flight may observe either the previous or
//! the new value; rotation is eventually consistent with request issuance.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Source of the bearer token attached to outgoing requests.
///
/// The pipeline reads the token through this trait so tests (or callers with their own token
/// cache) can substitute the [`TokenHolder`].
pub trait TokenSource
where
	Self: 'static + Send + Sync,
{
	/// Returns the token that should authenticate the next request, if any.
	fn current(&self) -> Option<TokenSecret>;
}

/// Single-cell bearer token holder shared between the wrapper and its transport.
#[derive(Clone, Default)]
pub struct TokenHolder(Arc<RwLock<Option<TokenSecret>>>);
impl TokenHolder {
	/// Creates an empty holder (unauthenticated mode).
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the current token; `None` clears it.
	pub fn set(&self, token: Option<TokenSecret>) {
		*self.0.write() = token;
	}

	/// Returns a copy of the current token.
	pub fn get(&self) -> Option<TokenSecret> {
		self.0.read().clone()
	}

	/// Removes the current token.
	pub fn clear(&self) {
		self.set(None);
	}

	/// Returns `true` when a non-empty token is stored.
	pub fn is_set(&self) -> bool {
		self.0.read().as_ref().is_some_and(|token| !token.is_empty())
	}
}
impl TokenSource for TokenHolder {
	fn current(&self) -> Option<TokenSecret> {
		self.get()
	}
}
impl Debug for TokenHolder {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenHolder").field("token_set", &self.is_set()).finish()
	}
}
