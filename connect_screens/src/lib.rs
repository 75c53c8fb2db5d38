//! The three screens of the Connect client: user directory, own profile,
//! and tag search. Each controller exclusively owns its view state, talks
//! to the backend through the `connect_api` traits, and reconciles local
//! state after every mutating call. There is no cross-screen messaging;
//! shared identity comes from the injected session store.

pub mod directory;
pub mod notify;
pub mod profile;
pub mod tag_search;

/// Placeholder avatar for users without a server image or local override.
pub const DEFAULT_AVATAR: &str = "static/default-avatar.png";
