//! Pagination module
//!
//! Accumulates a post listing from a cursor-paginated content source.
//!
//! # Overview
//!
//! A [`PaginationState`] is an immutable value. It is created from a first
//! [`Page`] and every [`load_next`] call returns a *new* state holding the old
//! items followed by the fetched ones. Two `load_next` calls started from the
//! same snapshot each produce a state missing the other's page, so callers
//! must serialize them.

mod paginator;
mod types;

pub use paginator::{first_state, load_all, load_next, map_entry};
pub use types::{Page, PaginationState};
