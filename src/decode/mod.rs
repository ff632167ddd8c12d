//! Response decoding
//!
//! The CMS answers with loosely-shaped JSON. This module is the boundary
//! where that JSON is checked against the shapes the rest of the crate
//! relies on. Anything that does not fit is rejected with
//! [`Error::MalformedResponse`](crate::Error::MalformedResponse) rather than
//! being turned into blank entries.

mod decoders;
mod types;

pub use decoders::{decode_api_root, decode_documents, decode_page};
pub use types::{ApiRef, ApiRoot, RawEntry, RawEntryData, RawPage};
