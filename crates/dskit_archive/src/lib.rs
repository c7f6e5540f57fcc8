//! Theme archives
//!
//! A theme is handed to code generators as a container of JSON documents:
//! `meta.json` with the token metadata, plus `{platform}_{variation}.json`
//! with the raw values of every platform and variation present.
//!
//! [`ThemeArchiveCodec`] isolates the container format; [`ZipThemeCodec`] is
//! the zip implementation.

mod codec;
mod error;
pub mod naming;

pub use codec::{ThemeArchiveCodec, ZipThemeCodec};
pub use error::ArchiveError;
pub use naming::{member_name, parse_member_name, META_MEMBER};
