//! Layered settings resolution for load-test harnesses.
//!
//! A settings source is a UTF-8 file holding one or two YAML documents
//! separated by `---`. The first document carries public settings and the
//! optional second document carries secrets:
//!
//! ```yaml
//! ---
//! hello: world
//! ---
//! # secrets
//! password: set-me
//! ```
//!
//! The engine loads such sources into [`Settings`] documents, merges an
//! ordered stack of them with hierarchical override semantics, validates
//! caller-declared required keys, and renders documents back into the same
//! on-disk format. A consuming script resolves its settings once at startup
//! through a [`Resolver`]:
//!
//! ```rust,no_run
//! use strata_settings::{RequiredKeys, Resolver, SettingsError};
//!
//! fn main() -> Result<(), SettingsError> {
//!     let resolver = Resolver::conventional();
//!     resolver.init(
//!         "loadtests.lms.locustfile",
//!         &RequiredKeys::new(["BASE_URL"], ["PASSWORD"]),
//!     )?;
//!     if let Some(public) = resolver.public() {
//!         let _base_url = public.get("BASE_URL");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The engine is purely structural: it validates presence, not meaning, and
//! every configuration problem fails fast rather than being guessed around.

mod document;
mod error;
mod loader;
mod merge;
mod resolver;
mod serialize;
mod validate;

pub use document::Settings;
pub use error::{
    DocumentSlot, MalformedSettingFile, MissingSettings, NonMappingDocument, SettingsError,
};
pub use merge::update_subkeys;
pub use resolver::{Resolver, SETTINGS_DIR};
pub use validate::RequiredKeys;
