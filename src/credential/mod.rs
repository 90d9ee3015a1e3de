//! OpenTopography API key provisioning.
//!
//! The key is captured from a [`SecretSource`] and written verbatim to
//! `.opentopography.txt` inside a directory chosen by [`KeyLocation`].

mod location;
mod provisioner;
mod source;

pub use location::KeyLocation;
pub use provisioner::{KEY_FILENAME, KEY_PROMPT, Provisioner, confirmation_message};
pub use source::{HiddenSource, LineSource, SecretSource};
