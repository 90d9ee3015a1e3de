//! Install-api-key command handler.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::KeyArgs;
use crate::config::Config;
use crate::credential::{
    HiddenSource, KeyLocation, LineSource, Provisioner, SecretSource, confirmation_message,
};
use crate::error::Result;

/// Pick the key directory: `--dir`, then `--home`, then the configured `key_dir`.
pub fn key_location(config: &Config, args: &KeyArgs) -> KeyLocation {
    if let Some(dir) = &args.dir {
        KeyLocation::Explicit(dir.clone())
    } else if args.home {
        KeyLocation::Home
    } else {
        KeyLocation::from_setting(&config.key_dir())
    }
}

/// Whether the key should be read without echo (`--hidden` or `hidden=true`).
pub fn use_hidden_input(config: &Config, args: &KeyArgs) -> bool {
    args.hidden || config.hidden()
}

/// Provision the key from `source` and write the confirmation line to `out`.
pub fn install_api_key<S, W>(
    config: &Config,
    args: &KeyArgs,
    source: &mut S,
    out: &mut W,
) -> Result<PathBuf>
where
    S: SecretSource + ?Sized,
    W: Write,
{
    let path = Provisioner::new(key_location(config, args)).provision(source)?;
    writeln!(out, "{}", confirmation_message(&path))?;
    Ok(path)
}

/// Prompt for the OpenTopography API key on the terminal and write it to disk.
pub fn handle_install_api_key(config: &Config, args: &KeyArgs) -> Result<PathBuf> {
    let mut source: Box<dyn SecretSource> = if use_hidden_input(config, args) {
        Box::new(HiddenSource)
    } else {
        Box::new(LineSource::stdio())
    };
    install_api_key(config, args, source.as_mut(), &mut io::stdout())
}
