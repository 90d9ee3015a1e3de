//! Provisioning of the OpenTopography API key file.

use overland::credential::{
    KEY_FILENAME, KeyLocation, LineSource, Provisioner, SecretSource, confirmation_message,
};
use std::fs;
use std::io;
use std::path::PathBuf;
use uuid::Uuid;

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(Uuid::new_v4().to_string());
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn provision(dir: &PathBuf, input: &str) -> overland::Result<PathBuf> {
    let mut source = LineSource::new(input.as_bytes(), io::sink());
    Provisioner::new(KeyLocation::Explicit(dir.clone())).provision(&mut source)
}

#[test]
fn test_writes_key_and_reports_path() {
    let dir = temp_dir();

    let path = provision(&dir, "abc123\n").unwrap();

    assert_eq!(path, dir.join(".opentopography.txt"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "abc123");
    assert_eq!(
        confirmation_message(&path),
        format!(
            "OpenTopography API Key file is created at {}.",
            dir.join(KEY_FILENAME).display()
        )
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_empty_input_is_written() {
    let dir = temp_dir();

    let path = provision(&dir, "\n").unwrap();
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), "");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_second_key_replaces_first() {
    let dir = temp_dir();

    provision(&dir, "a-much-longer-first-key\n").unwrap();
    let path = provision(&dir, "short\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "short");

    // Same input again leaves the same contents
    provision(&dir, "short\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "short");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_key_is_not_trimmed() {
    let dir = temp_dir();

    let path = provision(&dir, " key with spaces \r\n").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), " key with spaces ");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_directory_fails_without_creating_file() {
    let dir = temp_dir();
    let provisioner = Provisioner::new(KeyLocation::Explicit(dir.clone()));
    fs::remove_dir_all(&dir).unwrap();

    let mut source = LineSource::new("abc123\n".as_bytes(), io::sink());
    let err = provisioner.provision(&mut source).unwrap_err();

    assert!(err.is_filesystem());
    assert!(err.to_string().contains(KEY_FILENAME));
    assert!(!dir.join(KEY_FILENAME).exists());
}

#[test]
fn test_no_input_is_input_error() {
    let dir = temp_dir();

    let err = provision(&dir, "").unwrap_err();
    assert!(err.is_input());
    assert!(!dir.join(KEY_FILENAME).exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_prompt_is_shown() {
    let dir = temp_dir();
    let mut prompt = Vec::new();

    let mut source = LineSource::new("abc123\n".as_bytes(), &mut prompt);
    Provisioner::new(KeyLocation::Explicit(dir.clone()))
        .provision(&mut source)
        .unwrap();

    assert_eq!(
        String::from_utf8(prompt).unwrap(),
        "Enter Your OpenTopography API Key: "
    );

    fs::remove_dir_all(&dir).unwrap();
}

/// A source that never has input, like a detached terminal.
struct Detached;

impl SecretSource for Detached {
    fn read_secret(&mut self, _prompt: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotConnected, "no terminal"))
    }
}

#[test]
fn test_custom_source_errors_propagate() {
    let dir = temp_dir();

    let err = Provisioner::new(KeyLocation::Explicit(dir.clone()))
        .provision(&mut Detached)
        .unwrap_err();
    assert!(err.is_input());
    assert!(err.to_string().contains("no terminal"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_current_dir_location() {
    let provisioner = Provisioner::default();
    assert_eq!(provisioner.location(), &KeyLocation::CurrentDir);
    assert_eq!(
        provisioner.key_path().unwrap(),
        std::env::current_dir().unwrap().join(".opentopography.txt")
    );
}

#[cfg(unix)]
#[test]
fn test_key_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir();
    let path = provision(&dir, "abc123\n").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    fs::remove_dir_all(&dir).unwrap();
}

#[cfg(unix)]
#[test]
fn test_existing_readable_key_file_is_made_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = temp_dir();
    let key_path = dir.join(KEY_FILENAME);
    fs::write(&key_path, "old-key-value").unwrap();
    fs::set_permissions(&key_path, fs::Permissions::from_mode(0o644)).unwrap();

    provision(&dir, "new\n").unwrap();

    assert_eq!(fs::read_to_string(&key_path).unwrap(), "new");
    let mode = fs::metadata(&key_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    fs::remove_dir_all(&dir).unwrap();
}
