//! Config load validation tests for fieldframe-config.
// crates/fieldframe-config/tests/load_validation.rs
// =============================================================================
// Module: Config Load Validation Tests
// Description: Validate config loading guards (path, size, encoding).
// Purpose: Ensure config input handling is strict and fail-closed.
// =============================================================================

use std::io::Write;
use std::path::Path;

use fieldframe_config::ConfigError;
use fieldframe_config::FieldframeConfig;
use fieldframe_config::ResolverOrder;
use fieldframe_config::StoreBackend;
use fieldframe_core::FieldGroupStore;
use tempfile::NamedTempFile;
use tempfile::TempDir;

type TestResult = Result<(), String>;

fn assert_invalid(result: Result<FieldframeConfig, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(_) => Err("expected invalid config load".to_string()),
    }
}

fn write_config(content: &str) -> Result<NamedTempFile, String> {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(content.as_bytes()).map_err(|err| err.to_string())?;
    Ok(file)
}

#[test]
fn load_rejects_path_too_long() -> TestResult {
    let long_path = "a".repeat(5_000);
    let path = Path::new(&long_path);
    assert_invalid(FieldframeConfig::load(Some(path)), "config path exceeds max length")?;
    Ok(())
}

#[test]
fn load_rejects_path_component_too_long() -> TestResult {
    let long_component = "a".repeat(300);
    let path = Path::new(&long_component);
    assert_invalid(FieldframeConfig::load(Some(path)), "config path component too long")?;
    Ok(())
}

#[test]
fn load_rejects_oversized_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    let payload = vec![b'a'; 524_289];
    file.write_all(&payload).map_err(|err| err.to_string())?;
    assert_invalid(FieldframeConfig::load(Some(file.path())), "config file exceeds size limit")?;
    Ok(())
}

#[test]
fn load_rejects_non_utf8_file() -> TestResult {
    let mut file = NamedTempFile::new().map_err(|err| err.to_string())?;
    file.write_all(&[0xFF, 0xFE, 0xFF]).map_err(|err| err.to_string())?;
    assert_invalid(FieldframeConfig::load(Some(file.path())), "config file must be utf-8")?;
    Ok(())
}

#[test]
fn load_rejects_unknown_keys() -> TestResult {
    let file = write_config("[store]\nbackend = \"memory\"\nsurprise = true\n")?;
    assert_invalid(FieldframeConfig::load(Some(file.path())), "config parse error")?;
    Ok(())
}

#[test]
fn load_rejects_sqlite_backend_without_path() -> TestResult {
    let file = write_config("[store]\nbackend = \"sqlite\"\n")?;
    assert_invalid(FieldframeConfig::load(Some(file.path())), "sqlite store requires sqlite_path")?;
    Ok(())
}

#[test]
fn load_accepts_memory_backend_with_resolver_order() -> TestResult {
    let file = write_config(
        "[store]\nbackend = \"memory\"\n\n[resolver]\norder = \"insertion\"\n",
    )?;
    let config = FieldframeConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    if config.store.backend != StoreBackend::Memory {
        return Err("expected memory backend".to_string());
    }
    if config.resolver.order != ResolverOrder::Insertion {
        return Err("expected insertion order".to_string());
    }
    Ok(())
}

#[test]
fn build_store_wires_sqlite_backend() -> TestResult {
    let dir = TempDir::new().map_err(|err| err.to_string())?;
    let db_path = dir.path().join("fieldframe.db");
    let content = format!(
        "[store]\nbackend = \"sqlite\"\nsqlite_path = \"{}\"\n",
        db_path.display()
    );
    let file = write_config(&content)?;
    let config = FieldframeConfig::load(Some(file.path())).map_err(|err| err.to_string())?;
    let store = config.build_store().map_err(|err| err.to_string())?;
    let groups = store.load_all().map_err(|err| err.to_string())?;
    if !groups.is_empty() {
        return Err("fresh store must be empty".to_string());
    }
    Ok(())
}
