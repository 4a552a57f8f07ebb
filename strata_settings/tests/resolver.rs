//! End-to-end resolver behaviour against real settings directories.

use anyhow::{Result, anyhow, ensure};
use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use serde_yaml::Value;
use strata_settings::{RequiredKeys, Resolver, SettingsError};
use tempfile::TempDir;

struct SettingsDir {
    // Held for its Drop; deleting it tears the directory down.
    _root: TempDir,
    path: Utf8PathBuf,
}

impl SettingsDir {
    fn write(&self, name: &str, contents: &str) -> Result<()> {
        std::fs::write(self.path.join(name), contents)?;
        Ok(())
    }
}

#[fixture]
fn settings_dir() -> Result<SettingsDir> {
    let root = tempfile::tempdir()?;
    let path = Utf8PathBuf::from_path_buf(root.path().to_path_buf())
        .map_err(|p| anyhow!("non-UTF-8 temp path: {}", p.display()))?;
    Ok(SettingsDir { _root: root, path })
}

#[rstest]
fn init_loads_validates_and_publishes(settings_dir: Result<SettingsDir>) -> Result<()> {
    let dir = settings_dir?;
    dir.write(
        "lms.yml",
        "---\nBASE_URL: http://localhost\nCOURSE_ID: demo\n---\nPASSWORD: set-me\n",
    )?;

    let resolver = Resolver::new(dir.path.clone());
    resolver.init(
        "loadtests.lms.locustfile",
        &RequiredKeys::new(["BASE_URL", "COURSE_ID"], ["PASSWORD"]),
    )?;

    let public = resolver.public().ok_or_else(|| anyhow!("no public tree"))?;
    let secret = resolver.secret().ok_or_else(|| anyhow!("no secret tree"))?;
    ensure!(public.get("BASE_URL") == Some(&Value::from("http://localhost")));
    ensure!(secret.get("PASSWORD") == Some(&Value::from("set-me")));
    Ok(())
}

#[rstest]
fn accessors_are_empty_before_init(settings_dir: Result<SettingsDir>) -> Result<()> {
    let resolver = Resolver::new(settings_dir?.path.clone());
    ensure!(resolver.settings().is_none());
    ensure!(resolver.public().is_none());
    ensure!(resolver.secret().is_none());
    Ok(())
}

#[rstest]
fn second_init_fails_fast(settings_dir: Result<SettingsDir>) -> Result<()> {
    let dir = settings_dir?;
    dir.write("lms.yml", "hello: world\n")?;

    let resolver = Resolver::new(dir.path.clone());
    resolver.init("loadtests.lms.locustfile", &RequiredKeys::default())?;
    let second = resolver.init("loadtests.lms.locustfile", &RequiredKeys::default());
    ensure!(matches!(second, Err(SettingsError::AlreadyInitialized)));
    // The originally published settings survive the failed re-init.
    ensure!(resolver.settings().is_some());
    Ok(())
}

#[rstest]
fn missing_required_keys_report_the_full_list(settings_dir: Result<SettingsDir>) -> Result<()> {
    let dir = settings_dir?;
    dir.write("lms.yml", "PRESENT: 1\n")?;

    let resolver = Resolver::new(dir.path.clone());
    let outcome = resolver.init(
        "loadtests.lms.locustfile",
        &RequiredKeys::new(["FOO", "BAR"], ["BAZ"]),
    );
    let Err(SettingsError::MissingRequired(missing)) = &outcome else {
        anyhow::bail!("expected MissingRequired, got {outcome:?}");
    };
    ensure!(missing.public == vec!["FOO".to_owned(), "BAR".to_owned()]);
    ensure!(missing.secret == vec!["BAZ".to_owned()]);
    // A failed validation leaves the resolver uninitialized.
    ensure!(resolver.settings().is_none());
    Ok(())
}

#[rstest]
fn unreadable_settings_file_is_an_io_error(settings_dir: Result<SettingsDir>) -> Result<()> {
    let resolver = Resolver::new(settings_dir?.path.clone());
    let outcome = resolver.init("loadtests.lms.locustfile", &RequiredKeys::default());
    ensure!(matches!(outcome, Err(SettingsError::Io { .. })));
    Ok(())
}

#[rstest]
fn malformed_settings_file_error_names_the_path(settings_dir: Result<SettingsDir>) -> Result<()> {
    let dir = settings_dir?;
    dir.write("lms.yml", "---\na: 1\n---\nb: 2\n---\nc: 3\n")?;

    let resolver = Resolver::new(dir.path.clone());
    let outcome = resolver.init("loadtests.lms.locustfile", &RequiredKeys::default());
    let Err(err) = outcome else {
        anyhow::bail!("expected a malformed-file error");
    };
    ensure!(matches!(err, SettingsError::File { .. }));
    ensure!(err.to_string().contains("lms.yml"), "missing path in: {err}");
    Ok(())
}

#[rstest]
fn caller_id_without_enough_segments_is_rejected(
    settings_dir: Result<SettingsDir>,
) -> Result<()> {
    let resolver = Resolver::new(settings_dir?.path.clone());
    let outcome = resolver.init("locustfile", &RequiredKeys::default());
    ensure!(matches!(outcome, Err(SettingsError::InvalidCallerId { .. })));
    Ok(())
}
