//! Rendering settings back into the on-disk multi-document format.

use serde_yaml::Mapping;

use crate::Settings;
use crate::error::SettingsError;

impl Settings {
    /// Render as multi-document YAML in the format [`Settings::parse`]
    /// accepts.
    ///
    /// The public document always follows an explicit `---` document-start
    /// marker and uses block style. The secret document is emitted as a
    /// second `---` document only when non-empty, so generated files never
    /// carry an explicit empty secrets marker.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Emit`] when the YAML emitter fails.
    pub fn dump(&self) -> Result<String, SettingsError> {
        let mut rendered = String::from("---\n");
        rendered.push_str(&emit(&self.public)?);
        if !self.secret.is_empty() {
            rendered.push_str("---\n");
            rendered.push_str(&emit(&self.secret)?);
        }
        Ok(rendered)
    }
}

fn emit(mapping: &Mapping) -> Result<String, SettingsError> {
    serde_yaml::to_string(mapping).map_err(|source| SettingsError::Emit { source })
}

#[cfg(test)]
mod tests {
    use anyhow::{Result, ensure};
    use rstest::rstest;
    use serde_yaml::Mapping;

    use crate::Settings;

    fn document_starts(rendered: &str) -> usize {
        rendered.lines().filter(|line| *line == "---").count()
    }

    #[rstest]
    fn output_opens_with_an_explicit_document_start() -> Result<()> {
        let settings = Settings::new(serde_yaml::from_str("a: 1")?, Mapping::new());
        ensure!(settings.dump()?.starts_with("---\n"));
        Ok(())
    }

    #[rstest]
    fn empty_secret_document_is_omitted() -> Result<()> {
        let settings = Settings::new(serde_yaml::from_str("a: 1")?, Mapping::new());
        let rendered = settings.dump()?;
        ensure!(document_starts(&rendered) == 1, "expected one document: {rendered}");
        Ok(())
    }

    #[rstest]
    fn populated_secret_document_is_emitted_second() -> Result<()> {
        let settings = Settings::new(
            serde_yaml::from_str("a: 1")?,
            serde_yaml::from_str("password: set-me")?,
        );
        let rendered = settings.dump()?;
        ensure!(document_starts(&rendered) == 2, "expected two documents: {rendered}");
        ensure!(rendered.contains("password: set-me"));
        Ok(())
    }

    #[rstest]
    fn empty_settings_render_as_a_single_empty_mapping() -> Result<()> {
        ensure!(Settings::default().dump()? == "---\n{}\n");
        Ok(())
    }

    #[rstest]
    fn nested_structures_use_block_style() -> Result<()> {
        let settings = Settings::new(
            serde_yaml::from_str("{outer: {inner: 1, other: [a, b]}}")?,
            Mapping::new(),
        );
        let rendered = settings.dump()?;
        ensure!(rendered.contains("outer:\n"), "expected block style: {rendered}");
        ensure!(rendered.contains("inner: 1"));
        Ok(())
    }
}
