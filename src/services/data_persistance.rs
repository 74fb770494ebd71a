use std::{fs, io::Write, path::PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;

use crate::{configuration::OutputSettings, domain::company_profile::CompanyProfile};

/// Writes the profile as pretty JSON, creating the output directory if needed.
///
/// The file is written next to its destination and renamed into place, so
/// readers never see a partial profile.
pub fn save_profile(profile: &CompanyProfile, output: &OutputSettings) -> anyhow::Result<PathBuf> {
    let directory = PathBuf::from(&output.directory);
    fs::create_dir_all(&directory)
        .with_context(|| format!("Failed to create output directory {:?}", directory))?;

    let path = directory.join(&output.file_name);
    let json = profile
        .to_pretty_json()
        .context("Failed to serialize company profile")?;

    let mut file = NamedTempFile::new_in(&directory)
        .with_context(|| format!("Failed to create temp file in {:?}", directory))?;
    file.write_all(json.as_bytes())
        .context("Failed to write profile to temp file")?;
    file.persist(&path)
        .with_context(|| format!("Failed to move profile into {:?}", path))?;

    log::info!("Company profile saved to {:?}", path);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::save_profile;
    use crate::{
        configuration::{BusinessSummaryTemplate, OutputSettings},
        domain::{page_map::PageMap, webpage::Document},
        services::assemble_profile,
    };

    #[test]
    fn writes_profile_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputSettings {
            directory: dir.path().join("nested/output").to_string_lossy().into_owned(),
            file_name: "company.json".to_string(),
            persist: true,
        };
        let profile = assemble_profile(
            "https://acme.io",
            &Document::parse("<title>Acme</title>"),
            &PageMap::default(),
            &BusinessSummaryTemplate::default(),
            &[],
        );

        let path = save_profile(&profile, &output).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert!(path.ends_with("company.json"));
        assert_eq!(written["identity"]["company_name"], "Acme");
        assert_eq!(written["metadata"]["errors"], "None");
    }

    #[test]
    fn overwrites_previous_profile_without_leftovers() {
        let dir = tempfile::tempdir().unwrap();
        let output = OutputSettings {
            directory: dir.path().to_string_lossy().into_owned(),
            file_name: "company.json".to_string(),
            persist: true,
        };
        let first = assemble_profile(
            "https://acme.io",
            &Document::parse("<title>Acme</title>"),
            &PageMap::default(),
            &BusinessSummaryTemplate::default(),
            &[],
        );
        let second = assemble_profile(
            "https://globex.io",
            &Document::parse("<title>Globex</title>"),
            &PageMap::default(),
            &BusinessSummaryTemplate::default(),
            &[],
        );

        save_profile(&first, &output).unwrap();
        let path = save_profile(&second, &output).unwrap();
        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entries = std::fs::read_dir(dir.path()).unwrap().count();

        assert_eq!(written["identity"]["company_name"], "Globex");
        assert_eq!(entries, 1);
    }
}
