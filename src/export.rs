use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::ExportConfig;

/// Write a response body under the exports directory. The filename carries
/// the mode, a UTC timestamp, and a short random suffix against collisions.
pub fn save(config: &ExportConfig, mode: &str, body: &str) -> Result<PathBuf> {
    let dir = PathBuf::from(shellexpand::tilde(&config.dir).as_ref());
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

    let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S");
    let id = uuid::Uuid::new_v4().simple().to_string();
    let path = dir.join(format!("{}-{}-{}.md", mode, stamp, &id[..8]));

    fs::write(&path, body)
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saves_under_the_configured_dir_with_mode_prefix() {
        let dir = std::env::temp_dir().join(format!(
            "studybuddy_export_test_{}",
            uuid::Uuid::new_v4().simple()
        ));
        let config = ExportConfig {
            dir: dir.to_string_lossy().into_owned(),
        };

        let path = save(&config, "flashcards", "Q: What is X?\nA: X is Y").unwrap();

        assert!(path.starts_with(&dir));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("flashcards-"));
        assert!(name.ends_with(".md"));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Q: What is X?\nA: X is Y"
        );

        let _ = fs::remove_dir_all(&dir);
    }
}
