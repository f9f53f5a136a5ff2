use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::NewsletterResult;
use crate::storage::traits::{ChannelMap, ChannelRepository};

/// Channel records stored as one pretty-printed JSON object
pub struct JsonChannelRepository {
    path: PathBuf,
}

impl JsonChannelRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

impl ChannelRepository for JsonChannelRepository {
    fn load(&self) -> NewsletterResult<ChannelMap> {
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, channels: &ChannelMap) -> NewsletterResult<()> {
        let json = serde_json::to_string_pretty(channels)?;

        // Write beside the target so the rename stays on one filesystem
        let mut file = NamedTempFile::new_in(self.parent_dir())?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}
