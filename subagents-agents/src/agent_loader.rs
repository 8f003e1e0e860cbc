//! Loads agent definitions from a directory on disk

use crate::agent::AgentDefinition;
use crate::naming::validate_agent_name;
use crate::{AgentError, Result};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use subagents_common::constants::AGENT_FILE_EXTENSIONS;

/// Reads agent definition files from one directory
///
/// Every call rescans the directory and reparses every file, so edits on disk
/// are visible on the next call.
#[derive(Debug, Clone)]
pub struct AgentLoader {
    agents_dir: PathBuf,
}

impl AgentLoader {
    pub fn new(agents_dir: impl Into<PathBuf>) -> Self {
        Self {
            agents_dir: agents_dir.into(),
        }
    }

    /// The directory this loader scans
    pub fn agents_dir(&self) -> &Path {
        &self.agents_dir
    }

    /// Scan the directory and return every agent it defines
    ///
    /// Files are visited in file-name order. When two files derive the same
    /// agent name the later file replaces the earlier one in place. A file
    /// that cannot be read is logged and skipped; a directory that cannot be
    /// listed is an error.
    pub async fn list_agents(&self) -> Result<Vec<AgentDefinition>> {
        let files = self.definition_files().await?;

        let mut agents: Vec<AgentDefinition> = Vec::with_capacity(files.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for path in files {
            let agent = match load_definition(&path).await {
                Ok(agent) => agent,
                Err(e) => {
                    tracing::warn!("⚠️ Skipping agent file {}: {}", path.display(), e);
                    continue;
                }
            };

            match positions.get(&agent.name) {
                Some(&index) => agents[index] = agent,
                None => {
                    positions.insert(agent.name.clone(), agents.len());
                    agents.push(agent);
                }
            }
        }

        tracing::debug!(
            "Loaded {} agents from {}",
            agents.len(),
            self.agents_dir.display()
        );
        Ok(agents)
    }

    /// Look up one agent by its derived name
    ///
    /// The name is validated before the scan. Returns `Ok(None)` when no
    /// agent has that name.
    pub async fn get_agent(&self, name: &str) -> Result<Option<AgentDefinition>> {
        validate_agent_name(name)?;
        Ok(self
            .list_agents()
            .await?
            .into_iter()
            .find(|agent| agent.name == name))
    }

    /// Candidate definition files, sorted by file name
    async fn definition_files(&self) -> Result<Vec<PathBuf>> {
        let directory_error = |source| AgentError::DirectoryRead {
            path: self.agents_dir.clone(),
            source,
        };

        let mut entries = tokio::fs::read_dir(&self.agents_dir)
            .await
            .map_err(directory_error)?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(directory_error)? {
            let path = entry.path();
            if has_definition_extension(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn has_definition_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| AGENT_FILE_EXTENSIONS.contains(&ext))
}

async fn load_definition(path: &Path) -> Result<AgentDefinition> {
    let file_error = |source| AgentError::FileRead {
        path: path.to_path_buf(),
        source,
    };

    let metadata = tokio::fs::metadata(path).await.map_err(file_error)?;
    if !metadata.is_file() {
        return Err(file_error(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }
    let text = tokio::fs::read_to_string(path).await.map_err(file_error)?;
    let last_modified: DateTime<Utc> = metadata
        .modified()
        .map(DateTime::from)
        .unwrap_or_else(|_| Utc::now());

    let file_stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    Ok(AgentDefinition::parse(
        &file_stem,
        file_path,
        last_modified,
        &text,
    ))
}
