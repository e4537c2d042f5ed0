use crate::games::models::GameMode;
use crate::scores::models::ScoreEntry;
use crate::storage::errors::ArchiveError;
use crate::storage::interface::IScoreArchive;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct InMemoryScoreArchive {
    storage: Arc<RwLock<Vec<ScoreEntry>>>,
}

impl IScoreArchive for InMemoryScoreArchive {
    async fn record(&self, entry: ScoreEntry) -> Result<(), ArchiveError> {
        self.storage.write().await.push(entry);
        Ok(())
    }

    async fn top_scores(&self, mode: Option<GameMode>, limit: usize) -> Vec<ScoreEntry> {
        let mut entries = self
            .storage
            .read()
            .await
            .iter()
            .filter(|entry| mode.map_or(true, |mode| entry.mode == mode))
            .cloned()
            .collect::<Vec<_>>();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries.truncate(limit);
        entries
    }
}
