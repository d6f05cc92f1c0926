use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::domain::models::Action;
use crate::domain::models::DictionaryClientBox;
use crate::domain::models::Event;
use crate::domain::models::SearchOutcome;

#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

/// Runs one lookup to completion and folds the result into an outcome.
pub async fn lookup(dictionary_client: &DictionaryClientBox, term: &str) -> SearchOutcome {
    let res = dictionary_client.define(term).await;
    match &res {
        Ok(entries) => {
            tracing::info!(
                dictionary = %dictionary_client.name(),
                term = term,
                count = entries.len(),
                "query completed"
            );
        }
        Err(err) => {
            tracing::error!(
                dictionary = %dictionary_client.name(),
                term = term,
                error = ?err,
                "query failed"
            );
        }
    }

    return SearchOutcome::from(res);
}

fn spawn_query(
    dictionary_client: Arc<DictionaryClientBox>,
    term: String,
    event_tx: mpsc::UnboundedSender<Event>,
) -> JoinHandle<Result<()>> {
    return tokio::spawn(async move {
        let outcome = lookup(&dictionary_client, &term).await;
        event_tx.send(Event::QueryCompleted(outcome))?;
        Ok(())
    });
}

pub struct ActionsService {}

impl ActionsService {
    /// Spawns a detached worker per query. Workers are never aborted, so overlapping
    /// queries race and the completion processed last wins.
    pub async fn start(
        dictionary_client: DictionaryClientBox,
        event_tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        let dictionary_client_arc = Arc::new(dictionary_client);

        while let Some(action) = rx.recv().await {
            match action {
                Action::Query(term) => {
                    spawn_query(dictionary_client_arc.clone(), term, event_tx.clone());
                }
            }
        }

        tracing::debug!("action channel closed");
        return Ok(());
    }
}
