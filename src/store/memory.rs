//! In-memory dare store.
//!
//! Every mutation happens under one write lock, which gives the same
//! atomicity the database constraints give `PgDareStore`. Nothing survives a
//! restart. Used as the test double for `PgDareStore`.

use crate::{
    error::AppError,
    models::{dare::Dare, message::Message},
    store::DareStore,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Messages of each live dare, in arrival order.
#[derive(Debug, Default)]
pub struct MemoryDareStore {
    dares: RwLock<HashMap<Uuid, Vec<Message>>>,
}

impl MemoryDareStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DareStore for MemoryDareStore {
    async fn create_dare(&self) -> Result<Dare, AppError> {
        let dare = Dare::new();
        self.dares.write().await.insert(dare.id, Vec::new());
        Ok(dare)
    }

    async fn dare_exists(&self, dare_id: Uuid) -> Result<bool, AppError> {
        Ok(self.dares.read().await.contains_key(&dare_id))
    }

    async fn insert_message(&self, message: Message) -> Result<Message, AppError> {
        let mut dares = self.dares.write().await;
        let messages = dares
            .get_mut(&message.dare_id)
            .ok_or(AppError::DareNotFound)?;

        if messages
            .iter()
            .any(|m| m.sender_fingerprint == message.sender_fingerprint)
        {
            return Err(AppError::DuplicateSender);
        }

        messages.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self, dare_id: Uuid) -> Result<Vec<Message>, AppError> {
        let dares = self.dares.read().await;
        let stored = dares.get(&dare_id).ok_or(AppError::DareNotFound)?;

        // Newest arrivals first, then a stable sort keeps that order for equal timestamps
        let mut messages: Vec<Message> = stored.iter().rev().cloned().collect();
        messages.sort_by(|a, b| b.sent_at.cmp(&a.sent_at));
        Ok(messages)
    }

    async fn delete_dare(&self, dare_id: Uuid) -> Result<bool, AppError> {
        Ok(self.dares.write().await.remove(&dare_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::message::MessageBody;
    use std::sync::Arc;

    fn message(dare_id: Uuid, text: &str, fingerprint: &str) -> Message {
        Message::new(
            dare_id,
            MessageBody::parse(Some(text)).unwrap(),
            fingerprint.to_string(),
        )
    }

    #[tokio::test]
    async fn unknown_dare_does_not_exist() {
        let store = MemoryDareStore::new();
        assert!(!store.dare_exists(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn created_dare_exists_and_is_empty() {
        let store = MemoryDareStore::new();
        let dare = store.create_dare().await.unwrap();

        assert!(store.dare_exists(dare.id).await.unwrap());
        assert!(store.list_messages(dare.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn insert_into_unknown_dare_is_not_found() {
        let store = MemoryDareStore::new();
        let result = store.insert_message(message(Uuid::new_v4(), "hi", "a")).await;
        assert!(matches!(result, Err(AppError::DareNotFound)));
    }

    #[tokio::test]
    async fn same_fingerprint_is_rejected_per_dare_only() {
        let store = MemoryDareStore::new();
        let first = store.create_dare().await.unwrap();
        let second = store.create_dare().await.unwrap();

        store.insert_message(message(first.id, "hi", "a")).await.unwrap();
        assert!(matches!(
            store.insert_message(message(first.id, "again", "a")).await,
            Err(AppError::DuplicateSender)
        ));
        // Same sender on another dare is fine
        store.insert_message(message(second.id, "hi", "a")).await.unwrap();

        assert_eq!(store.list_messages(first.id).await.unwrap().len(), 1);
        assert_eq!(store.list_messages(first.id).await.unwrap()[0].body, "hi");
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let store = MemoryDareStore::new();
        let dare = store.create_dare().await.unwrap();

        let mut ids = Vec::new();
        for sender in ["a", "b", "c"] {
            let stored = store
                .insert_message(message(dare.id, "hi", sender))
                .await
                .unwrap();
            ids.push(stored.id);
        }
        ids.reverse();

        let listed: Vec<Uuid> = store
            .list_messages(dare.id)
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn delete_removes_dare_and_messages() {
        let store = MemoryDareStore::new();
        let dare = store.create_dare().await.unwrap();
        store.insert_message(message(dare.id, "hi", "a")).await.unwrap();

        assert!(store.delete_dare(dare.id).await.unwrap());
        assert!(!store.dare_exists(dare.id).await.unwrap());
        assert!(matches!(
            store.list_messages(dare.id).await,
            Err(AppError::DareNotFound)
        ));
        // Second delete is a no-op
        assert!(!store.delete_dare(dare.id).await.unwrap());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_sends_from_one_sender_store_one_message() {
        let store = Arc::new(MemoryDareStore::new());
        let dare = store.create_dare().await.unwrap();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store
                        .insert_message(message(dare.id, &format!("try {}", i), "same"))
                        .await
                })
            })
            .collect();

        let mut stored = 0;
        let mut rejected = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => stored += 1,
                Err(AppError::DuplicateSender) => rejected += 1,
                Err(e) => panic!("unexpected error: {}", e),
            }
        }

        assert_eq!(stored, 1);
        assert_eq!(rejected, 15);
        assert_eq!(store.list_messages(dare.id).await.unwrap().len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn sends_and_lists_racing_a_delete_see_all_or_nothing() {
        let store = Arc::new(MemoryDareStore::new());
        let dare = store.create_dare().await.unwrap();
        store
            .insert_message(message(dare.id, "early", "early"))
            .await
            .unwrap();

        let mut sends = Vec::new();
        let mut lists = Vec::new();
        for i in 0..8 {
            let sender = Arc::clone(&store);
            sends.push(tokio::spawn(async move {
                sender
                    .insert_message(message(dare.id, "racing", &format!("sender-{}", i)))
                    .await
            }));
            let lister = Arc::clone(&store);
            lists.push(tokio::spawn(async move { lister.list_messages(dare.id).await }));
        }
        let deleter = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.delete_dare(dare.id).await })
        };

        assert!(deleter.await.unwrap().unwrap());

        for send in sends {
            match send.await.unwrap() {
                Ok(stored) => assert_eq!(stored.dare_id, dare.id),
                Err(AppError::DareNotFound) => {}
                Err(e) => panic!("unexpected send error: {}", e),
            }
        }
        for list in lists {
            match list.await.unwrap() {
                Ok(messages) => {
                    assert!(messages.iter().any(|m| m.body == "early"));
                    assert!(messages.iter().all(|m| m.dare_id == dare.id));
                }
                Err(AppError::DareNotFound) => {}
                Err(e) => panic!("unexpected list error: {}", e),
            }
        }

        // Nothing left behind under the deleted id
        assert!(!store.dare_exists(dare.id).await.unwrap());
        assert!(!store.dares.read().await.contains_key(&dare.id));
        assert!(matches!(
            store.insert_message(message(dare.id, "late", "late")).await,
            Err(AppError::DareNotFound)
        ));
    }
}
