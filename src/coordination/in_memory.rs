use crate::coordination::{CoordinationError, CoordinationStore};
use bytes::Bytes;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

/// InMemoryCoordinationStore is a process-local store. Intermediate nodes exist implicitly: a
/// node is listed as a child as soon as anything is written at or below it.
#[derive(Default)]
pub struct InMemoryCoordinationStore {
    nodes: Mutex<BTreeMap<String, Bytes>>,
}

impl InMemoryCoordinationStore {
    pub fn new() -> Self {
        InMemoryCoordinationStore::default()
    }

    fn with_nodes<T>(&self, f: impl FnOnce(&mut BTreeMap<String, Bytes>) -> T) -> Result<T, CoordinationError> {
        let mut nodes = self
            .nodes
            .lock()
            .map_err(|_| CoordinationError::StoreFault("in-memory store mutex poisoned".into()))?;
        Ok(f(&mut nodes))
    }
}

fn child_prefix(path: &str) -> String {
    format!("{}/", path.trim_end_matches('/'))
}

#[async_trait::async_trait]
impl CoordinationStore for InMemoryCoordinationStore {
    async fn get(&self, path: &str) -> Result<Option<Bytes>, CoordinationError> {
        self.with_nodes(|nodes| nodes.get(path).cloned())
    }

    async fn get_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
        let prefix = child_prefix(path);
        self.with_nodes(|nodes| {
            let names: BTreeSet<String> = nodes
                .range(prefix.clone()..)
                .take_while(|(key, _)| key.starts_with(&prefix))
                .filter_map(|(key, _)| key[prefix.len()..].split('/').next().map(str::to_string))
                .filter(|name| !name.is_empty())
                .collect();
            names.into_iter().collect()
        })
    }

    async fn set(&self, path: &str, data: Bytes) -> Result<(), CoordinationError> {
        self.with_nodes(|nodes| {
            nodes.insert(path.to_string(), data);
        })
    }

    async fn remove(&self, path: &str) -> Result<(), CoordinationError> {
        let prefix = child_prefix(path);
        self.with_nodes(|nodes| {
            nodes.retain(|key, _| key != path && !key.starts_with(&prefix));
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_direct_children_including_implicit_parents() {
        let store = InMemoryCoordinationStore::new();
        store.set("/c/LIVEINSTANCES/localhost_0", Bytes::from("a")).await.unwrap();
        store.set("/c/LIVEINSTANCES/localhost_1", Bytes::from("b")).await.unwrap();
        store
            .set("/c/INSTANCES/localhost_0/MESSAGES/m1", Bytes::from("c"))
            .await
            .unwrap();

        assert_eq!(
            store.get_children("/c/LIVEINSTANCES").await.unwrap(),
            vec!["localhost_0".to_string(), "localhost_1".to_string()]
        );
        assert_eq!(store.get_children("/c").await.unwrap(), vec!["INSTANCES", "LIVEINSTANCES"]);
        assert!(store.get_children("/c/IDEALSTATES").await.unwrap().is_empty());
        assert_eq!(store.get("/c/INSTANCES").await.unwrap(), None);
    }

    #[tokio::test]
    async fn remove_is_recursive_and_prefix_safe() {
        let store = InMemoryCoordinationStore::new();
        store.set("/c/INSTANCES/localhost_1/MESSAGES/m1", Bytes::from("a")).await.unwrap();
        store.set("/c/INSTANCES/localhost_10/MESSAGES/m1", Bytes::from("b")).await.unwrap();

        store.remove("/c/INSTANCES/localhost_1").await.unwrap();
        store.remove("/c/does/not/exist").await.unwrap();

        assert_eq!(store.get_children("/c/INSTANCES").await.unwrap(), vec!["localhost_10"]);
    }
}
