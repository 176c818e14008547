use crate::coordination::{CoordinationError, CoordinationStore, PathError, PropertyType};
use crate::model::Entity;
use crate::record::{decode_record, encode_record, Record};
use std::collections::HashMap;

/// ClusterDataAccessor reads and writes one cluster's typed properties through a raw
/// `CoordinationStore`.
pub struct ClusterDataAccessor<S: CoordinationStore> {
    cluster_name: String,
    store: S,
}

impl<S: CoordinationStore> ClusterDataAccessor<S> {
    pub fn new(cluster_name: impl Into<String>, store: S) -> Self {
        ClusterDataAccessor {
            cluster_name: cluster_name.into(),
            store,
        }
    }

    pub fn cluster_name(&self) -> &str {
        &self.cluster_name
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every child of the `kind` collection addressed by `keys`, and parses each into `E`,
    /// keyed by the record's own name.
    ///
    /// A child that disappears between listing and reading it was deleted by a concurrent writer
    /// and is skipped. A child that fails to parse, or two children whose records carry the same
    /// name, fail the whole call.
    pub async fn list_and_parse<E: Entity>(
        &self,
        kind: PropertyType,
        keys: &[&str],
    ) -> Result<HashMap<String, E>, CoordinationError> {
        if kind.is_singleton() {
            return Err(PathError::NotACollection(kind).into());
        }

        let collection_path = kind.path(&self.cluster_name, keys)?;
        let child_names = self.store.get_children(&collection_path).await?;

        let mut entities = HashMap::with_capacity(child_names.len());
        let mut child_of_id: HashMap<String, String> = HashMap::with_capacity(child_names.len());
        for child_name in child_names {
            let child_path = format!("{}/{}", collection_path, child_name);
            let entity = match self.read_entity::<E>(&child_path).await? {
                Some(entity) => entity,
                None => continue,
            };

            let id = entity.id().to_string();
            if let Some(first) = child_of_id.insert(id.clone(), child_name.clone()) {
                return Err(CoordinationError::DuplicateId {
                    collection: collection_path,
                    id,
                    first,
                    second: child_name,
                });
            }
            entities.insert(id, entity);
        }

        Ok(entities)
    }

    /// Lists the values present in the store for the last key of `kind`, given the keys before it.
    /// For `CurrentStates` and an instance name, these are the sessions with a sub-tree.
    pub async fn list_keys(&self, kind: PropertyType, keys: &[&str]) -> Result<Vec<String>, CoordinationError> {
        let path = kind.key_parent_path(&self.cluster_name, keys)?;
        self.store.get_children(&path).await
    }

    /// Reads a singleton property. Absence is `Ok(None)`, not an error.
    pub async fn get_single<E: Entity>(&self, kind: PropertyType) -> Result<Option<E>, CoordinationError> {
        if !kind.is_singleton() {
            return Err(PathError::NotASingleton(kind).into());
        }

        let path = kind.path(&self.cluster_name, &[])?;
        self.read_entity(&path).await
    }

    /// Reads one child of the `kind` collection addressed by `keys`.
    pub async fn get_property<E: Entity>(
        &self,
        kind: PropertyType,
        keys: &[&str],
        id: &str,
    ) -> Result<Option<E>, CoordinationError> {
        let path = kind.child_path(&self.cluster_name, keys, id)?;
        self.read_entity(&path).await
    }

    /// Writes `record` into the `kind` collection addressed by `keys`, under the record's name.
    /// For singleton kinds `keys` must be empty and the record replaces the node's value.
    pub async fn set_property(&self, kind: PropertyType, keys: &[&str], record: &Record) -> Result<(), CoordinationError> {
        let path = if kind.is_singleton() {
            kind.path(&self.cluster_name, keys)?
        } else {
            kind.child_path(&self.cluster_name, keys, record.id())?
        };

        self.store.set(&path, encode_record(record)).await
    }

    pub async fn remove_property(&self, kind: PropertyType, keys: &[&str], id: &str) -> Result<(), CoordinationError> {
        let path = kind.child_path(&self.cluster_name, keys, id)?;
        self.store.remove(&path).await
    }

    async fn read_entity<E: Entity>(&self, path: &str) -> Result<Option<E>, CoordinationError> {
        let bytes = match self.store.get(path).await? {
            Some(bytes) => bytes,
            None => return Ok(None),
        };

        let to_error = |source| CoordinationError::Record {
            path: path.to_string(),
            source,
        };
        let record = decode_record(&bytes).map_err(to_error)?;
        let entity = E::from_record(record).map_err(to_error)?;

        Ok(Some(entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordination::InMemoryCoordinationStore;
    use crate::model::{Alerts, LiveInstance};
    use bytes::Bytes;

    fn live_instance(name: &str, session: &str) -> Record {
        let mut record = Record::new(name);
        record.set_simple_field("SESSION_ID", session);
        record
    }

    fn accessor() -> ClusterDataAccessor<InMemoryCoordinationStore> {
        ClusterDataAccessor::new("test-cluster", InMemoryCoordinationStore::new())
    }

    #[tokio::test]
    async fn list_and_parse_keys_by_record_name() {
        let accessor = accessor();
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance("localhost_0", "s0"))
            .await
            .unwrap();
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance("localhost_1", "s1"))
            .await
            .unwrap();

        let live: HashMap<String, LiveInstance> =
            accessor.list_and_parse(PropertyType::LiveInstances, &[]).await.unwrap();

        assert_eq!(live.len(), 2);
        assert_eq!(live["localhost_1"].session_id(), "s1");
    }

    #[tokio::test]
    async fn list_and_parse_fails_on_malformed_child() {
        let accessor = accessor();
        accessor
            .store()
            .set("/test-cluster/LIVEINSTANCES/localhost_0", Bytes::from_static(&[0xFF, 0x01]))
            .await
            .unwrap();

        let result = accessor
            .list_and_parse::<LiveInstance>(PropertyType::LiveInstances, &[])
            .await;

        assert!(matches!(result, Err(CoordinationError::Record { .. })));
    }

    /// Lists `phantom` as a child of every collection, but never has a value for it, like a
    /// node deleted between `get_children` and `get`.
    struct VanishingChildStore {
        inner: InMemoryCoordinationStore,
        phantom: &'static str,
    }

    #[async_trait::async_trait]
    impl CoordinationStore for VanishingChildStore {
        async fn get(&self, path: &str) -> Result<Option<Bytes>, CoordinationError> {
            self.inner.get(path).await
        }

        async fn get_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
            let mut children = self.inner.get_children(path).await?;
            children.push(self.phantom.to_string());
            Ok(children)
        }

        async fn set(&self, path: &str, data: Bytes) -> Result<(), CoordinationError> {
            self.inner.set(path, data).await
        }

        async fn remove(&self, path: &str) -> Result<(), CoordinationError> {
            self.inner.remove(path).await
        }
    }

    #[tokio::test]
    async fn list_and_parse_skips_child_deleted_after_listing() {
        let accessor = ClusterDataAccessor::new(
            "test-cluster",
            VanishingChildStore {
                inner: InMemoryCoordinationStore::new(),
                phantom: "localhost_9",
            },
        );
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance("localhost_0", "s0"))
            .await
            .unwrap();

        let live: HashMap<String, LiveInstance> =
            accessor.list_and_parse(PropertyType::LiveInstances, &[]).await.unwrap();

        assert_eq!(live.len(), 1);
        assert!(live.contains_key("localhost_0"));
        assert!(!live.contains_key("localhost_9"));
    }

    #[tokio::test]
    async fn list_and_parse_rejects_duplicate_record_names() {
        let accessor = accessor();
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance("localhost_0", "s0"))
            .await
            .unwrap();
        // Stored under a different child name, but the record still calls itself localhost_0.
        accessor
            .store()
            .set(
                "/test-cluster/LIVEINSTANCES/localhost_1",
                encode_record(&live_instance("localhost_0", "s1")),
            )
            .await
            .unwrap();

        let result = accessor
            .list_and_parse::<LiveInstance>(PropertyType::LiveInstances, &[])
            .await;

        match result {
            Err(CoordinationError::DuplicateId { id, first, second, .. }) => {
                assert_eq!(id, "localhost_0");
                assert_eq!((first.as_str(), second.as_str()), ("localhost_0", "localhost_1"));
            }
            other => panic!("expected duplicate id, got {:?}", other.map(|live| live.len())),
        }
    }

    #[tokio::test]
    async fn missing_singleton_is_none() {
        let accessor = accessor();
        let alerts: Option<Alerts> = accessor.get_single(PropertyType::Alerts).await.unwrap();
        assert!(alerts.is_none());

        let wrong_kind = accessor.get_single::<Alerts>(PropertyType::LiveInstances).await;
        assert!(matches!(wrong_kind, Err(CoordinationError::Path(PathError::NotASingleton(_)))));
    }

    #[tokio::test]
    async fn remove_property_deletes_child() {
        let accessor = accessor();
        accessor
            .set_property(PropertyType::LiveInstances, &[], &live_instance("localhost_0", "s0"))
            .await
            .unwrap();

        accessor
            .remove_property(PropertyType::LiveInstances, &[], "localhost_0")
            .await
            .unwrap();

        let live: Option<LiveInstance> = accessor
            .get_property(PropertyType::LiveInstances, &[], "localhost_0")
            .await
            .unwrap();
        assert!(live.is_none());
    }
}
