mod cache;
mod snapshot;

pub use cache::ClusterDataCache;
pub use cache::RefreshError;
pub use snapshot::ClusterSnapshot;
