//! The coordination-service read capability consumed by the snapshot, plus the stores that back it.
mod accessor;
mod grpc_store;
mod in_memory;
mod property;
mod server;
mod shutdown;
mod store;

pub use accessor::ClusterDataAccessor;
pub use grpc_store::ConnectError;
pub use grpc_store::GrpcCoordinationStore;
pub use in_memory::InMemoryCoordinationStore;
pub use property::PathError;
pub use property::PropertyType;
pub use server::CoordinationRpcServer;
pub use shutdown::shutdown_signal;
pub use shutdown::RpcServerShutdownHandle;
pub use shutdown::RpcServerShutdownSignal;
pub use store::CoordinationError;
pub use store::CoordinationStore;
