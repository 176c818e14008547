use crate::coordination::{CoordinationError, CoordinationStore, RpcServerShutdownSignal};
use crate::grpc::grpc_coordination_server::{GrpcCoordination, GrpcCoordinationServer};
use crate::grpc::{
    proto_get_children_result, proto_get_result, proto_remove_result, proto_set_result, ProtoChildNames,
    ProtoGetChildrenReq, ProtoGetChildrenResult, ProtoGetReq, ProtoGetResult, ProtoNodeData, ProtoNodeMissing,
    ProtoRemoveReq, ProtoRemoveResult, ProtoSetReq, ProtoSetResult, ProtoStoreFault, ProtoWriteSuccess,
};
use bytes::Bytes;
use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tonic::{Request, Response, Status};

/// CoordinationRpcServer exposes any `CoordinationStore` over the `GrpcCoordination` interface.
pub struct CoordinationRpcServer<S: CoordinationStore> {
    logger: slog::Logger,
    store: Arc<S>,
}

impl<S: CoordinationStore + 'static> CoordinationRpcServer<S> {
    pub fn new(logger: slog::Logger, store: Arc<S>) -> Self {
        CoordinationRpcServer { logger, store }
    }

    pub async fn run(self, socket_addr: SocketAddr, shutdown_signal: RpcServerShutdownSignal) {
        let logger = self.logger.clone();
        slog::info!(logger, "Listening on '{:?}'", socket_addr);

        let result = Server::builder()
            .add_service(GrpcCoordinationServer::new(self))
            .serve_with_shutdown(socket_addr, shutdown_signal)
            .await;

        slog::info!(logger, "Server run() has exited: {:?}", result);
    }

    fn validate_path(path: &str) -> Result<(), Status> {
        if !path.starts_with('/') {
            return Err(Status::invalid_argument(format!("Path '{}' is not absolute", path)));
        }
        Ok(())
    }

    fn convert_fault(e: CoordinationError) -> ProtoStoreFault {
        ProtoStoreFault { message: e.to_string() }
    }
}

#[async_trait::async_trait]
impl<S: CoordinationStore + 'static> GrpcCoordination for CoordinationRpcServer<S> {
    async fn get(&self, rpc_request_wrapped: Request<ProtoGetReq>) -> Result<Response<ProtoGetResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        Self::validate_path(&rpc_request.path)?;

        let result = match self.store.get(&rpc_request.path).await {
            Ok(Some(data)) => proto_get_result::Result::Found(ProtoNodeData { data: data.to_vec() }),
            Ok(None) => proto_get_result::Result::Missing(ProtoNodeMissing {
                // Empty
            }),
            Err(e) => proto_get_result::Result::Fault(Self::convert_fault(e)),
        };

        Ok(Response::new(ProtoGetResult { result: Some(result) }))
    }

    async fn get_children(
        &self,
        rpc_request_wrapped: Request<ProtoGetChildrenReq>,
    ) -> Result<Response<ProtoGetChildrenResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        Self::validate_path(&rpc_request.path)?;

        let result = match self.store.get_children(&rpc_request.path).await {
            Ok(names) => proto_get_children_result::Result::Ok(ProtoChildNames { names }),
            Err(e) => proto_get_children_result::Result::Fault(Self::convert_fault(e)),
        };

        Ok(Response::new(ProtoGetChildrenResult { result: Some(result) }))
    }

    async fn set(&self, rpc_request_wrapped: Request<ProtoSetReq>) -> Result<Response<ProtoSetResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - set '{}'", rpc_request.path);
        Self::validate_path(&rpc_request.path)?;

        let result = match self.store.set(&rpc_request.path, Bytes::from(rpc_request.data)).await {
            Ok(()) => proto_set_result::Result::Ok(ProtoWriteSuccess {
                // Empty
            }),
            Err(e) => proto_set_result::Result::Fault(Self::convert_fault(e)),
        };

        Ok(Response::new(ProtoSetResult { result: Some(result) }))
    }

    async fn remove(&self, rpc_request_wrapped: Request<ProtoRemoveReq>) -> Result<Response<ProtoRemoveResult>, Status> {
        let rpc_request = rpc_request_wrapped.into_inner();
        slog::debug!(self.logger, "ServerWire - {:?}", rpc_request);
        Self::validate_path(&rpc_request.path)?;

        let result = match self.store.remove(&rpc_request.path).await {
            Ok(()) => proto_remove_result::Result::Ok(ProtoWriteSuccess {
                // Empty
            }),
            Err(e) => proto_remove_result::Result::Fault(Self::convert_fault(e)),
        };

        Ok(Response::new(ProtoRemoveResult { result: Some(result) }))
    }
}
