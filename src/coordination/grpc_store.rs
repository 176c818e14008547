use crate::coordination::{CoordinationError, CoordinationStore};
use crate::grpc::grpc_coordination_client::GrpcCoordinationClient;
use crate::grpc::{
    proto_get_children_result, proto_get_result, proto_remove_result, proto_set_result, ProtoGetChildrenReq,
    ProtoGetReq, ProtoRemoveReq, ProtoSetReq, ProtoStoreFault,
};
use bytes::Bytes;
use std::error::Error;
use std::net::Ipv4Addr;
use tonic::codegen::http::uri;
use tonic::transport::{Channel, Endpoint};

/// GrpcCoordinationStore reads and writes a remote coordination service over gRPC.
#[derive(Clone)]
pub struct GrpcCoordinationStore {
    logger: slog::Logger,
    inner: GrpcCoordinationClient<Channel>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("invalid coordination service uri")]
    InvalidUri(uri::InvalidUri),
    #[error("failed to connect to coordination service")]
    ConnectFailure(Box<dyn Error + Send + Sync>),
}

impl GrpcCoordinationStore {
    pub async fn connect(logger: slog::Logger, ip: Ipv4Addr, port: u16) -> Result<Self, ConnectError> {
        let url = format!("http://{}:{}", ip, port);
        slog::info!(logger, "Connecting to coordination service at {} ...", url);
        let endpoint = Endpoint::from_shared(url)?;

        let connection = endpoint.connect().await?;

        Ok(GrpcCoordinationStore {
            logger,
            inner: GrpcCoordinationClient::new(connection),
        })
    }

    // The generated client needs `&mut self`; clones share the underlying channel.
    fn client(&self) -> GrpcCoordinationClient<Channel> {
        self.inner.clone()
    }
}

fn fault(payload: ProtoStoreFault) -> CoordinationError {
    CoordinationError::StoreFault(payload.message)
}

fn malformed(rpc: &str) -> CoordinationError {
    CoordinationError::StoreFault(format!("Malformed {} result", rpc))
}

#[async_trait::async_trait]
impl CoordinationStore for GrpcCoordinationStore {
    async fn get(&self, path: &str) -> Result<Option<Bytes>, CoordinationError> {
        let rpc_request = ProtoGetReq { path: path.to_string() };
        slog::debug!(self.logger, "ClientWire - {:?}", rpc_request);
        let rpc_reply = self.client().get(rpc_request).await?.into_inner();
        slog::debug!(self.logger, "ClientWire - {:?}", rpc_reply);

        match rpc_reply.result {
            Some(proto_get_result::Result::Found(node)) => Ok(Some(Bytes::from(node.data))),
            Some(proto_get_result::Result::Missing(_)) => Ok(None),
            Some(proto_get_result::Result::Fault(payload)) => Err(fault(payload)),
            None => Err(malformed("Get")),
        }
    }

    async fn get_children(&self, path: &str) -> Result<Vec<String>, CoordinationError> {
        let rpc_request = ProtoGetChildrenReq { path: path.to_string() };
        slog::debug!(self.logger, "ClientWire - {:?}", rpc_request);
        let rpc_reply = self.client().get_children(rpc_request).await?.into_inner();
        slog::debug!(self.logger, "ClientWire - {:?}", rpc_reply);

        match rpc_reply.result {
            Some(proto_get_children_result::Result::Ok(children)) => Ok(children.names),
            Some(proto_get_children_result::Result::Fault(payload)) => Err(fault(payload)),
            None => Err(malformed("GetChildren")),
        }
    }

    async fn set(&self, path: &str, data: Bytes) -> Result<(), CoordinationError> {
        let rpc_request = ProtoSetReq {
            path: path.to_string(),
            data: data.to_vec(),
        };
        let rpc_reply = self.client().set(rpc_request).await?.into_inner();

        match rpc_reply.result {
            Some(proto_set_result::Result::Ok(_)) => Ok(()),
            Some(proto_set_result::Result::Fault(payload)) => Err(fault(payload)),
            None => Err(malformed("Set")),
        }
    }

    async fn remove(&self, path: &str) -> Result<(), CoordinationError> {
        let rpc_request = ProtoRemoveReq { path: path.to_string() };
        let rpc_reply = self.client().remove(rpc_request).await?.into_inner();

        match rpc_reply.result {
            Some(proto_remove_result::Result::Ok(_)) => Ok(()),
            Some(proto_remove_result::Result::Fault(payload)) => Err(fault(payload)),
            None => Err(malformed("Remove")),
        }
    }
}

impl From<uri::InvalidUri> for ConnectError {
    fn from(e: uri::InvalidUri) -> Self {
        ConnectError::InvalidUri(e)
    }
}

impl From<tonic::transport::Error> for ConnectError {
    fn from(e: tonic::transport::Error) -> Self {
        ConnectError::ConnectFailure(e.into())
    }
}
