// ---- Generic record ----

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRecord {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(map = "string, string", tag = "2")]
    pub simple_fields:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
    #[prost(map = "string, message", tag = "3")]
    pub list_fields: ::std::collections::HashMap<::prost::alloc::string::String, ProtoStringList>,
    #[prost(map = "string, message", tag = "4")]
    pub map_fields: ::std::collections::HashMap<::prost::alloc::string::String, ProtoStringMap>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStringList {
    #[prost(string, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStringMap {
    #[prost(map = "string, string", tag = "1")]
    pub entries:
        ::std::collections::HashMap<::prost::alloc::string::String, ::prost::alloc::string::String>,
}
// ---- Get ----

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetReq {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetResult {
    #[prost(oneof = "proto_get_result::Result", tags = "1, 2, 3")]
    pub result: ::core::option::Option<proto_get_result::Result>,
}
/// Nested message and enum types in `ProtoGetResult`.
pub mod proto_get_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Found(super::ProtoNodeData),
        #[prost(message, tag = "2")]
        Missing(super::ProtoNodeMissing),
        #[prost(message, tag = "3")]
        Fault(super::ProtoStoreFault),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNodeData {
    #[prost(bytes = "vec", tag = "1")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoNodeMissing {}
// ---- GetChildren ----

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetChildrenReq {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoGetChildrenResult {
    #[prost(oneof = "proto_get_children_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_get_children_result::Result>,
}
/// Nested message and enum types in `ProtoGetChildrenResult`.
pub mod proto_get_children_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoChildNames),
        #[prost(message, tag = "2")]
        Fault(super::ProtoStoreFault),
    }
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoChildNames {
    #[prost(string, repeated, tag = "1")]
    pub names: ::prost::alloc::vec::Vec<::prost::alloc::string::String>,
}
// ---- Set ----

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSetReq {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "2")]
    pub data: ::prost::alloc::vec::Vec<u8>,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoSetResult {
    #[prost(oneof = "proto_set_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_set_result::Result>,
}
/// Nested message and enum types in `ProtoSetResult`.
pub mod proto_set_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoWriteSuccess),
        #[prost(message, tag = "2")]
        Fault(super::ProtoStoreFault),
    }
}
// ---- Remove ----

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRemoveReq {
    #[prost(string, tag = "1")]
    pub path: ::prost::alloc::string::String,
}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoRemoveResult {
    #[prost(oneof = "proto_remove_result::Result", tags = "1, 2")]
    pub result: ::core::option::Option<proto_remove_result::Result>,
}
/// Nested message and enum types in `ProtoRemoveResult`.
pub mod proto_remove_result {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Result {
        #[prost(message, tag = "1")]
        Ok(super::ProtoWriteSuccess),
        #[prost(message, tag = "2")]
        Fault(super::ProtoStoreFault),
    }
}
/// Empty
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoWriteSuccess {}
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProtoStoreFault {
    #[prost(string, tag = "1")]
    pub message: ::prost::alloc::string::String,
}
#[doc = r" Generated client implementations."]
pub mod grpc_coordination_client {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = " Read/write surface of a hierarchical coordination store. Paths are absolute, '/'-separated."]
    pub struct GrpcCoordinationClient<T> {
        inner: tonic::client::Grpc<T>,
    }
    impl GrpcCoordinationClient<tonic::transport::Channel> {
        #[doc = r" Attempt to create a new client by connecting to a given endpoint."]
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: std::convert::TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }
    impl<T> GrpcCoordinationClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + HttpBody + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as HttpBody>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = tonic::client::Grpc::with_interceptor(inner, interceptor);
            Self { inner }
        }
        pub async fn get(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetReq>,
        ) -> Result<tonic::Response<super::ProtoGetResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcCoordination/Get");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn get_children(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoGetChildrenReq>,
        ) -> Result<tonic::Response<super::ProtoGetChildrenResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcCoordination/GetChildren");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn set(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoSetReq>,
        ) -> Result<tonic::Response<super::ProtoSetResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = http::uri::PathAndQuery::from_static("/coordination.GrpcCoordination/Set");
            self.inner.unary(request.into_request(), path, codec).await
        }
        pub async fn remove(
            &mut self,
            request: impl tonic::IntoRequest<super::ProtoRemoveReq>,
        ) -> Result<tonic::Response<super::ProtoRemoveResult>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path =
                http::uri::PathAndQuery::from_static("/coordination.GrpcCoordination/Remove");
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
    impl<T: Clone> Clone for GrpcCoordinationClient<T> {
        fn clone(&self) -> Self {
            Self {
                inner: self.inner.clone(),
            }
        }
    }
    impl<T> std::fmt::Debug for GrpcCoordinationClient<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "GrpcCoordinationClient {{ ... }}")
        }
    }
}
#[doc = r" Generated server implementations."]
pub mod grpc_coordination_server {
    #![allow(unused_variables, dead_code, missing_docs)]
    use tonic::codegen::*;
    #[doc = "Generated trait containing gRPC methods that should be implemented for use with GrpcCoordinationServer."]
    #[async_trait]
    pub trait GrpcCoordination: Send + Sync + 'static {
        async fn get(
            &self,
            request: tonic::Request<super::ProtoGetReq>,
        ) -> Result<tonic::Response<super::ProtoGetResult>, tonic::Status>;
        async fn get_children(
            &self,
            request: tonic::Request<super::ProtoGetChildrenReq>,
        ) -> Result<tonic::Response<super::ProtoGetChildrenResult>, tonic::Status>;
        async fn set(
            &self,
            request: tonic::Request<super::ProtoSetReq>,
        ) -> Result<tonic::Response<super::ProtoSetResult>, tonic::Status>;
        async fn remove(
            &self,
            request: tonic::Request<super::ProtoRemoveReq>,
        ) -> Result<tonic::Response<super::ProtoRemoveResult>, tonic::Status>;
    }
    #[doc = " Read/write surface of a hierarchical coordination store. Paths are absolute, '/'-separated."]
    #[derive(Debug)]
    pub struct GrpcCoordinationServer<T: GrpcCoordination> {
        inner: _Inner<T>,
    }
    struct _Inner<T>(Arc<T>, Option<tonic::Interceptor>);
    impl<T: GrpcCoordination> GrpcCoordinationServer<T> {
        pub fn new(inner: T) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, None);
            Self { inner }
        }
        pub fn with_interceptor(inner: T, interceptor: impl Into<tonic::Interceptor>) -> Self {
            let inner = Arc::new(inner);
            let inner = _Inner(inner, Some(interceptor.into()));
            Self { inner }
        }
    }
    impl<T, B> Service<http::Request<B>> for GrpcCoordinationServer<T>
    where
        T: GrpcCoordination,
        B: HttpBody + Send + Sync + 'static,
        B::Error: Into<StdError> + Send + 'static,
    {
        type Response = http::Response<tonic::body::BoxBody>;
        type Error = Never;
        type Future = BoxFuture<Self::Response, Self::Error>;
        fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }
        fn call(&mut self, req: http::Request<B>) -> Self::Future {
            let inner = self.inner.clone();
            match req.uri().path() {
                "/coordination.GrpcCoordination/Get" => {
                    #[allow(non_camel_case_types)]
                    struct GetSvc<T: GrpcCoordination>(pub Arc<T>);
                    impl<T: GrpcCoordination> tonic::server::UnaryService<super::ProtoGetReq> for GetSvc<T> {
                        type Response = super::ProtoGetResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcCoordination/GetChildren" => {
                    #[allow(non_camel_case_types)]
                    struct GetChildrenSvc<T: GrpcCoordination>(pub Arc<T>);
                    impl<T: GrpcCoordination>
                        tonic::server::UnaryService<super::ProtoGetChildrenReq>
                        for GetChildrenSvc<T>
                    {
                        type Response = super::ProtoGetChildrenResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoGetChildrenReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).get_children(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = GetChildrenSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcCoordination/Set" => {
                    #[allow(non_camel_case_types)]
                    struct SetSvc<T: GrpcCoordination>(pub Arc<T>);
                    impl<T: GrpcCoordination> tonic::server::UnaryService<super::ProtoSetReq> for SetSvc<T> {
                        type Response = super::ProtoSetResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoSetReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).set(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = SetSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                "/coordination.GrpcCoordination/Remove" => {
                    #[allow(non_camel_case_types)]
                    struct RemoveSvc<T: GrpcCoordination>(pub Arc<T>);
                    impl<T: GrpcCoordination> tonic::server::UnaryService<super::ProtoRemoveReq> for RemoveSvc<T> {
                        type Response = super::ProtoRemoveResult;
                        type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;
                        fn call(
                            &mut self,
                            request: tonic::Request<super::ProtoRemoveReq>,
                        ) -> Self::Future {
                            let inner = self.0.clone();
                            let fut = async move { (*inner).remove(request).await };
                            Box::pin(fut)
                        }
                    }
                    let inner = self.inner.clone();
                    let fut = async move {
                        let interceptor = inner.1.clone();
                        let inner = inner.0;
                        let method = RemoveSvc(inner);
                        let codec = tonic::codec::ProstCodec::default();
                        let mut grpc = if let Some(interceptor) = interceptor {
                            tonic::server::Grpc::with_interceptor(codec, interceptor)
                        } else {
                            tonic::server::Grpc::new(codec)
                        };
                        let res = grpc.unary(method, req).await;
                        Ok(res)
                    };
                    Box::pin(fut)
                }
                _ => Box::pin(async move {
                    Ok(http::Response::builder()
                        .status(200)
                        .header("grpc-status", "12")
                        .header("content-type", "application/grpc")
                        .body(tonic::body::BoxBody::empty())
                        .unwrap())
                }),
            }
        }
    }
    impl<T: GrpcCoordination> Clone for GrpcCoordinationServer<T> {
        fn clone(&self) -> Self {
            let inner = self.inner.clone();
            Self { inner }
        }
    }
    impl<T: GrpcCoordination> Clone for _Inner<T> {
        fn clone(&self) -> Self {
            Self(self.0.clone(), self.1.clone())
        }
    }
    impl<T: std::fmt::Debug> std::fmt::Debug for _Inner<T> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:?}", self.0)
        }
    }
    impl<T: GrpcCoordination> tonic::transport::NamedService for GrpcCoordinationServer<T> {
        const NAME: &'static str = "coordination.GrpcCoordination";
    }
}
