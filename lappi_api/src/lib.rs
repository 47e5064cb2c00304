//! Client side of the Lappi remote API.
//!
//! [`RpcClient`] is the transport seam: a generic `method + params` call plus
//! file URL construction. [`HttpRpcClient`] implements it over HTTP and
//! [`LappiApi`] layers the collection convenience calls on top of any client.
//! [`host`] decides which host the client talks to.

mod client;
mod collection;
mod error;
pub mod host;
#[cfg(not(target_arch = "wasm32"))]
mod transport;

pub use client::{RpcClient, RpcFuture, decode_response};
pub use collection::{
    FolderId, GET_INTERNAL_PATH, GET_PICTURE_DESCRIPTOR, INTERNAL_FILES_NAMESPACE, InternalFileId,
    InternalPath, LappiApi, PictureDescriptor, PictureId, PictureType,
};
pub use error::ApiError;
pub use host::{DevHost, PageLocation};
#[cfg(not(target_arch = "wasm32"))]
pub use transport::HttpRpcClient;
