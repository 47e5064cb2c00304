use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;
use std::sync::Arc;

use crate::{ApiError, RpcClient};

/// Opaque key of a file stored by the collection.
pub type InternalFileId = i64;
/// Picture key.
pub type PictureId = i64;
/// Collection folder key.
pub type FolderId = i64;

/// Resolves an internal file id to its storage path.
pub const GET_INTERNAL_PATH: &str = "lappi.collection.internal_files.get_internal_path";
/// Resolves a picture id to its descriptor.
pub const GET_PICTURE_DESCRIPTOR: &str = "lappi.collection.pictures.get_picture_descriptor";
/// Prefix under which the file server exposes internal storage paths.
pub const INTERNAL_FILES_NAMESPACE: &str = "lappi.collection.internal";

/// Slash-separated path relative to the collection storage root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalPath {
    path: String,
}

impl InternalPath {
    /// Wrap an existing path.
    pub fn from_string(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Append a segment.
    pub fn push(&mut self, segment: &str) {
        if !self.path.is_empty() {
            self.path.push('/');
        }

        self.path.push_str(segment);
    }

    /// Path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl From<InternalPath> for String {
    fn from(path: InternalPath) -> Self {
        path.path
    }
}

/// Stored picture formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs)]
pub enum PictureType {
    Jpg,
    Png,
    Gif,
    Webp,
    Bmp,
    Avif,
}

impl PictureType {
    /// Format for a file extension, case-insensitive.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::Webp),
            "bmp" => Some(Self::Bmp),
            "avif" => Some(Self::Avif),
            _ => None,
        }
    }

    /// Canonical file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpg => "jpg",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Webp => "webp",
            Self::Bmp => "bmp",
            Self::Avif => "avif",
        }
    }
}

/// Picture metadata as returned by [`GET_PICTURE_DESCRIPTOR`].
///
/// Only `internal_file_id` is required; the rest is informational.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PictureDescriptor {
    /// Picture key.
    #[serde(default)]
    pub picture_id: Option<PictureId>,
    /// Folder holding the picture.
    #[serde(default)]
    pub folder_id: Option<FolderId>,
    /// File backing the picture.
    pub internal_file_id: InternalFileId,
    /// Stored format.
    #[serde(default)]
    pub picture_type: Option<PictureType>,
}

/// Collection calls layered over an [`RpcClient`].
///
/// Cheap to clone; clones share the client. No caching and no retries: every
/// call goes to the server and its failures come back unchanged.
#[derive(Clone)]
pub struct LappiApi {
    client: Arc<dyn RpcClient>,
}

impl LappiApi {
    /// Layer the collection calls over `client`.
    pub fn new(client: Arc<dyn RpcClient>) -> Self {
        Self { client }
    }

    /// The underlying client.
    pub fn client(&self) -> &Arc<dyn RpcClient> {
        &self.client
    }

    /// Base address of the underlying client.
    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Typed remote call.
    pub async fn call<P, R>(&self, method: &str, params: &P) -> Result<R, ApiError>
    where
        P: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let params =
            serde_json::to_value(params).map_err(|e| ApiError::Serialization(e.to_string()))?;

        let value = self.client.send_request(method, params).await?;

        serde_json::from_value(value)
            .map_err(|e| ApiError::Deserialization(format!("{method}: {e}")))
    }

    /// Storage path of an internal file.
    pub async fn get_internal_path(&self, file_id: InternalFileId) -> Result<InternalPath, ApiError> {
        self.call(GET_INTERNAL_PATH, &json!({ "file_id": file_id }))
            .await
    }

    /// Descriptor of a picture.
    pub async fn get_picture_descriptor(
        &self,
        picture_id: PictureId,
    ) -> Result<PictureDescriptor, ApiError> {
        self.call(GET_PICTURE_DESCRIPTOR, &json!({ "picture_id": picture_id }))
            .await
    }

    /// Servable URL of an internal storage path. Pure, no I/O.
    pub fn internal_path_url(&self, path: &InternalPath) -> String {
        self.client
            .get_file_url(&format!("{INTERNAL_FILES_NAMESPACE}/{}", path.as_str()))
    }

    /// Servable URL of an internal file: path lookup, then URL construction.
    pub async fn get_internal_file_url(&self, file_id: InternalFileId) -> Result<String, ApiError> {
        let path = self.get_internal_path(file_id).await?;

        Ok(self.internal_path_url(&path))
    }

    /// Servable URL of a picture: descriptor lookup, then
    /// [`Self::get_internal_file_url`] on the file behind it.
    pub async fn get_picture_url(&self, picture_id: PictureId) -> Result<String, ApiError> {
        let descriptor = self.get_picture_descriptor(picture_id).await?;

        self.get_internal_file_url(descriptor.internal_file_id)
            .await
    }
}

impl fmt::Debug for LappiApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LappiApi")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}
