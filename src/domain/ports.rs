use crate::utils::error::Result;

/// Artifact sink. Paths are relative to the storage root.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn listen_addr(&self) -> &str;
    fn static_root(&self) -> &str;
    fn artifact_dir(&self) -> &str;
}
