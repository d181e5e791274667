//! Object storage access for aurora observation data and gridded products
//! (MinIO/S3 compatible).

pub mod fetch;
pub mod object_store;
pub mod paths;

pub use fetch::{fetch_latest_observations, upload_raster};
pub use paths::AuroraPath;
pub use self::object_store::{ObjectStorage, ObjectStorageConfig};
