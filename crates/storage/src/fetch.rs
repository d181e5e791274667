//! Latest-observation lookup and raster upload.

use bytes::Bytes;
use tracing::{debug, info};

use aurora_common::{AuroraResult, ObservationSet};

use crate::object_store::ObjectStorage;

/// Fetch the most recently modified observation object under a prefix.
///
/// Returns the object key and parsed record, or None when the prefix
/// holds no objects. A record that is not the expected shape is a
/// `MalformedInput` error.
pub async fn fetch_latest_observations(
    storage: &ObjectStorage,
    prefix: &str,
) -> AuroraResult<Option<(String, ObservationSet)>> {
    let objects = storage.list_meta(prefix).await?;

    let Some(latest) = objects.into_iter().max_by_key(|m| m.last_modified) else {
        return Ok(None);
    };
    let key = latest.location.to_string();
    debug!(
        key = %key,
        last_modified = %latest.last_modified,
        "Selected latest observation object"
    );

    let bytes = storage.get(&key).await?;
    let observations = ObservationSet::parse(&bytes)?;
    Ok(Some((key, observations)))
}

/// Upload a finished raster buffer under the given key.
pub async fn upload_raster(storage: &ObjectStorage, key: &str, data: Bytes) -> AuroraResult<()> {
    let size = data.len();
    storage.put(key, data).await?;
    info!(key = %key, size, "Uploaded gridded raster");
    Ok(())
}
