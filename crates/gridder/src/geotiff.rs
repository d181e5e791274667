//! In-memory GeoTIFF encoding for gridded intensity fields.
//!
//! Produces a self-contained single-band 32-bit float GeoTIFF: geographic
//! WGS84 coordinates, affine transform anchored at the raster origin
//! (ORIGIN_LON, ORIGIN_LAT) with CELL_SIZE_DEG pixels, NaN declared as the
//! nodata value via the GDAL convention tag. No filesystem writes.

use std::io::Cursor;

use bytes::Bytes;
use tiff::encoder::{colortype, TiffEncoder};
use tiff::tags::Tag;

use aurora_common::{AuroraError, AuroraResult, CELL_SIZE_DEG, ORIGIN_LAT, ORIGIN_LON};

use crate::field::IntensityField;

/// GeoTIFF ModelPixelScaleTag.
pub const TAG_MODEL_PIXEL_SCALE: u16 = 33550;
/// GeoTIFF ModelTiepointTag.
pub const TAG_MODEL_TIEPOINT: u16 = 33922;
/// GeoTIFF GeoKeyDirectoryTag.
pub const TAG_GEO_KEY_DIRECTORY: u16 = 34735;
/// GDAL nodata convention tag.
pub const TAG_GDAL_NODATA: u16 = 42113;

/// Geo key directory declaring geographic WGS84 (EPSG:4326), angular
/// degrees, pixel-is-area raster space.
pub const GEO_KEYS: [u16; 20] = [
    1, 1, 0, 4, // directory header: version, revision, minor, key count
    1024, 0, 1, 2, // GTModelType = geographic
    1025, 0, 1, 1, // GTRasterType = pixel is area
    2048, 0, 1, 4326, // GeographicType = WGS 84
    2054, 0, 1, 9102, // GeogAngularUnits = degree
];

/// Encode a field into a single-band GeoTIFF byte buffer.
///
/// The affine transform is fixed by the grid constants: pixel (row, col)
/// maps to (ORIGIN_LON + col * CELL_SIZE_DEG, ORIGIN_LAT - row *
/// CELL_SIZE_DEG) at its upper-left corner.
pub fn encode(field: &IntensityField) -> AuroraResult<Bytes> {
    // The NaN sentinel is the only non-finite value the format carries
    if field.data().iter().any(|v| v.is_infinite()) {
        return Err(AuroraError::EncodingFailure(
            "field contains infinite values".to_string(),
        ));
    }

    let mut cursor = Cursor::new(Vec::new());
    {
        let mut encoder = TiffEncoder::new(&mut cursor).map_err(encoding_failure)?;
        let mut image = encoder
            .new_image::<colortype::Gray32Float>(field.width() as u32, field.height() as u32)
            .map_err(encoding_failure)?;

        image
            .encoder()
            .write_tag(
                Tag::Unknown(TAG_MODEL_PIXEL_SCALE),
                &[CELL_SIZE_DEG, CELL_SIZE_DEG, 0.0][..],
            )
            .map_err(encoding_failure)?;
        // Raster (0, 0) is pinned to the northwest corner of the grid
        image
            .encoder()
            .write_tag(
                Tag::Unknown(TAG_MODEL_TIEPOINT),
                &[0.0, 0.0, 0.0, ORIGIN_LON, ORIGIN_LAT, 0.0][..],
            )
            .map_err(encoding_failure)?;
        image
            .encoder()
            .write_tag(Tag::Unknown(TAG_GEO_KEY_DIRECTORY), &GEO_KEYS[..])
            .map_err(encoding_failure)?;
        image
            .encoder()
            .write_tag(Tag::Unknown(TAG_GDAL_NODATA), "nan")
            .map_err(encoding_failure)?;

        image.write_data(field.data()).map_err(encoding_failure)?;
    }

    Ok(Bytes::from(cursor.into_inner()))
}

fn encoding_failure(err: tiff::TiffError) -> AuroraError {
    AuroraError::EncodingFailure(err.to_string())
}
