//! Native multi-band GeoTIFF reading (without GDAL dependency)
//!
//! Uses the `tiff` crate. Pages (IFDs) are decoded in file order and
//! chunky-interleaved pages are split into one plane per sample, so both
//! "one band per page" stacks and pixel-interleaved exports are readable.
//! Planes are numbered from 1 across pages in file order. Decoding stops at
//! the page holding the highest requested band, and only requested planes
//! are converted to `f64`.

use crate::error::{Error, Result};
use crate::io::BandMapping;
use crate::raster::{BandRole, BandSet, Raster};
use num_traits::ToPrimitive;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;
use tiff::decoder::{Decoder, DecodingResult, Limits};

/// Read the bands named in `mapping` from a GeoTIFF file.
///
/// The file is closed before this returns, on success and on error.
pub fn read_bands<P>(path: P, mapping: &BandMapping) -> Result<BandSet>
where
    P: AsRef<Path>,
{
    let file = File::open(path.as_ref())?;
    decode_bands(BufReader::new(file), mapping)
}

/// Read the bands named in `mapping` from an in-memory GeoTIFF.
pub fn read_bands_from_buffer(data: &[u8], mapping: &BandMapping) -> Result<BandSet> {
    decode_bands(Cursor::new(data), mapping)
}

fn decode_bands<R>(reader: R, mapping: &BandMapping) -> Result<BandSet>
where
    R: std::io::Read + std::io::Seek,
{
    // Full scenes with several bands in one IFD exceed the default buffer limit
    let mut decoder = Decoder::new(reader)
        .map_err(|e| Error::Decode(format!("TIFF decode error: {}", e)))?
        .with_limits(Limits::unlimited());

    let last = mapping.iter().map(|&(_, band)| band).max().unwrap_or(0);
    let mut set = BandSet::new();
    let mut available = 0;
    loop {
        available += decode_page(&mut decoder, available, mapping, &mut set)?;
        if available >= last || !decoder.more_images() {
            break;
        }
        decoder
            .next_image()
            .map_err(|e| Error::Decode(format!("Cannot advance to next page: {}", e)))?;
    }

    if let Some(&(_, band)) = mapping
        .iter()
        .find(|&&(_, band)| band == 0 || band > available)
    {
        return Err(Error::BandOutOfRange { band, available });
    }
    Ok(set)
}

/// Decode the current page, moving the planes `mapping` asks for into `set`.
///
/// `first` is the number of planes on earlier pages. Returns the number of
/// planes on this page.
fn decode_page<R>(
    decoder: &mut Decoder<R>,
    first: usize,
    mapping: &BandMapping,
    set: &mut BandSet,
) -> Result<usize>
where
    R: std::io::Read + std::io::Seek,
{
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| Error::Decode(format!("Cannot read dimensions: {}", e)))?;

    let rows = height as usize;
    let cols = width as usize;
    let cells = rows * cols;

    let result = decoder
        .read_image()
        .map_err(|e| Error::Decode(format!("Cannot read image data: {}", e)))?;
    let total = sample_count(&result)?;

    if cells == 0 || total % cells != 0 {
        return Err(Error::InvalidDimensions {
            width: cols,
            height: rows,
        });
    }

    let per_pixel = total / cells;
    for sample in 0..per_pixel {
        let number = first + sample + 1;
        let roles: Vec<BandRole> = mapping
            .iter()
            .filter(|&&(_, band)| band == number)
            .map(|&(role, _)| role)
            .collect();
        let Some((&last_role, rest)) = roles.split_last() else {
            continue;
        };

        let plane = Raster::from_vec(plane_to_f64(&result, sample, per_pixel), rows, cols)?;
        for &role in rest {
            set.insert(role, plane.clone());
        }
        set.insert(last_role, plane);
    }
    Ok(per_pixel)
}

fn sample_count(result: &DecodingResult) -> Result<usize> {
    let len = match result {
        DecodingResult::F32(buf) => buf.len(),
        DecodingResult::F64(buf) => buf.len(),
        DecodingResult::U8(buf) => buf.len(),
        DecodingResult::U16(buf) => buf.len(),
        DecodingResult::U32(buf) => buf.len(),
        DecodingResult::I8(buf) => buf.len(),
        DecodingResult::I16(buf) => buf.len(),
        DecodingResult::I32(buf) => buf.len(),
        _ => return Err(Error::UnsupportedDataType("Unsupported TIFF pixel format".to_string())),
    };
    Ok(len)
}

/// Extract one sample of every pixel. `result` has passed [`sample_count`].
fn plane_to_f64(result: &DecodingResult, sample: usize, per_pixel: usize) -> Vec<f64> {
    match result {
        DecodingResult::F32(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::F64(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::U8(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::U16(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::U32(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::I8(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::I16(buf) => cast_plane(buf, sample, per_pixel),
        DecodingResult::I32(buf) => cast_plane(buf, sample, per_pixel),
        _ => Vec::new(),
    }
}

fn cast_plane<S: ToPrimitive + Copy>(buf: &[S], sample: usize, per_pixel: usize) -> Vec<f64> {
    buf.iter()
        .skip(sample)
        .step_by(per_pixel)
        .map(|v| v.to_f64().unwrap_or(f64::NAN))
        .collect()
}
