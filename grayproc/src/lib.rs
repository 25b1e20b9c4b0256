mod algorithms;
mod codec;
mod histogram;
mod image;
mod spectral;
mod transform;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub use codec::{decode, encode};
pub use image::GrayImage;

/// Read a binary graymap from disk.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<GrayImage, Error> {
	let file = File::open(path.as_ref())?;
	let mut reader = BufReader::new(file);

	codec::decode(&mut reader)
}

/// Write `img` to disk as a binary graymap. With `rescale` set the samples
/// are remapped from their own min/max range onto 0-255 before they're
/// quantized; otherwise they're clamped into the byte range.
pub fn write_file<P: AsRef<Path>>(img: &GrayImage, path: P, rescale: bool) -> Result<(), Error> {
	let file = File::create(path.as_ref())?;
	let mut writer = BufWriter::new(file);

	codec::encode(img, &mut writer, rescale)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("image dimensions must be at least 1x1, got {rows}x{cols}")]
	InvalidDimensions { rows: usize, cols: usize },
	#[error("not enough memory for the sample buffer")]
	OutOfMemory,
	#[error("buffer holds {actual} samples but the dimensions need {expected}")]
	BufferSize { expected: usize, actual: usize },
	#[error("pixel ({row}, {col}) is outside a {rows}x{cols} image")]
	OutOfBounds {
		row: usize,
		col: usize,
		rows: usize,
		cols: usize,
	},
	#[error(
		"cannot combine images of different size: {rows}x{cols} and {other_rows}x{other_cols}"
	)]
	ShapeMismatch {
		rows: usize,
		cols: usize,
		other_rows: usize,
		other_cols: usize,
	},
	#[error("not a binary graymap; magic line was {0:?}")]
	BadMagic(String),
	#[error("malformed graymap header line {0:?}")]
	BadHeader(String),
	#[error("maximum sample value {0} is over 255")]
	MaxValueOver255(u32),
	#[error("pixel data ends early; wanted {expected} bytes, read {read}")]
	Truncated { expected: usize, read: usize },
	#[error("{source}")]
	Io {
		#[from]
		source: std::io::Error,
	},
}
