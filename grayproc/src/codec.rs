use std::io::{BufRead, Write};

use crate::{algorithms, Error, GrayImage};

const MAGIC: &str = "P5";

/// Decode a binary graymap: the `P5` magic line, any number of full-line
/// `#` comments, a `<width> <height>` line, a `<maxval>` line, then
/// `width * height` raw bytes in raster order.
///
/// The header stores width before height; in memory we're rows before
/// cols, so the pair gets swapped on the way in. Nothing is returned
/// unless the whole image decoded.
pub fn decode<R: BufRead>(reader: &mut R) -> Result<GrayImage, Error> {
	let magic = read_header_line(reader)?;
	if magic.trim_end() != MAGIC {
		return Err(Error::BadMagic(magic.trim_end().to_owned()));
	}

	let mut line = read_header_line(reader)?;
	while line.starts_with('#') {
		line = read_header_line(reader)?;
	}

	let (rows, cols) = parse_dimensions(&line)?;

	let line = read_header_line(reader)?;
	let maxval: u32 = line
		.trim()
		.parse()
		.map_err(|_| Error::BadHeader(line.trim_end().to_owned()))?;
	if maxval > 255 {
		return Err(Error::MaxValueOver255(maxval));
	}

	// reject 0x0 headers before touching the pixel data
	let mut img = GrayImage::new(rows, cols)?;

	let mut bytes = vec![0u8; rows * cols];
	read_samples(reader, &mut bytes)?;

	for (sample, &byte) in img.data_mut().iter_mut().zip(bytes.iter()) {
		*sample = byte as f32;
	}

	Ok(img)
}

/// Encode `img` as a binary graymap. With `rescale` set (and the image not
/// flat) samples are remapped from their own min/max range onto 0-255 and
/// rounded; otherwise each sample is clamped into the byte range and
/// truncated.
pub fn encode<W: Write>(img: &GrayImage, writer: &mut W, rescale: bool) -> Result<(), Error> {
	write!(
		writer,
		"{}\n{} {}\n{}\n",
		MAGIC,
		img.cols(),
		img.rows(),
		img.maximum()
	)?;

	let maxi = img.max_sample();
	let mini = img.min_sample();

	let mut bytes = Vec::with_capacity(img.data().len());
	for &sample in img.data() {
		let byte = if rescale && maxi != mini {
			algorithms::rescale(sample, mini, maxi)
		} else {
			algorithms::quantize(sample)
		};
		bytes.push(byte);
	}

	writer.write_all(&bytes)?;

	Ok(())
}

fn read_header_line<R: BufRead>(reader: &mut R) -> Result<String, Error> {
	let mut line = String::new();
	let read = reader.read_line(&mut line)?;

	if read == 0 {
		return Err(Error::BadHeader(String::new()));
	}

	Ok(line)
}

fn parse_dimensions(line: &str) -> Result<(usize, usize), Error> {
	let mut parts = line.split_whitespace();

	let width = parts.next().and_then(|s| s.parse().ok());
	let height = parts.next().and_then(|s| s.parse().ok());

	match (width, height) {
		(Some(cols), Some(rows)) => Ok((rows, cols)),
		_ => Err(Error::BadHeader(line.trim_end().to_owned())),
	}
}

fn read_samples<R: BufRead>(reader: &mut R, buf: &mut [u8]) -> Result<(), Error> {
	let mut filled = 0;

	while filled < buf.len() {
		let read = reader.read(&mut buf[filled..])?;

		if read == 0 {
			return Err(Error::Truncated {
				expected: buf.len(),
				read: filled,
			});
		}

		filled += read;
	}

	Ok(())
}
