use std::ops::{Add, Div, Mul, Sub};

use log::debug;

use crate::{algorithms, Error, GrayImage};

impl GrayImage {
	/// Invert the image against the intensity ceiling.
	pub fn negative(&self) -> GrayImage {
		debug!("applying negative");

		let data = self.data().iter().map(|&v| algorithms::negative(v)).collect();
		self.same_shape(data)
	}

	/// Stretch the dark end with the log transfer curve. The output isn't
	/// clamped; anything pushed over the ceiling stays there until the
	/// image is written out.
	pub fn log_transform(&self) -> GrayImage {
		debug!("applying log transform");

		let data = self
			.data()
			.iter()
			.map(|&v| algorithms::log_transfer(v))
			.collect();
		self.same_shape(data)
	}

	/// Apply the power-law transfer curve with the given gamma.
	pub fn gamma_transform(&self, gamma: f32) -> GrayImage {
		debug!("applying gamma transform, gamma {}", gamma);

		let data = self
			.data()
			.iter()
			.map(|&v| algorithms::gamma_transfer(v, gamma))
			.collect();
		self.same_shape(data)
	}

	/// Cut the image into two levels: samples at or below `cutoff` become
	/// `low`, everything else becomes `high`.
	pub fn threshold(&self, cutoff: f32, low: f32, high: f32) -> GrayImage {
		let data = self
			.data()
			.iter()
			.map(|&v| algorithms::threshold(v, cutoff, low, high))
			.collect();
		self.same_shape(data)
	}

	/// Per-pixel sum of two same-shaped images.
	pub fn add(&self, other: &GrayImage) -> Result<GrayImage, Error> {
		self.check_shape(other)?;

		let data = self
			.data()
			.iter()
			.zip(other.data())
			.map(|(&a, &b)| a + b)
			.collect();
		Ok(self.same_shape(data))
	}

	/// Per-pixel difference of two same-shaped images.
	pub fn sub(&self, other: &GrayImage) -> Result<GrayImage, Error> {
		self.check_shape(other)?;

		let data = self
			.data()
			.iter()
			.zip(other.data())
			.map(|(&a, &b)| a - b)
			.collect();
		Ok(self.same_shape(data))
	}

	/// Per-pixel product of two same-shaped images.
	pub fn mul(&self, other: &GrayImage) -> Result<GrayImage, Error> {
		self.check_shape(other)?;

		let data = self
			.data()
			.iter()
			.zip(other.data())
			.map(|(&a, &b)| a * b)
			.collect();
		Ok(self.same_shape(data))
	}

	/// Per-pixel quotient of two same-shaped images. Every divisor is
	/// biased by 0.001, so an exact zero never divides; small divisors get
	/// biased right along with it.
	pub fn div(&self, other: &GrayImage) -> Result<GrayImage, Error> {
		self.check_shape(other)?;

		let data = self
			.data()
			.iter()
			.zip(other.data())
			.map(|(&a, &b)| a / (b + 0.001))
			.collect();
		Ok(self.same_shape(data))
	}

	fn check_shape(&self, other: &GrayImage) -> Result<(), Error> {
		if self.rows() != other.rows() || self.cols() != other.cols() {
			Err(Error::ShapeMismatch {
				rows: self.rows(),
				cols: self.cols(),
				other_rows: other.rows(),
				other_cols: other.cols(),
			})
		} else {
			Ok(())
		}
	}
}

impl Add<f32> for &GrayImage {
	type Output = GrayImage;

	fn add(self, scalar: f32) -> GrayImage {
		let data = self.data().iter().map(|&v| v + scalar).collect();
		self.same_shape(data)
	}
}

impl Sub<f32> for &GrayImage {
	type Output = GrayImage;

	fn sub(self, scalar: f32) -> GrayImage {
		let data = self.data().iter().map(|&v| v - scalar).collect();
		self.same_shape(data)
	}
}

impl Mul<f32> for &GrayImage {
	type Output = GrayImage;

	fn mul(self, scalar: f32) -> GrayImage {
		let data = self.data().iter().map(|&v| v * scalar).collect();
		self.same_shape(data)
	}
}

impl Div<f32> for &GrayImage {
	type Output = GrayImage;

	fn div(self, scalar: f32) -> GrayImage {
		let data = self.data().iter().map(|&v| v / scalar).collect();
		self.same_shape(data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn negative_twice_is_the_original() {
		let img = GrayImage::from_raw_parts(2, 2, vec![0.0, 64.0, 128.0, 255.0]).unwrap();
		let back = img.negative().negative();

		assert_eq!(back.data(), img.data());
	}

	#[test]
	fn negative_leaves_the_input_alone() {
		let img = GrayImage::from_raw_parts(1, 2, vec![10.0, 20.0]).unwrap();
		let _ = img.negative();

		assert_eq!(img.data(), &[10.0, 20.0]);
	}

	#[test]
	fn threshold_is_two_valued() {
		let img = GrayImage::from_raw_parts(2, 3, vec![0.0, 50.0, 100.0, 150.0, 200.0, 250.0])
			.unwrap();
		let cut = img.threshold(100.0, 0.0, 255.0);

		assert_eq!(cut.data(), &[0.0, 0.0, 0.0, 255.0, 255.0, 255.0]);
		assert!(cut.data().iter().all(|&v| v == 0.0 || v == 255.0));
	}

	#[test]
	fn log_maps_zero_to_zero() {
		let img = GrayImage::new(1, 1).unwrap();
		let out = img.log_transform();

		assert_eq!(out.data(), &[0.0]);
	}

	#[test]
	fn image_arithmetic_is_per_pixel() {
		let a = GrayImage::from_raw_parts(1, 2, vec![10.0, 20.0]).unwrap();
		let b = GrayImage::from_raw_parts(1, 2, vec![4.0, 5.0]).unwrap();

		assert_eq!(a.add(&b).unwrap().data(), &[14.0, 25.0]);
		assert_eq!(a.sub(&b).unwrap().data(), &[6.0, 15.0]);
		assert_eq!(a.mul(&b).unwrap().data(), &[40.0, 100.0]);
	}

	#[test]
	fn division_biases_every_divisor() {
		let a = GrayImage::from_raw_parts(1, 2, vec![10.0, 10.0]).unwrap();
		let b = GrayImage::from_raw_parts(1, 2, vec![0.0, 2.0]).unwrap();

		let out = a.div(&b).unwrap();

		assert_eq!(out.data()[0], 10.0 / 0.001);
		assert_eq!(out.data()[1], 10.0 / 2.001);
	}

	#[test]
	fn mismatched_shapes_refuse_to_combine() {
		let a = GrayImage::new(3, 3).unwrap();
		let b = GrayImage::new(2, 2).unwrap();

		for result in [a.add(&b), a.sub(&b), a.mul(&b), a.div(&b)] {
			assert!(matches!(
				result,
				Err(Error::ShapeMismatch {
					rows: 3,
					cols: 3,
					other_rows: 2,
					other_cols: 2,
				})
			));
		}
	}

	#[test]
	fn scalar_arithmetic() {
		let img = GrayImage::from_raw_parts(1, 2, vec![10.0, 20.0]).unwrap();

		assert_eq!((&img + 5.0).data(), &[15.0, 25.0]);
		assert_eq!((&img - 5.0).data(), &[5.0, 15.0]);
		assert_eq!((&img * 2.0).data(), &[20.0, 40.0]);
		assert_eq!((&img / 2.0).data(), &[5.0, 10.0]);
	}
}
