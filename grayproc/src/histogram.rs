use log::debug;

use crate::GrayImage;

const LEVELS: usize = 256;

impl GrayImage {
	/// Remap intensities through the cumulative distribution of their
	/// frequencies. The mapping target is the image's own current maximum
	/// sample, not the format ceiling.
	///
	/// Samples have to already sit in the 0-255 byte range; a sample above
	/// that indexes past the level tables and panics.
	pub fn equalize_histogram(&self) -> GrayImage {
		let histogram = level_counts(self);
		let pdf = probabilities(&histogram, self.rows() * self.cols());
		let cdf = cumulative(&pdf);

		debug!("pdf sum {}", pdf.iter().sum::<f32>());
		debug!("cdf tail {}", cdf[LEVELS - 1]);

		let maxi = self.max_sample();
		let mut mapping = [0.0f32; LEVELS];
		for (level, slot) in mapping.iter_mut().enumerate() {
			*slot = (maxi * cdf[level]).round();
		}

		let data = self.data().iter().map(|&v| mapping[v as usize]).collect();
		self.same_shape(data)
	}
}

fn level_counts(img: &GrayImage) -> [f32; LEVELS] {
	let mut histogram = [0.0f32; LEVELS];

	for &sample in img.data() {
		histogram[sample as usize] += 1.0;
	}

	histogram
}

fn probabilities(histogram: &[f32; LEVELS], pixels: usize) -> [f32; LEVELS] {
	let mut pdf = [0.0f32; LEVELS];

	for (level, &count) in histogram.iter().enumerate() {
		pdf[level] = count / pixels as f32;
	}

	pdf
}

fn cumulative(pdf: &[f32; LEVELS]) -> [f32; LEVELS] {
	let mut cdf = [0.0f32; LEVELS];
	let mut running = 0.0;

	for (level, &p) in pdf.iter().enumerate() {
		running += p;
		cdf[level] = running;
	}

	cdf
}
