/// Distance kept from a float bound after clipping
pub const FLOAT_CLIP_EPSILON: f64 = 1e-10;

/// Clip an integer coordinate onto [lower, upper]
pub fn clip_int(x: f64, lower: f64, upper: f64) -> i64 {
	let x = if x > upper {
		upper
	} else if x < lower {
		lower
	} else {
		x
	};
	x as i64
}

/// Clip a float coordinate; values outside the bounds land strictly inside them
pub fn clip_float(x: f64, lower: f64, upper: f64) -> f64 {
	if x > upper {
		(upper - margin(upper)).max(lower)
	} else if x < lower {
		(lower + margin(lower)).min(upper)
	} else {
		x
	}
}

// large bounds need more than the fixed epsilon to move at all
fn margin(bound: f64) -> f64 {
	FLOAT_CLIP_EPSILON.max(bound.abs() * 2.0 * f64::EPSILON)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clip_int() {
		assert_eq!(clip_int(12.0, 0.0, 10.0), 10);
		assert_eq!(clip_int(-3.0, 0.0, 10.0), 0);
		assert_eq!(clip_int(7.0, 0.0, 10.0), 7);
	}

	#[test]
	fn test_clip_float_is_strictly_inside() {
		let hi = clip_float(10.5, 0.0, 10.0);
		assert!(hi < 10.0 && hi > 9.99);
		let lo = clip_float(-1.0, 0.0, 10.0);
		assert!(lo > 0.0 && lo < 0.01);
		assert_eq!(clip_float(10.0, 0.0, 10.0), 10.0);
		let big = clip_float(2e12, 0.0, 1e12);
		assert!(big < 1e12);
	}
}
