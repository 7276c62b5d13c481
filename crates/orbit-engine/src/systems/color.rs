//! Color helpers for the sphere material.

/// Wrap an unbounded hue (in turns) into [0, 1).
#[inline]
pub fn wrap_hue(hue: f32) -> f32 {
    let h = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if h >= 1.0 { 0.0 } else { h }
}

/// Convert HSL (hue in turns, any range; saturation and lightness in [0, 1]) to linear RGB.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> [f32; 3] {
    let h = wrap_hue(hue);
    let s = saturation.clamp(0.0, 1.0);
    let l = lightness.clamp(0.0, 1.0);

    if s == 0.0 {
        return [l, l, l];
    }

    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    [
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn wrap_hue_into_unit_range() {
        assert_eq!(wrap_hue(0.25), 0.25);
        assert!((wrap_hue(1.25) - 0.25).abs() < 1e-6);
        assert!((wrap_hue(-0.25) - 0.75).abs() < 1e-6);
        for h in [-100.3, -1.0, 0.0, 6.283, 1e6] {
            let w = wrap_hue(h);
            assert!((0.0..1.0).contains(&w), "{h} -> {w}");
        }
    }

    #[test]
    fn primary_hues() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]));
        assert!(close(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]));
        assert!(close(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]));
    }

    #[test]
    fn pastel_red_at_three_quarters_lightness() {
        assert!(close(hsl_to_rgb(0.0, 1.0, 0.75), [1.0, 0.5, 0.5]));
    }

    #[test]
    fn zero_saturation_is_grey() {
        assert_eq!(hsl_to_rgb(0.4, 0.0, 0.3), [0.3, 0.3, 0.3]);
    }

    #[test]
    fn hue_wraps_before_conversion() {
        assert!(close(hsl_to_rgb(2.5, 1.0, 0.5), hsl_to_rgb(0.5, 1.0, 0.5)));
    }
}
