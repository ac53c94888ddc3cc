//! Hue-based spaces: HSL and HSV.
//!
//! Both decompose RGB into max/min/delta. Hue is a turn fraction in
//! `[0, 1]`. Achromatic pixels (delta, or max for HSV, below `1e-6`) get
//! hue and saturation `0` instead of a `0/0`.

use super::Pixel;

const ACHROMATIC: f32 = 1e-6;

/// RGB → HSL. Expects channels scaled to `[0, 1]`.
pub fn rgb_to_hsl(rgb: Pixel) -> Pixel {
    let (r, g, b) = (rgb.x, rgb.y, rgb.z);

    let min = r.min(g.min(b));
    let max = r.max(g.max(b));
    let delta = max - min;

    let l = (max + min) / 2.0;

    if delta < ACHROMATIC {
        return Pixel::new(0.0, 0.0, l, rgb.w);
    }

    let s = if l < 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };

    let del_r = ((max - r) / 6.0 + delta / 2.0) / delta;
    let del_g = ((max - g) / 6.0 + delta / 2.0) / delta;
    let del_b = ((max - b) / 6.0 + delta / 2.0) / delta;

    let mut h = if r == max {
        del_b - del_g
    } else if g == max {
        1.0 / 3.0 + del_r - del_b
    } else {
        2.0 / 3.0 + del_g - del_r
    };

    if h < 0.0 {
        h += 1.0;
    }
    if h > 1.0 {
        h -= 1.0;
    }

    Pixel::new(h, s, l, rgb.w)
}

/// One channel of HSL → RGB.
///
/// `v1`/`v2` are the low and high levels, `vh` the hue shifted for the
/// channel (wrapped into `[0, 1]` here).
pub fn hue_to_rgb(v1: f32, v2: f32, mut vh: f32) -> f32 {
    if vh < 0.0 {
        vh += 1.0;
    }
    if vh > 1.0 {
        vh -= 1.0;
    }
    if 6.0 * vh < 1.0 {
        return v1 + (v2 - v1) * 6.0 * vh;
    }
    if 2.0 * vh < 1.0 {
        return v2;
    }
    if 3.0 * vh < 2.0 {
        return v1 + (v2 - v1) * (2.0 / 3.0 - vh) * 6.0;
    }
    v1
}

/// HSL → RGB. Output channels in `[0, 1]` for in-range input.
pub fn hsl_to_rgb(hsl: Pixel) -> Pixel {
    let (h, s, l) = (hsl.x, hsl.y, hsl.z);

    if s < ACHROMATIC {
        return Pixel::new(l, l, l, hsl.w);
    }

    let v2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - s * l };
    let v1 = 2.0 * l - v2;

    Pixel::new(
        hue_to_rgb(v1, v2, h + 1.0 / 3.0),
        hue_to_rgb(v1, v2, h),
        hue_to_rgb(v1, v2, h - 1.0 / 3.0),
        hsl.w,
    )
}

/// RGB → HSV.
pub fn rgb_to_hsv(rgb: Pixel) -> Pixel {
    let min = rgb.x.min(rgb.y.min(rgb.z));
    let max = rgb.x.max(rgb.y.max(rgb.z));
    let delta = max - min;

    let v = max;
    if max.abs() <= ACHROMATIC || delta.abs() <= ACHROMATIC {
        return Pixel::new(0.0, 0.0, v, rgb.w);
    }
    let s = delta / max;

    let mut h = if rgb.x == max {
        (rgb.y - rgb.z) / delta
    } else if rgb.y == max {
        2.0 + (rgb.z - rgb.x) / delta
    } else {
        4.0 + (rgb.x - rgb.y) / delta
    };

    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }

    Pixel::new(h, s, v, rgb.w)
}

/// HSV → RGB.
///
/// The hue circle is split into six sectors, `i = ⌊6·H⌋`:
///
/// ```text
///   i │  R  G  B
///  ───┼─────────
///   0 │  v  t  p
///   1 │  q  v  p
///   2 │  p  v  t
///   3 │  p  q  v
///   4 │  t  p  v
///   5 │  v  p  q      (also any index outside 0..=5)
///
///   f = 6·H − i,  p = v(1 − S),  q = v(1 − S·f),  t = v(1 − S(1 − f))
/// ```
pub fn hsv_to_rgb(hsv: Pixel) -> Pixel {
    let (h, s, v) = (hsv.x, hsv.y, hsv.z);

    if s.abs() < ACHROMATIC {
        return Pixel::new(v, v, v, hsv.w);
    }

    let sector = (6.0 * h).floor();
    let f = 6.0 * h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as i32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Pixel::new(r, g, b, hsv.w)
}
