// easing.rs
//
// Easing curves for tween interpolation. Pure math, no tween state.
//
// Contract: `apply` returns exactly 0.0 for t <= 0 and exactly 1.0 for
// t >= 1; raw curve math only runs strictly inside (0, 1). Back and
// elastic curves may overshoot [0, 1] inside that open interval.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::error::TweenError;

/// Easing curve identifier.
///
/// Out curves are the inversion `1 - f(1 - t)` of their In counterpart;
/// InOut curves run the In half up to 0.5 and the Out half after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Constant velocity (no easing).
    Linear,
    SineIn,
    SineOut,
    SineInOut,
    QuadIn,
    /// Slow end. The default curve.
    #[default]
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    CircIn,
    CircOut,
    CircInOut,
    /// Overshoot then settle.
    BackIn,
    BackOut,
    BackInOut,
    /// Spring oscillation.
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    /// Bouncy finish.
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Every registered curve, in registry order.
    pub const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// Evaluate the curve at normalized progress `t`.
    ///
    /// Exactly 0.0 at or below the left edge, exactly 1.0 at or above the
    /// right edge, whatever the curve shape in between.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Easing::Linear => t,

            Easing::SineIn => sine(t),
            Easing::SineOut => flip(sine, t),
            Easing::SineInOut => split(sine, t),

            Easing::QuadIn => quad(t),
            Easing::QuadOut => flip(quad, t),
            Easing::QuadInOut => split(quad, t),

            Easing::CubicIn => cubic(t),
            Easing::CubicOut => flip(cubic, t),
            Easing::CubicInOut => split(cubic, t),

            Easing::QuartIn => quart(t),
            Easing::QuartOut => flip(quart, t),
            Easing::QuartInOut => split(quart, t),

            Easing::QuintIn => quint(t),
            Easing::QuintOut => flip(quint, t),
            Easing::QuintInOut => split(quint, t),

            Easing::ExpoIn => expo(t),
            Easing::ExpoOut => flip(expo, t),
            Easing::ExpoInOut => split(expo, t),

            Easing::CircIn => circ(t),
            Easing::CircOut => flip(circ, t),
            Easing::CircInOut => split(circ, t),

            Easing::BackIn => back(t),
            Easing::BackOut => flip(back, t),
            Easing::BackInOut => split(back, t),

            Easing::ElasticIn => elastic(t),
            Easing::ElasticOut => flip(elastic, t),
            Easing::ElasticInOut => split(elastic, t),

            Easing::BounceIn => bounce_in(t),
            Easing::BounceOut => flip(bounce_in, t),
            Easing::BounceInOut => split(bounce_in, t),
        }
    }

    /// Registry name of the curve (snake_case, matches the serde form).
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::SineIn => "sine_in",
            Easing::SineOut => "sine_out",
            Easing::SineInOut => "sine_in_out",
            Easing::QuadIn => "quad_in",
            Easing::QuadOut => "quad_out",
            Easing::QuadInOut => "quad_in_out",
            Easing::CubicIn => "cubic_in",
            Easing::CubicOut => "cubic_out",
            Easing::CubicInOut => "cubic_in_out",
            Easing::QuartIn => "quart_in",
            Easing::QuartOut => "quart_out",
            Easing::QuartInOut => "quart_in_out",
            Easing::QuintIn => "quint_in",
            Easing::QuintOut => "quint_out",
            Easing::QuintInOut => "quint_in_out",
            Easing::ExpoIn => "expo_in",
            Easing::ExpoOut => "expo_out",
            Easing::ExpoInOut => "expo_in_out",
            Easing::CircIn => "circ_in",
            Easing::CircOut => "circ_out",
            Easing::CircInOut => "circ_in_out",
            Easing::BackIn => "back_in",
            Easing::BackOut => "back_out",
            Easing::BackInOut => "back_in_out",
            Easing::ElasticIn => "elastic_in",
            Easing::ElasticOut => "elastic_out",
            Easing::ElasticInOut => "elastic_in_out",
            Easing::BounceIn => "bounce_in",
            Easing::BounceOut => "bounce_out",
            Easing::BounceInOut => "bounce_in_out",
        }
    }

    /// Look up a curve by registry name.
    pub fn from_name(name: &str) -> Result<Easing, TweenError> {
        Easing::ALL
            .iter()
            .find(|easing| easing.name() == name)
            .copied()
            .ok_or_else(|| TweenError::MissingEasingFunction(name.to_string()))
    }

    /// All registry names, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Easing::ALL.iter().map(|easing| easing.name())
    }
}

// ── Curve primitives (In forms) ──────────────────────────────────────────

/// Out form of an In curve.
#[inline]
fn flip(f: fn(f32) -> f32, t: f32) -> f32 {
    1.0 - f(1.0 - t)
}

/// InOut form of an In curve: In half below 0.5, Out half above.
#[inline]
fn split(f: fn(f32) -> f32, t: f32) -> f32 {
    if t < 0.5 {
        f(2.0 * t) / 2.0
    } else {
        1.0 - f(2.0 - 2.0 * t) / 2.0
    }
}

#[inline]
fn sine(t: f32) -> f32 {
    1.0 - (t * PI / 2.0).cos()
}

#[inline]
fn quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn quart(t: f32) -> f32 {
    t * t * t * t
}

#[inline]
fn quint(t: f32) -> f32 {
    t * t * t * t * t
}

#[inline]
fn expo(t: f32) -> f32 {
    2.0_f32.powf(10.0 * t - 10.0)
}

#[inline]
fn circ(t: f32) -> f32 {
    1.0 - (1.0 - t * t).sqrt()
}

#[inline]
fn back(t: f32) -> f32 {
    const C1: f32 = 1.70158;
    const C3: f32 = C1 + 1.0;
    C3 * t * t * t - C1 * t * t
}

#[inline]
fn elastic(t: f32) -> f32 {
    const C4: f32 = (2.0 * PI) / 3.0;
    -(2.0_f32.powf(10.0 * t - 10.0)) * ((t * 10.0 - 10.75) * C4).sin()
}

/// Bounce is defined in its Out form; this is the inverted In form so it
/// composes with `flip`/`split` like the rest.
#[inline]
fn bounce_in(t: f32) -> f32 {
    1.0 - bounce_out(1.0 - t)
}

#[inline]
fn bounce_out(t: f32) -> f32 {
    const N1: f32 = 7.5625;
    const D1: f32 = 2.75;

    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_curve_is_exact_at_the_edges() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{} at 0", easing.name());
            assert_eq!(easing.apply(1.0), 1.0, "{} at 1", easing.name());
            assert_eq!(easing.apply(-0.5), 0.0, "{} below 0", easing.name());
            assert_eq!(easing.apply(1.5), 1.0, "{} above 1", easing.name());
        }
    }

    #[test]
    fn linear_midpoint() {
        assert_eq!(Easing::Linear.apply(0.5), 0.5);
    }

    #[test]
    fn quad_out_faster_start() {
        // QuadOut should be > 0.5 at t=0.5 (faster start, slower end)
        let mid = Easing::QuadOut.apply(0.5);
        assert!(mid > 0.5, "QuadOut at 0.5 should be > 0.5, got {}", mid);
    }

    #[test]
    fn back_overshoots() {
        let late = Easing::BackOut.apply(0.3);
        assert!(late > 0.3, "BackOut should overshoot, got {}", late);
        let early = Easing::BackIn.apply(0.3);
        assert!(early < 0.0, "BackIn should undershoot, got {}", early);
    }

    #[test]
    fn in_out_is_continuous_at_the_split() {
        for easing in [Easing::QuadInOut, Easing::BounceInOut, Easing::ElasticInOut] {
            let below = easing.apply(0.5 - 1e-4);
            let above = easing.apply(0.5 + 1e-4);
            assert!(
                (below - above).abs() < 0.05,
                "{} jumps at 0.5: {} vs {}",
                easing.name(),
                below,
                above
            );
        }
    }

    #[test]
    fn registry_roundtrip() {
        for easing in Easing::ALL {
            assert_eq!(Easing::from_name(easing.name()), Ok(easing));
        }
        assert_eq!(Easing::names().count(), Easing::ALL.len());
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = Easing::from_name("zigzag").unwrap_err();
        assert_eq!(
            err,
            crate::error::TweenError::MissingEasingFunction("zigzag".to_string())
        );
    }

    #[test]
    fn serde_names_match_registry_names() {
        for easing in Easing::ALL {
            let json = serde_json::to_string(&easing).unwrap();
            assert_eq!(json, format!("\"{}\"", easing.name()));
            let back: Easing = serde_json::from_str(&json).unwrap();
            assert_eq!(back, easing);
        }
    }

    #[test]
    fn ease_interpolates() {
        let result = ease(100.0, 200.0, 0.5, Easing::Linear);
        assert!((result - 150.0).abs() < 0.001);
    }

    #[test]
    fn default_curve_is_quad_out() {
        assert_eq!(Easing::default(), Easing::QuadOut);
    }
}
