//! Rich-text formatting for logged values
//!
//! Every function is pure: the precision in effect is passed in by the caller.
//! Colors are emitted as `<color=#RRGGBB>..</color>` tags, see [`crate::markup`]
//! for the reverse direction.

use crate::types::{Color, Precision, Vec2, Vec3};

/// Wrap `text` in a color tag
pub fn format_color_tag(text: &str, color: Color) -> String {
    format!("<color={}>{}</color>", color.to_hex(), text)
}

/// `label: value` for any displayable scalar
pub fn format(label: &str, value: impl std::fmt::Display) -> String {
    format!("{}: {}", label, value)
}

/// Boolean in green when true, red when false
pub fn format_bool(label: &str, value: bool) -> String {
    let color = if value { Color::GREEN } else { Color::RED };
    format!("{}: {}", label, format_color_tag(&value.to_string(), color))
}

/// Float with exactly `digits` places after the decimal point
///
/// Zero digits renders an integer.
pub fn format_float(label: &str, value: f64, digits: usize) -> String {
    format!("{}: {}", label, fixed(value, digits))
}

/// Vector components colored red and green
pub fn format_vector2(label: &str, v: Vec2, digits: usize) -> String {
    format!(
        "{}: ({},{})",
        label,
        format_color_tag(&fixed(v.x.into(), digits), Color::RED),
        format_color_tag(&fixed(v.y.into(), digits), Color::GREEN),
    )
}

/// Vector components colored red, green and blue
pub fn format_vector3(label: &str, v: Vec3, digits: usize) -> String {
    format!(
        "{}: ({},{},{})",
        label,
        format_color_tag(&fixed(v.x.into(), digits), Color::RED),
        format_color_tag(&fixed(v.y.into(), digits), Color::GREEN),
        format_color_tag(&fixed(v.z.into(), digits), Color::BLUE),
    )
}

/// Round half away from zero at every precision, then print exactly `digits`
/// places
fn fixed(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(i32::try_from(digits).unwrap_or(i32::MAX));
    let scaled = (value * scale).round();
    let rounded = if scaled.is_finite() { scaled / scale } else { value };
    // -0.4 rounds to -0.0, which prints as "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", digits, rounded)
}

/// A value a producer can log under a label
///
/// Only types with a formatting rule implement this, so logging anything else
/// is a compile error rather than a runtime fallback.
pub trait Loggable {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String;
}

impl Loggable for bool {
    fn format_labeled(&self, label: &str, _precision: &Precision) -> String {
        format_bool(label, *self)
    }
}

impl Loggable for f32 {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String {
        format_float(label, f64::from(*self), precision.float)
    }
}

impl Loggable for f64 {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String {
        format_float(label, *self, precision.float)
    }
}

impl Loggable for Vec2 {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String {
        format_vector2(label, *self, precision.vector)
    }
}

impl Loggable for Vec3 {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String {
        format_vector3(label, *self, precision.vector)
    }
}

impl Loggable for str {
    fn format_labeled(&self, label: &str, _precision: &Precision) -> String {
        format(label, self)
    }
}

impl Loggable for String {
    fn format_labeled(&self, label: &str, _precision: &Precision) -> String {
        format(label, self)
    }
}

macro_rules! loggable_integer {
    ($($ty:ty),*) => {
        $(
            impl Loggable for $ty {
                fn format_labeled(&self, label: &str, _precision: &Precision) -> String {
                    format(label, self)
                }
            }
        )*
    };
}

loggable_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<T: Loggable + ?Sized> Loggable for &T {
    fn format_labeled(&self, label: &str, precision: &Precision) -> String {
        (**self).format_labeled(label, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_float_precision() {
        assert_eq!(format_float("x", 3.14159, 2), "x: 3.14");
        assert_eq!(format_float("x", 3.14159, 0), "x: 3");
        assert_eq!(format_float("x", 1.0, 3), "x: 1.000");
        assert_eq!(format_float("x", 2.5, 0), "x: 3");
        assert_eq!(format_float("x", -2.5, 0), "x: -3");
    }

    #[test]
    fn test_float_ties_round_away_from_zero() {
        assert_eq!(format_float("x", 0.125, 2), "x: 0.13");
        assert_eq!(format_float("x", 0.25, 1), "x: 0.3");
        assert_eq!(format_float("x", -0.125, 2), "x: -0.13");
        assert_eq!(
            format_vector2("p", Vec2::new(0.25, -0.25), 1),
            "p: (<color=#FF0000>0.3</color>,<color=#00FF00>-0.3</color>)"
        );
    }

    #[test]
    fn test_negative_zero_is_normalized() {
        assert_eq!(format_float("x", -0.4, 0), "x: 0");
        assert_eq!(format_float("x", -0.001, 2), "x: 0.00");
        assert_eq!(format_float("x", -0.0, 1), "x: 0.0");
    }

    #[test]
    fn test_bool_colors() {
        assert_eq!(
            format_bool("hp", true),
            "hp: <color=#00FF00>true</color>"
        );
        assert_eq!(
            format_bool("dead", false),
            "dead: <color=#FF0000>false</color>"
        );
    }

    #[test]
    fn test_vector2_components() {
        let out = format_vector2("p", Vec2::new(1.5, -2.25), 2);
        assert_eq!(
            out,
            "p: (<color=#FF0000>1.50</color>,<color=#00FF00>-2.25</color>)"
        );

        let red = out.find("<color=#FF0000>1.50</color>").unwrap();
        let green = out.find("<color=#00FF00>-2.25</color>").unwrap();
        assert!(red < green);
    }

    #[test]
    fn test_vector3_components() {
        let out = format_vector3("v", Vec3::new(0.0, 1.0, 2.5), 1);
        assert_eq!(
            out,
            "v: (<color=#FF0000>0.0</color>,<color=#00FF00>1.0</color>,<color=#0000FF>2.5</color>)"
        );
    }

    #[test]
    fn test_color_tag() {
        assert_eq!(
            format_color_tag("warn", Color::Float(1.0, 0.5, 0.0)),
            "<color=#FF7F00>warn</color>"
        );
    }

    #[test]
    fn test_plain_format() {
        assert_eq!(format("state", "jumping"), "state: jumping");
        assert_eq!(format("frame", 42), "frame: 42");
    }

    #[test]
    fn test_loggable_uses_matching_precision() {
        let precision = Precision {
            float: 1,
            vector: 3,
        };
        assert_eq!(4.2f32.format_labeled("speed", &precision), "speed: 4.2");
        assert_eq!(
            Vec2::new(1.0, 2.0).format_labeled("p", &precision),
            "p: (<color=#FF0000>1.000</color>,<color=#00FF00>2.000</color>)"
        );
        assert_eq!(7u32.format_labeled("ammo", &precision), "ammo: 7");
        assert_eq!("idle".format_labeled("state", &precision), "state: idle");
    }
}
