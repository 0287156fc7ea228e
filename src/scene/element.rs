//! Element identities, animatable properties and per-element visual state.

use std::fmt;

use serde::Serialize;

use crate::util::color::Argb;

/// A renderable element of the scene, supplied by the layout.
///
/// Indexed variants are numbered from zero in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    /// The sun disc.
    Sun,
    /// The ray halo drawn around the sun.
    SunRays,
    /// The sky backdrop.
    Sky,
    /// The moon disc.
    Moon,
    /// A star.
    Star(u8),
    /// A cloud.
    Cloud(u8),
    /// The sea backdrop below the horizon.
    Sea,
    /// The sun's reflection on the sea.
    SunReflection,
    /// The moon's reflection on the sea.
    MoonReflection,
    /// A star's reflection on the sea.
    StarReflection(u8),
    /// A wave band on the sea.
    Wave(u8),
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sun => f.write_str("sun"),
            Self::SunRays => f.write_str("sun_rays"),
            Self::Sky => f.write_str("sky"),
            Self::Moon => f.write_str("moon"),
            Self::Star(i) => write!(f, "star{i}"),
            Self::Cloud(i) => write!(f, "cloud{i}"),
            Self::Sea => f.write_str("sea"),
            Self::SunReflection => f.write_str("sun_reflection"),
            Self::MoonReflection => f.write_str("moon_reflection"),
            Self::StarReflection(i) => write!(f, "star{i}_reflection"),
            Self::Wave(i) => write!(f, "wave{i}"),
        }
    }
}

/// An animatable property of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    /// Absolute vertical position: layout top plus vertical translation.
    Y,
    /// Vertical offset from the layout position.
    TranslationY,
    /// Rotation in degrees.
    Rotation,
    /// Horizontal scale factor.
    ScaleX,
    /// Vertical scale factor.
    ScaleY,
    /// Opacity in `[0, 1]`.
    Alpha,
    /// Background fill color.
    BackgroundColor,
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Y => "y",
            Self::TranslationY => "translationY",
            Self::Rotation => "rotation",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Alpha => "alpha",
            Self::BackgroundColor => "backgroundColor",
        };
        f.write_str(name)
    }
}

/// One property of one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyKey {
    /// Element being animated.
    pub element: ElementId,
    /// Property of that element.
    pub property: Property,
}

impl PropertyKey {
    /// Pair an element with one of its properties.
    #[must_use]
    pub const fn new(element: ElementId, property: Property) -> Self {
        Self { element, property }
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.element, self.property)
    }
}

/// A value written to a property.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// Scalar property value.
    Float(f32),
    /// Color property value.
    Color(Argb),
}

/// Visual state of a single element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ElementState {
    /// Vertical layout position. Not animatable.
    pub top: f32,
    /// Vertical offset from `top`.
    pub translation_y: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Horizontal scale factor.
    pub scale_x: f32,
    /// Vertical scale factor.
    pub scale_y: f32,
    /// Opacity.
    pub alpha: f32,
    /// Background fill, for elements that have one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Argb>,
}

impl ElementState {
    /// Untransformed, fully opaque element at the given layout position.
    #[must_use]
    pub const fn at(top: f32) -> Self {
        Self {
            top,
            translation_y: 0.0,
            rotation: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            alpha: 1.0,
            background: None,
        }
    }

    /// Set the opacity.
    #[must_use]
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Set the background fill.
    #[must_use]
    pub const fn with_background(mut self, color: Argb) -> Self {
        self.background = Some(color);
        self
    }

    /// Absolute vertical position.
    #[must_use]
    pub fn y(&self) -> f32 {
        self.top + self.translation_y
    }

    /// Read a scalar property. Returns `None` for color properties.
    #[must_use]
    pub fn float(&self, property: Property) -> Option<f32> {
        match property {
            Property::Y => Some(self.y()),
            Property::TranslationY => Some(self.translation_y),
            Property::Rotation => Some(self.rotation),
            Property::ScaleX => Some(self.scale_x),
            Property::ScaleY => Some(self.scale_y),
            Property::Alpha => Some(self.alpha),
            Property::BackgroundColor => None,
        }
    }

    /// Write a value. Returns `false` if the value type does not match the
    /// property.
    pub fn set(&mut self, property: Property, value: PropertyValue) -> bool {
        match (property, value) {
            (Property::Y, PropertyValue::Float(v)) => {
                self.translation_y = v - self.top;
            }
            (Property::TranslationY, PropertyValue::Float(v)) => {
                self.translation_y = v;
            }
            (Property::Rotation, PropertyValue::Float(v)) => self.rotation = v,
            (Property::ScaleX, PropertyValue::Float(v)) => self.scale_x = v,
            (Property::ScaleY, PropertyValue::Float(v)) => self.scale_y = v,
            (Property::Alpha, PropertyValue::Float(v)) => {
                self.alpha = v.clamp(0.0, 1.0);
            }
            (Property::BackgroundColor, PropertyValue::Color(c)) => {
                self.background = Some(c);
            }
            _ => return false,
        }
        true
    }
}
