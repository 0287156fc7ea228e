//! The scene: visual elements provided by the layout and their current
//! property values.
//!
//! Animations never hold elements directly. They write through
//! [`PropertyTarget`], which [`Scene`] implements, so any other view model
//! can be driven by the same timelines.

mod element;

pub use element::{
    ElementId, ElementState, Property, PropertyKey, PropertyValue,
};
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::animation::transition::Phase;
use crate::options::{LayoutOptions, PaletteOptions};
use crate::util::color::Argb;

/// Receives property writes produced by animations.
pub trait PropertyTarget {
    /// Write `value` to the property identified by `key`.
    ///
    /// Implementations ignore keys they do not know about.
    fn apply(&mut self, key: PropertyKey, value: PropertyValue);
}

/// Snapshot of one element, for traces and inspection.
#[derive(Debug, Clone, Serialize)]
pub struct ElementSnapshot {
    /// Element name (e.g. `star3`).
    pub id: String,
    /// Element state at snapshot time.
    #[serde(flatten)]
    pub state: ElementState,
}

/// All scene elements and their current visual state.
#[derive(Debug, Clone)]
pub struct Scene {
    layout: LayoutOptions,
    elements: FxHashMap<ElementId, ElementState>,
    /// Element ids in draw order.
    order: Vec<ElementId>,
}

impl Scene {
    /// Build the scene described by `layout`, in the resting state of
    /// `phase`.
    #[must_use]
    pub fn new(
        layout: &LayoutOptions,
        palette: &PaletteOptions,
        phase: Phase,
    ) -> Self {
        let mut scene = Self {
            layout: layout.clone(),
            elements: FxHashMap::default(),
            order: Vec::new(),
        };
        let night = phase == Phase::Night;
        let horizon = layout.sky_height;

        let sky_color = if night {
            palette.night_sky
        } else {
            palette.blue_sky
        };
        scene.insert(
            ElementId::Sky,
            ElementState::at(0.0).with_background(sky_color),
        );

        let mut sun = ElementState::at(layout.sun_top);
        if night {
            sun.translation_y = horizon - layout.sun_top;
        }
        scene.insert(ElementId::Sun, sun);
        scene.insert(
            ElementId::SunRays,
            ElementState::at(layout.sun_top).with_alpha(0.0),
        );
        scene.insert(
            ElementId::Moon,
            ElementState::at(layout.moon_top).with_alpha(visible(night)),
        );
        for i in layout.star_indices() {
            scene.insert(
                ElementId::Star(i),
                ElementState::at(0.0).with_alpha(visible(night)),
            );
        }
        for i in layout.cloud_indices() {
            scene.insert(
                ElementId::Cloud(i),
                ElementState::at(0.0).with_alpha(visible(!night)),
            );
        }

        scene.insert(
            ElementId::Sea,
            ElementState::at(horizon).with_background(palette.sea),
        );
        let mut sun_reflection = ElementState::at(horizon);
        if night {
            sun_reflection.translation_y = 60.0;
            sun_reflection.alpha = 0.0;
            sun_reflection.scale_y = 0.5;
        } else {
            sun_reflection.alpha = 0.6;
            sun_reflection.scale_y = 0.8;
        }
        scene.insert(ElementId::SunReflection, sun_reflection);
        scene.insert(
            ElementId::MoonReflection,
            ElementState::at(horizon)
                .with_alpha(if night { 0.5 } else { 0.0 }),
        );
        for i in layout.star_indices() {
            scene.insert(
                ElementId::StarReflection(i),
                ElementState::at(horizon)
                    .with_alpha(if night { 0.4 } else { 0.0 }),
            );
        }
        for i in layout.wave_indices() {
            scene.insert(
                ElementId::Wave(i),
                ElementState::at(horizon)
                    .with_alpha(0.2 + 0.05 * f32::from(i)),
            );
        }

        scene
    }

    fn insert(&mut self, id: ElementId, state: ElementState) {
        if self.elements.insert(id, state).is_none() {
            self.order.push(id);
        }
    }

    /// Layout the scene was built from.
    #[must_use]
    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    /// State of one element.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&ElementState> {
        self.elements.get(&id)
    }

    /// Current scalar value of a property.
    #[must_use]
    pub fn float(&self, element: ElementId, property: Property) -> Option<f32> {
        self.element(element)?.float(property)
    }

    /// Current background color of an element.
    #[must_use]
    pub fn color(&self, element: ElementId) -> Option<Argb> {
        self.element(element)?.background
    }

    /// Element ids in draw order.
    #[must_use]
    pub fn element_ids(&self) -> &[ElementId] {
        &self.order
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Snapshot every element in draw order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<ElementSnapshot> {
        self.order
            .iter()
            .filter_map(|id| {
                self.elements.get(id).map(|state| ElementSnapshot {
                    id: id.to_string(),
                    state: *state,
                })
            })
            .collect()
    }
}

fn visible(shown: bool) -> f32 {
    if shown {
        1.0
    } else {
        0.0
    }
}

impl PropertyTarget for Scene {
    fn apply(&mut self, key: PropertyKey, value: PropertyValue) {
        let Some(state) = self.elements.get_mut(&key.element) else {
            log::warn!("ignoring write to missing element {}", key.element);
            return;
        };
        if !state.set(key.property, value) {
            log::warn!("ignoring mismatched value {value:?} for {key}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_scene() -> Scene {
        Scene::new(
            &LayoutOptions::default(),
            &PaletteOptions::default(),
            Phase::Day,
        )
    }

    #[test]
    fn day_scene_has_every_layout_element() {
        let scene = day_scene();
        let layout = LayoutOptions::default();
        // sky, sun, rays, moon, sea, sun/moon reflections + indexed elements
        let expected = 7
            + 2 * layout.star_count
            + layout.cloud_count
            + layout.wave_count;
        assert_eq!(scene.len(), expected);
        assert_eq!(scene.element_ids()[0], ElementId::Sky);
    }

    #[test]
    fn day_scene_resting_values() {
        let scene = day_scene();
        let palette = PaletteOptions::default();
        assert_eq!(scene.color(ElementId::Sky), Some(palette.blue_sky));
        assert_eq!(scene.float(ElementId::Moon, Property::Alpha), Some(0.0));
        assert_eq!(scene.float(ElementId::Cloud(0), Property::Alpha), Some(1.0));
        assert_eq!(
            scene.float(ElementId::Sun, Property::Y),
            Some(LayoutOptions::default().sun_top)
        );
        assert_eq!(
            scene.float(ElementId::SunReflection, Property::Alpha),
            Some(0.6)
        );
        let wave2 = scene.float(ElementId::Wave(2), Property::Alpha).unwrap();
        assert!((wave2 - 0.3).abs() < 1e-6);
    }

    #[test]
    fn night_scene_resting_values() {
        let layout = LayoutOptions::default();
        let palette = PaletteOptions::default();
        let scene = Scene::new(&layout, &palette, Phase::Night);
        assert_eq!(scene.color(ElementId::Sky), Some(palette.night_sky));
        assert_eq!(
            scene.float(ElementId::Sun, Property::Y),
            Some(layout.sky_height)
        );
        assert_eq!(scene.float(ElementId::Star(5), Property::Alpha), Some(1.0));
        assert_eq!(
            scene.float(ElementId::MoonReflection, Property::Alpha),
            Some(0.5)
        );
    }

    #[test]
    fn writes_to_missing_elements_are_ignored() {
        let mut scene = day_scene();
        let before = scene.snapshot().len();
        scene.apply(
            PropertyKey::new(ElementId::Star(200), Property::Alpha),
            PropertyValue::Float(1.0),
        );
        assert_eq!(scene.snapshot().len(), before);
        assert!(scene.element(ElementId::Star(200)).is_none());
    }

    #[test]
    fn snapshot_serializes_flat() {
        let scene = day_scene();
        let json = serde_json::to_value(scene.snapshot()).unwrap();
        let sky = &json[0];
        assert_eq!(sky["id"], "sky");
        assert_eq!(sky["background"], "#FF1E7AC7");
        assert!(json[1].get("background").is_none());
    }
}
