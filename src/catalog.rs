//! The visual catalog: a fixed, ordered sequence of gallery entries.
//!
//! The shipped catalog is hand-authored literal data constructed once and
//! never mutated. Its order is the display order and carries the series
//! narrative (friction, stasis, hope, heritage), so it must never be sorted.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;

use crate::error::{Error, Result};

/// Target frame proportions for one visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Aspect {
    Vertical,
    Horizontal,
}

impl Aspect {
    /// Class token consumed by the styling collaborator.
    pub fn token(self) -> &'static str {
        match self {
            Aspect::Vertical => "vertical",
            Aspect::Horizontal => "horizontal",
        }
    }
}

/// Discriminator selecting the rendering strategy and styling hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Treadmill,
    Infographic,
    Escalator,
    Factory,
}

/// Source locator and accessibility text for one photographic image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub src: String,
    pub alt: String,
}

/// One catalog entry describing a single gallery item.
///
/// `image` is present for every variant except [`Variant::Infographic`],
/// which draws its own chart instead. [`validate`] enforces that contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisualDescriptor {
    /// Stable identity, unique within a catalog. Doubles as the list key in
    /// emitted markup and drives the priority-loading decision.
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub aspect: Aspect,
    pub variant: Variant,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
}

impl VisualDescriptor {
    fn new(
        id: &str,
        title: &str,
        subtitle: &str,
        description: &str,
        aspect: Aspect,
        variant: Variant,
        image: Option<(&str, &str)>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            description: description.to_string(),
            aspect,
            variant,
            image: image.map(|(src, alt)| ImageRef {
                src: src.to_string(),
                alt: alt.to_string(),
            }),
        }
    }
}

/// Check the data contract a catalog must satisfy before rendering:
/// ids are unique, and `image` is absent exactly for the infographic variant.
///
/// Violations are construction-time programmer errors; callers fail fast
/// rather than attempting recovery at render time.
pub fn validate(catalog: &[VisualDescriptor]) -> Result<()> {
    let mut seen = HashSet::new();
    for visual in catalog {
        if !seen.insert(visual.id.as_str()) {
            return Err(Error::DuplicateId(visual.id.clone()));
        }
        match (visual.variant, &visual.image) {
            (Variant::Infographic, Some(_)) => {
                return Err(Error::Contract {
                    id: visual.id.clone(),
                    reason: "infographic variant must not carry an image".to_string(),
                });
            }
            (Variant::Infographic, None) => {}
            (_, None) => {
                return Err(Error::Contract {
                    id: visual.id.clone(),
                    reason: "image-backed variant is missing its image".to_string(),
                });
            }
            (_, Some(_)) => {}
        }
    }
    Ok(())
}

static VISUALS: OnceLock<Vec<VisualDescriptor>> = OnceLock::new();

/// The shipped catalog for the Economic Mobility series, in display order.
pub fn visuals() -> &'static [VisualDescriptor] {
    VISUALS.get_or_init(build_visuals).as_slice()
}

fn build_visuals() -> Vec<VisualDescriptor> {
    vec![
        VisualDescriptor::new(
            "treadmill",
            "Redlined Stride",
            "Close-Up | 9:16",
            "Feet pounding an industrial treadmill, belt scarred with redlining cartography\u{2014}a visceral metaphor for systemic economic resistance rendered with dramatic studio light.",
            Aspect::Vertical,
            Variant::Treadmill,
            Some((
                "https://images.unsplash.com/photo-1594789797589-a8404eab73d6?auto=format&fit=crop&w=1080&q=80",
                "Close-up view of running shoes on a treadmill inside an industrial gym.",
            )),
        ),
        VisualDescriptor::new(
            "infographic",
            "Wealth vs Income Trajectories",
            "Infographic | 9:16",
            "A stark black field anchors a gold exponential wealth curve towering over a static blue income line, capturing widening disparities with minimalist data visualization.",
            Aspect::Vertical,
            Variant::Infographic,
            None,
        ),
        VisualDescriptor::new(
            "escalator",
            "Broken Climb",
            "Urban Portrait | 9:16",
            "A young urban dreamer stares up at a corroded escalator limned in cold blue light\u{2014}the cinematic pause before confronting fractured mobility pathways.",
            Aspect::Vertical,
            Variant::Escalator,
            Some((
                "https://images.unsplash.com/photo-1763604606192-db125b88a3c3?auto=format&fit=crop&w=1080&q=80",
                "Young person in winter clothing standing beneath a rusted escalator in a decaying urban structure.",
            )),
        ),
        VisualDescriptor::new(
            "factory",
            "Line of Pride",
            "Heritage Portrait | 16:9",
            "A Detroit line worker bathes in molten sparks and golden-hour haze, honoring blue-collar resilience with Kodachrome warmth and cinematic depth.",
            Aspect::Horizontal,
            Variant::Factory,
            Some((
                "https://images.unsplash.com/photo-1576673195903-bb573ef5a755?auto=format&fit=crop&w=1600&q=80",
                "Auto factory worker welding on an assembly line with sparks flying inside a sunlit industrial hall.",
            )),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shipped_catalog_is_valid() {
        validate(visuals()).expect("shipped catalog must satisfy the data contract");
    }

    #[test]
    fn shipped_catalog_order_is_narrative() {
        let ids: Vec<&str> = visuals().iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, ["treadmill", "infographic", "escalator", "factory"]);
    }

    #[test]
    fn validate_rejects_missing_image() {
        let broken = vec![VisualDescriptor::new(
            "x",
            "t",
            "s",
            "d",
            Aspect::Vertical,
            Variant::Treadmill,
            None,
        )];
        assert!(matches!(
            validate(&broken),
            Err(Error::Contract { ref id, .. }) if id == "x"
        ));
    }

    #[test]
    fn validate_rejects_infographic_with_image() {
        let broken = vec![VisualDescriptor::new(
            "x",
            "t",
            "s",
            "d",
            Aspect::Vertical,
            Variant::Infographic,
            Some(("https://example.com/a.jpg", "a")),
        )];
        assert!(matches!(validate(&broken), Err(Error::Contract { .. })));
    }

    #[test]
    fn validate_rejects_duplicate_ids() {
        let a = VisualDescriptor::new(
            "same",
            "t",
            "s",
            "d",
            Aspect::Vertical,
            Variant::Factory,
            Some(("https://example.com/a.jpg", "a")),
        );
        let broken = vec![a.clone(), a];
        assert!(matches!(validate(&broken), Err(Error::DuplicateId(ref id)) if id == "same"));
    }

    #[test]
    fn catalog_json_export_round_trips_fields() {
        let json = serde_json::to_value(visuals()).expect("serialize catalog");
        let first = &json[0];
        assert_eq!(first["id"], "treadmill");
        assert_eq!(first["aspect"], "vertical");
        assert_eq!(first["variant"], "treadmill");
        assert!(first["image"]["src"]
            .as_str()
            .expect("src is a string")
            .starts_with("https://images.unsplash.com/"));
        // the infographic entry omits the image field entirely
        assert!(json[1].get("image").is_none());
    }
}
