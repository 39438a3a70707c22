//! Frame selection: image-backed frame vs. procedurally drawn chart.
//!
//! Given one [`VisualDescriptor`] this module picks a rendering strategy,
//! composes the frame's class tokens for the styling collaborator, and hands
//! image loading off to an [`ImageProvider`].

use crate::catalog::{Aspect, ImageRef, Variant, VisualDescriptor};
use crate::chart;
use crate::error::{Error, Result};
use crate::markup::Element;

/// Responsive sizing hint forwarded to the image delivery collaborator:
/// full viewport width below the breakpoint, half above it.
pub const RESPONSIVE_SIZES: &str = "(max-width: 768px) 100vw, 50vw";

/// The one visual eligible for above-the-fold priority loading.
pub const PRIORITY_ID: &str = "treadmill";

/// Rendering strategy for one visual, derived from its variant tag.
///
/// Modeling the dispatch as a sum type keeps the two strategies exhaustive
/// at the type level instead of branching on a string tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind<'a> {
    /// The self-drawn wealth-vs-income chart; always framed vertically.
    Chart,
    /// A photographic image delivered by the external collaborator.
    Image(&'a ImageRef),
}

impl<'a> FrameKind<'a> {
    /// Derive the strategy for a descriptor.
    ///
    /// An image-backed variant without an image is a catalog contract
    /// violation; it surfaces here as an error rather than a panic so the
    /// failure is caught before any markup is emitted.
    pub fn of(visual: &'a VisualDescriptor) -> Result<Self> {
        match (visual.variant, visual.image.as_ref()) {
            (Variant::Infographic, _) => Ok(FrameKind::Chart),
            (_, Some(image)) => Ok(FrameKind::Image(image)),
            (_, None) => Err(Error::Contract {
                id: visual.id.clone(),
                reason: "image-backed variant is missing its image".to_string(),
            }),
        }
    }
}

/// Compose the frame's class tokens: literal base, aspect token, and a
/// variant-specific styling hook (factory is the default hook).
pub fn frame_tokens(aspect: Aspect, variant: Variant) -> [&'static str; 3] {
    let variant_token = match variant {
        Variant::Treadmill => "treadmill-frame",
        Variant::Escalator => "escalator-frame",
        _ => "factory-frame",
    };
    ["frame", aspect.token(), variant_token]
}

/// Everything the image delivery collaborator needs for one image: source
/// locator, accessibility text, fill-container flag, responsive sizing hint,
/// and the priority-loading hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    pub fill: bool,
    pub sizes: &'static str,
    pub priority: bool,
}

/// Seam to the external image delivery collaborator. The collaborator owns
/// format negotiation, caching, and load scheduling; this crate only states
/// the request.
pub trait ImageProvider {
    fn render(&self, request: &ImageRequest<'_>) -> Element;
}

/// Default provider: a plain `<img>` carrying the request as attributes.
pub struct StaticImageProvider;

impl ImageProvider for StaticImageProvider {
    fn render(&self, request: &ImageRequest<'_>) -> Element {
        let mut img = Element::new("img")
            .attr("src", request.src)
            .attr("alt", request.alt)
            .attr("sizes", request.sizes);
        if request.fill {
            img = img.class("fill");
        }
        if request.priority {
            img.attr("loading", "eager").attr("fetchpriority", "high")
        } else {
            img.attr("loading", "lazy")
        }
    }
}

/// Render the frame for one visual.
///
/// The chart branch hardcodes the vertical frame: the catalog carries a
/// single infographic and it is authored vertical, so the selector does not
/// re-derive the aspect there.
pub fn render_frame(visual: &VisualDescriptor, images: &dyn ImageProvider) -> Result<Element> {
    match FrameKind::of(visual)? {
        FrameKind::Chart => Ok(Element::new("div").class("frame vertical").child(
            Element::new("div")
                .class("infographic")
                .child(chart::wealth_income_chart()),
        )),
        FrameKind::Image(image) => {
            let request = ImageRequest {
                src: &image.src,
                alt: &image.alt,
                fill: true,
                sizes: RESPONSIVE_SIZES,
                priority: visual.id == PRIORITY_ID,
            };
            log::debug!("frame for `{}` requests image {}", visual.id, request.src);
            Ok(Element::new("div")
                .class(frame_tokens(visual.aspect, visual.variant).join(" "))
                .child(images.render(&request))
                .child(Element::new("div").class("overlay-gradient")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::visuals;

    fn descriptor(id: &str, aspect: Aspect, variant: Variant) -> VisualDescriptor {
        VisualDescriptor {
            id: id.to_string(),
            title: "t".to_string(),
            subtitle: "s".to_string(),
            description: "d".to_string(),
            aspect,
            variant,
            image: match variant {
                Variant::Infographic => None,
                _ => Some(ImageRef {
                    src: format!("https://example.com/{id}.jpg"),
                    alt: format!("alt for {id}"),
                }),
            },
        }
    }

    #[test]
    fn tokens_are_pure_in_aspect_and_variant() {
        assert_eq!(
            frame_tokens(Aspect::Vertical, Variant::Treadmill),
            ["frame", "vertical", "treadmill-frame"]
        );
        assert_eq!(
            frame_tokens(Aspect::Vertical, Variant::Escalator),
            ["frame", "vertical", "escalator-frame"]
        );
        assert_eq!(
            frame_tokens(Aspect::Horizontal, Variant::Factory),
            ["frame", "horizontal", "factory-frame"]
        );
        // repeated calls agree
        assert_eq!(
            frame_tokens(Aspect::Horizontal, Variant::Factory),
            frame_tokens(Aspect::Horizontal, Variant::Factory)
        );
    }

    #[test]
    fn frame_kind_dispatches_on_variant() {
        let chart = descriptor("c", Aspect::Vertical, Variant::Infographic);
        assert_eq!(FrameKind::of(&chart).unwrap(), FrameKind::Chart);

        let photo = descriptor("p", Aspect::Vertical, Variant::Escalator);
        match FrameKind::of(&photo).unwrap() {
            FrameKind::Image(image) => assert_eq!(image.src, "https://example.com/p.jpg"),
            FrameKind::Chart => panic!("escalator must be image-backed"),
        }
    }

    #[test]
    fn missing_image_is_a_contract_error() {
        let mut broken = descriptor("b", Aspect::Vertical, Variant::Factory);
        broken.image = None;
        assert!(matches!(
            FrameKind::of(&broken),
            Err(Error::Contract { ref id, .. }) if id == "b"
        ));
        assert!(render_frame(&broken, &StaticImageProvider).is_err());
    }

    #[test]
    fn chart_frame_is_always_vertical() {
        // even a (hypothetical) horizontal infographic gets the vertical frame
        let odd = descriptor("odd", Aspect::Horizontal, Variant::Infographic);
        let html = render_frame(&odd, &StaticImageProvider).unwrap().to_html();
        assert!(html.starts_with(r#"<div class="frame vertical">"#));
        assert!(html.contains("<svg"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn priority_hint_marks_only_the_treadmill() {
        for visual in visuals() {
            let Ok(el) = render_frame(visual, &StaticImageProvider) else {
                panic!("shipped visual must render");
            };
            let html = el.to_html();
            if visual.variant == Variant::Infographic {
                continue;
            }
            if visual.id == PRIORITY_ID {
                assert!(html.contains(r#"fetchpriority="high""#));
                assert!(html.contains(r#"loading="eager""#));
            } else {
                assert!(html.contains(r#"loading="lazy""#));
                assert!(!html.contains("fetchpriority"));
            }
        }
    }

    #[test]
    fn image_frame_carries_overlay_and_sizes_hint() {
        let photo = descriptor("p", Aspect::Vertical, Variant::Treadmill);
        let html = render_frame(&photo, &StaticImageProvider).unwrap().to_html();
        assert!(html.contains(r#"class="overlay-gradient""#));
        assert!(html.contains(r#"sizes="(max-width: 768px) 100vw, 50vw""#));
        assert!(html.contains(r#"class="fill""#));
    }
}
