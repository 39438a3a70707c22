//! Page assembly: one card per catalog entry, in catalog order.

use crate::catalog::{self, VisualDescriptor};
use crate::frame::{render_frame, ImageProvider};
use crate::markup::Element;
use crate::Result;

/// Fixed page header copy.
pub const PAGE_TITLE: &str = "Economic Mobility Series";
pub const PAGE_INTRO: &str = "Four narrative visuals examining the friction, stasis, hope, and heritage woven into the pursuit of prosperity.";

/// Render one card: subtitle label, heading, frame, and body caption.
pub fn render_card(visual: &VisualDescriptor, images: &dyn ImageProvider) -> Result<Element> {
    Ok(Element::new("article")
        .class("card")
        .attr("data-visual", visual.id.as_str())
        .child(Element::new("small").text(visual.subtitle.as_str()))
        .child(Element::new("h2").text(visual.title.as_str()))
        .child(render_frame(visual, images)?)
        .child(Element::new("p").text(visual.description.as_str())))
}

/// Assemble the page: a fixed header above a grid of cards, preserving
/// catalog order exactly.
///
/// The catalog is validated up front, so a contract violation fails the
/// whole render before any markup is produced.
pub fn render_page(catalog: &[VisualDescriptor], images: &dyn ImageProvider) -> Result<Element> {
    catalog::validate(catalog)?;
    log::debug!("assembling page with {} visuals", catalog.len());

    let mut grid = Element::new("section").class("grid");
    for visual in catalog {
        grid = grid.child(render_card(visual, images)?);
    }

    Ok(Element::new("main")
        .child(
            Element::new("header")
                .child(Element::new("h1").text(PAGE_TITLE))
                .child(Element::new("p").text(PAGE_INTRO)),
        )
        .child(grid))
}

/// Render a self-contained HTML document around the assembled page. The
/// shell adds nothing beyond the doctype, charset/viewport meta, and title.
pub fn render_document(catalog: &[VisualDescriptor], images: &dyn ImageProvider) -> Result<String> {
    let body = render_page(catalog, images)?;
    let document = Element::new("html")
        .attr("lang", "en")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(
                    Element::new("meta")
                        .attr("name", "viewport")
                        .attr("content", "width=device-width, initial-scale=1"),
                )
                .child(Element::new("title").text(PAGE_TITLE)),
        )
        .child(Element::new("body").child(body));
    Ok(format!("<!DOCTYPE html>\n{}\n", document.to_html()))
}
