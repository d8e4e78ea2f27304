use crate::foundation::core::RasterSize;
use crate::foundation::error::{ScratchError, ScratchResult};
use crate::style::surface_style::LabelStyle;
use anyhow::Context as _;
use std::sync::{Arc, OnceLock};

/// Rasterize the instruction label into a premultiplied RGBA8 layer of `size`.
///
/// Returns `Ok(None)` when there is nothing to draw, including when no installed font can shape
/// the text.
pub(crate) fn rasterize_label(
    label: &LabelStyle,
    size: RasterSize,
) -> ScratchResult<Option<Vec<u8>>> {
    if label.text.trim().is_empty() {
        return Ok(None);
    }

    let svg = label_svg(label, size);
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse label svg")?;
    if tree.root().children().is_empty() {
        tracing::warn!(text = %label.text, "label produced no outlines; no usable font");
        return Ok(None);
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| ScratchError::render("failed to allocate label pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(Some(pixmap.data().to_vec()))
}

fn label_svg(label: &LabelStyle, size: RasterSize) -> String {
    let w = size.width();
    let h = size.height();
    let x = f64::from(w) / 2.0;
    let y = f64::from(h) / 2.0 + label.offset_y;
    let weight = if label.bold { "bold" } else { "normal" };
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            r#"<text x="{x}" y="{y}" text-anchor="middle" font-family="{family}" font-size="{size}" "#,
            r#"font-weight="{weight}" letter-spacing="{spacing}" fill="{fill}" fill-opacity="{opacity}">"#,
            "{text}</text></svg>"
        ),
        w = w,
        h = h,
        x = x,
        y = y,
        family = xml_escape(&label.font_family),
        size = label.font_size,
        weight = weight,
        spacing = label.letter_spacing,
        fill = label.color.to_svg_hex(),
        opacity = label.color.a.clamp(0.0, 1.0),
        text = xml_escape(&label.text),
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.len(), "loaded system fonts for labels");
        Arc::new(db)
    })
    .clone()
}

#[cfg(test)]
#[path = "../../tests/unit/raster/label.rs"]
mod tests;
