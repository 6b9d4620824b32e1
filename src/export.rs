//! SVG and PNG export of a [`Scene`].
//!
//! The SVG document carries the same structure the browser widget produces:
//! a style block, the `#cursor` line, the `#legend` group with
//! `#dateLegend` / `#valueLegend`, one `line.valueBar` per visible
//! observation (rotated about the centre) and the three `circle.circ`
//! reference circles. Animated attributes are written at their final value.

use std::fmt::Write as _;
use std::path::Path;

use egui::Color32;
use image::RgbaImage;

use crate::error::{Result, RoundPlotError};
use crate::surface::Scene;

/// Serialise the scene as a standalone SVG document.
pub fn scene_to_svg(scene: &Scene) -> String {
    let size = scene.size();
    let m = scene.middle();
    let style = &scene.style;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    let _ = writeln!(
        out,
        "<style>\n\
         #cursor {{ stroke: {cursor}; stroke-width: {cursor_w}; }}\n\
         #legend > text {{ text-anchor: middle; font-size: {font}px; font-family: monospace; }}\n\
         #dateLegend {{ fill: {date_fill}; }}\n\
         .valueBar {{ stroke-dasharray: {dash},{gap}; stroke-width: {bar_w}; }}\n\
         .circ {{ fill: none; stroke-width: {circ_w}; }}\n\
         </style>",
        cursor = css_color(style.cursor_stroke),
        cursor_w = style.cursor_width,
        font = style.legend_font_size,
        date_fill = css_color(style.date_legend_fill),
        dash = style.bar_dash.0,
        gap = style.bar_dash.1,
        bar_w = style.bar_width,
        circ_w = style.circle_width,
    );

    let (from, to) = scene.cursor();
    let _ = writeln!(
        out,
        r#"<line id="cursor" x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
        from.x, from.y, to.x, to.y
    );

    let date = scene.date_legend();
    let value = scene.value_legend();
    let _ = writeln!(out, r#"<g id="legend">"#);
    let _ = writeln!(
        out,
        r#"<text id="dateLegend" x="{}" y="{}">{}</text>"#,
        date.anchor.x,
        date.anchor.y,
        escape_text(&date.text)
    );
    let _ = writeln!(
        out,
        r#"<text id="valueLegend" x="{}" y="{}" fill="{}"{}>{}</text>"#,
        value.anchor.x,
        value.anchor.y,
        css_color(value.fill.target()),
        opacity_attr("fill-opacity", value.fill.target()),
        escape_text(&value.text)
    );
    let _ = writeln!(out, "</g>");

    for bar in scene.bars() {
        let outer = bar.outer_radius.target();
        if !outer.is_finite() || !bar.angle.is_finite() {
            continue;
        }
        let color = bar.color.target();
        let _ = writeln!(
            out,
            r#"<line class="valueBar" id="datum-{}" x1="{m}" y1="{}" x2="{m}" y2="{}" transform="rotate({}, {m}, {m})" stroke="{}"{}/>"#,
            bar.date,
            m - bar.inner_radius,
            m - outer,
            bar.angle,
            css_color(color),
            opacity_attr("stroke-opacity", color),
        );
    }

    for circle in scene.circles() {
        let _ = writeln!(
            out,
            r#"<circle class="circ" cx="{m}" cy="{m}" r="{}" stroke="{}"/>"#,
            circle.radius,
            css_color(circle.stroke)
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Rasterise the scene at its native size.
pub fn render_png(scene: &Scene) -> Result<RgbaImage> {
    let svg = scene_to_svg(scene);
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_str(&svg, &opt)?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(RoundPlotError::Raster { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    RgbaImage::from_raw(width, height, rgba).ok_or(RoundPlotError::Raster { width, height })
}

pub fn save_svg<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    std::fs::write(path.as_ref(), scene_to_svg(scene))?;
    log::debug!("saved plot SVG to {}", path.as_ref().display());
    Ok(())
}

pub fn save_png<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let img = render_png(scene)?;
    img.save_with_format(path.as_ref(), image::ImageFormat::Png)?;
    log::debug!("saved plot PNG to {}", path.as_ref().display());
    Ok(())
}

/// Save as SVG or PNG depending on the file extension.
pub fn save<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "svg" => save_svg(scene, path),
        "png" => save_png(scene, path),
        _ => Err(RoundPlotError::UnsupportedFormat(ext)),
    }
}

fn css_color(c: Color32) -> String {
    format!("rgb({}, {}, {})", c.r(), c.g(), c.b())
}

fn opacity_attr(name: &str, c: Color32) -> String {
    if c.a() == 255 {
        String::new()
    } else {
        format!(r#" {}="{:.3}""#, name, c.a() as f32 / 255.0)
    }
}

fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_in_legend_text() {
        assert_eq!(escape_text("a<b & c>d"), "a&lt;b &amp; c&gt;d");
    }

    #[test]
    fn opaque_colors_need_no_opacity_attribute() {
        assert_eq!(opacity_attr("fill-opacity", Color32::RED), "");
        assert!(opacity_attr("fill-opacity", Color32::TRANSPARENT).contains("0.000"));
    }
}
