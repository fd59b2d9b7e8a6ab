// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG drawing sink for `ruler_demo`.

use kurbo::{Rect, Size};
use peniko::Brush;
use ruler_core::{DrawCommand, TextAnchor, TextBaseline};

#[derive(Debug)]
pub(crate) struct SvgScene {
    commands: Vec<DrawCommand>,
    view_box: Rect,
}

impl SvgScene {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            commands: Vec::new(),
            view_box: size.to_rect(),
        }
    }

    pub(crate) fn paint(&mut self, commands: Vec<DrawCommand>) {
        self.commands = commands;
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self.view_box;
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');
        out.push_str(&format!(
            r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#ffffff"/>"##,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        // Stable sort: equal z keeps emission order.
        let mut order: Vec<&DrawCommand> = self.commands.iter().collect();
        order.sort_by_key(|c| c.z_index());

        for command in order {
            match command {
                DrawCommand::Line { line, stroke, .. } => {
                    out.push_str(&format!(
                        r#"<line x1="{}" y1="{}" x2="{}" y2="{}""#,
                        line.p0.x, line.p0.y, line.p1.x, line.p1.y
                    ));
                    write_paint_attr(&mut out, "stroke", &stroke.brush);
                    out.push_str(&format!(r#" stroke-width="{}""#, stroke.stroke_width));
                    out.push_str("/>\n");
                }
                DrawCommand::Text {
                    content,
                    position,
                    font_size,
                    anchor,
                    baseline,
                    fill,
                    ..
                } => {
                    let baseline = match baseline {
                        TextBaseline::Middle => "middle",
                        TextBaseline::Alphabetic => "alphabetic",
                        TextBaseline::Hanging => "hanging",
                    };
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" dominant-baseline="{}""#,
                        position.x, position.y, font_size, baseline
                    ));
                    out.push_str(match anchor {
                        TextAnchor::Start => r#" text-anchor="start""#,
                        TextAnchor::Middle => r#" text-anchor="middle""#,
                        TextAnchor::End => r#" text-anchor="end""#,
                    });
                    write_paint_attr(&mut out, "fill", fill);
                    out.push('>');
                    out.push_str(&escape_xml(content));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
