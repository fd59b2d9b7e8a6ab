// Copyright 2025 the Ruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless host for `ruler_core`.
//!
//! Plays the part of a windowing host: reports a surface size, drags a pointer across the ruler,
//! flips the label toggle and paints each frame into an SVG file.
//!
//! Usage: `ruler_demo [OUT_DIR]`. Set `RUST_LOG=ruler_core=trace` to watch the ruler's events.

mod svg;

use std::error::Error;
use std::path::{Path, PathBuf};

use kurbo::{Point, Size};
use ruler_core::{DeviceMetrics, Ruler, RulerStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A simulated display.
struct Device {
    name: &'static str,
    xdpi: f64,
    ydpi: f64,
    density: f64,
    size: Size,
}

const DEVICES: &[Device] = &[
    Device {
        name: "desktop_landscape",
        xdpi: 96.0,
        ydpi: 96.0,
        density: 1.0,
        size: Size::new(800.0, 160.0),
    },
    Device {
        name: "phone_portrait",
        xdpi: 401.0,
        ydpi: 403.0,
        density: 2.625,
        size: Size::new(1080.0, 1920.0),
    },
    Device {
        name: "tablet_landscape",
        xdpi: 224.0,
        ydpi: 224.0,
        density: 1.5,
        size: Size::new(2048.0, 1536.0),
    },
];

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    for device in DEVICES {
        run_device(device, &out_dir)?;
    }
    Ok(())
}

fn run_device(device: &Device, out_dir: &Path) -> Result<(), Box<dyn Error>> {
    let metrics = DeviceMetrics::try_new(device.xdpi, device.ydpi, device.density, device.density)?;
    let mut ruler = Ruler::new(metrics, RulerStyle::default());
    ruler.on_size_changed(device.size);
    info!(
        device = device.name,
        ticks = ruler.ticks().len(),
        orientation = ?ruler.orientation(),
        "surface sized"
    );

    // Drag from the origin to roughly 2 3/8 inches along the ruler.
    let ppi = ruler.pixels_per_inch();
    let orientation = ruler.orientation();
    let size = ruler.size();
    let cross = 0.5 * orientation.cross_extent(size);
    ruler.on_pointer_down(orientation.to_surface(Point::new(0.0, cross), size));
    for step in 1..=19 {
        let along = f64::from(step) * ppi / 8.0;
        ruler.on_pointer_move(orientation.to_surface(Point::new(along, cross), size));
    }
    ruler.on_pointer_up(Point::ZERO);

    let reading = ruler.tracker().format_inches(ppi);
    write_frame(&mut ruler, out_dir, device.name, "sparse")?;

    if ruler.set_display_all_labels(true) {
        write_frame(&mut ruler, out_dir, device.name, "all_labels")?;
    }
    info!(device = device.name, reading = %reading, "measured");
    Ok(())
}

fn write_frame(
    ruler: &mut Ruler,
    out_dir: &Path,
    device: &str,
    variant: &str,
) -> std::io::Result<()> {
    if !ruler.needs_redraw() {
        return Ok(());
    }
    let mut scene = svg::SvgScene::new(ruler.size());
    scene.paint(ruler.draw());
    let path = out_dir.join(format!("ruler_{device}_{variant}.svg"));
    std::fs::write(&path, scene.to_svg_string())?;
    info!(path = %path.display(), "wrote frame");
    Ok(())
}
