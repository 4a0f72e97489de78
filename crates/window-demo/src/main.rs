// File: crates/window-demo/src/main.rs
// Summary: Windowed host for the schedule chart; CPU raster blitted through winit + softbuffer, tooltip on hover.

mod tooltip;

use anyhow::{Context, Result};
use schedule_core::telemetry::init_default_tracing;
use schedule_core::{ChartEvent, ChartOptions, Schedule, ScheduleChart, SkiaSurface, Viewport};
use std::num::NonZeroU32;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tooltip::WindowTooltip;
use tracing::{info, warn};
use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Page color under the transparent margins of the chart raster.
const BACKDROP: [u8; 3] = [255, 255, 255];

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("demos/schedule_sample.json"));
    let schedule = load_schedule(&path).with_context(|| format!("failed to load schedule '{}'", path.display()))?;
    if schedule.is_empty() {
        anyhow::bail!("schedule '{}' has no rows", path.display());
    }
    info!(rows = schedule.len(), "loaded schedule");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Payment Schedule")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 420.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow::anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow::anyhow!("softbuffer surface: {e}"))?;

    let options = ChartOptions::default();
    let tooltip = WindowTooltip::new(options.theme)?;
    let mut size = window.inner_size();
    let mut scale = window.scale_factor() as f32;
    let mut chart = ScheduleChart::new(
        Arc::new(schedule),
        SkiaSurface::new()?,
        tooltip,
        viewport_for(size, scale),
        options,
    )?;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => {
                let chart_event = match event {
                    WindowEvent::CloseRequested => {
                        *control_flow = ControlFlow::Exit;
                        None
                    }
                    WindowEvent::Resized(new_size) => {
                        size = new_size;
                        Some(ChartEvent::Resize(viewport_for(size, scale)))
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, new_inner_size } => {
                        scale = scale_factor as f32;
                        size = *new_inner_size;
                        Some(ChartEvent::Resize(viewport_for(size, scale)))
                    }
                    WindowEvent::CursorMoved { position, .. } => Some(ChartEvent::PointerMove {
                        x: position.x as f32 / scale,
                        y: position.y as f32 / scale,
                    }),
                    WindowEvent::CursorLeft { .. } => Some(ChartEvent::PointerLeave),
                    _ => None,
                };
                if let Some(chart_event) = chart_event {
                    if let Err(err) = chart.handle_event(chart_event) {
                        warn!(%err, "chart event failed");
                    }
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                if let Err(err) = present(&mut chart, &mut surface, size, scale) {
                    warn!(%err, "present failed");
                }
            }
            _ => {}
        }
    })
}

fn viewport_for(size: PhysicalSize<u32>, scale: f32) -> Viewport {
    Viewport::new(size.width as f32 / scale, size.height as f32 / scale, scale)
}

/// Blend the chart and, when shown, the tooltip into the window frame.
fn present(
    chart: &mut ScheduleChart<SkiaSurface, WindowTooltip>,
    surface: &mut softbuffer::Surface,
    size: PhysicalSize<u32>,
    scale: f32,
) -> Result<()> {
    let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| anyhow::anyhow!("resize: {e}"))?;
    let mut frame = surface.buffer_mut().map_err(|e| anyhow::anyhow!("frame: {e}"))?;
    let (fw, fh) = (size.width as usize, size.height as usize);
    frame.fill(pack(BACKDROP));

    let (rgba, cw, ch) = chart.surface_mut().to_rgba8()?;
    blit(&mut frame, (fw, fh), &rgba, (cw as usize, ch as usize), (0, 0));

    let tip = chart.tooltip_mut();
    if tip.is_visible() {
        let at = tip.position();
        let origin = ((at.x * scale).round() as usize, (at.y * scale).round() as usize);
        if let Some((pixels, tw, th)) = tip.rgba(scale)? {
            blit(&mut frame, (fw, fh), pixels, (*tw as usize, *th as usize), origin);
        }
    }
    frame.present().map_err(|e| anyhow::anyhow!("present: {e}"))?;
    Ok(())
}

/// Source-over blend of unpremultiplied RGBA onto a 0RGB frame, clipped to the frame.
fn blit(frame: &mut [u32], frame_size: (usize, usize), rgba: &[u8], src_size: (usize, usize), origin: (usize, usize)) {
    let (fw, fh) = frame_size;
    let (sw, sh) = src_size;
    let (ox, oy) = origin;
    for y in 0..sh.min(fh.saturating_sub(oy)) {
        for x in 0..sw.min(fw.saturating_sub(ox)) {
            let s = &rgba[(y * sw + x) * 4..(y * sw + x) * 4 + 4];
            let a = s[3] as u32;
            if a == 0 {
                continue;
            }
            let dst = &mut frame[(oy + y) * fw + ox + x];
            let d = unpack(*dst);
            let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a) + 127) / 255) as u8;
            *dst = pack([mix(s[0], d[0]), mix(s[1], d[1]), mix(s[2], d[2])]);
        }
    }
}

fn pack([r, g, b]: [u8; 3]) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

fn unpack(px: u32) -> [u8; 3] {
    [(px >> 16) as u8, (px >> 8) as u8, px as u8]
}

fn load_schedule(path: &Path) -> Result<Schedule> {
    let is_csv = path.extension().is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let schedule = if is_csv {
        Schedule::from_csv_reader(std::fs::File::open(path)?)?
    } else {
        Schedule::from_json(&std::fs::read_to_string(path)?)?
    };
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blit_clips_and_blends() {
        let mut frame = vec![pack(BACKDROP); 4];
        // 2x2 source: opaque red, transparent, half black, opaque blue
        let src = [255, 0, 0, 255, 0, 0, 0, 0, 0, 0, 0, 128, 0, 0, 255, 255];
        blit(&mut frame, (2, 2), &src, (2, 2), (1, 1));
        assert_eq!(frame[0], pack(BACKDROP));
        assert_eq!(frame[3], pack([255, 0, 0]));

        let mut frame = vec![pack(BACKDROP); 4];
        blit(&mut frame, (2, 2), &src, (2, 2), (0, 0));
        assert_eq!(frame[1], pack(BACKDROP));
        assert_eq!(frame[2], pack([127, 127, 127]));
        assert_eq!(frame[3], pack([0, 0, 255]));
    }
}
