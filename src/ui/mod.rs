pub mod boxes;
pub mod canvas;
pub mod panels;
pub mod text;
pub mod theme;

use ratatui::buffer::Buffer;

use crate::layout::{DashboardLayout, PanelKind};
use crate::system::{Readings, or_zeroed};
use boxes::{draw_border, draw_box};
use canvas::Canvas;
use text::draw_centered_text;

pub const TITLE: &str = "GoStat - System Monitor";

/// Draws one full frame into a ratatui buffer.
pub fn draw_dashboard(buf: &mut Buffer, readings: &Readings) {
    let width = i32::from(buf.area.width);
    let height = i32::from(buf.area.height);
    draw_scene(buf, width, height, readings);
}

/// Outer border, title row, then the six boxed panels.
pub fn draw_scene<C: Canvas + ?Sized>(
    canvas: &mut C,
    width: i32,
    height: i32,
    readings: &Readings,
) {
    draw_border(canvas, 0, 0, width - 1, height - 1);
    draw_centered_text(canvas, 0, 1, width, TITLE, theme::dashboard_title());

    let layout = DashboardLayout::compute(width, height);
    for (kind, geometry) in layout.panels() {
        if !geometry.frame.is_drawable() {
            continue;
        }
        draw_box(canvas, geometry.frame, kind.title());

        let area = geometry.content;
        match kind {
            PanelKind::System => panels::render_system(canvas, area, &or_zeroed(&readings.system)),
            PanelKind::Memory => panels::render_memory(canvas, area, &or_zeroed(&readings.memory)),
            PanelKind::Docker => panels::render_docker(canvas, area, readings.docker.as_ref()),
            PanelKind::CpuLoad => panels::render_cpu_load(
                canvas,
                area,
                &or_zeroed(&readings.cpu),
                &or_zeroed(&readings.load),
            ),
            PanelKind::Disk => panels::render_disk(canvas, area, &or_zeroed(&readings.disk)),
            PanelKind::Network => {
                panels::render_network(canvas, area, &or_zeroed(&readings.network))
            }
        }
    }
}
