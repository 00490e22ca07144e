//! One renderer per dashboard panel. Each draws into the content area of
//! its box and does nothing when that area has no cells.

use ratatui::style::Color;

use super::boxes::draw_bar;
use super::canvas::Canvas;
use super::text::{draw_centered_block, draw_centered_text, draw_left_block, draw_text};
use super::theme;
use crate::format::{GIB, bytes_to_mib, format_uptime, percent, truncate_with_ellipsis};
use crate::layout::Rect;
use crate::system::snapshot::{
    CpuSnapshot, DiskSnapshot, DockerSnapshot, LoadSnapshot, MemorySnapshot, NetSnapshot,
    RECENT_CONTAINER_LIMIT, SystemSnapshot,
};

pub const DOCKER_UNAVAILABLE: &str = "Docker is not installed or not running.";

/// Full scale of the network bars.
const NETWORK_BAR_SCALE: u64 = GIB;

/// Row the gauge-style panels build down from. Sits two rows above the
/// middle so the blocks beneath it stay near the center.
fn anchor_row(area: Rect) -> i32 {
    area.y + area.height / 2 - 2
}

pub fn render_system<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, system: &SystemSnapshot) {
    if !area.is_drawable() {
        return;
    }
    let lines = [
        format!("OS Version: {}", system.os_name),
        format!("HostName: {}", system.hostname),
        format!("Uptime: {}", format_uptime(system.uptime)),
        format!("CPU Info: {}", system.cpu_model),
    ];
    draw_centered_block(canvas, area, &lines, theme::plain());
}

pub fn render_memory<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, memory: &MemorySnapshot) {
    if !area.is_drawable() {
        return;
    }
    let row = anchor_row(area);
    let used_percent = memory.used_percent();

    labeled_bar(
        canvas,
        area,
        row,
        100.0,
        theme::GREEN,
        &format!("Total: {}G", memory.total),
        theme::WHITE,
    );
    labeled_bar(
        canvas,
        area,
        row + 3,
        used_percent,
        theme::ORANGE,
        &format!("Used: {}G ({:.2}%)", memory.used, used_percent),
        theme::ORANGE,
    );
}

pub fn render_docker<C: Canvas + ?Sized>(
    canvas: &mut C,
    area: Rect,
    docker: Option<&DockerSnapshot>,
) {
    if !area.is_drawable() {
        return;
    }
    let Some(docker) = docker else {
        draw_centered_text(
            canvas,
            area.x,
            area.y,
            area.width,
            DOCKER_UNAVAILABLE,
            theme::fg(theme::RED),
        );
        return;
    };

    let column_width = area.width / 2;

    let summary = [
        format!("Running Containers: {}", docker.running_count),
        format!("Stopped Containers: {}", docker.stopped_count),
        format!("Total Images: {}", docker.total_images),
    ];
    let left = Rect::new(area.x, area.y, column_width, area.height);
    draw_left_block(canvas, left, &summary, theme::plain());

    let right_x = area.x + column_width;
    draw_text(
        canvas,
        right_x,
        area.y,
        column_width,
        "Recent Containers:",
        theme::fg(theme::YELLOW),
    );

    let rows = usize::try_from(area.height - 1)
        .unwrap_or(0)
        .min(RECENT_CONTAINER_LIMIT);
    let budget = usize::try_from(column_width).unwrap_or(0);
    for (i, container) in docker.recent_containers.iter().take(rows).enumerate() {
        let line = truncate_with_ellipsis(&format!("- {container}"), budget);
        draw_text(
            canvas,
            right_x,
            area.y + 1 + i as i32,
            column_width,
            &line,
            theme::fg(theme::DARK_CYAN),
        );
    }
}

pub fn render_cpu_load<C: Canvas + ?Sized>(
    canvas: &mut C,
    area: Rect,
    cpu: &CpuSnapshot,
    load: &LoadSnapshot,
) {
    if !area.is_drawable() {
        return;
    }
    let row = anchor_row(area);

    draw_bar(
        canvas,
        area.x,
        row,
        area.width,
        cpu.usage_percent,
        100.0,
        theme::RED,
    );
    draw_centered_text(
        canvas,
        area.x,
        row + 2,
        area.width,
        &format!("CPU Usage: {:.2}%", cpu.usage_percent),
        theme::text(),
    );

    let load_style = theme::fg(theme::YELLOW);
    draw_centered_text(canvas, area.x, row + 4, area.width, "Load Average:", load_style);
    draw_centered_text(
        canvas,
        area.x,
        row + 5,
        area.width,
        &format!(
            "1min: {:.2}  5min: {:.2}  15min: {:.2}",
            load.load1, load.load5, load.load15
        ),
        load_style,
    );
}

pub fn render_disk<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, disk: &DiskSnapshot) {
    if !area.is_drawable() {
        return;
    }
    let root = &disk.root;
    let lines = [
        format!(
            "Total: {}G Used: {}G Total Usage: {:.2}%",
            disk.total_gib, disk.used_gib, disk.percent
        ),
        "=".repeat(area.width as usize),
        "Disk       Mounted    Free    Used".to_string(),
        format!(
            "{}     {}       {}G     {:.2}%",
            root.device, root.mount_point, root.free_gib, root.percent
        ),
    ];
    draw_centered_block(canvas, area, &lines, theme::plain());
}

pub fn render_network<C: Canvas + ?Sized>(canvas: &mut C, area: Rect, net: &NetSnapshot) {
    if !area.is_drawable() {
        return;
    }
    let row = anchor_row(area);
    let scale = NETWORK_BAR_SCALE as f64;

    labeled_bar(
        canvas,
        area,
        row,
        percent(net.total_bytes_recv as f64, scale),
        theme::GREEN,
        &format!("Recv: {:.2} MB", bytes_to_mib(net.total_bytes_recv)),
        theme::GREEN,
    );
    labeled_bar(
        canvas,
        area,
        row + 3,
        percent(net.total_bytes_sent as f64, scale),
        theme::RED,
        &format!("Sent: {:.2} MB", bytes_to_mib(net.total_bytes_sent)),
        theme::RED,
    );
}

/// A percentage bar with its caption centered on the row below.
fn labeled_bar<C: Canvas + ?Sized>(
    canvas: &mut C,
    area: Rect,
    row: i32,
    percent: f64,
    bar_color: Color,
    label: &str,
    label_color: Color,
) {
    draw_bar(canvas, area.x, row, area.width, percent, 100.0, bar_color);
    draw_centered_text(
        canvas,
        area.x,
        row + 1,
        area.width,
        label,
        theme::fg(label_color),
    );
}
