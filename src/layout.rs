//! Screen geometry for the dashboard.
//!
//! Everything here is integer cell arithmetic with no knowledge of the
//! terminal or of telemetry. Rectangles may come out with non-positive
//! dimensions on very small screens; callers skip those.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect with a non-positive side covers no cells and must not be drawn.
    pub fn is_drawable(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.right() <= width && self.bottom() <= height
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    System,
    Memory,
    Docker,
    CpuLoad,
    Disk,
    Network,
}

impl PanelKind {
    pub fn title(self) -> &'static str {
        match self {
            PanelKind::System => "System Info",
            PanelKind::Memory => "Memory Usage",
            PanelKind::Docker => "Docker Info",
            PanelKind::CpuLoad => "CPU & Load",
            PanelKind::Disk => "Disk Usage",
            PanelKind::Network => "Network Traffic",
        }
    }
}

/// The bordered box of a panel and the content area inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub frame: Rect,
    pub content: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLayout {
    pub width: i32,
    pub height: i32,
    pub system: PanelGeometry,
    pub memory: PanelGeometry,
    pub docker: PanelGeometry,
    pub cpu_load: PanelGeometry,
    pub disk: PanelGeometry,
    pub network: PanelGeometry,
}

impl DashboardLayout {
    /// Two columns of three rows. The title occupies row 1, so the first
    /// row of boxes starts at row 2.
    pub fn compute(width: i32, height: i32) -> Self {
        let left_width = width / 2;
        let right_x = left_width - 1;

        let left = Column {
            x: 1,
            width: left_width - 2,
        };
        let right = Column {
            x: right_x,
            width: width - right_x - 1,
        };
        let rows = Rows::new(height);

        DashboardLayout {
            width,
            height,
            system: rows.top(left),
            memory: rows.middle(left),
            docker: rows.bottom(left),
            cpu_load: rows.top(right),
            disk: rows.middle(right),
            network: rows.bottom(right),
        }
    }

    pub fn outer_border(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn panels(&self) -> [(PanelKind, PanelGeometry); 6] {
        [
            (PanelKind::System, self.system),
            (PanelKind::Memory, self.memory),
            (PanelKind::Docker, self.docker),
            (PanelKind::CpuLoad, self.cpu_load),
            (PanelKind::Disk, self.disk),
            (PanelKind::Network, self.network),
        ]
    }
}

#[derive(Clone, Copy)]
struct Column {
    x: i32,
    width: i32,
}

struct Rows {
    third: i32,
    two_thirds: i32,
}

impl Rows {
    fn new(height: i32) -> Self {
        Rows {
            third: height / 3,
            two_thirds: 2 * height / 3,
        }
    }

    fn top(&self, col: Column) -> PanelGeometry {
        panel(col, 2, self.third)
    }

    fn middle(&self, col: Column) -> PanelGeometry {
        panel(col, self.third + 2, self.third - 1)
    }

    fn bottom(&self, col: Column) -> PanelGeometry {
        panel(col, self.two_thirds + 1, self.third - 2)
    }
}

fn panel(col: Column, y: i32, height: i32) -> PanelGeometry {
    PanelGeometry {
        frame: Rect::new(col.x, y, col.width, height),
        content: Rect::new(col.x + 1, y + 1, col.width - 2, height - 2),
    }
}
