use gostat::layout::{DashboardLayout, Rect};
use proptest::prelude::*;

#[test]
fn layout_80x24() {
    let layout = DashboardLayout::compute(80, 24);

    assert_eq!(layout.system.frame, Rect::new(1, 2, 38, 8));
    assert_eq!(layout.memory.frame, Rect::new(1, 10, 38, 7));
    assert_eq!(layout.docker.frame, Rect::new(1, 17, 38, 6));
    assert_eq!(layout.cpu_load.frame, Rect::new(39, 2, 40, 8));
    assert_eq!(layout.disk.frame, Rect::new(39, 10, 40, 7));
    assert_eq!(layout.network.frame, Rect::new(39, 17, 40, 6));

    assert_eq!(layout.system.content, Rect::new(2, 3, 36, 6));
    assert_eq!(layout.memory.content, Rect::new(2, 11, 36, 5));
    assert_eq!(layout.docker.content, Rect::new(2, 18, 36, 4));
    assert_eq!(layout.cpu_load.content, Rect::new(40, 3, 38, 6));
    assert_eq!(layout.disk.content, Rect::new(40, 11, 38, 5));
    assert_eq!(layout.network.content, Rect::new(40, 18, 38, 4));

    assert_eq!(layout.outer_border(), Rect::new(0, 0, 80, 24));
}

#[test]
fn panel_titles() {
    let titles: Vec<&str> = DashboardLayout::compute(80, 24)
        .panels()
        .iter()
        .map(|(kind, _)| kind.title())
        .collect();
    assert_eq!(
        titles,
        [
            "System Info",
            "Memory Usage",
            "Docker Info",
            "CPU & Load",
            "Disk Usage",
            "Network Traffic"
        ]
    );
}

proptest! {
    #[test]
    fn panels_fit_and_never_overlap(width in 20i32..400, height in 12i32..200) {
        let layout = DashboardLayout::compute(width, height);
        let panels = layout.panels();

        for (kind, geometry) in &panels {
            prop_assert!(
                geometry.frame.fits_within(width, height),
                "{:?} frame {:?} outside {}x{}", kind, geometry.frame, width, height
            );
            prop_assert!(geometry.frame.is_drawable(), "{:?} frame empty", kind);
        }

        for (i, (kind_a, a)) in panels.iter().enumerate() {
            for (kind_b, b) in panels.iter().skip(i + 1) {
                prop_assert!(
                    !a.frame.overlaps(&b.frame),
                    "{:?} {:?} overlaps {:?} {:?}", kind_a, a.frame, kind_b, b.frame
                );
            }
        }
    }

    #[test]
    fn boxes_stay_inside_outer_border_and_below_title(width in 20i32..400, height in 12i32..200) {
        let layout = DashboardLayout::compute(width, height);
        for (_, geometry) in layout.panels() {
            let frame = geometry.frame;
            prop_assert!(frame.x >= 1 && frame.y >= 2);
            prop_assert!(frame.right() <= width - 1);
            prop_assert!(frame.bottom() <= height - 1);
        }
    }
}
