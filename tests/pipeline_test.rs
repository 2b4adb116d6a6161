use cube_grid::core::build_cube;
use cube_grid::engine::{
    run, AnimationDriver, RenderBackend, RowOrder, ScriptedScheduler, SoftwareRasterizer,
};
use cube_grid::types::{Face, Rgb, GRID_HEIGHT, GRID_WIDTH};

fn driver(row_order: RowOrder) -> AnimationDriver<SoftwareRasterizer> {
    let backend = SoftwareRasterizer::new(GRID_WIDTH, GRID_HEIGHT).unwrap();
    AnimationDriver::new(backend, build_cube(), row_order).unwrap()
}

#[test]
fn first_frame_shows_front_face_in_the_middle() {
    let mut d = driver(RowOrder::BottomUp);
    d.on_frame(16.0).unwrap();
    assert_eq!(d.grid().get(32, 20).unwrap().color, Face::Front.color());
    assert_eq!(d.grid().get(0, 0).unwrap().color, Rgb::BLACK);
}

#[test]
fn rotation_never_decreases_over_a_run() {
    let mut d = driver(RowOrder::BottomUp);
    let mut sched = ScriptedScheduler::new([5.0, 21.0, 21.0, 40.0, 90.0, 91.0]);
    let mut last = -1.0;
    let frames = run(&mut d, &mut sched, |_, report| {
        assert!(report.rotation_secs >= last);
        last = report.rotation_secs;
        Ok(())
    })
    .unwrap();
    assert_eq!(frames, 6);
    assert!((d.rotation().seconds() - 0.091).abs() < 1e-12);
}

#[test]
fn flipped_rows_mirror_the_default_output() {
    let mut mirrored = driver(RowOrder::BottomUp);
    let mut upright = driver(RowOrder::TopDown);
    // Same timestamps give the same rotation in both sessions.
    for ts in [300.0, 350.0, 420.0] {
        mirrored.on_frame(ts).unwrap();
        upright.on_frame(ts).unwrap();
    }
    for y in 0..GRID_HEIGHT {
        for x in 0..GRID_WIDTH {
            assert_eq!(
                mirrored.grid().get(x, y).unwrap().color,
                upright.grid().get(x, GRID_HEIGHT - 1 - y).unwrap().color
            );
        }
    }
}

#[test]
fn grid_and_framebuffer_stay_the_same_size() {
    let d = driver(RowOrder::BottomUp);
    let (w, h) = d.backend().size();
    assert_eq!(d.grid().cell_count(), w as usize * h as usize);
    assert_eq!(d.grid().framebuffer_len(), d.backend().color_buffer().len());
}
