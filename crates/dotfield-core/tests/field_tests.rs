use dotfield_core::*;
use glam::Vec2;

fn config() -> FieldConfig {
    FieldConfig {
        grid_rows: 4,
        grid_columns: 4,
        dot_spacing: 30.0,
        ..FieldConfig::default()
    }
}

#[test]
fn tick_ages_and_expires_pulses() {
    let mut field = DotField::new(config()).unwrap();
    field.clicked(45.0, 45.0, 100.0);
    field.tick(100.0, 1);
    assert_eq!(field.pulses().len(), 1);
    assert_eq!(field.pulses()[0].radius, 0.0);

    field.tick(700.0, 1);
    assert_eq!(field.pulses().len(), 1);
    assert!(field.pulses()[0].radius > 0.0);

    field.tick(1600.0, 1);
    assert!(field.pulses().is_empty());
    // with nothing left the field is back at rest
    assert!(field.results().iter().all(|r| r.size == 0.0));
}

#[test]
fn tick_steps_the_flipbook_cyclically() {
    let frames = FrameField::from_flat(4, 4, (0..48).map(|i| (i / 16) as f32).collect()).unwrap();
    let mut field = DotField::with_frames(config(), frames).unwrap();
    let mut sizes = Vec::new();
    for _ in 0..4 {
        sizes.push(field.tick(0.0, 1)[0].size);
    }
    assert_eq!(field.frames().frame_count(), 3);
    assert_eq!(sizes, vec![1.0, 2.0, 0.0, 1.0]);
}

#[test]
fn failed_asset_keeps_pointer_and_pulse_effects() {
    let mut field = DotField::new(config()).unwrap();
    field.set_frames(FrameField::decode_or_empty("definitely not an asset", 4, 4));
    assert_eq!(field.frames().frame_count(), 0);

    let weight = field.config().pointer_weight;
    field.pointer_moved(0.0, 0.0, 0.0);
    assert_eq!(field.tick(0.0, 1)[0].size, weight);
}

#[test]
fn replacing_frames_restarts_playback() {
    let mut field = DotField::with_frames(
        config(),
        FrameField::from_flat(1, 1, vec![1.0, 2.0, 3.0]).unwrap(),
    )
    .unwrap();
    field.tick(0.0, 2);
    assert_eq!(field.frames().cursor(), 2);
    field.set_frames(FrameField::from_flat(1, 1, vec![7.0, 8.0]).unwrap());
    assert_eq!(field.frames().cursor(), 0);
    assert_eq!(field.tick(0.0, 0)[0].size, 7.0);
}

#[test]
fn pointer_leave_clears_pointer() {
    let mut field = DotField::new(config()).unwrap();
    field.pointer_moved(10.0, 10.0, 0.0);
    assert_eq!(field.pointer(), PointerState::At(Vec2::new(10.0, 10.0)));
    field.pointer_left();
    assert_eq!(field.pointer(), PointerState::Absent);
}

#[test]
fn grid_positions_follow_spacing() {
    let field = DotField::new(config()).unwrap();
    let grid = field.grid();
    assert_eq!(grid.cells().len(), 16);
    assert_eq!(grid.spacing(), 30.0);
    assert_eq!(grid.cell(2, 3).unwrap().position, Vec2::new(90.0, 60.0));
    assert!(grid.cell(4, 0).is_none());
    assert_eq!(grid.index_of(1, 1), Some(5));
}
