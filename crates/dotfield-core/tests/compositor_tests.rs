use dotfield_core::*;
use glam::Vec2;

fn small_config() -> FieldConfig {
    FieldConfig {
        grid_rows: 3,
        grid_columns: 3,
        dot_spacing: 30.0,
        ..FieldConfig::default()
    }
}

fn cell_at(grid: &Grid, row: usize, column: usize) -> GridCell {
    *grid.cell(row, column).expect("cell in range")
}

#[test]
fn rest_state_is_base_size_everywhere() {
    let config = FieldConfig {
        dot_size: 2.0,
        ..small_config()
    };
    let mut field = DotField::new(config).unwrap();
    let results = field.tick(0.0, 1);
    assert_eq!(results.len(), 9);
    for r in results {
        assert_eq!(r.size, 2.0);
        assert!(r.chromatic.is_none());
    }
}

#[test]
fn pulse_at_cell_contributes_full_weight_at_spawn() {
    let config = FieldConfig {
        wave_thickness: 40.0,
        ..small_config()
    };
    let grid = Grid::from_config(&config);
    let pulse = Pulse::new(Vec2::new(30.0, 30.0), 0.0);
    assert_eq!(pulse.radius, 0.0);
    assert_eq!(pulse.intensity, 1.0);

    let center = cell_at(&grid, 1, 1);
    assert_eq!(center.position, Vec2::new(30.0, 30.0));
    let got = pulse_contribution(center.position, &[pulse], &config);
    assert!((got - config.pulse_weight).abs() < 1e-6);

    // 30px off the ring with thickness 40 keeps a quarter of the weight
    let edge = cell_at(&grid, 1, 2);
    let got = pulse_contribution(edge.position, &[pulse], &config);
    assert!((got - 0.25 * config.pulse_weight).abs() < 1e-5);
}

#[test]
fn pulse_outside_annulus_contributes_nothing() {
    let config = small_config();
    let mut pulse = Pulse::new(Vec2::ZERO, 0.0);
    pulse.radius = 200.0;
    // 100px from origin, ring spans [160, 240]
    let got = pulse_contribution(Vec2::new(100.0, 0.0), &[pulse], &config);
    assert_eq!(got, 0.0);
    // exactly on the outer edge the triangular falloff reaches zero
    let got = pulse_contribution(Vec2::new(240.0, 0.0), &[pulse], &config);
    assert!(got.abs() < 1e-6);
}

#[test]
fn overlapping_pulses_sum_but_size_is_clamped() {
    let config = small_config();
    let pulses: Vec<Pulse> = (0..10).map(|_| Pulse::new(Vec2::ZERO, 0.0)).collect();
    let got = pulse_contribution(Vec2::ZERO, &pulses, &config);
    assert!((got - 10.0 * config.pulse_weight).abs() < 1e-4);

    let grid = Grid::from_config(&config);
    let r = compute_cell(
        &cell_at(&grid, 0, 0),
        &pulses,
        PointerState::Absent,
        None,
        &config,
    );
    assert_eq!(r.size, config.max_dot_size);
}

#[test]
fn pointer_contribution_is_zero_at_influence_boundary() {
    let config = FieldConfig {
        mouse_influence_radius: 150.0,
        ..small_config()
    };
    let pointer = PointerState::At(Vec2::new(100.0, 100.0));
    let on_boundary = Vec2::new(250.0, 100.0);
    assert_eq!(pointer_contribution(on_boundary, pointer, &config), 0.0);
    let beyond = Vec2::new(251.0, 100.0);
    assert_eq!(pointer_contribution(beyond, pointer, &config), 0.0);
    let under = Vec2::new(100.0, 100.0);
    assert_eq!(pointer_contribution(under, pointer, &config), config.pointer_weight);
    let halfway = Vec2::new(175.0, 100.0);
    let got = pointer_contribution(halfway, pointer, &config);
    assert!((got - 0.5 * config.pointer_weight).abs() < 1e-6);
}

#[test]
fn absent_pointer_contributes_nothing() {
    let config = small_config();
    assert_eq!(
        pointer_contribution(Vec2::ZERO, PointerState::Absent, &config),
        0.0
    );
    assert!(chromatic_offsets(Vec2::ZERO, 10.0, PointerState::Absent, &config).is_none());
}

#[test]
fn frame_magnitude_is_added_with_gain() {
    let config = FieldConfig {
        frame_gain: 0.5,
        ..small_config()
    };
    let grid = Grid::from_config(&config);
    let mut values = vec![0.0; 9];
    values[5] = 6.0; // row 1, column 2
    let frames = FrameField::from_flat(3, 3, values).unwrap();
    let frame = frames.frame_at(0).unwrap();

    let r = compute_cell(
        &cell_at(&grid, 1, 2),
        &[],
        PointerState::Absent,
        Some(frame),
        &config,
    );
    assert_eq!(r.size, 3.0);
    let r = compute_cell(
        &cell_at(&grid, 2, 1),
        &[],
        PointerState::Absent,
        Some(frame),
        &config,
    );
    assert_eq!(r.size, 0.0);
}

#[test]
fn frame_smaller_than_grid_contributes_zero_outside() {
    let config = small_config();
    let grid = Grid::from_config(&config);
    let frames = FrameField::from_flat(1, 1, vec![5.0]).unwrap();
    let frame = frames.frame_at(0).unwrap();
    let covered = compute_cell(&cell_at(&grid, 0, 0), &[], PointerState::Absent, Some(frame), &config);
    let uncovered = compute_cell(&cell_at(&grid, 2, 2), &[], PointerState::Absent, Some(frame), &config);
    assert_eq!(covered.size, 5.0);
    assert_eq!(uncovered.size, 0.0);
}

#[test]
fn nan_magnitude_blanks_only_its_cell() {
    let config = FieldConfig {
        dot_size: 1.0,
        ..small_config()
    };
    let mut values = vec![2.0; 9];
    values[4] = f32::NAN;
    let frames = FrameField::from_flat(3, 3, values).unwrap();
    let mut field = DotField::with_frames(config, frames).unwrap();
    field.pointer_moved(30.0, 30.0, 0.0);
    let results = field.tick(0.0, 0).to_vec();
    assert_eq!(results[4].size, 0.0);
    assert!(results[4].chromatic.is_none());
    assert!(!results[4].is_visible());
    for (i, r) in results.iter().enumerate() {
        if i != 4 {
            assert!(r.size >= 3.0, "cell {i} lost its size: {}", r.size);
        }
    }
    assert_eq!(field.invalid_cells(), 1);
}

#[test]
fn disabled_effects_are_skipped() {
    let config = FieldConfig {
        effects: Effects {
            pointer: false,
            pulses: false,
            ..Effects::default()
        },
        ..small_config()
    };
    let mut field = DotField::new(config).unwrap();
    field.pointer_moved(30.0, 30.0, 0.0);
    field.clicked(30.0, 30.0, 0.0);
    for r in field.tick(0.0, 1) {
        assert_eq!(r.size, 0.0);
    }
}

#[test]
fn chromatic_offsets_need_large_dot_near_pointer() {
    let config = small_config();
    let pointer = PointerState::At(Vec2::ZERO);
    let cell = Vec2::new(100.0, 0.0);

    // at half the max size, no halos yet
    assert!(chromatic_offsets(cell, config.max_dot_size * 0.5, pointer, &config).is_none());
    // outside the influence radius
    assert!(chromatic_offsets(Vec2::new(200.0, 0.0), 10.0, pointer, &config).is_none());

    let c = chromatic_offsets(cell, 10.0, pointer, &config).expect("halos");
    // half way to the 200px radius: reach = 10 * 0.5
    assert!((c.red - Vec2::new(-5.0, 0.0)).length() < 1e-5);
    assert!((c.blue - Vec2::new(4.0, 0.0)).length() < 1e-5);
    assert!((c.green - Vec2::new(2.5, 0.0)).length() < 1e-5);
    assert!((c.alpha - 0.45).abs() < 1e-5);
}

#[test]
fn red_and_blue_halos_split_in_opposite_directions() {
    let config = small_config();
    let pointer = PointerState::At(Vec2::new(50.0, 50.0));
    let c = chromatic_offsets(Vec2::new(80.0, 90.0), 10.0, pointer, &config).unwrap();
    assert!(c.red.dot(c.blue) < 0.0);
    assert!(c.red.length() > c.blue.length());
}

#[test]
fn chromatic_at_pointer_has_zero_displacement() {
    let config = small_config();
    let pointer = PointerState::At(Vec2::new(30.0, 30.0));
    let c = chromatic_offsets(Vec2::new(30.0, 30.0), 10.0, pointer, &config).unwrap();
    assert_eq!(c.red, Vec2::ZERO);
    assert_eq!(c.blue, Vec2::ZERO);
    assert_eq!(c.green, Vec2::ZERO);
    assert!((c.alpha - config.halo_alpha).abs() < 1e-6);
}

#[test]
fn results_are_row_major_and_stable_across_ticks() {
    let config = FieldConfig {
        grid_rows: 2,
        grid_columns: 4,
        ..small_config()
    };
    let mut field = DotField::new(config).unwrap();
    let first: Vec<(usize, usize)> = field.tick(0.0, 1).iter().map(|r| (r.row, r.column)).collect();
    field.clicked(10.0, 10.0, 5.0);
    field.pointer_moved(40.0, 0.0, 5.0);
    let second: Vec<(usize, usize)> = field.tick(16.0, 1).iter().map(|r| (r.row, r.column)).collect();
    let expected: Vec<(usize, usize)> = (0..2).flat_map(|r| (0..4).map(move |c| (r, c))).collect();
    assert_eq!(first, expected);
    assert_eq!(second, expected);
}

#[test]
fn size_stays_within_bounds_under_heavy_input() {
    let config = FieldConfig {
        grid_rows: 8,
        grid_columns: 8,
        dot_size: 1.0,
        ..FieldConfig::default()
    };
    let mut values = Vec::new();
    for i in 0..(64 * 3) {
        values.push((i % 7) as f32 * 3.0 - 6.0);
    }
    let frames = FrameField::from_flat(8, 8, values).unwrap();
    let mut field = DotField::with_frames(config.clone(), frames).unwrap();
    for step in 0..60 {
        let t = step as f64 * 16.0;
        field.clicked((step * 13 % 240) as f32, (step * 7 % 240) as f32, t);
        field.pointer_moved((step * 11 % 240) as f32, 120.0, t);
        for r in field.tick(t, 1) {
            assert!(r.size >= 0.0 && r.size <= config.max_dot_size, "size {}", r.size);
        }
    }
}

#[test]
fn visibility_follows_rounding() {
    let mut r = CompositeResult {
        row: 0,
        column: 0,
        position: Vec2::ZERO,
        size: 0.4,
        chromatic: None,
    };
    assert!(!r.is_visible());
    r.size = 0.6;
    assert!(r.is_visible());
}
