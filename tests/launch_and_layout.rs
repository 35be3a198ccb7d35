use bevy::prelude::*;

use flingball::core::config::GameConfig;
use flingball::core::level::layout::{demolition_ground_top, demolition_pyramid, pyramid_slots};
use flingball::core::level::Arena;
use flingball::gameplay::aim::{launch_power, launch_vector};

#[test]
fn power_is_monotonic_and_saturates() {
    let max = GameConfig::default().aim.max_power;
    let mut prev = 0.0;
    for i in 0..=400 {
        let p = launch_power(i as f32, max);
        assert!(p >= prev, "power dropped at distance {i}");
        assert!(p <= max);
        prev = p;
    }
    assert_eq!(launch_power(max * 3.0, max), max);
    assert_eq!(launch_power(f32::INFINITY, max), 0.0);
}

#[test]
fn launch_opposes_drag_in_every_direction() {
    let origin = Vec2::new(12.0, -30.0);
    for step in 0..16 {
        let angle = step as f32 * std::f32::consts::TAU / 16.0;
        let drag = Vec2::from_angle(angle) * 80.0;
        let v = launch_vector(origin, origin + drag, 200.0, 9.0);
        assert!(v.dot(drag) < 0.0, "angle {angle}");
        assert!((v.length() - 80.0 * 9.0).abs() < 1e-2);
    }
}

#[test]
fn pyramid_rows_shrink_and_stay_centred() {
    let slots = pyramid_slots(4, 30.0, 2.0, 100.0, 0.0);
    assert_eq!(slots.len(), 10);
    for row in 0..4 {
        let in_row: Vec<_> = slots.iter().filter(|s| s.row == row).collect();
        assert_eq!(in_row.len() as u32, 4 - row);
        let mean_x = in_row.iter().map(|s| s.center.x).sum::<f32>() / in_row.len() as f32;
        assert!((mean_x - 100.0).abs() < 1e-4);
    }
}

#[test]
fn default_pyramid_sits_on_ground_inside_arena() {
    let cfg = GameConfig::default();
    let arena = Arena::new(cfg.window.width, cfg.window.height);
    let slots = demolition_pyramid(&arena, &cfg.demolition);
    let ground = demolition_ground_top(&arena, &cfg.demolition);
    let half = cfg.demolition.box_size * 0.5;
    for s in &slots {
        assert!(s.center.x - half >= -arena.half().x);
        assert!(s.center.x + half <= arena.half().x);
        assert!(s.center.y - half >= ground - 1e-3);
    }
    let lowest = slots.iter().map(|s| s.center.y).fold(f32::MAX, f32::min);
    assert!((lowest - (ground + half)).abs() < 1e-4);
}
