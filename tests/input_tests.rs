// Host-side tests for the pointer-to-vector mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn offset_inside_disk_is_unchanged() {
    let offset = Vec2::new(30.0, -40.0); // length 50, inside radius 120
    assert_eq!(clamp_to_disk(offset, 120.0), offset);
}

#[test]
fn offset_outside_disk_lands_on_boundary() {
    let clamped = clamp_to_disk(Vec2::new(300.0, 400.0), 120.0);
    assert!((clamped.length() - 120.0).abs() < 1e-3);
    // direction is preserved
    assert!((clamped.y / clamped.x - 400.0 / 300.0).abs() < 1e-4);
}

#[test]
fn full_deflection_maps_to_max_output() {
    let geom = JoystickGeometry::standard();
    let pointer = Vec2::new(geom.center.x + 200.0, geom.center.y);
    let (offset, v) = map_pointer(pointer, &geom);
    assert!((offset.x - 120.0).abs() < 1e-3);
    assert!(offset.y.abs() < 1e-3);
    assert_eq!(v, InputVector { x: 1600, y: 0 });
}

#[test]
fn center_maps_to_zero() {
    let geom = JoystickGeometry::standard();
    let (offset, v) = map_pointer(geom.center, &geom);
    assert_eq!(offset, Vec2::ZERO);
    assert_eq!(v, InputVector { x: 0, y: 0 });
}

#[test]
fn axis_output_never_exceeds_max() {
    let geom = JoystickGeometry::standard();
    let mut x = -1000.0_f32;
    while x < 1400.0 {
        let mut y = -1000.0_f32;
        while y < 1400.0 {
            let (_, v) = map_pointer(Vec2::new(x, y), &geom);
            assert!(v.x.abs() <= 1600, "x axis out of range at ({x}, {y}): {}", v.x);
            assert!(v.y.abs() <= 1600, "y axis out of range at ({x}, {y}): {}", v.y);
            y += 137.0;
        }
        x += 137.0;
    }
}

#[test]
fn normalize_axis_is_proportional() {
    assert_eq!(normalize_axis(60.0, 120.0, 1600), 800);
    assert_eq!(normalize_axis(-120.0, 120.0, 1600), -1600);
    assert_eq!(normalize_axis(0.0, 120.0, 1600), 0);
}

#[test]
fn mini_geometry_uses_same_output_range() {
    let geom = JoystickGeometry::mini();
    let pointer = Vec2::new(geom.center.x, geom.center.y + 500.0);
    let (_, v) = map_pointer(pointer, &geom);
    assert_eq!(v, InputVector { x: 0, y: 1600 });
}

#[test]
fn deadzone_zeroes_each_axis_independently() {
    let v = InputVector { x: 99, y: 1600 };
    assert_eq!(apply_deadzone(v, 100), InputVector { x: 0, y: 1600 });

    let v = InputVector { x: -99, y: -100 };
    assert_eq!(apply_deadzone(v, 100), InputVector { x: 0, y: -100 });

    // threshold is exclusive: exactly 100 passes through
    let v = InputVector { x: 100, y: 0 };
    assert_eq!(apply_deadzone(v, 100), InputVector { x: 100, y: 0 });
}

#[test]
fn zero_deadzone_passes_everything() {
    let v = InputVector { x: 1, y: -1 };
    assert_eq!(apply_deadzone(v, 0), v);
}
