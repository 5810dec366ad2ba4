use crate::constants::{
    HEIGHT, KNOB_SIZE, MAX_OUTPUT, MINI_HEIGHT, MINI_KNOB_SIZE, MINI_RADIUS, MINI_WIDTH, RADIUS,
    WIDTH,
};
use glam::Vec2;
use web_sys as web;

/// Normalized joystick output, each axis in [-MAX_OUTPUT, MAX_OUTPUT].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputVector {
    pub x: i32,
    pub y: i32,
}

/// Canvas-space geometry of one joystick widget.
#[derive(Clone, Copy, Debug)]
pub struct JoystickGeometry {
    pub width: f64,
    pub height: f64,
    pub center: Vec2,
    pub radius: f32,
    pub knob_size: f64,
    pub max_output: i32,
}

impl JoystickGeometry {
    pub fn standard() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            center: Vec2::new((WIDTH / 2.0) as f32, (HEIGHT / 2.0) as f32),
            radius: RADIUS,
            knob_size: KNOB_SIZE,
            max_output: MAX_OUTPUT,
        }
    }

    pub fn mini() -> Self {
        Self {
            width: MINI_WIDTH,
            height: MINI_HEIGHT,
            center: Vec2::new((MINI_WIDTH / 2.0) as f32, (MINI_HEIGHT / 2.0) as f32),
            radius: MINI_RADIUS,
            knob_size: MINI_KNOB_SIZE,
            max_output: MAX_OUTPUT,
        }
    }
}

/// Clamp an offset from center onto the travel disk. Offsets past the
/// radius land exactly on the circle boundary.
#[inline]
pub fn clamp_to_disk(offset: Vec2, radius: f32) -> Vec2 {
    let dist = offset.length();
    if dist > radius {
        offset * (radius / dist)
    } else {
        offset
    }
}

#[inline]
pub fn normalize_axis(offset_px: f32, radius: f32, max_output: i32) -> i32 {
    ((offset_px / radius) * max_output as f32).round() as i32
}

/// Map an absolute canvas-space pointer position to the clamped knob offset
/// (pixels from center) and the normalized output vector.
pub fn map_pointer(pointer: Vec2, geom: &JoystickGeometry) -> (Vec2, InputVector) {
    let offset = clamp_to_disk(pointer - geom.center, geom.radius);
    let vector = InputVector {
        x: normalize_axis(offset.x, geom.radius, geom.max_output),
        y: normalize_axis(offset.y, geom.radius, geom.max_output),
    };
    (offset, vector)
}

/// Zero each axis independently when its magnitude is under the threshold.
/// A zero threshold passes everything through.
#[inline]
pub fn apply_deadzone(v: InputVector, deadzone: i32) -> InputVector {
    InputVector {
        x: if v.x.abs() < deadzone { 0 } else { v.x },
        y: if v.y.abs() < deadzone { 0 } else { v.y },
    }
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
