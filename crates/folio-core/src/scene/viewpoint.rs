use glam::{Mat4, Vec3};

use crate::math::ease_toward;

/// Pointer offset from the viewport centre, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

impl PointerState {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a client-space pointer position into a centre offset.
    pub fn from_client(client_x: f32, client_y: f32, viewport: Viewport) -> Self {
        Self {
            x: client_x - viewport.width / 2.0,
            y: client_y - viewport.height / 2.0,
        }
    }
}

/// Size of the host view in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Width over height; a degenerate viewport reports `1.0`.
    pub fn aspect(&self) -> f32 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

/// Perspective camera that trails the pointer and always looks at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewpoint {
    pub position: Vec3,
    pub fov_y_radians: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    view: Mat4,
}

impl Viewpoint {
    pub fn new(distance: f32, fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut viewpoint = Self {
            position: Vec3::new(0.0, 0.0, distance),
            fov_y_radians: fov_y_degrees.to_radians(),
            aspect,
            near,
            far,
            view: Mat4::IDENTITY,
        };
        viewpoint.aim_at_origin();
        viewpoint
    }

    /// Exponentially smooth x toward the pointer and y toward the inverted
    /// pointer (screen y grows downward), then re-aim at the origin.
    pub fn ease_toward(&mut self, pointer: PointerState, factor: f32) {
        self.position.x = ease_toward(self.position.x, pointer.x, factor);
        self.position.y = ease_toward(self.position.y, -pointer.y, factor);
        self.aim_at_origin();
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y_radians, self.aspect, self.near, self.far)
    }

    fn aim_at_origin(&mut self) {
        // A camera sitting on the origin has no view direction; keep the last one.
        if self.position.length_squared() > f32::EPSILON {
            self.view = Mat4::look_at_rh(self.position, Vec3::ZERO, Vec3::Y);
        }
    }
}
