use glam::{Mat4, Vec3};

/// Derived view state for one frame: eye/target/up plus projection
/// parameters. A camera rig recomputes this from its own pose every update
/// and feeds it to [`MatrixCache::rebuild`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Near clipping plane distance.
    pub near: f32,
    /// Far clipping plane distance.
    pub far: f32,
}

impl ViewParams {
    /// Build the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    ///
    /// `perspective_rh` uses the [0,1] depth range (wgpu/Vulkan
    /// convention), finite far plane.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

/// The four matrices renderers read each frame: view, projection, and
/// their inverses. Rebuilt once per camera update, never independently
/// mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatrixCache {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-world transform.
    pub inverse_view: Mat4,
    /// Camera-to-clip transform.
    pub projection: Mat4,
    /// Clip-to-camera transform.
    pub inverse_projection: Mat4,
}

impl Default for MatrixCache {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            inverse_view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            inverse_projection: Mat4::IDENTITY,
        }
    }
}

impl MatrixCache {
    /// Recompute all four matrices from the given view parameters.
    pub fn rebuild(&mut self, params: &ViewParams) {
        self.view = params.view_matrix();
        self.inverse_view = self.view.inverse();
        self.projection = params.projection_matrix();
        self.inverse_projection = self.projection.inverse();
    }
}
