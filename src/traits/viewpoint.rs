use glam::{Mat4, Vec3};

/// Eye and target pair the render loop builds a view transform from
pub trait Viewpoint {
    /// Camera position in world space
    fn eye(&self) -> Vec3;

    /// World-space point the camera looks at
    fn target(&self) -> Vec3;

    /// Right-handed look-at matrix with world-up as the up vector
    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target(), Vec3::Y)
    }
}
