//! Instance types for GPU circle rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Color;

/// One screen-space circle, laid out for direct upload as an instance buffer
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    /// Center in pixels, origin at the top-left of the viewport
    pub center: [f32; 2],
    /// Radius in pixels
    pub radius: f32,
    pub color: [f32; 4],
}

impl CircleInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4]) -> Self {
        Self {
            center: [x, y],
            radius,
            color,
        }
    }
}

/// Opaque RGBA from an 8-bit RGB color
pub fn rgba(color: Color) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        1.0,
    ]
}

/// Raw bytes of an instance slice, ready for a vertex buffer write
pub fn instance_bytes(instances: &[CircleInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}

/// Colors for screen elements
pub mod colors {
    use crate::sim::Color;

    pub const HUD_TEXT: Color = [255, 255, 255];
    pub const HUD_TEXT_DIM: Color = [200, 200, 200];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout_is_tight() {
        assert_eq!(std::mem::size_of::<CircleInstance>(), 28);
        let instances = [
            CircleInstance::new(1.0, 2.0, 3.0, [0.0, 0.5, 1.0, 1.0]),
            CircleInstance::new(4.0, 5.0, 6.0, rgba([255, 0, 0])),
        ];
        let bytes = instance_bytes(&instances);
        assert_eq!(bytes.len(), 56);
        let back: &[CircleInstance] = bytemuck::cast_slice(bytes);
        assert_eq!(back[1].center, [4.0, 5.0]);
    }

    #[test]
    fn test_rgba_is_normalized() {
        assert_eq!(rgba([255, 0, 51]), [1.0, 0.0, 0.2, 1.0]);
    }
}
