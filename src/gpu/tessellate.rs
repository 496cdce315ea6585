//! Display list to triangle list conversion.
//!
//! Circles become triangle fans and lines become quads, all emitted as a
//! flat `TriangleList` in pixel coordinates. The vertex shader maps pixels
//! to clip space.

use std::f32::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::canvas::{DisplayList, DrawCommand, Rgba};

/// Fewest segments used for any circle.
pub const MIN_CIRCLE_SEGMENTS: u32 = 12;
/// Most segments used for any circle.
pub const MAX_CIRCLE_SEGMENTS: u32 = 64;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const ATTRIBUTES: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }

    fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            color,
        }
    }
}

/// Segment count for a circle of `radius` pixels.
pub fn circle_segments(radius: f32) -> u32 {
    ((radius * 6.0).ceil() as u32).clamp(MIN_CIRCLE_SEGMENTS, MAX_CIRCLE_SEGMENTS)
}

/// Alpha above 1 is clamped, matching what 2D canvas back-ends do.
fn vertex_color(color: Rgba) -> [f32; 4] {
    [color.r, color.g, color.b, color.a.clamp(0.0, 1.0)]
}

/// Append triangles for every command in `list` to `out`.
///
/// `out` is cleared first so the same buffer can be reused every frame.
pub fn tessellate(list: &DisplayList, out: &mut Vec<Vertex>) {
    out.clear();
    for command in list.commands() {
        match *command {
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => push_circle(out, center, radius, vertex_color(color)),
            DrawCommand::Line {
                from,
                to,
                width,
                color,
            } => push_line(out, from, to, width, vertex_color(color)),
        }
    }
}

fn push_circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    if radius <= 0.0 {
        return;
    }
    let segments = circle_segments(radius);
    let step = TAU / segments as f32;
    let rim = |i: u32| center + Vec2::from_angle(step * i as f32) * radius;

    out.reserve(segments as usize * 3);
    for i in 0..segments {
        out.push(Vertex::new(center, color));
        out.push(Vertex::new(rim(i), color));
        out.push(Vertex::new(rim(i + 1), color));
    }
}

fn push_line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, width: f32, color: [f32; 4]) {
    // Zero-length segments draw nothing.
    let Some(dir) = (to - from).try_normalize() else {
        return;
    };
    let offset = dir.perp() * (width * 0.5);

    let a = from + offset;
    let b = from - offset;
    let c = to + offset;
    let d = to - offset;
    out.extend_from_slice(&[
        Vertex::new(a, color),
        Vertex::new(b, color),
        Vertex::new(c, color),
        Vertex::new(c, color),
        Vertex::new(b, color),
        Vertex::new(d, color),
    ]);
}
