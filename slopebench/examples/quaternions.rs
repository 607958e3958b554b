//! Compares the cost of composing rotations as quaternions vs. 3x3 matrices.
//!
//! Run with:
//!   cargo run --release --example quaternions

use slopebench::prelude::*;
use std::ops::Mul;

#[derive(Debug, Clone, Copy)]
struct Vec3 {
    x: f32,
    y: f32,
    z: f32,
}

impl Vec3 {
    fn scale(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    fn cross(self, o: Self) -> Self {
        Self {
            x: self.y * o.z - self.z * o.y,
            y: self.z * o.x - self.x * o.z,
            z: self.x * o.y - self.y * o.x,
        }
    }

    fn dot(self, o: Self) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z
    }
}

impl std::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self {
            x: self.x + o.x,
            y: self.y + o.y,
            z: self.z + o.z,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Quat {
    im: Vec3,
    re: f32,
}

impl Quat {
    fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        Self {
            im: axis.scale(half.sin()),
            re: half.cos(),
        }
    }

    fn to_matrix(self) -> Mat3 {
        let s = std::f32::consts::SQRT_2;
        let (x, y, z, w) = (s * self.im.x, s * self.im.y, s * self.im.z, s * self.re);

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);

        Mat3 {
            m: [
                [1.0 - yy - zz, xy - wz, xz + wy],
                [xy + wz, 1.0 - xx - zz, yz - wx],
                [xz - wy, yz + wx, 1.0 - xx - yy],
            ],
        }
    }
}

impl Mul for Quat {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        Self {
            im: o.im.scale(self.re) + self.im.scale(o.re) + self.im.cross(o.im),
            re: self.re * o.re - self.im.dot(o.im),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Mat3 {
    m: [[f32; 3]; 3],
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, o: Self) -> Self {
        let mut out = [[0.0f32; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = self.m[i][0] * o.m[0][j] + self.m[i][1] * o.m[1][j] + self.m[i][2] * o.m[2][j];
            }
        }
        Self { m: out }
    }
}

/// Repeated quaternion composition; state carries so the chain of products
/// cannot be folded away.
struct QuatCompose {
    q1: Quat,
    q2: Quat,
}

impl Default for QuatCompose {
    fn default() -> Self {
        Self {
            q1: Quat::from_axis_angle(Vec3 { x: 0.0, y: 0.0, z: 1.0 }, 1.0),
            q2: Quat::from_axis_angle(Vec3 { x: 0.0, y: 1.0, z: 0.0 }, 1.0),
        }
    }
}

impl Workload for QuatCompose {
    fn invoke(&mut self) {
        self.q1 = self.q1 * self.q2;
    }
}

/// The same two rotations composed as 3x3 matrices.
struct MatCompose {
    m1: Mat3,
    m2: Mat3,
}

impl Default for MatCompose {
    fn default() -> Self {
        Self {
            m1: Quat::from_axis_angle(Vec3 { x: 0.0, y: 0.0, z: 1.0 }, 1.0).to_matrix(),
            m2: Quat::from_axis_angle(Vec3 { x: 0.0, y: 1.0, z: 0.0 }, 1.0).to_matrix(),
        }
    }
}

impl Workload for MatCompose {
    fn invoke(&mut self) {
        self.m1 = self.m1 * self.m2;
    }
}

fn main() -> Result<(), slopebench::BenchError> {
    println!("quaternion * quaternion:");
    let quat = benchmark_auto::<QuatCompose>()?;
    println!("{}\n", quat.format_in(TimeUnit::Nanos));

    println!("matrix * matrix:");
    let mat = benchmark_auto::<MatCompose>()?;
    println!("{}\n", mat.format_in(TimeUnit::Nanos));

    Ok(())
}
