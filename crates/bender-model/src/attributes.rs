//! Per-node and per-edge scalar attributes exchanged across the network
//! boundary (spec.md §3).

use nalgebra::Vector3;

/// Node attributes: position, applied load, anchor flag, and the
/// residual/shear/moment fields the solver writes back on exit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeAttributes {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
    pub is_anchor: bool,
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,
    pub sx: f64,
    pub sy: f64,
    pub sz: f64,
    pub mx: f64,
    pub my: f64,
    pub mz: f64,
}

impl Default for NodeAttributes {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            px: 0.0,
            py: 0.0,
            pz: 0.0,
            is_anchor: false,
            rx: 0.0,
            ry: 0.0,
            rz: 0.0,
            sx: 0.0,
            sy: 0.0,
            sz: 0.0,
            mx: 0.0,
            my: 0.0,
            mz: 0.0,
        }
    }
}

impl NodeAttributes {
    /// Convenience constructor for a free node at the given position.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            ..Default::default()
        }
    }

    /// Convenience constructor for an anchored node at the given position.
    pub fn anchor(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            is_anchor: true,
            ..Default::default()
        }
    }

    pub fn xyz(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn set_xyz(&mut self, xyz: Vector3<f64>) {
        self.x = xyz.x;
        self.y = xyz.y;
        self.z = xyz.z;
    }

    pub fn load(&self) -> Vector3<f64> {
        Vector3::new(self.px, self.py, self.pz)
    }

    pub fn residual(&self) -> Vector3<f64> {
        Vector3::new(self.rx, self.ry, self.rz)
    }

    pub fn set_residual(&mut self, r: Vector3<f64>) {
        self.rx = r.x;
        self.ry = r.y;
        self.rz = r.z;
    }

    pub fn shear(&self) -> Vector3<f64> {
        Vector3::new(self.sx, self.sy, self.sz)
    }

    pub fn set_shear(&mut self, s: Vector3<f64>) {
        self.sx = s.x;
        self.sy = s.y;
        self.sz = s.z;
    }

    pub fn moment(&self) -> Vector3<f64> {
        Vector3::new(self.mx, self.my, self.mz)
    }

    pub fn set_moment(&mut self, m: Vector3<f64>) {
        self.mx = m.x;
        self.my = m.y;
        self.mz = m.z;
    }
}

/// Edge design parameters and solver outputs (spec.md §3 table).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAttributes {
    /// Prescribed force density \[kN/m\].
    pub qpre: f64,
    /// Prescribed axial force \[kN\].
    pub fpre: f64,
    /// Prescribed rest length \[m\].
    pub lpre: f64,
    /// Initial unstressed length \[m\].
    pub linit: f64,
    /// Young's modulus \[kN/mm²\].
    pub e: f64,
    /// Tube outer radius \[mm\].
    pub radius: f64,
    /// Tube wall thickness \[mm\].
    pub thickness: f64,
    /// Resulting force density (written back).
    pub q: f64,
    /// Resulting axial force (written back).
    pub f: f64,
    /// Resulting length (written back).
    pub l: f64,
}

impl Default for EdgeAttributes {
    fn default() -> Self {
        Self {
            qpre: 1.0,
            fpre: 0.0,
            lpre: 0.0,
            linit: 0.0,
            e: 0.0,
            radius: 0.0,
            thickness: 0.0,
            q: 0.0,
            f: 0.0,
            l: 0.0,
        }
    }
}
