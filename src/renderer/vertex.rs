//! Instance types for 2D atom sprites

use bytemuck::{Pod, Zeroable};

/// One atom disc, ready to upload as instance data
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct AtomInstance {
    pub position: [f32; 2],
    pub radius: f32,
    /// Atom label glyph, 0 when labels are hidden
    pub label: u32,
    pub color: [f32; 4],
}

impl AtomInstance {
    pub const fn new(x: f32, y: f32, radius: f32, color: [f32; 4], label: u32) -> Self {
        Self {
            position: [x, y],
            radius,
            label,
            color,
        }
    }

    /// Raw bytes for an instance buffer
    pub fn as_bytes(instances: &[AtomInstance]) -> &[u8] {
        bytemuck::cast_slice(instances)
    }
}

/// Bond line between two atoms of the same unit
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BondInstance {
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub color: [f32; 4],
}

impl BondInstance {
    pub const fn new(from: [f32; 2], to: [f32; 2]) -> Self {
        Self {
            from,
            to,
            color: colors::BOND,
        }
    }
}

/// Label glyph codes
pub mod labels {
    pub const NONE: u32 = 0;
    pub const H: u32 = 'H' as u32;
    pub const O: u32 = 'O' as u32;
    /// Two-letter label packed as two bytes
    pub const CU: u32 = ('C' as u32) | (('u' as u32) << 8);
}

/// Colors for scene elements
pub mod colors {
    pub const HYDROGEN: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const OXYGEN: [f32; 4] = [0.898, 0.224, 0.208, 1.0]; // red
    pub const COPPER: [f32; 4] = [0.722, 0.451, 0.2, 1.0];
    pub const BOND: [f32; 4] = [0.467, 0.467, 0.467, 1.0];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<AtomInstance>(), 32);
        let atoms = [AtomInstance::new(1.0, 2.0, 6.0, colors::HYDROGEN, labels::H); 3];
        assert_eq!(AtomInstance::as_bytes(&atoms).len(), 96);
        assert_eq!(std::mem::size_of::<BondInstance>(), 32);
    }

    #[test]
    fn test_two_letter_label_packs() {
        assert_eq!(labels::CU & 0xff, 'C' as u32);
        assert_eq!(labels::CU >> 8, 'u' as u32);
    }
}
