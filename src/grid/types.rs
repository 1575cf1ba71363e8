//! Per-box particle storage: parallel id/position arrays with an explicit,
//! checked capacity ceiling (spec §5's "per-box capacity doubles on
//! overflow, with a hard ceiling").

use crate::config::PositionStride;
use crate::error::{CapacityKind, KernelError, Result};

/// One computational box's particle storage.
#[derive(Clone, Debug, Default)]
pub struct ParticleBox {
    pub(crate) ids: Vec<i64>,
    /// Packed positions, `ps` values per particle (`x,y,z[,r]`).
    pub(crate) pos: Vec<f64>,
    mem: usize,
}

impl ParticleBox {
    pub(crate) fn with_capacity(init_mem: usize) -> Self {
        Self {
            ids: Vec::with_capacity(init_mem),
            pos: Vec::new(),
            mem: init_mem,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    #[inline]
    pub fn id(&self, slot: usize) -> i64 {
        self.ids[slot]
    }

    #[inline]
    pub fn position(&self, slot: usize, stride: PositionStride) -> [f64; 3] {
        let ps = stride.ps();
        let base = slot * ps;
        [self.pos[base], self.pos[base + 1], self.pos[base + 2]]
    }

    #[inline]
    pub fn radius(&self, slot: usize) -> f64 {
        self.pos[slot * 4 + 3]
    }

    pub(crate) fn push(
        &mut self,
        id: i64,
        x: f64,
        y: f64,
        z: f64,
        r: Option<f64>,
        stride: PositionStride,
        max_particle_memory: usize,
    ) -> Result<usize> {
        if self.ids.len() >= self.mem {
            let grown = (self.mem * 2).max(1);
            if grown > max_particle_memory {
                return Err(KernelError::CapacityExceeded {
                    kind: CapacityKind::BoxParticles,
                    limit: max_particle_memory,
                });
            }
            self.mem = grown;
        }
        let slot = self.ids.len();
        self.ids.push(id);
        self.pos.push(x);
        self.pos.push(y);
        self.pos.push(z);
        if stride == PositionStride::Weighted {
            self.pos.push(r.unwrap_or(0.0));
        }
        Ok(slot)
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
        self.pos.clear();
    }
}
