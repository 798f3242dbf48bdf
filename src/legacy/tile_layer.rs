use crate::error::{EngineError, EngineResult};

/// One layer of packed 16-bit legacy tile codes.
///
/// Addressed `(x, z)`: `x` is the column (west-east), `z` the row
/// (south-north). Codes are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    width: usize,
    depth: usize,
    codes: Vec<u16>,
}

impl TileLayer {
    /// All-zero layer
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            width,
            depth,
            codes: vec![0; width * depth],
        }
    }

    pub fn from_codes(width: usize, depth: usize, codes: Vec<u16>) -> EngineResult<Self> {
        if codes.len() != width * depth {
            return Err(EngineError::BufferAccess {
                index: width * depth,
                size: codes.len(),
            });
        }
        Ok(Self {
            width,
            depth,
            codes,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn codes(&self) -> &[u16] {
        &self.codes
    }

    fn index(&self, x: usize, z: usize) -> EngineResult<usize> {
        if x < self.width && z < self.depth {
            Ok(x + z * self.width)
        } else {
            Err(EngineError::VoxelOutOfBounds {
                pos: (x as i32, 0, z as i32),
                dims: (self.width, 1, self.depth),
            })
        }
    }

    pub fn get(&self, x: usize, z: usize) -> EngineResult<u16> {
        let index = self.index(x, z)?;
        Ok(self.codes[index])
    }

    pub fn set(&mut self, x: usize, z: usize, code: u16) -> EngineResult<()> {
        let index = self.index(x, z)?;
        self.codes[index] = code;
        Ok(())
    }

    pub fn fill(&mut self, code: u16) {
        self.codes.iter_mut().for_each(|c| *c = code);
    }

    /// Copy `source` into this layer with its origin at `(dst_x, dst_z)`.
    pub fn blit(&mut self, source: &TileLayer, dst_x: usize, dst_z: usize) -> EngineResult<()> {
        if dst_x + source.width > self.width || dst_z + source.depth > self.depth {
            return Err(EngineError::InvalidLayerSize {
                layer: "blit target".to_string(),
                expected: (dst_x + source.width, dst_z + source.depth),
                found: (self.width, self.depth),
            });
        }

        for z in 0..source.depth {
            let src_row = &source.codes[z * source.width..(z + 1) * source.width];
            let dst_start = dst_x + (dst_z + z) * self.width;
            self.codes[dst_start..dst_start + source.width].copy_from_slice(src_row);
        }
        Ok(())
    }
}

/// LOCK entry in legacy coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyLock {
    pub x: i32,
    pub y: i32,
    pub lock_level: i32,
}

/// TRIG entry in legacy coordinates. `-1` means no text / no sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyTrigger {
    pub x: i32,
    pub y: i32,
    pub text_index: i32,
    pub sound_index: i32,
}

/// One legacy level: the three tile layers plus its locks and triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLevel {
    pub flor: TileLayer,
    pub map1: TileLayer,
    pub map2: Option<TileLayer>,
    pub locks: Vec<LegacyLock>,
    pub triggers: Vec<LegacyTrigger>,
}

impl LegacyLevel {
    /// Level with empty FLOR/MAP1, no MAP2 and no locks or triggers
    pub fn new(width: usize, depth: usize) -> Self {
        Self {
            flor: TileLayer::new(width, depth),
            map1: TileLayer::new(width, depth),
            map2: None,
            locks: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.flor.width()
    }

    pub fn depth(&self) -> usize {
        self.flor.depth()
    }

    /// Every layer must share the FLOR footprint.
    pub fn validate(&self) -> EngineResult<()> {
        let expected = (self.flor.width(), self.flor.depth());
        let check = |name: &str, layer: &TileLayer| {
            let found = (layer.width(), layer.depth());
            if found == expected {
                Ok(())
            } else {
                Err(EngineError::InvalidLayerSize {
                    layer: name.to_string(),
                    expected,
                    found,
                })
            }
        };

        check("MAP1", &self.map1)?;
        if let Some(map2) = &self.map2 {
            check("MAP2", map2)?;
        }
        Ok(())
    }

    /// Ensure the layout has exactly the given footprint.
    pub fn expect_dimensions(&self, width: usize, depth: usize, name: &str) -> EngineResult<()> {
        self.validate()?;
        let found = (self.width(), self.depth());
        if found != (width, depth) {
            return Err(EngineError::InvalidLayerSize {
                layer: name.to_string(),
                expected: (width, depth),
                found,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_row_major() {
        let mut layer = TileLayer::new(3, 2);
        layer.set(2, 1, 0x1234).expect("in bounds");
        assert_eq!(layer.get(2, 1).expect("in bounds"), 0x1234);
        assert_eq!(layer.codes()[5], 0x1234);
        assert!(layer.get(3, 0).is_err());
        assert!(layer.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_blit_offsets_rows() {
        let mut target = TileLayer::new(4, 4);
        let source = TileLayer::from_codes(2, 2, vec![1, 2, 3, 4]).expect("sized");
        target.blit(&source, 1, 2).expect("fits");
        assert_eq!(target.get(1, 2).unwrap(), 1);
        assert_eq!(target.get(2, 2).unwrap(), 2);
        assert_eq!(target.get(1, 3).unwrap(), 3);
        assert_eq!(target.get(2, 3).unwrap(), 4);
        assert_eq!(target.get(0, 0).unwrap(), 0);
        assert!(target.blit(&source, 3, 3).is_err());
    }

    #[test]
    fn test_from_codes_rejects_wrong_length() {
        assert!(TileLayer::from_codes(2, 2, vec![0; 3]).is_err());
    }

    #[test]
    fn test_level_validation() {
        let mut level = LegacyLevel::new(4, 4);
        assert!(level.validate().is_ok());
        level.map2 = Some(TileLayer::new(4, 5));
        assert!(matches!(
            level.validate(),
            Err(EngineError::InvalidLayerSize { .. })
        ));
    }
}
