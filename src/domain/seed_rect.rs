use serde::{Deserialize, Serialize};

use crate::core::error::{SimError, SimResult};

/// Half-open rectangle `x_min..x_max` by `y_min..y_max` of cells to seed.
///
/// Construction guarantees the rectangle is non-empty; whether it fits a
/// particular grid is checked by [`SeedRect::check_fits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SeedRectRecord", rename_all = "camelCase")]
pub struct SeedRect {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

impl SeedRect {
    pub fn new(x_min: u32, x_max: u32, y_min: u32, y_max: u32) -> SimResult<Self> {
        if x_min >= x_max || y_min >= y_max {
            return Err(SimError::EmptySeedRect { x_min, x_max, y_min, y_max });
        }
        Ok(Self { x_min, x_max, y_min, y_max })
    }

    /// Square block in the middle of a `width x height` grid, a tenth of the
    /// shorter side across (at least one cell), always clear of the border.
    ///
    /// Caller guarantees both sides are at least 3.
    pub fn centered(width: u32, height: u32) -> Self {
        let side = (width.min(height) / 10).max(1);
        let x_min = (width - side) / 2;
        let y_min = (height - side) / 2;
        Self {
            x_min,
            x_max: x_min + side,
            y_min,
            y_max: y_min + side,
        }
    }

    pub fn check_fits(&self, width: u32, height: u32) -> SimResult<()> {
        if self.x_max > width || self.y_max > height {
            return Err(SimError::SeedOutOfBounds {
                x_min: self.x_min,
                x_max: self.x_max,
                y_min: self.y_min,
                y_max: self.y_max,
                width,
                height,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x_min..self.x_max).contains(&x) && (self.y_min..self.y_max).contains(&y)
    }

    #[inline]
    pub fn x_min(&self) -> u32 { self.x_min }
    #[inline]
    pub fn x_max(&self) -> u32 { self.x_max }
    #[inline]
    pub fn y_min(&self) -> u32 { self.y_min }
    #[inline]
    pub fn y_max(&self) -> u32 { self.y_max }

    pub fn area(&self) -> usize {
        ((self.x_max - self.x_min) as usize) * ((self.y_max - self.y_min) as usize)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedRectRecord {
    x_min: u32,
    x_max: u32,
    y_min: u32,
    y_max: u32,
}

impl TryFrom<SeedRectRecord> for SeedRect {
    type Error = SimError;

    fn try_from(r: SeedRectRecord) -> SimResult<Self> {
        SeedRect::new(r.x_min, r.x_max, r.y_min, r.y_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_rectangles() {
        assert_eq!(
            SeedRect::new(5, 5, 0, 3).unwrap_err(),
            SimError::EmptySeedRect { x_min: 5, x_max: 5, y_min: 0, y_max: 3 }
        );
        assert!(SeedRect::new(0, 3, 4, 2).is_err());
    }

    #[test]
    fn fit_check_allows_touching_the_far_edge() {
        let rect = SeedRect::new(0, 10, 0, 10).unwrap();
        assert!(rect.check_fits(10, 10).is_ok());
        assert!(matches!(
            rect.check_fits(9, 10),
            Err(SimError::SeedOutOfBounds { width: 9, height: 10, .. })
        ));
    }

    #[test]
    fn centered_block_for_the_default_resolution() {
        let rect = SeedRect::centered(100, 100);
        assert_eq!((rect.x_min(), rect.x_max()), (45, 55));
        assert_eq!((rect.y_min(), rect.y_max()), (45, 55));
        assert_eq!(rect.area(), 100);
    }

    #[test]
    fn centered_block_stays_inside_the_border_on_tiny_grids() {
        for (w, h) in [(3, 3), (4, 3), (5, 5), (3, 40), (19, 21)] {
            let rect = SeedRect::centered(w, h);
            assert!(rect.x_min() >= 1 && rect.x_max() <= w - 1, "{w}x{h}: {rect:?}");
            assert!(rect.y_min() >= 1 && rect.y_max() <= h - 1, "{w}x{h}: {rect:?}");
        }
        let rect = SeedRect::centered(5, 5);
        assert!(rect.contains(2, 2));
        assert_eq!(rect.area(), 1);
    }

    #[test]
    fn deserialization_validates() {
        let ok: SeedRect =
            serde_json::from_str(r#"{"xMin":1,"xMax":4,"yMin":2,"yMax":3}"#).unwrap();
        assert_eq!(ok, SeedRect::new(1, 4, 2, 3).unwrap());

        let bad: Result<SeedRect, _> =
            serde_json::from_str(r#"{"xMin":4,"xMax":1,"yMin":2,"yMax":3}"#);
        assert!(bad.is_err());
    }
}
