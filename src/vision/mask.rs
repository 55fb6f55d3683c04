//! Binary pixel masks.

use super::hsv::{HsvImage, HsvRange};
use super::regions::Rect;

/// Row-major binary mask.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    pub width: u32,
    pub height: u32,
    bits: Vec<bool>,
}

impl Mask {
    pub fn empty(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Pixels whose HSV value lies inside `range`.
    pub fn in_range(image: &HsvImage, range: &HsvRange) -> Self {
        Self {
            width: image.width,
            height: image.height,
            bits: image.pixels().iter().map(|&px| range.contains(px)).collect(),
        }
    }

    /// Pixel-wise OR. Masks must share dimensions.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        debug_assert_eq!((self.width, self.height), (other.width, other.height));
        Self {
            width: self.width,
            height: self.height,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(a, b)| *a || *b)
                .collect(),
        }
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.bits[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: u32, y: u32, on: bool) {
        if x < self.width && y < self.height {
            self.bits[(y * self.width + x) as usize] = on;
        }
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }

    /// Number of set pixels inside `rect`, clipped to the mask.
    pub fn count_in(&self, rect: &Rect) -> usize {
        let x_end = rect.x.saturating_add(rect.width).min(self.width);
        let y_end = rect.y.saturating_add(rect.height).min(self.height);
        (rect.y..y_end)
            .map(|y| (rect.x..x_end).filter(|&x| self.get(x, y)).count())
            .sum()
    }

    pub fn any_in(&self, rect: &Rect) -> bool {
        self.count_in(rect) > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_count() {
        let mut a = Mask::empty(4, 4);
        let mut b = Mask::empty(4, 4);
        a.set(0, 0, true);
        b.set(3, 3, true);
        b.set(0, 0, true);
        let u = a.union(&b);
        assert_eq!(u.count(), 2);
        assert!(u.get(3, 3));
    }

    #[test]
    fn test_count_in_clips_to_bounds() {
        let mut m = Mask::empty(5, 5);
        m.set(4, 4, true);
        m.set(1, 1, true);
        let rect = Rect { x: 3, y: 3, width: 10, height: 10 };
        assert_eq!(m.count_in(&rect), 1);
        assert!(!m.any_in(&Rect { x: 2, y: 2, width: 2, height: 2 }));
    }
}
