//! Connected regions over a binary mask.
//!
//! Regions are 8-connected. A region's area is the area enclosed by its outer
//! border, traced through pixel centres: holes count towards it, a solid
//! `w x h` block measures `(w - 1) * (h - 1)` and a one-pixel line measures 0.

use super::mask::Mask;

/// Axis-aligned bounding box in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// One connected blob of set pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Area enclosed by the outer border, in square pixels.
    pub area: f64,
    /// Number of set pixels.
    pub pixels: usize,
    pub bbox: Rect,
}

/// Label every 8-connected region in `mask`, in raster order of first pixel.
pub fn find_regions(mask: &Mask) -> Vec<Region> {
    let (w, h) = (mask.width, mask.height);
    let mut visited = vec![false; (w as usize) * (h as usize)];
    let mut regions = Vec::new();
    let mut stack: Vec<(u32, u32)> = Vec::new();

    for y0 in 0..h {
        for x0 in 0..w {
            let idx = (y0 * w + x0) as usize;
            if visited[idx] || !mask.get(x0, y0) {
                continue;
            }

            visited[idx] = true;
            stack.push((x0, y0));
            let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);
            let mut pixels = 0usize;

            while let Some((x, y)) = stack.pop() {
                pixels += 1;
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);

                for (nx, ny) in neighbours(x, y, w, h) {
                    let n_idx = (ny * w + nx) as usize;
                    if !visited[n_idx] && mask.get(nx, ny) {
                        visited[n_idx] = true;
                        stack.push((nx, ny));
                    }
                }
            }

            let border = trace_outer_border(mask, (x0, y0), pixels);
            regions.push(Region {
                area: enclosed_area(&border),
                pixels,
                bbox: Rect {
                    x: min_x,
                    y: min_y,
                    width: max_x - min_x + 1,
                    height: max_y - min_y + 1,
                },
            });
        }
    }

    regions
}

/// Neighbour offsets, counter-clockwise on screen (y grows down) from east.
const RING: [(i64, i64); 8] = [
    (1, 0), (1, -1), (0, -1), (-1, -1),
    (-1, 0), (-1, 1), (0, 1), (1, 1),
];
const WEST: usize = 4;

fn set_at(mask: &Mask, (x, y): (i64, i64)) -> bool {
    match (u32::try_from(x), u32::try_from(y)) {
        (Ok(x), Ok(y)) => mask.get(x, y),
        _ => false,
    }
}

const fn step((x, y): (i64, i64), dir: usize) -> (i64, i64) {
    (x + RING[dir].0, y + RING[dir].1)
}

/// Outer border of the region whose raster-first pixel is `start`, as pixel
/// centres in tracing order.
///
/// Border following after Suzuki and Abe: the west neighbour of `start` is
/// background, the first move is found clockwise from there, and each later
/// move counter-clockwise from the pixel just left. Tracing stops on
/// re-entering `start` from the first move's pixel.
fn trace_outer_border(mask: &Mask, start: (u32, u32), pixels: usize) -> Vec<(i64, i64)> {
    let start = (i64::from(start.0), i64::from(start.1));

    let Some(first) = (0..8)
        .map(|k| step(start, (WEST + 8 - k) % 8))
        .find(|&p| set_at(mask, p))
    else {
        return vec![start];
    };

    let mut border = vec![start];
    let (mut prev, mut cur) = (first, start);
    // A border pixel is entered at most four times.
    for _ in 0..4 * pixels + 4 {
        let back = RING
            .iter()
            .position(|&(dx, dy)| (cur.0 + dx, cur.1 + dy) == prev)
            .unwrap_or(0);
        let next = (1..=8)
            .map(|k| step(cur, (back + k) % 8))
            .find(|&p| set_at(mask, p))
            .unwrap_or(cur);

        if next == start && cur == first {
            break;
        }
        prev = cur;
        cur = next;
        border.push(cur);
    }
    border
}

/// Shoelace area of a closed polygon.
fn enclosed_area(polygon: &[(i64, i64)]) -> f64 {
    let twice: i64 = polygon
        .iter()
        .zip(polygon.iter().cycle().skip(1))
        .map(|(&(x0, y0), &(x1, y1))| x0 * y1 - x1 * y0)
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let area = twice.unsigned_abs() as f64 / 2.0;
    area
}

fn neighbours(x: u32, y: u32, w: u32, h: u32) -> impl Iterator<Item = (u32, u32)> {
    const OFFSETS: [(i64, i64); 8] = [
        (-1, -1), (0, -1), (1, -1),
        (-1, 0),           (1, 0),
        (-1, 1),  (0, 1),  (1, 1),
    ];
    OFFSETS.into_iter().filter_map(move |(dx, dy)| {
        let nx = i64::from(x) + dx;
        let ny = i64::from(y) + dy;
        if nx < 0 || ny < 0 || nx >= i64::from(w) || ny >= i64::from(h) {
            None
        } else {
            Some((u32::try_from(nx).ok()?, u32::try_from(ny).ok()?))
        }
    })
}
