// Directional boundary rectangles derived from a tile's insets

use super::tile::{Insets, Side};
use crate::core::math::Rect;

/// Up to four blocking rectangles, one per side with a nonzero inset
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boundaries {
    top: Option<Rect>,
    right: Option<Rect>,
    bottom: Option<Rect>,
    left: Option<Rect>,
}

impl Boundaries {
    pub fn get(&self, side: Side) -> Option<Rect> {
        match side {
            Side::Top => self.top,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
        }
    }

    fn slot(&mut self, side: Side) -> &mut Option<Rect> {
        match side {
            Side::Top => &mut self.top,
            Side::Right => &mut self.right,
            Side::Bottom => &mut self.bottom,
            Side::Left => &mut self.left,
        }
    }

    /// Present boundaries in top/right/bottom/left order
    pub fn iter(&self) -> impl Iterator<Item = (Side, Rect)> + '_ {
        Side::ENCODING_ORDER
            .into_iter()
            .filter_map(move |side| self.get(side).map(|rect| (side, rect)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Build the boundary set for a tile occupying `tile_rect` (origin shift
/// already applied). Each rectangle is flush with its edge and spans the full
/// tile along that edge.
pub fn compute_boundaries(tile_rect: Rect, insets: Insets, resize: u32) -> Boundaries {
    let mut boundaries = Boundaries::default();
    let scale = resize as f32;

    for side in Side::ENCODING_ORDER {
        let inset = insets.get(side);
        if inset == 0 {
            continue;
        }

        let depth = inset as f32 * scale;
        let rect = match side {
            Side::Top => Rect::new(tile_rect.left(), tile_rect.top(), tile_rect.width, depth),
            Side::Bottom => Rect::new(
                tile_rect.left(),
                tile_rect.bottom() - depth,
                tile_rect.width,
                depth,
            ),
            Side::Left => Rect::new(tile_rect.left(), tile_rect.top(), depth, tile_rect.height),
            Side::Right => Rect::new(
                tile_rect.right() - depth,
                tile_rect.top(),
                depth,
                tile_rect.height,
            ),
        };
        *boundaries.slot(side) = Some(rect);
    }

    boundaries
}

#[cfg(test)]
mod tests {
    use super::*;

    const TILE: Rect = Rect::new(0.0, 0.0, 32.0, 32.0);

    #[test]
    fn test_no_insets_no_boundaries() {
        let boundaries = compute_boundaries(TILE, Insets::NONE, 1);
        assert!(boundaries.is_empty());
    }

    #[test]
    fn test_top_and_left_boundaries() {
        let boundaries = compute_boundaries(TILE, Insets::new(3, 0, 0, 3), 1);

        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries.get(Side::Top), Some(Rect::new(0.0, 0.0, 32.0, 3.0)));
        assert_eq!(boundaries.get(Side::Left), Some(Rect::new(0.0, 0.0, 3.0, 32.0)));
        assert_eq!(boundaries.get(Side::Right), None);
        assert_eq!(boundaries.get(Side::Bottom), None);
    }

    #[test]
    fn test_bottom_and_right_are_flush_with_far_edges() {
        let tile = Rect::new(100.0, 200.0, 64.0, 64.0);
        let boundaries = compute_boundaries(tile, Insets::new(0, 3, 3, 0), 2);

        assert_eq!(
            boundaries.get(Side::Right),
            Some(Rect::new(158.0, 200.0, 6.0, 64.0))
        );
        assert_eq!(
            boundaries.get(Side::Bottom),
            Some(Rect::new(100.0, 258.0, 64.0, 6.0))
        );
    }

    #[test]
    fn test_iter_order() {
        let boundaries = compute_boundaries(TILE, Insets::new(1, 2, 3, 4), 1);
        let sides: Vec<Side> = boundaries.iter().map(|(side, _)| side).collect();
        assert_eq!(sides, vec![Side::Top, Side::Right, Side::Bottom, Side::Left]);
    }
}
