use glint_core::*;

/// Find the top-most hit region index under `pos` (reverse iteration),
/// considering only regions accepted by `filter`.
pub(crate) fn top_hit_index(
    frame: &Frame,
    pos: Vec2,
    filter: impl Fn(&HitRegion) -> bool,
) -> Option<usize> {
    frame
        .hit_regions
        .iter()
        .enumerate()
        .rev()
        .find(|(_, h)| filter(h) && h.rect.contains(pos))
        .map(|(i, _)| i)
}

pub(crate) fn hit_index_by_tag(frame: &Frame, tag: &str) -> Option<usize> {
    frame
        .hit_regions
        .iter()
        .position(|h| h.tag.as_deref() == Some(tag))
}

pub(crate) fn center(r: Rect) -> Vec2 {
    Vec2 {
        x: r.x + r.w * 0.5,
        y: r.y + r.h * 0.5,
    }
}
