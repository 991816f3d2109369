//! Taffy layout and paint.
//!
//! `layout_and_paint` lays the tree out at the viewport width with unbounded
//! height (a page scrolls), then walks it once to produce the display list,
//! the pointer targets, the semantics nodes and the page-space rect of every
//! tagged view. All rects are in page space; a host that scrolls offsets its
//! viewport rect instead of the content.

use std::cmp::Ordering;
use std::collections::HashMap;

use glint_core::*;
use taffy::prelude::{
    AvailableSpace, Display, FlexDirection, GridTemplateComponent, NodeId, Position, Style,
    TaffyTree, auto, flex, length, percent, zero,
};
use taffy::geometry::Size as TaffySize;

use crate::error::LayoutError;
use crate::text;

#[derive(Clone)]
enum NodeCtx {
    Text {
        text: String,
        font_dp: f32,
        soft_wrap: bool,
        max_lines: Option<usize>,
    },
    Icon {
        size_dp: f32,
    },
    Container,
}

/// Lay out and paint `root`; a layout failure is logged and yields an
/// empty frame.
pub fn layout_and_paint(root: &View, size_px: (u32, u32)) -> Frame {
    match try_layout_and_paint(root, size_px) {
        Ok(frame) => frame,
        Err(e) => {
            log::error!("layout failed: {e}");
            Frame {
                scene: Scene {
                    clear_color: theme().background,
                    nodes: vec![],
                },
                ..Frame::default()
            }
        }
    }
}

pub fn try_layout_and_paint(root: &View, size_px: (u32, u32)) -> Result<Frame, LayoutError> {
    // Assign ids
    let mut id = 1u64;
    fn stamp(mut v: View, id: &mut u64) -> View {
        v.id = *id;
        *id += 1;
        v.children = v.children.into_iter().map(|c| stamp(c, id)).collect();
        v
    }
    let root = stamp(root.clone(), &mut id);

    let mut taffy: TaffyTree<NodeCtx> = TaffyTree::new();
    let mut nodes_map: HashMap<ViewId, NodeId> = HashMap::new();
    let root_node = build_node(&root, &mut taffy, &mut nodes_map)?;

    {
        let mut rs = taffy.style(root_node)?.clone();
        rs.size.width = length(size_px.0 as f32);
        rs.min_size.height = length(size_px.1 as f32);
        taffy.set_style(root_node, rs)?;
    }

    let available = TaffySize {
        width: AvailableSpace::Definite(size_px.0 as f32),
        height: AvailableSpace::MaxContent,
    };

    taffy.compute_layout_with_measure(root_node, available, |known, avail, _node, ctx, _style| {
        match ctx {
            Some(NodeCtx::Text {
                text: content,
                font_dp,
                soft_wrap,
                max_lines,
            }) => {
                let size_px = dp_to_px(*font_dp);
                let natural_w = text::measure_width(content, size_px);

                let wrap_w = match (known.width, avail.width) {
                    (Some(w), _) => w,
                    (None, AvailableSpace::Definite(w)) if *soft_wrap => natural_w.min(w),
                    _ => natural_w,
                };
                let lines = if *soft_wrap {
                    text::wrap_lines(content, size_px, wrap_w, *max_lines).0
                } else {
                    vec![content.clone()]
                };
                let widest = lines
                    .iter()
                    .map(|l| text::measure_width(l, size_px))
                    .fold(0.0f32, f32::max);

                TaffySize {
                    width: known.width.unwrap_or(widest),
                    height: known
                        .height
                        .unwrap_or(text::line_height(size_px) * lines.len().max(1) as f32),
                }
            }
            Some(NodeCtx::Icon { size_dp }) => {
                let s = dp_to_px(*size_dp);
                TaffySize {
                    width: known.width.unwrap_or(s),
                    height: known.height.unwrap_or(s),
                }
            }
            Some(NodeCtx::Container) | None => TaffySize::ZERO,
        }
    })?;

    let content = taffy.layout(root_node)?.size;

    let mut out = PaintOut {
        scene: Scene {
            clear_color: theme().background,
            nodes: vec![],
        },
        hits: vec![],
        sems: vec![],
        tagged: vec![],
    };
    walk(&root, &taffy, &nodes_map, &mut out, (0.0, 0.0), 1.0, false)?;
    out.hits
        .sort_by(|a, b| a.z_index.partial_cmp(&b.z_index).unwrap_or(Ordering::Equal));

    Ok(Frame {
        scene: out.scene,
        hit_regions: out.hits,
        semantics_nodes: out.sems,
        tagged: out.tagged,
        content_size: glint_core::Size {
            width: content.width,
            height: content.height,
        },
    })
}

fn style_from_modifier(m: &Modifier, kind: &ViewKind) -> Style {
    let px = dp_to_px;
    let mut s = Style {
        display: Display::Flex,
        ..Default::default()
    };

    match kind {
        ViewKind::Column | ViewKind::Surface => s.flex_direction = FlexDirection::Column,
        ViewKind::Row | ViewKind::Link { .. } => s.flex_direction = FlexDirection::Row,
        _ => {}
    }

    // Defaults
    s.align_items = match kind {
        ViewKind::Row | ViewKind::Column | ViewKind::Surface => Some(AlignItems::Stretch),
        ViewKind::Link { .. } => Some(AlignItems::Center),
        _ => Some(AlignItems::FlexStart),
    };
    s.justify_content = Some(JustifyContent::FlexStart);

    if let Some(a) = m.align_items_container {
        s.align_items = Some(a);
    }
    if let Some(j) = m.justify_content {
        s.justify_content = Some(j);
    }
    if let Some(g) = m.flex_grow {
        s.flex_grow = g;
    }
    if let Some(w) = m.flex_wrap {
        s.flex_wrap = w;
    }
    if let Some(g) = m.gap {
        s.gap = TaffySize {
            width: length(px(g)),
            height: length(px(g)),
        };
    }

    // Absolute positioning (convert insets from dp to px)
    if let Some(PositionType::Absolute) = m.position_type {
        s.position = Position::Absolute;
        s.inset = taffy::geometry::Rect {
            left: m.offset_left.map(|v| length(px(v))).unwrap_or_else(auto),
            right: m.offset_right.map(|v| length(px(v))).unwrap_or_else(auto),
            top: m.offset_top.map(|v| length(px(v))).unwrap_or_else(auto),
            bottom: m.offset_bottom.map(|v| length(px(v))).unwrap_or_else(auto),
        };
    }

    // Grid config
    if let Some(cfg) = &m.grid {
        s.display = Display::Grid;
        s.grid_template_columns = (0..cfg.columns.max(1))
            .map(|_| GridTemplateComponent::Single(flex(1.0)))
            .collect();
        s.gap = TaffySize {
            width: length(px(cfg.column_gap)),
            height: length(px(cfg.row_gap)),
        };
    }

    if let Some(pv) = m.padding_values {
        s.padding = taffy::geometry::Rect {
            left: length(px(pv.left)),
            right: length(px(pv.right)),
            top: length(px(pv.top)),
            bottom: length(px(pv.bottom)),
        };
    } else if let Some(p) = m.padding {
        let v = length(px(p));
        s.padding = taffy::geometry::Rect {
            left: v,
            right: v,
            top: v,
            bottom: v,
        };
    }

    if m.margin_top.is_some() || m.margin_bottom.is_some() || m.margin_auto_x {
        let side = if m.margin_auto_x { auto() } else { zero() };
        s.margin = taffy::geometry::Rect {
            left: side,
            right: side,
            top: length(px(m.margin_top.unwrap_or(0.0))),
            bottom: length(px(m.margin_bottom.unwrap_or(0.0))),
        };
    }

    // Explicit size wins
    let mut width_set = false;
    let mut height_set = false;
    if let Some(sz) = m.size {
        if sz.width.is_finite() {
            s.size.width = length(px(sz.width.max(0.0)));
            width_set = true;
        }
        if sz.height.is_finite() {
            s.size.height = length(px(sz.height.max(0.0)));
            height_set = true;
        }
    }
    if let Some(w) = m.width {
        s.size.width = length(px(w.max(0.0)));
        width_set = true;
    }
    if let Some(h) = m.height {
        s.size.height = length(px(h.max(0.0)));
        height_set = true;
    }

    // Main axis fill -> weight (flex: 1 1 0%), cross axis fill -> 100%
    let is_row = matches!(kind, ViewKind::Row | ViewKind::Link { .. });
    if m.fill_max_w && !width_set {
        if is_row {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.width = length(0.0);
        } else {
            s.size.width = percent(1.0);
        }
    }
    if m.fill_max_h && !height_set {
        if is_row {
            s.size.height = percent(1.0);
        } else {
            s.flex_grow = s.flex_grow.max(1.0);
            s.flex_basis = length(0.0);
            s.min_size.height = length(0.0);
        }
    }

    // user min/max clamps
    if let Some(v) = m.min_width {
        s.min_size.width = length(px(v.max(0.0)));
    }
    if let Some(v) = m.min_height {
        s.min_size.height = length(px(v.max(0.0)));
    }
    if let Some(v) = m.max_width {
        s.max_size.width = length(px(v.max(0.0)));
    }
    if let Some(v) = m.max_height {
        s.max_size.height = length(px(v.max(0.0)));
    }

    s
}

fn build_node(
    v: &View,
    t: &mut TaffyTree<NodeCtx>,
    nodes_map: &mut HashMap<ViewId, NodeId>,
) -> Result<NodeId, LayoutError> {
    let style = style_from_modifier(&v.modifier, &v.kind);

    let node = match &v.kind {
        ViewKind::Text {
            text,
            font_size,
            soft_wrap,
            max_lines,
            ..
        } => t.new_leaf_with_context(
            style,
            NodeCtx::Text {
                text: text.clone(),
                font_dp: *font_size,
                soft_wrap: *soft_wrap,
                max_lines: *max_lines,
            },
        )?,
        ViewKind::Icon { size, .. } => {
            t.new_leaf_with_context(style, NodeCtx::Icon { size_dp: *size })?
        }
        _ => {
            let children = v
                .children
                .iter()
                .map(|c| build_node(c, t, nodes_map))
                .collect::<Result<Vec<_>, _>>()?;
            let n = t.new_with_children(style, &children)?;
            t.set_node_context(n, Some(NodeCtx::Container))?;
            n
        }
    };

    nodes_map.insert(v.id, node);
    Ok(node)
}

struct PaintOut {
    scene: Scene,
    hits: Vec<HitRegion>,
    sems: Vec<SemNode>,
    tagged: Vec<TaggedRect>,
}

// Below this effective alpha nothing is painted; layout metadata is still
// reported.
const MIN_PAINT_ALPHA: f32 = 0.002;

fn layout_of(node: NodeId, t: &TaffyTree<NodeCtx>) -> Result<glint_core::Rect, LayoutError> {
    let l = t.layout(node)?;
    Ok(glint_core::Rect {
        x: l.location.x,
        y: l.location.y,
        w: l.size.width,
        h: l.size.height,
    })
}

/// Translations are folded into the rects of the view and its subtree; scale
/// is emitted as a transform node around the subtree.
fn walk(
    v: &View,
    t: &TaffyTree<NodeCtx>,
    nodes: &HashMap<ViewId, NodeId>,
    out: &mut PaintOut,
    parent_offset_px: (f32, f32),
    alpha_accum: f32,
    hidden: bool,
) -> Result<(), LayoutError> {
    let node = *nodes.get(&v.id).ok_or(LayoutError::MissingNode(v.id))?;
    let local = layout_of(node, t)?;

    let (tx, ty) = v
        .modifier
        .transform
        .map(|tf| (dp_to_px(tf.translate_x), dp_to_px(tf.translate_y)))
        .unwrap_or((0.0, 0.0));
    let rect = local.translate(parent_offset_px.0 + tx, parent_offset_px.1 + ty);

    let alpha_accum = (alpha_accum * v.modifier.alpha.unwrap_or(1.0)).clamp(0.0, 1.0);
    let paint = alpha_accum >= MIN_PAINT_ALPHA;
    let radius = v.modifier.clip_rounded.map(dp_to_px).unwrap_or(0.0);

    if let Some(tag) = &v.modifier.tag {
        out.tagged.push(TaggedRect {
            tag: tag.clone(),
            rect,
        });
    }

    let scaled = v.modifier.transform.filter(|tf| tf.is_scaled());
    if let Some(tf) = scaled {
        out.scene.nodes.push(SceneNode::PushTransform {
            transform: Transform {
                translate_x: 0.0,
                translate_y: 0.0,
                scale_x: tf.scale_x,
                scale_y: tf.scale_y,
            },
        });
    }

    if paint {
        if let Some(bg) = v.modifier.background {
            out.scene.nodes.push(SceneNode::Rect {
                rect,
                brush: bg.mul_alpha(alpha_accum),
                radius,
            });
        }
        if let Some(b) = &v.modifier.border {
            out.scene.nodes.push(SceneNode::Border {
                rect,
                color: b.color.mul_alpha(alpha_accum),
                width: dp_to_px(b.width),
                radius: dp_to_px(b.radius).max(radius),
            });
        }
    }

    let semantics = v.semantics.as_ref().or(v.modifier.semantics.as_ref());
    let hidden = hidden || semantics.is_some_and(|s| s.hidden);

    if let ViewKind::Link { href } = &v.kind {
        out.hits.push(HitRegion {
            id: v.id,
            rect,
            tag: v.modifier.tag.clone(),
            href: Some(href.clone()),
            hoverable: v.modifier.hoverable,
            z_index: v.modifier.z_index,
        });
    } else if v.modifier.hoverable {
        out.hits.push(HitRegion {
            id: v.id,
            rect,
            tag: v.modifier.tag.clone(),
            href: None,
            hoverable: true,
            z_index: v.modifier.z_index,
        });
    }

    if !hidden {
        let sem = match (&v.kind, semantics) {
            (_, Some(s)) => Some((s.role, s.label.clone())),
            (ViewKind::Text { text: content, .. }, None) => {
                Some((Role::Text, Some(content.clone())))
            }
            (ViewKind::Link { .. }, None) => Some((Role::Link, Some(v.collect_text().join(" ")))),
            _ => None,
        };
        if let Some((role, label)) = sem {
            out.sems.push(SemNode {
                id: v.id,
                role,
                label,
                rect,
            });
        }
    }

    match &v.kind {
        ViewKind::Text {
            text: content,
            color,
            font_size,
            soft_wrap,
            max_lines,
        } if paint => {
            let size = dp_to_px(*font_size);
            let line_h = text::line_height(size);
            let lines = if *soft_wrap {
                // Half a pixel of slack so float noise does not re-wrap the
                // width layout settled on.
                text::wrap_lines(content, size, rect.w + 0.5, *max_lines).0
            } else {
                vec![content.clone()]
            };
            for (i, line) in lines.into_iter().enumerate() {
                out.scene.nodes.push(SceneNode::Text {
                    rect: glint_core::Rect {
                        x: rect.x,
                        y: rect.y + i as f32 * line_h,
                        w: text::measure_width(&line, size),
                        h: line_h,
                    },
                    text: line,
                    color: color.mul_alpha(alpha_accum),
                    size,
                });
            }
        }
        ViewKind::Icon { name, color, .. } if paint => {
            out.scene.nodes.push(SceneNode::Icon {
                rect,
                name: *name,
                color: color.mul_alpha(alpha_accum),
            });
        }
        _ => {}
    }

    let clip = v.modifier.clip || v.modifier.clip_rounded.is_some();
    if clip && !v.children.is_empty() {
        out.scene.nodes.push(SceneNode::PushClip { rect, radius });
    }
    for c in &v.children {
        walk(c, t, nodes, out, (rect.x, rect.y), alpha_accum, hidden)?;
    }
    if clip && !v.children.is_empty() {
        out.scene.nodes.push(SceneNode::PopClip);
    }

    if scaled.is_some() {
        out.scene.nodes.push(SceneNode::PopTransform);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn column_stacks_children_and_reports_tags() {
        let root = Column(Modifier::new()).child((
            Box(Modifier::new().height(100.0).tag("a")),
            Box(Modifier::new().height(50.0).tag("b")),
        ));
        let frame = layout_and_paint(&root, (400, 300));

        let a = frame.rect_of("a").expect("a laid out");
        let b = frame.rect_of("b").expect("b laid out");
        assert_eq!((a.y, a.h), (0.0, 100.0));
        assert_eq!((b.y, b.h), (100.0, 50.0));
        assert_eq!(a.w, 400.0);
        // Root is at least one viewport tall.
        assert_eq!(frame.content_size.height, 300.0);
    }

    #[test]
    fn content_taller_than_viewport_grows_the_page() {
        let root = Column(Modifier::new()).child((
            Box(Modifier::new().height(500.0)),
            Box(Modifier::new().height(500.0).tag("below")),
        ));
        let frame = layout_and_paint(&root, (400, 300));
        assert_eq!(frame.content_size.height, 1000.0);
        assert_eq!(frame.rect_of("below").map(|r| r.y), Some(500.0));
    }

    #[test]
    fn translation_moves_subtree_rects() {
        let root = Column(Modifier::new()).child(
            Box(Modifier::new().translate(0.0, 40.0).tag("moved"))
                .child(Box(Modifier::new().size(10.0, 10.0).tag("inner"))),
        );
        let frame = layout_and_paint(&root, (200, 200));
        assert_eq!(frame.rect_of("moved").map(|r| r.y), Some(40.0));
        assert_eq!(frame.rect_of("inner").map(|r| r.y), Some(40.0));
        assert!(
            !frame
                .scene
                .nodes
                .iter()
                .any(|n| matches!(n, SceneNode::PushTransform { .. }))
        );
    }

    #[test]
    fn transparent_subtree_is_laid_out_but_not_painted() {
        let root = Column(Modifier::new()).child(
            Box(Modifier::new().alpha(0.0).tag("ghost"))
                .child(Text("hidden for now").modifier(Modifier::new().tag("ghost.text"))),
        );
        let frame = layout_and_paint(&root, (400, 300));
        assert!(frame.has_tag("ghost.text"));
        assert_eq!(frame.scene.texts().count(), 0);
    }

    #[test]
    fn half_alpha_scales_text_color() {
        let root = Column(Modifier::new())
            .child(Box(Modifier::new().alpha(0.5)).child(Text("hi").color(Color::WHITE)));
        let frame = layout_and_paint(&root, (400, 300));
        let (_, _, color) = frame.scene.texts().next().expect("text painted");
        assert_eq!(color.3, 127);
    }

    #[test]
    fn wrapped_text_paints_one_node_per_line() {
        let root = Column(Modifier::new())
            .child(Box(Modifier::new().width(60.0)).child(Text("design studio").size(10.0).wrap()));
        let frame = layout_and_paint(&root, (400, 300));
        let lines: Vec<_> = frame.scene.texts().map(|(t, _, _)| t.to_string()).collect();
        assert_eq!(lines, vec!["design", "studio"]);
    }

    #[test]
    fn links_produce_hit_regions_and_semantics() {
        let root = Column(Modifier::new()).child(
            Link("/team", Modifier::new().tag("cta"))
                .child(Text("Our Team"))
                .semantics(Semantics::new(Role::Link).label("Meet our team")),
        );
        let frame = layout_and_paint(&root, (400, 300));

        let hit = frame
            .hit_regions
            .iter()
            .find(|h| h.href.is_some())
            .expect("link hit region");
        assert_eq!(hit.href.as_deref(), Some("/team"));
        assert_eq!(hit.tag.as_deref(), Some("cta"));

        let sem = frame
            .semantics_nodes
            .iter()
            .find(|s| s.role == Role::Link)
            .expect("link semantics");
        assert_eq!(sem.label.as_deref(), Some("Meet our team"));
    }

    #[test]
    fn hidden_semantics_skip_subtree() {
        let root = Column(Modifier::new()).child(
            Box(Modifier::new().semantics(Semantics::hidden())).child(Text("decorative")),
        );
        let frame = layout_and_paint(&root, (400, 300));
        assert!(frame.semantics_nodes.is_empty());
    }

    #[test]
    fn grid_places_columns_side_by_side() {
        let cells: Vec<View> = (0..3)
            .map(|i| Box(Modifier::new().height(20.0).tag(format!("cell.{i}"))))
            .collect();
        let root = Column(Modifier::new()).child(Grid(3, Modifier::new(), cells, 0.0, 0.0));
        let frame = layout_and_paint(&root, (300, 100));

        let xs: Vec<f32> = (0..3)
            .filter_map(|i| frame.rect_of(&format!("cell.{i}")).map(|r| r.x))
            .collect();
        assert_eq!(xs, vec![0.0, 100.0, 200.0]);
    }
}
