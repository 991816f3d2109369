use taffy::{AlignItems, FlexWrap, JustifyContent};

use crate::{Brush, Color, Size, Transform};

#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub columns: usize,
    pub row_gap: f32,
    pub column_gap: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionType {
    Relative,
    Absolute,
}

#[derive(Clone, Debug, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub fill_max_w: bool,
    pub fill_max_h: bool,
    pub padding: Option<f32>,
    pub padding_values: Option<PaddingValues>,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub max_width: Option<f32>,
    pub max_height: Option<f32>,
    pub background: Option<Brush>,
    pub border: Option<Border>,
    pub flex_grow: Option<f32>,
    pub flex_wrap: Option<FlexWrap>,
    pub gap: Option<f32>,
    pub justify_content: Option<JustifyContent>,
    pub align_items_container: Option<AlignItems>,
    pub clip_rounded: Option<f32>,
    pub clip: bool,
    pub z_index: f32,
    pub alpha: Option<f32>,
    pub transform: Option<Transform>,
    pub grid: Option<GridConfig>,
    pub position_type: Option<PositionType>,
    pub offset_left: Option<f32>,
    pub offset_top: Option<f32>,
    pub offset_right: Option<f32>,
    pub offset_bottom: Option<f32>,
    pub margin_top: Option<f32>,
    pub margin_bottom: Option<f32>,
    pub margin_auto_x: bool,
    /// Layout tag reported in `Frame::tagged`; observers and hover look views
    /// up by it.
    pub tag: Option<String>,
    /// Report a hover hit region for this view (needs `tag`).
    pub hoverable: bool,
    pub semantics: Option<crate::Semantics>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn width(mut self, w: f32) -> Self {
        self.width = Some(w);
        self
    }
    pub fn height(mut self, h: f32) -> Self {
        self.height = Some(h);
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max_w = true;
        self.fill_max_h = true;
        self
    }
    pub fn fill_max_width(mut self) -> Self {
        self.fill_max_w = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(v);
        self
    }
    pub fn padding_values(mut self, padding: PaddingValues) -> Self {
        self.padding_values = Some(padding);
        self
    }
    /// Symmetric horizontal / vertical padding.
    pub fn padding_xy(self, x: f32, y: f32) -> Self {
        self.padding_values(PaddingValues {
            left: x,
            right: x,
            top: y,
            bottom: y,
        })
    }
    pub fn min_width(mut self, w: f32) -> Self {
        self.min_width = Some(w);
        self
    }
    pub fn min_height(mut self, h: f32) -> Self {
        self.min_height = Some(h);
        self
    }
    pub fn max_width(mut self, w: f32) -> Self {
        self.max_width = Some(w);
        self
    }
    pub fn max_height(mut self, h: f32) -> Self {
        self.max_height = Some(h);
        self
    }
    /// Set a solid color background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(Brush::Solid(color));
        self
    }
    /// Set a brush (solid, gradient, etc.) background.
    pub fn background_brush(mut self, brush: Brush) -> Self {
        self.background = Some(brush);
        self
    }
    pub fn border(mut self, width: f32, color: Color, radius: f32) -> Self {
        self.border = Some(Border {
            width,
            color,
            radius,
        });
        self
    }
    pub fn flex_grow(mut self, v: f32) -> Self {
        self.flex_grow = Some(v);
        self
    }
    pub fn flex_wrap(mut self, w: FlexWrap) -> Self {
        self.flex_wrap = Some(w);
        self
    }
    pub fn gap(mut self, v: f32) -> Self {
        self.gap = Some(v);
        self
    }
    pub fn justify_content(mut self, j: JustifyContent) -> Self {
        self.justify_content = Some(j);
        self
    }
    pub fn align_items(mut self, a: AlignItems) -> Self {
        self.align_items_container = Some(a);
        self
    }
    /// Center children on both axes.
    pub fn center(self) -> Self {
        self.align_items(AlignItems::Center)
            .justify_content(JustifyContent::Center)
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    /// Clip children to this view's bounds.
    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }
    pub fn z_index(mut self, z: f32) -> Self {
        self.z_index = z;
        self
    }
    pub fn alpha(mut self, a: f32) -> Self {
        self.alpha = Some(a);
        self
    }
    pub fn transform(mut self, t: Transform) -> Self {
        self.transform = Some(t);
        self
    }
    pub fn grid(mut self, columns: usize, row_gap: f32, column_gap: f32) -> Self {
        self.grid = Some(GridConfig {
            columns,
            row_gap,
            column_gap,
        });
        self
    }
    pub fn absolute(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self
    }
    /// Absolutely positioned, stretched over the parent (`inset: 0`).
    pub fn fill_parent(mut self) -> Self {
        self.position_type = Some(PositionType::Absolute);
        self.offset_left = Some(0.0);
        self.offset_top = Some(0.0);
        self.offset_right = Some(0.0);
        self.offset_bottom = Some(0.0);
        self
    }
    pub fn margin_vertical(mut self, top: f32, bottom: f32) -> Self {
        self.margin_top = Some(top);
        self.margin_bottom = Some(bottom);
        self
    }
    /// Center horizontally inside a wider parent (`mx-auto`).
    pub fn margin_auto_x(mut self) -> Self {
        self.margin_auto_x = true;
        self
    }
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
    pub fn hoverable(mut self) -> Self {
        self.hoverable = true;
        self
    }
    pub fn semantics(mut self, s: crate::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn scale(mut self, s: f32) -> Self {
        let mut t = self.transform.unwrap_or_else(Transform::identity);
        t.scale_x *= s;
        t.scale_y *= s;
        self.transform = Some(t);
        self
    }
    pub fn translate(mut self, x: f32, y: f32) -> Self {
        let t = self.transform.unwrap_or_else(Transform::identity);
        self.transform = Some(t.combine(&Transform::translate(x, y)));
        self
    }
}
