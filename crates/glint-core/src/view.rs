use crate::{Brush, Color, Modifier, Rect, Transform};

pub type ViewId = u64;

#[derive(Clone, Debug, PartialEq)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    Text {
        text: String,
        color: Color,
        font_size: f32,
        max_lines: Option<usize>,
        soft_wrap: bool,
    },
    /// A named glyph from the icon set, drawn in a square of `size`.
    Icon {
        name: &'static str,
        color: Color,
        size: f32,
    },
    /// A container whose activation navigates to `href`.
    Link {
        href: String,
    },
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search by layout tag.
    pub fn find_tagged(&self, tag: &str) -> Option<&View> {
        if self.modifier.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_tagged(tag))
    }

    /// Concatenated text of every `Text` in this subtree, in tree order.
    pub fn collect_text(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_text_into(&mut out);
        out
    }

    fn collect_text_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let ViewKind::Text { text, .. } = &self.kind {
            out.push(text.as_str());
        }
        for c in &self.children {
            c.collect_text_into(out);
        }
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

impl Scene {
    /// Text runs in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Rect, Color)> {
        self.nodes.iter().filter_map(|n| match n {
            SceneNode::Text {
                text, rect, color, ..
            } => Some((text.as_str(), *rect, *color)),
            _ => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    Rect {
        rect: Rect,
        brush: Brush,
        radius: f32,
    },
    Border {
        rect: Rect,
        color: Color,
        width: f32,
        radius: f32,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    Icon {
        rect: Rect,
        name: &'static str,
        color: Color,
    },
    PushClip {
        rect: Rect,
        radius: f32,
    },
    PopClip,
    PushTransform {
        transform: Transform,
    },
    PopTransform,
}
