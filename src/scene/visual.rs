use crate::{
    foundation::core::{Transform2D, Vec2},
    scene::color::Color,
};

/// Gradient color stop.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    /// Stop color.
    pub color: Color,
}

impl GradientStop {
    /// Build a stop.
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

/// Fill of a shape node.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Flat color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Linear gradient along `angle_deg` (CSS convention, 0 = bottom to top).
    Linear {
        /// Gradient direction.
        angle_deg: f64,
        /// Color stops in ascending offset order.
        stops: Vec<GradientStop>,
    },
    /// Radial gradient centered at `center` (fractions of the shape box).
    Radial {
        /// Center within the shape box.
        center: Vec2,
        /// Color stops in ascending offset order.
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    /// Flat color fill.
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }
}

/// Drawable content of a [`VisualNode`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeKind {
    /// Container with no content of its own.
    Group,
    /// Single run of text, anchored at its center.
    Text {
        /// Text content.
        text: String,
        /// Font size in pixels.
        font_size: f64,
        /// CSS-style font weight.
        weight: u16,
        /// Fill color.
        color: Color,
    },
    /// Axis-aligned rectangle centered on the node origin.
    Rect {
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
        /// Corner radius in pixels.
        corner_radius: f64,
        /// Fill.
        fill: Paint,
    },
    /// Ellipse centered on the node origin.
    Ellipse {
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
        /// Fill.
        fill: Paint,
    },
    /// Externally loaded image, centered on the node origin.
    Image {
        /// Host-resolved source (URL or path).
        source: String,
        /// Width in pixels.
        width: f64,
        /// Height in pixels.
        height: f64,
    },
    /// Stroke from the node origin to `to`.
    Line {
        /// End point relative to the node origin.
        to: Vec2,
        /// Stroke width in pixels.
        stroke_width: f64,
        /// Stroke color.
        color: Color,
    },
}

/// One node of the visual tree handed to the host rasterizer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualNode {
    /// Stable identifier, unique among siblings.
    pub id: String,
    /// What to draw.
    pub kind: NodeKind,
    /// Transform relative to the parent.
    pub transform: Transform2D,
    /// Opacity in `[0, 1]`, multiplied down the tree.
    pub opacity: f64,
    /// Gaussian blur radius in pixels.
    pub blur_px: f64,
    /// Children in painter's order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<VisualNode>,
}

impl VisualNode {
    /// Bare node of the given kind.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            transform: Transform2D::default(),
            opacity: 1.0,
            blur_px: 0.0,
            children: Vec::new(),
        }
    }

    /// Group node.
    pub fn group(id: impl Into<String>, children: Vec<VisualNode>) -> Self {
        Self {
            children,
            ..Self::new(id, NodeKind::Group)
        }
    }

    /// Text node with weight 400.
    pub fn text(id: impl Into<String>, text: impl Into<String>, font_size: f64, color: Color) -> Self {
        Self::new(
            id,
            NodeKind::Text {
                text: text.into(),
                font_size,
                weight: 400,
                color,
            },
        )
    }

    /// Rectangle node.
    pub fn rect(id: impl Into<String>, width: f64, height: f64, fill: Paint) -> Self {
        Self::new(
            id,
            NodeKind::Rect {
                width,
                height,
                corner_radius: 0.0,
                fill,
            },
        )
    }

    /// Ellipse node.
    pub fn ellipse(id: impl Into<String>, rx: f64, ry: f64, fill: Paint) -> Self {
        Self::new(id, NodeKind::Ellipse { rx, ry, fill })
    }

    /// Image node.
    pub fn image(id: impl Into<String>, source: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(
            id,
            NodeKind::Image {
                source: source.into(),
                width,
                height,
            },
        )
    }

    /// Line node.
    pub fn line(id: impl Into<String>, to: Vec2, stroke_width: f64, color: Color) -> Self {
        Self::new(
            id,
            NodeKind::Line {
                to,
                stroke_width,
                color,
            },
        )
    }

    /// Set the font weight (no-op for non-text nodes).
    pub fn weight(mut self, w: u16) -> Self {
        if let NodeKind::Text { weight, .. } = &mut self.kind {
            *weight = w;
        }
        self
    }

    /// Set the corner radius (no-op for non-rect nodes).
    pub fn rounded(mut self, r: f64) -> Self {
        if let NodeKind::Rect { corner_radius, .. } = &mut self.kind {
            *corner_radius = r;
        }
        self
    }

    /// Multiply opacity by `k`, clamped to `[0, 1]`.
    pub fn with_opacity(mut self, k: f64) -> Self {
        self.opacity = (self.opacity * k).clamp(0.0, 1.0);
        self
    }

    /// Offset the translation.
    pub fn translated(mut self, dx: f64, dy: f64) -> Self {
        self.transform.translate += Vec2::new(dx, dy);
        self
    }

    /// Multiply the scale uniformly.
    pub fn scaled(mut self, s: f64) -> Self {
        self.transform.scale = Vec2::new(self.transform.scale.x * s, self.transform.scale.y * s);
        self
    }

    /// Add a rotation.
    pub fn rotated(mut self, rad: f64) -> Self {
        self.transform.rotation_rad += rad;
        self
    }

    /// Add blur.
    pub fn blurred(mut self, px: f64) -> Self {
        self.blur_px = (self.blur_px + px).max(0.0);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: VisualNode) -> Self {
        self.children.push(child);
        self
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Self::subtree_len).sum::<usize>()
    }

    fn find(&self, id: &str) -> Option<&VisualNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(id))
    }
}

/// Output of one frame: root nodes in painter's order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct VisualTree {
    /// Root nodes, back to front.
    pub nodes: Vec<VisualNode>,
}

impl VisualTree {
    /// Tree with the given roots.
    pub fn new(nodes: Vec<VisualNode>) -> Self {
        Self { nodes }
    }

    /// Tree with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// `true` when nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a root on top.
    pub fn push(&mut self, node: VisualNode) {
        self.nodes.push(node);
    }

    /// Paint `other` on top of `self`.
    pub fn append(&mut self, other: VisualTree) {
        self.nodes.extend(other.nodes);
    }

    /// Multiply the opacity of every root by `k`.
    pub fn with_opacity(mut self, k: f64) -> Self {
        self.nodes = self.nodes.into_iter().map(|n| n.with_opacity(k)).collect();
        self
    }

    /// Add blur to every root.
    pub fn blurred(mut self, px: f64) -> Self {
        self.nodes = self.nodes.into_iter().map(|n| n.blurred(px)).collect();
        self
    }

    /// Wrap all roots into a single group node.
    pub fn into_group(self, id: impl Into<String>) -> VisualNode {
        VisualNode::group(id, self.nodes)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(VisualNode::subtree_len).sum()
    }

    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&VisualNode> {
        self.nodes.iter().find_map(|n| n.find(id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/visual.rs"]
mod tests;
