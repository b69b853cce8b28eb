use crate::scene::{
    color::Color,
    visual::{GradientStop, NodeKind, Paint, VisualNode, VisualTree},
};
use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5e3d_71c4_a9b2_0f68;

/// Stable 128-bit fingerprint of a rendered frame.
///
/// Two frames with equal fingerprints produce identical visual trees; the frame index itself
/// is not hashed, so still frames compare equal across time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a visual tree.
pub fn fingerprint_tree(tree: &VisualTree) -> FrameFingerprint {
    let mut h = StableHasher::new();
    h.write_len(tree.nodes.len());
    for n in &tree.nodes {
        write_node(&mut h, n);
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u16(&mut self, v: u16) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_len(&mut self, n: usize) {
        self.write_u64(n as u64);
    }

    fn write_f64(&mut self, v: f64) {
        // -0.0 and 0.0 render the same.
        let v = if v == 0.0 { 0.0 } else { v };
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_len(s.len());
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_node(h: &mut StableHasher, n: &VisualNode) {
    h.write_str(&n.id);
    write_kind(h, &n.kind);
    for c in n.transform.to_affine().as_coeffs() {
        h.write_f64(c);
    }
    h.write_f64(n.opacity);
    h.write_f64(n.blur_px);
    h.write_len(n.children.len());
    for c in &n.children {
        write_node(h, c);
    }
}

fn write_kind(h: &mut StableHasher, kind: &NodeKind) {
    match kind {
        NodeKind::Group => h.write_u8(0),
        NodeKind::Text {
            text,
            font_size,
            weight,
            color,
        } => {
            h.write_u8(1);
            h.write_str(text);
            h.write_f64(*font_size);
            h.write_u16(*weight);
            write_color(h, *color);
        }
        NodeKind::Rect {
            width,
            height,
            corner_radius,
            fill,
        } => {
            h.write_u8(2);
            h.write_f64(*width);
            h.write_f64(*height);
            h.write_f64(*corner_radius);
            write_paint(h, fill);
        }
        NodeKind::Ellipse { rx, ry, fill } => {
            h.write_u8(3);
            h.write_f64(*rx);
            h.write_f64(*ry);
            write_paint(h, fill);
        }
        NodeKind::Image {
            source,
            width,
            height,
        } => {
            h.write_u8(4);
            h.write_str(source);
            h.write_f64(*width);
            h.write_f64(*height);
        }
        NodeKind::Line {
            to,
            stroke_width,
            color,
        } => {
            h.write_u8(5);
            h.write_f64(to.x);
            h.write_f64(to.y);
            h.write_f64(*stroke_width);
            write_color(h, *color);
        }
    }
}

fn write_paint(h: &mut StableHasher, paint: &Paint) {
    match paint {
        Paint::Solid { color } => {
            h.write_u8(0);
            write_color(h, *color);
        }
        Paint::Linear { angle_deg, stops } => {
            h.write_u8(1);
            h.write_f64(*angle_deg);
            write_stops(h, stops);
        }
        Paint::Radial { center, stops } => {
            h.write_u8(2);
            h.write_f64(center.x);
            h.write_f64(center.y);
            write_stops(h, stops);
        }
    }
}

fn write_stops(h: &mut StableHasher, stops: &[GradientStop]) {
    h.write_len(stops.len());
    for s in stops {
        h.write_f64(s.offset);
        write_color(h, s.color);
    }
}

fn write_color(h: &mut StableHasher, c: Color) {
    for v in [c.r, c.g, c.b, c.a] {
        h.write_f64(v);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/fingerprint.rs"]
mod tests;
