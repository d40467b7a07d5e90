use crate::domain::model::Color;

/// Square SVG document built as a flat list of element nodes.
///
/// Transforms never edit existing nodes; they either append overlays or wrap
/// the whole document as a nested `<svg>` inside a larger one, which keeps the
/// vector path aligned with the raster compositing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDocument {
    size: u32,
    nodes: Vec<String>,
}

impl SvgDocument {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            nodes: Vec::new(),
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn push_node(&mut self, node: String) {
        self.nodes.push(node);
    }

    pub fn push_rect(&mut self, x: u32, y: u32, width: u32, height: u32, fill: Color, radius: u32) {
        self.nodes.push(format!(
            "\t<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"{}\" ry=\"{}\"/>",
            x,
            y,
            width,
            height,
            fill.to_hex(),
            radius,
            radius
        ));
    }

    pub fn push_image(&mut self, x: u32, y: u32, width: u32, height: u32, href: &str) {
        self.nodes.push(format!(
            "\t<image x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" href=\"{}\"/>",
            x, y, width, height, href
        ));
    }

    /// Serializes the complete standalone document.
    pub fn render(&self) -> String {
        let mut result = String::new();
        result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
        result += &self.open_tag(None);
        result += "\n";
        for node in &self.nodes {
            result += node;
            result += "\n";
        }
        result += "</svg>\n";
        result
    }

    /// Serializes the document as a nested `<svg>` element anchored at the
    /// given offset inside an enclosing document.
    pub fn render_nested(&self, x: u32, y: u32) -> String {
        let mut result = String::from("\t");
        result += &self.open_tag(Some((x, y)));
        result += "\n";
        for node in &self.nodes {
            result += "\t";
            result += node;
            result += "\n";
        }
        result += "\t</svg>";
        result
    }

    fn open_tag(&self, offset: Option<(u32, u32)>) -> String {
        let anchor = match offset {
            Some((x, y)) => format!(" x=\"{}\" y=\"{}\"", x, y),
            None => String::new(),
        };
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\"{anchor} width=\"{size}\" height=\"{size}\" viewBox=\"0 0 {size} {size}\" stroke=\"none\">",
            anchor = anchor,
            size = self.size
        )
    }
}
