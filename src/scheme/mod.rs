mod material;

pub use material::{Color, MaterialDescriptor, Side, VertexProgram};

use crate::error::{Result, SchemeError};
use crate::geometry::primitives::{
    bevel_join_geometry, box_geometry, miter_join_geometry, round_join_geometry,
};
use crate::geometry::GeometryTemplate;

/// Restricts a vertex group to one end of each sub-line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Where {
    /// First segment of each sub-line.
    Start,
    /// Last segment of each sub-line.
    End,
}

/// A geometry template plus its placement rule.
///
/// `limited: None` instantiates at every segment; `Some(where)` only at the
/// given end of each sub-line.
#[derive(Debug, Clone)]
pub struct VertexGroup {
    /// The triangle fragment instantiated per qualifying point.
    pub template: GeometryTemplate,
    /// Placement restriction.
    pub limited: Option<Where>,
}

/// Depth bias between stacked attribute layers. Values below this fall into
/// z-fighting on common depth-buffer precisions.
const LEVEL_OFFSET: f64 = 0.005;

/// Appearance of one material layer as the scheme consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeAttribute {
    /// Layer color.
    pub color: Color,
    /// Layer width.
    pub width: f64,
    /// Layer opacity.
    pub opacity: f64,
}

impl Default for SchemeAttribute {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            width: 1.0,
            opacity: 1.0,
        }
    }
}

/// Accumulates the vertex groups and material layers of one whole line
/// representation.
///
/// A `Scheme` is built fresh for every rebuild; construction order fixes the
/// relative paint order of overlapping parts (body, caps, joins, custom
/// elements).
#[derive(Debug, Default)]
pub struct Scheme {
    groups: Vec<VertexGroup>,
    layers: Vec<Vec<MaterialDescriptor>>,
    transparency: bool,
}

impl Scheme {
    /// Creates an empty scheme. `transparent` marks every produced material
    /// for host-side blending.
    #[must_use]
    pub fn new(transparent: bool) -> Self {
        Self {
            groups: Vec::new(),
            layers: Vec::new(),
            transparency: transparent,
        }
    }

    /// The accumulated vertex groups.
    #[must_use]
    pub fn groups(&self) -> &[VertexGroup] {
        &self.groups
    }

    /// The accumulated material layer lists, one list per vertex group.
    #[must_use]
    pub fn layers(&self) -> &[Vec<MaterialDescriptor>] {
        &self.layers
    }

    /// Consumes the scheme into its group and layer lists.
    #[must_use]
    pub fn into_parts(self) -> (Vec<VertexGroup>, Vec<Vec<MaterialDescriptor>>) {
        (self.groups, self.layers)
    }

    /// Adds simple line body segments: overlapping rectangles, one material
    /// layer per attribute. Used when the line is fully opaque.
    pub fn simple(&mut self, attrs: &[SchemeAttribute]) {
        self.add_group(box_geometry(), None);
        self.add_layers(attrs, VertexProgram::Simple);
    }

    /// Adds advanced line body segments for translucent lines: trapezoid
    /// strips that do not overlap at joins, plus a start-limited terminal
    /// group initializing the blend accumulation at each sub-line's first
    /// segment.
    pub fn strip(&mut self, attrs: &[SchemeAttribute]) {
        self.add_group(box_geometry(), None);
        self.add_layers(attrs, VertexProgram::Strip);

        self.add_group(box_geometry(), Some(Where::Start));
        self.add_layers(attrs, VertexProgram::StripTerminal);
    }

    /// Adds a user-supplied per-segment element drawn with the opaque body
    /// program.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is empty or references positions out
    /// of range.
    pub fn custom(&mut self, attr: &SchemeAttribute, template: GeometryTemplate) -> Result<()> {
        Self::check_template(&template, "custom")?;
        self.add_group(template, None);
        self.add_layers(std::slice::from_ref(attr), VertexProgram::Simple);
        Ok(())
    }

    /// Adds bevel joins at every interior vertex.
    pub fn bevel(&mut self, attrs: &[SchemeAttribute]) {
        self.add_group(bevel_join_geometry(), None);
        self.add_layers(attrs, VertexProgram::Bevel);
    }

    /// Adds miter joins at every interior vertex.
    pub fn miter(&mut self, attrs: &[SchemeAttribute]) {
        self.add_group(miter_join_geometry(), None);
        self.add_layers(attrs, VertexProgram::Miter);
    }

    /// Adds a cap at the given end of each sub-line. A `None` template (butt
    /// cap) adds nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is empty or references positions out
    /// of range.
    pub fn add_cap(
        &mut self,
        attrs: &[SchemeAttribute],
        template: Option<GeometryTemplate>,
        whereto: Where,
    ) -> Result<()> {
        let Some(template) = template else {
            return Ok(());
        };
        Self::check_template(&template, "cap")?;
        self.add_group(template, Some(whereto));
        let dir = match whereto {
            Where::Start => -1.0,
            Where::End => 1.0,
        };
        self.add_layers(attrs, VertexProgram::Caps { dir });
        Ok(())
    }

    /// Adds round joins with the given fan resolution at every interior
    /// vertex.
    pub fn round_join(&mut self, attrs: &[SchemeAttribute], resolution: u32) {
        let resolution = resolution.max(1);
        self.add_group(round_join_geometry(resolution), None);
        self.add_layers(attrs, VertexProgram::RoundJoin { resolution });
    }

    fn check_template(template: &GeometryTemplate, what: &str) -> Result<()> {
        if template.positions.is_empty() || template.cells.is_empty() {
            return Err(SchemeError::InvalidParameters(format!(
                "{what} template must have positions and cells"
            ))
            .into());
        }
        template.validate()
    }

    fn add_group(&mut self, template: GeometryTemplate, limited: Option<Where>) {
        self.groups.push(VertexGroup { template, limited });
    }

    /// Appends one material layer per attribute for the most recently added
    /// group. Layer index i receives a z-bias of `i * LEVEL_OFFSET`; biased
    /// layers switch to front-side culling.
    #[allow(clippy::cast_precision_loss)]
    fn add_layers(&mut self, attrs: &[SchemeAttribute], program: VertexProgram) {
        let layers = attrs
            .iter()
            .enumerate()
            .map(|(i, attr)| {
                let z_level = i as f64 * LEVEL_OFFSET;
                MaterialDescriptor {
                    program,
                    color: attr.color,
                    width: attr.width,
                    opacity: attr.opacity,
                    z_level,
                    transparent: self.transparency,
                    side: if z_level > 0.0 { Side::Front } else { Side::Double },
                }
            })
            .collect();
        self.layers.push(layers);
    }
}
