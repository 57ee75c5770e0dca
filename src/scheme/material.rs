/// Linear RGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    /// Opaque white, the default line color.
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Creates a color from linear RGB components.
    #[must_use]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Vertex program kinds, each carrying its program-specific parameters.
///
/// The programs themselves are host resources; this enum is the contract by
/// which a material selects one. Hosts map [`VertexProgram::key`] to their
/// precompiled program for that kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VertexProgram {
    /// Overlapping body rectangles, for opaque lines.
    Simple,
    /// Trapezoid body strip for translucent lines; overlap-free at joins.
    Strip,
    /// First strip segment of each sub-line; initializes the blend
    /// accumulation the strip program continues.
    StripTerminal,
    /// Start or end cap; `dir` is -1.0 at the start, +1.0 at the end, so one
    /// program serves both ends.
    Caps { dir: f64 },
    /// Bevel join fan.
    Bevel,
    /// Miter join fan; the apex offset is computed in the program.
    Miter,
    /// Round join fan spread over the turn angle.
    RoundJoin { resolution: u32 },
}

impl VertexProgram {
    /// Stable identifier used by hosts to select the compiled program.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Strip => "strip",
            Self::StripTerminal => "stripterminal",
            Self::Caps { .. } => "caps",
            Self::Bevel => "bevel",
            Self::Miter => "miter",
            Self::RoundJoin { .. } => "roundjoin",
        }
    }
}

/// Which triangle faces the host should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Both faces; required for the base layer which may wind either way.
    Double,
    /// Front faces only; depth-biased layers face the camera consistently.
    Front,
}

/// One shader-material configuration for one attribute within one vertex
/// group.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialDescriptor {
    /// Program selection with its per-kind parameters.
    pub program: VertexProgram,
    /// Line color uniform.
    pub color: Color,
    /// Line width uniform.
    pub width: f64,
    /// Opacity uniform.
    pub opacity: f64,
    /// Small depth bias separating stacked attribute layers.
    pub z_level: f64,
    /// Whether the host should blend this material.
    pub transparent: bool,
    /// Face culling mode.
    pub side: Side,
}
