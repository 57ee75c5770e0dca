use tracing::debug;

use crate::assembly::{AssembleMesh, MeshData};
use crate::error::Result;
use crate::geometry::primitives::{round_cap_geometry, square_cap_geometry, top_cap_geometry};
use crate::geometry::{GeometryTemplate, PointInput};
use crate::math::sphere::BoundingSphere;
use crate::math::{Matrix4, Vector3};
use crate::query::{Ray, Raycast, RaycastHit};
use crate::scheme::{Color, Scheme, SchemeAttribute, Where};

/// Fan resolution used for the built-in round cap.
const CAP_RESOLUTION: u32 = 10;

/// Fan resolution used for the built-in round join.
const JOIN_RESOLUTION: u32 = 10;

/// Line join kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Join {
    /// No join geometry; body segments simply overlap.
    #[default]
    None,
    Bevel,
    Miter,
    Round,
}

impl Join {
    /// All join kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Bevel, Self::Miter, Self::Round];

    /// The author-time name of the join kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Bevel => "Bevel",
            Self::Miter => "Miter",
            Self::Round => "Round",
        }
    }

    /// Looks a join kind up by its author-time name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|j| j.name() == name)
    }
}

/// Line cap kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Caps {
    /// Flat cut at the endpoint; no cap geometry.
    #[default]
    Butt,
    Round,
    Square,
    Top,
}

impl Caps {
    /// All cap kinds, in declaration order.
    pub const ALL: [Self; 4] = [Self::Butt, Self::Round, Self::Square, Self::Top];

    /// The author-time name of the cap kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Butt => "Butt",
            Self::Round => "Round",
            Self::Square => "Square",
            Self::Top => "Top",
        }
    }

    /// Looks a cap kind up by its author-time name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// The cap's geometry template; `Butt` has none.
    #[must_use]
    pub fn template(self) -> Option<GeometryTemplate> {
        match self {
            Self::Butt => None,
            Self::Round => Some(round_cap_geometry(CAP_RESOLUTION)),
            Self::Square => Some(square_cap_geometry()),
            Self::Top => Some(top_cap_geometry()),
        }
    }
}

/// Author-time join selection: a typed kind, or a name resolved during
/// validation (as it arrives from untyped scene descriptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinInput {
    Kind(Join),
    Named(String),
}

impl Default for JoinInput {
    fn default() -> Self {
        Self::Kind(Join::None)
    }
}

impl From<Join> for JoinInput {
    fn from(join: Join) -> Self {
        Self::Kind(join)
    }
}

/// Author-time cap selection: a typed kind, a name, or a user-supplied
/// geometry template.
#[derive(Debug, Clone, PartialEq)]
pub enum CapInput {
    Kind(Caps),
    Named(String),
    /// A custom cap template.
    Geometry(GeometryTemplate),
}

impl Default for CapInput {
    fn default() -> Self {
        Self::Kind(Caps::Butt)
    }
}

impl From<Caps> for CapInput {
    fn from(caps: Caps) -> Self {
        Self::Kind(caps)
    }
}

/// Appearance of one stacked line layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attribute {
    /// The main color of the line body.
    pub color: Color,
    /// Alternative color for the inner parts (caps, miter, bevel); falls
    /// back to the main color.
    pub offals: Option<Color>,
    /// The width of the line.
    pub width: f64,
}

impl Default for Attribute {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            offals: None,
            width: 1.0,
        }
    }
}

impl Attribute {
    /// The color used for caps and joins.
    #[must_use]
    pub fn offal_color(&self) -> Color {
        self.offals.unwrap_or(self.color)
    }
}

/// One attribute or several stacked ones.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrInput {
    Single(Attribute),
    Many(Vec<Attribute>),
}

impl AttrInput {
    /// The attribute list this input resolves to.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Attribute> {
        match self {
            Self::Single(attr) => vec![*attr],
            Self::Many(attrs) => attrs.clone(),
        }
    }
}

impl From<Attribute> for AttrInput {
    fn from(attr: Attribute) -> Self {
        Self::Single(attr)
    }
}

impl From<Vec<Attribute>> for AttrInput {
    fn from(attrs: Vec<Attribute>) -> Self {
        Self::Many(attrs)
    }
}

/// A user-defined element rendered once per segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Custom {
    /// How the element appears.
    pub scheme: SchemeAttribute,
    /// The user-defined geometry.
    pub geometry: GeometryTemplate,
}

/// Debug visualization style for the raycast bounding sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereStyle {
    pub color: Color,
    pub opacity: f64,
}

/// Construction inputs of one renderable line instance.
#[derive(Debug, Clone, PartialEq)]
pub struct WidelineProps {
    /// The shape of the line.
    pub points: PointInput,
    /// Stacked appearance layers. `None` is a configuration error; an empty
    /// list is valid and only suppresses the body.
    pub attr: Option<AttrInput>,
    /// Line opacity. Below 1 the translucent strip body is used; at exactly
    /// 0 body, caps and joins are suppressed entirely.
    pub opacity: Option<f64>,
    /// Which joins are used.
    pub join: JoinInput,
    /// The start cap of the line.
    pub caps_start: CapInput,
    /// The end cap of the line.
    pub caps_end: CapInput,
    /// User-defined custom elements, one per segment.
    pub custom: Vec<Custom>,
    /// Draw the raycast bounding sphere for debugging.
    pub bounding_sphere: Option<SphereStyle>,
    /// Disables hit testing for this instance.
    pub no_raycast: bool,
    /// Local position.
    pub position: Vector3,
    /// Local scale.
    pub scale: Vector3,
    /// Local rotation, XYZ Euler angles in radians.
    pub rotation: Vector3,
}

impl Default for WidelineProps {
    fn default() -> Self {
        Self {
            points: PointInput::default(),
            attr: None,
            opacity: None,
            join: JoinInput::default(),
            caps_start: CapInput::default(),
            caps_end: CapInput::default(),
            custom: Vec::new(),
            bounding_sphere: None,
            no_raycast: false,
            position: Vector3::zeros(),
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::zeros(),
        }
    }
}

/// Outcome of the construction-input validation pass.
///
/// Configuration problems are not errors: they surface as warnings and the
/// instance renders an empty fallback mesh.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Human-readable problems found.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether the inputs can be built.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validates construction inputs without building anything.
#[must_use]
pub fn validate_props(props: &WidelineProps) -> ValidationReport {
    let mut warnings = Vec::new();

    if props.attr.is_none() {
        warnings.push("attr prop is required".to_owned());
    }

    if props.points.is_empty() {
        warnings.push("points array cannot be empty".to_owned());
    }

    if let Some(opacity) = props.opacity {
        if !(0.0..=1.0).contains(&opacity) {
            warnings.push("opacity must be between 0 and 1".to_owned());
        }
    }

    if let JoinInput::Named(name) = &props.join {
        if Join::from_name(name).is_none() {
            warnings.push(format!(
                "invalid join \"{name}\", expected one of None, Bevel, Miter, Round"
            ));
        }
    }

    for (field, cap) in [("capsStart", &props.caps_start), ("capsEnd", &props.caps_end)] {
        if let CapInput::Named(name) = cap {
            if Caps::from_name(name).is_none() {
                warnings.push(format!(
                    "invalid {field} \"{name}\", expected one of Butt, Round, Square, Top"
                ));
            }
        }
    }

    ValidationReport { warnings }
}

/// One renderable variable-width polyline instance.
///
/// Owns the construction inputs and the derived mesh. The mesh is rebuilt
/// from scratch whenever a shape-affecting input changes; each realized
/// rebuild bumps a generation counter the host uses to re-upload buffers.
#[derive(Debug)]
pub struct Wideline {
    props: WidelineProps,
    report: ValidationReport,
    mesh: Option<MeshData>,
    generation: u64,
}

impl Wideline {
    /// Creates an instance. Construction never fails: invalid props yield an
    /// instance whose [`report`](Self::report) lists the problems and whose
    /// mesh stays empty as a fallback.
    #[must_use]
    pub fn new(props: WidelineProps) -> Self {
        let report = validate_props(&props);
        Self {
            props,
            report,
            mesh: None,
            generation: 0,
        }
    }

    /// The construction inputs.
    #[must_use]
    pub fn props(&self) -> &WidelineProps {
        &self.props
    }

    /// The validation outcome for the current inputs.
    #[must_use]
    pub fn report(&self) -> &ValidationReport {
        &self.report
    }

    /// Whether the current inputs are buildable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.report.is_valid()
    }

    /// Monotonic token bumped whenever the buffer set is structurally
    /// replaced; hosts compare it to decide on re-upload.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Replaces all construction inputs, invalidating the mesh.
    pub fn set_props(&mut self, props: WidelineProps) {
        self.props = props;
        self.invalidate();
    }

    /// Replaces the point input, invalidating the mesh.
    pub fn set_points(&mut self, points: PointInput) {
        self.props.points = points;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.report = validate_props(&self.props);
        self.mesh = None;
    }

    /// The combined mesh buffers, rebuilding if needed.
    ///
    /// Invalid inputs yield an empty mesh (the fallback contract); see
    /// [`report`](Self::report) for the reasons.
    ///
    /// # Errors
    ///
    /// Returns an error on internal invariant violations, never on bad user
    /// input.
    pub fn mesh(&mut self) -> Result<&MeshData> {
        if self.mesh.is_none() {
            let mesh = if self.is_valid() {
                self.rebuild()?
            } else {
                debug!(warnings = self.report.warnings.len(), "fallback empty mesh");
                MeshData::default()
            };
            self.mesh = Some(mesh);
            self.generation += 1;
        }
        Ok(self.mesh.get_or_insert_with(MeshData::default))
    }

    /// The local transform the host applies to the mesh node.
    #[must_use]
    pub fn world_transform(&self) -> Matrix4 {
        let translation = Matrix4::new_translation(&self.props.position);
        let rotation = nalgebra::Rotation3::from_euler_angles(
            self.props.rotation.x,
            self.props.rotation.y,
            self.props.rotation.z,
        )
        .to_homogeneous();
        let scale = Matrix4::new_nonuniform_scaling(&self.props.scale);
        translation * rotation * scale
    }

    /// The local-space bounding sphere of the normalized points, used by hit
    /// testing and the debug visualization.
    #[must_use]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        let sublines = self.props.points.sublines();
        BoundingSphere::enclosing(sublines.iter().flatten())
    }

    /// The bounding-sphere debug visualization, when enabled: the sphere to
    /// draw and its style.
    #[must_use]
    pub fn debug_sphere(&self) -> Option<(BoundingSphere, SphereStyle)> {
        self.props
            .bounding_sphere
            .map(|style| (self.bounding_sphere(), style))
    }

    /// Hit-tests the instance against a world-space ray, honoring
    /// `no_raycast` and using the width of attribute layer 0.
    ///
    /// # Errors
    ///
    /// Returns an error if the world transform is not invertible or the ray
    /// direction is zero-length.
    pub fn raycast(&self, ray: &Ray) -> Result<Option<RaycastHit>> {
        if self.props.no_raycast {
            return Ok(None);
        }
        let sublines = self.props.points.sublines();
        let width = self
            .attributes()
            .first()
            .map_or(1.0, |attr| attr.width);
        Raycast::new(&sublines, self.world_transform(), width).execute(ray)
    }

    fn attributes(&self) -> Vec<Attribute> {
        self.props.attr.as_ref().map(AttrInput::to_vec).unwrap_or_default()
    }

    fn resolved_join(&self) -> Join {
        match &self.props.join {
            JoinInput::Kind(join) => *join,
            JoinInput::Named(name) => Join::from_name(name).unwrap_or_default(),
        }
    }

    fn cap_template(cap: &CapInput) -> Option<GeometryTemplate> {
        match cap {
            CapInput::Kind(kind) => kind.template(),
            CapInput::Named(name) => Caps::from_name(name).and_then(Caps::template),
            CapInput::Geometry(template) => Some(template.clone()),
        }
    }

    /// Builds the scheme in the fixed construction order: body, start cap,
    /// end cap, join, custom elements. The order determines the relative
    /// paint order of overlapping parts.
    fn build_scheme(&self) -> Result<Scheme> {
        let opacity = self.props.opacity;
        let transparent = opacity.is_some_and(|o| o < 1.0);
        let suppressed = opacity.is_some_and(|o| o <= 0.0);
        let attrs = self.attributes();

        let mut scheme = Scheme::new(transparent);

        if !suppressed && !attrs.is_empty() {
            let body: Vec<SchemeAttribute> = attrs
                .iter()
                .map(|a| SchemeAttribute {
                    color: a.color,
                    width: a.width,
                    opacity: opacity.unwrap_or(1.0),
                })
                .collect();
            if transparent {
                scheme.strip(&body);
            } else {
                scheme.simple(&body);
            }
        }

        if !suppressed {
            let offal: Vec<SchemeAttribute> = attrs
                .iter()
                .map(|a| SchemeAttribute {
                    color: a.offal_color(),
                    width: a.width,
                    opacity: opacity.unwrap_or(1.0),
                })
                .collect();

            scheme.add_cap(&offal, Self::cap_template(&self.props.caps_start), Where::Start)?;
            scheme.add_cap(&offal, Self::cap_template(&self.props.caps_end), Where::End)?;

            match self.resolved_join() {
                Join::None => {}
                Join::Bevel => scheme.bevel(&offal),
                Join::Miter => scheme.miter(&offal),
                Join::Round => scheme.round_join(&offal, JOIN_RESOLUTION),
            }
        }

        // Custom elements draw even at opacity 0.
        for custom in &self.props.custom {
            scheme.custom(&custom.scheme, custom.geometry.clone())?;
        }

        Ok(scheme)
    }

    fn rebuild(&self) -> Result<MeshData> {
        let sublines = self.props.points.sublines();
        let scheme = self.build_scheme()?;
        debug!(
            sublines = sublines.len(),
            groups = scheme.groups().len(),
            "rebuilding wideline mesh"
        );
        AssembleMesh::new(sublines, scheme).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Shape;
    use crate::math::Point3;

    fn flat(points: Vec<f64>) -> PointInput {
        PointInput::Single(Shape::Flat(points))
    }

    fn base_props() -> WidelineProps {
        WidelineProps {
            points: flat(vec![0.0, 0.0, 1.0, 1.0]),
            attr: Some(AttrInput::Single(Attribute::default())),
            ..WidelineProps::default()
        }
    }

    // ── validation ──

    #[test]
    fn valid_props_produce_no_warnings() {
        let report = validate_props(&base_props());
        assert!(report.is_valid(), "warnings: {:?}", report.warnings);
    }

    #[test]
    fn missing_attr_is_invalid() {
        let props = WidelineProps {
            attr: None,
            ..base_props()
        };
        let report = validate_props(&props);
        assert!(!report.is_valid());
        assert!(report.warnings.contains(&"attr prop is required".to_owned()));
    }

    #[test]
    fn out_of_range_opacity_is_invalid() {
        let props = WidelineProps {
            opacity: Some(1.5),
            ..base_props()
        };
        let report = validate_props(&props);
        assert!(!report.is_valid());
        assert!(report
            .warnings
            .contains(&"opacity must be between 0 and 1".to_owned()));
    }

    #[test]
    fn unknown_join_name_is_invalid() {
        let props = WidelineProps {
            join: JoinInput::Named("InvalidJoin".to_owned()),
            ..base_props()
        };
        let report = validate_props(&props);
        assert!(!report.is_valid());
        assert!(report.warnings[0].contains("invalid join \"InvalidJoin\""));
    }

    #[test]
    fn unknown_cap_name_is_invalid() {
        let props = WidelineProps {
            caps_start: CapInput::Named("InvalidCap".to_owned()),
            ..base_props()
        };
        let report = validate_props(&props);
        assert!(!report.is_valid());
        assert!(report.warnings[0].contains("invalid capsStart \"InvalidCap\""));
    }

    #[test]
    fn empty_points_are_invalid() {
        let props = WidelineProps {
            points: flat(Vec::new()),
            ..base_props()
        };
        let report = validate_props(&props);
        assert!(!report.is_valid());
        assert!(report
            .warnings
            .contains(&"points array cannot be empty".to_owned()));
    }

    #[test]
    fn empty_attr_list_is_valid() {
        let props = WidelineProps {
            attr: Some(AttrInput::Many(Vec::new())),
            ..base_props()
        };
        assert!(validate_props(&props).is_valid());
    }

    #[test]
    fn named_kinds_resolve() {
        let props = WidelineProps {
            join: JoinInput::Named("Round".to_owned()),
            caps_start: CapInput::Named("Square".to_owned()),
            caps_end: CapInput::Named("Top".to_owned()),
            ..base_props()
        };
        assert!(validate_props(&props).is_valid());
    }

    // ── end to end ──

    #[test]
    fn plain_two_point_line_has_one_group_and_material() {
        let mut line = Wideline::new(base_props());
        let mesh = line.mesh().unwrap();
        assert_eq!(mesh.materials.len(), 1);
        assert_eq!(mesh.groups.len(), 1);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn joined_and_capped_line_has_four_groups() {
        let props = WidelineProps {
            points: flat(vec![-1.0, -1.0, 0.0, 1.0, 1.0, -1.0]),
            join: JoinInput::Kind(Join::Round),
            caps_start: CapInput::Kind(Caps::Round),
            caps_end: CapInput::Kind(Caps::Round),
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Body, start cap, end cap, round join: one material layer each.
        assert_eq!(mesh.materials.len(), 4);
        assert_eq!(mesh.groups.len(), 4);
    }

    #[test]
    fn stacked_attributes_layer_every_group() {
        let attrs = vec![
            Attribute {
                width: 0.4,
                ..Attribute::default()
            },
            Attribute {
                width: 0.2,
                color: Color::new(1.0, 0.0, 0.0),
                ..Attribute::default()
            },
        ];
        let props = WidelineProps {
            points: flat(vec![-1.0, -1.0, 0.0, 1.0, 1.0, -1.0]),
            attr: Some(AttrInput::Many(attrs)),
            join: JoinInput::Kind(Join::Bevel),
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // 2 groups x 2 layers.
        assert_eq!(mesh.materials.len(), 4);
        assert_eq!(mesh.groups.len(), 4);
        // All sequence-0 ranges precede all sequence-1 ranges.
        assert!(mesh.groups.windows(2).all(|w| w[0].seq <= w[1].seq));
    }

    #[test]
    fn translucency_switches_to_strip_mode() {
        let props = WidelineProps {
            opacity: Some(0.5),
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Body strip plus start-limited terminal group.
        assert_eq!(mesh.groups.len(), 2);
        assert!(mesh.materials.iter().all(|m| m.transparent));
    }

    #[test]
    fn zero_opacity_suppresses_all_but_custom() {
        let custom = Custom {
            scheme: SchemeAttribute::default(),
            geometry: crate::geometry::primitives::box_geometry(),
        };
        let props = WidelineProps {
            opacity: Some(0.0),
            join: JoinInput::Kind(Join::Round),
            caps_start: CapInput::Kind(Caps::Round),
            custom: vec![custom],
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Only the custom element remains.
        assert_eq!(mesh.materials.len(), 1);
        assert_eq!(mesh.groups.len(), 1);
    }

    #[test]
    fn empty_attr_suppresses_line_but_not_custom() {
        let props = WidelineProps {
            attr: Some(AttrInput::Many(Vec::new())),
            caps_end: CapInput::Kind(Caps::Square),
            custom: vec![Custom {
                scheme: SchemeAttribute::default(),
                geometry: crate::geometry::primitives::box_geometry(),
            }],
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Caps and joins derive their layers from the attribute list, so an
        // empty list leaves only the custom element.
        assert_eq!(mesh.materials.len(), 1);
        assert_eq!(mesh.groups.len(), 1);
        assert_eq!(mesh.vertex_count(), 4);
    }

    #[test]
    fn invalid_props_fall_back_to_empty_mesh() {
        let mut line = Wideline::new(WidelineProps::default());
        assert!(!line.is_valid());
        let mesh = line.mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.groups.is_empty());
    }

    #[test]
    fn generation_bumps_once_per_rebuild() {
        let mut line = Wideline::new(base_props());
        assert_eq!(line.generation(), 0);
        line.mesh().unwrap();
        assert_eq!(line.generation(), 1);
        // Memoized access does not bump.
        line.mesh().unwrap();
        assert_eq!(line.generation(), 1);
        line.set_points(flat(vec![0.0, 0.0, 2.0, 2.0]));
        line.mesh().unwrap();
        assert_eq!(line.generation(), 2);
    }

    #[test]
    fn offal_color_reaches_caps_and_joins() {
        let red = Color::new(1.0, 0.0, 0.0);
        let attr = Attribute {
            offals: Some(red),
            ..Attribute::default()
        };
        let props = WidelineProps {
            points: flat(vec![-1.0, -1.0, 0.0, 1.0, 1.0, -1.0]),
            attr: Some(AttrInput::Single(attr)),
            join: JoinInput::Kind(Join::Bevel),
            caps_start: CapInput::Kind(Caps::Square),
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Body keeps the main color, cap and join use the offal color.
        assert_eq!(mesh.materials[0].color, Color::WHITE);
        assert_eq!(mesh.materials[1].color, red);
        assert_eq!(mesh.materials[2].color, red);
    }

    #[test]
    fn custom_cap_geometry_is_used() {
        let template = GeometryTemplate::new(
            vec![
                Point3::new(0.0, 0.5, 0.0),
                Point3::new(0.0, -0.5, 0.0),
                Point3::new(0.25, 0.0, 0.0),
            ],
            vec![[0, 1, 2]],
        );
        let props = WidelineProps {
            caps_start: CapInput::Geometry(template),
            ..base_props()
        };
        let mut line = Wideline::new(props);
        let mesh = line.mesh().unwrap();
        // Body box (4) plus the 3-vertex custom cap.
        assert_eq!(mesh.vertex_count(), 7);
    }

    #[test]
    fn batch_input_raycasts_across_sublines() {
        let props = WidelineProps {
            points: PointInput::Batch(vec![
                Shape::Flat(vec![0.0, 0.0, 1.0, 0.0]),
                Shape::Flat(vec![3.0, 0.0, 4.0, 0.0]),
            ]),
            attr: Some(AttrInput::Single(Attribute {
                width: 0.4,
                ..Attribute::default()
            })),
            ..WidelineProps::default()
        };
        let line = Wideline::new(props);
        let hit = line
            .raycast(&Ray::new(
                Point3::new(3.5, 0.0, 5.0),
                crate::math::Vector3::new(0.0, 0.0, -1.0),
            ))
            .unwrap()
            .unwrap();
        assert_eq!(hit.segment, 1);
    }

    #[test]
    fn no_raycast_opts_out() {
        let props = WidelineProps {
            no_raycast: true,
            ..base_props()
        };
        let line = Wideline::new(props);
        let hit = line
            .raycast(&Ray::new(
                Point3::new(0.5, 0.5, 5.0),
                crate::math::Vector3::new(0.0, 0.0, -1.0),
            ))
            .unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn bounding_sphere_covers_all_points() {
        let line = Wideline::new(base_props());
        let sphere = line.bounding_sphere();
        assert!((sphere.center - Point3::new(0.5, 0.5, 0.0)).norm() < 1e-9);
        assert!(sphere.radius > 0.7 && sphere.radius < 0.71);
    }
}
