use std::fmt;

use crate::format::{format_geometry, FormatConfig};
use crate::geometry::{FillRule, Point, Size, SweepDirection};

/// Receiver for the drawing instructions produced by the path parser.
///
/// Points are always absolute. The parser guarantees every figure opened by
/// `begin_figure` receives exactly one `set_closed_state` before the next
/// figure starts or parsing completes, and that `set_fill_rule` is called at
/// most once, before any figure.
pub trait GeometrySink {
    fn set_fill_rule(&mut self, fill_rule: FillRule);

    fn begin_figure(&mut self, start: Point, is_filled: bool, is_stroked: bool);

    fn line_to(&mut self, point: Point, is_stroked: bool, is_smooth_join: bool);

    fn bezier_to(
        &mut self,
        cp1: Point,
        cp2: Point,
        end: Point,
        is_stroked: bool,
        is_smooth_join: bool,
    );

    #[allow(clippy::too_many_arguments)]
    fn arc_to(
        &mut self,
        end: Point,
        size: Size,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
        is_stroked: bool,
        is_smooth_join: bool,
    );

    fn set_closed_state(&mut self, is_closed: bool);
}

/// A single recorded sink call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    BeginFigure {
        start: Point,
        is_filled: bool,
        is_stroked: bool,
    },
    LineTo {
        point: Point,
        is_stroked: bool,
        is_smooth_join: bool,
    },
    BezierTo {
        cp1: Point,
        cp2: Point,
        end: Point,
        is_stroked: bool,
        is_smooth_join: bool,
    },
    ArcTo {
        end: Point,
        size: Size,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
        is_stroked: bool,
        is_smooth_join: bool,
    },
    SetClosedState(bool),
}

impl Instruction {
    /// The point at which the pen rests after this instruction, if it moves.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            Self::BeginFigure { start, .. } => Some(*start),
            Self::LineTo { point, .. } => Some(*point),
            Self::BezierTo { end, .. } | Self::ArcTo { end, .. } => Some(*end),
            Self::SetClosedState(_) => None,
        }
    }
}

/// Geometry recorded from a complete parse: the fill rule plus the ordered
/// instruction stream.
///
/// Equality compares the recorded stream exactly, so two path strings which
/// describe the same geometry compare equal once parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathGeometry {
    pub fill_rule: FillRule,
    pub instructions: Vec<Instruction>,
}

impl PathGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn figure_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|ins| matches!(ins, Instruction::BeginFigure { .. }))
            .count()
    }

    /// Replay the recorded instructions into another sink.
    pub fn replay(&self, sink: &mut dyn GeometrySink) {
        if self.fill_rule != FillRule::default() {
            sink.set_fill_rule(self.fill_rule);
        }
        for ins in &self.instructions {
            match *ins {
                Instruction::BeginFigure {
                    start,
                    is_filled,
                    is_stroked,
                } => sink.begin_figure(start, is_filled, is_stroked),
                Instruction::LineTo {
                    point,
                    is_stroked,
                    is_smooth_join,
                } => sink.line_to(point, is_stroked, is_smooth_join),
                Instruction::BezierTo {
                    cp1,
                    cp2,
                    end,
                    is_stroked,
                    is_smooth_join,
                } => sink.bezier_to(cp1, cp2, end, is_stroked, is_smooth_join),
                Instruction::ArcTo {
                    end,
                    size,
                    rotation_angle,
                    is_large_arc,
                    sweep_direction,
                    is_stroked,
                    is_smooth_join,
                } => sink.arc_to(
                    end,
                    size,
                    rotation_angle,
                    is_large_arc,
                    sweep_direction,
                    is_stroked,
                    is_smooth_join,
                ),
                Instruction::SetClosedState(closed) => sink.set_closed_state(closed),
            }
        }
    }
}

impl GeometrySink for PathGeometry {
    fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    fn begin_figure(&mut self, start: Point, is_filled: bool, is_stroked: bool) {
        self.instructions.push(Instruction::BeginFigure {
            start,
            is_filled,
            is_stroked,
        });
    }

    fn line_to(&mut self, point: Point, is_stroked: bool, is_smooth_join: bool) {
        self.instructions.push(Instruction::LineTo {
            point,
            is_stroked,
            is_smooth_join,
        });
    }

    fn bezier_to(
        &mut self,
        cp1: Point,
        cp2: Point,
        end: Point,
        is_stroked: bool,
        is_smooth_join: bool,
    ) {
        self.instructions.push(Instruction::BezierTo {
            cp1,
            cp2,
            end,
            is_stroked,
            is_smooth_join,
        });
    }

    fn arc_to(
        &mut self,
        end: Point,
        size: Size,
        rotation_angle: f64,
        is_large_arc: bool,
        sweep_direction: SweepDirection,
        is_stroked: bool,
        is_smooth_join: bool,
    ) {
        self.instructions.push(Instruction::ArcTo {
            end,
            size,
            rotation_angle,
            is_large_arc,
            sweep_direction,
            is_stroked,
            is_smooth_join,
        });
    }

    fn set_closed_state(&mut self, is_closed: bool) {
        self.instructions.push(Instruction::SetClosedState(is_closed));
    }
}

impl fmt::Display for PathGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_geometry(self, &FormatConfig::default()))
    }
}
