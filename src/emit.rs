//! Render parsed geometry as Rust source: one `GeometrySink` call per line.
//!
//! This lets path data be compiled into a build step (or snapshot-tested)
//! instead of being parsed at run time. Numbers use `f64` debug formatting,
//! which round-trips exactly and always yields a valid float literal.

use crate::geometry::{FillRule, Point, Size};
use crate::sink::{Instruction, PathGeometry};

fn point_expr(p: &Point) -> String {
    format!("Point::new({:?}, {:?})", p.x, p.y)
}

fn size_expr(s: &Size) -> String {
    format!("Size::new({:?}, {:?})", s.width, s.height)
}

/// Emit the calls which replay `geom` into a sink bound to `receiver`.
pub fn emit_calls(geom: &PathGeometry, receiver: &str) -> String {
    let mut out = String::new();
    if geom.fill_rule != FillRule::default() {
        out.push_str(&format!(
            "{receiver}.set_fill_rule(FillRule::{});\n",
            geom.fill_rule
        ));
    }
    for ins in &geom.instructions {
        let call = match ins {
            Instruction::BeginFigure {
                start,
                is_filled,
                is_stroked,
            } => format!(
                "begin_figure({}, {is_filled}, {is_stroked})",
                point_expr(start)
            ),
            Instruction::LineTo {
                point,
                is_stroked,
                is_smooth_join,
            } => format!(
                "line_to({}, {is_stroked}, {is_smooth_join})",
                point_expr(point)
            ),
            Instruction::BezierTo {
                cp1,
                cp2,
                end,
                is_stroked,
                is_smooth_join,
            } => format!(
                "bezier_to({}, {}, {}, {is_stroked}, {is_smooth_join})",
                point_expr(cp1),
                point_expr(cp2),
                point_expr(end)
            ),
            Instruction::ArcTo {
                end,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
                is_stroked,
                is_smooth_join,
            } => format!(
                "arc_to({}, {}, {rotation_angle:?}, {is_large_arc}, SweepDirection::{sweep_direction}, {is_stroked}, {is_smooth_join})",
                point_expr(end),
                size_expr(size)
            ),
            Instruction::SetClosedState(closed) => format!("set_closed_state({closed})"),
        };
        out.push_str(&format!("{receiver}.{call};\n"));
    }
    out
}
