//! Canonical text form of parsed path geometry.
//!
//! Every segment is written with an explicit absolute command letter, so
//! implicit repeats, relative commands and the `H`/`V`/`Q`/`T` shorthands all
//! normalise to `M`, `L`, `C` and `A`. Two inputs describing the same
//! instruction stream therefore format identically, and with the default
//! config the output parses back to exactly the same stream.

use itertools::Itertools;

use crate::geometry::Point;
use crate::sink::{Instruction, PathGeometry};

/// Settings for the canonical formatter.
#[derive(Clone, Debug, Default)]
pub struct FormatConfig {
    /// Round numbers to this many decimal places. `None` (the default) writes
    /// the shortest representation which parses back to the same value.
    pub precision: Option<usize>,
}

/// Return a 'minimal' representation of the given number
///
/// Always uses '.' as the decimal separator and never a leading '.', so
/// `0.5` rather than `.5`.
pub fn fstr(x: f64, precision: Option<usize>) -> String {
    let result = match precision {
        None => format!("{x}"),
        Some(p) => {
            let result = format!("{x:.p$}");
            if result.contains('.') {
                result.trim_end_matches('0').trim_end_matches('.').into()
            } else {
                result
            }
        }
    };
    if result == "-0" {
        "0".to_string()
    } else {
        result
    }
}

fn point_str(p: &Point, precision: Option<usize>) -> String {
    format!("{}, {}", fstr(p.x, precision), fstr(p.y, precision))
}

pub fn format_geometry(geom: &PathGeometry, config: &FormatConfig) -> String {
    let prec = config.precision;
    let mut parts: Vec<String> = Vec::new();
    // EvenOdd is the default and is left implicit
    if geom.fill_rule.as_flag() {
        parts.push("F1".to_string());
    }
    for ins in &geom.instructions {
        match ins {
            Instruction::BeginFigure { start, .. } => {
                parts.push(format!("M {}", point_str(start, prec)));
            }
            Instruction::LineTo { point, .. } => {
                parts.push(format!("L {}", point_str(point, prec)));
            }
            Instruction::BezierTo { cp1, cp2, end, .. } => {
                parts.push(format!(
                    "C {} {} {}",
                    point_str(cp1, prec),
                    point_str(cp2, prec),
                    point_str(end, prec)
                ));
            }
            Instruction::ArcTo {
                end,
                size,
                rotation_angle,
                is_large_arc,
                sweep_direction,
                ..
            } => {
                parts.push(format!(
                    "A {}, {} {} {} {} {}",
                    fstr(size.width, prec),
                    fstr(size.height, prec),
                    fstr(*rotation_angle, prec),
                    u8::from(*is_large_arc),
                    u8::from(sweep_direction.as_flag()),
                    point_str(end, prec)
                ));
            }
            // 'Z' directly follows the final segment of its figure
            Instruction::SetClosedState(true) => match parts.last_mut() {
                Some(last) => last.push('Z'),
                None => parts.push("Z".to_string()),
            },
            Instruction::SetClosedState(false) => {}
        }
    }
    parts.iter().join(" ")
}
