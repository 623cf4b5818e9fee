//! ## pathmarkup - parse SVG / XAML path markup
//!
//! `pathmarkup` reads the path mini-language used by SVG `d` attributes and
//! XAML `Data` properties (e.g. `"F1 M10,10 L20,20 Z"`) and turns it into an
//! ordered stream of drawing instructions with absolute coordinates.
//!
//! ## Library use
//!
//! Geometry consumers implement [`GeometrySink`] and pass it to [`parse_path`];
//! the parser calls it directly as commands are read. Where a failed parse
//! must not leave partial output behind, use [`parse_geometry`] instead, which
//! records into a [`PathGeometry`] and only returns it on success.
//!
//! Parsed geometry can be written back out in a canonical form with
//! [`normalize`] (or via `Display` on `PathGeometry`), and as a listing of sink
//! calls with [`emit_calls`].
//!
//! Errors are reported via `pathmarkup::Result`; any error rejects the whole
//! input string.
//!
//! ## Example
//!
//! ```
//! let geom = pathmarkup::parse_geometry("M0 0 10 10 20 20").unwrap();
//! assert_eq!(geom.figure_count(), 1);
//!
//! let output = pathmarkup::normalize("m0,0 10,10 20,20").unwrap();
//! assert_eq!(output, "M 0, 0 L 10, 10 L 30, 30");
//! ```

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

mod emit;
pub mod errors;
mod format;
mod geometry;
mod path;
mod sink;

pub use emit::emit_calls;
pub use errors::{Error, Result};
pub use format::{format_geometry, fstr, FormatConfig};
pub use geometry::{FillRule, Point, Size, SweepDirection};
pub use path::{MarkupSyntax, PathParser, PathSyntax};
pub use sink::{GeometrySink, Instruction, PathGeometry};

// Allow users of this as a library to easily retrieve the version of pathmarkup being used
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Settings to configure parsing of a single path string.
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Accept a leading `F0` / `F1` fill-rule directive (XAML extension)
    pub allow_fill_rule: bool,
    /// `is_filled` value passed to `begin_figure`
    pub fill_figures: bool,
    /// `is_stroked` value passed to `begin_figure`
    pub stroke_figures: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            allow_fill_rule: true,
            fill_figures: true,
            stroke_figures: false,
        }
    }
}

/// Parse `data`, delivering instructions to `sink` as they are read.
///
/// On error the sink may already have received calls for the valid prefix
/// of the input.
pub fn parse_path<S: GeometrySink + ?Sized>(data: &str, sink: &mut S) -> Result<()> {
    parse_path_with_config(data, &ParserConfig::default(), sink)
}

pub fn parse_path_with_config<S: GeometrySink + ?Sized>(
    data: &str,
    config: &ParserConfig,
    sink: &mut S,
) -> Result<()> {
    PathParser::new(data, config, sink).evaluate()
}

/// Parse `data` into a recorded `PathGeometry`; nothing is returned unless
/// the entire input is valid.
pub fn parse_geometry(data: &str) -> Result<PathGeometry> {
    parse_geometry_with_config(data, &ParserConfig::default())
}

pub fn parse_geometry_with_config(data: &str, config: &ParserConfig) -> Result<PathGeometry> {
    let mut geom = PathGeometry::new();
    parse_path_with_config(data, config, &mut geom)?;
    Ok(geom)
}

/// Parse `data` and return its canonical text form.
pub fn normalize(data: &str) -> Result<String> {
    Ok(format_geometry(
        &parse_geometry(data)?,
        &FormatConfig::default(),
    ))
}

/// Canonicalise path markup `input`, returning any error as a message.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn normalize_string(input: String) -> core::result::Result<String, String> {
    normalize(&input).map_err(|e| e.to_string())
}
