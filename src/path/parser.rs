use crate::errors::{Error, Result};
use crate::geometry::{FillRule, Point, Size, SweepDirection};
use crate::sink::GeometrySink;
use crate::ParserConfig;

use super::syntax::{MarkupSyntax, PathSyntax};

/// Drives a `GeometrySink` from path markup.
///
/// One parser is used per input string; it owns only the cursor and the pen
/// state, and borrows the sink for the duration of the parse.
pub struct PathParser<'a, S: GeometrySink + ?Sized> {
    tokens: MarkupSyntax,
    sink: &'a mut S,
    config: &'a ParserConfig,
    // current position, updated as commands are processed
    position: Point,
    // location to return to for 'Z'/'z' commands
    subpath_start: Point,
    // current command being processed; most commands take multiple parameter
    // sets without repeating the command character
    command: Option<char>,
    figure_open: bool,
    // previous second control point (if any) for evaluating 'S' and 's'
    cubic_cp2: Option<Point>,
    // previous control point (if any) for evaluating 'T' and 't'
    quadratic_cp: Option<Point>,
    fill_rule_set: bool,
    geometry_started: bool,
}

impl<'a, S: GeometrySink + ?Sized> PathParser<'a, S> {
    pub fn new(data: &str, config: &'a ParserConfig, sink: &'a mut S) -> Self {
        Self {
            tokens: MarkupSyntax::new(data),
            sink,
            config,
            position: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            command: None,
            figure_open: false,
            cubic_cp2: None,
            quadratic_cp: None,
            fill_rule_set: false,
            geometry_started: false,
        }
    }

    /// Parse the entire input, closing any figure left open at the end.
    pub fn evaluate(&mut self) -> Result<()> {
        self.tokens.skip_whitespace();
        while !self.tokens.at_end() {
            self.process_instruction()?;
            self.tokens.skip_whitespace();
        }
        if self.figure_open {
            self.end_figure(false);
        }
        Ok(())
    }

    fn process_instruction(&mut self) -> Result<()> {
        let pos = self.tokens.position();
        let command = match self.command {
            // "The command letter can be eliminated on subsequent commands if the same
            // command is used multiple times in a row"; "If a moveto is followed by
            // multiple pairs of coordinates, the subsequent pairs are treated as
            // implicit lineto commands."
            Some(prev) if self.tokens.at_number_start() => match prev {
                'M' => 'L',
                'm' => 'l',
                other => other,
            },
            _ => self.tokens.read_command()?,
        };
        self.command = Some(command);
        log::trace!("path command '{command}' at {pos}");

        if command == 'F' {
            return self.read_fill_rule(pos);
        }
        self.geometry_started = true;

        let relative = command.is_ascii_lowercase();
        let mut cubic_cp2: Option<Point> = None;
        let mut quadratic_cp: Option<Point> = None;

        match command {
            'M' | 'm' => {
                // "(x y)+"
                let xy = self.read_point(relative, pos)?;
                self.move_to(xy);
            }
            'L' | 'l' => {
                // "(x y)+"
                let xy = self.read_point(relative, pos)?;
                self.line_to(xy);
            }
            'H' | 'h' => {
                // "x+"
                let mut x = self.tokens.read_number()?;
                if relative {
                    x += self.position.x;
                }
                let xy = checked(pos, Point::new(x, self.position.y))?;
                self.line_to(xy);
            }
            'V' | 'v' => {
                // "y+"
                let mut y = self.tokens.read_number()?;
                if relative {
                    y += self.position.y;
                }
                let xy = checked(pos, Point::new(self.position.x, y))?;
                self.line_to(xy);
            }
            'C' | 'c' => {
                // (x1 y1 x2 y2 x y)+
                let cp1 = self.read_point(relative, pos)?;
                let cp2 = self.read_point(relative, pos)?;
                let end = self.read_point(relative, pos)?;

                cubic_cp2 = Some(cp2);
                self.cubic_to(cp1, cp2, end);
            }
            'S' | 's' => {
                // "(x2 y2 x y)+"
                let cp2 = self.read_point(relative, pos)?;
                let end = self.read_point(relative, pos)?;

                // "The first control point is assumed to be the reflection of the second
                //  control point on the previous command relative to the current point.
                //  If there is no previous command or if the previous command was not an
                //  C, c, S or s, assume the first control point is coincident with the
                //  current point."
                let cp1 = checked(
                    pos,
                    self.cubic_cp2
                        .map_or(self.position, |prev| prev.reflect_about(self.position)),
                )?;

                cubic_cp2 = Some(cp2);
                self.cubic_to(cp1, cp2, end);
            }
            'Q' | 'q' => {
                // "(x1 y1 x y)+"
                let cp = self.read_point(relative, pos)?;
                let end = self.read_point(relative, pos)?;

                quadratic_cp = Some(cp);
                self.quadratic_to(cp, end, pos)?;
            }
            'T' | 't' => {
                // "(x y)+"
                let end = self.read_point(relative, pos)?;
                // "The control point is assumed to be the reflection of the control point
                //  on the previous command relative to the current point. (If there is no
                //  previous command or if the previous command was not a Q, q, T or t,
                //  assume the control point is coincident with the current point.)"
                let cp = checked(
                    pos,
                    self.quadratic_cp
                        .map_or(self.position, |prev| prev.reflect_about(self.position)),
                )?;

                quadratic_cp = Some(cp);
                self.quadratic_to(cp, end, pos)?;
            }
            'A' | 'a' => {
                // "(rx ry x-axis-rotation large-arc-flag sweep-flag x y)+"
                // radii may be signed; only their magnitude is meaningful
                let rx = self.tokens.read_number()?.abs();
                let ry = self.tokens.read_number()?.abs();
                let x_axis_rotation = self.tokens.read_number()?;
                let large_arc_flag = self.tokens.read_flag()?;
                let sweep_flag = self.tokens.read_flag()?;
                let end = self.read_point(relative, pos)?;

                self.ensure_figure();
                self.sink.arc_to(
                    end,
                    Size::new(rx, ry),
                    x_axis_rotation,
                    large_arc_flag,
                    SweepDirection::from_flag(sweep_flag),
                    true,
                    false,
                );
                self.position = end;
            }
            'Z' | 'z' => {
                if self.figure_open {
                    self.end_figure(true);
                }
                self.position = self.subpath_start;
                // since this doesn't consume further tokens, we must clear the command
                // to force getting a new command token, or we could loop forever
                self.command = None;
            }
            _ => Err(Error::Parse(pos, format!("invalid path command '{command}'")))?,
        }
        self.cubic_cp2 = cubic_cp2;
        self.quadratic_cp = quadratic_cp;
        Ok(())
    }

    fn read_fill_rule(&mut self, pos: usize) -> Result<()> {
        if !self.config.allow_fill_rule {
            return Err(Error::FillRule(
                pos,
                "fill rule directive is not enabled".to_string(),
            ));
        }
        if self.fill_rule_set {
            return Err(Error::FillRule(
                pos,
                "fill rule may only be set once".to_string(),
            ));
        }
        if self.geometry_started {
            return Err(Error::FillRule(
                pos,
                "fill rule must precede all path commands".to_string(),
            ));
        }
        let value_pos = self.tokens.position();
        let fill_rule = match self.tokens.current() {
            Some(c @ ('0' | '1')) => FillRule::from_flag(c == '1'),
            Some(c) => {
                return Err(Error::FillRule(
                    value_pos,
                    format!("invalid fill rule '{c}', expected '0' or '1'"),
                ))
            }
            None => {
                return Err(Error::FillRule(
                    value_pos,
                    "missing fill rule value".to_string(),
                ))
            }
        };
        self.tokens.advance();
        if matches!(self.tokens.current(), Some('0'..='9' | '.')) {
            return Err(Error::FillRule(
                value_pos,
                "fill rule value must be a single '0' or '1'".to_string(),
            ));
        }
        log::debug!("fill rule {fill_rule}");
        self.fill_rule_set = true;
        self.sink.set_fill_rule(fill_rule);
        self.command = None;
        Ok(())
    }

    fn read_point(&mut self, relative: bool, pos: usize) -> Result<Point> {
        let xy = self.tokens.read_coord()?;
        if relative {
            checked(pos, self.position + xy)
        } else {
            Ok(xy)
        }
    }

    fn begin_figure(&mut self, start: Point) {
        log::debug!("begin figure at ({}, {})", start.x, start.y);
        self.sink
            .begin_figure(start, self.config.fill_figures, self.config.stroke_figures);
        self.figure_open = true;
        self.subpath_start = start;
    }

    fn end_figure(&mut self, closed: bool) {
        log::debug!("end figure (closed: {closed})");
        self.sink.set_closed_state(closed);
        self.figure_open = false;
    }

    /// Segments drawn without an open figure (at the very start, or after a
    /// close) implicitly begin one at the current point.
    fn ensure_figure(&mut self) {
        if !self.figure_open {
            self.begin_figure(self.position);
        }
    }

    fn move_to(&mut self, xy: Point) {
        if self.figure_open {
            self.end_figure(false);
        }
        self.begin_figure(xy);
        self.position = xy;
    }

    fn line_to(&mut self, xy: Point) {
        self.ensure_figure();
        self.sink.line_to(xy, true, false);
        self.position = xy;
    }

    fn cubic_to(&mut self, cp1: Point, cp2: Point, end: Point) {
        self.ensure_figure();
        self.sink.bezier_to(cp1, cp2, end, true, false);
        self.position = end;
    }

    /// Quadratic segments are degree-elevated to the equivalent cubic.
    fn quadratic_to(&mut self, cp: Point, end: Point, pos: usize) -> Result<()> {
        let start = self.position;
        let cp1 = checked(pos, start.lerp(cp, 2. / 3.))?;
        let cp2 = checked(pos, end.lerp(cp, 2. / 3.))?;
        self.cubic_to(cp1, cp2, end);
        Ok(())
    }
}

/// Derived coordinates (relative offsets, reflections, degree elevation) can
/// overflow even when every literal is finite.
fn checked(pos: usize, p: Point) -> Result<Point> {
    if p.x.is_finite() && p.y.is_finite() {
        Ok(p)
    } else {
        Err(Error::Lex(pos, "coordinate out of range".to_string()))
    }
}
