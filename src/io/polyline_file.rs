use std::fmt;
use std::str::{FromStr, SplitWhitespace};

use tracing::debug;

use crate::error::ParseError;
use crate::geometry::{InteriorSide, Polygon};
use crate::math::Point;

use super::color::Color;

/// An open or closed chain of points with a display colour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline<const D: usize> {
    /// For a closed polyline the first point is repeated at the end.
    pub points: Vec<Point<D>>,
    pub color: Color,
    pub closed: bool,
}

impl<const D: usize> Polyline<D> {
    /// Converts to a polygon, dropping the repeated closing point.
    #[must_use]
    pub fn to_polygon(&self, interior: InteriorSide) -> Polygon<D> {
        let points = match (self.closed, self.points.split_last()) {
            (true, Some((_, rest))) if !rest.is_empty() => rest,
            _ => &self.points[..],
        };
        Polygon::from_points(points.iter().copied(), interior)
    }
}

/// Contents of a polyline text file.
///
/// ```text
/// <shape count>
/// <point count> [#colour] x y [z] ...
/// ```
///
/// A negative point count marks a closed shape. Tokens are separated by
/// arbitrary whitespace.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PolylineFile<const D: usize> {
    pub polylines: Vec<Polyline<D>>,
}

impl<const D: usize> PolylineFile<D> {
    /// Parses the whole text.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] naming the first token that does not fit the
    /// format, or [`ParseError::UnexpectedEof`] if the text ends early.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut tokens = Tokens {
            inner: text.split_whitespace(),
            peeked: None,
        };

        let count_token = tokens.expect("shape count")?;
        let count: usize = count_token
            .parse()
            .map_err(|_| ParseError::InvalidCount {
                token: count_token.to_string(),
            })?;

        let mut polylines = Vec::new();
        for _ in 0..count {
            polylines.push(read_polyline(&mut tokens)?);
        }
        debug!(shapes = polylines.len(), dimension = D, "parsed polyline file");
        Ok(Self { polylines })
    }
}

impl<const D: usize> FromStr for PolylineFile<D> {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const D: usize> fmt::Display for PolylineFile<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.polylines.len())?;
        for line in &self.polylines {
            let points = match line.points.split_last() {
                Some((_, rest)) if line.closed => rest,
                _ => &line.points[..],
            };
            if line.closed {
                writeln!(f, "-{} {}", points.len(), line.color)?;
            } else {
                writeln!(f, "{} {}", points.len(), line.color)?;
            }
            for p in points {
                let coords: Vec<String> = p.coords.iter().map(f64::to_string).collect();
                writeln!(f, "{}", coords.join(" "))?;
            }
        }
        Ok(())
    }
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
    peeked: Option<&'a str>,
}

impl<'a> Tokens<'a> {
    fn peek(&mut self) -> Option<&'a str> {
        if self.peeked.is_none() {
            self.peeked = self.inner.next();
        }
        self.peeked
    }

    fn expect(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.peeked
            .take()
            .or_else(|| self.inner.next())
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    fn number(&mut self) -> Result<f64, ParseError> {
        let token = self.expect("coordinate")?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            token: token.to_string(),
        })
    }
}

fn read_polyline<const D: usize>(tokens: &mut Tokens<'_>) -> Result<Polyline<D>, ParseError> {
    let count_token = tokens.expect("point count")?;
    let signed: i64 = count_token.parse().map_err(|_| ParseError::InvalidCount {
        token: count_token.to_string(),
    })?;
    let closed = signed < 0;
    let count = usize::try_from(signed.unsigned_abs()).map_err(|_| ParseError::InvalidCount {
        token: count_token.to_string(),
    })?;

    let color = match tokens.peek() {
        Some(token) if token.starts_with('#') => {
            tokens.expect("colour")?;
            token.parse()?
        }
        _ => Color::BLACK,
    };

    let mut points = Vec::new();
    for _ in 0..count {
        let mut coords = [0.0; D];
        for c in &mut coords {
            *c = tokens.number()?;
        }
        points.push(Point::<D>::from(coords));
    }
    if closed {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }
    Ok(Polyline {
        points,
        color,
        closed,
    })
}
