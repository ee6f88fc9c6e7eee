use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PathParseError;

/// A move-then-lines command string describing a stroke's geometry,
/// e.g. `M10,10 L20,10 L20,20`.
///
/// Always starts with exactly one `M` command followed by zero or more `L`
/// commands. The decoded points are kept next to the text so the renderer
/// doesn't have to parse on every frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PathEncoding {
    text: String,
    points: Vec<Pos2>,
}

impl PathEncoding {
    /// Start a new path with a single move command
    pub fn start(point: Pos2) -> Self {
        Self {
            text: format!("M{},{}", point.x, point.y),
            points: vec![point],
        }
    }

    /// Append a line command to `point`
    pub fn line_to(&mut self, point: Pos2) {
        use std::fmt::Write as _;
        // Writing into a String can't fail.
        let _ = write!(self.text, " L{},{}", point.x, point.y);
        self.points.push(point);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of line commands after the initial move
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    /// True when the path has no line segments and renders as a dot
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }
}

impl fmt::Display for PathEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<PathEncoding> for String {
    fn from(path: PathEncoding) -> Self {
        path.text
    }
}

impl TryFrom<String> for PathEncoding {
    type Error = PathParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl FromStr for PathEncoding {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let first = tokens.next().ok_or(PathParseError::Empty)?;
        let start = match first.strip_prefix('M') {
            Some(coords) => parse_point(coords)?,
            None => return Err(PathParseError::MissingMove(first.to_string())),
        };

        let mut path = Self::start(start);
        for (index, token) in tokens.enumerate() {
            if token.starts_with('M') {
                return Err(PathParseError::UnexpectedMove { index: index + 1 });
            }
            let coords = token
                .strip_prefix('L')
                .ok_or_else(|| PathParseError::UnknownCommand(token.to_string()))?;
            path.line_to(parse_point(coords)?);
        }

        Ok(path)
    }
}

fn parse_point(coords: &str) -> Result<Pos2, PathParseError> {
    let invalid = || PathParseError::InvalidCoordinate(coords.to_string());
    let (x, y) = coords.split_once(',').ok_or_else(invalid)?;
    let x: f32 = x.parse().map_err(|_| invalid())?;
    let y: f32 = y.parse().map_err(|_| invalid())?;
    Ok(Pos2::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_coordinates_have_no_decimal_point() {
        let mut path = PathEncoding::start(Pos2::new(10.0, 10.0));
        path.line_to(Pos2::new(20.0, 10.0));
        path.line_to(Pos2::new(20.5, 20.25));
        assert_eq!(path.as_str(), "M10,10 L20,10 L20.5,20.25");
        assert_eq!(path.segment_count(), 2);
    }

    #[test]
    fn single_move_is_a_dot() {
        let path = PathEncoding::start(Pos2::new(5.0, 5.0));
        assert_eq!(path.as_str(), "M5,5");
        assert!(path.is_dot());
        assert_eq!(path.segment_count(), 0);
    }

    #[test]
    fn parse_recovers_points() {
        let path: PathEncoding = "M1,2 L3,4 L-5.5,6".parse().unwrap();
        assert_eq!(
            path.points(),
            &[Pos2::new(1.0, 2.0), Pos2::new(3.0, 4.0), Pos2::new(-5.5, 6.0)]
        );
        assert_eq!(path.as_str(), "M1,2 L3,4 L-5.5,6");
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        assert_eq!("".parse::<PathEncoding>(), Err(PathParseError::Empty));
        assert_eq!(
            "L1,2".parse::<PathEncoding>(),
            Err(PathParseError::MissingMove("L1,2".to_string()))
        );
        assert_eq!(
            "M1,2 M3,4".parse::<PathEncoding>(),
            Err(PathParseError::UnexpectedMove { index: 1 })
        );
        assert_eq!(
            "M1,2 Q3,4".parse::<PathEncoding>(),
            Err(PathParseError::UnknownCommand("Q3,4".to_string()))
        );
        assert_eq!(
            "M1;2".parse::<PathEncoding>(),
            Err(PathParseError::InvalidCoordinate("1;2".to_string()))
        );
    }

    #[test]
    fn serializes_as_plain_string() {
        let path = PathEncoding::start(Pos2::new(3.0, 4.0));
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"M3,4\"");
        let back: PathEncoding = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
    }
}
