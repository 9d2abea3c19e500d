//! Scene records: `<type> <name> ...` entries read from a [`Scanner`].

use sweep_core::{Result, SweepError};
use sweep_geometry::{ControlPoints, Dimension, SplineKind};
use sweep_math::dvec3;

use crate::scanner::Scanner;

/// What a record builds, decoded from its type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Spline { kind: SplineKind, dimension: Dimension },
    Circle,
    Revolution,
    Cylinder,
}

impl RecordKind {
    pub fn from_tag(tag: &str) -> Result<Self> {
        let spline = |kind, dimension| RecordKind::Spline { kind, dimension };
        Ok(match tag {
            "bez2" => spline(SplineKind::Bezier, Dimension::Two),
            "bez3" => spline(SplineKind::Bezier, Dimension::Three),
            "bsp2" => spline(SplineKind::BSpline, Dimension::Two),
            "bsp3" => spline(SplineKind::BSpline, Dimension::Three),
            "cmr2" => spline(SplineKind::CatmullRom, Dimension::Two),
            "cmr3" => spline(SplineKind::CatmullRom, Dimension::Three),
            "circ" => RecordKind::Circle,
            "srev" => RecordKind::Revolution,
            "gcyl" => RecordKind::Cylinder,
            other => return Err(SweepError::UnrecognizedType(other.to_string())),
        })
    }
}

/// Type tag and name, read before anything else in a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader<'a> {
    pub tag: &'a str,
    pub name: &'a str,
    pub line: usize,
}

/// Everything after the name.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordBody {
    Spline {
        kind: SplineKind,
        steps: u32,
        control_points: ControlPoints,
    },
    Circle {
        steps: u32,
        radius: f64,
    },
    Revolution {
        steps: u32,
        profile: String,
    },
    Cylinder {
        profile: String,
        sweep: String,
    },
}

pub struct RecordReader<'a> {
    scanner: Scanner<'a>,
}

impl<'a> RecordReader<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            scanner: Scanner::new(input),
        }
    }

    /// Read the next type tag and name, or `None` once the input is exhausted.
    pub fn next_header(&mut self) -> Result<Option<RecordHeader<'a>>> {
        let Some(tag) = self.scanner.word() else {
            return Ok(None);
        };
        let line = self.scanner.line();
        let name = self.scanner.expect_word("object name")?;
        Ok(Some(RecordHeader { tag, name, line }))
    }

    pub fn read_body(&mut self, kind: RecordKind) -> Result<RecordBody> {
        let s = &mut self.scanner;
        Ok(match kind {
            RecordKind::Spline { kind, dimension } => {
                let steps = s.unsigned("steps")?;
                RecordBody::Spline {
                    kind,
                    steps,
                    control_points: self.control_points(dimension)?,
                }
            }
            RecordKind::Circle => RecordBody::Circle {
                steps: s.unsigned("steps")?,
                radius: s.real("radius")?,
            },
            RecordKind::Revolution => RecordBody::Revolution {
                steps: s.unsigned("steps")?,
                profile: s.expect_word("profile name")?.to_string(),
            },
            RecordKind::Cylinder => RecordBody::Cylinder {
                profile: s.expect_word("profile name")?.to_string(),
                sweep: s.expect_word("sweep name")?.to_string(),
            },
        })
    }

    /// `<count>` followed by `<count>` delimited tuples of 2 or 3 coordinates.
    fn control_points(&mut self, dimension: Dimension) -> Result<ControlPoints> {
        let s = &mut self.scanner;
        let count = s.unsigned("control point count")?;
        log::debug!("  {count} cps");

        let mut points = Vec::new();
        for _ in 0..count {
            s.delimiter()?;
            let x = s.real("x coordinate")?;
            let y = s.real("y coordinate")?;
            let z = match dimension {
                Dimension::Two => 0.0,
                Dimension::Three => s.real("z coordinate")?,
            };
            s.delimiter()?;
            points.push(dvec3(x, y, z));
        }
        ControlPoints::new(points, dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_one(input: &str) -> Result<(RecordHeader<'_>, RecordBody)> {
        let mut reader = RecordReader::new(input);
        let header = reader.next_header()?.expect("header");
        let body = reader.read_body(RecordKind::from_tag(header.tag)?)?;
        Ok((header, body))
    }

    #[test]
    fn test_spline_record() {
        let (header, body) = read_one("bez3 hook 12 4 [0 0 0] [1 0 1] [1 1 2] [0 1 3]").unwrap();
        assert_eq!(header.tag, "bez3");
        assert_eq!(header.name, "hook");
        match body {
            RecordBody::Spline {
                kind,
                steps,
                control_points,
            } => {
                assert_eq!(kind, SplineKind::Bezier);
                assert_eq!(steps, 12);
                assert_eq!(control_points.dimension(), Dimension::Three);
                assert_eq!(control_points.points()[3], dvec3(0.0, 1.0, 3.0));
            }
            other => panic!("unexpected body {other:?}"),
        }
    }

    #[test]
    fn test_planar_tuples() {
        let (_, body) = read_one("cmr2 . 3 4 (0 0) (1 1) (2 0) (3 1)").unwrap();
        let RecordBody::Spline { control_points, .. } = body else {
            panic!("expected spline");
        };
        assert_eq!(control_points.len(), 4);
        assert_eq!(control_points.points()[2], dvec3(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_surface_records() {
        let (_, body) = read_one("srev vase 20 prof").unwrap();
        assert_eq!(
            body,
            RecordBody::Revolution {
                steps: 20,
                profile: "prof".into()
            }
        );
        let (_, body) = read_one("gcyl tube prof path").unwrap();
        assert_eq!(
            body,
            RecordBody::Cylinder {
                profile: "prof".into(),
                sweep: "path".into()
            }
        );
        let (_, body) = read_one("circ ring 30 1.5").unwrap();
        assert_eq!(
            body,
            RecordBody::Circle {
                steps: 30,
                radius: 1.5
            }
        );
    }

    #[test]
    fn test_unknown_tag() {
        let err = read_one("nurb x 3").unwrap_err();
        assert!(matches!(err, SweepError::UnrecognizedType(ref t) if t == "nurb"));
    }

    #[test]
    fn test_truncated_block() {
        let err = read_one("bsp2 s 4 4 [0 0] [1 1] [2").unwrap_err();
        assert!(matches!(err, SweepError::Parse { .. }));
    }

    #[test]
    fn test_end_of_input() {
        let mut reader = RecordReader::new("  \n ");
        assert!(reader.next_header().unwrap().is_none());
        let mut reader = RecordReader::new("bez2");
        assert!(reader.next_header().is_err());
    }
}
