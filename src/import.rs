//! Import boundary: parses the whitespace-separated particle record format
//! `id x y z [r]` used to seed a container from text.
//!
//! Grounded in the teacher's own small text-parsing helpers (its CLI
//! reads `id x y z` lines for benchmark point clouds); generalized here
//! with an optional trailing radius column for the weighted variant.

use std::io::BufRead;

use crate::error::{KernelError, Result};

/// One parsed record: particle id, position, and (for a weighted import) radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedParticle {
    pub id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub r: Option<f64>,
}

/// Parse one particle record per line: `id x y z` or, when `weighted` is
/// true, `id x y z r`. Blank lines and lines starting with `#` are
/// skipped. Aborts on the first line that doesn't parse, per spec.md §6's
/// "abort on first unparseable line" choice (recorded in DESIGN.md).
pub fn parse<R: BufRead>(reader: R, weighted: bool) -> Result<Vec<ParsedParticle>> {
    let mut particles = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        particles.push(parse_line(trimmed, weighted, line_no + 1)?);
    }
    Ok(particles)
}

fn parse_line(line: &str, weighted: bool, line_no: usize) -> Result<ParsedParticle> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let expected = if weighted { 5 } else { 4 };
    if fields.len() != expected {
        return Err(KernelError::Import {
            line: line_no,
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    let field = |i: usize, name: &str| -> Result<f64> {
        fields[i].parse::<f64>().map_err(|_| KernelError::Import {
            line: line_no,
            reason: format!("field {i} ({name}) is not a number: {:?}", fields[i]),
        })
    };
    let id = fields[0].parse::<i64>().map_err(|_| KernelError::Import {
        line: line_no,
        reason: format!("field 0 (id) is not an integer: {:?}", fields[0]),
    })?;
    let x = field(1, "x")?;
    let y = field(2, "y")?;
    let z = field(3, "z")?;
    let r = if weighted { Some(field(4, "r")?) } else { None };
    Ok(ParsedParticle { id, x, y, z, r })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_plain_records() {
        let input = "1 0.0 0.0 0.0\n2 1.5 -2.5 3.0\n";
        let parsed = parse(Cursor::new(input), false).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0], ParsedParticle { id: 1, x: 0.0, y: 0.0, z: 0.0, r: None });
        assert_eq!(parsed[1].id, 2);
        assert_eq!(parsed[1].r, None);
    }

    #[test]
    fn parses_weighted_records() {
        let input = "1 0.0 0.0 0.0 0.5\n";
        let parsed = parse(Cursor::new(input), true).unwrap();
        assert_eq!(parsed[0].r, Some(0.5));
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        let input = "# header\n\n1 0.0 0.0 0.0\n";
        let parsed = parse(Cursor::new(input), false).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn aborts_on_first_bad_line() {
        let input = "1 0.0 0.0 0.0\n2 not-a-number 0.0 0.0\n3 1.0 1.0 1.0\n";
        let err = parse(Cursor::new(input), false).unwrap_err();
        match err {
            KernelError::Import { line, .. } => assert_eq!(line, 2),
            other => panic!("expected Import error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_wrong_field_count_for_mode() {
        let input = "1 0.0 0.0 0.0 0.5\n";
        let err = parse(Cursor::new(input), false).unwrap_err();
        assert!(matches!(err, KernelError::Import { line: 1, .. }));
    }
}
