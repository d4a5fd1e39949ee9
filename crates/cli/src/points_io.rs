use anyhow::{bail, Context, Result};
use graham::Point;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Read a count-prefixed point file: first line `N`, then `N` lines of `x y`.
///
/// A file that cannot be opened is not an error: it logs a warning and yields no points,
/// leaving the minimum-point check to the caller. Malformed content is an error.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "input could not be opened");
            return Ok(Vec::new());
        }
    };
    parse_points(BufReader::new(file)).with_context(|| format!("reading {}", path.display()))
}

/// Parse the count-prefixed format from any buffered reader.
pub fn parse_points<R: BufRead>(reader: R) -> Result<Vec<Point>> {
    let mut lines = reader.lines();
    let header = lines.next().context("missing point count line")??;
    let count: usize = header
        .trim()
        .parse()
        .with_context(|| format!("line 1: invalid point count {header:?}"))?;

    let mut points = Vec::with_capacity(count);
    for k in 0..count {
        let lineno = k + 2;
        let Some(line) = lines.next() else {
            bail!("expected {count} points, found {k}");
        };
        let line = line?;
        points.push(parse_point(&line).with_context(|| format!("line {lineno}"))?);
    }
    Ok(points)
}

fn parse_point(line: &str) -> Result<Point> {
    let mut fields = line.split_whitespace();
    let (Some(x), Some(y), None) = (fields.next(), fields.next(), fields.next()) else {
        bail!("expected `x y`, got {line:?}");
    };
    let x: f64 = x.parse().with_context(|| format!("invalid x coordinate {x:?}"))?;
    let y: f64 = y.parse().with_context(|| format!("invalid y coordinate {y:?}"))?;
    // `f64::from_str` accepts "nan" and "inf"; the hull needs finite coordinates.
    if !(x.is_finite() && y.is_finite()) {
        bail!("non-finite coordinate in {line:?}");
    }
    Ok(Point::new(x, y))
}

/// Write points in the same count-prefixed format, to `path` or to stdout.
pub fn write_points<P: AsRef<Path>>(points: &[Point], path: Option<P>) -> Result<()> {
    match path {
        Some(path) => {
            let path = path.as_ref();
            let file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            format_points(&mut out, points)
                .and_then(|()| out.flush())
                .with_context(|| format!("writing {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            format_points(&mut out, points)
                .and_then(|()| out.flush())
                .context("writing to stdout")
        }
    }
}

/// Count line, then one `x y` line per point.
pub fn format_points<W: Write>(out: &mut W, points: &[Point]) -> io::Result<()> {
    writeln!(out, "{}", points.len())?;
    for p in points {
        writeln!(out, "{} {}", p.x, p.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    #[test]
    fn parses_count_prefixed_points() {
        let pts = parse_points(Cursor::new("3\n0 0\n1.5 -2\n-3e2 4\n")).unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.5, -2.0),
                Point::new(-300.0, 4.0)
            ]
        );
    }

    #[test]
    fn extra_lines_after_count_are_ignored() {
        let pts = parse_points(Cursor::new("1\n2 3\n9 9\n")).unwrap();
        assert_eq!(pts, vec![Point::new(2.0, 3.0)]);
    }

    #[test]
    fn malformed_content_is_an_error() {
        assert!(parse_points(Cursor::new("")).is_err());
        assert!(parse_points(Cursor::new("three\n")).is_err());
        assert!(parse_points(Cursor::new("2\n0 0\n")).is_err());
        assert!(parse_points(Cursor::new("1\n0 abc\n")).is_err());
        assert!(parse_points(Cursor::new("1\n0\n")).is_err());
        assert!(parse_points(Cursor::new("1\n0 1 2\n")).is_err());
        assert!(parse_points(Cursor::new("1\nnan 0\n")).is_err());
        assert!(parse_points(Cursor::new("1\n0 NaN\n")).is_err());
        assert!(parse_points(Cursor::new("1\ninf 0\n")).is_err());
        assert!(parse_points(Cursor::new("1\n0 -infinity\n")).is_err());
        let err = parse_points(Cursor::new("2\n0 0\nx 1\n")).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"));
    }

    #[test]
    fn missing_file_yields_no_points() {
        let dir = tempdir().unwrap();
        let pts = read_points(dir.path().join("nope.txt")).unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn write_then_read_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hull.txt");
        let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.5), Point::new(-2.25, 3.0)];
        write_points(&pts, Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "3\n0 0\n1 0.5\n-2.25 3\n");
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn format_matches_reader_input() {
        let mut buf: Vec<u8> = Vec::new();
        let pts = vec![Point::new(-1.0, 0.0), Point::new(1e-3, 2.5)];
        format_points(&mut buf, &pts).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2\n-1 0\n0.001 2.5\n");
        assert_eq!(parse_points(Cursor::new(text)).unwrap(), pts);

        let mut empty: Vec<u8> = Vec::new();
        format_points(&mut empty, &[]).unwrap();
        assert_eq!(empty, b"0\n");
    }

    #[test]
    fn unwritable_destination_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.txt");
        assert!(write_points(&[Point::new(0.0, 0.0)], Some(&path)).is_err());
    }
}
