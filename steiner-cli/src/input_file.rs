//! Text input-file reader, grounded on `buildNet`/`Point::operator>>`
//! (`examples/original_source/Steiner.cpp`, `Net.h`): the file is a
//! whitespace-delimited token stream of `lb.x lb.y ru.x ru.y count x1 y1 x2
//! y2 ...`, read with no regard for line breaks.

use std::io::Read;

use steiner_core::{Bounds, Point, Unit};
use thiserror::Error;

/// Errors raised while parsing an input file's token stream.
#[derive(Debug, Error)]
pub enum InputFileError {
    /// The file ended before the expected token was found.
    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof {
        /// Description of what was being parsed.
        expected: &'static str,
    },
    /// A token that should have been an integer was not.
    #[error("expected an integer for {expected}, found `{found}`")]
    NotAnInteger {
        /// Description of what was being parsed.
        expected: &'static str,
        /// The offending token.
        found: String,
    },
    /// The declared point count did not match the number of points present.
    #[error("declared {declared} points but found {actual}")]
    PointCountMismatch {
        /// The count declared in the file.
        declared: usize,
        /// The number of point tokens actually read.
        actual: usize,
    },
}

/// A bounding box and pin set read from an input file, prior to domain
/// validation (see [`steiner_core::Input::new`]).
pub struct RawInput {
    /// The declared bounding box.
    pub bounds: Bounds,
    /// The pins read from the file, in file order.
    pub pins: Vec<Point>,
}

/// Reads the whitespace-delimited input-file format from `reader`.
///
/// # Errors
/// Returns [`InputFileError`] if the stream ends early, a coordinate or
/// count token is not a valid integer, or the declared point count does not
/// match the number of point tokens present.
pub fn read_input_file(mut reader: impl Read) -> Result<RawInput, InputFileError> {
    let mut contents = String::new();
    let _ = reader.read_to_string(&mut contents);
    let mut tokens = contents.split_ascii_whitespace();

    let lb = read_point(&mut tokens, "lower-left corner")?;
    let ru = read_point(&mut tokens, "upper-right corner")?;
    let declared = read_unit(&mut tokens, "point count")?;
    let declared = usize::try_from(declared).map_err(|_| InputFileError::NotAnInteger {
        expected: "point count",
        found: declared.to_string(),
    })?;

    let mut pins = Vec::with_capacity(declared);
    while let Ok(point) = read_point(&mut tokens, "pin") {
        pins.push(point);
    }

    if pins.len() != declared {
        return Err(InputFileError::PointCountMismatch {
            declared,
            actual: pins.len(),
        });
    }

    Ok(RawInput {
        bounds: Bounds::new(lb, ru),
        pins,
    })
}

fn read_unit(tokens: &mut impl Iterator<Item = &str>, expected: &'static str) -> Result<Unit, InputFileError> {
    let raw = tokens
        .next()
        .ok_or(InputFileError::UnexpectedEof { expected })?;
    raw.parse::<Unit>()
        .map_err(|_| InputFileError::NotAnInteger {
            expected,
            found: raw.to_owned(),
        })
}

fn read_point(tokens: &mut impl Iterator<Item = &str>, expected: &'static str) -> Result<Point, InputFileError> {
    let x = read_unit(tokens, expected)?;
    let y = read_unit(tokens, expected)?;
    Ok(Point::new(x, y))
}
