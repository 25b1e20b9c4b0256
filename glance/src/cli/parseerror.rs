use super::ParseTripleError;
use std::error::Error;
use std::fmt;
use std::num::ParseFloatError;

#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ParseErrorKind::Float(err) => {
                write!(
                    f,
                    "Failed to parse float: {}\n\nFloats are numbers. Ex: 1.0, 1, -1, or -1.0",
                    err
                )
            }
            ParseErrorKind::Triple(err) => {
                write!(
                    f,
                    "Failed to parse value: {}\n\n\
                    A threshold wants three numbers separated by commas.\n\
                    Ex:\n\t\
                        128,0,255 or \"128, 0, 255\"",
                    err
                )
            }
        }
    }
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Float(ParseFloatError),
    Triple(ParseTripleError),
}

impl From<ParseFloatError> for ParseError {
    fn from(frm: ParseFloatError) -> Self {
        ParseError {
            kind: ParseErrorKind::Float(frm),
        }
    }
}

impl From<ParseTripleError> for ParseError {
    fn from(frm: ParseTripleError) -> Self {
        ParseError {
            kind: ParseErrorKind::Triple(frm),
        }
    }
}
