//! A headless display surface: replays gestures written down in a small script.
//!
//! # Format
//! One event per line:
//!
//! ```text
//! # comments and blank lines are skipped
//! start 10 20
//! move 30 40
//! move 50 80
//! end
//! ```
//!
//! Keywords are case-insensitive, coordinates have to be finite numbers.
use std::io::BufRead;

use tracing::debug;

use crate::{
    shape::{point::Point, rectangle::Rectangle},
    tool::GestureEvent,
    viewer::Viewer,
};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("Line {line}: unknown gesture '{keyword}' (expected 'start', 'move' or 'end')")]
    UnknownGesture { line: usize, keyword: String },

    #[error("Line {line}: '{keyword}' expects {expected} argument(s) but got {got}")]
    ArgumentCount {
        line: usize,
        keyword: String,
        expected: usize,
        got: usize,
    },

    #[error("Line {line}: '{value}' is not a finite coordinate")]
    InvalidCoordinate { line: usize, value: String },
}

/// Parses a whole gesture script.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<GestureEvent>, Error> {
    let mut events = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        if let Some(event) = parse_line(index + 1, &line?)? {
            events.push(event);
        }
    }

    debug!("Parsed {} gesture events", events.len());
    Ok(events)
}

/// Parses one line of a script. `line` is only used for error reporting.
pub fn parse_line(line: usize, content: &str) -> Result<Option<GestureEvent>, Error> {
    let content = content.trim();
    if content.is_empty() || content.starts_with('#') {
        return Ok(None);
    }

    let mut tokens = content.split_whitespace();
    // `content` isn't empty, so there's always a first token
    let keyword = tokens.next().unwrap_or_default();
    let args: Vec<&str> = tokens.collect();

    let expect_args = |expected: usize| {
        if args.len() == expected {
            Ok(())
        } else {
            Err(Error::ArgumentCount {
                line,
                keyword: keyword.to_owned(),
                expected,
                got: args.len(),
            })
        }
    };

    let event = match keyword.to_ascii_lowercase().as_str() {
        "start" => {
            expect_args(2)?;
            GestureEvent::Start(parse_point(line, &args)?)
        }
        "move" => {
            expect_args(2)?;
            GestureEvent::Move(parse_point(line, &args)?)
        }
        "end" => {
            expect_args(0)?;
            GestureEvent::End
        }
        _ => {
            return Err(Error::UnknownGesture {
                line,
                keyword: keyword.to_owned(),
            })
        }
    };

    Ok(Some(event))
}

fn parse_point(line: usize, args: &[&str]) -> Result<Point, Error> {
    let parse_coordinate = |value: &str| {
        value
            .parse::<f64>()
            .ok()
            .filter(|coordinate| coordinate.is_finite())
            .ok_or_else(|| Error::InvalidCoordinate {
                line,
                value: value.to_owned(),
            })
    };

    Ok(Point {
        x: parse_coordinate(args[0])?,
        y: parse_coordinate(args[1])?,
    })
}

/// Feeds the events in order into the viewer and returns every rectangle it emitted.
pub fn run<I>(viewer: &mut Viewer, events: I) -> Vec<Rectangle>
where
    I: IntoIterator<Item = GestureEvent>,
{
    events
        .into_iter()
        .filter_map(|event| viewer.handle_event(event))
        .collect()
}
