//! Plain-text initial conditions
//!
//! ```text
//! mass x y vx vy
//! 60.0 0.0 -19.9 2.0 4.0
//! 60.0 -10.0 -19.9 3.0 0.0
//! 100000.0 0.0 1000.0 0.0 0.0
//! ```
//!
//! The first line is a header and is thrown away. Every following non-blank
//! line holds exactly five numbers in the order `mass x y vx vy`.

use std::fs;
use std::path::Path;

use log::warn;

use crate::configuration::config::BodyConfig;
use crate::error::ConfigError;
use crate::simulation::states::Body;

/// Read an initial-conditions file into one [`BodyConfig`] per row.
pub fn load_initial_conditions(path: &Path) -> Result<Vec<BodyConfig>, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_initial_conditions(&text).map_err(|(line, reason)| ConfigError::Parse {
        path: path.to_path_buf(),
        line,
        reason,
    })
}

/// Parse the file contents. Errors carry the 1-based line number.
pub fn parse_initial_conditions(text: &str) -> Result<Vec<BodyConfig>, (usize, String)> {
    let mut rows = Vec::new();

    // skip(1): header
    for (idx, line) in text.lines().enumerate().skip(1) {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let fields = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<f64>()
                    .map_err(|e| (line_no, format!("`{tok}` is not a number: {e}")))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let &[m, x, y, vx, vy] = fields.as_slice() else {
            return Err((
                line_no,
                format!("expected 5 fields (mass x y vx vy), found {}", fields.len()),
            ));
        };
        if m < 0.0 {
            return Err((line_no, format!("mass cannot be negative, got {m}")));
        }

        rows.push(BodyConfig {
            m,
            x: [x, y],
            v: [vx, vy],
            q: 0.0,
            anchor: false,
        });
    }

    Ok(rows)
}

/// Build exactly `count` bodies from `rows`.
///
/// - missing rows become inert bodies (mass 0 at the origin)
/// - extra rows are dropped
/// - if no row is flagged as anchor, the last body is the anchor
pub fn assemble_bodies(rows: &[BodyConfig], count: usize) -> Result<Vec<Body>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::InvalidObjectCount(count));
    }

    if rows.len() > count {
        warn!("{} rows given for {count} objects, ignoring the last {}", rows.len(), rows.len() - count);
    } else if rows.len() < count {
        warn!("{} rows given for {count} objects, padding with inert bodies", rows.len());
    }

    let mut bodies: Vec<Body> = rows.iter().take(count).map(BodyConfig::to_body).collect();
    bodies.resize_with(count, Body::inert);

    if !bodies.iter().any(|b| b.anchor) {
        if let Some(last) = bodies.last_mut() {
            last.anchor = true;
        }
    }

    Ok(bodies)
}
