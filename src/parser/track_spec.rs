//! Text codec for row and column specs.
//!
//! # Grammar
//!
//! ```text
//! spec      = [alignment ":"] size [":" resize]
//! alignment = left|l|right|r (columns) | top|t|bottom|b (rows) | center|c | fill|f
//! size      = component | constant | bounded
//! component = min|m|minimum | pref|p|preferred | default|d
//! constant  = number ("px"|"pt"|"in"|"mm"|"cm"|"dlu"|"dluX"|"dluY")
//! bounded   = ("max"|"min") "(" component ";" constant ")"   operands in any order
//! resize    = none|n|noGrow | grow|g | (grow|g) "(" number ")"
//! ```
//!
//! Tokens are case-insensitive. [`encode`] always writes the long form
//! `alignment:size:resize`, so `encode(decode(s))` is a canonical spelling
//! of `s` and is stable under repeated decoding.

use crate::error::{GridError, GridResult};
use crate::models::track_spec::{DEFAULT_GROW, NO_GROW};
use crate::models::{Alignment, Axis, ComponentSize, ConstantSize, Size, TrackSpec, Unit};
use regex::Regex;
use std::sync::LazyLock;

static CONSTANT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?|\.\d+)\s*(px|pt|in|mm|cm|dlux|dluy|dlu)$")
        .expect("constant size pattern is valid")
});

static BOUNDED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(max|min)\(\s*([^;()]+?)\s*;\s*([^;()]+?)\s*\)$")
        .expect("bounded size pattern is valid")
});

static WEIGHTED_GROW_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:grow|g)\(\s*(\d+(?:\.\d+)?|\.\d+)\s*\)$")
        .expect("weighted grow pattern is valid")
});

/// Parses a spec string for a track on `axis`.
///
/// # Errors
///
/// Returns [`GridError::InvalidSpec`] when the string does not match the
/// grammar. Nothing is partially parsed.
pub fn decode(axis: Axis, input: &str) -> GridResult<TrackSpec> {
    let lowered = input.trim().to_ascii_lowercase();
    if lowered.is_empty() {
        return Err(GridError::invalid_spec(input, "spec is empty"));
    }

    let segments: Vec<&str> = lowered.split(':').map(str::trim).collect();
    let (alignment, size_token, resize_token) = match segments.as_slice() {
        [size] => (None, *size, None),
        [first, second] => match parse_alignment(axis, first) {
            Some(alignment) => (Some(alignment), *second, None),
            None => (None, *first, Some(*second)),
        },
        [alignment, size, resize] => {
            let alignment = parse_alignment(axis, alignment).ok_or_else(|| {
                GridError::invalid_spec(input, format!("unknown {axis} alignment '{alignment}'"))
            })?;
            (Some(alignment), *size, Some(*resize))
        }
        _ => {
            return Err(GridError::invalid_spec(
                input,
                format!("expected at most 3 segments, found {}", segments.len()),
            ))
        }
    };

    let size = parse_size(size_token).map_err(|reason| GridError::invalid_spec(input, reason))?;
    let resize_weight = match resize_token {
        Some(token) => {
            parse_resize(token).map_err(|reason| GridError::invalid_spec(input, reason))?
        }
        None => NO_GROW,
    };

    Ok(TrackSpec {
        axis,
        alignment: alignment.unwrap_or_else(|| Alignment::default_for(axis)),
        size,
        resize_weight,
    })
}

/// Writes the canonical form of a spec.
///
/// Dialog units are written as `dlu` whatever axis alias was parsed, so two
/// specs that only differ by `dluX`/`dluY` encode identically.
#[must_use]
pub fn encode(spec: &TrackSpec) -> String {
    format!(
        "{}:{}:{}",
        spec.alignment.name(spec.axis),
        encode_size(&spec.size),
        encode_resize(spec.resize_weight)
    )
}

/// Decodes and re-encodes a spec string.
pub fn normalize(axis: Axis, input: &str) -> GridResult<String> {
    decode(axis, input).map(|spec| encode(&spec))
}

fn parse_alignment(axis: Axis, token: &str) -> Option<Alignment> {
    match (token, axis) {
        ("center" | "c", _) => Some(Alignment::Center),
        ("fill" | "f", _) => Some(Alignment::Fill),
        ("left" | "l", Axis::Column) | ("top" | "t", Axis::Row) => Some(Alignment::Start),
        ("right" | "r", Axis::Column) | ("bottom" | "b", Axis::Row) => Some(Alignment::End),
        _ => None,
    }
}

fn parse_component_size(token: &str) -> Option<ComponentSize> {
    match token {
        "min" | "m" | "minimum" => Some(ComponentSize::Minimum),
        "pref" | "p" | "preferred" => Some(ComponentSize::Preferred),
        "default" | "d" => Some(ComponentSize::Default),
        _ => None,
    }
}

/// Parses a decimal matched by one of the patterns; values too large for
/// an `f64` are rejected since they cannot be written back.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn parse_constant_size(token: &str) -> Option<ConstantSize> {
    let captures = CONSTANT_REGEX.captures(token)?;
    let value = parse_number(&captures[1])?;
    let unit = match &captures[2] {
        "px" => Unit::Pixel,
        "pt" => Unit::Point,
        "in" => Unit::Inch,
        "mm" => Unit::Millimeter,
        "cm" => Unit::Centimeter,
        // dlu, dlux and dluy all collapse to the axis-relative dialog unit
        _ => Unit::DialogUnit,
    };
    Some(ConstantSize::new(value, unit))
}

fn parse_size(token: &str) -> Result<Size, String> {
    if let Some(captures) = BOUNDED_REGEX.captures(token) {
        let (first, second) = (&captures[2], &captures[3]);
        let (basis, bound) = match (
            parse_component_size(first),
            parse_constant_size(second),
            parse_component_size(second),
            parse_constant_size(first),
        ) {
            (Some(basis), Some(bound), _, _) | (_, _, Some(basis), Some(bound)) => (basis, bound),
            _ => {
                return Err(format!(
                    "bounded size '{token}' needs one component size and one constant size"
                ))
            }
        };
        return Ok(if &captures[1] == "max" {
            Size::AtLeast(basis, bound)
        } else {
            Size::AtMost(basis, bound)
        });
    }

    if let Some(component) = parse_component_size(token) {
        return Ok(Size::Component(component));
    }

    parse_constant_size(token)
        .map(Size::Constant)
        .ok_or_else(|| format!("unknown size '{token}'"))
}

fn parse_resize(token: &str) -> Result<f64, String> {
    match token {
        "none" | "n" | "nogrow" => Ok(NO_GROW),
        "grow" | "g" => Ok(DEFAULT_GROW),
        _ => WEIGHTED_GROW_REGEX
            .captures(token)
            .and_then(|captures| parse_number(&captures[1]))
            .ok_or_else(|| format!("unknown resize behavior '{token}'")),
    }
}

fn encode_constant(size: &ConstantSize) -> String {
    format!("{}{}", size.value, size.unit.suffix())
}

fn encode_size(size: &Size) -> String {
    match size {
        Size::Constant(constant) => encode_constant(constant),
        Size::Component(component) => component.name().to_string(),
        Size::AtLeast(basis, bound) => {
            format!("max({};{})", basis.name(), encode_constant(bound))
        }
        Size::AtMost(basis, bound) => {
            format!("min({};{})", basis.name(), encode_constant(bound))
        }
    }
}

#[allow(clippy::float_cmp)]
fn encode_resize(weight: f64) -> String {
    if weight == NO_GROW {
        "noGrow".to_string()
    } else if weight == DEFAULT_GROW {
        "grow".to_string()
    } else {
        format!("grow({weight})")
    }
}

impl std::fmt::Display for TrackSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(self))
    }
}
