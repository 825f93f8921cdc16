//! Column alignment: the closed set of justification rules plus
//! content-based auto-detection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides, odd extra space on the right).
    Center,
}

impl Alignment {
    /// Detect the alignment for a column from its cell values.
    ///
    /// A column where every non-empty cell is numeric reads best
    /// right-aligned; anything else stays left-aligned. Empty cells are
    /// skipped, and a column with no non-empty cells defaults to `Left`.
    /// `Center` is never inferred — it is only reachable via an explicit
    /// override.
    ///
    /// # Example
    ///
    /// ```rust
    /// use colfmt::Alignment;
    ///
    /// assert_eq!(Alignment::for_items(&["123", "456"]), Alignment::Right);
    /// assert_eq!(Alignment::for_items(&["apple", "banana"]), Alignment::Left);
    /// ```
    pub fn for_items<S: AsRef<str>>(items: &[S]) -> Alignment {
        let mut saw_value = false;
        for item in items {
            let cell = item.as_ref().trim();
            if cell.is_empty() {
                continue;
            }
            if !is_numeric(cell) {
                return Alignment::Left;
            }
            saw_value = true;
        }
        if saw_value {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }
}

impl FromStr for Alignment {
    type Err = ModelError;

    /// Parse an alignment token: `left`/`l`/`<`, `right`/`r`/`>`, or
    /// `center`/`centre`/`c`/`^`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" | "<" => Ok(Alignment::Left),
            "right" | "r" | ">" => Ok(Alignment::Right),
            "center" | "centre" | "c" | "^" => Ok(Alignment::Center),
            _ => Err(ModelError::UnknownAlignment(s.trim().to_string())),
        }
    }
}

/// Numeric literal check used by auto-detection: optional sign, digits,
/// optional single decimal point with digits on both sides. The shape is
/// restricted before the parse attempt so exponent/inf/nan forms, which
/// `f64` would accept, do not count as numeric.
fn is_numeric(cell: &str) -> bool {
    let unsigned = cell.strip_prefix(['+', '-']).unwrap_or(cell);
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    let shaped = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => all_digits(int_part) && all_digits(frac_part),
        None => all_digits(unsigned),
    };
    shaped && cell.parse::<f64>().is_ok()
}

/// Alignment request handed to the [`Model`](crate::Model) constructors.
///
/// `Uniform` broadcasts one alignment to every column (`AlignSpec::default()`
/// is `Uniform(Left)`), `Auto` runs [`Alignment::for_items`] detection per
/// column, and `PerColumn` pins each column explicitly — its length must
/// equal the column count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlignSpec {
    /// One alignment applied to every column.
    Uniform(Alignment),
    /// Detect each column's alignment from its cell content.
    Auto,
    /// Explicit per-column alignments.
    PerColumn(Vec<Alignment>),
}

impl Default for AlignSpec {
    fn default() -> Self {
        AlignSpec::Uniform(Alignment::Left)
    }
}

impl AlignSpec {
    /// Resolve this spec into one alignment per column.
    pub(crate) fn resolve(&self, columns: &[Vec<String>]) -> Result<Vec<Alignment>, ModelError> {
        match self {
            AlignSpec::Uniform(align) => Ok(vec![*align; columns.len()]),
            AlignSpec::Auto => Ok(columns
                .iter()
                .map(|cells| Alignment::for_items(cells))
                .collect()),
            AlignSpec::PerColumn(aligns) => {
                if aligns.len() != columns.len() {
                    return Err(ModelError::AlignCount {
                        found: aligns.len(),
                        expected: columns.len(),
                    });
                }
                Ok(aligns.clone())
            }
        }
    }
}

impl FromStr for AlignSpec {
    type Err = ModelError;

    /// Parse the `--align` grammar: `auto`/`a`, a single alignment token,
    /// or a comma-separated list of alignment tokens.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.contains(',') {
            let aligns = trimmed
                .split(',')
                .map(str::parse)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(AlignSpec::PerColumn(aligns));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "auto" | "a" => Ok(AlignSpec::Auto),
            _ => trimmed.parse().map(AlignSpec::Uniform),
        }
    }
}
