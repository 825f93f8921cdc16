//! Built-in demo rendered by `--demo`.

use colfmt::{AlignSpec, Alignment, Model, ModelError, Screen, Table};

/// Render the demo output: a handful of datasets showcasing headings,
/// auto-detection, alignment overrides, and custom spacers.
pub fn render() -> Result<String, ModelError> {
    let mut out = String::new();

    out.push_str("colfmt demo\n===========\n\n");

    let inventory = Model::from_rows(
        vec![
            vec!["Product", "Price", "Quantity", "Code"],
            vec!["Widget", "12.99", "150", "W001"],
            vec!["Gadget", "5.25", "75", "G002"],
            vec!["Tool", "25.00", "200", "T003"],
        ],
        true,
        AlignSpec::Auto,
    )?;
    out.push_str("Auto-detected alignment:\n");
    out.push_str(&Table::new(&inventory).to_string());
    out.push_str("\n\n");

    let pinned = inventory.with_aligns(&[
        Alignment::Left,
        Alignment::Right,
        Alignment::Right,
        Alignment::Center,
    ])?;
    out.push_str("Pinned alignment (left, right, right, center), pipe spacer:\n");
    out.push_str(&Table::new(&pinned).spacer(" | ").to_string());
    out.push_str("\n\n");

    let tools = Model::from_rows(
        vec![vec!["Python", "3.12"], vec!["colfmt", "0.1.0"]],
        false,
        AlignSpec::default(),
    )?;
    out.push_str("Screen without headings:\n");
    out.push_str(&Screen::new(&tools).to_string());
    out.push('\n');

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_renders_every_section() {
        let out = render().unwrap();
        assert!(out.contains("colfmt demo"));
        assert!(out.contains("Product"));
        assert!(out.contains("-------"));
        assert!(out.ends_with('\n'));
    }

    #[test]
    fn demo_price_column_is_right_aligned() {
        let out = render().unwrap();
        // "12.99" is the widest price cell, so "5.25" gains a leading space.
        assert!(out.contains(" 5.25"));
    }
}
