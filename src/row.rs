use anyhow::{bail, Context, Result};

/// One line of the incoming price list, parsed and normalized. The
/// `last_modified` column of the target table is store-assigned and has no
/// counterpart here.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: u32,
    pub name: String,
    pub unit: String,
    pub supplier_price: f64,
    pub sale_price: f64,
    pub vat_percentage: i32,
    pub stock: f64,
    pub fractionable: bool,
}

impl ProductRow {
    /// Parse one `;`-delimited line in the column order
    /// `id;name;unit;supplier_price;sale_price;vat_percentage;stock;fractionable`.
    ///
    /// Numeric fields may use `,` as the decimal separator. `stock` is clamped
    /// to a minimum of 0. `fractionable` is true only for the exact literal
    /// `TRUE`; any other spelling (including `true`) reads as false.
    pub fn parse(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.trim().split(';').collect();
        if fields.len() != 8 {
            bail!("expected 8 `;`-separated fields, got {}", fields.len());
        }

        let id = fields[0]
            .parse::<u32>()
            .with_context(|| format!("invalid product id `{}`", fields[0]))?;

        Ok(ProductRow {
            id,
            name: fields[1].to_string(),
            unit: fields[2].to_string(),
            supplier_price: parse_decimal(fields[3])?,
            sale_price: parse_decimal(fields[4])?,
            // integer column; fractional percents truncate toward zero
            vat_percentage: parse_decimal(fields[5])? as i32,
            stock: parse_decimal(fields[6])?.max(0.0),
            fractionable: fields[7].trim() == "TRUE",
        })
    }
}

/// Parse a number that may use `,` as its decimal separator.
fn parse_decimal(raw: &str) -> Result<f64> {
    raw.replace(',', ".")
        .parse::<f64>()
        .with_context(|| format!("invalid numeric value `{}`", raw))
}
