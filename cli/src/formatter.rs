use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, Row, Table};
use unitconv::{BatchResult, ConversionResult, UnitListing};

pub struct Formatter {}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self {}
    }

    pub fn format_conversion(&self, result: &ConversionResult, raw: bool) -> String {
        if raw {
            return format!("{}\n", result.result);
        }

        format!(
            "{} {} = {} {} ({})\n",
            result.value, result.from, result.result, result.to, result.category
        )
    }

    pub fn format_batch(&self, batch: &BatchResult, raw: bool) -> String {
        if raw {
            return batch
                .conversions
                .iter()
                .map(|c| format!("{}\n", c.result))
                .collect();
        }

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("#").set_alignment(CellAlignment::Right),
            Cell::new(&batch.from).set_alignment(CellAlignment::Right),
            Cell::new(&batch.to).set_alignment(CellAlignment::Right),
        ]));

        for (i, conversion) in batch.conversions.iter().enumerate() {
            table.add_row(Row::from(vec![
                Cell::new(i).set_alignment(CellAlignment::Right),
                Cell::new(conversion.value).set_alignment(CellAlignment::Right),
                Cell::new(conversion.result).set_alignment(CellAlignment::Right),
            ]));
        }

        format!(
            "{}\n{} {} value(s) converted\n",
            table, batch.count, batch.category
        )
    }

    pub fn format_unit_listing(&self, listing: &UnitListing) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(Row::from(vec![
            Cell::new("Category").set_alignment(CellAlignment::Left),
            Cell::new("Accepted units").set_alignment(CellAlignment::Left),
        ]));

        for category in &listing.categories {
            table.add_row(Row::from(vec![
                Cell::new(category),
                Cell::new(listing.aliases(*category).join(", ")),
            ]));
        }

        format!("{}\n", table)
    }
}
