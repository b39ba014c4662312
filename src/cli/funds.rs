use super::ui;
use crate::core::{HistorySource, InstrumentRecord, SchemeSearch, load_fund_house};
use anyhow::{Context, Result};
use comfy_table::Cell;

/// Renders the collected schemes of a fund house, in aggregator order.
pub fn display_funds_table(house: &str, records: &[InstrumentRecord]) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Scheme"),
        ui::header_cell("Category"),
        ui::header_cell("Points"),
        ui::header_cell("Latest NAV"),
        ui::header_cell("As of"),
    ]);

    for record in records {
        let latest = record.latest();
        table.add_row(vec![
            Cell::new(record.meta.id),
            Cell::new(&record.meta.display_name),
            Cell::new(&record.meta.category),
            Cell::new(record.series.len()),
            ui::format_optional_cell(latest.map(|p| p.value), |v| format!("{v:.4}")),
            ui::format_optional_cell(latest.map(|p| p.date), |d| {
                d.format("%Y-%m-%d").to_string()
            }),
        ]);
    }

    let mut output = format!(
        "Fund house: {}\n\n",
        ui::style_text(house, ui::StyleType::Title)
    );
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text("Schemes:", ui::StyleType::TotalLabel),
        ui::style_text(&records.len().to_string(), ui::StyleType::TotalValue)
    ));
    output
}

pub async fn run(
    search: &dyn SchemeSearch,
    source: &dyn HistorySource,
    house: &str,
) -> Result<()> {
    let pb = ui::new_spinner("Fetching NAV history...");
    let records = load_fund_house(search, source, house).await;
    pb.finish_and_clear();

    let records = records.with_context(|| format!("Could not resolve schemes for '{house}'"))?;
    if records.is_empty() {
        println!(
            "{}",
            ui::style_text(
                &format!("No NAV history could be fetched for '{house}'"),
                ui::StyleType::Error
            )
        );
        return Ok(());
    }

    println!("{}", display_funds_table(house, &records));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{InstrumentMeta, PricePoint};
    use chrono::NaiveDate;

    #[test]
    fn test_funds_table_lists_every_record() {
        let records: Vec<InstrumentRecord> = [(101, "Alpha Fund"), (102, "Beta Fund")]
            .iter()
            .map(|(id, name)| InstrumentRecord {
                meta: InstrumentMeta {
                    house_name: "Test Mutual Fund".to_string(),
                    instrument_type: "Open Ended Schemes".to_string(),
                    category: "Index Funds".to_string(),
                    id: *id,
                    display_name: name.to_string(),
                },
                series: vec![PricePoint::new(
                    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
                    12.3456,
                )],
            })
            .collect();

        let output = display_funds_table("Test", &records);
        assert!(output.contains("Alpha Fund"));
        assert!(output.contains("Beta Fund"));
        assert!(output.contains("12.3456"));
        assert!(output.contains("2026-10-16"));
        assert!(output.find("Alpha Fund") < output.find("Beta Fund"));
    }
}
