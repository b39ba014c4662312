use super::ui;
use crate::core::{
    Candle, CandleBucketizer, CandleSeries, HistorySource, InstrumentRecord, Period, SchemeSearch,
    SyntheticSeriesGenerator, load_fund_house, period_return,
};
use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Color};

/// Picks the requested scheme, or the first one in aggregator order.
pub fn select_record(
    records: &[InstrumentRecord],
    scheme: Option<u32>,
) -> Result<&InstrumentRecord> {
    match scheme {
        Some(id) => records
            .iter()
            .find(|record| record.meta.id == id)
            .with_context(|| format!("Scheme {id} was not among the fetched schemes")),
        None => records
            .first()
            .context("No NAV history could be fetched for any scheme"),
    }
}

fn candle_color(candle: &Candle) -> Color {
    if candle.is_bullish() {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn display_candles_table(
    record: &InstrumentRecord,
    period: Period,
    series: &CandleSeries,
) -> String {
    let mut table = ui::new_styled_table();

    table.set_header(vec![
        ui::header_cell("#"),
        ui::header_cell("Date"),
        ui::header_cell("Open"),
        ui::header_cell("High"),
        ui::header_cell("Low"),
        ui::header_cell("Close"),
        ui::header_cell("Change"),
    ]);

    for candle in &series.candles {
        let change = if candle.open != 0.0 {
            Some((candle.close - candle.open) / candle.open * 100.0)
        } else {
            None
        };
        table.add_row(vec![
            Cell::new(candle.index),
            Cell::new(&candle.label),
            ui::number_cell(candle.open),
            ui::number_cell(candle.high),
            ui::number_cell(candle.low),
            ui::number_cell(candle.close),
            change.map_or(Cell::new("N/A"), |c| ui::change_cell(c, candle_color(candle))),
        ]);
    }

    let mut output = format!(
        "{} ({})\n{}\n\n",
        ui::style_text(&record.meta.display_name, ui::StyleType::Title),
        period,
        ui::style_text(&record.meta.category, ui::StyleType::Subtle),
    );
    if series.synthetic {
        output.push_str(&ui::style_text(
            "No NAV data in this window. Showing synthetic placeholder candles.",
            ui::StyleType::Error,
        ));
        output.push_str("\n\n");
    }
    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\n\n{} {}",
        ui::style_text(
            &format!("{} Return:", period.to_string().to_uppercase()),
            ui::StyleType::TotalLabel
        ),
        ui::style_change(period_return(&series.candles))
    ));
    output
}

pub async fn run(
    search: &dyn SchemeSearch,
    source: &dyn HistorySource,
    house: &str,
    scheme: Option<u32>,
    period: Period,
    seed: Option<u64>,
) -> Result<()> {
    let pb = ui::new_spinner("Fetching NAV history...");
    let records = load_fund_house(search, source, house).await;
    pb.finish_and_clear();

    let records = records.with_context(|| format!("Could not resolve schemes for '{house}'"))?;
    if records.is_empty() {
        bail!("No NAV history could be fetched for '{house}'");
    }
    let record = select_record(&records, scheme)?;

    let today = chrono::Utc::now().date_naive();
    let mut bucketizer = match seed {
        Some(seed) => {
            CandleBucketizer::with_generator(today, SyntheticSeriesGenerator::from_seed(seed))
        }
        None => CandleBucketizer::new(today),
    };
    let series = bucketizer.bucketize(&record.series, period);

    println!("{}", display_candles_table(record, period, &series));
    Ok(())
}
