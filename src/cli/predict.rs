use super::ui;
use crate::core::{PredictedReturns, PredictionRequest, ReturnPredictor};
use anyhow::{Context, Result};
use comfy_table::Cell;

pub fn display_returns_table(request: &PredictionRequest, returns: &PredictedReturns) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Horizon"),
        ui::header_cell("Predicted Return"),
    ]);

    for (horizon, value) in [
        ("1Y", returns.returns_1yr),
        ("3Y", returns.returns_3yr),
        ("5Y", returns.returns_5yr),
    ] {
        table.add_row(vec![
            Cell::new(horizon),
            ui::format_optional_cell(value, |v| format!("{v:.2}%")),
        ]);
    }

    format!(
        "{}\n{}\n\n{}",
        ui::style_text(&request.amc_name, ui::StyleType::Title),
        ui::style_text(
            &format!("{} / {}", request.category, request.sub_category),
            ui::StyleType::Subtle
        ),
        table
    )
}

pub async fn run(predictor: &dyn ReturnPredictor, request: &PredictionRequest) -> Result<()> {
    let pb = ui::new_spinner("Requesting prediction...");
    let returns = predictor.predict(request).await;
    pb.finish_and_clear();

    let returns = returns.context("Prediction request failed")?;
    println!("{}", display_returns_table(request, &returns));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_yield_shows_na() {
        let request = PredictionRequest {
            amc_name: "Tata Mutual Fund".to_string(),
            ..Default::default()
        };
        let returns = PredictedReturns {
            returns_1yr: Some(11.25),
            returns_3yr: None,
            returns_5yr: Some(-2.5),
        };

        let output = display_returns_table(&request, &returns);
        assert!(output.contains("11.25%"));
        assert!(output.contains("N/A"));
        assert!(output.contains("-2.50%"));
    }
}
