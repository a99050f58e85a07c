use std::io::{self, BufRead, Write};

use anyhow::Result;

use ledgercast::chain::EthLedgerReader;
use ledgercast::config::Config;
use ledgercast::predictor::HttpPredictor;
use ledgercast::view::{chart_points, prediction_rows, series_rows};
use ledgercast::workflow::Dashboard;

const CHART_WIDTH: usize = 40;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    let mut dashboard = Dashboard::new(
        Box::new(EthLedgerReader::new(&cfg)),
        Box::new(HttpPredictor::new(&cfg)),
    );

    // One-shot mode: id on the command line.
    if let Some(id) = std::env::args().nth(1) {
        dashboard.run_fetch_and_predict(&id).await;
        render(&dashboard);
        return Ok(());
    }

    // Interactive mode: one fetch per line.
    let stdin = io::stdin();
    loop {
        print!("wallet id> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let id = line.trim();
        if id == "quit" || id == "exit" {
            break;
        }
        dashboard.run_fetch_and_predict(id).await;
        render(&dashboard);
    }
    Ok(())
}

fn render(dashboard: &Dashboard) {
    if !dashboard.series().is_empty() {
        println!("{:>5}  value", "index");
        for (index, value) in series_rows(dashboard.series()) {
            println!("{:>5}  {}", index, value);
        }
        render_chart(dashboard);
    }

    if let Some(result) = dashboard.prediction() {
        println!("{:>11}  prediction", "years ahead");
        for (years_ahead, value) in prediction_rows(result) {
            println!("{:>11}  {}", years_ahead, value);
        }
    }

    if let Some(status) = dashboard.status_line() {
        println!("{}", status);
    }
}

fn render_chart(dashboard: &Dashboard) {
    let points: Vec<(usize, f64)> = chart_points(dashboard.series()).collect();
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return;
    }
    for (index, value) in &points {
        let width = ((value / max) * CHART_WIDTH as f64).round() as usize;
        println!("{:>5} |{}", index, "#".repeat(width));
    }
}
