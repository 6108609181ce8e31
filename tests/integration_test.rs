// tests/integration_test.rs
use approx::assert_abs_diff_eq;
use bsm_hvar::data::load_price_table;
use bsm_hvar::error::RiskError;
use bsm_hvar::output::write_pnl_to_csv;
use bsm_hvar::var::{build_pnl_vector, estimate_var, PortfolioWeights, RowOrder, VarCoefficients};
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("ccyprices.csv")
}

#[test]
fn test_fx_portfolio_end_to_end() {
    let table = load_price_table(fixture(), RowOrder::MostRecentFirst).expect("fixture loads");
    assert_eq!(table.assets(), 2);
    assert_eq!(table.names(), &["EURUSD", "GBPUSD"]);
    let rows = table.rows();

    let weights = PortfolioWeights::new(vec![153084.81, 95891.51]).unwrap();
    let pnl = build_pnl_vector(&table, &weights).unwrap();

    assert_eq!(pnl.len(), rows);
    assert_eq!(pnl[rows - 1], 0.0);

    let var = estimate_var(&pnl, &VarCoefficients::default()).unwrap();
    println!(
        "\n1-day historical VaR of the FX portfolio with 99% confidence: {:.2}",
        var
    );

    assert!(var.is_finite());
    // Independently computed from the same file
    assert_abs_diff_eq!(var, -2761.2009810903396, epsilon = 1e-6);
    assert_abs_diff_eq!(pnl[0], 177.3999111745826, epsilon = 1e-8);
}

#[test]
fn test_fixture_rejects_wrong_declared_order() {
    match load_price_table(fixture(), RowOrder::Chronological) {
        Err(RiskError::InvalidConfiguration { field, reason }) => {
            assert_eq!(field, "row_order");
            assert!(reason.contains("chronological"));
        }
        other => panic!("expected InvalidConfiguration, got {:?}", other.map(|t| t.rows())),
    }
}

#[test]
fn test_weights_must_match_file_columns() {
    let table = load_price_table(fixture(), RowOrder::MostRecentFirst).unwrap();
    let weights = PortfolioWeights::new(vec![153084.81]).unwrap();
    assert!(matches!(
        build_pnl_vector(&table, &weights),
        Err(RiskError::DimensionMismatch {
            expected: 2,
            found: 1,
            ..
        })
    ));
}

#[test]
fn test_pnl_written_to_csv() {
    let table = load_price_table(fixture(), RowOrder::MostRecentFirst).unwrap();
    let weights = PortfolioWeights::new(vec![153084.81, 95891.51]).unwrap();
    let pnl = build_pnl_vector(&table, &weights).unwrap();

    let path = std::env::temp_dir().join(format!("bsm_hvar_it_{}_pnl.csv", std::process::id()));
    write_pnl_to_csv(&path, &pnl).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "day,pnl");
    assert_eq!(lines.len(), pnl.len() + 1);
    assert_eq!(*lines.last().unwrap(), format!("{},0", pnl.len() - 1));
}
