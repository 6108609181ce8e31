// demos/error_handling_demo.rs
use bsm_hvar::data::read_price_table;
use bsm_hvar::error::RiskError;
use bsm_hvar::option::OptionContract;
use bsm_hvar::var::{
    build_pnl_vector, estimate_var, PortfolioWeights, PriceSeriesTable, RowOrder,
    VarCoefficients,
};

fn main() {
    println!("Error Handling Demo for bsm-hvar");
    println!("================================\n");

    // Test 1: Invalid spot price
    println!("1. Pricing with a zero spot price...");

    let zero_spot = OptionContract::new(0.0, 19.0, 168, 0.005, 0.3);
    match zero_spot.price_call() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 2: Expired contract
    println!("\n2. Pricing with zero days to maturity...");

    let expired = OptionContract::new(19.0, 19.0, 0, 0.005, 0.3);
    match expired.price_put() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 3: Delta is not validated unless asked
    println!("\n3. Delta of the expired contract...");

    println!("   Unchecked call delta: {}", expired.call_delta());
    match expired.call_delta_checked() {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Checked delta caught error: {}", e),
    }

    // Test 4: Fixing the contract in place
    println!("\n4. Mutating the contract before pricing...");

    let mut contract = zero_spot;
    contract.spot_price = 19.0;
    match contract.price_call() {
        Ok(price) => println!("   ✓ Success: Call price = {:.4}", price),
        Err(e) => println!("   Unexpected error: {}", e),
    }

    // Test 5: Too little history
    println!("\n5. Estimating VaR from two P&L observations...");

    match estimate_var(&[-120.0, 35.0], &VarCoefficients::default()) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 6: Weights that do not match the table
    println!("\n6. Three weights for a two-asset table...");

    let table = PriceSeriesTable::from_columns(
        vec![vec![1.10, 1.09, 1.11], vec![1.25, 1.27, 1.24]],
        RowOrder::MostRecentFirst,
    )
    .expect("Valid price table");
    let weights = PortfolioWeights::new(vec![1.0, 2.0, 3.0]).expect("Finite notionals");
    match build_pnl_vector(&table, &weights) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(e) => println!("   ✓ Caught error: {}", e),
    }

    // Test 7: Error type matching on a malformed file
    println!("\n7. Loading a price file with a bad cell...");

    let csv = "EURUSD,GBPUSD\n1.10,1.25\n1.09,#N/A\n";
    match read_price_table(csv.as_bytes(), RowOrder::MostRecentFirst) {
        Ok(_) => println!("   Unexpected: Should have failed!"),
        Err(RiskError::Parse { row, column, reason }) => {
            println!("   ✓ Caught Parse error at row {} column {}: {}", row, column, reason);
        }
        Err(other) => println!("   Unexpected error type: {}", other),
    }

    println!("\n✓ Error handling demo complete!");
}
