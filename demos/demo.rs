// demos/demo.rs
use bsm_hvar::math_utils::Timer;
use bsm_hvar::option::{OptionContract, OptionKind};
use bsm_hvar::var::{
    build_asset_pnl, build_pnl_vector, estimate_var, PortfolioWeights, PriceSeriesTable,
    RowOrder, VarCoefficients,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    run_option_demo();
    run_var_demo();
}

fn run_option_demo() {
    println!("Black-Scholes-Merton pricing");
    println!("============================\n");

    let spot = 19.0;
    let days = 168;
    let rate = 0.005;
    let vol = 0.3;
    println!(
        "Spot: {:.2}  Days: {}  Rate: {:.2}%  Vol: {:.0}%\n",
        spot,
        days,
        rate * 100.0,
        vol * 100.0
    );

    println!("{:>8} {:>10} {:>10} {:>10} {:>10}", "Strike", "Call", "Put", "CallΔ", "PutΔ");
    let mut contract = OptionContract::new(spot, 15.0, days, rate, vol);
    for strike in [15.0, 17.0, 19.0, 20.0, 23.0] {
        // Re-price the same contract with a new strike
        contract.strike_price = strike;
        let call = contract.price(OptionKind::Call).expect("Valid contract");
        let put = contract.price(OptionKind::Put).expect("Valid contract");
        println!(
            "{:>8.2} {:>10.4} {:>10.4} {:>10.4} {:>10.4}",
            strike,
            call,
            put,
            contract.call_delta(),
            contract.put_delta()
        );
    }

    let forward = spot * (rate * days as f64 / 365.0).exp();
    contract.strike_price = forward;
    println!(
        "\nStrike at forward ({:.4}): call {:.6} = put {:.6}\n",
        forward,
        contract.price_call().expect("Valid contract"),
        contract.price_put().expect("Valid contract")
    );
}

fn run_var_demo() {
    println!("Historical VaR, 1 day, 99%");
    println!("==========================\n");

    // Ten days of two FX rates, latest first
    let eurusd = vec![
        1.1043, 1.0975, 1.0988, 1.0991, 1.0935, 1.0990, 1.0925, 1.0918, 1.0863, 1.0900,
    ];
    let gbpusd = vec![
        1.2468, 1.2413, 1.2447, 1.2452, 1.2390, 1.2453, 1.2407, 1.2383, 1.2337, 1.2365,
    ];
    let table = PriceSeriesTable::from_named_columns(
        vec!["EURUSD".to_string(), "GBPUSD".to_string()],
        vec![eurusd, gbpusd],
        RowOrder::MostRecentFirst,
    )
    .expect("Valid price table");
    let weights = PortfolioWeights::new(vec![153084.81, 95891.51]).expect("Finite notionals");

    let timer = Timer::new();
    let pnl = build_pnl_vector(&table, &weights).expect("Weights match columns");
    let coefficients = VarCoefficients::default();
    let var = estimate_var(&pnl, &coefficients).expect("Enough history");
    let elapsed = timer.elapsed_ms();

    println!("{:>4} {:>12}", "Day", "P&L");
    for (day, value) in pnl.iter().enumerate() {
        println!("{:>4} {:>12.2}", day, value);
    }

    println!("\nPortfolio VaR ({}): {:.2}", coefficients, var);
    let asset_pnl = build_asset_pnl(&table, &weights).expect("Weights match columns");
    for (name, column) in table.names().iter().zip(&asset_pnl) {
        let standalone = estimate_var(column, &coefficients).expect("Enough history");
        println!("  {} standalone: {:.2}", name, standalone);
    }
    println!("\nComputed in {:.3} ms", elapsed);
}
