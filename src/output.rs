// src/output.rs
use crate::error::RiskResult;
use std::path::Path;

/// Write a P&L vector as `day,pnl`, day 0 being the latest observation
pub fn write_pnl_to_csv<P: AsRef<Path>>(filename: P, pnl: &[f64]) -> RiskResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    writer.write_record(["day", "pnl"])?;
    for (i, value) in pnl.iter().enumerate() {
        writer.write_record([i.to_string(), value.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write `key,value` rows. Values containing commas or quotes are quoted.
pub fn write_summary_to_csv<P: AsRef<Path>>(
    filename: P,
    summary_data: &[(&str, String)],
) -> RiskResult<()> {
    let mut writer = csv::Writer::from_path(filename)?;
    for (key, value) in summary_data {
        writer.write_record([*key, value.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
