// Prints the EPC QR payload for a sample credit transfer.
//
// Run with `RUST_LOG=trace` to see the record being built.

use rust_decimal::Decimal;
use sepaqr::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut record = PaymentRecord::new();
    record
        .set_bic("COBADEFFXXX")?
        .set_name("John Doe")?
        .set_account_number("DE89370400440532013000")?
        .set_amount(Decimal::new(12_345, 2))?
        .set_unstructured_remittance_information("Invoice 2024-0042")?;

    let payload = record.render()?;
    println!("=== EPC QR payload ({} bytes) ===", payload.len());
    for (i, line) in payload.lines().enumerate() {
        println!("{:>2}: {}", i + 1, line);
    }
    Ok(())
}
