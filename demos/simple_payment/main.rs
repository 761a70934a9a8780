//! Simple example: validate a payment, print its barcode text and QR Code

use paybysquare::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let data = PaymentData::builder()
        .amount("25.90".parse()?)
        .iban("SK3112000000198742637541")
        .swift("GIBASKBX")
        .date(NaiveDate::from_ymd_opt(2024, 3, 15).unwrap_or_default())
        .currency("EUR")
        .variable_symbol("2024031")
        .constant_symbol("0308")
        .note("Invoice 2024031")
        .beneficiary_name("Example s.r.o.")
        .build()?;

    let problems = validate(&data);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("invalid: {}", problem);
        }
        anyhow::bail!("payment data rejected");
    }

    let text = generate(&data)?;
    println!("Barcode text ({} symbols):\n{}\n", text.len(), text);

    let config = RenderConfig::default();
    println!("{}", render_text(&text, &config)?);

    let image = generate_image(&data, 300, 300)?;
    println!(
        "Raster: {}x{} px, {} modules at {} px each",
        image.width(),
        image.height(),
        image.module_count(),
        image.scale()
    );

    Ok(())
}
