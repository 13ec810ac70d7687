use playbill::core::*;
use playbill::statement::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=playbill=debug shows each priced performance
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = CatalogBuilder::new()
        .play("hamlet", "Hamlet", "tragedy")
        .play("as-like", "As You Like It", "comedy")
        .play("othello", "Othello", "tragedy")
        .build();

    let invoice = InvoiceBuilder::new("BigCo")
        .add_performance("hamlet", 55)
        .add_performance("as-like", 35)
        .add_performance("othello", 40)
        .build();

    // ── 1. Default tariff, US dollars ─────────────────────────────────
    println!("=== Statement ===");
    match render(&invoice, &catalog) {
        Ok(text) => print!("{text}"),
        Err(e) => println!("  Failed: {e}"),
    }

    // ── 2. Another currency ───────────────────────────────────────────
    println!("\n=== Statement (GBP) ===");
    if let Some(gbp) = IsoCurrencyFormatter::from_code("GBP") {
        let printer = StatementPrinter::new(&invoice, &catalog).with_formatter(gbp);
        match printer.statement() {
            Ok(text) => print!("{text}"),
            Err(e) => println!("  Failed: {e}"),
        }
    }

    // ── 3. Unknown genre aborts the statement ─────────────────────────
    println!("\n=== Unknown genre ===");
    let catalog = CatalogBuilder::new().play("henry-v", "Henry V", "history").build();
    let invoice = InvoiceBuilder::new("BigCo").add_performance("henry-v", 40).build();
    match render(&invoice, &catalog) {
        Ok(text) => print!("{text}"),
        Err(e) => println!("  Failed: {e}"),
    }
}
