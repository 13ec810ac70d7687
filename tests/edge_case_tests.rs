//! Edge cases: boundaries, large values, genre spelling and shared use
//! across threads.

#![cfg(feature = "statement")]

use std::thread;

use playbill::core::*;
use playbill::statement::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn one_play(kind: &str, audience: u32) -> (Invoice, Catalog) {
    let catalog = CatalogBuilder::new().play("p", "Play", kind).build();
    let invoice = InvoiceBuilder::new("EdgeCo").add_performance("p", audience).build();
    (invoice, catalog)
}

// ---------------------------------------------------------------------------
// Threshold boundaries
// ---------------------------------------------------------------------------

#[test]
fn tragedy_threshold_boundary() {
    let config = PricingConfig::default();
    assert_eq!(compute_amount(Genre::Tragedy, 30, &config).unwrap(), 40_000);
    assert_eq!(compute_amount(Genre::Tragedy, 31, &config).unwrap(), 41_000);
    assert_eq!(compute_volume_credits(Genre::Tragedy, 30, &config), 0);
    assert_eq!(compute_volume_credits(Genre::Tragedy, 31, &config), 1);
}

#[test]
fn comedy_threshold_boundary() {
    let config = PricingConfig::default();
    assert_eq!(compute_amount(Genre::Comedy, 20, &config).unwrap(), 36_000);
    // The flat surcharge kicks in at the first seat over the threshold.
    assert_eq!(compute_amount(Genre::Comedy, 21, &config).unwrap(), 46_800);
}

#[test]
fn zero_audience() {
    let (invoice, catalog) = one_play("comedy", 0);
    let data = calculate(&invoice, &catalog, &PricingConfig::default()).unwrap();
    assert_eq!(data.lines[0].amount, 30_000);
    assert_eq!(data.total_credits, 0);
    assert!(render(&invoice, &catalog).unwrap().contains("(0 seats)"));
}

#[test]
fn maximum_audience_does_not_overflow() {
    let config = PricingConfig::default();
    let amount = compute_amount(Genre::Tragedy, u32::MAX, &config).unwrap();
    assert_eq!(amount, 40_000 + 1_000 * (i64::from(u32::MAX) - 30));
    let credits = compute_volume_credits(Genre::Comedy, u32::MAX, &config);
    assert_eq!(credits, u64::from(u32::MAX - 30) + u64::from(u32::MAX / 5));
}

#[test]
fn oversized_tariff_fails_instead_of_wrapping() {
    let config = PricingConfigBuilder::new()
        .tragedy(40_000, 30, i64::MAX / 1_000)
        .build()
        .unwrap();
    let (invoice, catalog) = one_play("tragedy", 10_000);
    let err = render_with(&invoice, &catalog, &config, &UsdFormatter).unwrap_err();
    assert!(matches!(err, StatementError::Arithmetic(_)));
    assert_eq!(err.offending_value(), None);
}

#[test]
fn total_overflow_fails_instead_of_wrapping() {
    let config = PricingConfigBuilder::new()
        .tragedy(i64::MAX / 2, 30, 0)
        .build()
        .unwrap();
    let catalog = CatalogBuilder::new().play("hamlet", "Hamlet", "tragedy").build();
    let invoice = InvoiceBuilder::new("BulkCo")
        .add_performance("hamlet", 10)
        .add_performance("hamlet", 10)
        .add_performance("hamlet", 10)
        .build();
    assert!(matches!(
        calculate(&invoice, &catalog, &config),
        Err(StatementError::Arithmetic(_))
    ));
}

#[test]
fn many_performances_sum_exactly() {
    let catalog = CatalogBuilder::new().play("hamlet", "Hamlet", "tragedy").build();
    let invoice = (0..1_000)
        .fold(InvoiceBuilder::new("BulkCo"), |b, _| {
            b.add_performance("hamlet", 1_000)
        })
        .build();
    let data = calculate(&invoice, &catalog, &PricingConfig::default()).unwrap();
    assert_eq!(data.total_credits, 970 * 1_000);
    assert_eq!(data.total_amount, 1_010_000 * 1_000);
}

// ---------------------------------------------------------------------------
// Genre spelling
// ---------------------------------------------------------------------------

#[test]
fn genre_is_case_sensitive() {
    for kind in ["Tragedy", "COMEDY", "tragedy ", ""] {
        let (invoice, catalog) = one_play(kind, 10);
        assert_eq!(
            render(&invoice, &catalog),
            Err(StatementError::UnknownGenre(kind.to_string())),
            "genre {kind:?} should be rejected"
        );
    }
}

#[test]
fn unknown_genre_in_unused_play_is_harmless() {
    let catalog = CatalogBuilder::new()
        .play("hamlet", "Hamlet", "tragedy")
        .play("henry-v", "Henry V", "history")
        .build();
    let invoice = InvoiceBuilder::new("BigCo").add_performance("hamlet", 55).build();
    assert!(render(&invoice, &catalog).is_ok());
}

#[test]
fn customer_and_play_names_printed_verbatim() {
    let catalog = CatalogBuilder::new()
        .play("cyrano", "Cyrano de Bergerac: Acte V", "comedy")
        .build();
    let invoice = InvoiceBuilder::new("Théâtre & Co.")
        .add_performance("cyrano", 20)
        .build();
    let text = render(&invoice, &catalog).unwrap();
    assert!(text.starts_with("Statement for Théâtre & Co.\n"));
    assert!(text.contains("  Cyrano de Bergerac: Acte V: $360.00 (20 seats)\n"));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn invoices_render_in_parallel() {
    let catalog = CatalogBuilder::new()
        .play("hamlet", "Hamlet", "tragedy")
        .play("as-like", "As You Like It", "comedy")
        .build();

    let statements: Vec<String> = thread::scope(|s| {
        let handles: Vec<_> = (0..8u32)
            .map(|i| {
                let catalog = &catalog;
                s.spawn(move || {
                    let invoice = InvoiceBuilder::new(format!("Customer {i}"))
                        .add_performance("hamlet", 30 + i)
                        .build();
                    render(&invoice, catalog)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect()
    });

    for (i, text) in statements.iter().enumerate() {
        assert!(text.starts_with(&format!("Statement for Customer {i}\n")));
        assert!(text.contains(&format!("You earned {i} credits\n")));
    }
}

#[test]
fn printer_is_shareable_across_threads() {
    let (invoice, catalog) = one_play("tragedy", 55);
    let printer = StatementPrinter::new(&invoice, &catalog);
    let expected = printer.statement().unwrap();
    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(printer.statement().unwrap(), expected));
        }
    });
}
