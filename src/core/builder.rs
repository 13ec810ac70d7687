use super::types::*;

/// Builder for constructing invoices.
///
/// ```
/// use playbill::core::*;
///
/// let invoice = InvoiceBuilder::new("BigCo")
///     .add_performance("hamlet", 55)
///     .add_performance("as-like", 35)
///     .build();
///
/// assert_eq!(invoice.performances.len(), 2);
/// assert_eq!(invoice.performances[1].play_id, "as-like");
/// ```
pub struct InvoiceBuilder {
    customer: String,
    performances: Vec<Performance>,
}

impl InvoiceBuilder {
    pub fn new(customer: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            performances: Vec::new(),
        }
    }

    /// Append a performance. Statement lines keep insertion order.
    pub fn add_performance(mut self, play_id: impl Into<String>, audience: u32) -> Self {
        self.performances.push(Performance::new(play_id, audience));
        self
    }

    pub fn performance(mut self, performance: Performance) -> Self {
        self.performances.push(performance);
        self
    }

    pub fn build(self) -> Invoice {
        Invoice {
            customer: self.customer,
            performances: self.performances,
        }
    }
}

/// Builder for a play catalog.
///
/// ```
/// use playbill::core::*;
///
/// let catalog = CatalogBuilder::new()
///     .play("hamlet", "Hamlet", "tragedy")
///     .play("as-like", "As You Like It", "comedy")
///     .build();
///
/// assert_eq!(catalog.play("hamlet").unwrap().name, "Hamlet");
/// ```
#[derive(Default)]
pub struct CatalogBuilder {
    catalog: Catalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(
        mut self,
        play_id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        self.catalog.insert(play_id, Play::new(name, kind));
        self
    }

    pub fn build(self) -> Catalog {
        self.catalog
    }
}
