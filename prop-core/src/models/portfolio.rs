use super::PropertyInput;

/// The ordered collection of properties for one user session.
///
/// Owned by the caller, never by the analysis engine. Append-only:
/// properties are added at the end and are neither edited nor removed, and
/// there is no uniqueness constraint, so two identical submissions are two
/// independent entries. A multi-session deployment gets its isolation by
/// keeping one `Portfolio` per session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Portfolio {
    properties: Vec<PropertyInput>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a property at the end of the collection.
    pub fn add(&mut self, property: PropertyInput) {
        self.properties.push(property);
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The properties in insertion order.
    pub fn properties(&self) -> &[PropertyInput] {
        &self.properties
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PropertyInput> {
        self.properties.iter()
    }
}

impl FromIterator<PropertyInput> for Portfolio {
    fn from_iter<I: IntoIterator<Item = PropertyInput>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn named(name: &str) -> PropertyInput {
        PropertyInput {
            name: name.to_string(),
            address: "123 Main St".to_string(),
            zip_code: "12345".to_string(),
            image_url: None,
            square_footage: dec!(1500),
            purchase_price: dec!(200000),
            down_payment: dec!(40000),
            interest_rate_percent: dec!(6.5),
            loan_term_years: 30,
            annual_property_tax: dec!(3600),
            annual_insurance: dec!(1200),
            monthly_maintenance: dec!(150),
            vacancy_rate: dec!(0.05),
            expected_monthly_rent: dec!(1800),
            annual_appreciation_percent: dec!(3.0),
            hold_period_years: dec!(5),
            rehab_cost: dec!(30000),
            target_resale_price: dec!(275000),
        }
    }

    #[test]
    fn new_portfolio_is_empty() {
        let portfolio = Portfolio::new();

        assert!(portfolio.is_empty());
        assert_eq!(portfolio.len(), 0);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut portfolio = Portfolio::new();
        portfolio.add(named("First"));
        portfolio.add(named("Second"));
        portfolio.add(named("Third"));

        let names: Vec<&str> = portfolio.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn duplicates_are_kept_as_independent_entries() {
        let mut portfolio = Portfolio::new();
        portfolio.add(named("Twin"));
        portfolio.add(named("Twin"));

        assert_eq!(portfolio.len(), 2);
        assert_eq!(portfolio.properties()[0], portfolio.properties()[1]);
    }
}
