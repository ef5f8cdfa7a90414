//! Customer data strategy: derives the text lines for each field

use crate::field::FieldId;
use rust_decimal::{Decimal, RoundingStrategy};
use shared_types::{Address, ContactType, Person, Proposition};

/// Average number of days in a month, used to express franchise terms in months
pub const AVERAGE_DAYS_OF_MONTH: f64 = 30.44;

/// Text written into a slot whose source value is missing
pub const PLACEHOLDER: &str = " ";

/// Resolves field identifiers against one person and one proposition.
///
/// Construction looks up the active address and tokenizes the proposition
/// name once; every `process` call after that is a pure lookup.
#[derive(Debug, Clone)]
pub struct CustomerDataStrategy<'a> {
    person: &'a Person,
    proposition: &'a Proposition,
    address: Option<&'a Address>,
    name_tokens: Vec<&'a str>,
}

impl<'a> CustomerDataStrategy<'a> {
    pub fn new(person: &'a Person, proposition: &'a Proposition) -> Self {
        let name_tokens = proposition
            .proposition_name
            .as_deref()
            .map(|name| name.split_whitespace().collect())
            .unwrap_or_default();

        Self {
            person,
            proposition,
            address: person.active_address(),
            name_tokens,
        }
    }

    /// Lines for a template item id. Unknown ids yield no lines.
    pub fn process(&self, id: &str) -> Vec<String> {
        match FieldId::from_identifier(id) {
            Some(field) => self.resolve_field(field),
            None => Vec::new(),
        }
    }

    /// Lines for a known field; always at least one entry
    pub fn resolve_field(&self, field: FieldId) -> Vec<String> {
        match field {
            FieldId::ProductName => vec![or_placeholder(
                self.proposition.proposition_name.as_deref(),
            )],
            FieldId::FullName => vec![or_placeholder(self.person.full_name.as_deref())],
            FieldId::FirstName => vec![or_placeholder(self.person.first_name.as_deref())],
            FieldId::Surname => vec![or_placeholder(self.person.surname.as_deref())],
            FieldId::Address => vec![
                self.address_part(|a| a.line1.as_deref()),
                self.address_part(|a| a.line2.as_deref()),
                self.address_part(|a| a.town.as_deref()),
                self.address_part(|a| a.postcode.as_deref()),
            ],
            FieldId::Email => vec![or_placeholder(
                self.person.active_contact(ContactType::Email),
            )],
            FieldId::Line1 => vec![self.address_part(|a| a.line1.as_deref())],
            FieldId::Line2 => vec![self.address_part(|a| a.line2.as_deref())],
            FieldId::City => vec![self.address_part(|a| a.town.as_deref())],
            FieldId::Postcode => vec![self.address_part(|a| a.postcode.as_deref())],
            FieldId::VehicleDescription => vec![self.vehicle_description()],
            FieldId::CurrentFranchise => vec![self.current_franchise()],
            FieldId::TermOf => vec![self.term_of()],
            FieldId::WeeklyFranchiseFee => vec![self
                .proposition
                .price_ex_vat
                .map(|price| price.to_string())
                .unwrap_or_else(placeholder)],
            FieldId::FranchiseFeeVat => vec![self
                .priced_with_vat()
                .map(|(price, rate)| format_currency(price * rate))
                .unwrap_or_else(placeholder)],
            FieldId::WeeklyFranchiseFeeTotal => vec![self
                .priced_with_vat()
                .map(|(price, rate)| format_currency(price + price * rate))
                .unwrap_or_else(placeholder)],
        }
    }

    fn address_part(&self, part: impl Fn(&'a Address) -> Option<&'a str>) -> String {
        or_placeholder(self.address.and_then(part))
    }

    /// Proposition names look like "CCC 24m Full B Automatic [2024.09] 24m";
    /// the vehicle is everything between the first two and the last two tokens.
    fn vehicle_description(&self) -> String {
        let tokens = &self.name_tokens;
        if tokens.len() <= 4 {
            return placeholder();
        }
        tokens[2..tokens.len() - 2].join(" ")
    }

    fn current_franchise(&self) -> String {
        let is_trainee = self.name_tokens.get(1) == Some(&"Trainee");
        match self.proposition.brand_description() {
            Some(brand) if is_trainee && !brand.is_empty() => format!(
                "if You have a {} Trainee Franchise, the Provisional Period and then",
                brand
            ),
            _ => placeholder(),
        }
    }

    fn term_of(&self) -> String {
        match self.proposition.fran_term_days {
            Some(days) if days > 0.0 => days_to_months(days).to_string(),
            _ => placeholder(),
        }
    }

    /// Price and VAT rate, when both are present and non-zero
    fn priced_with_vat(&self) -> Option<(f64, f64)> {
        let price = self.proposition.price_ex_vat.filter(|p| *p != 0.0)?;
        let rate = self.proposition.vat_rate().filter(|r| *r != 0.0)?;
        Some((price, rate))
    }
}

/// Resolve one field id without keeping a strategy around
pub fn resolve(id: &str, person: &Person, proposition: &Proposition) -> Vec<String> {
    CustomerDataStrategy::new(person, proposition).process(id)
}

/// Convert a term in days to whole months, halves rounding away from zero
pub fn days_to_months(days: f64) -> i64 {
    (days / AVERAGE_DAYS_OF_MONTH).round() as i64
}

/// Two-decimal currency formatting, regardless of magnitude.
///
/// Rounds the exact binary value of `amount`, so a true half cent
/// (`5.125`) goes up to `5.13` while `1.005`, stored just below the
/// half, stays at `1.00`.
pub fn format_currency(amount: f64) -> String {
    match Decimal::from_f64_retain(amount) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", amount),
    }
}

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AdminVat, Brand, ContactDetail};

    fn sample_person() -> Person {
        Person {
            full_name: Some("Mrs White Vasquez".to_string()),
            first_name: Some("White".to_string()),
            surname: Some("Vasquez".to_string()),
            addresses: vec![
                Address {
                    line1: Some("1 Old Road".to_string()),
                    active: false,
                    ..Default::default()
                },
                Address {
                    line1: Some("00 Uplands Avenue".to_string()),
                    line2: None,
                    town: Some("STOCKPORT".to_string()),
                    postcode: Some("SK00 0ZZ".to_string()),
                    active: true,
                },
            ],
            contact_details: vec![ContactDetail {
                contact_type: ContactType::Email,
                value: Some("test@test.com".to_string()),
                active: true,
            }],
        }
    }

    fn sample_proposition() -> Proposition {
        Proposition {
            proposition_name: Some("CCC 24m Full B Automatic [2024.09] 24m".to_string()),
            price_ex_vat: Some(182.5),
            fran_admin_vat: Some(AdminVat { vat: Some(0.2) }),
            fran_term_days: Some(731.0),
            brand: Some(Brand {
                item_description: Some("BSM".to_string()),
            }),
        }
    }

    #[test]
    fn test_person_fields() {
        let person = sample_person();
        let proposition = sample_proposition();
        let strategy = CustomerDataStrategy::new(&person, &proposition);

        assert_eq!(strategy.process("FullName"), vec!["Mrs White Vasquez"]);
        assert_eq!(strategy.process("FirstName"), vec!["White"]);
        assert_eq!(strategy.process("Surname"), vec!["Vasquez"]);
        assert_eq!(strategy.process("Email"), vec!["test@test.com"]);
        assert_eq!(
            strategy.process("ProductName"),
            vec!["CCC 24m Full B Automatic [2024.09] 24m"]
        );
    }

    #[test]
    fn test_address_uses_active_record_and_defaults_each_part() {
        let person = sample_person();
        let proposition = sample_proposition();
        let strategy = CustomerDataStrategy::new(&person, &proposition);

        assert_eq!(
            strategy.process("Address"),
            vec!["00 Uplands Avenue", " ", "STOCKPORT", "SK00 0ZZ"]
        );
        assert_eq!(strategy.process("Line1"), vec!["00 Uplands Avenue"]);
        assert_eq!(strategy.process("Line2"), vec![" "]);
        assert_eq!(strategy.process("City"), vec!["STOCKPORT"]);
        assert_eq!(strategy.process("Postcode"), vec!["SK00 0ZZ"]);
    }

    #[test]
    fn test_vehicle_description_slices_proposition_name() {
        let person = sample_person();
        let proposition = sample_proposition();
        let strategy = CustomerDataStrategy::new(&person, &proposition);

        assert_eq!(strategy.process("VehicleDescription"), vec!["Full B Automatic"]);
        assert_eq!(
            strategy.process("DescriptionOfTuitionVehicle"),
            vec!["Full B Automatic"]
        );
    }

    #[test]
    fn test_vehicle_description_short_names() {
        let person = Person::default();
        for name in ["", "CCC", "CCC 24m Full", "CCC 24m Full 24m"] {
            let proposition = Proposition {
                proposition_name: Some(name.to_string()),
                ..Default::default()
            };
            assert_eq!(
                resolve("VehicleDescription", &person, &proposition),
                vec![" "],
                "name {:?}",
                name
            );
        }

        let proposition = Proposition {
            proposition_name: Some("CCC 24m Manual [2024.09] 24m".to_string()),
            ..Default::default()
        };
        assert_eq!(
            resolve("VehicleDescription", &person, &proposition),
            vec!["Manual"]
        );
    }

    #[test]
    fn test_current_franchise_requires_trainee_and_brand() {
        let person = Person::default();
        let mut proposition = Proposition {
            proposition_name: Some("CCC Trainee Full B Manual [2024.09] 12m".to_string()),
            brand: Some(Brand {
                item_description: Some("AA".to_string()),
            }),
            ..Default::default()
        };
        assert_eq!(
            resolve("CurrentAABSMFranchise", &person, &proposition),
            vec!["if You have a AA Trainee Franchise, the Provisional Period and then"]
        );
        assert_eq!(
            resolve("Duration of hire", &person, &proposition),
            resolve("CurrentAABSMFranchise", &person, &proposition)
        );

        proposition.brand = None;
        assert_eq!(resolve("CurrentAABSMFranchise", &person, &proposition), vec![" "]);

        let proposition = sample_proposition();
        assert_eq!(resolve("CurrentAABSMFranchise", &person, &proposition), vec![" "]);
    }

    #[test]
    fn test_term_of_months() {
        let person = Person::default();
        let mut proposition = Proposition {
            fran_term_days: Some(365.0),
            ..Default::default()
        };
        assert_eq!(resolve("TermOf", &person, &proposition), vec!["12"]);

        proposition.fran_term_days = Some(731.0);
        assert_eq!(resolve("HireDuration", &person, &proposition), vec!["24"]);

        proposition.fran_term_days = Some(0.0);
        assert_eq!(resolve("TermOf", &person, &proposition), vec![" "]);

        proposition.fran_term_days = None;
        assert_eq!(resolve("TermOf", &person, &proposition), vec![" "]);
    }

    #[test]
    fn test_days_to_months_rounding() {
        assert_eq!(days_to_months(15.0), 0);
        assert_eq!(days_to_months(16.0), 1);
        assert_eq!(days_to_months(365.0), 12);
        assert_eq!(days_to_months(731.0), 24);
        assert_eq!(days_to_months(1096.0), 36);
        assert_eq!(days_to_months(365.25), 12);
    }

    #[test]
    fn test_fractional_and_negative_terms() {
        let person = Person::default();
        let proposition: Proposition =
            serde_json::from_str(r#"{"franTermDays": 365.0}"#).unwrap();
        assert_eq!(resolve("TermOf", &person, &proposition), vec!["12"]);

        let proposition = Proposition {
            fran_term_days: Some(-30.0),
            ..Default::default()
        };
        assert_eq!(resolve("TermOf", &person, &proposition), vec![" "]);
    }

    #[test]
    fn test_format_currency_half_cents_round_up() {
        assert_eq!(format_currency(5.125), "5.13");
        assert_eq!(format_currency(15.375), "15.38");
        assert_eq!(format_currency(0.125), "0.13");
        // 1.005 is stored just below the half cent
        assert_eq!(format_currency(1.005), "1.00");
        assert_eq!(format_currency(36.5), "36.50");
        assert_eq!(format_currency(219.0), "219.00");
    }

    #[test]
    fn test_vat_and_total_on_half_cent_ties() {
        let person = Person::default();
        let cases = [
            (22.5, 0.05, "1.13", "23.63"),
            (10.25, 0.5, "5.13", "15.38"),
            (2.5, 0.05, "0.13", "2.63"),
        ];
        for (price, rate, vat, total) in cases {
            let proposition = Proposition {
                price_ex_vat: Some(price),
                fran_admin_vat: Some(AdminVat { vat: Some(rate) }),
                ..Default::default()
            };
            assert_eq!(
                resolve("WeeklyFranchiseFeeVAT", &person, &proposition),
                vec![vat],
                "vat for {} @ {}",
                price,
                rate
            );
            assert_eq!(
                resolve("WeeklyFranchiseFeeTotal", &person, &proposition),
                vec![total],
                "total for {} @ {}",
                price,
                rate
            );
        }
    }

    #[test]
    fn test_fee_vat_and_total() {
        let person = sample_person();
        let proposition = sample_proposition();
        let strategy = CustomerDataStrategy::new(&person, &proposition);

        for id in FieldId::WeeklyFranchiseFee.aliases() {
            assert_eq!(strategy.process(id), vec!["182.5"]);
        }
        for id in FieldId::FranchiseFeeVat.aliases() {
            assert_eq!(strategy.process(id), vec!["36.50"]);
        }
        for id in FieldId::WeeklyFranchiseFeeTotal.aliases() {
            assert_eq!(strategy.process(id), vec!["219.00"]);
        }
    }

    #[test]
    fn test_whole_price_formats_without_decimals() {
        let proposition = Proposition {
            price_ex_vat: Some(180.0),
            fran_admin_vat: Some(AdminVat { vat: Some(0.2) }),
            ..Default::default()
        };
        let person = Person::default();
        assert_eq!(resolve("WeeklyFranchiseFee", &person, &proposition), vec!["180"]);
        assert_eq!(resolve("WeeklyFranchiseFeeVAT", &person, &proposition), vec!["36.00"]);
        assert_eq!(
            resolve("WeeklyFranchiseFeeTotal", &person, &proposition),
            vec!["216.00"]
        );
    }

    #[test]
    fn test_vat_missing_operand_degrades() {
        let person = Person::default();
        let no_rate = Proposition {
            price_ex_vat: Some(182.5),
            fran_admin_vat: Some(AdminVat { vat: None }),
            ..Default::default()
        };
        assert_eq!(resolve("FirstWeeklyFranchiseFeeVAT", &person, &no_rate), vec![" "]);
        assert_eq!(resolve("FirstWeeklyFranchiseFeeTotal", &person, &no_rate), vec![" "]);
        assert_eq!(resolve("FirstWeeklyFranchiseFee", &person, &no_rate), vec!["182.5"]);

        let no_price = Proposition {
            fran_admin_vat: Some(AdminVat { vat: Some(0.2) }),
            ..Default::default()
        };
        assert_eq!(resolve("tWeeklyFranchiseFeeVat", &person, &no_price), vec![" "]);
        assert_eq!(resolve("tWeeklyFranchiseFeeAmount", &person, &no_price), vec![" "]);
    }

    #[test]
    fn test_empty_record_yields_placeholders() {
        let person = Person::default();
        let proposition = Proposition::default();
        let strategy = CustomerDataStrategy::new(&person, &proposition);

        for field in FieldId::ALL {
            let lines = strategy.resolve_field(field);
            assert_eq!(lines.len(), field.line_count());
            assert!(
                lines.iter().all(|l| l == PLACEHOLDER),
                "{} produced {:?}",
                field,
                lines
            );
        }
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let person = Person {
            full_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            resolve("SelfName", &person, &Proposition::default()),
            vec![" "]
        );
    }

    #[test]
    fn test_unknown_field_yields_nothing() {
        let person = sample_person();
        let proposition = sample_proposition();
        assert!(resolve("Signature", &person, &proposition).is_empty());
        assert!(resolve("", &person, &proposition).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::{AdminVat, Brand};

    fn arb_opt_text() -> impl Strategy<Value = Option<String>> {
        prop::option::of("[A-Za-z0-9\\[\\]\\. ]{0,40}")
    }

    fn arb_person() -> impl Strategy<Value = Person> {
        (
            arb_opt_text(),
            arb_opt_text(),
            arb_opt_text(),
            prop::collection::vec(
                (arb_opt_text(), arb_opt_text(), arb_opt_text(), arb_opt_text(), any::<bool>()),
                0..3,
            ),
        )
            .prop_map(|(full_name, first_name, surname, addresses)| Person {
                full_name,
                first_name,
                surname,
                addresses: addresses
                    .into_iter()
                    .map(|(line1, line2, town, postcode, active)| Address {
                        line1,
                        line2,
                        town,
                        postcode,
                        active,
                    })
                    .collect(),
                contact_details: Vec::new(),
            })
    }

    fn arb_proposition() -> impl Strategy<Value = Proposition> {
        (
            arb_opt_text(),
            prop::option::of(0.0f64..10_000.0),
            prop::option::of(prop::option::of(0.0f64..1.0)),
            prop::option::of(0.0f64..5000.0),
            prop::option::of(arb_opt_text()),
        )
            .prop_map(|(name, price, vat, days, brand)| Proposition {
                proposition_name: name,
                price_ex_vat: price,
                fran_admin_vat: vat.map(|vat| AdminVat { vat }),
                fran_term_days: days,
                brand: brand.map(|item_description| Brand { item_description }),
            })
    }

    proptest! {
        #[test]
        fn aliases_resolve_identically(person in arb_person(), proposition in arb_proposition()) {
            let strategy = CustomerDataStrategy::new(&person, &proposition);
            for field in FieldId::ALL {
                let expected = strategy.resolve_field(field);
                for alias in field.aliases() {
                    prop_assert_eq!(&strategy.process(alias), &expected);
                }
            }
        }

        #[test]
        fn resolved_lines_are_never_empty(person in arb_person(), proposition in arb_proposition()) {
            let strategy = CustomerDataStrategy::new(&person, &proposition);
            for field in FieldId::ALL {
                let lines = strategy.resolve_field(field);
                prop_assert_eq!(lines.len(), field.line_count());
                for line in lines {
                    prop_assert!(!line.is_empty());
                }
            }
        }

        #[test]
        fn total_is_fee_plus_vat(price in 0.01f64..10_000.0, rate in 0.01f64..0.5) {
            let proposition = Proposition {
                price_ex_vat: Some(price),
                fran_admin_vat: Some(AdminVat { vat: Some(rate) }),
                ..Default::default()
            };
            let person = Person::default();
            let vat: f64 = resolve("WeeklyFranchiseFeeVAT", &person, &proposition)[0].parse().unwrap();
            let total: f64 = resolve("WeeklyFranchiseFeeTotal", &person, &proposition)[0].parse().unwrap();
            // Each side is rounded to cents independently
            prop_assert!((total - (price + vat)).abs() <= 0.011);
        }
    }
}
