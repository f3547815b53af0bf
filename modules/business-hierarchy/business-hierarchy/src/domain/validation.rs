//! Field-level rules that need no storage access.
//!
//! Each `check_*` function normalizes an input and evaluates, per field and in
//! order: presence, maximum length, then format. The first failure of a field
//! is recorded and the field is left out of the returned candidate, so the
//! storage-backed rules (parent existence, uniqueness) only run on fields that
//! already passed. Failures accumulate across fields.
//!
//! Emails are compared case-insensitively, so they are stored lowercased.

use std::sync::LazyLock;

use business_hierarchy_sdk::{
    BrandInput, CollaboratorInput, EconomicGroupInput, FieldErrors, NewBrand, NewCollaborator,
    NewEconomicGroup, NewUnit, UnitInput, fields,
};
use regex::Regex;

use super::normalize;

pub const MAX_TEXT_LEN: usize = 255;
pub const ORGANIZATION_TAX_ID_LEN: usize = 14;
pub const PERSONAL_TAX_ID_LEN: usize = 11;

#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("literal email pattern compiles")
});

/// Human label of a field key, as used in messages.
#[must_use]
pub fn label(field: &str) -> &str {
    match field {
        fields::ECONOMIC_GROUP_ID => "economic group",
        fields::TRADE_NAME => "trade name",
        fields::LEGAL_NAME => "legal name",
        fields::TAX_ID => "tax id",
        fields::BRAND_ID => "brand",
        fields::PERSONAL_TAX_ID => "personal tax id",
        fields::UNIT_ID => "unit",
        other => other,
    }
}

#[must_use]
pub fn already_taken(field: &str) -> String {
    format!("The {} has already been taken.", label(field))
}

#[must_use]
pub fn invalid_reference(field: &str) -> String {
    format!("The selected {} is invalid.", label(field))
}

struct Rules {
    errors: FieldErrors,
}

impl Rules {
    fn new() -> Self {
        Self {
            errors: FieldErrors::new(),
        }
    }

    fn text(&mut self, field: &str, raw: Option<&str>) -> Option<String> {
        let label = label(field);
        let Some(value) = normalize::text(raw) else {
            self.errors
                .add(field, format!("The {label} field is required."));
            return None;
        };
        if value.chars().count() > MAX_TEXT_LEN {
            self.errors.add(
                field,
                format!("The {label} may not be greater than {MAX_TEXT_LEN} characters."),
            );
            return None;
        }
        Some(value)
    }

    fn tax_id(&mut self, field: &str, raw: Option<&str>, len: usize) -> Option<String> {
        let label = label(field);
        let Some(value) = normalize::tax_id(raw) else {
            self.errors.add(field, format!("The {label} is required."));
            return None;
        };
        if value.len() != len {
            self.errors
                .add(field, format!("The {label} must have exactly {len} digits."));
            return None;
        }
        Some(value)
    }

    fn email(&mut self, field: &str, raw: Option<&str>) -> Option<String> {
        let value = self.text(field, raw)?.to_lowercase();
        if !EMAIL_RE.is_match(&value) {
            self.errors.add(field, "The email is invalid.");
            return None;
        }
        Some(value)
    }

    fn reference(&mut self, field: &str, raw: Option<i32>) -> Option<i32> {
        match raw {
            None => {
                self.errors
                    .add(field, format!("The {} is required.", label(field)));
                None
            }
            Some(id) if id <= 0 => {
                self.errors.add(field, invalid_reference(field));
                None
            }
            Some(id) => Some(id),
        }
    }
}

/// Economic group fields that passed the stateless rules.
#[derive(Debug, Clone, Default)]
pub struct EconomicGroupCandidate {
    pub name: Option<String>,
}

impl EconomicGroupCandidate {
    #[must_use]
    pub fn into_draft(self) -> Option<NewEconomicGroup> {
        Some(NewEconomicGroup { name: self.name? })
    }
}

#[derive(Debug, Clone, Default)]
pub struct BrandCandidate {
    pub name: Option<String>,
    pub economic_group_id: Option<i32>,
}

impl BrandCandidate {
    #[must_use]
    pub fn into_draft(self) -> Option<NewBrand> {
        Some(NewBrand {
            name: self.name?,
            economic_group_id: self.economic_group_id?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UnitCandidate {
    pub trade_name: Option<String>,
    pub legal_name: Option<String>,
    pub tax_id: Option<String>,
    pub brand_id: Option<i32>,
}

impl UnitCandidate {
    #[must_use]
    pub fn into_draft(self) -> Option<NewUnit> {
        Some(NewUnit {
            trade_name: self.trade_name?,
            legal_name: self.legal_name?,
            tax_id: self.tax_id?,
            brand_id: self.brand_id?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct CollaboratorCandidate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub personal_tax_id: Option<String>,
    pub unit_id: Option<i32>,
}

impl CollaboratorCandidate {
    #[must_use]
    pub fn into_draft(self) -> Option<NewCollaborator> {
        Some(NewCollaborator {
            name: self.name?,
            email: self.email?,
            personal_tax_id: self.personal_tax_id?,
            unit_id: self.unit_id?,
        })
    }
}

#[must_use]
pub fn check_economic_group(input: &EconomicGroupInput) -> (EconomicGroupCandidate, FieldErrors) {
    let mut rules = Rules::new();
    let candidate = EconomicGroupCandidate {
        name: rules.text(fields::NAME, input.name.as_deref()),
    };
    (candidate, rules.errors)
}

#[must_use]
pub fn check_brand(input: &BrandInput) -> (BrandCandidate, FieldErrors) {
    let mut rules = Rules::new();
    let candidate = BrandCandidate {
        name: rules.text(fields::NAME, input.name.as_deref()),
        economic_group_id: rules.reference(fields::ECONOMIC_GROUP_ID, input.economic_group_id),
    };
    (candidate, rules.errors)
}

#[must_use]
pub fn check_unit(input: &UnitInput) -> (UnitCandidate, FieldErrors) {
    let mut rules = Rules::new();
    let candidate = UnitCandidate {
        trade_name: rules.text(fields::TRADE_NAME, input.trade_name.as_deref()),
        legal_name: rules.text(fields::LEGAL_NAME, input.legal_name.as_deref()),
        tax_id: rules.tax_id(fields::TAX_ID, input.tax_id.as_deref(), ORGANIZATION_TAX_ID_LEN),
        brand_id: rules.reference(fields::BRAND_ID, input.brand_id),
    };
    (candidate, rules.errors)
}

#[must_use]
pub fn check_collaborator(input: &CollaboratorInput) -> (CollaboratorCandidate, FieldErrors) {
    let mut rules = Rules::new();
    let candidate = CollaboratorCandidate {
        name: rules.text(fields::NAME, input.name.as_deref()),
        email: rules.email(fields::EMAIL, input.email.as_deref()),
        personal_tax_id: rules.tax_id(
            fields::PERSONAL_TAX_ID,
            input.personal_tax_id.as_deref(),
            PERSONAL_TAX_ID_LEN,
        ),
        unit_id: rules.reference(fields::UNIT_ID, input.unit_id),
    };
    (candidate, rules.errors)
}
