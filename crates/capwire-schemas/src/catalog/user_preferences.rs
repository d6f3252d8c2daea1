//! `user_preferences_set` skill schemas
//!
//! Consent gates everything else: `userDataConsent` is the one required
//! preference field, and its value determines how merchants may use the
//! rest.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::json;

use crate::schema::{
    CrossFieldRule, FieldKind, FieldSpec, RuleCheck, Schema, SchemaError, StringFormat,
};

/// Consent levels; `absent` is the implicit default before any consent
pub const CONSENT_LEVELS: &[&str] = &["absent", "none", "all"];

/// Preferred contact channels
pub const CONTACT_METHODS: &[&str] = &["email", "sms", "phone", "none"];

fn locale_preferences() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("language").format(StringFormat::LanguageTag))
        .field(FieldSpec::string("country").format(StringFormat::CountryCode))
        .field(FieldSpec::string("currency").format(StringFormat::Currency))
        .field(FieldSpec::string("timezone"))
        .build()
}

fn shopping_preferences() -> Result<Schema, SchemaError> {
    let price_range = Schema::builder()
        .field(FieldSpec::number("min").min(0.0))
        .field(FieldSpec::number("max").min(0.0))
        .field(FieldSpec::string("currency").format(StringFormat::Currency))
        .rule(CrossFieldRule::new(
            "price_range_ordered",
            RuleCheck::LessOrEqual { lo: "min", hi: "max" },
        ))
        .build()?;

    Schema::builder()
        .field(FieldSpec::array(
            "categories",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::array("brands", FieldSpec::elem(FieldKind::String)))
        .field(FieldSpec::object("priceRange", price_range))
        .field(FieldSpec::string_map("sizes"))
        .field(FieldSpec::array("colors", FieldSpec::elem(FieldKind::String)))
        .field(FieldSpec::array("styles", FieldSpec::elem(FieldKind::String)))
        .field(FieldSpec::array(
            "features",
            FieldSpec::elem(FieldKind::String),
        ))
        .build()
}

fn accessibility_preferences() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::boolean("screenReader"))
        .field(FieldSpec::boolean("highContrast"))
        .field(FieldSpec::boolean("largeText"))
        .field(FieldSpec::boolean("reducedMotion"))
        .field(FieldSpec::boolean("audioDescription"))
        .build()
}

fn communication_preferences() -> Result<Schema, SchemaError> {
    let email = Schema::builder()
        .field(FieldSpec::boolean("marketing"))
        .field(FieldSpec::boolean("orderUpdates"))
        .field(FieldSpec::boolean("recommendations"))
        .field(FieldSpec::boolean("newsletters"))
        .build()?;
    let sms = Schema::builder()
        .field(FieldSpec::boolean("orderUpdates"))
        .field(FieldSpec::boolean("deliveryNotifications"))
        .field(FieldSpec::boolean("promotions"))
        .build()?;
    Schema::builder()
        .field(FieldSpec::string("language").format(StringFormat::LanguageTag))
        .field(FieldSpec::object("email", email))
        .field(FieldSpec::object("sms", sms))
        .field(FieldSpec::enumeration("preferredMethod", CONTACT_METHODS))
        .build()
}

/// The preferences container; `require_consent` distinguishes the request
/// shape (consent mandatory) from the echoed current state (partial)
fn user_preferences(require_consent: bool) -> Result<Schema, SchemaError> {
    let consent = FieldSpec::enumeration("userDataConsent", CONSENT_LEVELS);
    Schema::builder()
        .field(if require_consent { consent.required() } else { consent })
        .field(FieldSpec::object("locale", locale_preferences()?))
        .field(FieldSpec::object("shopping", shopping_preferences()?))
        .field(FieldSpec::object("accessibility", accessibility_preferences()?))
        .field(FieldSpec::object("communication", communication_preferences()?))
        .field(FieldSpec::map("custom"))
        .build()
}

/// Input schema: preferences plus replace/clear switches
pub fn input_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::object("preferences", user_preferences(true)?).required())
        .field(FieldSpec::boolean("replaceAll").default_value(json!(false)))
        .field(FieldSpec::boolean("clearAll").default_value(json!(false)))
        .build()
}

/// Output schema: update result, echoed state, and retention context
pub fn output_schema() -> Result<Schema, SchemaError> {
    let failed_field = Schema::builder()
        .field(FieldSpec::string("field").required())
        .field(FieldSpec::string("reason").required())
        .build()?;

    let operation = Schema::builder()
        .field(FieldSpec::boolean("success").required())
        .field(FieldSpec::string("error"))
        .field(FieldSpec::string("errorCode"))
        .field(FieldSpec::array(
            "updatedFields",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::array(
            "failedFields",
            FieldSpec::elem(FieldKind::Object(Box::new(failed_field))),
        ))
        .build()?;

    let retention_policy = Schema::builder()
        .field(FieldSpec::string("description").required())
        .field(FieldSpec::string("expiresAt").format(StringFormat::Timestamp))
        .build()?;

    let context = Schema::builder()
        .field(FieldSpec::boolean("isNewContext").required())
        .field(
            FieldSpec::string("timestamp")
                .required()
                .format(StringFormat::Timestamp),
        )
        .field(FieldSpec::object("retentionPolicy", retention_policy))
        .field(FieldSpec::array(
            "appliedPolicies",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::array(
            "warnings",
            FieldSpec::elem(FieldKind::String),
        ))
        .build()?;

    let custom_field = Schema::builder()
        .field(FieldSpec::string("key").required())
        .field(FieldSpec::string("type").required())
        .field(FieldSpec::string("description").required())
        .field(FieldSpec::boolean("required"))
        .build()?;

    let available_options = Schema::builder()
        .field(FieldSpec::array(
            "languages",
            FieldSpec::elem(FieldKind::String).format(StringFormat::LanguageTag),
        ))
        .field(FieldSpec::array(
            "countries",
            FieldSpec::elem(FieldKind::String).format(StringFormat::CountryCode),
        ))
        .field(FieldSpec::array(
            "currencies",
            FieldSpec::elem(FieldKind::String).format(StringFormat::Currency),
        ))
        .field(FieldSpec::array(
            "categories",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::array(
            "customFields",
            FieldSpec::elem(FieldKind::Object(Box::new(custom_field))),
        ))
        .build()?;

    Schema::builder()
        .field(FieldSpec::object("operation", operation).required())
        .field(FieldSpec::object("currentPreferences", user_preferences(false)?))
        .field(FieldSpec::object("context", context).required())
        .field(FieldSpec::object("availableOptions", available_options))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, ViolationKind};
    use serde_json::json;

    #[test]
    fn test_consent_is_mandatory_on_input() {
        let schema = input_schema().unwrap();
        let failure = validate(&schema, &json!({"preferences": {}})).unwrap_err();
        assert_eq!(failure.violations[0].path, "preferences.userDataConsent");
        assert_eq!(failure.violations[0].kind, ViolationKind::Required);
    }

    #[test]
    fn test_full_preferences_accepted() {
        let schema = input_schema().unwrap();
        let payload = json!({
            "preferences": {
                "userDataConsent": "all",
                "locale": {"language": "en-US", "country": "US", "currency": "USD"},
                "shopping": {
                    "categories": ["electronics"],
                    "priceRange": {"min": 50, "max": 500, "currency": "USD"},
                    "sizes": {"shoes": "42"},
                },
                "communication": {"preferredMethod": "email", "email": {"marketing": false}},
                "custom": {"theme": "dark"},
            },
        });
        let normalized = validate(&schema, &payload).unwrap();
        assert_eq!(normalized["replaceAll"], json!(false));
        assert_eq!(normalized["clearAll"], json!(false));
    }

    #[test]
    fn test_price_range_must_be_ordered() {
        let schema = input_schema().unwrap();
        let payload = json!({
            "preferences": {
                "userDataConsent": "all",
                "shopping": {"priceRange": {"min": 900, "max": 100}},
            },
        });
        let failure = validate(&schema, &payload).unwrap_err();
        assert_eq!(failure.violations[0].path, "preferences.shopping.priceRange.min");
        assert!(failure.violations[0].message.contains("price_range_ordered"));
    }

    #[test]
    fn test_invalid_locale_shapes() {
        let schema = input_schema().unwrap();
        let payload = json!({
            "preferences": {
                "userDataConsent": "all",
                "locale": {"language": "en_US", "country": "usa"},
            },
        });
        let failure = validate(&schema, &payload).unwrap_err();
        let paths: Vec<_> = failure.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["preferences.locale.language", "preferences.locale.country"]
        );
    }

    #[test]
    fn test_output_echo_allows_partial_preferences() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "operation": {"success": true, "updatedFields": ["locale"]},
            "currentPreferences": {"locale": {"language": "en-US"}},
            "context": {"isNewContext": true, "timestamp": "2025-06-01T12:00:00Z"},
        });
        assert!(validate(&schema, &payload).is_ok());
    }
}
