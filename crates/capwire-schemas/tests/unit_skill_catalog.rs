//! Full-payload conformance tests for the CAP skill catalogue
//!
//! Each test drives a skill schema with a realistic, fully-populated
//! payload of the kind a production merchant agent exchanges, to catch
//! field-spec regressions that minimal payloads would miss.

use capwire_schemas::catalog::{
    self, cart_manage, order_status, product_get, product_search, user_preferences,
};
use capwire_schemas::validation::validate;
use serde_json::json;

#[test]
fn test_catalogue_is_exactly_the_five_cap_skills() {
    assert_eq!(
        catalog::SKILLS,
        [
            "product_search",
            "product_get",
            "cart_manage",
            "order_status",
            "user_preferences_set",
        ]
    );
}

#[test]
fn test_product_search_full_exchange() {
    let input = json!({
        "query": "mechanical keyboard",
        "queryMode": "phrase",
        "filter": "price < 200 AND switchType = 'tactile'",
        "offset": 20,
        "limit": 40,
    });
    validate(&product_search::input_schema().unwrap(), &input).unwrap();

    let output = json!({
        "products": [{
            "id": "KB-75",
            "name": "75% Mechanical Keyboard",
            "description": "Hot-swappable tactile switches, aluminium case.",
            "image": "https://cdn.example.com/kb-75.jpg",
            "offers": [{
                "identifier": "urn:Offer:KB-75-base",
                "price": "149.00",
                "priceCurrency": "USD",
                "availability": "inStock",
                "additionalType": "urn:cap:StandardOffer:PCT20",
                "priceValidUntil": "2025-12-31",
            }],
            "brand": "KeyWorks",
        }],
        "totalResults": 63,
        "offset": 20,
        "limit": 40,
        "context": {
            "description": "Filtered to tactile switches under $200",
            "refineFilters": [
                ["switchType", "enum", "Switch feel: tactile, linear, clicky"],
                ["price", "range", "Price in USD"],
            ],
        },
    });
    validate(&product_search::output_schema().unwrap(), &output).unwrap();
}

#[test]
fn test_product_get_full_exchange() {
    let input = json!({"productIds": ["KB-75", "KB-80"], "fields": ["offers", "variants", "reviews"]});
    validate(&product_get::input_schema().unwrap(), &input).unwrap();

    let output = json!({
        "products": [
            {
                "id": "KB-75",
                "name": "75% Mechanical Keyboard",
                "images": ["https://cdn.example.com/kb-75-front.jpg"],
                "offers": [{"identifier": "o1", "price": "149.00", "priceCurrency": "USD"}],
                "variants": [{
                    "id": "KB-75-white",
                    "name": "White / Tactile",
                    "offers": [{"identifier": "o2", "price": "154.00", "priceCurrency": "USD"}],
                    "images": ["https://cdn.example.com/kb-75-white.jpg"],
                    "color": "white",
                }],
                "reviews": {"ratingValue": 4.6, "reviewCount": 182, "ratingCount": 211},
                "shipping": [{"name": "Standard", "price": "5.00", "priceCurrency": "USD"}],
                "url": "https://shop.example.com/kb-75",
            },
            null,
        ],
        "notFound": ["KB-80"],
        "context": {"lastUpdated": "2025-06-01T08:30:00Z"},
    });
    validate(&product_get::output_schema().unwrap(), &output).unwrap();
}

#[test]
fn test_cart_manage_full_exchange() {
    let input = json!({
        "action": "add",
        "cartId": "cart-81723",
        "addItems": [
            {
                "productId": "KB-75",
                "variantId": "KB-75-white",
                "quantity": 1,
                "clientItemId": "line-a",
            },
            {
                "productId": "CAP-SET",
                "variantAttributes": {"profile": "cherry", "color": "ivory"},
                "quantity": 2,
            },
        ],
        "includeProductDetails": true,
        "includeTaxCalculations": true,
    });
    validate(&cart_manage::input_schema().unwrap(), &input).unwrap();

    let output = json!({
        "operation": {
            "success": true,
            "successfulItems": ["line-a"],
            "failedItems": [{"item": "CAP-SET", "reason": "only 1 left in stock"}],
        },
        "cart": {
            "cartId": "cart-81723",
            "itemCount": 2,
            "updatedAt": "2025-06-01T12:00:00Z",
            "readyForCheckout": true,
        },
        "items": [{
            "cartItemId": "ci-1",
            "productId": "KB-75",
            "productName": "75% Mechanical Keyboard",
            "variantId": "KB-75-white",
            "quantity": 1,
            "unitPrice": "154.00",
            "priceCurrency": "USD",
            "lineTotal": "154.00",
            "availability": "inStock",
            "clientItemId": "line-a",
        }],
        "totals": {
            "subtotal": "154.00",
            "currency": "USD",
            "tax": "13.48",
            "total": "167.48",
            "taxDetails": [{
                "type": "sales_tax",
                "rate": 0.0875,
                "amount": "13.48",
                "currency": "USD",
                "jurisdiction": "CA",
            }],
        },
        "context": {"timestamp": "2025-06-01T12:00:00Z", "estimatedPricing": false},
    });
    validate(&cart_manage::output_schema().unwrap(), &output).unwrap();
}

#[test]
fn test_order_status_full_exchange() {
    let input = json!({
        "orderIds": ["ORD-1001"],
        "includeTracking": true,
        "includeItems": true,
        "includePaymentStatus": true,
        "includeHistory": true,
    });
    validate(&order_status::input_schema().unwrap(), &input).unwrap();

    let output = json!({
        "orders": [{
            "orderId": "ORD-1001",
            "orderNumber": "1001",
            "status": "shipped",
            "createdAt": "2025-05-28T15:20:00Z",
            "updatedAt": "2025-05-30T09:00:00Z",
            "totals": {"subtotal": "154.00", "currency": "USD", "shipping": "5.00", "total": "159.00"},
            "customer": {"email": "buyer@example.com"},
            "shipping": {
                "address": {
                    "name": "Sam Buyer",
                    "addressLine1": "1 Main St",
                    "city": "Springfield",
                    "state": "CA",
                    "postalCode": "94000",
                    "country": "US",
                },
                "method": "Standard",
                "estimatedDelivery": "2025-06-03",
            },
            "payment": {
                "status": "completed",
                "method": "card",
                "amount": "159.00",
                "currency": "USD",
                "paidAt": "2025-05-28T15:21:00Z",
            },
            "items": [{
                "productId": "KB-75",
                "productName": "75% Mechanical Keyboard",
                "quantity": 1,
                "unitPrice": "154.00",
                "lineTotal": "154.00",
                "currency": "USD",
                "status": "shipped",
            }],
            "tracking": [{
                "trackingNumber": "1Z999AA10123456784",
                "carrier": "UPS",
                "trackingUrl": "https://track.example.com/1Z999AA10123456784",
                "status": "in_transit",
                "events": [{
                    "timestamp": "2025-05-30T09:00:00Z",
                    "status": "departed",
                    "location": "Oakland, CA",
                    "description": "Departed from facility",
                }],
            }],
            "history": [
                {"timestamp": "2025-05-28T15:20:00Z", "type": "created", "description": "Order placed"},
                {"timestamp": "2025-05-30T09:00:00Z", "type": "shipped", "description": "Order shipped"},
            ],
        }],
        "context": {"timestamp": "2025-06-01T12:00:00Z", "dataAge": 120},
    });
    validate(&order_status::output_schema().unwrap(), &output).unwrap();
}

#[test]
fn test_user_preferences_full_exchange() {
    let input = json!({
        "preferences": {
            "userDataConsent": "all",
            "locale": {
                "language": "en-US",
                "country": "US",
                "currency": "USD",
                "timezone": "America/Los_Angeles",
            },
            "shopping": {
                "categories": ["keyboards", "desk-accessories"],
                "brands": ["KeyWorks"],
                "priceRange": {"min": 20, "max": 300, "currency": "USD"},
                "sizes": {"keycaps": "cherry-profile"},
            },
            "accessibility": {"largeText": true, "reducedMotion": true},
            "communication": {
                "language": "en-US",
                "email": {"orderUpdates": true, "marketing": false},
                "preferredMethod": "email",
            },
            "custom": {"favoriteSwitch": "tactile"},
        },
        "replaceAll": false,
    });
    validate(&user_preferences::input_schema().unwrap(), &input).unwrap();

    let output = json!({
        "operation": {"success": true, "updatedFields": ["locale", "shopping"]},
        "currentPreferences": {
            "userDataConsent": "all",
            "locale": {"language": "en-US", "country": "US"},
        },
        "context": {
            "isNewContext": false,
            "timestamp": "2025-06-01T12:00:00Z",
            "retentionPolicy": {"description": "Retained while consent is active", "expiresAt": "2026-06-01T12:00:00Z"},
            "appliedPolicies": ["gdpr"],
        },
        "availableOptions": {
            "languages": ["en-US", "es-ES"],
            "countries": ["US", "CA"],
            "currencies": ["USD", "CAD"],
            "customFields": [{"key": "favoriteSwitch", "type": "string", "description": "Preferred switch feel"}],
        },
    });
    validate(&user_preferences::output_schema().unwrap(), &output).unwrap();
}
