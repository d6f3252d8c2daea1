//! Typed wire structs for CAP payloads
//!
//! These structures give handler implementations a typed view over the
//! normalized JSON payloads the dispatcher produces. Extensible shapes
//! carry a flattened `extra` map so merchant-specific schema.org fields
//! survive a deserialize/serialize round trip.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Products and offers
// ---------------------------------------------------------------------------

/// Product availability status (schema.org ItemAvailability subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProductAvailability {
    InStock,
    OutOfStock,
    PreOrder,
}

/// Offer classification: a single URN or several
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OfferClassification {
    One(String),
    Many(Vec<String>),
}

/// Product offer (schema.org Offer semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductOffer {
    /// Unique offer identifier
    pub identifier: String,

    /// Offer price as a decimal string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    /// ISO 4217 currency code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<ProductAvailability>,

    /// Standard Offer URNs, e.g. `urn:cap:StandardOffer:BOGO50`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_type: Option<OfferClassification>,

    /// Additional schema.org Offer fields (seller, url, priceValidUntil, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Summary information for a product in search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Opaque merchant-assigned product identifier
    pub id: String,

    pub name: String,

    /// Rich free-text description for LLM consumption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Thumbnail image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<ProductOffer>>,

    /// Additional schema.org Product fields (brand, category, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A specific product variant (size, color, configuration)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<ProductOffer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregated review data (schema.org AggregateRating semantics)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReviewSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_value: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating_count: Option<u64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One available shipping method
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Detailed product information returned by `product_get`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: String,
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Vec<ProductOffer>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<ProductReviewSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Vec<ShippingOption>>,

    /// Product page on the merchant's site
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// product_search
// ---------------------------------------------------------------------------

/// Query interpretation mode; `keyword` is the default every merchant
/// agent must support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryMode {
    Keyword,
    Phrase,
}

/// Input for the `product_search` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchInput {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_mode: Option<QueryMode>,

    /// Optional filter expression (SQL WHERE-like)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// LLM-facing context attached to search results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutputContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Refinement suggestions as `[attribute, valueType, description]` triples
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refine_filters: Option<Vec<(String, String, String)>>,
}

/// Output of the `product_search` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSearchOutput {
    pub products: Vec<ProductSummary>,

    /// Total matches available, for pagination
    pub total_results: u64,

    pub offset: u64,
    pub limit: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<SearchOutputContext>,
}

// ---------------------------------------------------------------------------
// product_get
// ---------------------------------------------------------------------------

/// Input for the `product_get` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGetInput {
    pub product_ids: Vec<String>,

    /// Field selector; omitted means the comprehensive response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

/// Context block of a `product_get` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGetContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

/// Output of the `product_get` skill; slots align with the request order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductGetOutput {
    pub products: Vec<Option<ProductDetail>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ProductGetContext>,
}

// ---------------------------------------------------------------------------
// cart_manage
// ---------------------------------------------------------------------------

/// Cart operation discriminant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartAction {
    View,
    Add,
    Update,
    Remove,
    Clear,
}

/// Item to add to a cart
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_attributes: Option<HashMap<String, String>>,

    pub quantity: u64,

    /// Client-side identifier for tracking this line across calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_item_id: Option<String>,
}

/// Reference to an existing cart line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemReference {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_attributes: Option<HashMap<String, String>>,
}

/// Cart line reference plus the new total quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemUpdate {
    #[serde(flatten)]
    pub reference: CartItemReference,

    /// New total quantity for the line
    pub quantity: u64,
}

/// Input for the `cart_manage` skill.
///
/// Note the dispatcher folds the singular `item`/`quantity` shape into the
/// plural arrays during normalization, so handlers deserializing this type
/// will find singular fields empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartManageInput {
    pub action: CartAction,

    /// Omitted means the user's default/active cart
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_items: Option<Vec<CartItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_items: Option<Vec<CartItemUpdate>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_items: Option<Vec<CartItemReference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<CartItemReference>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_product_details: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shipping_options: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tax_calculations: Option<bool>,
}

/// Cart line availability; adds the limited-stock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LineAvailability {
    InStock,
    OutOfStock,
    LimitedStock,
    PreOrder,
}

/// Individual cart line as reported to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    pub cart_item_id: String,
    pub product_id: String,
    pub product_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_attributes: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_description: Option<String>,

    pub quantity: u64,

    /// Unit price as a decimal string
    pub unit_price: String,

    pub price_currency: String,

    /// Line total (unit price x quantity) as a decimal string
    pub line_total: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<LineAvailability>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_quantity: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_item_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_details: Option<ProductSummary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Cart metadata after an operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    pub cart_id: String,
    pub item_count: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_for_checkout: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// Tax line in a totals breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxCalculation {
    /// Tax type (e.g. `sales_tax`, `vat`, `gst`)
    #[serde(rename = "type")]
    pub tax_type: String,

    /// Rate as a decimal fraction (0.0875 for 8.75%)
    pub rate: f64,

    pub amount: String,
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
}

/// Cart or order totals; all amounts are decimal strings in one currency
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub subtotal: String,
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    pub total: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_details: Option<Vec<TaxCalculation>>,

    /// True when exact tax calculation was not available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_tax: Option<bool>,
}

/// An item that failed processing, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedItem {
    pub item: String,
    pub reason: String,
}

/// Result of a cart operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartOperationResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_items: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_items: Option<Vec<FailedItem>>,
}

/// Context block of a `cart_manage` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartManageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_pricing: Option<bool>,
}

/// Output of the `cart_manage` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartManageOutput {
    pub operation: CartOperationResult,
    pub cart: CartState,
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_options: Option<Vec<ShippingOption>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<CartManageContext>,
}

// ---------------------------------------------------------------------------
// order_status
// ---------------------------------------------------------------------------

/// Order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    PendingPayment,
    PaymentProcessing,
    Confirmed,
    Processing,
    Shipped,
    OutForDelivery,
    Delivered,
    Failed,
    Cancelled,
    Returned,
    Refunded,
}

/// Input for the `order_status` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusInput {
    pub order_ids: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_tracking: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_items: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_payment_status: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_shipping_details: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_history: Option<bool>,
}

/// Customer shipping address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub name: String,
    pub address_line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    pub city: String,
    pub state: String,
    pub postal_code: String,

    /// ISO 3166-1 alpha-2
    pub country: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Customer billing address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub name: String,
    pub address_line1: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

/// Refund applied to a payment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundInfo {
    pub amount: String,
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    pub refunded_at: String,
}

/// Payment state of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    /// `pending`, `processing`, `completed`, `failed`, `refunded`,
    /// `partially_refunded`
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund: Option<RefundInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// One scan event on a shipment's journey
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingEvent {
    pub timestamp: String,
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    pub description: String,
}

/// Carrier tracking details for a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingInfo {
    pub tracking_number: String,
    pub carrier: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_url: Option<String>,

    /// `label_created`, `picked_up`, `in_transit`, `out_for_delivery`,
    /// `delivered`, `exception`
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TrackingEvent>>,
}

/// One ordered line of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_attributes: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_description: Option<String>,

    pub quantity: u64,
    pub unit_price: String,
    pub line_total: String,
    pub currency: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// `pending`, `processing`, `shipped`, `delivered`, `cancelled`,
    /// `returned` (for partial fulfillment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingInfo>,
}

/// Entry in an order's history timeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistoryEvent {
    pub timestamp: String,

    /// `created`, `payment_completed`, `confirmed`, `shipped`, `delivered`,
    /// `cancelled`, `returned`, `refunded`, `updated`
    #[serde(rename = "type")]
    pub event_type: String,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Map<String, Value>>,
}

/// Customer contact details on an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Shipping block of an order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderShipping {
    pub address: ShippingAddress,
    pub method: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_delivery: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_delivery: Option<String>,
}

/// Detailed order information
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub order_id: String,

    /// Customer-facing order number
    pub order_number: String,

    pub status: OrderStatus,
    pub created_at: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    pub totals: CartTotals,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<OrderCustomer>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<OrderShipping>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing: Option<BillingAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<PaymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Vec<TrackingInfo>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<OrderHistoryEvent>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,

    /// Lookup error for this order, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Context block of an `order_status` response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// Data freshness indicator, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_age: Option<f64>,
}

/// Output of the `order_status` skill; slots align with the request order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusOutput {
    pub orders: Vec<Option<OrderDetail>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<OrderStatusContext>,
}

// ---------------------------------------------------------------------------
// user_preferences_set
// ---------------------------------------------------------------------------

/// User consent for data collection and personalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserDataConsent {
    /// No consent provided (the default)
    Absent,
    /// Explicit rejection of consent
    None,
    /// Consent to the standard "all" policy
    All,
}

/// Language and locale preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalePreferences {
    /// IETF BCP 47 language tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// ISO 3166-1 alpha-2
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// ISO 4217
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// IANA Time Zone Database name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Price range preference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Shopping and product preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub brands: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_range: Option<PriceRange>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<HashMap<String, String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
}

/// Accessibility preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_reader: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_contrast: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_text: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reduced_motion: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_description: Option<bool>,
}

/// Email notification switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_updates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub newsletters: Option<bool>,
}

/// SMS notification switches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_updates: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_notifications: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotions: Option<bool>,
}

/// Communication preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailPreferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsPreferences>,

    /// `email`, `sms`, `phone`, or `none`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_method: Option<String>,
}

/// User preferences container; consent gates everything else
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub user_data_consent: UserDataConsent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<LocalePreferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shopping: Option<ShoppingPreferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<AccessibilityPreferences>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication: Option<CommunicationPreferences>,

    /// Merchant-specific preference storage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
}

/// Input for the `user_preferences_set` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesSetInput {
    pub preferences: UserPreferences,

    /// Replace all existing preferences instead of merging
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_all: Option<bool>,

    /// Clear all preferences and revoke consent; other parameters ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_all: Option<bool>,
}

/// A preference field that failed to update, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailedField {
    pub field: String,
    pub reason: String,
}

/// Result of a preferences update operation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdateResult {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_fields: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_fields: Option<Vec<FailedField>>,
}

/// How long preferences will be retained
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetentionPolicy {
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

/// Context information about stored preferences and consent
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesContext {
    pub is_new_context: bool,
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_policy: Option<RetentionPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_policies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

/// A merchant-supported custom preference field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldOption {
    pub key: String,

    #[serde(rename = "type")]
    pub field_type: String,

    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

/// Preference options and constraints the merchant supports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub currencies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<CustomFieldOption>>,
}

/// Output of the `user_preferences_set` skill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferencesSetOutput {
    pub operation: PreferencesUpdateResult,

    /// Echo of the preferences actually stored; partial by design
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_preferences: Option<Value>,

    pub context: PreferencesContext,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_options: Option<AvailableOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_input_round_trip() {
        let input: ProductSearchInput = serde_json::from_value(json!({
            "query": "standing desk",
            "queryMode": "phrase",
            "limit": 50,
        }))
        .unwrap();
        assert_eq!(input.query_mode, Some(QueryMode::Phrase));
        assert_eq!(input.limit, Some(50));

        let back = serde_json::to_value(&input).unwrap();
        assert_eq!(back["queryMode"], json!("phrase"));
        assert!(back.get("filter").is_none());
    }

    #[test]
    fn test_extension_fields_survive_round_trip() {
        let summary: ProductSummary = serde_json::from_value(json!({
            "id": "SKU-1",
            "name": "Widget",
            "brand": "Acme",
            "countryOfOrigin": "DE",
        }))
        .unwrap();
        assert_eq!(summary.extra["brand"], json!("Acme"));

        let back = serde_json::to_value(&summary).unwrap();
        assert_eq!(back["brand"], json!("Acme"));
        assert_eq!(back["countryOfOrigin"], json!("DE"));
    }

    #[test]
    fn test_offer_classification_shapes() {
        let one: ProductOffer = serde_json::from_value(json!({
            "identifier": "o1",
            "additionalType": "urn:cap:StandardOffer:PCT20",
        }))
        .unwrap();
        assert!(matches!(one.additional_type, Some(OfferClassification::One(_))));

        let many: ProductOffer = serde_json::from_value(json!({
            "identifier": "o1",
            "additionalType": ["urn:cap:StandardOffer:BOGO50"],
        }))
        .unwrap();
        assert!(matches!(many.additional_type, Some(OfferClassification::Many(_))));
    }

    #[test]
    fn test_order_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::OutForDelivery).unwrap(),
            json!("out_for_delivery")
        );
        assert_eq!(
            serde_json::from_value::<OrderStatus>(json!("pending_payment")).unwrap(),
            OrderStatus::PendingPayment
        );
    }

    #[test]
    fn test_cart_manage_input_from_normalized_payload() {
        // The folded plural shape the dispatcher hands to handlers.
        let input: CartManageInput = serde_json::from_value(json!({
            "action": "update",
            "updateItems": [{"cartItemId": "c1", "quantity": 3}],
            "includeProductDetails": false,
            "includeShippingOptions": false,
            "includeTaxCalculations": false,
        }))
        .unwrap();
        assert_eq!(input.action, CartAction::Update);
        let updates = input.update_items.unwrap();
        assert_eq!(updates[0].reference.cart_item_id.as_deref(), Some("c1"));
        assert_eq!(updates[0].quantity, 3);
        assert!(input.item.is_none());
    }

    #[test]
    fn test_get_output_null_slots() {
        let output: ProductGetOutput = serde_json::from_value(json!({
            "products": [{"id": "p1", "name": "Widget"}, null],
            "notFound": ["p2"],
        }))
        .unwrap();
        assert!(output.products[0].is_some());
        assert!(output.products[1].is_none());
    }
}
