//! WhatsApp order links
//!
//! Ordering happens in a WhatsApp chat: every "buy" or "contact" button is a
//! `wa.me` link with a pre-filled message.

use serde::{Deserialize, Serialize};

use crate::domain::{Price, Product};

pub const DEFAULT_WHATSAPP_NUMBER: &str = "919999999999";

const GENERAL_INQUIRY: &str =
    "Hi! I am interested in your home organization products. Could you please provide more information about your catalog and pricing?";
const SUPPORT_REQUEST: &str =
    "Hi! I need help with my order or have a question about your products. Could you please assist me?";
const CUSTOM_FALLBACK: &str = "Hi! I have a question about your products.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageKind {
    ProductInquiry { product_name: String, product_price: Option<Price> },
    GeneralInquiry,
    Support,
    Custom { message: Option<String> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WhatsAppMessage {
    kind: MessageKind,
    customer_name: Option<String>,
}

impl WhatsAppMessage {
    pub fn new(kind: MessageKind) -> Self { Self { kind, customer_name: None } }

    pub fn product_inquiry(product: &Product) -> Self {
        Self::new(MessageKind::ProductInquiry {
            product_name: product.name().to_string(),
            product_price: Some(product.price()),
        })
    }

    pub fn general_inquiry() -> Self { Self::new(MessageKind::GeneralInquiry) }
    pub fn support() -> Self { Self::new(MessageKind::Support) }
    pub fn custom(message: impl Into<String>) -> Self { Self::new(MessageKind::Custom { message: Some(message.into()) }) }

    /// Signs the message with the customer's name. Blank names are ignored.
    pub fn from_customer(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.customer_name = (!name.trim().is_empty()).then_some(name);
        self
    }

    pub fn kind(&self) -> &MessageKind { &self.kind }

    pub fn text(&self) -> String {
        let mut message = match &self.kind {
            MessageKind::ProductInquiry { product_name, product_price } => {
                let price = match product_price {
                    Some(p) if p.value() > 0 => format!(" ({p})"),
                    _ => String::new(),
                };
                format!("Hi! I want to buy this item: {product_name}{price}. Please tell me the availability and price.")
            }
            MessageKind::GeneralInquiry => GENERAL_INQUIRY.to_string(),
            MessageKind::Support => SUPPORT_REQUEST.to_string(),
            MessageKind::Custom { message } => match message.as_deref() {
                Some(m) if !m.is_empty() => m.to_string(),
                _ => CUSTOM_FALLBACK.to_string(),
            },
        };
        if let Some(name) = &self.customer_name {
            message.push_str(&format!("\n\nMy name is {name}."));
        }
        message
    }
}

/// Builds `wa.me` deep links for one business number.
#[derive(Clone, Debug)]
pub struct OrderLinks {
    number: String,
}

impl OrderLinks {
    pub fn new(number: impl Into<String>) -> Self { Self { number: number.into() } }
    pub fn number(&self) -> &str { &self.number }

    pub fn url(&self, message: &WhatsAppMessage) -> String {
        format!("https://wa.me/{}?text={}", self.number, urlencoding::encode(&message.text()))
    }

    pub fn product_url(&self, product: &Product) -> String {
        self.url(&WhatsAppMessage::product_inquiry(product))
    }
}

impl Default for OrderLinks {
    fn default() -> Self { Self::new(DEFAULT_WHATSAPP_NUMBER) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_inquiry_text() {
        let product = Product::new("t", "Three Tier Trolley", "Trolleys", 2499u64);
        assert_eq!(
            WhatsAppMessage::product_inquiry(&product).text(),
            "Hi! I want to buy this item: Three Tier Trolley (₹2,499). Please tell me the availability and price."
        );
    }

    #[test]
    fn test_zero_price_is_omitted() {
        let msg = WhatsAppMessage::new(MessageKind::ProductInquiry { product_name: "Sample".into(), product_price: Some(Price::new(0)) });
        assert_eq!(msg.text(), "Hi! I want to buy this item: Sample. Please tell me the availability and price.");
    }

    #[test]
    fn test_customer_name_and_custom_fallback() {
        let msg = WhatsAppMessage::support().from_customer("Asha");
        assert!(msg.text().ends_with("\n\nMy name is Asha."));
        let blank = WhatsAppMessage::custom("").from_customer("  ");
        assert_eq!(blank.text(), CUSTOM_FALLBACK);
    }

    #[test]
    fn test_url_is_percent_encoded() {
        let links = OrderLinks::new("911234567890");
        let url = links.url(&WhatsAppMessage::custom("Hi there & thanks"));
        assert_eq!(url, "https://wa.me/911234567890?text=Hi%20there%20%26%20thanks");
        let product = Product::new("t", "Rack", "C", 1299u64);
        assert!(links.product_url(&product).contains("%E2%82%B91%2C299"));
    }
}
