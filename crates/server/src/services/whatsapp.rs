//! WhatsApp deep-link construction for the order flow.
//!
//! Checkout is a WhatsApp conversation: the product page links to
//! `https://wa.me/<digits>?text=<prefilled message>`. Building that link is
//! pure string formatting over the product fields and the configured number.

use rust_decimal::Decimal;

use rekhali_core::WhatsAppNumber;

/// Build the prefilled order enquiry message.
#[must_use]
pub fn order_message(product_name: &str, price: Decimal, size: &str, quantity: u32) -> String {
    format!(
        "Hi! I'm interested in:\n\n\
         Product: {product_name}\n\
         Price: Rs. {price:.2}\n\
         Size: {size}\n\
         Quantity: {quantity}\n\n\
         Please let me know the availability and delivery details."
    )
}

/// Build the full `wa.me` order link for a product.
#[must_use]
pub fn order_link(
    number: &WhatsAppNumber,
    product_name: &str,
    price: Decimal,
    size: &str,
    quantity: u32,
) -> String {
    let message = order_message(product_name, price, size, quantity);
    format!(
        "https://wa.me/{}?text={}",
        number.digits(),
        urlencoding::encode(&message)
    )
}

/// Build a plain chat link with no prefilled message (header/footer contact).
#[must_use]
pub fn chat_link(number: &WhatsAppNumber) -> String {
    format!("https://wa.me/{}", number.digits())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_message_format() {
        let msg = order_message("HEER", Decimal::new(66600, 2), "M", 2);
        assert_eq!(
            msg,
            "Hi! I'm interested in:\n\nProduct: HEER\nPrice: Rs. 666.00\nSize: M\nQuantity: 2\n\nPlease let me know the availability and delivery details."
        );
    }

    #[test]
    fn test_order_message_pads_price_to_two_decimals() {
        let msg = order_message("HEER", Decimal::new(666, 0), "S", 1);
        assert!(msg.contains("Price: Rs. 666.00"));
    }

    #[test]
    fn test_order_link_strips_number_formatting() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        let link = order_link(&number, "HEER", Decimal::new(66600, 2), "S", 1);
        assert!(link.starts_with("https://wa.me/919876543210?text="));
    }

    #[test]
    fn test_order_link_urlencodes_message() {
        let number = WhatsAppNumber::new("919876543210");
        let link = order_link(&number, "Mul Cotton Kurta", Decimal::new(129900, 2), "L", 1);
        assert!(!link.contains(' '));
        assert!(link.contains("Mul%20Cotton%20Kurta"));
    }

    #[test]
    fn test_chat_link() {
        let number = WhatsAppNumber::new("+91 98765-43210");
        assert_eq!(chat_link(&number), "https://wa.me/919876543210");
    }
}
