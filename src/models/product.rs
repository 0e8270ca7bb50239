use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: Decimal,
    pub sku: String,
    pub description_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub product_name: String,
    pub price: Decimal,
    pub description_text: Option<String>,
    pub quantity: Option<i32>,
}

/// Partial update. `description_text` uses a double `Option` so a client
/// can clear the field with an explicit `null` while an absent key leaves
/// the stored value untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "double_option")]
    pub description_text: Option<Option<String>>,
}

fn double_option<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    #[serde(flatten)]
    pub product: Product,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
    pub id: i32,
}

const SKU_PREFIX_LEN: usize = 3;
const SKU_FILLER: char = 'X';

/// SKUs look like `SNA482913`: the first three characters of the name
/// with spaces stripped and uppercased (padded with `X` for short names),
/// followed by six random digits. Uniqueness is enforced by the store.
pub fn generate_sku(name: &str) -> String {
    let stripped: String = name.chars().filter(|c| !c.is_whitespace()).collect();

    let mut prefix: String = stripped
        .to_uppercase()
        .chars()
        .take(SKU_PREFIX_LEN)
        .collect();

    while prefix.chars().count() < SKU_PREFIX_LEN {
        prefix.push(SKU_FILLER);
    }

    let digits: u32 = rand::thread_rng().gen_range(0..1_000_000);
    format!("{}{:06}", prefix, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_sku_shape(sku: &str, expected_prefix: &str) {
        assert_eq!(sku.len(), 9, "SKU must be 3 letters + 6 digits: {}", sku);
        assert_eq!(&sku[..3], expected_prefix);
        assert!(
            sku[3..].chars().all(|c| c.is_ascii_digit()),
            "SKU suffix must be six digits: {}",
            sku
        );
    }

    #[test]
    fn sku_from_multi_word_name() {
        for _ in 0..20 {
            assert_sku_shape(&generate_sku("Snake Plant"), "SNA");
        }
    }

    #[test]
    fn sku_uppercases_name() {
        assert_sku_shape(&generate_sku("peace lily"), "PEA");
    }

    #[test]
    fn sku_strips_spaces_before_truncating() {
        // "a b" collapses to "ab" and is padded, not "A B".
        assert_sku_shape(&generate_sku("a b"), "ABX");
    }

    #[test]
    fn sku_pads_short_names() {
        assert_sku_shape(&generate_sku("io"), "IOX");
        assert_sku_shape(&generate_sku(""), "XXX");
    }

    #[test]
    fn sku_varies_between_calls() {
        let skus: std::collections::HashSet<String> =
            (0..50).map(|_| generate_sku("Monstera")).collect();
        assert!(skus.len() > 1, "50 generated SKUs were all identical");
    }

    #[test]
    fn update_absent_description_is_untouched() {
        let req: UpdateProductRequest = serde_json::from_str(r#"{"price": "24.99"}"#).unwrap();
        assert!(req.description_text.is_none());
        assert!(req.product_name.is_none());
        assert_eq!(req.price, Some(Decimal::new(2499, 2)));
    }

    #[test]
    fn update_null_description_clears_field() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"description_text": null}"#).unwrap();
        assert_eq!(req.description_text, Some(None));
    }

    #[test]
    fn update_set_description() {
        let req: UpdateProductRequest =
            serde_json::from_str(r#"{"description_text": "thrives in shade"}"#).unwrap();
        assert_eq!(
            req.description_text,
            Some(Some("thrives in shade".to_string()))
        );
    }
}
