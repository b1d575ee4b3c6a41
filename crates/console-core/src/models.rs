//! Resource Records
//!
//! Typed records exchanged with the REST service.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::resource::{FieldSpec, FormValues, Resource, SearchStyle};

/// Sort keys understood by the products service
pub const PRODUCT_SORTS: &[&str] = &["price", "price-", "review", "name", "name-"];

/// A product review; the service keeps whatever score was posted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub username: String,
    #[serde(default, deserialize_with = "lenient::number")]
    pub score: f64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub detail: String,
}

/// Inputs of the add-review form
pub const REVIEW_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username", "Username").required(),
    FieldSpec::text("score", "Score").required(),
    FieldSpec::text("date", "Date"),
    FieldSpec::text("detail", "Detail"),
];

impl Review {
    /// Build a review from the add-review form; the score must parse as a number
    pub fn from_form(form: &FormValues) -> Result<Self, ValidationError> {
        if let Some(field) = REVIEW_FIELDS.iter().find(|f| f.required && form.get(f.name).is_empty()) {
            return Err(ValidationError::RequiredField { label: field.label });
        }
        let score = form
            .get("score")
            .trim()
            .parse::<f64>()
            .map_err(|_| ValidationError::NotANumber { label: "Score" })?;
        Ok(Self {
            username: form.get("username").to_string(),
            score,
            date: form.get("date").to_string(),
            detail: form.get("detail").to_string(),
        })
    }
}

/// Product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub price: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub image_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub description: String,
    #[serde(default, skip_serializing)]
    pub review_list: Vec<Review>,
}

impl Product {
    pub fn avg_score(&self) -> Option<f64> {
        if self.review_list.is_empty() {
            return None;
        }
        let total: f64 = self.review_list.iter().map(|r| r.score).sum();
        Some(total / self.review_list.len() as f64)
    }

    fn review_summary(&self) -> String {
        match self.avg_score() {
            Some(avg) => format!("{} (avg {:.1})", self.review_list.len(), avg),
            None => "0".to_string(),
        }
    }
}

impl Resource for Product {
    const COLLECTION: &'static str = "products";
    const SINGULAR: &'static str = "Product";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::id(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("price", "Price").required(),
        FieldSpec::text("image_id", "Image"),
        FieldSpec::text("description", "Description"),
        FieldSpec::sort(PRODUCT_SORTS),
    ];
    const SEARCH_STYLE: SearchStyle = SearchStyle::TrimLowercase;
    const TABLE_HEADER: &'static [&'static str] =
        &["ID", "Name", "Price", "Image_id", "Description", "Reviews"];

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn from_form(form: &FormValues) -> Self {
        Self {
            id: None,
            name: form.get("name").to_string(),
            price: form.get("price").to_string(),
            image_id: form.get("image_id").to_string(),
            description: form.get("description").to_string(),
            review_list: Vec::new(),
        }
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("id", id_text(self.id))
            .with("name", self.name.as_str())
            .with("price", self.price.as_str())
            .with("image_id", self.image_id.as_str())
            .with("description", self.description.as_str())
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            id_text(self.id),
            self.name.clone(),
            self.price.clone(),
            self.image_id.clone(),
            self.description.clone(),
            self.review_summary(),
        ]
    }
}

/// Pet record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub available: bool,
}

impl Resource for Pet {
    const COLLECTION: &'static str = "pets";
    const SINGULAR: &'static str = "Pet";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::id(),
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("category", "Category").required(),
        FieldSpec::flag("available", "Available"),
    ];
    const SEARCH_STYLE: SearchStyle = SearchStyle::Raw;
    const TABLE_HEADER: &'static [&'static str] = &["ID", "Name", "Category", "Available"];

    fn id(&self) -> Option<u32> {
        self.id
    }

    fn from_form(form: &FormValues) -> Self {
        Self {
            id: None,
            name: form.get("name").to_string(),
            category: form.get("category").to_string(),
            available: form.get("available") == "true",
        }
    }

    fn to_form(&self) -> FormValues {
        FormValues::new()
            .with("id", id_text(self.id))
            .with("name", self.name.as_str())
            .with("category", self.category.as_str())
            .with("available", self.available.to_string())
    }

    fn table_row(&self) -> Vec<String> {
        vec![
            id_text(self.id),
            self.name.clone(),
            self.category.clone(),
            self.available.to_string(),
        ]
    }
}

fn id_text(id: Option<u32>) -> String {
    id.map(|id| id.to_string()).unwrap_or_default()
}

/// Accept strings, numbers, booleans or null where the form only needs text
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        })
    }

    /// Numbers or numeric strings; anything else counts as 0
    pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_f64().unwrap_or_default(),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or_else(|_| {
                log::warn!(target: "api", "non-numeric score {:?} read as 0", s);
                0.0
            }),
            _ => 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_accepts_numeric_price() {
        let product: Product = serde_json::from_value(json!({
            "id": 3, "name": "Lamp", "price": 12.5, "image_id": 7, "description": null
        }))
        .unwrap();
        assert_eq!(product.id, Some(3));
        assert_eq!(product.price, "12.5");
        assert_eq!(product.image_id, "7");
        assert_eq!(product.description, "");
        assert!(product.review_list.is_empty());
    }

    #[test]
    fn test_product_requires_name() {
        let result: Result<Product, _> = serde_json::from_value(json!({ "id": 3, "price": "1" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_outgoing_product_has_no_id_or_reviews() {
        let form = FormValues::new()
            .with("id", "9")
            .with("name", "Widget")
            .with("price", "9.99");
        let body = serde_json::to_value(Product::from_form(&form)).unwrap();
        assert_eq!(
            body,
            json!({ "name": "Widget", "price": "9.99", "image_id": "", "description": "" })
        );
    }

    #[test]
    fn test_review_summary_in_table_row() {
        let product: Product = serde_json::from_value(json!({
            "id": 1, "name": "Lamp", "price": "3",
            "review_list": [
                { "username": "ann", "score": 4 },
                { "username": "bob", "score": 5, "date": "2018-01-01", "detail": "good" }
            ]
        }))
        .unwrap();
        assert_eq!(product.avg_score(), Some(4.5));
        assert_eq!(product.table_row()[5], "2 (avg 4.5)");
    }

    #[test]
    fn test_review_score_accepts_text() {
        let product: Product = serde_json::from_value(json!({
            "id": 2, "name": "TV", "price": "300",
            "review_list": [
                { "username": "applefan", "score": "4", "date": "2018-03-01", "detail": "sharp" },
                { "username": "ann", "score": 2.5 },
                { "username": "bob", "score": null }
            ]
        }))
        .unwrap();
        let scores: Vec<f64> = product.review_list.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![4.0, 2.5, 0.0]);
        assert_eq!(product.table_row()[5], "3 (avg 2.2)");
    }

    #[test]
    fn test_review_score_falls_back_to_zero() {
        let review: Review =
            serde_json::from_value(json!({ "username": "ann", "score": "great" })).unwrap();
        assert_eq!(review.score, 0.0);

        let review: Review = serde_json::from_value(json!({ "username": "bob" })).unwrap();
        assert_eq!(review.score, 0.0);
    }

    #[test]
    fn test_review_from_form() {
        let form = FormValues::new()
            .with("username", "applefan")
            .with("score", " 4 ")
            .with("detail", "sharp");
        let review = Review::from_form(&form).unwrap();
        assert_eq!(review.score, 4.0);
        assert_eq!(review.date, "");
        assert_eq!(
            serde_json::to_value(&review).unwrap(),
            json!({ "username": "applefan", "score": 4.0, "date": "", "detail": "sharp" })
        );

        let missing = Review::from_form(&FormValues::new().with("score", "4"));
        assert_eq!(missing, Err(ValidationError::RequiredField { label: "Username" }));

        let wordy = Review::from_form(&FormValues::new().with("username", "ann").with("score", "great"));
        assert_eq!(wordy.unwrap_err().to_string(), "Score attribute must be a number");
    }

    #[test]
    fn test_pet_flag_round_trip_through_form() {
        let pet = Pet::from_form(
            &FormValues::new()
                .with("name", "Rex")
                .with("category", "dog")
                .with("available", "true"),
        );
        assert!(pet.available);
        assert_eq!(pet.to_form().get("available"), "true");
        assert_eq!(pet.to_form().get("id"), "");

        let unavailable = Pet::from_form(&FormValues::new().with("available", ""));
        assert!(!unavailable.available);
    }

    #[test]
    fn test_input_ids() {
        assert_eq!(Product::input_id("name"), "product_name");
        assert_eq!(Pet::input_id("category"), "pet_category");
        assert_eq!(Pet::collection_path(), "/pets");
    }
}
