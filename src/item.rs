use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use uuid::Uuid;

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_PRICE: f64 = 999_999.99;

pub const NAME_REQUIRED: &str = "Name is required and must be a string";
pub const NAME_EMPTY: &str = "Name cannot be empty or just whitespace";
pub const NAME_TOO_LONG: &str = "Name must be 100 characters or less";
pub const PRICE_REQUIRED: &str = "Price is required";
pub const PRICE_NOT_NUMBER: &str = "Price must be a number";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than 0";
pub const PRICE_TOO_HIGH: &str = "Price must be less than $1,000,000";
pub const SIZE_REQUIRED: &str = "Size is required and must be a string";
pub const SIZE_INVALID: &str = r#"Size must be "s" (small), "m" (medium), or "l" (large)"#;

/// Item size code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Size {
    #[serde(rename = "s")]
    Small,
    #[serde(rename = "m")]
    Medium,
    #[serde(rename = "l")]
    Large,
}

impl Size {
    /// Parse a size code, ignoring case and surrounding whitespace
    pub fn from_code(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "s" => Some(Size::Small),
            "m" => Some(Size::Medium),
            "l" => Some(Size::Large),
            _ => None,
        }
    }
}

pub fn is_valid_size(value: &str) -> bool {
    Size::from_code(value).is_some()
}

/// A single inventory record as stored and returned over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub size: Size,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Build a new item, generating an id when none is supplied.
    ///
    /// `created_at` and `updated_at` are stamped with the same instant.
    pub fn new(name: &str, price: f64, size: Size, id: Option<String>) -> Self {
        let now = now();
        Self {
            id: id.unwrap_or_else(generate_id),
            name: name.trim().to_string(),
            price,
            size,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the mutable fields and refresh `updated_at`
    pub fn update(&mut self, name: &str, price: f64, size: Size) {
        self.name = name.trim().to_string();
        self.price = price;
        self.size = size;
        // never let a clock step backwards break updated_at >= created_at
        self.updated_at = now().max(self.created_at);
    }
}

/// Generate an item id of the form `item_{unix-millis}_{random}`.
///
/// Collisions are unlikely but not impossible.
pub fn generate_id() -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("item_{}_{}", Utc::now().timestamp_millis(), &random[..8])
}

fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Whole prices are written as integers (`3`), the rest as decimals (`9.99`)
fn serialize_price<S: Serializer>(price: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if price.fract() == 0.0 && price.abs() <= MAX_PRICE {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}

/// Untrusted item fields decoded from a request body.
///
/// Fields stay as raw JSON so that type mismatches become validation
/// messages instead of decode failures.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
pub struct ItemCandidate {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Widget")]
    pub name: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<f64>, example = 9.99)]
    pub price: Option<JsonValue>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "m")]
    pub size: Option<JsonValue>,
}

/// Normalized fields of a candidate that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub name: String,
    pub price: f64,
    pub size: Size,
}

impl ItemCandidate {
    /// Validate and normalize, returning every violation on failure
    pub fn into_fields(self) -> Result<ItemFields, Vec<String>> {
        match (
            check_name(self.name.as_ref()),
            check_price(self.price.as_ref()),
            check_size(self.size.as_ref()),
        ) {
            (Ok(name), Ok(price), Ok(size)) => Ok(ItemFields {
                name: name.to_string(),
                price,
                size,
            }),
            _ => Err(validate(&self)),
        }
    }
}

/// Check a candidate against all field rules.
///
/// Returns every violation in field order (name, price, size); an empty
/// vector means the candidate is valid.
pub fn validate(candidate: &ItemCandidate) -> Vec<String> {
    [
        check_name(candidate.name.as_ref()).err(),
        check_price(candidate.price.as_ref()).err(),
        check_size(candidate.size.as_ref()).err(),
    ]
    .into_iter()
    .flatten()
    .map(str::to_string)
    .collect()
}

fn check_name(value: Option<&JsonValue>) -> Result<&str, &'static str> {
    let Some(JsonValue::String(raw)) = value else {
        return Err(NAME_REQUIRED);
    };
    let name = raw.trim();
    if name.is_empty() {
        Err(NAME_EMPTY)
    } else if name.chars().count() > MAX_NAME_LEN {
        Err(NAME_TOO_LONG)
    } else {
        Ok(name)
    }
}

fn check_price(value: Option<&JsonValue>) -> Result<f64, &'static str> {
    let Some(value) = value else {
        return Err(PRICE_REQUIRED);
    };
    let Some(price) = value.as_f64() else {
        return Err(PRICE_NOT_NUMBER);
    };
    if price <= 0.0 {
        Err(PRICE_NOT_POSITIVE)
    } else if price > MAX_PRICE {
        Err(PRICE_TOO_HIGH)
    } else {
        Ok(price)
    }
}

fn check_size(value: Option<&JsonValue>) -> Result<Size, &'static str> {
    let Some(JsonValue::String(raw)) = value else {
        return Err(SIZE_REQUIRED);
    };
    if !is_valid_size(raw) {
        return Err(SIZE_INVALID);
    }
    Size::from_code(raw).ok_or(SIZE_INVALID)
}

/// Millisecond-precision RFC 3339 timestamps, e.g. `2024-01-01T12:00:00.000Z`
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
