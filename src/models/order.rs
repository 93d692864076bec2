use serde::{Deserialize, Serialize};

/// Delivery destination requested by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryType {
    /// Delivered to the customer's address
    Home,
    /// Picked up at a provider office / relay point
    #[default]
    Office,
}

impl DeliveryType {
    /// Only the exact value "home" means home delivery, everything else is office
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("home") => DeliveryType::Home,
            _ => DeliveryType::Office,
        }
    }

    /// Provider `TypeLivraison` code
    pub fn provider_code(&self) -> &'static str {
        match self {
            DeliveryType::Home => "0",
            DeliveryType::Office => "1",
        }
    }
}

/// Order as sent by the storefront
///
/// Every field is optional and deserialization never rejects a value of the
/// wrong type: scalars are stringified, anything else is treated as absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSubmission {
    #[serde(default, deserialize_with = "lenient::string")]
    pub tracking: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub delivery_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub customer_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub phone_secondary: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub wilaya: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub commune: Option<String>,
    #[serde(default, deserialize_with = "lenient::amount")]
    pub total_amount: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub product_description: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub external_id: Option<String>,
}

impl OrderSubmission {
    pub fn delivery(&self) -> DeliveryType {
        DeliveryType::from_code(self.delivery_type.as_deref())
    }

    /// Build a submission from arbitrary JSON; non-object input yields the all-default order
    pub fn from_value(value: serde_json::Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }
}

pub(crate) mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        })
    }

    pub fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(coerce_amount(&value))
    }

    /// Numbers pass through, numeric strings are parsed, everything else is zero
    pub fn coerce_amount(value: &Value) -> f64 {
        let parsed = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        parsed.filter(|v| v.is_finite()).unwrap_or(0.0)
    }
}
