// OrderSubmission -> ZR Express add_colis payload
use serde_json::{json, Map, Value};

use crate::models::OrderSubmission;
use crate::proxy::config::ProviderConfig;

/// Parcel type sent on every record (standard parcel)
const PARCEL_TYPE: &str = "0";
const DEFAULT_WILAYA: &str = "1";

/// Build a single `Colis` record
pub fn map_order(order: &OrderSubmission, provider: &ProviderConfig) -> Value {
    let text = |field: &Option<String>| field.clone().unwrap_or_default();
    let confirmed = if provider.confirm_orders { "1" } else { "" };

    json!({
        "Tracking": text(&order.tracking),
        "TypeLivraison": order.delivery().provider_code(),
        "TypeColis": PARCEL_TYPE,
        "Confrimee": confirmed,
        "Client": text(&order.customer_name),
        "MobileA": text(&order.phone),
        "MobileB": text(&order.phone_secondary),
        "Adresse": text(&order.address),
        "IDWilaya": order
            .wilaya
            .clone()
            .filter(|w| !w.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_WILAYA.to_string()),
        "Commune": text(&order.commune),
        "Total": format_total(order.total_amount),
        "Note": text(&order.note),
        "TProduit": text(&order.product_description),
        "id_Externe": text(&order.external_id),
        "Source": provider.source,
    })
}

/// Build the full request body: `{"Colis": [record]}`, plus credentials when configured
pub fn build_request_body(order: &OrderSubmission, provider: &ProviderConfig) -> Value {
    let mut body = Map::new();
    body.insert("Colis".to_string(), json!([map_order(order, provider)]));

    if provider.credentials_in_body {
        body.insert("token".to_string(), json!(provider.token));
        body.insert("key".to_string(), json!(provider.key));
    }

    Value::Object(body)
}

/// Render a total the way the provider expects it: integral amounts have no decimal point
pub fn format_total(amount: f64) -> String {
    if amount.fract() == 0.0 && amount.abs() < 1e15 {
        format!("{}", amount as i64)
    } else {
        amount.to_string()
    }
}

/// Extract `COUNT` from a provider response; number or numeric string, anything else is 0
pub fn parse_count(response: &Value) -> i64 {
    match response.get("COUNT") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}
