use serde_json::{Map, Value};

/// Body field naming the paused workflow step to complete.
pub const TASK_TOKEN_FIELD: &str = "TaskToken";

/// Decode an inbound message body as a JSON object.
///
/// Bodies that are valid JSON but not objects (`5`, `"x"`, `[1]`) are
/// rejected along with malformed ones; the derived record is a field-wise
/// copy and needs fields to copy.
pub fn decode_body(body: &str) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Build the derived record: every field of the body plus `val1` and
/// `val2`, independently drawn fractions in `[0, 1)`.
pub fn derive_record(body: &Map<String, Value>) -> Map<String, Value> {
    let mut record = body.clone();
    record.insert("val1".to_string(), random_fraction());
    record.insert("val2".to_string(), random_fraction());
    record
}

fn random_fraction() -> Value {
    Value::from(rand::random::<f64>())
}

/// Extract the continuation token, when present and a string. No further
/// validation; absence is passed through to the callback client.
pub fn task_token(body: &Map<String, Value>) -> Option<&str> {
    body.get(TASK_TOKEN_FIELD).and_then(Value::as_str)
}
