use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as a table using the tabled crate.
///
/// Schedule results render the installment list as rows; the report result
/// prints its text block verbatim; validation findings become a
/// field/message table. Everything else falls back to a field/value table.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_flat_object(value);
            }
        }
        Value::Array(arr) => {
            print_array_table(arr);
        }
        _ => {
            println!("{}", value);
        }
    }
}

fn print_result_table(result: &Value, envelope: &serde_json::Map<String, Value>) {
    match result {
        Value::Object(res_map) => {
            if let Some(Value::Array(installments)) = res_map.get("installments") {
                if installments.is_empty() {
                    println!("(no installments)");
                } else {
                    print_array_table(installments);
                }
                print_scalar_fields(res_map, "installments");
            } else if let Some(Value::String(text)) = res_map.get("text") {
                // The report is already a formatted block
                print!("{}", text);
            } else if let Some(Value::Array(errors)) = res_map.get("errors") {
                if errors.is_empty() {
                    println!("valid: true");
                } else {
                    print_array_table(errors);
                }
            } else {
                print_scalar_fields(res_map, "");
            }
        }
        _ => {
            println!("{}", result);
        }
    }

    // Print warnings if any
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    // Print methodology
    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_scalar_fields(map: &serde_json::Map<String, Value>, skip: &str) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    let mut rows = 0;
    for (key, val) in map {
        if key == skip {
            continue;
        }
        builder.push_record([key.as_str(), &format_value(val)]);
        rows += 1;
    }
    if rows > 0 {
        println!("{}", Table::from(builder));
    }
}

fn print_flat_object(value: &Value) {
    if let Value::Object(map) = value {
        print_scalar_fields(map, "");
    }
}

fn print_array_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    // Collect all keys from first object for headers
    if let Some(Value::Object(first)) = arr.first() {
        let headers: Vec<String> = first.keys().cloned().collect();
        let mut builder = Builder::default();
        builder.push_record(&headers);

        for item in arr {
            if let Value::Object(map) = item {
                let row: Vec<String> = headers
                    .iter()
                    .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                    .collect();
                builder.push_record(row);
            }
        }
        println!("{}", Table::from(builder));
    } else {
        for item in arr {
            println!("{}", format_value(item));
        }
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
