use anyhow::Result;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, clap::ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

pub fn print_output<T: Serialize>(data: T, format: OutputFormat) -> Result<()> {
    let json_value = serde_json::to_value(data)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&json_value)?);
        }
        OutputFormat::Yaml => {
            println!("{}", serde_yaml::to_string(&json_value)?);
        }
        OutputFormat::Table => {
            print_as_table(&json_value)?;
        }
    }

    Ok(())
}

fn print_as_table(value: &Value) -> Result<()> {
    match value {
        Value::Array(arr) if !arr.is_empty() => {
            let mut table = Table::new();

            // Get headers from first object
            if let Value::Object(first) = &arr[0] {
                let headers: Vec<String> = first.keys().cloned().collect();
                table.set_header(&headers);

                // Add rows
                for item in arr {
                    if let Value::Object(obj) = item {
                        let row: Vec<String> = headers
                            .iter()
                            .map(|h| format_value(obj.get(h).unwrap_or(&Value::Null)))
                            .collect();
                        table.add_row(row);
                    }
                }
            } else {
                // Simple array of values
                table.set_header(vec!["Value"]);
                for item in arr {
                    table.add_row(vec![format_value(item)]);
                }
            }

            println!("{}", table);
        }
        Value::Object(obj) => {
            let mut table = Table::new();
            table.set_header(vec!["Key", "Value"]);

            for (key, val) in obj {
                table.add_row(vec![key.clone(), format_value(val)]);
            }

            println!("{}", table);
        }
        _ => {
            println!("{}", format_value(value));
        }
    }

    Ok(())
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn format_value_scalars() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(123456)), "123456");
        assert_eq!(format_value(&json!("alpha-123")), "alpha-123");
    }

    #[test]
    fn format_value_composites_summarize() {
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1})), "{1 fields}");
    }

    #[test]
    fn print_output_accepts_any_serialize() {
        let data = json!({"projectId": "alpha-123", "projectNumber": 123456});
        assert!(print_output(&data, OutputFormat::Json).is_ok());
        assert!(print_output(&data, OutputFormat::Yaml).is_ok());
        assert!(print_output(&data, OutputFormat::Table).is_ok());
    }
}
