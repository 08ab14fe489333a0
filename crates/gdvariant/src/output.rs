use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use gdvariant_codec::{TypeRegistry, Value};
use serde::Serialize;

use crate::json::value_to_json;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct MessageOutput<'a> {
    index: usize,
    profile: &'a str,
    kind: &'a str,
    value: serde_json::Value,
}

/// Print decoded messages, one record per message.
pub fn print_values(values: &[Value], profile: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for (index, value) in values.iter().enumerate() {
                let out = MessageOutput {
                    index,
                    profile,
                    kind: value.kind().name(),
                    value: value_to_json(value),
                };
                println!(
                    "{}",
                    serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
                );
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "KIND", "VALUE"]);
            for (index, value) in values.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    value.kind().name().to_string(),
                    value_to_json(value).to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for (index, value) in values.iter().enumerate() {
                let rendered = serde_json::to_string_pretty(&value_to_json(value))
                    .unwrap_or_else(|_| "null".to_string());
                println!("[{index}] {}: {rendered}", value.kind());
            }
        }
        OutputFormat::Raw => {
            for value in values {
                println!("{}", value_to_json(value));
            }
        }
    }
}

#[derive(Serialize)]
struct TypeOutput {
    type_id: u8,
    kind: &'static str,
}

#[derive(Serialize)]
struct ProfileOutput {
    name: &'static str,
    types: Vec<TypeOutput>,
}

fn profile_output(registry: &TypeRegistry) -> ProfileOutput {
    ProfileOutput {
        name: registry.name(),
        types: registry
            .entries()
            .iter()
            .map(|entry| TypeOutput {
                type_id: entry.type_id,
                kind: entry.kind.name(),
            })
            .collect(),
    }
}

/// Print the type tables of the given registries.
pub fn print_profiles(registries: &[TypeRegistry], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out: Vec<ProfileOutput> = registries.iter().map(profile_output).collect();
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROFILE", "TYPE ID", "KIND"]);
            for registry in registries {
                for entry in registry.entries() {
                    table.add_row(vec![
                        registry.name().to_string(),
                        entry.type_id.to_string(),
                        entry.kind.name().to_string(),
                    ]);
                }
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for registry in registries {
                let types: Vec<String> = registry
                    .entries()
                    .iter()
                    .map(|entry| format!("{}={}", entry.type_id, entry.kind))
                    .collect();
                println!("{} ({} types): {}", registry.name(), registry.len(), types.join(" "));
            }
        }
        OutputFormat::Raw => {
            for registry in registries {
                println!("{}", registry.name());
            }
        }
    }
}

/// Print a one-record summary of a write operation.
pub fn print_summary<T: Serialize>(summary: &T, format: OutputFormat) {
    let rendered = match format {
        OutputFormat::Pretty | OutputFormat::Table => serde_json::to_string_pretty(summary),
        OutputFormat::Json | OutputFormat::Raw => serde_json::to_string(summary),
    };
    println!("{}", rendered.unwrap_or_else(|_| "{}".to_string()));
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}
