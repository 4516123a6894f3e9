use std::collections::HashMap;
use std::path::Path;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use flowfield_ipfix::FieldType;
use flowfield_schema::{AvroTypes, ClickHouseTypes, SchemaOptions};

use crate::error::SchemaGenError;

const DEFAULT_CONFIG: &str = "flowfield-schema.toml";

#[derive(Parser)]
#[command(
    name = "flowfield-schema-gen",
    about = "Storage schema generator for IPFIX information elements"
)]
pub struct Cli {
    #[command(flatten)]
    pub args: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ClickHouse column fragments (`name Nullable(Type),`)
    Columns,
    /// Avro field list as JSON
    Avro(AvroArgs),
    /// ClickHouse RPATH_STRING projections over Avro data sets
    Rpath,
}

#[derive(Args, Clone, Debug)]
pub struct GlobalArgs {
    /// Path to the TOML config
    #[arg(long, global = true, default_value = DEFAULT_CONFIG, env = "FLOWFIELD_SCHEMA_CONFIG")]
    pub config: String,

    /// Column name prefix
    #[arg(long, global = true)]
    pub prefix: Option<String>,

    /// Timezone for ClickHouse DateTime columns (e.g. UTC)
    #[arg(long, global = true)]
    pub timezone: Option<String>,

    /// First element id to emit
    #[arg(long, global = true)]
    pub first_id: Option<u16>,

    /// Last element id to emit (inclusive)
    #[arg(long, global = true)]
    pub last_id: Option<u16>,
}

#[derive(Args, Clone, Debug)]
pub struct AvroArgs {
    /// Wrap the fields into a record schema with this name and validate it
    #[arg(long)]
    pub record: Option<String>,

    /// Pretty-print JSON
    #[arg(long)]
    pub pretty: bool,
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub prefix: Option<String>,
    pub timezone: Option<String>,
    pub first_field_id: Option<u16>,
    pub last_field_id: Option<u16>,
    /// IANA type name -> ClickHouse column type.
    #[serde(default)]
    pub clickhouse: HashMap<String, String>,
    /// IANA type name -> Avro primitive.
    #[serde(default)]
    pub avro: HashMap<String, String>,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self, SchemaGenError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaGenError::Config {
            context: "read",
            detail: format!("'{path}': {e}"),
        })?;
        Self::parse(&content).map_err(|e| match e {
            SchemaGenError::Config { context, detail } => SchemaGenError::Config {
                context,
                detail: format!("'{path}': {detail}"),
            },
            other => other,
        })
    }

    pub fn parse(content: &str) -> Result<Self, SchemaGenError> {
        toml::from_str(content).map_err(|e| SchemaGenError::Config {
            context: "parse",
            detail: e.to_string(),
        })
    }
}

fn parse_overrides(
    table: &HashMap<String, String>,
    section: &'static str,
) -> Result<Vec<(FieldType, String)>, SchemaGenError> {
    table
        .iter()
        .map(|(name, target)| {
            let field_type = name.parse::<FieldType>().map_err(|e| SchemaGenError::Config {
                context: section,
                detail: e.to_string(),
            })?;
            Ok((field_type, target.clone()))
        })
        .collect()
}

// ---- Effective ----

/// Merged configuration: file < CLI.
pub struct Effective {
    pub options: SchemaOptions,
    pub clickhouse: ClickHouseTypes,
    pub avro: AvroTypes,
}

impl Effective {
    pub fn new(args: &GlobalArgs) -> Result<Self, SchemaGenError> {
        let file = match FileConfig::load(&args.config) {
            Ok(c) => {
                tracing::info!(config = %args.config, "loaded config");
                c
            }
            Err(e) => {
                if args.config != DEFAULT_CONFIG || Path::new(&args.config).exists() {
                    return Err(e);
                }
                FileConfig::default()
            }
        };
        Self::merge(args, file)
    }

    pub fn merge(args: &GlobalArgs, file: FileConfig) -> Result<Self, SchemaGenError> {
        let defaults = SchemaOptions::default();
        let first = args.first_id.or(file.first_field_id).unwrap_or(*defaults.field_ids.start());
        let last = args.last_id.or(file.last_field_id).unwrap_or(*defaults.field_ids.end());
        if first > last {
            return Err(SchemaGenError::Config {
                context: "field ids",
                detail: format!("first id {first} is greater than last id {last}"),
            });
        }

        let options = SchemaOptions {
            prefix: args.prefix.clone().or(file.prefix).unwrap_or(defaults.prefix),
            field_ids: first..=last,
            ..defaults
        };

        let timezone = args.timezone.clone().or(file.timezone);
        let mut clickhouse = ClickHouseTypes::new(timezone.as_deref());
        for (field_type, column_type) in parse_overrides(&file.clickhouse, "clickhouse")? {
            clickhouse = clickhouse.with_override(field_type, column_type);
        }
        let mut avro = AvroTypes::new();
        for (field_type, avro_type) in parse_overrides(&file.avro, "avro")? {
            avro = avro.with_override(field_type, avro_type);
        }

        Ok(Self { options, clickhouse, avro })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> GlobalArgs {
        GlobalArgs {
            config: DEFAULT_CONFIG.into(),
            prefix: None,
            timezone: None,
            first_id: None,
            last_id: None,
        }
    }

    #[test]
    fn defaults_without_file() {
        let eff = Effective::merge(&args(), FileConfig::default()).unwrap();
        assert_eq!(eff.options.prefix, "ds_iana_");
        assert_eq!(eff.options.field_ids, 1..=491);
        assert_eq!(eff.clickhouse.column_type(FieldType::DateTimeSeconds), "DateTime");
    }

    #[test]
    fn cli_overrides_file() {
        let file = FileConfig::parse(
            r#"
            prefix = "file_"
            timezone = "Asia/Jakarta"
            first_field_id = 10
            last_field_id = 20

            [clickhouse]
            macAddress = "FixedString(6)"

            [avro]
            unsigned64 = "long"
            "#,
        )
        .unwrap();
        let cli = GlobalArgs { prefix: Some("cli_".into()), last_id: Some(30), ..args() };

        let eff = Effective::merge(&cli, file).unwrap();
        assert_eq!(eff.options.prefix, "cli_");
        assert_eq!(eff.options.field_ids, 10..=30);
        assert_eq!(
            eff.clickhouse.column_type(FieldType::DateTimeMilliseconds),
            "DateTime64(3, 'Asia/Jakarta')"
        );
        assert_eq!(eff.clickhouse.column_type(FieldType::MacAddress), "FixedString(6)");
        assert_eq!(eff.avro.primitive(FieldType::Uint64), "long");
    }

    #[test]
    fn unknown_type_name_is_config_error() {
        let file = FileConfig::parse("[clickhouse]\nunsigned7 = \"UInt8\"\n").unwrap();
        let err = Effective::merge(&args(), file).err().unwrap();
        assert!(matches!(err, SchemaGenError::Config { context: "clickhouse", .. }));
    }

    #[test]
    fn inverted_range_is_rejected() {
        let cli = GlobalArgs { first_id: Some(50), last_id: Some(5), ..args() };
        assert!(Effective::merge(&cli, FileConfig::default()).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::parse("prefx = \"x\"").is_err());
    }
}
