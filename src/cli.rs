use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::configuration::{init_logging, PlatformCapabilities, Settings};
use crate::forms::{widget_for, FieldFactory, FieldType, FileSelection, FormSession};
use crate::notifications::{NotificationCenter, NotificationChannel, NotificationFactory};
use crate::reports::{ExportFormat, ReportDesk, ReportFactory, ReportType};

/// Factory Control - report, notification and form strategy playground
#[derive(Parser)]
#[command(name = "factoryctl")]
#[command(about = "Drive the report, notification and form-field strategy registries")]
pub struct Cli {
    /// Settings file (defaults to $FACTORYCTL_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter directive, overrides the settings file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a single report
    Report {
        /// Report type (sales, inventory, financial, customer, analytics)
        #[arg(long = "type", value_name = "TYPE")]
        report_type: Option<String>,
        /// Export format (pdf, excel, csv, json)
        #[arg(long)]
        format: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show titles and footers for every report type and format
    Reports,
    /// Send one or more messages through the notification center
    Notify {
        /// Delivery channel (email, sms, push, slack, webhook)
        #[arg(long, default_value = "email")]
        channel: String,
        /// Simulate a platform with push support
        #[arg(long)]
        push_supported: bool,
        /// Messages to send, in order
        #[arg(required = true)]
        messages: Vec<String>,
    },
    /// List notification channels with their display metadata
    Channels,
    /// Build a form, fill it and submit it
    Form {
        /// Field as TYPE:LABEL or TYPE:LABEL=VALUE, repeatable
        #[arg(long = "field", value_name = "TYPE:LABEL[=VALUE]")]
        fields: Vec<String>,
        /// Field id to remove before submitting, repeatable
        #[arg(long = "remove", value_name = "ID")]
        remove: Vec<String>,
    },
    /// List every supported discriminant
    Kinds,
    /// Show version information
    Version,
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        settings.logging.level = level;
    }
    init_logging(&settings.logging);

    match cli.command {
        Commands::Report { report_type, format, json } => {
            generate_report(&settings, report_type.as_deref(), format.as_deref(), json)
        }
        Commands::Reports => show_report_matrix(),
        Commands::Notify { channel, push_supported, messages } => {
            send_notifications(settings, &channel, push_supported, &messages)
        }
        Commands::Channels => list_channels(&settings),
        Commands::Form { fields, remove } => build_form(&fields, &remove),
        Commands::Kinds => list_kinds(),
        Commands::Version => show_version(),
    }
}

fn generate_report(
    settings: &Settings,
    report_type: Option<&str>,
    format: Option<&str>,
    as_json: bool,
) -> Result<()> {
    let report_type = match report_type {
        Some(raw) => raw.parse::<ReportType>()?,
        None => settings.reports.default_type,
    };
    let format = match format {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => settings.reports.default_format,
    };

    let mut desk = ReportDesk::with_selection(report_type, format);
    let report = desk.generate_report();

    if as_json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("📊 {}", report.title);
    println!("   Format: {}", format);
    println!();
    println!("{}", report.content);
    println!();
    println!("   {}", report.footer);
    println!("   Généré le {}", report.generated_at.format("%d/%m/%Y %H:%M:%S"));

    Ok(())
}

fn show_report_matrix() -> Result<()> {
    println!("📚 Available reports:");

    for report_type in ReportType::ALL {
        let strategy = ReportFactory::create(report_type);
        println!("\n  📊 {} ({})", strategy.title(), report_type);
        for format in ExportFormat::ALL {
            println!("     {:<6} {}", format, strategy.footer(format));
        }
    }

    Ok(())
}

fn send_notifications(
    mut settings: Settings,
    channel: &str,
    push_supported: bool,
    messages: &[String],
) -> Result<()> {
    let channel = channel.parse::<NotificationChannel>()?;
    if push_supported {
        settings.notifications.platform = PlatformCapabilities::supported();
    }

    let mut center = NotificationCenter::new(settings.notifications);

    for message in messages {
        match center.send(channel, message) {
            Ok(Some(record)) => println!("✅ #{} {} {}", record.id, record.icon, record.message),
            Ok(None) => println!("⚪ Not delivered: {}", message),
            Err(rejection) => println!("❌ {}", rejection),
        }
    }

    if center.is_empty() {
        println!("\n📭 No notifications sent");
        return Ok(());
    }

    println!("\n📬 Notifications envoyées ({}):", center.len());
    for record in center.notifications() {
        println!("  {} {}", record.icon, record.title);
        println!("     {}", record.message);
        println!("     {}", record.timestamp.format("%d/%m/%Y %H:%M"));
    }

    Ok(())
}

fn list_channels(settings: &Settings) -> Result<()> {
    println!("📡 Notification channels:");
    for channel in NotificationChannel::ALL {
        let strategy = NotificationFactory::create(channel, &settings.notifications);
        println!("  {} {:<8} {}", strategy.icon(), channel, strategy.title());
    }

    let push = if settings.notifications.platform.supports_push() { "✅" } else { "❌" };
    println!("\n  Push support on this platform: {}", push);

    Ok(())
}

/// Split a `TYPE:LABEL[=VALUE]` field argument
pub fn parse_field_arg(arg: &str) -> Result<(&str, &str, Option<&str>)> {
    let (field_type, rest) = arg
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid field '{}', expected TYPE:LABEL[=VALUE]", arg))?;

    match rest.split_once('=') {
        Some((label, value)) => Ok((field_type, label, Some(value))),
        None => Ok((field_type, rest, None)),
    }
}

/// Convert a raw command-line value into the shape `field_type` holds
pub fn parse_field_value(field_type: FieldType, raw: &str) -> Result<Value> {
    let value = match field_type {
        FieldType::Number => {
            if let Ok(int) = raw.parse::<i64>() {
                Value::from(int)
            } else {
                let float = raw
                    .parse::<f64>()
                    .with_context(|| format!("'{}' is not a number", raw))?;
                if !float.is_finite() {
                    bail!("'{}' is not a number", raw);
                }
                Value::from(float)
            }
        }
        FieldType::Checkbox => {
            let checked = raw
                .parse::<bool>()
                .with_context(|| format!("'{}' is not true or false", raw))?;
            Value::Bool(checked)
        }
        _ => Value::String(raw.to_string()),
    };
    Ok(value)
}

fn build_form(field_args: &[String], remove: &[String]) -> Result<()> {
    let mut session = FormSession::new();

    for arg in field_args {
        let (field_type, label, raw_value) = parse_field_arg(arg)?;

        let field = match session.add_field(field_type, label) {
            Ok(field) => field,
            Err(crate::error::FormError::Rejected(rejection)) => {
                println!("❌ {}", rejection);
                continue;
            }
            Err(e) => bail!(e),
        };
        let (id, kind) = (field.id.clone(), field.field_type);
        println!(
            "➕ {} {} \"{}\" ({})",
            id,
            kind,
            label,
            widget_for(kind.as_str()).element()
        );

        if let Some(raw) = raw_value {
            let applied = if kind == FieldType::File {
                session.attach_file(
                    &id,
                    FileSelection {
                        name: raw.to_string(),
                        size: 0,
                        mime_type: "application/octet-stream".to_string(),
                    },
                )
            } else {
                session.set_value(&id, parse_field_value(kind, raw)?)
            };
            if let Err(rejection) = applied {
                println!("❌ {}", rejection);
            }
        }
    }

    for id in remove {
        if session.remove_field(id) {
            println!("➖ {}", id);
        } else {
            println!("⚠️  No field with id {}", id);
        }
    }

    if session.is_empty() {
        println!("📭 Form has no fields");
        return Ok(());
    }

    match session.submit() {
        Ok(data) => {
            println!("✅ Formulaire soumis:");
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        Err(rejection) => println!("❌ {}", rejection),
    }

    Ok(())
}

fn list_kinds() -> Result<()> {
    println!("📊 Report types:   {}", ReportFactory::available_report_types().join(", "));
    println!(
        "📄 Export formats: {}",
        ExportFormat::ALL.map(|f| f.as_str()).join(", ")
    );
    println!("📡 Channels:       {}", NotificationFactory::available_channels().join(", "));
    println!("📝 Field types:    {}", FieldFactory::available_field_types().join(", "));
    Ok(())
}

fn show_version() -> Result<()> {
    println!("factoryctl {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_command() {
        let cli = Cli::try_parse_from(["factoryctl", "report", "--type", "inventory", "--json"]).unwrap();
        match cli.command {
            Commands::Report { report_type, format, json } => {
                assert_eq!(report_type.as_deref(), Some("inventory"));
                assert!(format.is_none());
                assert!(json);
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_notify_requires_a_message() {
        assert!(Cli::try_parse_from(["factoryctl", "notify", "--channel", "sms"]).is_err());
    }

    #[test]
    fn test_parse_field_arg() {
        assert_eq!(parse_field_arg("text:Name").unwrap(), ("text", "Name", None));
        assert_eq!(parse_field_arg("number:Age=30").unwrap(), ("number", "Age", Some("30")));
        assert_eq!(parse_field_arg("text:Eq=a=b").unwrap(), ("text", "Eq", Some("a=b")));
        assert!(parse_field_arg("Name").is_err());
    }

    #[test]
    fn test_parse_field_value() {
        assert_eq!(parse_field_value(FieldType::Number, "30").unwrap(), json!(30));
        assert_eq!(parse_field_value(FieldType::Number, "1.5").unwrap(), json!(1.5));
        assert!(parse_field_value(FieldType::Number, "thirty").is_err());
        assert!(parse_field_value(FieldType::Number, "NaN").is_err());
        assert!(parse_field_value(FieldType::Number, "inf").is_err());
        assert!(parse_field_value(FieldType::Number, "-infinity").is_err());
        assert_eq!(parse_field_value(FieldType::Checkbox, "true").unwrap(), json!(true));
        assert!(parse_field_value(FieldType::Checkbox, "yes").is_err());
        assert_eq!(parse_field_value(FieldType::Email, " a@b ").unwrap(), json!(" a@b "));
    }
}
