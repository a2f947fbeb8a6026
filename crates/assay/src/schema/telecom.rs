//! Built-in schema for telecommunications customer data.

use super::column::ColumnSchema;
use super::table::TableSchema;

/// Columns that must never be missing in telecom customer data.
pub const TELECOM_CRITICAL_COLUMNS: &[&str] = &[
    "customer_id",
    "service_plan",
    "contract_type",
    "tenure_months",
    "monthly_charges",
    "data_usage_gb",
];

/// Columns kept by [`simplified_telecom_schema`].
const SIMPLIFIED_COLUMNS: &[&str] = &[
    "customer_id",
    "age",
    "gender",
    "location",
    "service_plan",
    "contract_type",
    "tenure_months",
    "monthly_charges",
    "data_usage_gb",
    "voice_minutes",
    "sms_count",
    "churn",
];

fn count(description: &str) -> ColumnSchema {
    ColumnSchema::numeric().min(0.0).describe(description)
}

fn percent(description: &str) -> ColumnSchema {
    ColumnSchema::numeric().range(0.0, 100.0).describe(description)
}

fn score(description: &str) -> ColumnSchema {
    ColumnSchema::numeric().range(1.0, 10.0).describe(description)
}

/// Full schema for telecom customer, usage and network-quality records.
pub fn telecom_schema() -> TableSchema {
    TableSchema::builder()
        // Customer demographics
        .column(
            "customer_id",
            ColumnSchema::string()
                .required()
                .unique()
                .describe("Unique identifier for the customer"),
        )
        .column(
            "age",
            ColumnSchema::numeric()
                .required()
                .range(18.0, 120.0)
                .describe("Customer age in years"),
        )
        .column(
            "gender",
            ColumnSchema::categorical(["Male", "Female", "Other", "Prefer not to say"])
                .describe("Customer gender"),
        )
        .column(
            "location",
            ColumnSchema::string()
                .required()
                .describe("Customer location (city or region)"),
        )
        // Service information
        .column(
            "service_plan",
            ColumnSchema::categorical(["Basic", "Standard", "Premium", "Enterprise"])
                .required()
                .describe("Customer's service plan"),
        )
        .column(
            "contract_type",
            ColumnSchema::categorical(["Month-to-Month", "One Year", "Two Year"])
                .required()
                .describe("Type of contract"),
        )
        .column(
            "tenure_months",
            count("Number of months the customer has been with the provider").required(),
        )
        .column(
            "monthly_charges",
            count("Monthly charges in currency units").required(),
        )
        .column(
            "total_charges",
            count("Total charges to date in currency units").required(),
        )
        // Usage
        .column(
            "data_usage_gb",
            count("Monthly data usage in gigabytes").required(),
        )
        .column(
            "voice_minutes",
            count("Monthly voice usage in minutes").required(),
        )
        .column("sms_count", count("Monthly SMS count").required())
        .column(
            "international_calls_minutes",
            count("Monthly international calls in minutes"),
        )
        // Network performance
        .column(
            "download_speed_mbps",
            count("Average download speed in Mbps"),
        )
        .column("upload_speed_mbps", count("Average upload speed in Mbps"))
        .column("latency_ms", count("Average network latency in milliseconds"))
        .column(
            "packet_loss_percent",
            percent("Average packet loss percentage"),
        )
        .column(
            "network_availability_percent",
            percent("Network availability percentage"),
        )
        // Call quality
        .column("call_drop_count", count("Number of dropped calls"))
        .column(
            "call_setup_success_percent",
            percent("Call setup success rate percentage"),
        )
        .column("voice_quality_score", score("Voice quality score (1-10)"))
        // Customer service
        .column(
            "support_calls_count",
            count("Number of customer support calls"),
        )
        .column(
            "support_tickets_count",
            count("Number of support tickets raised"),
        )
        .column(
            "avg_resolution_time_hours",
            count("Average resolution time for support tickets in hours"),
        )
        // Targets
        .column(
            "churn",
            ColumnSchema::boolean().describe("Whether the customer churned"),
        )
        .column(
            "customer_satisfaction_score",
            score("Customer satisfaction score (1-10)"),
        )
        .build()
        .expect("built-in telecom schema is valid")
}

/// Twelve-column subset of [`telecom_schema`] covering demographics, plan
/// and core usage.
pub fn simplified_telecom_schema() -> TableSchema {
    telecom_schema()
        .subset(SIMPLIFIED_COLUMNS.iter().copied())
        .expect("simplified columns exist in the telecom schema")
}
