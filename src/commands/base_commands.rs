use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the portfolio from: a local snapshot YAML or a hosted
/// Supabase table pair. Exactly one must be given.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct StoreArgs {
    /// Portfolio snapshot YAML file
    #[arg(short, long)]
    pub input: Option<String>,
    /// Hosted table config YAML (API key from SUPABASE_API_KEY)
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the built-in sample portfolio to a YAML file
    Seed {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Show the dashboard: latest alert, KPIs, top risk projects
    Dashboard {
        #[command(flatten)]
        store: StoreArgs,
    },
    /// List alerts, newest first
    Alerts {
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Show one project in detail
    Show {
        #[command(flatten)]
        store: StoreArgs,
        /// Project id
        #[arg(short, long)]
        project: String,
    },
    /// Render a project's margin trend as an SVG chart
    Chart {
        #[command(flatten)]
        store: StoreArgs,
        /// Project id
        #[arg(short, long)]
        project: String,
        /// Output SVG file
        #[arg(short, long)]
        output: String,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 320.0)]
        width: f64,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 180.0)]
        height: f64,
    },
    /// Assign a pending alert to a project manager
    Assign {
        #[command(flatten)]
        store: StoreArgs,
        /// Alert id
        #[arg(short, long)]
        alert: String,
        /// Project manager to assign
        #[arg(short, long)]
        pm: String,
        /// Due label, e.g. "within 3 days"
        #[arg(short, long)]
        due: String,
        /// Optional note for the assignee
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_defaults_to_the_dashboard_canvas_size() {
        let args = CliArgs::parse_from([
            "marginwatch",
            "chart",
            "-i",
            "portfolio.yaml",
            "-p",
            "P001",
            "-o",
            "trend.svg",
        ]);

        if let Commands::Chart { width, height, .. } = args.command {
            assert_eq!(width, 320.0);
            assert_eq!(height, 180.0);
        } else {
            panic!("expected chart command");
        }
    }

    #[test]
    fn store_source_is_mutually_exclusive() {
        let result = CliArgs::try_parse_from([
            "marginwatch",
            "dashboard",
            "-i",
            "portfolio.yaml",
            "-c",
            "supabase.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn store_source_is_required() {
        let result = CliArgs::try_parse_from(["marginwatch", "dashboard"]);
        assert!(result.is_err());
    }

    #[test]
    fn assign_accepts_an_optional_note() {
        let args = CliArgs::parse_from([
            "marginwatch",
            "assign",
            "-i",
            "portfolio.yaml",
            "-a",
            "A001",
            "-p",
            "王小明",
            "-d",
            "3 天內",
        ]);

        if let Commands::Assign { note, .. } = args.command {
            assert_eq!(note, None);
        } else {
            panic!("expected assign command");
        }
    }
}
