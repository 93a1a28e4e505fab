use clap::Parser;
use order_report::cli::{Cli, Commands};
use order_report::config::Config;
use order_report::error::Result;
use order_report::filter::is_transaction;
use order_report::normalizer::extract_records;
use order_report::schema::SchemaBinding;
use order_report::{export, reader, report};
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Report { input, output, sheet, skip_rows } => {
            println!("📊 order-report - Classification Report\n");

            let sheet_name = sheet.or_else(|| config.sheet.clone());
            let skip = skip_rows.unwrap_or(config.skip_rows);

            println!("[1/3] Reading workbook...");
            let data = reader::read_workbook(&input, sheet_name.as_deref(), skip)?;
            println!("✔ {} data row(s) read\n", data.rows.len());

            println!("[2/3] Classifying and aggregating...");
            let summary = report::generate_report(&data)?;
            if cli.verbose {
                println!("- {} category group(s) in final report", summary.rows.len());
            }
            println!("✔ Processing complete\n");

            println!("Final Classification Group Wise Report");
            print!("{}", report::format_table(&summary));
            println!();

            println!("[3/3] Writing report...");
            let output_path = resolve_output_path(output, &config);
            export::write_report(&summary, &output_path)?;
            println!("✔ Report saved: {}", output_path.display());

            println!("\n✅ Done");
        }

        Commands::Check { input, sheet, skip_rows } => {
            println!("🔎 order-report - Schema Check\n");

            let sheet_name = sheet.or_else(|| config.sheet.clone());
            let skip = skip_rows.unwrap_or(config.skip_rows);

            let data = reader::read_workbook(&input, sheet_name.as_deref(), skip)?;
            let binding = SchemaBinding::resolve(&data.headers)?;

            println!("Resolved columns:");
            println!("  Classification: {}", binding.group.label);
            println!("  Rate Freeze:    {}", binding.rate_freeze.label);
            println!("  Date:           {}", binding.date.label);
            for measure in &binding.measures {
                println!("  Measure:        {}", measure.label);
            }

            let records = extract_records(&data, &binding);
            let retained = records.iter().filter(|r| is_transaction(r)).count();
            println!(
                "\n{} data row(s), {} transactional row(s) after filtering",
                records.len(),
                retained
            );

            println!("\n✅ Schema OK");
        }

        Commands::Config { set_output_dir, show } => {
            let mut config = config;
            let show = should_show_config(set_output_dir.is_some(), show);

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ Default output directory saved");
            }

            if show {
                println!("Configuration:");
                println!(
                    "  Output dir: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|d| d.display().to_string())
                        .unwrap_or_else(|| "(current directory)".into())
                );
                println!("  Skip rows:  {}", config.skip_rows);
                println!(
                    "  Sheet:      {}",
                    config.sheet.as_deref().unwrap_or("(first sheet)")
                );
            }
        }
    }

    Ok(())
}

/// Default or `--show`: print the configuration. A bare `config` invocation
/// shows rather than silently doing nothing.
fn should_show_config(has_edit: bool, show: bool) -> bool {
    show || !has_edit
}

fn resolve_output_path(output: Option<PathBuf>, config: &Config) -> PathBuf {
    match output {
        Some(path) => path,
        None => {
            let name = export::default_report_filename();
            match &config.output_dir {
                Some(dir) => dir.join(name),
                None => PathBuf::from(name),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_config_shows() {
        assert!(should_show_config(false, false));
        assert!(should_show_config(false, true));
        assert!(should_show_config(true, true));
        // An edit without --show stays quiet apart from its confirmation.
        assert!(!should_show_config(true, false));
    }

    #[test]
    fn test_resolve_output_path() {
        let config = Config {
            output_dir: Some(PathBuf::from("/tmp/reports")),
            ..Config::default()
        };
        let explicit = resolve_output_path(Some(PathBuf::from("out.xlsx")), &config);
        assert_eq!(explicit, PathBuf::from("out.xlsx"));

        let defaulted = resolve_output_path(None, &config);
        assert!(defaulted.starts_with("/tmp/reports"));
        assert!(defaulted
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("Final_Classification_Report_"));
    }
}
