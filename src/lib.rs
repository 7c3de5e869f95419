//! IPv4 subnet analyzer.
//!
//! [`processing::normalize`] turns an address and mask typed by a person into
//! a [`models::NetworkDescriptor`]; [`processing::siblings`] lists the
//! neighbouring blocks of the same size. Everything is a pure function over
//! `u32`s, the [`output`] module renders results and [`run`] wires it all to
//! the command line.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use cli::{Command, OutputFormat};
use config::Config;
use models::{mask_catalogue, SiblingSubnet};
use std::error::Error;

pub use error::SubnetError;

/// Execute one command and return the rendered text.
pub fn run(config: &Config, command: &Command) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Analyze(args) => {
            let d = processing::normalize(&args.address, args.mask.as_deref().unwrap_or(""))?;
            log::info!("Analyzed {}{} -> {}", d.address, d.cidr(), d.network);
            let rows: Vec<SiblingSubnet> = if config.show_siblings {
                processing::siblings(&d).collect()
            } else {
                Vec::new()
            };

            let text = match config.output {
                OutputFormat::Terminal => {
                    let mut text = output::render_fields(&d);
                    if !rows.is_empty() {
                        text.push('\n');
                        text.push_str(&output::render_siblings(&d, &rows));
                    }
                    text
                }
                OutputFormat::Csv => output::siblings_csv(&d, &rows),
                OutputFormat::Json => output::to_json(&output::SubnetReport::new(&d, &rows))?,
            };
            Ok(text)
        }
        Command::Wildcard { mask } => {
            let w = processing::wildcard(mask)?;
            Ok(match config.output {
                OutputFormat::Terminal => output::render_wildcard(&w),
                OutputFormat::Csv => output::wildcard_csv(&w),
                OutputFormat::Json => output::to_json(&w)?,
            })
        }
        Command::Mss { mtu, tunnel } => {
            let r = processing::mss(mtu, *tunnel)?;
            Ok(match config.output {
                OutputFormat::Terminal => output::render_mss(&r),
                OutputFormat::Csv => output::mss_csv(&r),
                OutputFormat::Json => output::to_json(&r)?,
            })
        }
        Command::Masks => {
            let masks = mask_catalogue();
            Ok(match config.output {
                OutputFormat::Terminal => output::render_masks(&masks),
                OutputFormat::Csv => output::masks_csv(&masks),
                OutputFormat::Json => {
                    let list: Vec<serde_json::Value> = masks
                        .iter()
                        .map(|(len, mask)| {
                            serde_json::json!({ "prefix": len, "mask": mask.to_string() })
                        })
                        .collect();
                    output::to_json(&list)?
                }
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cli::AnalyzeArgs;

    fn analyze_cmd(address: &str, mask: Option<&str>) -> Command {
        Command::Analyze(AnalyzeArgs {
            address: address.to_string(),
            mask: mask.map(str::to_string),
        })
    }

    #[test]
    fn test_run_analyze_json() {
        let config = Config {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let text = run(&config, &analyze_cmd("8.8.8.8", Some("/32"))).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["range"], "8.8.8.8 - 8.8.8.8");
        assert_eq!(v["ip_type"], "Public");
        assert_eq!(v["siblings"].as_array().unwrap().len(), 256);
    }

    #[test]
    fn test_run_analyze_without_siblings() {
        let config = Config {
            output: OutputFormat::Csv,
            show_siblings: false,
            ..Default::default()
        };
        let text = run(&config, &analyze_cmd("10.0.0.5/31", None)).unwrap();
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_run_analyze_error_message() {
        let err = run(&Config::default(), &analyze_cmd("192.168.1.1", Some("255.255.0.255")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid subnet mask: '255.255.0.255'");
    }

    #[test]
    fn test_run_masks_json() {
        let config = Config {
            output: OutputFormat::Json,
            ..Default::default()
        };
        let v: serde_json::Value =
            serde_json::from_str(&run(&config, &Command::Masks).unwrap()).unwrap();
        assert_eq!(v[0]["prefix"], 32);
        assert_eq!(v[8]["mask"], "255.255.255.0");
    }
}
