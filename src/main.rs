//! cash-flow-minimizer CLI
//!
//! Compute channel-aware settlements for a group from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Settle a group described in JSON
//! cash-flow-minimizer settle --input group.json
//!
//! # Console token format on stdin, JSON output
//! cash-flow-minimizer settle --input - --input-format text --format json
//!
//! # Show net balances only
//! cash-flow-minimizer balances --input group.json
//!
//! # Generate a random group for testing
//! cash-flow-minimizer generate --participants 8 --debts 20 --seed 1
//! ```

use cash_flow_minimizer::input::{text, GroupInput};
use cash_flow_minimizer::prelude::*;
use cash_flow_minimizer::simulation::random_group::{generate_random_group, GroupConfig};
use std::fs;
use std::io;
use std::process;

fn print_usage() {
    eprintln!(
        r#"cash-flow-minimizer — settle group debts over shared payment channels

USAGE:
    cash-flow-minimizer <COMMAND> [OPTIONS]

COMMANDS:
    settle      Compute the settlement plan for a group
    balances    Print each participant's net balance
    generate    Generate a random group (for testing)
    help        Show this message

OPTIONS (settle, balances):
    --input <FILE>           Path to the group file, or - for stdin
    --input-format <FORMAT>  json or text (default: json for *.json, text otherwise)
    --format <FORMAT>        Output format: text (default) or json

OPTIONS (generate):
    --participants <N>  Number of participants incl. Treasurer (default: 10)
    --debts <N>         Number of debts (default: 30)
    --channels <LIST>   Comma-separated channel pool (default: gpay,paytm,phonepe,bhim)
    --seed <N>          Seed for a reproducible group
    --output <FILE>     Write to file instead of stdout

The first participant of every group is the Treasurer.

EXAMPLES:
    cash-flow-minimizer settle --input group.json
    cash-flow-minimizer settle --input group.txt --format json
    cash-flow-minimizer balances --input group.json
    cash-flow-minimizer generate --participants 5 --channels gpay,bhim --output group.json"#
    );
}

struct InputOptions {
    path: String,
    input_format: Option<String>,
    format: String,
}

fn parse_input_options(args: &[String]) -> InputOptions {
    let mut path = None;
    let mut input_format = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--input-format" => {
                i += 1;
                input_format = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input-format requires 'json' or 'text'");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let path = path.unwrap_or_else(|| {
        eprintln!("Error: --input <FILE> is required");
        process::exit(1);
    });

    InputOptions {
        path,
        input_format,
        format,
    }
}

fn load_ledger(options: &InputOptions) -> Ledger {
    let content = if options.path == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(&options.path)
    }
    .unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", options.path, e);
        process::exit(1);
    });

    let format = options.input_format.clone().unwrap_or_else(|| {
        if options.path.ends_with(".json") {
            "json".to_string()
        } else {
            "text".to_string()
        }
    });

    let group = match format.as_str() {
        "json" => GroupInput::from_json(&content).unwrap_or_else(|e| {
            eprintln!("Error parsing JSON: {}", e);
            eprintln!("Expected format:");
            eprintln!(
                r#"{{
  "participants": [ {{ "name": "TREASURER", "channels": ["gpay"] }} ],
  "debts": [ {{ "debtor": "ASHA", "creditor": "RAVI", "amount": 120 }} ]
}}"#
            );
            process::exit(1);
        }),
        "text" => text::parse(&content).unwrap_or_else(|e| {
            eprintln!("Error: {}", e);
            process::exit(1);
        }),
        other => {
            eprintln!("Unknown input format: {}", other);
            process::exit(1);
        }
    };

    group.build_ledger().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            process::exit(1);
        }
    }
}

#[derive(serde::Serialize)]
struct PlanOutput<'a> {
    plan: &'a SettlementPlan,
    summary: SettlementSummary,
}

fn cmd_settle(args: &[String]) {
    let options = parse_input_options(args);
    let ledger = load_ledger(&options);
    let plan = settle(&ledger);
    let summary = SettlementSummary::from_plan(&ledger, &plan);

    if options.format == "json" {
        print_json(&PlanOutput {
            plan: &plan,
            summary,
        });
    } else {
        println!("{}", plan);
        println!("{}", summary);
    }
}

#[derive(serde::Serialize)]
struct BalanceOutput {
    participant: String,
    channels: Vec<String>,
    balance: i64,
    status: String,
}

fn cmd_balances(args: &[String]) {
    let options = parse_input_options(args);
    let ledger = load_ledger(&options);
    let sheet = BalanceSheet::from_ledger(&ledger);

    let rows: Vec<BalanceOutput> = ledger
        .participants()
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let balance = sheet.get(i);
            BalanceOutput {
                participant: p.name().to_string(),
                channels: p.channels().iter().map(|c| c.to_string()).collect(),
                balance,
                status: if balance > 0 {
                    "CREDITOR".to_string()
                } else if balance < 0 {
                    "DEBTOR".to_string()
                } else {
                    "SETTLED".to_string()
                },
            }
        })
        .collect();

    if options.format == "json" {
        print_json(&rows);
    } else {
        println!("=== Net Balances ===");
        for (i, row) in rows.iter().enumerate() {
            let role = if i == ledger.treasurer_index() {
                " (treasurer)"
            } else {
                ""
            };
            println!(
                "  {:<15} {:>10}  [{}]{}",
                row.participant, row.balance, row.status, role
            );
        }
    }
}

fn cmd_generate(args: &[String]) {
    let mut config = GroupConfig::default();
    let mut debts_count = 30usize;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--participants" => {
                i += 1;
                config.participant_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--participants requires a number");
                        process::exit(1);
                    });
            }
            "--debts" => {
                i += 1;
                debts_count = args
                    .get(i)
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("--debts requires a number");
                        process::exit(1);
                    });
            }
            "--channels" => {
                i += 1;
                let list = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--channels requires a comma-separated list");
                    process::exit(1);
                });
                config.channel_pool = list
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "--seed" => {
                i += 1;
                config.seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a number");
                    process::exit(1);
                }));
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    config.debt_count = debts_count;
    let group = generate_random_group(&config);

    let json = group.to_json().unwrap_or_else(|e| {
        eprintln!("Error serializing group: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!(
            "Generated {} debts across {} participants → {}",
            group.debts.len(),
            group.participants.len(),
            path
        );
    } else {
        println!("{}", json);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "settle" => cmd_settle(rest),
        "balances" => cmd_balances(rest),
        "generate" => cmd_generate(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
