//! # Toolcraft CLI Application
//!
//! Command-line shell over the `toolcraft_core` calculation engine. Numeric
//! arguments are taken as raw strings and pushed through the engine's input
//! helpers, so the CLI behaves exactly like the site's forms: bad input is
//! reported as not computable and nothing else happens.
//!
//! ## Usage
//!
//! ```bash
//! toolcraft bmi 70 175
//! toolcraft emi 500000 10 5
//! toolcraft age 2000-01-31 --as-of 2024-03-01
//! toolcraft gst 1000 --rate 18
//! toolcraft password --length 16 --no-symbols
//! toolcraft qr "https://example.com"
//! toolcraft request '{"type":"Bmi","weight_kg":70.0,"height_cm":175.0}'
//! ```

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use toolcraft_core::calculators::{age, bmi, emi, gst, password, qr};
use toolcraft_core::calculators::{
    AgeInput, BmiInput, CalculatorRequest, EmiInput, GstInput, GstSlab, PasswordSpec, QrLinkInput,
};
use toolcraft_core::errors::{CalcResult, NotComputable};
use toolcraft_core::input;

#[derive(Parser)]
#[command(name = "toolcraft", version, about = "Toolcraft utility calculators")]
struct Cli {
    /// Print the result as JSON instead of a text summary
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Body Mass Index from weight and height
    Bmi {
        /// Weight in kilograms
        weight: String,
        /// Height in centimeters
        height: String,
    },
    /// Equated monthly installment for a loan
    Emi {
        /// Loan principal
        principal: String,
        /// Annual interest rate in percent
        rate: String,
        /// Tenure in years
        years: String,
    },
    /// Age in years, months, and days
    Age {
        /// Date of birth (YYYY-MM-DD)
        birth_date: String,
        /// Reference date (YYYY-MM-DD); today when omitted
        #[arg(long)]
        as_of: Option<String>,
    },
    /// GST amount and total payable
    Gst {
        /// Original amount
        amount: String,
        /// Slab rate in percent (5, 12, 18, or 28)
        #[arg(long, default_value_t = 18)]
        rate: u8,
    },
    /// Generate a random password
    Password {
        /// Password length (6-32)
        #[arg(long, default_value_t = 12)]
        length: u32,
        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Exclude lowercase letters
        #[arg(long)]
        no_lowercase: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },
    /// Build a QR image-service link
    Qr {
        /// URL or text to encode
        content: String,
        /// Image edge length in pixels
        #[arg(long, default_value_t = 200)]
        size: u32,
    },
    /// Run a tagged JSON request (from the argument or stdin)
    Request {
        /// Request body, e.g. '{"type":"Gst","amount":1000.0}'
        body: Option<String>,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CalcResult<()> {
    match &cli.command {
        Commands::Bmi { weight, height } => {
            let input = BmiInput {
                weight_kg: input::parse_positive("weight_kg", weight)?,
                height_cm: input::parse_positive("height_cm", height)?,
            };
            let result = bmi::calculate(&input)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("BMI:      {:.1}", result.value);
                println!("Category: {}", result.category.label());
            }
            Ok(())
        }
        Commands::Emi {
            principal,
            rate,
            years,
        } => {
            let input = EmiInput {
                principal: input::parse_positive("principal", principal)?,
                annual_rate_pct: input::parse_positive("annual_rate_pct", rate)?,
                tenure_years: input::parse_positive("tenure_years", years)?,
            };
            let result = emi::calculate(&input)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("Monthly EMI:    {}", result.monthly_emi);
                println!("Total Interest: {}", result.total_interest);
                println!("Total Payment:  {}", result.total_payment);
                let slices = result.breakdown(input.principal);
                println!(
                    "Breakdown:      principal {:.0} / interest {}",
                    slices.principal, slices.total_interest
                );
            }
            Ok(())
        }
        Commands::Age { birth_date, as_of } => {
            let input = AgeInput {
                birth_date: parse_date("birth_date", birth_date)?,
                as_of: as_of
                    .as_deref()
                    .map(|raw| parse_date("as_of", raw))
                    .transpose()?,
            };
            let result = age::calculate(&input)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("Years:  {}", result.years);
                println!("Months: {}", result.months);
                println!("Days:   {}", result.days);
            }
            Ok(())
        }
        Commands::Gst { amount, rate } => {
            let input = GstInput {
                amount: input::parse_positive("amount", amount)?,
                rate: GstSlab::try_from(*rate)?,
            };
            let result = gst::calculate(&input)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("GST Amount:    +{:.2}", result.tax_amount);
                println!("Total Payable: {:.2}", result.total_payable);
            }
            Ok(())
        }
        Commands::Password {
            length,
            no_uppercase,
            no_lowercase,
            no_digits,
            no_symbols,
        } => {
            let spec = PasswordSpec {
                length: *length,
                include_uppercase: !no_uppercase,
                include_lowercase: !no_lowercase,
                include_digits: !no_digits,
                include_symbols: !no_symbols,
            };
            let result = password::generate(&spec)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("{}", result.value);
            }
            Ok(())
        }
        Commands::Qr { content, size } => {
            let input = QrLinkInput {
                content: content.clone(),
                size_px: *size,
            };
            let result = qr::build_link(&input)?;
            if cli.json {
                print_json(&result);
            } else {
                println!("{}", result.url);
            }
            Ok(())
        }
        Commands::Request { body } => {
            let raw = match body {
                Some(text) => text.clone(),
                None => read_stdin()?,
            };
            let request: CalculatorRequest = serde_json::from_str(&raw)
                .map_err(|e| NotComputable::new("request", raw.trim(), e.to_string()))?;
            log::debug!("running {} request from shell", request.calc_type());
            let response = request.run()?;
            print_json(&response);
            Ok(())
        }
    }
}

fn parse_date(field: &str, raw: &str) -> CalcResult<chrono::NaiveDate> {
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| NotComputable::new(field, raw, "Expected a YYYY-MM-DD date"))
}

fn read_stdin() -> CalcResult<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| NotComputable::new("request", "<stdin>", e.to_string()))?;
    Ok(buffer)
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: {}", e),
    }
}
