//! `pdt`: the thin front end around the feature encoder and model.
//!
//! One invocation is one synchronous prediction: parse the survey answers,
//! load the artifact, encode, predict, print. Load failures exit with code
//! 2 before any prediction is attempted; prediction failures exit with 1.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use pdt_features::{Flag, Observation, TrafficLevel, Weather};
use pdt_model::Recommender;

#[derive(Debug, Parser)]
#[command(
    name = "pdt",
    version,
    about = "Project COOK – PDT (Product Demand Tomorrow) recommendation",
    long_about = "Encodes a day's survey answers into the feature vector the\n\
        pre-trained regression model expects and prints the recommended\n\
        number of units to cook.\n\n\
        EXAMPLES:\n\
        \n  pdt --date 2024-03-15 --traffic Neutral --weather Cold\n\
        \n  pdt --date 2024-12-31 --traffic \"Much Higher\" --weather Rainy \\\n\
             --event Yes --out-of-stock Yes --shredded 20 -v"
)]
struct Cli {
    /// Path to the serialized regression artifact
    #[arg(long, default_value = "pdt_recommendation_model.json")]
    model: PathBuf,

    /// Forecast date (YYYY-MM-DD)
    #[arg(long)]
    date: NaiveDate,

    /// Shredded chicken on hand, in units
    #[arg(long, default_value_t = 12)]
    shredded: u32,

    /// Did stock run out before 7pm? (No/Yes)
    #[arg(long, default_value = "No")]
    out_of_stock: Flag,

    /// Expected customer traffic (Much Lower/Neutral/Higher/Much Higher)
    #[arg(long, default_value = "Neutral")]
    traffic: TrafficLevel,

    /// Weather outlook (Cold/Warm/Hot/Rainy)
    #[arg(long, default_value = "Warm")]
    weather: Weather,

    /// Public or store event? (No/Yes)
    #[arg(long, default_value = "No")]
    event: Flag,

    /// Increase verbosity (-v echoes the assembled feature vector)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if cli.verbose > 1 {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    let recommender = match Recommender::load(&cli.model) {
        Ok(recommender) => recommender,
        Err(err) => {
            eprintln!("error: cannot load model from {}: {err}", cli.model.display());
            return ExitCode::from(2);
        }
    };

    let observation = Observation {
        date: cli.date,
        shredded_units: cli.shredded,
        out_of_stock_before_7pm: cli.out_of_stock,
        traffic: cli.traffic,
        weather: cli.weather,
        public_event: cli.event,
    };

    match recommender.recommend(&observation) {
        Ok(rec) => {
            if cli.verbose > 0 {
                println!("model: {}", recommender.model_name());
                for (name, value) in rec.vector.iter() {
                    println!("  {name} = {value}");
                }
                println!("raw prediction: {:.3}", rec.raw);
            }
            println!("Recommended units to cook: {}", rec.units);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("prediction error: {err}");
            ExitCode::FAILURE
        }
    }
}
