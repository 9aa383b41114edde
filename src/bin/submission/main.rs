use std::path::PathBuf;

use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vqa_submission::config::{ClassNamesPolicy, SubmissionConfig};
use vqa_submission::{run_submission, VqaResult};

#[derive(StructOpt, Debug, Clone)]
#[structopt(about = "Answers the VQA challenge test questions with a trained Keras model")]
pub struct Opts {
    /// Directory containing simpsons_test_phase1/ (default: current directory)
    #[structopt(parse(from_os_str))]
    pub input_dir: Option<PathBuf>,

    /// Directory to write answer.txt into (default: current directory)
    #[structopt(parse(from_os_str))]
    pub output_dir: Option<PathBuf>,

    /// Serialized model bundle (default: model.h5)
    #[structopt(short, long, parse(from_os_str))]
    pub model: Option<PathBuf>,

    #[structopt(short, long)]
    pub batch_size: Option<usize>,

    /// Threads used to decode and encode images
    #[structopt(short, long)]
    pub workers: Option<usize>,

    /// Fail instead of using the built-in answer labels when the bundle has none
    #[structopt(long)]
    pub require_class_names: bool,

    /// JSON submission config; command line values take precedence
    #[structopt(short, long)]
    pub config: Option<String>,
}

impl Opts {
    fn into_config(self) -> VqaResult<SubmissionConfig> {
        let mut config = match &self.config {
            Some(path) => SubmissionConfig::from_json_file(path)?,
            None => SubmissionConfig::default(),
        };
        if let Some(input_dir) = self.input_dir {
            config.input_dir = input_dir;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(model) = self.model {
            config.model_path = model;
        }
        if let Some(batch_size) = self.batch_size {
            config.inference.batch_size = batch_size;
        }
        if self.workers.is_some() {
            config.inference.num_workers = self.workers;
        }
        if self.require_class_names {
            config.class_names = ClassNamesPolicy::Provided;
        }
        Ok(config)
    }
}

// cargo run --release -- [INPUT_DIR] [OUTPUT_DIR]
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = Opts::from_args()
        .into_config()
        .and_then(|config| run_submission(&config));
    match result {
        Ok(summary) => info!(
            "Answered {} questions in {} batches",
            summary.num_questions, summary.num_batches
        ),
        Err(err) => {
            error!("{}", err);
            std::process::exit(1);
        }
    }
}
