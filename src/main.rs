// Command line front end for KYC field extraction

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use kyc_extract::{
    extract_fields,
    models::{DocumentType, KycReport},
    processing::{classifier::describe, ocr::default_recognizer, DocumentClassifier, FixedClassifier},
    AppConfig, KycError, KycProcessor, NOT_FOUND,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DocTypeArg {
    Pan,
    Aadhar,
}

impl From<DocTypeArg> for DocumentType {
    fn from(arg: DocTypeArg) -> Self {
        match arg {
            DocTypeArg::Pan => DocumentType::Pan,
            DocTypeArg::Aadhar => DocumentType::Aadhar,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "kyc-extract", about = "Extract identity fields from PAN and Aadhar cards")]
struct Cli {
    /// Card image, or an OCR text file with --text ("-" reads stdin)
    input: PathBuf,

    /// Document type of the card
    #[arg(short, long, value_enum)]
    doc_type: DocTypeArg,

    /// Treat INPUT as already recognized text instead of an image
    #[arg(long)]
    text: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Also print the raw OCR text
    #[arg(long)]
    show_raw: bool,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();
}

fn read_text_input(path: &Path) -> Result<String, KycError> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn build_report(cli: &Cli, config: &AppConfig) -> Result<KycReport, KycError> {
    let document_type = DocumentType::from(cli.doc_type);
    let classifier = FixedClassifier::for_document(document_type);

    if cli.text {
        let raw_text = read_text_input(&cli.input)?;
        if raw_text.trim().is_empty() {
            return Err(KycError::NoTextDetected);
        }
        let fields = extract_fields(document_type, &raw_text, &config.extraction);
        return Ok(KycReport {
            classification: classifier.classify(&cli.input)?,
            document_type: Some(document_type),
            raw_text,
            fields: Some(fields),
        });
    }

    let recognizer = default_recognizer(config)?;
    let processor = KycProcessor::with_settings(classifier, recognizer, config.extraction.clone());
    processor.process(&cli.input)
}

fn print_report(report: &KycReport, show_raw: bool) {
    println!("Document Type: {}", describe(&report.classification));
    println!("\nExtracted Information:");

    match &report.fields {
        Some(fields) => {
            for (field, value) in fields.iter() {
                let shown = if value == NOT_FOUND { "Could not extract." } else { value };
                println!("  {}: {}", field, shown);
            }
        }
        None => println!("  Unsupported document type, nothing extracted."),
    }

    if show_raw {
        println!("\nRaw OCR Text:\n{}", report.raw_text);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => match AppConfig::from_file(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::FAILURE;
            }
        },
        None => AppConfig::default(),
    };

    match build_report(&cli, &config) {
        Ok(report) => {
            if cli.json {
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error: {}", err);
                        return ExitCode::FAILURE;
                    }
                }
            } else {
                print_report(&report, cli.show_raw);
            }
            ExitCode::SUCCESS
        }
        Err(KycError::NoTextDetected) => {
            eprintln!("OCR could not detect any text. The image may be blurry or of low quality.");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
