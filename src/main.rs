use std::env::args_os;

use grayscale_converter::CLIParser;
use grayscale_converter::image_pipeline::GrayscalePipeline;
use grayscale_converter::logger;

use tracing::level_filters::LevelFilter;
use tracing::{error, info};

fn main() -> anyhow::Result<()> {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());

    logger::init(if arguments.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    });

    info!("Starting grayscale converter...");

    let config = arguments.conversion_config();
    let pipeline = GrayscalePipeline::new(config);

    info!("Method: {}", pipeline.config().method);
    if let Some(other) = pipeline.config().compare_with {
        info!("Comparing against: {}", other);
    }
    info!("Compression: {:?}", pipeline.config().compression);

    match pipeline.convert_file(&arguments.input_file, &arguments.output_file) {
        Ok(_) => info!("Conversion successful!"),
        Err(e) => {
            error!("Conversion failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
