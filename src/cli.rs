use crate::image_pipeline::{ConversionConfig, ConversionMethod, TiffCompression};
use clap::{
    arg, crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, ArgMatches,
    Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

/// Predictor tag value passed to the writer when `--predictor` is set.
const HORIZONTAL_PREDICTOR: u16 = 2;

#[derive(Debug)]
pub struct Arguments {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub method: ConversionMethod,
    pub compare_with: Option<ConversionMethod>,
    pub compression: TiffCompression,
    pub predictor: bool,
    pub parallel: bool,
    pub validate_dimensions: bool,
    pub verbose: bool,
}

impl Arguments {
    pub fn conversion_config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .method(self.method)
            .compare_with(self.compare_with)
            .compression(self.compression)
            .predictor(self.predictor.then_some(HORIZONTAL_PREDICTOR))
            .parallel(self.parallel)
            .validate_dimensions(self.validate_dimensions)
            .build()
    }
}

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        command
            .arg(Self::create_input_file_argument())
            .arg(Self::create_output_file_argument())
            .arg(Self::create_method_argument())
            .arg(Self::create_compare_with_argument())
            .arg(Self::create_compression_argument())
            .arg(Self::create_flag("predictor", "Apply horizontal differencing before compression"))
            .arg(Self::create_flag("parallel", "Convert pixels on all available cores"))
            .arg(Self::create_flag("no_validate", "Accept images with a zero dimension").long("no-validate"))
            .arg(Self::create_flag("verbose", "Enable debug logging").short('v'))
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
    }

    fn create_input_file_argument() -> Arg {
        Arg::new("input_file")
            .help("Path to JPEG input file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_file_argument() -> Arg {
        Arg::new("output_file")
            .help("Path to TIFF output file")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_method_argument() -> Arg {
        arg!(method: -m --method <METHOD> "Grayscale conversion method")
            .default_value(ConversionMethod::default().name())
            .value_parser(value_parser!(ConversionMethod))
    }

    fn create_compare_with_argument() -> Arg {
        arg!(compare_with: --"compare-with" <METHOD> "Mark pixels where this method agrees with --method")
            .required(false)
            .value_parser(value_parser!(ConversionMethod))
    }

    fn create_compression_argument() -> Arg {
        arg!(compression: -c --compression <COMPRESSION> "TIFF compression")
            .default_value("none")
            .value_parser(value_parser!(TiffCompression))
    }

    fn create_flag(id: &'static str, help: &'static str) -> Arg {
        Arg::new(id).long(id).help(help).action(ArgAction::SetTrue)
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_file: Self::extract_path_argument(matches, "input_file"),
            output_file: Self::extract_path_argument(matches, "output_file"),
            method: Self::extract_method_argument(matches),
            compare_with: matches.get_one::<ConversionMethod>("compare_with").copied(),
            compression: Self::extract_compression_argument(matches),
            predictor: matches.get_flag("predictor"),
            parallel: matches.get_flag("parallel"),
            validate_dimensions: !matches.get_flag("no_validate"),
            verbose: matches.get_flag("verbose"),
        }
    }

    fn extract_path_argument(matches: &ArgMatches, id: &str) -> PathBuf {
        matches
            .get_one::<PathBuf>(id)
            .unwrap_or_else(|| panic!("Required argument {} not provided", id))
            .clone()
    }

    fn extract_method_argument(matches: &ArgMatches) -> ConversionMethod {
        matches
            .get_one::<ConversionMethod>("method")
            .copied()
            .expect("Conversion method must be provided, but was unset.")
    }

    fn extract_compression_argument(matches: &ArgMatches) -> TiffCompression {
        matches
            .get_one::<TiffCompression>("compression")
            .copied()
            .expect("Compression must be provided, but was unset.")
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use clap::{error::ErrorKind, Command};

    use super::{CLIParser, ConversionMethod, TiffCompression};

    const PROGRAM_NAME_ARGUMENT: &str = "test_program_name";

    #[test]
    fn parse_required_arguments_only() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "/input_directory/photo.jpg",
            "/output_directory/photo.tiff",
        ]);
        assert_eq!(arguments.input_file.file_name().unwrap(), "photo.jpg");
        assert_eq!(arguments.output_file.file_name().unwrap(), "photo.tiff");
        assert_eq!(arguments.method, ConversionMethod::Average);
        assert_eq!(arguments.compare_with, None);
        assert_eq!(arguments.compression, TiffCompression::None);
        assert!(!arguments.predictor);
        assert!(!arguments.parallel);
        assert!(arguments.validate_dimensions);
        assert!(!arguments.verbose);
    }

    #[test]
    fn parse_method_argument() {
        let command = Command::new("test").arg(CLIParser::create_method_argument());
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-m", "LUMINANCE_BT_601"]);
        assert_eq!(
            CLIParser::extract_method_argument(&matches),
            ConversionMethod::LuminanceBt601
        );
    }

    #[test]
    fn parse_lowercase_method_argument() {
        let command = Command::new("test").arg(CLIParser::create_method_argument());
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--method", "shades_64"]);
        assert_eq!(CLIParser::extract_method_argument(&matches), ConversionMethod::Shades64);
    }

    #[test]
    fn parse_illegal_method_argument() {
        let command = Command::new("test").arg(CLIParser::create_method_argument());
        let result = command.try_get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "--method", "SEPIA"]);
        if let Err(error) = result {
            assert_eq!(error.kind(), ErrorKind::InvalidValue);
        } else {
            panic!("Illegal value for method not detected");
        }
    }

    #[test]
    fn parse_compression_argument() {
        let command = Command::new("test").arg(CLIParser::create_compression_argument());
        let matches = command.get_matches_from(vec![PROGRAM_NAME_ARGUMENT, "-c", "deflate-best"]);
        assert_eq!(
            CLIParser::extract_compression_argument(&matches),
            TiffCompression::DeflateBest
        );
    }

    #[test]
    fn parse_all_arguments() {
        let mut cli_parser = CLIParser::default();
        let arguments = cli_parser.parse(vec![
            PROGRAM_NAME_ARGUMENT,
            "in.jpg",
            "out.tiff",
            "-m",
            "FULL_GREEN",
            "--compare-with",
            "DESATURATION",
            "-c",
            "lzw",
            "--predictor",
            "--parallel",
            "--no-validate",
            "-v",
        ]);
        assert_eq!(arguments.method, ConversionMethod::FullGreen);
        assert_eq!(arguments.compare_with, Some(ConversionMethod::Desaturation));

        let config = arguments.conversion_config();
        assert_eq!(config.method, ConversionMethod::FullGreen);
        assert_eq!(config.compare_with, Some(ConversionMethod::Desaturation));
        assert_eq!(config.compression, TiffCompression::Lzw);
        assert_eq!(config.predictor, Some(2));
        assert!(config.parallel);
        assert!(!config.validate_dimensions);
        assert!(arguments.verbose);
    }
}
