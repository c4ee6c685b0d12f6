use clap::{App, Arg};

#[derive(Debug)]
pub struct Settings {
    pub input_file: String,
    pub interactive: bool,
    pub start_delimiter: String,
    pub end_delimiter: String,
}

impl Settings {
    pub fn parse_cmd_line() -> Self {
        Self::parse(std::env::args())
    }

    pub fn parse(args: impl Iterator<Item = String>) -> Self {
        let matches = App::new("Kraken")
            .version("1.0")
            .about("Delimited text tokenizer")
            .arg(
                Arg::with_name("input")
                    .index(1)
                    .takes_value(true)
                    .required_unless("interactive")
                    .help("Input file"),
            )
            .arg(
                Arg::with_name("interactive")
                    .short("i")
                    .long("interactive")
                    .help("Interactive mode")
                    .conflicts_with("input"),
            )
            .arg(
                Arg::with_name("start-delimiter")
                    .short("s")
                    .long("start-delimiter")
                    .takes_value(true)
                    .default_value("[")
                    .help("Start delimiter"),
            )
            .arg(
                Arg::with_name("end-delimiter")
                    .short("e")
                    .long("end-delimiter")
                    .takes_value(true)
                    .default_value("]")
                    .help("End delimiter"),
            )
            .get_matches_from(args);

        Self {
            input_file: matches
                .value_of("input")
                .map(String::from)
                .unwrap_or_else(String::new),
            interactive: matches.is_present("interactive"),
            start_delimiter: matches.value_of("start-delimiter").unwrap_or("[").to_string(),
            end_delimiter: matches.value_of("end-delimiter").unwrap_or("]").to_string(),
        }
    }
}
