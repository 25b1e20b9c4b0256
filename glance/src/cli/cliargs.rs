use super::{ParseError, Triple};
use getopts::Options;
use std::error::Error;
use std::fmt;
use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CliArgs {
    pub in_path: PathBuf,
    pub in_is_dir: bool,

    pub out_path: PathBuf,

    pub negative: bool,
    pub log: bool,
    pub gamma: Option<f32>,
    pub threshold: Option<Triple>,
    pub equalize: bool,
    pub dft: bool,
    pub idft: bool,
    pub rescale: bool,
}

impl CliArgs {
    fn usage(program: &str, opts: Options) -> String {
        let brief = format!("Usage: {} -i FILE [options]", program);
        format!("{}", opts.usage(&brief))
    }

    pub fn new() -> Result<Self, CliError> {
        Self::from_cli()
    }

    fn from_cli() -> Result<Self, CliError> {
        let args: Vec<String> = std::env::args().collect();
        let program = &args[0];

        let mut opts = Options::new();
        opts.reqopt(
            "i",
            "ipath",
            "Input path\n\
            If input is a file, the output path is optional.\n\
            If input is a directory, the output path is required and every\n\
            .pgm inside it is processed",
            "FILE",
        );
        opts.optopt(
            "o",
            "opath",
            "Output path\n\
            If no output path is provided, it will default to the input path\
            + an .out.pgm extension",
            "FILE",
        );
        opts.optflag("n", "negative", "Invert the image");
        opts.optflag("", "log", "Stretch dark regions with the log transform");
        opts.optopt("g", "gamma", "Gamma transform value", "FLOAT");
        opts.optopt(
            "t",
            "threshold",
            "Cut the image in two at a threshold\nThe values are cutoff, low, high\nEx: 128,0,255",
            "FLOATS",
        );
        opts.optflag("e", "equalize", "Equalize the histogram");
        opts.optflag("", "dft", "Apply the naive spectral transform");
        opts.optflag("", "idft", "Apply the naive inverse spectral transform");
        opts.optflag(
            "r",
            "rescale",
            "Rescale samples to the full byte range when writing",
        );

        let matches = match opts.parse(&args[1..]) {
            Ok(m) => m,
            Err(_e) => {
                return Err(CliError::MatchError(Self::usage(program, opts)));
            }
        };

        let in_path = PathBuf::from(
            matches
                .opt_str("ipath")
                .expect("How'd this happen? ipath isn't present"),
        );
        let in_is_dir = match in_path.metadata() {
            Ok(meta) => meta.is_dir(),
            Err(e) => return Err(CliError::InPathError(e)),
        };

        let out_path = match matches.opt_str("opath").map(PathBuf::from) {
            Some(mut path) => {
                if !in_is_dir && path.is_dir() {
                    path.push(
                        in_path
                            .file_name()
                            .expect("File isn't dir but doesn't have a name. How?"),
                    );
                }
                path
            }
            None => {
                if in_is_dir {
                    return Err(CliError::OutPathError);
                } else {
                    let mut out = in_path.clone();
                    out.set_extension("out.pgm");
                    out
                }
            }
        };

        let gamma = matches.opt_get("gamma").map_err(|e| ParseError::from(e))?;
        let threshold = matches
            .opt_get("threshold")
            .map_err(|e| ParseError::from(e))?;

        Ok(Self {
            in_path,
            in_is_dir,
            out_path,

            negative: matches.opt_present("negative"),
            log: matches.opt_present("log"),
            gamma,
            threshold,
            equalize: matches.opt_present("equalize"),
            dft: matches.opt_present("dft"),
            idft: matches.opt_present("idft"),
            rescale: matches.opt_present("rescale"),
        })
    }
}

#[derive(Debug)]
pub enum CliError {
    InPathError(IoError),
    OutPathError,
    MatchError(String),
    ParseError(ParseError),
}

impl Error for CliError {}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CliError::InPathError(ioerr) => write!(f, "Failed to open input path: {}", ioerr),
            CliError::OutPathError => write!(
                f,
                "An output path is required if the input path is a directory\n\
                If you want to output in the current directory, use '.' as the out path"
            ),
            CliError::MatchError(usage) => write!(f, "{}", usage),
            CliError::ParseError(err) => err.fmt(f),
        }
    }
}

impl From<ParseError> for CliError {
    fn from(frm: ParseError) -> Self {
        CliError::ParseError(frm)
    }
}
