use std::env;

/// Runtime options for the harness binary.
#[derive(Clone, Debug)]
pub struct HarnessOptions {
    /// Algorithm name handed to the engine unparsed; the engine owns
    /// validation of the selector.
    pub algorithm: String,
    /// Run the animated entry point and report every frame.
    pub animate: bool,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            algorithm: "naive".to_string(),
            animate: false,
            verbose: false,
        }
    }
}

impl HarnessOptions {
    pub fn from_args() -> Result<Self, String> {
        Self::parse(env::args().skip(1))
    }

    fn parse(args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut options = Self::default();
        let mut args = args.peekable();

        while let Some(arg) = args.next() {
            if arg == "--help" || arg == "-h" {
                return Err(Self::usage().to_string());
            }

            let Some(name) = arg.strip_prefix("--") else {
                return Err(format!("Unexpected argument: {arg}\n\n{}", Self::usage()));
            };

            match name {
                "algorithm" => {
                    options.algorithm = args
                        .next()
                        .ok_or_else(|| "Missing value for --algorithm".to_string())?;
                }
                "animate" => options.animate = true,
                "verbose" => options.verbose = true,
                _ => {
                    return Err(format!("Unknown option: --{name}\n\n{}", Self::usage()));
                }
            }
        }

        Ok(options)
    }

    pub fn usage() -> &'static str {
        concat!(
            "Usage:\n",
            "  route-sweep [options] < points.json\n\n",
            "Reads a JSON array of {\"x\": number, \"y\": number} points from stdin;\n",
            "the first point is the origin, the rest are destinations.\n\n",
            "Options:\n",
            "  --algorithm <naive|closest>   (default: naive)\n",
            "  --animate\n",
            "  --verbose\n",
            "  --help\n",
            "\n",
            "Examples:\n",
            "  route-sweep --algorithm closest < points.json\n",
            "  route-sweep --animate --verbose < points.json\n",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<HarnessOptions, String> {
        HarnessOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_apply_without_args() {
        let options = parse(&[]).unwrap();
        assert_eq!(options.algorithm, "naive");
        assert!(!options.animate);
        assert!(!options.verbose);
    }

    #[test]
    fn flags_are_recognized() {
        let options = parse(&["--algorithm", "closest", "--animate", "--verbose"]).unwrap();
        assert_eq!(options.algorithm, "closest");
        assert!(options.animate);
        assert!(options.verbose);
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(parse(&["--threads", "4"]).is_err());
        assert!(parse(&["points.json"]).is_err());
    }

    #[test]
    fn missing_algorithm_value_is_rejected() {
        assert!(parse(&["--algorithm"]).is_err());
    }
}
