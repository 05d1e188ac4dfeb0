/// Log level picked with `--verbosity 1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Dependencies that are only worth hearing from at this level or above.
const QUIET_TARGETS: [(&str, Verbosity); 3] = [
    ("actix_server", Verbosity::Debug),
    ("hyper_util", Verbosity::Trace),
    ("reqwest", Verbosity::Debug),
];

impl Verbosity {
    fn level(&self) -> &'static str {
        match self {
            Verbosity::Error => "error",
            Verbosity::Warn => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }

    /// `EnvFilter` directive for this verbosity.
    pub fn directive(&self) -> String {
        let mut directive = self.level().to_string();
        for (target, threshold) in QUIET_TARGETS {
            if *self < threshold {
                let level = (*self).min(Verbosity::Warn).level();
                directive.push_str(&format!(",{target}={level}"));
            }
        }
        directive
    }
}

pub fn verbosity_parser(s: &str) -> Result<Verbosity, String> {
    let level = s.parse::<u8>().map_err(|err| err.to_string())?;

    match level {
        1 => Ok(Verbosity::Error),
        2 => Ok(Verbosity::Warn),
        3 => Ok(Verbosity::Info),
        4 => Ok(Verbosity::Debug),
        5 => Ok(Verbosity::Trace),
        _ => Err(format!("verbosity must be between 1 and 5, got {level}")),
    }
}
