use std::io::Write;

use log::LevelFilter;

/// Maps `-q` / `-v` counts onto a level. Warnings are shown by default.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs the stderr logger. `RUST_LOG` still wins over `level`.
pub fn init(level: LevelFilter) {
    let show_target = level >= LevelFilter::Debug;
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level).parse_default_env();
    builder.format(move |buf, record| {
        if show_target {
            writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args())
        } else {
            writeln!(buf, "[{}] {}", record.level(), record.args())
        }
    });
    // A second init (tests) is harmless.
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false), LevelFilter::Warn);
        assert_eq!(level_from_flags(1, false), LevelFilter::Info);
        assert_eq!(level_from_flags(2, false), LevelFilter::Debug);
        assert_eq!(level_from_flags(5, false), LevelFilter::Trace);
        assert_eq!(level_from_flags(3, true), LevelFilter::Error);
    }
}
