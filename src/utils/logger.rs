use tracing_subscriber::{fmt, layer::SubscriberExt, Layer, util::SubscriberInitExt, EnvFilter};

pub fn init_cli_logger(verbose: bool) {
    install(verbose, false);
}

/// 結構化日誌，一行一個 JSON 物件
pub fn init_json_logger() {
    install(false, true);
}

// RUST_LOG 優先，否則用預設值
fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "secret_santa=debug,info"
    } else {
        "secret_santa=info"
    }
}

fn install(verbose: bool, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    // 日誌寫到 stderr，stdout 只留給抽籤結果
    let base = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let layer = if json {
        base.json().boxed()
    } else {
        base.compact().boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_crate() {
        assert_eq!(default_directives(true), "secret_santa=debug,info");
        assert_eq!(default_directives(false), "secret_santa=info");
    }

    #[test]
    fn test_default_directives_parse() {
        for verbose in [true, false] {
            assert!(default_directives(verbose)
                .parse::<EnvFilter>()
                .is_ok());
        }
    }
}
