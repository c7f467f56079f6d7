use std::path::PathBuf;

use clap::Parser;
use taskflow_core::{DateLocale, Route};

#[derive(Debug, Parser)]
#[command(name = "taskflow", about = "TaskFlow project boards in the terminal")]
pub struct Config {
    /// Route to open at startup: /, /dashboard, /projects or /projects/<id>
    #[arg(long, env = "TASKFLOW_ROUTE", default_value = "/")]
    pub route: Route,

    /// Locale used to display due dates (en-US, en-GB, de-DE, iso)
    #[arg(long, env = "TASKFLOW_LOCALE", default_value = "en-US")]
    pub locale: DateLocale,

    /// Write logs to this file. Logs are discarded when unset, since the
    /// terminal belongs to the UI.
    #[arg(long, env = "TASKFLOW_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the data behind the startup route as JSON and exit
    #[arg(long)]
    pub dump_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["taskflow"]).unwrap();
        assert_eq!(config.route, Route::Landing);
        assert_eq!(config.locale, DateLocale::EnUs);
        assert!(!config.dump_json);
    }

    #[test]
    fn parses_route_and_locale() {
        let config = Config::try_parse_from([
            "taskflow",
            "--route",
            "/projects/2",
            "--locale",
            "de-DE",
            "--dump-json",
        ])
        .unwrap();
        assert_eq!(config.route, Route::ProjectDetail(2));
        assert_eq!(config.locale, DateLocale::De);
        assert!(config.dump_json);
    }

    #[test]
    fn unknown_route_is_accepted_as_not_found() {
        let config = Config::try_parse_from(["taskflow", "--route", "/settings"]).unwrap();
        assert_eq!(config.route, Route::NotFound("/settings".into()));
    }

    #[test]
    fn unknown_locale_is_rejected() {
        assert!(Config::try_parse_from(["taskflow", "--locale", "xx"]).is_err());
    }
}
